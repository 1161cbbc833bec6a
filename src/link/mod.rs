// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

//! Normalization of contact links

use std::sync::LazyLock;

use percent_encoding::utf8_percent_encode;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::profile::is_placeholder;

pub(crate) mod encoding {
    use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

    /// Characters that are escaped by JavaScript's `encodeURIComponent()`.
    pub(crate) const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
        .remove(b'-')
        .remove(b'_')
        .remove(b'.')
        .remove(b'!')
        .remove(b'~')
        .remove(b'*')
        .remove(b'\'')
        .remove(b'(')
        .remove(b')');
}

static WEB_SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());

static SCHEME_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z][a-z0-9+.-]*:").unwrap());

// A `host:port` address looks like a scheme prefix followed by digits.
static PORT_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:[/?#]|$)").unwrap());

static IOS_USER_AGENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)iPhone|iPad|iPod").unwrap());

/// Scheme that is prepended to web addresses without a scheme.
pub const DEFAULT_WEB_SCHEME: &str = "https://";

/// Client platform, as far as link building is concerned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iPhone, iPad or iPod
    Ios,

    /// Anything else
    #[default]
    Other,
}

impl Platform {
    /// Detect the platform from a user agent string.
    #[must_use]
    pub fn from_user_agent(user_agent: &str) -> Self {
        if IOS_USER_AGENT_REGEX.is_match(user_agent) {
            Self::Ios
        } else {
            Self::Other
        }
    }

    /// Separator between the number and the query of an `sms:` link.
    #[must_use]
    pub const fn sms_body_separator(self) -> char {
        match self {
            Self::Ios => '&',
            Self::Other => '?',
        }
    }
}

/// Percent-encode a string like JavaScript's `encodeURIComponent()`.
#[must_use]
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, encoding::URI_COMPONENT).to_string()
}

/// Check for an `http://` or `https://` prefix, ignoring case.
#[must_use]
pub fn is_web_url(href: &str) -> bool {
    WEB_SCHEME_REGEX.is_match(href)
}

fn has_foreign_scheme(address: &str) -> bool {
    SCHEME_PREFIX_REGEX
        .find(address)
        .is_some_and(|scheme| !PORT_PREFIX_REGEX.is_match(&address[scheme.end()..]))
}

/// Normalize a web address.
///
/// Returns an empty string for unset or placeholder input. Addresses without
/// an `http(s)://` scheme get `https://` prepended, after stripping any
/// leading slashes. Addresses with any other scheme, including malformed
/// `http(s):` prefixes, are rejected with an empty string.
#[must_use]
pub fn normalize_url(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|raw| !is_placeholder(raw)) else {
        return String::new();
    };
    let trimmed = raw.trim();
    if is_web_url(trimmed) {
        return trimmed.to_owned();
    }
    if has_foreign_scheme(trimmed) {
        tracing::debug!(address = trimmed, "rejecting non-web address");
        return String::new();
    }
    format!(
        "{DEFAULT_WEB_SCHEME}{}",
        trimmed.trim_start_matches('/')
    )
}

/// Strip the `http(s)://` scheme for display.
#[must_use]
pub fn display_url(href: &str) -> &str {
    WEB_SCHEME_REGEX
        .find(href)
        .map_or(href, |scheme| &href[scheme.end()..])
}

/// Keep only the ASCII digits of a phone number.
///
/// An empty result means that no phone number is available.
#[must_use]
pub fn normalize_phone_digits(raw: Option<&str>) -> String {
    raw.unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

/// Build a `tel:` link, or an empty string without digits.
#[must_use]
pub fn tel_link(digits: &str) -> String {
    let digits = normalize_phone_digits(Some(digits));
    if digits.is_empty() {
        return String::new();
    }
    format!("tel:{digits}")
}

/// Build an `sms:` link with an optional prefilled message body.
///
/// iOS expects the body after `&` instead of `?`.
#[must_use]
pub fn build_sms_link(digits: &str, body: Option<&str>, platform: Platform) -> String {
    let digits = normalize_phone_digits(Some(digits));
    if digits.is_empty() {
        return String::new();
    }
    match body.filter(|body| !is_placeholder(body)) {
        None => format!("sms:{digits}"),
        Some(body) => format!(
            "sms:{digits}{separator}body={encoded}",
            separator = platform.sms_body_separator(),
            encoded = encode_uri_component(body),
        ),
    }
}

/// Build a `mailto:` link, or an empty string for an unset address.
#[must_use]
pub fn mailto_link(address: Option<&str>) -> String {
    match address.filter(|address| !is_placeholder(address)) {
        Some(address) => format!("mailto:{}", address.trim()),
        None => String::new(),
    }
}

/// Kind of navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// `tel:`
    Tel,

    /// `sms:`
    Sms,

    /// `mailto:`
    Mailto,

    /// `http:` or `https:`
    Web,

    /// Anything else, including relative and `javascript:` targets
    Other,
}

impl LinkKind {
    /// Classify a navigation target by its scheme.
    #[must_use]
    pub fn of(href: &str) -> Self {
        if is_web_url(href) {
            return Self::Web;
        }
        let Some((scheme, _)) = href.split_once(':') else {
            return Self::Other;
        };
        match scheme.to_ascii_lowercase().as_str() {
            "tel" => Self::Tel,
            "sms" => Self::Sms,
            "mailto" => Self::Mailto,
            _ => Self::Other,
        }
    }

    /// Check if the target is followed in the current browsing context,
    /// e.g. by handing it over to the dialer or mail client.
    ///
    /// Only web targets open a new browsing context.
    #[must_use]
    pub const fn navigates_in_place(self) -> bool {
        !matches!(self, Self::Web)
    }
}
