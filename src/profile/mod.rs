// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

//! The business profile that is shown on the card

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, from_json_object};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^REPLACE_").unwrap());

/// Check if a configured value is empty or a placeholder like `REPLACE_ME`.
///
/// Surrounding whitespace is ignored.
#[must_use]
pub fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || PLACEHOLDER_REGEX.is_match(trimmed)
}

/// Parse a configured value.
///
/// Returns the trimmed value, or `None` if it is a placeholder.
#[must_use]
pub fn field(value: impl AsRef<str>) -> Option<String> {
    let value = value.as_ref();
    (!is_placeholder(value)).then(|| value.trim().to_owned())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    // Phone numbers are sometimes configured as plain numbers.
    Number(serde_json::Number),
}

fn deserialize_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawField>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| match raw {
        RawField::Text(text) => field(text),
        RawField::Number(number) => field(number.to_string()),
    }))
}

/// Contact details of a person or company
///
/// All fields are optional. Parsing maps placeholders to `None`, so present
/// values are always trimmed and meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessProfile {
    /// Name of the person
    #[serde(deserialize_with = "deserialize_field")]
    pub full_name: Option<String>,

    /// Name of the company
    #[serde(deserialize_with = "deserialize_field")]
    pub company: Option<String>,

    /// Company tagline
    #[serde(deserialize_with = "deserialize_field")]
    pub tagline: Option<String>,

    /// Job title
    #[serde(deserialize_with = "deserialize_field")]
    pub title: Option<String>,

    /// Phone number formatted for display
    #[serde(deserialize_with = "deserialize_field")]
    pub phone_pretty: Option<String>,

    /// Phone number for dialing, may contain formatting
    #[serde(deserialize_with = "deserialize_field")]
    pub phone_tel: Option<String>,

    /// Prefilled body of text messages
    #[serde(deserialize_with = "deserialize_field")]
    pub text_prefill: Option<String>,

    /// Email address
    #[serde(deserialize_with = "deserialize_field")]
    pub email: Option<String>,

    /// Website, with or without scheme
    #[serde(deserialize_with = "deserialize_field")]
    pub website: Option<String>,

    /// Booking page, with or without scheme
    #[serde(deserialize_with = "deserialize_field")]
    pub booking_link: Option<String>,

    /// Label of the elite call-to-action
    #[serde(deserialize_with = "deserialize_field")]
    pub elite_cta_label: Option<String>,

    /// Target of the elite call-to-action, with or without scheme
    #[serde(deserialize_with = "deserialize_field")]
    pub elite_cta_url: Option<String>,
}

impl BusinessProfile {
    /// Parse a profile from a JSON object with camelCase keys.
    ///
    /// Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the input is not a JSON object
    /// with string or number values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        from_json_object(json)
    }

    /// Collect a profile from flat key/value pairs with camelCase keys.
    ///
    /// Unknown keys are ignored. Later entries replace earlier ones.
    #[must_use]
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut profile = Self::default();
        for (key, value) in entries {
            let Some(slot) = profile.slot_mut(key) else {
                tracing::trace!(key, "ignoring unknown profile key");
                continue;
            };
            *slot = field(value);
        }
        profile
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        let slot = match key {
            "fullName" => &mut self.full_name,
            "company" => &mut self.company,
            "tagline" => &mut self.tagline,
            "title" => &mut self.title,
            "phonePretty" => &mut self.phone_pretty,
            "phoneTel" => &mut self.phone_tel,
            "textPrefill" => &mut self.text_prefill,
            "email" => &mut self.email,
            "website" => &mut self.website,
            "bookingLink" => &mut self.booking_link,
            "eliteCtaLabel" => &mut self.elite_cta_label,
            "eliteCtaUrl" => &mut self.elite_cta_url,
            _ => return None,
        };
        Some(slot)
    }
}

#[cfg(test)]
mod tests;
