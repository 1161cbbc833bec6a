// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

//! Subscription tiers and their resolution from the page URL

use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};

use crate::features::{FeatureSet, features_for};

/// Name of the query/hash parameter that selects the tier.
pub const TIER_PARAM: &str = "tier";

/// A subscription tier
#[derive(
    Debug, Display, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// The entry tier
    #[default]
    #[display("starter")]
    Starter,

    /// Adds the QR code sheet and download
    #[display("pro")]
    Pro,

    /// Adds the elite call-to-action
    #[display("elite")]
    Elite,
}

impl Tier {
    /// All tiers, from lowest to highest.
    pub const ALL: [Self; 3] = [Self::Starter, Self::Pro, Self::Elite];

    /// The lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Pro => "pro",
            Self::Elite => "elite",
        }
    }

    /// The features that are enabled for this tier.
    #[must_use]
    pub const fn features(self) -> FeatureSet {
        features_for(self)
    }

    /// Text of the main chip on the card.
    #[must_use]
    pub const fn chip_label(self) -> &'static str {
        match self {
            Self::Starter => "eCard",
            Self::Pro => "Pro eCard",
            Self::Elite => "Elite eCard",
        }
    }

    /// Text of the tier badge, i.e. the uppercase name.
    #[must_use]
    pub const fn badge_label(self) -> &'static str {
        match self {
            Self::Starter => "STARTER",
            Self::Pro => "PRO",
            Self::Elite => "ELITE",
        }
    }
}

/// An unrecognized tier name
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("unknown tier '{name}'")]
pub struct UnknownTier {
    /// The rejected input, after trimming and lowercasing
    #[error(not(source))]
    pub name: String,
}

impl FromStr for Tier {
    type Err = UnknownTier;

    /// Surrounding whitespace and letter case are ignored.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let name = input.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == name)
            .ok_or(UnknownTier { name })
    }
}

fn find_tier_param(encoded: &str) -> Option<String> {
    form_urlencoded::parse(encoded.as_bytes())
        .find(|(key, _)| key == TIER_PARAM)
        .map(|(_, val)| val.into_owned())
        // An empty value counts as absent.
        .filter(|val| !val.is_empty())
}

fn tier_candidate_from_hash(hash: &str) -> Option<String> {
    let hash = hash.strip_prefix('#').unwrap_or(hash);
    if hash.is_empty() {
        return None;
    }
    let params = hash.strip_prefix('?').unwrap_or(hash);
    if let Some(val) = find_tier_param(params) {
        return Some(val);
    }
    // Compatibility quirk: `#elite` names the tier directly, but only
    // if no `tier=` assignment has been attempted.
    (!hash.contains("tier=")).then(|| hash.to_owned())
}

/// Resolve the tier from the query string and hash fragment of a page URL.
///
/// The query parameter takes precedence over the hash. The hash supports
/// the forms `#tier=<value>`, `#?tier=<value>` and a bare `#<value>`.
/// Leading `?` and `#` delimiters are optional.
///
/// Unrecognized values never fail, they just keep the `previous` tier.
#[must_use]
pub fn resolve_tier(search: Option<&str>, hash: Option<&str>, previous: Tier) -> Tier {
    let from_search = search
        .map(|search| search.strip_prefix('?').unwrap_or(search))
        .and_then(find_tier_param);
    let candidate = from_search.or_else(|| hash.and_then(tier_candidate_from_hash));
    candidate
        .and_then(|candidate| candidate.parse().ok())
        .unwrap_or(previous)
}

/// [`resolve_tier()`] for a parsed URL.
#[must_use]
pub fn resolve_tier_from_url(url: &Url, previous: Tier) -> Tier {
    resolve_tier(url.query(), url.fragment(), previous)
}

/// Outcome of re-resolving the tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierChange {
    /// The tier stayed the same.
    Unchanged(Tier),

    /// The tier switched.
    Changed {
        /// Previous tier
        from: Tier,
        /// Current tier
        to: Tier,
    },
}

impl TierChange {
    /// The tier after the change.
    #[must_use]
    pub const fn current(self) -> Tier {
        match self {
            Self::Unchanged(tier) | Self::Changed { to: tier, .. } => tier,
        }
    }

    /// Check if the tier has switched.
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// The active tier of a page.
///
/// The context is the single writer of the tier. It is updated only by
/// [`TierContext::on_hash_change()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierContext {
    tier: Tier,
}

impl TierContext {
    /// Start with the given tier.
    #[must_use]
    pub const fn new(default: Tier) -> Self {
        Self { tier: default }
    }

    /// Start with the tier selected by `url`, or `default` if none is selected.
    #[must_use]
    pub fn from_url(default: Tier, url: &Url) -> Self {
        Self::new(resolve_tier_from_url(url, default))
    }

    /// The active tier.
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    /// Re-resolve the tier after the hash of the page URL changed.
    pub fn on_hash_change(&mut self, url: &Url) -> TierChange {
        let from = self.tier;
        let to = resolve_tier_from_url(url, from);
        if from == to {
            return TierChange::Unchanged(to);
        }
        tracing::debug!(%from, %to, "tier changed");
        self.tier = to;
        TierChange::Changed { from, to }
    }
}

impl Default for TierContext {
    fn default() -> Self {
        Self::new(Tier::default())
    }
}

#[cfg(test)]
mod tests;
