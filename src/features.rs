// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

//! Tier-dependent features

use serde::Serialize;

use crate::tier::Tier;

/// UI affordances that are toggled by the tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct FeatureSet {
    /// Booking button
    pub booking: bool,

    /// QR code sheet
    pub qr: bool,

    /// QR code download
    pub qr_download: bool,

    /// Elite call-to-action button
    #[serde(rename = "eliteCTA")]
    pub elite_cta: bool,
}

const STARTER: FeatureSet = FeatureSet {
    booking: true,
    qr: false,
    qr_download: false,
    elite_cta: false,
};

const PRO: FeatureSet = FeatureSet {
    booking: true,
    qr: true,
    qr_download: true,
    elite_cta: false,
};

const ELITE: FeatureSet = FeatureSet {
    booking: true,
    qr: true,
    qr_download: true,
    elite_cta: true,
};

/// Look up the features of a tier.
#[must_use]
pub const fn features_for(tier: Tier) -> FeatureSet {
    match tier {
        Tier::Starter => STARTER,
        Tier::Pro => PRO,
        Tier::Elite => ELITE,
    }
}
