// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

//! Rendering of the card data

use crate::{
    binder::{Binder, apply_href, disable, enable, open_in_new_context},
    features::FeatureSet,
    link::{
        Platform, build_sms_link, display_url, mailto_link, normalize_phone_digits,
        normalize_url, tel_link,
    },
    profile::BusinessProfile,
    surface::{ControlId, Surface, with_control},
    tier::Tier,
};

/// Label of the elite call-to-action if none is configured.
pub const DEFAULT_ELITE_CTA_LABEL: &str = "Elite Bonus";

/// The navigation targets derived from a profile
///
/// Empty strings denote missing targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardLinks {
    /// `tel:` link
    pub call: String,

    /// `sms:` link, with the prefilled body
    pub text: String,

    /// `mailto:` link
    pub email: String,

    /// Normalized website
    pub website: String,

    /// Normalized booking page
    pub booking: String,

    /// Normalized target of the elite call-to-action
    pub elite_cta: String,
}

impl CardLinks {
    /// Derive all links of a profile.
    #[must_use]
    pub fn new(profile: &BusinessProfile, platform: Platform) -> Self {
        let digits = normalize_phone_digits(profile.phone_tel.as_deref());
        Self {
            call: tel_link(&digits),
            text: build_sms_link(&digits, profile.text_prefill.as_deref(), platform),
            email: mailto_link(profile.email.as_deref()),
            website: normalize_url(profile.website.as_deref()),
            booking: normalize_url(profile.booking_link.as_deref()),
            elite_cta: normalize_url(profile.elite_cta_url.as_deref()),
        }
    }
}

fn set_text<S>(surface: &mut S, id: ControlId, text: Option<&str>)
where
    S: Surface + ?Sized,
{
    with_control(surface, id, |control| control.set_text(text.unwrap_or_default()));
}

fn set_display<S>(surface: &mut S, id: ControlId, display: &str)
where
    S: Surface + ?Sized,
{
    with_control(surface, id, |control| control.set_style("display", display));
}

const fn visible_unless(hidden: bool, visible: &'static str) -> &'static str {
    if hidden { "none" } else { visible }
}

/// Renders a profile onto a surface
#[derive(Debug, Clone)]
pub struct CardRenderer {
    profile: BusinessProfile,
    links: CardLinks,
}

impl CardRenderer {
    /// Prepare the rendering of a profile.
    #[must_use]
    pub fn new(profile: BusinessProfile, platform: Platform) -> Self {
        let links = CardLinks::new(&profile, platform);
        Self { profile, links }
    }

    /// Render texts and bind all contact actions.
    ///
    /// The whole state is recomputed on every pass, so it is safe to
    /// call this again after the tier changed.
    pub fn apply<S>(&self, surface: &mut S, binder: &mut Binder, tier: Tier)
    where
        S: Surface + ?Sized,
    {
        let features = tier.features();
        let profile = &self.profile;
        let links = &self.links;

        set_text(surface, ControlId::FullName, profile.full_name.as_deref());
        set_text(surface, ControlId::CompanyName, profile.company.as_deref());
        set_text(surface, ControlId::CompanyTag, profile.tagline.as_deref());
        set_text(surface, ControlId::Title, profile.title.as_deref());
        set_text(surface, ControlId::PhonePretty, profile.phone_pretty.as_deref());

        binder.bind(surface, ControlId::CallBtn, &links.call);
        binder.bind(surface, ControlId::TextBtn, &links.text);

        binder.bind(surface, ControlId::EmailBtn, &links.email);
        self.apply_email_link(surface, binder);

        binder.bind(surface, ControlId::SiteBtn, &links.website);
        self.apply_site_link(surface, binder);

        if features.booking {
            set_display(surface, ControlId::BookBtn, "");
            binder.bind(surface, ControlId::BookBtn, &links.booking);
        } else {
            set_display(surface, ControlId::BookBtn, "none");
        }

        self.apply_elite_cta(surface, binder, features);
        self.apply_phone_tile(surface);
    }

    fn apply_email_link<S>(&self, surface: &mut S, binder: &mut Binder)
    where
        S: Surface + ?Sized,
    {
        let address = self.profile.email.as_deref().filter(|_| !self.links.email.is_empty());
        let rendered = with_control(surface, ControlId::EmailLink, |control| {
            if let Some(address) = address {
                control.set_text(address);
                apply_href(control, &self.links.email);
            } else {
                control.set_text("");
                disable(control);
            }
        });
        if rendered.is_some() {
            binder.attach(ControlId::EmailLink);
        }
    }

    fn apply_site_link<S>(&self, surface: &mut S, binder: &mut Binder)
    where
        S: Surface + ?Sized,
    {
        let website = &self.links.website;
        let rendered = with_control(surface, ControlId::SiteLink, |control| {
            if website.is_empty() {
                control.set_text("");
                disable(control);
                return;
            }
            control.set_text(display_url(website));
            enable(control);
            control.set_attribute("href", website);
            open_in_new_context(control);
        });
        if rendered.is_some() {
            binder.attach(ControlId::SiteLink);
        }
    }

    fn apply_elite_cta<S>(&self, surface: &mut S, binder: &mut Binder, features: FeatureSet)
    where
        S: Surface + ?Sized,
    {
        let label = self
            .profile
            .elite_cta_label
            .as_deref()
            .unwrap_or(DEFAULT_ELITE_CTA_LABEL);
        set_text(surface, ControlId::EliteCtaLabel, Some(label));

        if !features.elite_cta {
            set_display(surface, ControlId::EliteCtaBtn, "none");
            return;
        }
        let url = &self.links.elite_cta;
        // Never show a dead elite control.
        set_display(surface, ControlId::EliteCtaBtn, visible_unless(url.is_empty(), ""));
        binder.bind(surface, ControlId::EliteCtaBtn, url);
    }

    fn apply_phone_tile<S>(&self, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        let has_call = !self.links.call.is_empty();
        with_control(surface, ControlId::PhoneTile, |control| {
            if has_call {
                enable(control);
            } else {
                disable(control);
            }
        });
    }

    /// Target of a click on the phone tile, if any.
    #[must_use]
    pub fn phone_tile_target(&self) -> Option<&str> {
        Some(self.links.call.as_str()).filter(|call| !call.is_empty())
    }

    /// Render the tier-dependent chrome of the card.
    pub fn apply_tier_ui<S>(&self, surface: &mut S, tier: Tier)
    where
        S: Surface + ?Sized,
    {
        let features = tier.features();
        set_text(surface, ControlId::ChipMain, Some(tier.chip_label()));
        set_text(surface, ControlId::TierBadge, Some(tier.badge_label()));
        set_display(surface, ControlId::QrHint, visible_unless(!features.qr, "block"));
        set_display(surface, ControlId::UtilityRow, visible_unless(!features.qr, "flex"));
        set_display(surface, ControlId::QrBtn, visible_unless(!features.qr, ""));
        set_display(
            surface,
            ControlId::QrDownloadBtn,
            visible_unless(!features.qr_download, ""),
        );
        // Showing the elite control depends on its target, see `apply()`.
        if !features.elite_cta {
            set_display(surface, ControlId::EliteCtaBtn, "none");
        }
    }
}
