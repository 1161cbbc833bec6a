// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

//! The rendering surface
//!
//! The card never talks to a DOM directly. It looks up the controls it
//! knows by [`ControlId`] through a [`Surface`] and manipulates them through
//! the [`Control`] capabilities. Hosts map these calls onto their real
//! elements, tests use the [`MemorySurface`].

use std::str::FromStr;

use derive_more::{Display, Error};

mod memory;

pub use self::memory::{MemoryControl, MemorySurface};

/// Attribute for the disabled state that assistive technology sees.
pub const ARIA_DISABLED: &str = "aria-disabled";

/// CSS class that makes the overlay and the sheet visible.
pub const OPEN_CLASS: &str = "open";

/// A control on the card, identified by its element id
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ControlId {
    /// Name of the person
    #[display("fullName")]
    FullName,
    /// Name of the company
    #[display("companyName")]
    CompanyName,
    /// Tagline of the company
    #[display("companyTag")]
    CompanyTag,
    /// Job title
    #[display("title")]
    Title,
    /// Display phone number
    #[display("phonePretty")]
    PhonePretty,
    /// Call button
    #[display("callBtn")]
    CallBtn,
    /// Text message button
    #[display("textBtn")]
    TextBtn,
    /// Email button
    #[display("emailBtn")]
    EmailBtn,
    /// Visible email address link
    #[display("emailLink")]
    EmailLink,
    /// Website button
    #[display("siteBtn")]
    SiteBtn,
    /// Visible website link
    #[display("siteLink")]
    SiteLink,
    /// Booking button
    #[display("bookBtn")]
    BookBtn,
    /// Elite call-to-action button
    #[display("eliteCtaBtn")]
    EliteCtaBtn,
    /// Label inside the elite call-to-action button
    #[display("eliteCtaLabel")]
    EliteCtaLabel,
    /// Tappable tile around the phone number
    #[display("phoneTile")]
    PhoneTile,
    /// Main chip that names the card edition
    #[display("chipMain")]
    ChipMain,
    /// Tier badge
    #[display("tierBadge")]
    TierBadge,
    /// Hint that a QR code is available
    #[display("qrHint")]
    QrHint,
    /// Row with the QR buttons
    #[display("utilityRow")]
    UtilityRow,
    /// Button that shows the QR code
    #[display("qrBtn")]
    QrBtn,
    /// Button that downloads the QR code
    #[display("qrDownloadBtn")]
    QrDownloadBtn,
    /// Background overlay of the sheet
    #[display("overlay")]
    Overlay,
    /// The sheet panel
    #[display("sheet")]
    Sheet,
    /// Content container of the sheet
    #[display("sheetBody")]
    SheetBody,
    /// Button that closes the sheet
    #[display("closeSheetBtn")]
    CloseSheetBtn,
}

impl ControlId {
    /// All controls of the card.
    pub const ALL: [Self; 25] = [
        Self::FullName,
        Self::CompanyName,
        Self::CompanyTag,
        Self::Title,
        Self::PhonePretty,
        Self::CallBtn,
        Self::TextBtn,
        Self::EmailBtn,
        Self::EmailLink,
        Self::SiteBtn,
        Self::SiteLink,
        Self::BookBtn,
        Self::EliteCtaBtn,
        Self::EliteCtaLabel,
        Self::PhoneTile,
        Self::ChipMain,
        Self::TierBadge,
        Self::QrHint,
        Self::UtilityRow,
        Self::QrBtn,
        Self::QrDownloadBtn,
        Self::Overlay,
        Self::Sheet,
        Self::SheetBody,
        Self::CloseSheetBtn,
    ];

    /// Check if the control is rendered as an `<a>` element on the card.
    #[must_use]
    pub const fn is_anchor(self) -> bool {
        matches!(
            self,
            Self::CallBtn
                | Self::TextBtn
                | Self::EmailBtn
                | Self::EmailLink
                | Self::SiteBtn
                | Self::SiteLink
                | Self::BookBtn
                | Self::EliteCtaBtn
        )
    }
}

/// An element id that is unknown to the card
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("unknown control '{id}'")]
pub struct UnknownControl {
    /// The rejected element id
    #[error(not(source))]
    pub id: String,
}

impl FromStr for ControlId {
    type Err = UnknownControl;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|control| control.to_string() == id)
            .ok_or_else(|| UnknownControl { id: id.to_owned() })
    }
}

/// Capabilities of a single element
pub trait Control {
    /// Check if this is a navigational `<a>` element.
    fn is_anchor(&self) -> bool;

    /// Read an attribute.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Set an attribute.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Remove an attribute if present.
    fn remove_attribute(&mut self, name: &str);

    /// Set an inline style property.
    ///
    /// An empty value removes the property.
    fn set_style(&mut self, property: &str, value: &str);

    /// Replace the text content.
    fn set_text(&mut self, text: &str);

    /// Add a CSS class if not yet present.
    fn add_class(&mut self, class: &str);

    /// Remove a CSS class if present.
    fn remove_class(&mut self, class: &str);

    /// Replace the inner markup.
    fn set_inner_html(&mut self, html: &str);
}

/// Lookup of controls by id
pub trait Surface {
    /// Find a control, or `None` if the page does not have it.
    fn control(&mut self, id: ControlId) -> Option<&mut dyn Control>;
}

/// Run `f` on a control if the surface has it.
pub(crate) fn with_control<S, R>(
    surface: &mut S,
    id: ControlId,
    f: impl FnOnce(&mut dyn Control) -> R,
) -> Option<R>
where
    S: Surface + ?Sized,
{
    let Some(control) = surface.control(id) else {
        tracing::trace!(%id, "missing control");
        return None;
    };
    Some(f(control))
}

#[cfg(test)]
mod tests;
