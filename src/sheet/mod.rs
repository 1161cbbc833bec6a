// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

//! The QR code sheet

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    link::encode_uri_component,
    surface::{ControlId, OPEN_CLASS, Surface, with_control},
};

/// Element id of the QR image inside the sheet.
pub const QR_IMAGE_ID: &str = "qrImg";

/// Element id of the download link inside the sheet.
pub const QR_DOWNLOAD_LINK_ID: &str = "qrDownloadLink";

/// File name that is suggested for downloaded QR codes.
pub const QR_DOWNLOAD_FILE_NAME: &str = "qr-code.png";

/// Caption above the QR code.
pub const QR_CAPTION: &str = "Scan to open this card";

/// External service that renders QR code images
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QrService {
    /// Endpoint that accepts the `size` and `data` query parameters
    pub endpoint: String,

    /// Edge length of the square image in pixels
    pub size: u32,
}

impl QrService {
    /// The public qrserver.com API.
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.qrserver.com/v1/create-qr-code/";

    /// Default edge length.
    pub const DEFAULT_SIZE: u32 = 320;

    /// URL of the QR image that encodes `page_url`.
    ///
    /// The fragment is not encoded, it only carries client-side state.
    #[must_use]
    pub fn image_url(&self, page_url: &Url) -> String {
        let mut data = page_url.clone();
        data.set_fragment(None);
        format!(
            "{endpoint}?size={size}x{size}&data={data}",
            endpoint = self.endpoint,
            size = self.size,
            data = encode_uri_component(data.as_str()),
        )
    }
}

impl Default for QrService {
    fn default() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_owned(),
            size: Self::DEFAULT_SIZE,
        }
    }
}

// Minimal escaping for text and double-quoted attribute values.
fn html_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Markup of the sheet with the QR code of `page_url`.
#[must_use]
pub fn qr_content_html(image_url: &str, page_url: &Url) -> String {
    let image_url = html_escape(image_url);
    let page_url = html_escape(page_url.as_str());
    format!(
        r#"<div class="qrFrame elite">
  <div class="qrCaption">{QR_CAPTION}</div>
  <img id="{QR_IMAGE_ID}" src="{image_url}" alt="QR code" style="width:260px;height:260px;border-radius:14px;background:#fff;padding:10px;">
  <div class="qrUrl">{page_url}</div>
</div>
<a class="sheetBtn primary" id="{QR_DOWNLOAD_LINK_ID}" href="{image_url}" download="{QR_DOWNLOAD_FILE_NAME}">Download QR</a>
"#
    )
}

/// Visibility of the sheet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SheetState {
    /// Hidden and empty
    #[default]
    Closed,

    /// Visible with a QR code
    Open {
        /// URL of the QR image, also the download target
        image_url: String,
    },
}

/// The sheet overlay that shows the QR code
#[derive(Debug, Clone, Default)]
pub struct QrSheet {
    service: QrService,
    state: SheetState,
}

impl QrSheet {
    /// Create a closed sheet.
    #[must_use]
    pub const fn new(service: QrService) -> Self {
        Self {
            service,
            state: SheetState::Closed,
        }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &SheetState {
        &self.state
    }

    /// Check if the sheet is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, SheetState::Open { .. })
    }

    /// The download target, while the sheet is open.
    #[must_use]
    pub fn download_target(&self) -> Option<&str> {
        match &self.state {
            SheetState::Closed => None,
            SheetState::Open { image_url } => Some(image_url),
        }
    }

    /// Fill the sheet with the QR code of `page_url` and show it.
    ///
    /// Opening an already open sheet replaces its content. Returns `false`
    /// if the surface has no sheet body to fill.
    pub fn open_qr<S>(&mut self, surface: &mut S, page_url: &Url) -> bool
    where
        S: Surface + ?Sized,
    {
        let image_url = self.service.image_url(page_url);
        let html = qr_content_html(&image_url, page_url);
        if with_control(surface, ControlId::SheetBody, |body| body.set_inner_html(&html)).is_none()
        {
            return false;
        }
        for id in [ControlId::Overlay, ControlId::Sheet] {
            with_control(surface, id, |control| control.add_class(OPEN_CLASS));
        }
        tracing::debug!(%image_url, "opened QR sheet");
        self.state = SheetState::Open { image_url };
        true
    }

    /// Hide the sheet and drop its content.
    pub fn close<S>(&mut self, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        for id in [ControlId::Overlay, ControlId::Sheet] {
            with_control(surface, id, |control| control.remove_class(OPEN_CLASS));
        }
        with_control(surface, ControlId::SheetBody, |body| body.set_inner_html(""));
        if self.is_open() {
            tracing::debug!("closed QR sheet");
        }
        self.state = SheetState::Closed;
    }
}
