// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

//! The event-driven card page
//!
//! A [`Page`] owns all state of a single page load. The host feeds it with
//! [`Event`]s from its event loop and carries out the returned [`Effect`]s.
//! Nothing blocks and nothing runs in the background: deferred work is
//! handed back to the host as [`Effect::Schedule`] and comes back later
//! as [`Event::Timer`].

use std::time::Duration;

use url::Url;

use crate::{
    binder::{Binder, Navigator, follow},
    card::CardRenderer,
    config::PageConfig,
    error::ConfigError,
    profile::BusinessProfile,
    sheet::{QR_DOWNLOAD_FILE_NAME, QrSheet},
    surface::{ControlId, Surface},
    tier::{Tier, TierContext},
};

/// Work that is deferred by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredTask {
    /// Activate the download link of the open QR sheet.
    ActivateDownload,
}

/// Something that happened on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The structural content of the document is available.
    DocumentReady,

    /// Only the hash of the page URL changed.
    HashChanged(Url),

    /// A control was activated.
    Click(ControlId),

    /// A scheduled task is due.
    Timer(DeferredTask),
}

/// Instruction for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Suppress the default action of the current event.
    PreventDefault,

    /// Report [`Event::Timer`] after the delay has elapsed.
    Schedule {
        /// Delay
        delay: Duration,
        /// What is due
        task: DeferredTask,
    },
}

/// A single card page
#[derive(Debug)]
pub struct Page<S> {
    surface: S,
    page_url: Url,
    config: PageConfig,
    tiers: TierContext,
    binder: Binder,
    card: CardRenderer,
    sheet: QrSheet,
    ready: bool,
}

impl<S> Page<S>
where
    S: Surface,
{
    /// Prepare a page that has been loaded from `page_url`.
    ///
    /// The tier is resolved immediately. Nothing is rendered before
    /// [`Event::DocumentReady`].
    #[must_use]
    pub fn new(surface: S, profile: BusinessProfile, config: PageConfig, page_url: Url) -> Self {
        let tiers = TierContext::from_url(config.default_tier, &page_url);
        let binder = Binder::new(config.navigation_mode);
        let card = CardRenderer::new(profile, config.platform());
        let sheet = QrSheet::new(config.qr_service.clone());
        Self {
            surface,
            page_url,
            config,
            tiers,
            binder,
            card,
            sheet,
            ready: false,
        }
    }

    /// [`Page::new()`] with an unparsed page URL.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `href` is not an absolute URL.
    pub fn from_href(
        surface: S,
        profile: BusinessProfile,
        config: PageConfig,
        href: &str,
    ) -> Result<Self, ConfigError> {
        let page_url = Url::parse(href).inspect_err(|err| {
            tracing::warn!(href, %err, "invalid page URL");
        })?;
        Ok(Self::new(surface, profile, config, page_url))
    }

    /// The active tier.
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tiers.tier()
    }

    /// The current page URL.
    #[must_use]
    pub const fn page_url(&self) -> &Url {
        &self.page_url
    }

    /// The rendering surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// The QR sheet.
    #[must_use]
    pub const fn sheet(&self) -> &QrSheet {
        &self.sheet
    }

    /// The binder, e.g. for checking attached handlers.
    #[must_use]
    pub const fn binder(&self) -> &Binder {
        &self.binder
    }

    /// Check if the document is ready and the triggers are wired.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Release the rendering surface.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Handle an event and return what the host needs to do.
    pub fn handle<N>(&mut self, event: Event, navigator: &mut N) -> Vec<Effect>
    where
        N: Navigator + ?Sized,
    {
        match event {
            Event::DocumentReady => {
                self.on_document_ready();
                Vec::new()
            }
            Event::HashChanged(page_url) => {
                self.on_hash_changed(page_url);
                Vec::new()
            }
            Event::Click(id) => self.on_click(id, navigator),
            Event::Timer(task) => {
                self.on_timer(task, navigator);
                Vec::new()
            }
        }
    }

    fn on_document_ready(&mut self) {
        let tier = self.tier();
        self.card.apply(&mut self.surface, &mut self.binder, tier);
        self.card.apply_tier_ui(&mut self.surface, tier);
        if !self.ready {
            tracing::debug!(%tier, "card page ready");
            self.ready = true;
        }
    }

    fn on_hash_changed(&mut self, page_url: Url) {
        self.tiers.on_hash_change(&page_url);
        self.page_url = page_url;
        let tier = self.tier();
        self.card.apply_tier_ui(&mut self.surface, tier);
        self.card.apply(&mut self.surface, &mut self.binder, tier);
    }

    fn on_click<N>(&mut self, id: ControlId, navigator: &mut N) -> Vec<Effect>
    where
        N: Navigator + ?Sized,
    {
        if !self.ready {
            tracing::trace!(%id, "ignoring click before the document is ready");
            return Vec::new();
        }
        let features = self.tier().features();
        match id {
            ControlId::QrBtn => {
                if features.qr {
                    self.sheet.open_qr(&mut self.surface, &self.page_url);
                }
                Vec::new()
            }
            ControlId::QrDownloadBtn => {
                if !features.qr_download {
                    return Vec::new();
                }
                if !self.sheet.open_qr(&mut self.surface, &self.page_url) {
                    return Vec::new();
                }
                vec![Effect::Schedule {
                    delay: self.config.download_delay(),
                    task: DeferredTask::ActivateDownload,
                }]
            }
            ControlId::CloseSheetBtn | ControlId::Overlay => {
                self.sheet.close(&mut self.surface);
                Vec::new()
            }
            ControlId::PhoneTile => {
                let Some(target) = self.card.phone_tile_target() else {
                    return Vec::new();
                };
                follow(navigator, target);
                vec![Effect::PreventDefault]
            }
            _ => {
                if self.binder.intercept(&mut self.surface, id, navigator) {
                    vec![Effect::PreventDefault]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn on_timer<N>(&self, task: DeferredTask, navigator: &mut N)
    where
        N: Navigator + ?Sized,
    {
        match task {
            DeferredTask::ActivateDownload => {
                // The sheet might have been closed in the meantime.
                let Some(target) = self.sheet.download_target() else {
                    tracing::debug!("QR sheet closed before download");
                    return;
                };
                navigator.download(target, QR_DOWNLOAD_FILE_NAME);
            }
        }
    }
}
