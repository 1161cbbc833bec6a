// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

//! Page options

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    binder::NavigationMode,
    error::{ConfigError, from_json_object},
    link::Platform,
    sheet::QrService,
    tier::Tier,
};

/// Delay between opening the QR sheet and triggering its download.
///
/// The image element needs to be attached before the download link is activated.
pub const DEFAULT_DOWNLOAD_DELAY_MS: u64 = 50;

/// Options of a card page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    /// Tier if the URL selects none
    pub default_tier: Tier,

    /// How activated links are followed
    pub navigation_mode: NavigationMode,

    /// Renderer of QR code images
    pub qr_service: QrService,

    /// See [`DEFAULT_DOWNLOAD_DELAY_MS`]
    pub download_delay_ms: u64,

    /// User agent of the client, empty if unknown
    pub user_agent: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_tier: Tier::default(),
            navigation_mode: NavigationMode::default(),
            qr_service: QrService::default(),
            download_delay_ms: DEFAULT_DOWNLOAD_DELAY_MS,
            user_agent: String::new(),
        }
    }
}

impl PageConfig {
    /// Parse and validate options from a JSON object with camelCase keys.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the input is malformed or invalid.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = from_json_object(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the options for consistency.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the QR service is unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let QrService { endpoint, size } = &self.qr_service;
        if *size == 0 {
            return Err(ConfigError::invalid("QR code size must not be zero"));
        }
        let endpoint = Url::parse(endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(format!(
                "QR service endpoint '{endpoint}' is not a web URL"
            )));
        }
        Ok(())
    }

    /// The client platform, derived from the user agent.
    #[must_use]
    pub fn platform(&self) -> Platform {
        Platform::from_user_agent(&self.user_agent)
    }

    /// See [`DEFAULT_DOWNLOAD_DELAY_MS`]
    #[must_use]
    pub const fn download_delay(&self) -> Duration {
        Duration::from_millis(self.download_delay_ms)
    }
}
