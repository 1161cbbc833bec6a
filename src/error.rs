// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

//! Configuration errors

use derive_more::{Display, Error, From};
use serde::de::DeserializeOwned;

/// Rejected configuration input
///
/// Rendering itself never fails. These errors only occur while parsing
/// what the embedding page supplies.
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    /// Malformed JSON.
    #[display("malformed JSON: {_0}")]
    Json(serde_json::Error),

    /// Unparseable page URL.
    #[display("invalid page URL: {_0}")]
    Url(url::ParseError),

    /// Syntactically correct, but invalid.
    #[display("invalid configuration: {_0}")]
    #[from(skip)]
    Invalid(#[error(not(source))] anyhow::Error),
}

impl ConfigError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(anyhow::Error::msg(message.into()))
    }
}

/// Parse a JSON object with named keys.
///
/// Struct deserialization would also accept a sequence of positional
/// values, which is rejected here.
pub(crate) fn from_json_object<T>(json: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(ConfigError::invalid("expected a JSON object"));
    }
    serde_json::from_value(value).map_err(Into::into)
}
