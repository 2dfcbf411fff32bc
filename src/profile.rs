//! Serializable export profile.
//!
//! An [`ExportProfile`] describes one export pass in JSON so a pass can be
//! checked into a repo and re-run.
//!
//! # Example
//!
//! ```
//! use symbol_exporter::{ExportProfile, FailurePolicy};
//!
//! let profile = ExportProfile::from_json(r#"{ "symbols": ["heart.fill"], "onError": "skip" }"#).unwrap();
//! assert_eq!(profile.symbol_names(), vec!["heart.fill".to_string()]);
//!
//! let options = profile.options();
//! assert_eq!(options.on_error, FailurePolicy::Skip);
//! assert_eq!(options.point_size, 50.0);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::SYMBOLS;
use crate::error::ExportError;
use crate::exporter::{ExportOptions, FailurePolicy};
use crate::raster::TintColor;

/// JSON form of an export pass.
///
/// ```json
/// {
///   "symbols": ["heart.fill", "star.fill"],
///   "pointSize": 50.0,
///   "scale": 2.0,
///   "tint": "#ffffff",
///   "onError": "abort"
/// }
/// ```
///
/// Every field is optional. A missing `symbols` list means the built-in
/// [`SYMBOLS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExportProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_size: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint: Option<TintColor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_error: Option<FailurePolicy>,
}

impl ExportProfile {
    /// Creates an empty profile (all defaults).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = Some(symbols.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = Some(point_size);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_tint(mut self, tint: TintColor) -> Self {
        self.tint = Some(tint);
        self
    }

    pub fn with_on_error(mut self, policy: FailurePolicy) -> Self {
        self.on_error = Some(policy);
        self
    }

    /// The names to export, falling back to the built-in list.
    pub fn symbol_names(&self) -> Vec<String> {
        match &self.symbols {
            Some(symbols) => symbols.clone(),
            None => SYMBOLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Exporter options with defaults filled in.
    pub fn options(&self) -> ExportOptions {
        let defaults = ExportOptions::default();
        ExportOptions {
            point_size: self.point_size.unwrap_or(defaults.point_size),
            scale: self.scale.unwrap_or(defaults.scale),
            tint: self.tint.unwrap_or(defaults.tint),
            on_error: self.on_error.unwrap_or(defaults.on_error),
        }
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a profile file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ExportError::ReadProfile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&json)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
