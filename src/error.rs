//! Error types for the export pass.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while resolving, rendering or writing icons.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The name cannot be used as a single path component.
    #[error("invalid icon name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// No catalog knows this icon.
    #[error("icon {name:?} not found in catalog")]
    UnknownIcon { name: String },

    /// The icon's SVG could not be parsed or rasterized.
    #[error("failed to render icon {name:?}")]
    Render {
        name: String,
        #[source]
        source: RasterError,
    },

    /// Point size or scale is not a finite positive number.
    #[error("invalid export options: {0}")]
    InvalidOptions(String),

    /// A catalog file could not be read.
    #[error("failed to read {path}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The export directory for an icon could not be created.
    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A PNG file could not be encoded or written.
    #[error("failed to write {path}")]
    WritePng {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A profile file could not be read.
    #[error("failed to read profile {path}")]
    ReadProfile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A profile could not be parsed.
    #[error("invalid profile")]
    Profile(#[from] serde_json::Error),

    /// A tint color string could not be parsed.
    #[error("invalid tint color {0:?}")]
    InvalidColor(String),
}

/// Why an SVG source could not be turned into pixels.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The source names something that has no SVG markup (e.g. an emoji
    /// without the `twemoji` feature).
    #[error("SVG source could not be resolved")]
    Unresolved,

    #[error("invalid SVG")]
    Svg(#[from] resvg::usvg::Error),

    #[error("cannot allocate a {width}x{height} surface")]
    Surface { width: u32, height: u32 },
}

impl ExportError {
    /// Name of the icon this error is about, if any.
    pub fn icon_name(&self) -> Option<&str> {
        match self {
            Self::InvalidName { name, .. }
            | Self::UnknownIcon { name }
            | Self::Render { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_name_is_reported_for_item_errors() {
        let err = ExportError::UnknownIcon {
            name: "heart.fill".into(),
        };
        assert_eq!(err.icon_name(), Some("heart.fill"));
        assert_eq!(err.to_string(), "icon \"heart.fill\" not found in catalog");

        let err = ExportError::InvalidOptions("scale must be positive".into());
        assert_eq!(err.icon_name(), None);
    }

    #[test]
    fn render_error_keeps_its_cause() {
        use std::error::Error as _;

        let err = ExportError::Render {
            name: "bolt.fill".into(),
            source: RasterError::Surface {
                width: 0,
                height: 0,
            },
        };
        assert_eq!(err.icon_name(), Some("bolt.fill"));
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("cannot allocate a 0x0 surface".to_string())
        );
    }
}
