//! Icon names and raster icon images.

use std::fmt;

use image::RgbaImage;

use crate::error::ExportError;

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// ============================================================================
// IconName
// ============================================================================

/// Identifier of an icon in a catalog, e.g. `heart.fill`.
///
/// The name doubles as the export subdirectory, so it must be a single,
/// non-special path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconName(String);

impl IconName {
    /// Validates and wraps a name.
    pub fn new(name: impl Into<String>) -> Result<Self, ExportError> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("name is empty")
        } else if name == "." || name == ".." {
            Some("name is a relative path segment")
        } else if name.contains(['/', '\\']) {
            Some("name contains a path separator")
        } else if name.contains('\0') {
            Some("name contains a NUL byte")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ExportError::InvalidName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IconName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// IconImage
// ============================================================================

/// A rendered icon raster with its display scale.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in RGBA format (straight alpha).
    pub data: RgbaImage,

    /// The display scale factor.
    ///
    /// - 1.0 for standard resolution (@1x)
    /// - 2.0 for retina/HiDPI (@2x)
    /// - 3.0 for @3x, etc.
    ///
    /// The "logical" size of the icon is `dimensions / scale`.
    pub scale: f32,
}

impl IconImage {
    pub fn new(data: RgbaImage, scale: f32) -> Self {
        Self { data, scale }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Returns the logical size of the icon (dimensions / scale).
    ///
    /// For a 100x100 @2x icon, the logical size is 50x50.
    pub fn logical_size(&self) -> (f32, f32) {
        (
            self.data.width() as f32 / self.scale,
            self.data.height() as f32 / self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_name_accepts_dotted_names() {
        let name = IconName::new("waveform.path.badge.minus").unwrap();
        assert_eq!(name.as_str(), "waveform.path.badge.minus");
        assert_eq!(name.to_string(), "waveform.path.badge.minus");
    }

    #[test]
    fn icon_name_rejects_path_like_names() {
        for bad in ["", ".", "..", "a/b", "a\\b", "nul\0"] {
            let err = IconName::new(bad).unwrap_err();
            assert!(
                matches!(err, ExportError::InvalidName { .. }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn icon_image_logical_size() {
        let img = IconImage::new(RgbaImage::new(100, 60), 2.0);
        assert_eq!(img.logical_size(), (50.0, 30.0));
        assert_eq!(img.dimensions(), SizePx::new(100, 60));
        assert!(!img.dimensions().is_empty());
        assert!(SizePx::new(0, 4).is_empty());
    }
}
