//! Multiply-blend tinting through an icon's alpha mask.

use std::fmt;
use std::str::FromStr;

use image::RgbaImage;
use palette::Srgb;
use resvg::tiny_skia::{BlendMode, Mask, MaskType, Paint, Pixmap, Rect, Transform};
use serde::{Deserialize, Serialize};

use super::svg::{pixmap_to_rgba_image, rgba_image_to_pixmap};
use crate::error::ExportError;
use crate::icon::IconImage;

// ============================================================================
// TintColor
// ============================================================================

/// Solid fill color used by [`tint`].
///
/// Serializes as a `#rrggbb` hex string (or `#rrggbbaa` when not opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TintColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl TintColor {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for TintColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for TintColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for TintColor {
    type Err = ExportError;

    /// Parses `white`, `black`, `#rgb`, `#rrggbb` or `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            _ => {}
        }

        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || ExportError::InvalidColor(s.to_string());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        // palette handles 3 and 6 digit forms; the alpha byte is split off here
        let (rgb, alpha) = match hex.len() {
            8 => {
                let a = u8::from_str_radix(&hex[6..], 16).map_err(|_| invalid())?;
                (&hex[..6], a)
            }
            3 | 6 => (hex, 255),
            _ => return Err(invalid()),
        };

        let color = Srgb::<u8>::from_str(rgb).map_err(|_| invalid())?;
        Ok(Self::rgba(color.red, color.green, color.blue, alpha))
    }
}

impl TryFrom<String> for TintColor {
    type Error = ExportError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TintColor> for String {
    fn from(color: TintColor) -> Self {
        color.to_string()
    }
}

// ============================================================================
// Tinting
// ============================================================================

/// Tints an icon, falling back to the untinted icon if the off-screen
/// surface cannot be set up.
pub fn tint(icon: &IconImage, color: TintColor) -> IconImage {
    match try_tint(&icon.data, color) {
        Some(data) => IconImage::new(data, icon.scale),
        None => {
            tracing::debug!(
                width = icon.data.width(),
                height = icon.data.height(),
                "tint surface unavailable, keeping untinted image"
            );
            icon.clone()
        }
    }
}

/// Fills `color` through the alpha mask of `image` with a multiply blend.
///
/// The fill lands on a fresh transparent surface of the same size, so
/// opaque mask pixels take the fill color, partially covered pixels take it
/// at reduced alpha, and pixels outside the mask stay fully transparent.
///
/// Returns `None` when the image is zero-sized.
pub fn try_tint(image: &RgbaImage, color: TintColor) -> Option<RgbaImage> {
    let source = rgba_image_to_pixmap(image)?;
    let mask = Mask::from_pixmap(source.as_ref(), MaskType::Alpha);

    let mut surface = Pixmap::new(image.width(), image.height())?;
    let rect = Rect::from_xywh(0.0, 0.0, image.width() as f32, image.height() as f32)?;

    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.blend_mode = BlendMode::Multiply;
    paint.anti_alias = false;

    surface.fill_rect(rect, &paint, Transform::identity(), Some(&mask));

    Some(pixmap_to_rgba_image(&surface))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// Left half opaque red, right half transparent.
    fn half_red(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn white_tint_fills_mask_and_keeps_transparency() {
        let src = half_red(8, 4);
        let tinted = try_tint(&src, TintColor::WHITE).unwrap();

        assert_eq!(tinted.dimensions(), src.dimensions());
        for (x, y, pixel) in tinted.enumerate_pixels() {
            if x < 4 {
                assert_eq!(pixel.0, [255, 255, 255, 255], "({x}, {y}) should be white");
            } else {
                assert_eq!(pixel[3], 0, "({x}, {y}) should stay transparent");
            }
        }
    }

    #[test]
    fn tint_preserves_orientation() {
        // Opaque top row only; a flipped surface would tint the bottom row.
        let src = RgbaImage::from_fn(4, 4, |_, y| {
            if y == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        let tinted = try_tint(&src, TintColor::WHITE).unwrap();

        assert_eq!(tinted.get_pixel(1, 0)[3], 255);
        assert_eq!(tinted.get_pixel(1, 3)[3], 0);
    }

    #[test]
    fn tint_uses_fill_color() {
        let src = half_red(4, 4);
        let tinted = try_tint(&src, TintColor::rgb(0, 0, 255)).unwrap();
        assert_eq!(tinted.get_pixel(0, 0).0, [0, 0, 255, 255]);
    }

    #[test]
    fn partial_coverage_reduces_alpha() {
        let src = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 128]));
        let tinted = try_tint(&src, TintColor::WHITE).unwrap();

        let alpha = tinted.get_pixel(0, 0)[3];
        assert!(alpha > 0 && alpha < 255, "alpha was {alpha}");
    }

    #[test]
    fn zero_sized_image_falls_back_to_original() {
        assert!(try_tint(&RgbaImage::new(0, 0), TintColor::WHITE).is_none());

        let icon = IconImage::new(RgbaImage::new(0, 0), 2.0);
        assert_eq!(tint(&icon, TintColor::WHITE), icon);
    }

    #[test]
    fn tint_keeps_scale() {
        let icon = IconImage::new(half_red(4, 4), 3.0);
        assert_eq!(tint(&icon, TintColor::WHITE).scale, 3.0);
    }

    #[test]
    fn parse_tint_colors() {
        assert_eq!("white".parse::<TintColor>().unwrap(), TintColor::WHITE);
        assert_eq!("#fff".parse::<TintColor>().unwrap(), TintColor::WHITE);
        assert_eq!(
            "#ff8000".parse::<TintColor>().unwrap(),
            TintColor::rgb(255, 128, 0)
        );
        assert_eq!(
            "00000080".parse::<TintColor>().unwrap(),
            TintColor::rgba(0, 0, 0, 128)
        );
        assert!("#12345".parse::<TintColor>().is_err());
        assert!("#gggggg".parse::<TintColor>().is_err());
    }

    #[test]
    fn only_one_leading_hash_is_accepted() {
        assert!("##fff".parse::<TintColor>().is_err());
        assert!("##ffffff".parse::<TintColor>().is_err());
        assert!("#ffffff+f".parse::<TintColor>().is_err());
        assert_eq!("ffffff".parse::<TintColor>().unwrap(), TintColor::WHITE);
    }

    #[test]
    fn tint_color_serializes_as_hex() {
        let json = serde_json::to_string(&TintColor::rgb(255, 128, 0)).unwrap();
        assert_eq!(json, "\"#ff8000\"");

        let back: TintColor = serde_json::from_str("\"#FFFFFF\"").unwrap();
        assert_eq!(back, TintColor::WHITE);
    }
}
