//! SVG rasterization using resvg/usvg.
//!
//! Converts between tiny-skia's premultiplied pixmaps and straight-alpha
//! `image::RgbaImage`s, which is what the rest of the crate works with.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{ColorU8, Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::RasterError;
use crate::icon::IconImage;

// ============================================================================
// SvgSource
// ============================================================================

/// SVG content resolved from a catalog.
///
/// - Raw SVG markup strings
/// - Emoji characters (when the `twemoji` feature is enabled)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgSource {
    /// Raw SVG markup string.
    Raw(String),

    /// An emoji character to be resolved via twemoji_assets at render time.
    Emoji(String),
}

impl SvgSource {
    /// Creates a source from raw SVG markup.
    pub fn from_svg(svg: impl Into<String>) -> Self {
        Self::Raw(svg.into())
    }

    /// Creates a source from an emoji character.
    ///
    /// Returns `None` if the emoji is not supported by twemoji_assets.
    #[cfg(feature = "twemoji")]
    pub fn from_emoji(emoji: &str) -> Option<Self> {
        use twemoji_assets::svg::SvgTwemojiAsset;

        SvgTwemojiAsset::from_emoji(emoji)?;
        Some(Self::Emoji(emoji.to_string()))
    }

    /// Resolves this source to SVG markup.
    pub fn resolve(&self) -> Option<&str> {
        match self {
            Self::Raw(svg) => Some(svg.as_str()),
            #[cfg(feature = "twemoji")]
            Self::Emoji(emoji) => {
                use twemoji_assets::svg::SvgTwemojiAsset;
                let asset = SvgTwemojiAsset::from_emoji(emoji)?;
                Some(asset.as_ref())
            }
            #[cfg(not(feature = "twemoji"))]
            Self::Emoji(_) => None,
        }
    }
}

impl<S: Into<String>> From<S> for SvgSource {
    fn from(s: S) -> Self {
        Self::Raw(s.into())
    }
}

// ============================================================================
// SVG Rendering
// ============================================================================

/// Renders an SVG string to an RGBA image at the specified size.
///
/// The SVG is scaled so that its larger dimension is `size` pixels,
/// preserving aspect ratio.
pub fn render_svg(svg_data: &str, size: u32) -> Result<RgbaImage, RasterError> {
    let opts = Options::default();
    let tree = Tree::from_str(svg_data, &opts)?;

    let svg_size = tree.size();
    let scale = (size as f32) / svg_size.width().max(svg_size.height());
    let width = (svg_size.width() * scale).round().max(1.0) as u32;
    let height = (svg_size.height() * scale).round().max(1.0) as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(RasterError::Surface { width, height })?;
    let transform = Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Renders an [`SvgSource`] at `point_size` logical points for a display
/// with the given `scale`.
pub fn render_source(
    source: &SvgSource,
    point_size: f32,
    scale: f32,
) -> Result<IconImage, RasterError> {
    let svg_data = source.resolve().ok_or(RasterError::Unresolved)?;
    let pixels = (point_size * scale).round().max(1.0) as u32;
    let data = render_svg(svg_data, pixels)?;
    Ok(IconImage::new(data, scale))
}

// ============================================================================
// Pixmap Conversion
// ============================================================================

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
pub(crate) fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        // tiny_skia stores premultiplied alpha
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }

    img
}

/// Converts an image::RgbaImage into a premultiplied tiny_skia Pixmap.
///
/// Returns `None` for zero-sized images.
pub(crate) fn rgba_image_to_pixmap(img: &RgbaImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(img.width(), img.height())?;

    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(img.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }

    Some(pixmap)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><circle cx="50" cy="50" r="40" fill="#ff0000"/></svg>"##;
    const WIDE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100"><rect width="200" height="100" fill="#000000"/></svg>"##;

    #[test]
    fn render_simple_svg() {
        let img = render_svg(SIMPLE_SVG, 50).expect("svg should render");
        assert_eq!(img.dimensions(), (50, 50));

        let center = img.get_pixel(25, 25);
        assert_eq!(center.0, [255, 0, 0, 255]);

        let corner = img.get_pixel(0, 0);
        assert_eq!(corner[3], 0, "outside the circle is transparent");
    }

    #[test]
    fn render_preserves_aspect_ratio() {
        let img = render_svg(WIDE_SVG, 40).unwrap();
        assert_eq!(img.dimensions(), (40, 20));
    }

    #[test]
    fn render_invalid_svg_is_an_svg_error() {
        let err = render_svg("definitely not svg", 32).unwrap_err();
        assert!(matches!(err, RasterError::Svg(_)));
    }

    #[test]
    fn render_source_applies_display_scale() {
        let icon = render_source(&SvgSource::from_svg(SIMPLE_SVG), 50.0, 2.0).unwrap();
        assert_eq!(icon.dimensions().width, 100);
        assert_eq!(icon.logical_size(), (50.0, 50.0));
    }

    #[test]
    fn pixmap_conversion_keeps_straight_alpha() {
        let img = RgbaImage::from_fn(4, 4, |x, _| {
            if x < 2 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });

        let pixmap = rgba_image_to_pixmap(&img).unwrap();
        let back = pixmap_to_rgba_image(&pixmap);
        assert_eq!(back, img);
    }

    #[test]
    fn zero_sized_image_has_no_pixmap() {
        assert!(rgba_image_to_pixmap(&RgbaImage::new(0, 8)).is_none());
    }

    #[test]
    fn svg_source_into_from_string() {
        let source: SvgSource = "<svg></svg>".into();
        assert_eq!(source.resolve(), Some("<svg></svg>"));
    }

    #[cfg(not(feature = "twemoji"))]
    #[test]
    fn emoji_source_without_feature_does_not_resolve() {
        let source = SvgSource::Emoji("🦆".into());
        assert_eq!(source.resolve(), None);
        assert!(matches!(
            render_source(&source, 50.0, 2.0),
            Err(RasterError::Unresolved)
        ));
    }

    #[cfg(feature = "twemoji")]
    #[test]
    fn svg_source_from_emoji() {
        let source = SvgSource::from_emoji("🦆").expect("Duck emoji should be supported");
        let svg = source.resolve().expect("Should resolve to SVG");
        assert!(svg.contains("<svg"), "Should be valid SVG data");
    }
}
