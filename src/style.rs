//! Style variants and styled renders of an icon.

use serde::{Deserialize, Serialize};

use crate::icon::IconImage;
use crate::raster::{tint, TintColor};

/// One of the two rendering modes applied to every icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconStyle {
    /// The base rendering, unmodified.
    Dark,
    /// The base rendering tinted through its alpha mask.
    Light,
}

impl IconStyle {
    /// Both styles, in export order.
    pub const ALL: [IconStyle; 2] = [IconStyle::Dark, IconStyle::Light];

    /// File name this style is written to.
    pub fn filename(self) -> &'static str {
        match self {
            Self::Dark => "dark.png",
            Self::Light => "light.png",
        }
    }
}

/// A rendered icon bound to exactly one [`IconStyle`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyledImage {
    pub style: IconStyle,
    pub image: IconImage,
}

impl StyledImage {
    /// Derives the `style` variant from a base rendering.
    pub fn from_base(base: &IconImage, style: IconStyle, tint_color: TintColor) -> Self {
        let image = match style {
            IconStyle::Dark => base.clone(),
            IconStyle::Light => tint(base, tint_color),
        };
        Self { style, image }
    }

    pub fn filename(&self) -> &'static str {
        self.style.filename()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn base() -> IconImage {
        IconImage::new(
            RgbaImage::from_fn(4, 4, |x, _| {
                if x < 2 {
                    Rgba([255, 0, 0, 255])
                } else {
                    Rgba([0, 0, 0, 0])
                }
            }),
            2.0,
        )
    }

    #[test]
    fn filenames() {
        assert_eq!(IconStyle::Dark.filename(), "dark.png");
        assert_eq!(IconStyle::Light.filename(), "light.png");
    }

    #[test]
    fn dark_is_unmodified() {
        let base = base();
        let dark = StyledImage::from_base(&base, IconStyle::Dark, TintColor::WHITE);
        assert_eq!(dark.image, base);
        assert_eq!(dark.filename(), "dark.png");
    }

    #[test]
    fn light_is_tinted() {
        let base = base();
        let light = StyledImage::from_base(&base, IconStyle::Light, TintColor::WHITE);
        assert_eq!(light.image.data.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(light.image.data.get_pixel(3, 0)[3], 0);
    }
}
