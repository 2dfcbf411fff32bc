//! Raster backend: SVG rasterization and alpha-mask tinting.
//!
//! Both halves sit on resvg's tiny-skia and hand results back as
//! straight-alpha `image::RgbaImage`s wrapped in [`IconImage`](crate::IconImage).

pub mod svg;
pub mod tint;

pub use svg::{render_source, render_svg, SvgSource};
pub use tint::{tint, try_tint, TintColor};
