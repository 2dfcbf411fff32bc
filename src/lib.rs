//! symbol-exporter: render icons in dark and light styles and dump them as PNGs
//!
//! For every icon name in a list, the exporter resolves the icon in an
//! [`IconCatalog`], rasterizes it at a fixed point size and display scale,
//! and writes two files:
//!
//! - `<documents-root>/export/<name>/dark.png`: the icon as drawn
//! - `<documents-root>/export/<name>/light.png`: the icon's alpha shape
//!   filled with a tint color (white by default) using a multiply blend
//!
//! # Example
//!
//! ```no_run
//! use symbol_exporter::{BuiltinCatalog, ExportOptions, FailurePolicy, IconExporter, SYMBOLS};
//!
//! let exporter = IconExporter::new(BuiltinCatalog, "/tmp/documents").with_options(ExportOptions {
//!     on_error: FailurePolicy::Skip,
//!     ..ExportOptions::default()
//! });
//!
//! let report = exporter.export(SYMBOLS).unwrap();
//! for file in &report.written {
//!     println!("{} -> {}", file.name, file.path.display());
//! }
//! ```
//!
//! # Tinting
//!
//! [`tint`] is a pure function over rasters, usable on its own:
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use symbol_exporter::{try_tint, TintColor};
//!
//! let icon = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
//! let light = try_tint(&icon, TintColor::WHITE).unwrap();
//! assert_eq!(light.get_pixel(0, 0).0, [255, 255, 255, 255]);
//! ```

mod catalog;
mod error;
mod exporter;
mod icon;
mod profile;
mod raster;
mod style;

#[cfg(feature = "twemoji")]
pub use catalog::EmojiCatalog;
pub use catalog::{BuiltinCatalog, DirectoryCatalog, IconCatalog, LayeredCatalog, SYMBOLS};
pub use error::{ExportError, RasterError};
pub use exporter::{
    ExportOptions, ExportReport, ExportedFile, FailurePolicy, IconExporter, SkippedIcon,
    DEFAULT_POINT_SIZE, DEFAULT_SCALE, EXPORT_DIR,
};
pub use icon::{IconImage, IconName, SizePx};
pub use profile::ExportProfile;
pub use raster::{render_source, render_svg, tint, try_tint, SvgSource, TintColor};
pub use style::{IconStyle, StyledImage};
