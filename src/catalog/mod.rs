//! Icon catalogs.
//!
//! A catalog maps an [`IconName`] to SVG content. The exporter only talks to
//! the [`IconCatalog`] trait, so the same pass can run against the embedded
//! symbols, a directory of SVG files, emoji, or a stack of those.

pub mod builtin;

use std::fs;
use std::io;
use std::path::PathBuf;

pub use builtin::{BuiltinCatalog, SYMBOLS};

use crate::error::ExportError;
use crate::icon::IconName;
use crate::raster::SvgSource;

// ============================================================================
// IconCatalog Trait
// ============================================================================

/// Resolves icon names to SVG sources.
pub trait IconCatalog {
    /// Looks up `name`.
    ///
    /// Implementations return [`ExportError::UnknownIcon`] when they do not
    /// know the name, so that [`LayeredCatalog`] can fall through.
    fn resolve(&self, name: &IconName) -> Result<SvgSource, ExportError>;
}

impl<C: IconCatalog + ?Sized> IconCatalog for &C {
    fn resolve(&self, name: &IconName) -> Result<SvgSource, ExportError> {
        (**self).resolve(name)
    }
}

impl<C: IconCatalog + ?Sized> IconCatalog for Box<C> {
    fn resolve(&self, name: &IconName) -> Result<SvgSource, ExportError> {
        (**self).resolve(name)
    }
}

// ============================================================================
// DirectoryCatalog
// ============================================================================

/// Resolves `<root>/<name>.svg` from disk.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, name: &IconName) -> PathBuf {
        self.root.join(format!("{name}.svg"))
    }
}

impl IconCatalog for DirectoryCatalog {
    fn resolve(&self, name: &IconName) -> Result<SvgSource, ExportError> {
        let path = self.path_for(name);
        match fs::read_to_string(&path) {
            Ok(svg) => Ok(SvgSource::Raw(svg)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ExportError::UnknownIcon {
                name: name.to_string(),
            }),
            Err(source) => Err(ExportError::ReadSource { path, source }),
        }
    }
}

// ============================================================================
// EmojiCatalog
// ============================================================================

/// Resolves emoji characters through Twemoji.
#[cfg(feature = "twemoji")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiCatalog;

#[cfg(feature = "twemoji")]
impl IconCatalog for EmojiCatalog {
    fn resolve(&self, name: &IconName) -> Result<SvgSource, ExportError> {
        SvgSource::from_emoji(name.as_str()).ok_or_else(|| ExportError::UnknownIcon {
            name: name.to_string(),
        })
    }
}

// ============================================================================
// LayeredCatalog
// ============================================================================

/// Tries each catalog in order; the first one that knows the name wins.
///
/// Errors other than [`ExportError::UnknownIcon`] stop the search.
#[derive(Default)]
pub struct LayeredCatalog {
    layers: Vec<Box<dyn IconCatalog>>,
}

impl LayeredCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a catalog with lower priority than those already added.
    pub fn with(mut self, catalog: impl IconCatalog + 'static) -> Self {
        self.layers.push(Box::new(catalog));
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl IconCatalog for LayeredCatalog {
    fn resolve(&self, name: &IconName) -> Result<SvgSource, ExportError> {
        for layer in &self.layers {
            match layer.resolve(name) {
                Err(ExportError::UnknownIcon { .. }) => continue,
                other => return other,
            }
        }
        Err(ExportError::UnknownIcon {
            name: name.to_string(),
        })
    }
}
