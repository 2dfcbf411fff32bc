//! Built-in symbol table.

use super::IconCatalog;
use crate::error::ExportError;
use crate::icon::IconName;
use crate::raster::SvgSource;

/// Default export list, in export order.
pub const SYMBOLS: &[&str] = &[
    "heart.fill",
    "star.fill",
    "bolt.fill",
    "circle.fill",
    "square.fill",
    "triangle.fill",
    "checkmark",
    "xmark",
    "plus",
    "minus",
];

const HEART_FILL: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path fill="#ff3b30" d="M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z"/></svg>"##;

const STAR_FILL: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path fill="#000000" d="M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z"/></svg>"##;

const BOLT_FILL: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path fill="#000000" d="M7 2v11h3v9l7-12h-4l4-8z"/></svg>"##;

const CIRCLE_FILL: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><circle fill="#000000" cx="12" cy="12" r="10"/></svg>"##;

const SQUARE_FILL: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><rect fill="#000000" x="3" y="3" width="18" height="18" rx="2"/></svg>"##;

const TRIANGLE_FILL: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path fill="#000000" d="M12 2L22 20H2z"/></svg>"##;

const CHECKMARK: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path fill="#000000" d="M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z"/></svg>"##;

const XMARK: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path fill="#000000" d="M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"/></svg>"##;

const PLUS: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path fill="#000000" d="M19 13h-6v6h-2v-6H5v-2h6V5h2v6h6v2z"/></svg>"##;

const MINUS: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path fill="#000000" d="M19 13H5v-2h14v2z"/></svg>"##;

/// Catalog of the symbols embedded in the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Names this catalog can resolve, in [`SYMBOLS`] order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        SYMBOLS.iter().copied()
    }

    fn lookup(name: &str) -> Option<&'static str> {
        let svg = match name {
            "heart.fill" => HEART_FILL,
            "star.fill" => STAR_FILL,
            "bolt.fill" => BOLT_FILL,
            "circle.fill" => CIRCLE_FILL,
            "square.fill" => SQUARE_FILL,
            "triangle.fill" => TRIANGLE_FILL,
            "checkmark" => CHECKMARK,
            "xmark" => XMARK,
            "plus" => PLUS,
            "minus" => MINUS,
            _ => return None,
        };
        Some(svg)
    }
}

impl IconCatalog for BuiltinCatalog {
    fn resolve(&self, name: &IconName) -> Result<SvgSource, ExportError> {
        Self::lookup(name.as_str())
            .map(SvgSource::from_svg)
            .ok_or_else(|| ExportError::UnknownIcon {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::render_svg;

    #[test]
    fn every_listed_symbol_resolves_and_renders() {
        let catalog = BuiltinCatalog::new();
        for name in catalog.names() {
            let source = catalog.resolve(&IconName::new(name).unwrap()).unwrap();
            let svg = source.resolve().unwrap();
            let img = render_svg(svg, 96).unwrap_or_else(|e| panic!("{name} failed to render: {e}"));
            assert!(
                img.pixels().any(|p| p[3] == 255),
                "{name} has no opaque pixels"
            );
        }
    }

    #[test]
    fn unknown_symbol_is_an_error() {
        let err = BuiltinCatalog
            .resolve(&IconName::new("no.such.symbol").unwrap())
            .unwrap_err();
        assert!(matches!(err, ExportError::UnknownIcon { name } if name == "no.such.symbol"));
    }
}
