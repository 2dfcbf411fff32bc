//! The export pass: resolve, render both styles, write PNGs.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::catalog::IconCatalog;
use crate::error::ExportError;
use crate::icon::{IconImage, IconName};
use crate::raster::{render_source, TintColor};
use crate::style::{IconStyle, StyledImage};

/// Name of the directory created under the documents root.
pub const EXPORT_DIR: &str = "export";

/// Default logical size of rendered icons, in points.
pub const DEFAULT_POINT_SIZE: f32 = 50.0;

/// Default display scale (@2x).
pub const DEFAULT_SCALE: f32 = 2.0;

// ============================================================================
// Options
// ============================================================================

/// What to do when a single icon fails to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop the pass at the first failing icon.
    #[default]
    Abort,
    /// Record the failure and continue with the next icon.
    Skip,
}

/// Rendering and error-handling settings for an export pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Logical size of the larger icon dimension, in points.
    pub point_size: f32,
    /// Pixels per point.
    pub scale: f32,
    /// Fill color of the `Light` variant.
    pub tint: TintColor,
    pub on_error: FailurePolicy,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            point_size: DEFAULT_POINT_SIZE,
            scale: DEFAULT_SCALE,
            tint: TintColor::WHITE,
            on_error: FailurePolicy::Abort,
        }
    }
}

impl ExportOptions {
    /// Checks that point size and scale are finite and positive.
    pub fn validate(&self) -> Result<(), ExportError> {
        if !self.point_size.is_finite() || self.point_size <= 0.0 {
            return Err(ExportError::InvalidOptions(format!(
                "point size must be a positive number, got {}",
                self.point_size
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ExportError::InvalidOptions(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Report
// ============================================================================

/// A PNG written during the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub name: IconName,
    pub style: IconStyle,
    pub path: PathBuf,
}

/// An icon that was skipped under [`FailurePolicy::Skip`].
#[derive(Debug)]
pub struct SkippedIcon {
    pub name: String,
    pub error: ExportError,
}

/// Outcome of an export pass.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<ExportedFile>,
    pub skipped: Vec<SkippedIcon>,
}

impl ExportReport {
    /// True if no icon was skipped.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Number of distinct icons that were written.
    pub fn icons_exported(&self) -> usize {
        self.written
            .iter()
            .map(|f| &f.name)
            .collect::<HashSet<_>>()
            .len()
    }
}

// ============================================================================
// IconExporter
// ============================================================================

/// Runs export passes against a catalog and a documents root.
///
/// # Example
///
/// ```no_run
/// use symbol_exporter::{BuiltinCatalog, IconExporter};
///
/// let exporter = IconExporter::new(BuiltinCatalog, "/tmp/documents");
/// let report = exporter.export(["heart.fill", "star.fill"]).unwrap();
/// assert_eq!(report.written.len(), 4);
/// ```
pub struct IconExporter<C> {
    catalog: C,
    documents_root: PathBuf,
    options: ExportOptions,
}

impl<C: IconCatalog> IconExporter<C> {
    /// Creates an exporter with default options.
    pub fn new(catalog: C, documents_root: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            documents_root: documents_root.into(),
            options: ExportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// `<documents-root>/export/<name>/`
    pub fn target_dir(&self, name: &IconName) -> PathBuf {
        self.documents_root.join(EXPORT_DIR).join(name.as_str())
    }

    /// Resolves and rasterizes `name` at the configured size.
    pub fn render_base(&self, name: &IconName) -> Result<IconImage, ExportError> {
        let source = self.catalog.resolve(name)?;
        render_source(&source, self.options.point_size, self.options.scale).map_err(|source| {
            ExportError::Render {
                name: name.to_string(),
                source,
            }
        })
    }

    /// Renders every [`IconStyle`] of `name`, in [`IconStyle::ALL`] order.
    pub fn render_styles(&self, name: &IconName) -> Result<Vec<StyledImage>, ExportError> {
        let base = self.render_base(name)?;
        Ok(IconStyle::ALL
            .iter()
            .map(|&style| StyledImage::from_base(&base, style, self.options.tint))
            .collect())
    }

    /// Exports both styles of one icon, overwriting existing files.
    ///
    /// Nothing touches the filesystem until both styles have rendered.
    pub fn export_icon(&self, name: &IconName) -> Result<Vec<ExportedFile>, ExportError> {
        let styled = self.render_styles(name)?;

        let dir = self.target_dir(name);
        fs::create_dir_all(&dir).map_err(|source| ExportError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(styled.len());
        for image in styled {
            let path = dir.join(image.filename());
            let shown = std::path::absolute(&path).unwrap_or_else(|_| path.clone());
            tracing::info!("Exporting: {} to {}", name, shown.display());

            image
                .image
                .data
                .save_with_format(&path, ImageFormat::Png)
                .map_err(|source| ExportError::WritePng {
                    path: path.clone(),
                    source,
                })?;

            written.push(ExportedFile {
                name: name.clone(),
                style: image.style,
                path,
            });
        }

        Ok(written)
    }

    /// Runs one pass over `names`, strictly in order.
    ///
    /// Under [`FailurePolicy::Abort`] the first failing icon ends the pass
    /// with its error and later names are never touched. Under
    /// [`FailurePolicy::Skip`] failures are collected in the report.
    /// Repeated names are exported once; a name that failed is retried
    /// (and reported again) on every repeat.
    pub fn export<I, S>(&self, names: I) -> Result<ExportReport, ExportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.validate()?;

        let mut report = ExportReport::default();
        let mut seen = HashSet::new();

        for raw in names {
            let raw = raw.as_ref();
            let result = IconName::new(raw).and_then(|name| {
                if seen.contains(&name) {
                    tracing::warn!(name = %name, "duplicate icon name, already exported");
                    return Ok(Vec::new());
                }
                let files = self.export_icon(&name)?;
                seen.insert(name);
                Ok(files)
            });

            match result {
                Ok(files) => report.written.extend(files),
                Err(error) => match self.options.on_error {
                    FailurePolicy::Abort => {
                        tracing::error!(name = raw, error = %error, "export aborted");
                        return Err(error);
                    }
                    FailurePolicy::Skip => {
                        tracing::warn!(name = raw, error = %error, "skipping icon");
                        report.skipped.push(SkippedIcon {
                            name: raw.to_string(),
                            error,
                        });
                    }
                },
            }
        }

        tracing::debug!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            "export pass finished"
        );
        Ok(report)
    }
}

// ============================================================================
// Tests
// ============================================================================
