//! `symbol-export`: runs one export pass and exits.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use directories::UserDirs;
use tracing_subscriber::EnvFilter;

use symbol_exporter::{
    BuiltinCatalog, DirectoryCatalog, ExportError, ExportProfile, FailurePolicy, IconExporter,
    LayeredCatalog, TintColor,
};

/// Render icons in dark and light styles into <out>/export/<name>/.
#[derive(Debug, Parser)]
#[command(name = "symbol-export", version)]
struct Cli {
    /// Icon names to export. Defaults to the profile's list, then the built-in symbols.
    names: Vec<String>,

    /// JSON export profile.
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Directory of <name>.svg files, searched before the built-in symbols.
    #[arg(long, value_name = "DIR")]
    catalog: Vec<PathBuf>,

    /// Documents root. Defaults to the user's documents directory.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Logical icon size in points.
    #[arg(long)]
    point_size: Option<f32>,

    /// Display scale (pixels per point).
    #[arg(long)]
    scale: Option<f32>,

    /// Fill color of the light variant (`white`, `#rgb`, `#rrggbb`, `#rrggbbaa`).
    #[arg(long)]
    tint: Option<TintColor>,

    /// Skip icons that fail instead of aborting the pass.
    #[arg(long)]
    keep_going: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every icon was exported.
fn run(cli: Cli) -> Result<bool, ExportError> {
    let mut profile = match &cli.profile {
        Some(path) => ExportProfile::load(path)?,
        None => ExportProfile::new(),
    };

    if !cli.names.is_empty() {
        profile = profile.with_symbols(cli.names);
    }
    if let Some(point_size) = cli.point_size {
        profile = profile.with_point_size(point_size);
    }
    if let Some(scale) = cli.scale {
        profile = profile.with_scale(scale);
    }
    if let Some(tint) = cli.tint {
        profile = profile.with_tint(tint);
    }
    if cli.keep_going {
        profile = profile.with_on_error(FailurePolicy::Skip);
    }

    let root = match cli.out {
        Some(out) => out,
        None => documents_dir()?,
    };

    let catalog = cli
        .catalog
        .into_iter()
        .fold(LayeredCatalog::new(), |catalog, dir| {
            catalog.with(DirectoryCatalog::new(dir))
        })
        .with(BuiltinCatalog);

    let exporter = IconExporter::new(catalog, root).with_options(profile.options());
    let report = exporter.export(profile.symbol_names())?;

    tracing::info!(
        icons = report.icons_exported(),
        files = report.written.len(),
        skipped = report.skipped.len(),
        "export finished"
    );
    for skipped in &report.skipped {
        tracing::warn!("skipped {}: {}", skipped.name, error_chain(&skipped.error));
    }

    Ok(report.is_complete())
}

fn documents_dir() -> Result<PathBuf, ExportError> {
    UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|p| p.to_path_buf()))
        .ok_or_else(|| {
            ExportError::InvalidOptions("no documents directory found, pass --out".into())
        })
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
