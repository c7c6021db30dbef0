//! Copy operation - collect Params structs into params_gen.go.

use std::path::PathBuf;

use sqlcparams_core::{FormatterKind, Result};
use sqlcparams_extract::{Aggregator, CopyOptions, DeclarationPattern, formatter_for};

use crate::reports::{CopyReport, CopyResult};

/// Settings for the copy operation, after merging flags and config.
#[derive(Debug, Clone)]
pub struct CopySettings {
    /// Directory holding the sqlc generated files.
    pub input_dir: PathBuf,
    /// Directory for the generated file.
    pub output_dir: PathBuf,
    /// Package name; empty means derive from the output directory.
    pub package: String,
    /// Struct name suffix; `None` uses the default.
    pub suffix: Option<String>,
    /// Formatter applied before writing.
    pub formatter: FormatterKind,
    /// Whether to preview without writing.
    pub dry_run: bool,
}

/// Execute the copy operation.
pub fn copy(settings: CopySettings) -> Result<CopyReport> {
    let pattern = match &settings.suffix {
        Some(suffix) => DeclarationPattern::new(suffix),
        None => DeclarationPattern::default(),
    };
    let options = CopyOptions {
        input_dir: settings.input_dir,
        output_dir: settings.output_dir,
        package: settings.package,
        pattern,
    };

    let formatter = formatter_for(settings.formatter);
    tracing::debug!(
        input = %options.input_dir.display(),
        output = %options.output_dir.display(),
        formatter = formatter.name(),
        dry_run = settings.dry_run,
        "running copy"
    );
    let aggregator = Aggregator::new(&options, formatter.as_ref());
    let outcome = if settings.dry_run {
        aggregator.preview()?
    } else {
        aggregator.run()?
    };

    let result = if settings.dry_run {
        CopyResult::Preview {
            content: outcome.content,
        }
    } else {
        CopyResult::Written
    };

    Ok(CopyReport {
        output_path: outcome.output_path,
        package: outcome.package,
        files_scanned: outcome.files_scanned,
        declarations: outcome.declarations,
        imports_copied: outcome.imports_copied,
        result,
    })
}
