//! Run orchestration: walk, extract, format, write.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use sqlcparams_core::{Error, OutputFile, Result};

use crate::{DeclarationPattern, Formatter, ParamsFile, StructExtractor, extract_imports};

/// Extension of the source files scanned for declarations.
pub const SOURCE_EXTENSION: &str = ".go";
/// File under the input root whose import block is copied.
pub const MODELS_FILE: &str = "models.go";
/// Name of the generated file under the output directory.
pub const OUTPUT_FILE: &str = "params_gen.go";

/// Inputs for one run.
#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    /// Directory holding the sqlc generated files.
    pub input_dir: PathBuf,
    /// Directory to write `params_gen.go` into.
    pub output_dir: PathBuf,
    /// Package name; derived from `output_dir` when empty.
    pub package: String,
    /// Struct name patterns.
    pub pattern: DeclarationPattern,
}

/// Result of a run.
#[derive(Debug, Clone)]
pub struct CopyOutcome {
    /// Path of the generated file.
    pub output_path: PathBuf,
    /// Resolved package name.
    pub package: String,
    /// Number of source files scanned.
    pub files_scanned: usize,
    /// Names of the copied declarations, in output order.
    pub declarations: Vec<String>,
    /// Whether an import block was copied from `models.go`.
    pub imports_copied: bool,
    /// Final formatted text.
    pub content: String,
}

/// Collects declarations from an input tree into a single file.
pub struct Aggregator<'a> {
    options: &'a CopyOptions,
    formatter: &'a dyn Formatter,
}

impl<'a> Aggregator<'a> {
    pub fn new(options: &'a CopyOptions, formatter: &'a dyn Formatter) -> Self {
        Self { options, formatter }
    }

    /// Generate and write `params_gen.go`.
    ///
    /// The text is formatted in memory and written once; when formatting
    /// fails nothing is written.
    pub fn run(&self) -> Result<CopyOutcome> {
        let outcome = self.preview()?;

        let file = OutputFile::new(&outcome.output_path, outcome.content.as_str());
        file.write()?;
        tracing::info!(
            path = %outcome.output_path.display(),
            declarations = outcome.declarations.len(),
            "wrote params file"
        );

        Ok(outcome)
    }

    /// Generate the formatted text without touching the output directory.
    pub fn preview(&self) -> Result<CopyOutcome> {
        let (output_path, package) = self.resolve()?;
        let (file, files_scanned) = self.collect(&output_path, &package)?;

        let content = self.formatter.format(&file.render())?;
        tracing::debug!(formatter = self.formatter.name(), "formatted output");

        Ok(CopyOutcome {
            output_path,
            package,
            files_scanned,
            declarations: file.declarations().map(|d| d.name().to_string()).collect(),
            imports_copied: file.has_imports(),
            content,
        })
    }

    /// Validate inputs and work out the output path and package name.
    fn resolve(&self) -> Result<(PathBuf, String)> {
        let opts = self.options;
        if opts.input_dir.as_os_str().is_empty() {
            return Err(Box::new(Error::MissingInput));
        }
        if opts.output_dir.as_os_str().is_empty() {
            return Err(Box::new(Error::MissingOutput));
        }

        let package = if opts.package.is_empty() {
            package_from_dir(&opts.output_dir)?
        } else {
            opts.package.clone()
        };

        Ok((opts.output_dir.join(OUTPUT_FILE), package))
    }

    /// Read the input tree into an accumulated file.
    ///
    /// A `params_gen.go` left by an earlier run is skipped when the output
    /// directory sits inside the input tree.
    fn collect(&self, output_path: &Path, package: &str) -> Result<(ParamsFile, usize)> {
        let input = &self.options.input_dir;
        let mut file = ParamsFile::new(package);

        let models = input.join(MODELS_FILE);
        if models.is_file() {
            if let Some(block) = extract_imports(&models)? {
                file.push_imports(block);
            }
        }

        let extractor = StructExtractor::new(self.options.pattern.clone());
        let previous_output = output_path.canonicalize().ok();
        let mut sources = source_files(input)?;
        if let Some(previous) = &previous_output {
            sources.retain(|path| !is_same_file(path, previous));
        }
        for path in &sources {
            file.extend_declarations(extractor.extract(path)?);
        }

        Ok((file, sources.len()))
    }
}

/// Whether `path` resolves to the already canonical `target`.
fn is_same_file(path: &Path, target: &Path) -> bool {
    if path.file_name() != target.file_name() {
        return false;
    }
    let same = path.canonicalize().is_ok_and(|p| p == target);
    if same {
        tracing::debug!(path = %path.display(), "skipping previous output");
    }
    same
}

/// Derive a package name from the last segment of the output directory.
pub fn package_from_dir(dir: &Path) -> Result<String> {
    let absolute = std::path::absolute(dir).map_err(|e| Error::io("resolve", dir, e))?;
    absolute
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            Box::new(Error::PackageName {
                path: dir.to_path_buf(),
            })
        })
}

/// List every source file under `root`, depth first, with the entries of
/// each directory in file name order.
///
/// Hidden files and ignore files get no special treatment.
pub fn source_files(root: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| Error::io("walk", root, std::io::Error::other(e)))?;
        let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
        let is_source = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(SOURCE_EXTENSION));
        if !is_dir && is_source {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Run with the given options and formatter.
pub fn copy_params(options: &CopyOptions, formatter: &dyn Formatter) -> Result<CopyOutcome> {
    Aggregator::new(options, formatter).run()
}
