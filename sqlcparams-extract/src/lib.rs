//! Params struct extraction engine for copy-sqlc-params.
//!
//! sqlc scatters the `<Query>Params` structs it generates across one Go file
//! per query file. This crate collects them, together with the import block
//! of `models.go`, into a single `params_gen.go`.
//!
//! # Module Organization
//!
//! - [`pattern`] - start/end line patterns for target declarations
//! - [`imports`] - import block extraction
//! - [`structs`] - the two-state struct declaration scanner
//! - [`output`] - the append-only output accumulator
//! - [`formatter`] - pluggable post-processing (gofmt, passthrough)
//! - [`aggregate`] - directory walk and run orchestration
//!
//! # Example
//!
//! ```ignore
//! use sqlcparams_extract::{CopyOptions, Passthrough, copy_params};
//!
//! let options = CopyOptions {
//!     input_dir: "internal/db".into(),
//!     output_dir: "internal/repo".into(),
//!     ..Default::default()
//! };
//! let outcome = copy_params(&options, &Passthrough)?;
//! println!("wrote {}", outcome.output_path.display());
//! ```

pub mod aggregate;
pub mod formatter;
pub mod imports;
pub mod output;
pub mod pattern;
pub mod structs;

pub use aggregate::{
    Aggregator, CopyOptions, CopyOutcome, MODELS_FILE, OUTPUT_FILE, SOURCE_EXTENSION,
    copy_params, package_from_dir, source_files,
};
pub use formatter::{Formatter, GoFmt, Passthrough, formatter_for};
pub use imports::{ImportBlock, extract_imports, scan_imports};
pub use output::{GENERATED_MARKER, NOLINT_DIRECTIVE, ParamsFile};
pub use pattern::{DEFAULT_SUFFIX, DeclarationPattern};
pub use structs::{DeclarationBlock, StructExtractor};
