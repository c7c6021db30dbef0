use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for copy-sqlc-params operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("input directory is required")]
    #[diagnostic(
        code(sqlcparams::missing_input),
        help("pass the directory holding sqlc generated files with --input <DIR>")
    )]
    MissingInput,

    #[error("output directory is required")]
    #[diagnostic(
        code(sqlcparams::missing_output),
        help("pass the directory for params_gen.go with --output <DIR>")
    )]
    MissingOutput,

    #[error("cannot derive a package name from '{path}'")]
    #[diagnostic(
        code(sqlcparams::package_name),
        help("pass the package name explicitly with --package <NAME>")
    )]
    PackageName { path: PathBuf },

    #[error("failed to {op} '{path}'")]
    #[diagnostic(code(sqlcparams::io))]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file")]
    #[diagnostic(code(sqlcparams::config))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to run formatter '{tool}'")]
    #[diagnostic(
        code(sqlcparams::formatter_missing),
        help("install the Go toolchain or pass --formatter none")
    )]
    FormatterSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("formatter '{tool}' failed: {message}")]
    #[diagnostic(code(sqlcparams::formatter))]
    Formatter { tool: String, message: String },
}

impl Error {
    /// Wrap an I/O error with the operation and path it failed on
    pub fn io(op: &'static str, path: impl AsRef<Path>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            op,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Create a config parse error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a formatter failure
    pub fn formatter(tool: impl Into<String>, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Formatter {
            tool: tool.into(),
            message: message.into(),
        })
    }

    /// Whether this error was raised before any file was touched
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::MissingInput
                | Error::MissingOutput
                | Error::PackageName { .. }
                | Error::Config { .. }
        )
    }
}
