//! Optional TOML configuration file.
//!
//! Every key mirrors a command-line flag. Flags win over the file.
//!
//! ```toml
//! input = "internal/db"
//! output = "internal/repo"
//! package = "repo"
//! formatter = "gofmt"
//! suffix = "Params"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result};

/// Post-processor applied to the generated text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    /// Pipe through `gofmt`
    #[default]
    Gofmt,
    /// Leave the text as generated
    None,
}

impl FromStr for FormatterKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "gofmt" => Ok(Self::Gofmt),
            "none" => Ok(Self::None),
            other => Err(format!(
                "unknown formatter '{other}', expected 'gofmt' or 'none'"
            )),
        }
    }
}

/// Settings read from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the sqlc generated files
    pub input: Option<PathBuf>,
    /// Directory to write params_gen.go into
    pub output: Option<PathBuf>,
    /// Package name for the generated file
    pub package: Option<String>,
    pub formatter: Option<FormatterKind>,
    /// Struct name suffix to collect
    pub suffix: Option<String>,
}

impl Config {
    /// Read and parse a config file.
    ///
    /// Relative `input` and `output` paths are resolved against the
    /// directory containing the config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io("read", path, e))?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut config = Self::parse(&content, &filename)?;
        if let Some(base) = path.parent() {
            config.input = config.input.map(|p| base.join(p));
            config.output = config.output.map(|p| base.join(p));
        }
        Ok(config)
    }

    /// Parse config content; `filename` is only used for error reporting.
    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e, content, filename))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            input = "internal/db"
            output = "internal/repo"
            package = "repo"
            formatter = "none"
            suffix = "Args"
            "#,
            "sqlcparams.toml",
        )
        .unwrap();

        assert_eq!(config.input, Some(PathBuf::from("internal/db")));
        assert_eq!(config.output, Some(PathBuf::from("internal/repo")));
        assert_eq!(config.package.as_deref(), Some("repo"));
        assert_eq!(config.formatter, Some(FormatterKind::None));
        assert_eq!(config.suffix.as_deref(), Some("Args"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("", "sqlcparams.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::parse("inputs = \"db\"\n", "sqlcparams.toml").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_unknown_formatter_rejected() {
        assert!(Config::parse("formatter = \"prettier\"\n", "sqlcparams.toml").is_err());
    }

    #[test]
    fn test_open_resolves_paths_against_config_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sqlcparams.toml");
        fs::write(&path, "input = \"db\"\noutput = \"repo\"\n").unwrap();

        let config = Config::open(&path).unwrap();

        assert_eq!(config.input, Some(temp.path().join("db")));
        assert_eq!(config.output, Some(temp.path().join("repo")));
    }

    #[test]
    fn test_formatter_kind_from_str() {
        assert_eq!("gofmt".parse::<FormatterKind>(), Ok(FormatterKind::Gofmt));
        assert_eq!("none".parse::<FormatterKind>(), Ok(FormatterKind::None));
        assert!("black".parse::<FormatterKind>().is_err());
    }
}
