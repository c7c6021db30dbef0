use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sqlcparams_core::{Config, FormatterKind};

use super::UnwrapOrExit;
use crate::{
    ops::{self, copy::CopySettings},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CopyCommand {
    /// Path to the input dir with sqlc generated files
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to the output dir for the generated file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Package name for the generated file (defaults to the output dir name)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Path to a TOML config file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Formatter applied to the generated file: gofmt or none
    #[arg(long)]
    pub formatter: Option<FormatterKind>,

    /// Suffix of the struct names to copy (defaults to Params)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Print the generated file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl CopyCommand {
    /// Run the copy command
    pub fn run(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Config::open(path).unwrap_or_exit(),
            None => Config::default(),
        };

        let settings = self.settings(config);
        let report = ops::copy(settings).unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Merge flags over config file values.
    fn settings(&self, config: Config) -> CopySettings {
        CopySettings {
            input_dir: self.input.clone().or(config.input).unwrap_or_default(),
            output_dir: self.output.clone().or(config.output).unwrap_or_default(),
            package: self.package.clone().or(config.package).unwrap_or_default(),
            suffix: self.suffix.clone().or(config.suffix),
            formatter: self.formatter.or(config.formatter).unwrap_or_default(),
            dry_run: self.dry_run,
        }
    }
}
