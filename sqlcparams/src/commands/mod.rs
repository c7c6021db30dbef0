mod copy;

use clap::Parser;
use copy::CopyCommand;
use eyre::Result;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sqlcparams_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("copy-sqlc-params: {:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "copy-sqlc-params")]
#[command(version)]
#[command(about = "Copy sqlc generated Params structs into a single file")]
pub(crate) struct Cli {
    #[command(flatten)]
    copy: CopyCommand,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.copy.run()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "copy-sqlc-params",
            "-i",
            "internal/db",
            "-o",
            "internal/repo",
            "-p",
            "repo",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.copy.input.as_deref(), Some(Path::new("internal/db")));
        assert_eq!(cli.copy.output.as_deref(), Some(Path::new("internal/repo")));
        assert_eq!(cli.copy.package.as_deref(), Some("repo"));
    }

    #[test]
    fn test_unknown_formatter_rejected() {
        assert!(
            Cli::try_parse_from(["copy-sqlc-params", "--formatter", "prettier"]).is_err()
        );
    }
}
