//! Post-processing of the generated source text.

use std::{
    io::{ErrorKind, Write},
    path::PathBuf,
    process::{Command, Stdio},
};

use sqlcparams_core::{Error, FormatterKind, Result};

/// Normalizes generated source text before it is written.
pub trait Formatter {
    /// A short name used in logs and errors.
    fn name(&self) -> &str;

    /// Format `source`, returning the formatted text.
    ///
    /// # Errors
    ///
    /// Any failure is fatal to the run; there is no fallback to the
    /// unformatted text.
    fn format(&self, source: &str) -> Result<String>;
}

impl<F> Formatter for F
where
    F: Fn(&str) -> Result<String>,
{
    fn name(&self) -> &str {
        "custom"
    }

    fn format(&self, source: &str) -> Result<String> {
        self(source)
    }
}

/// Formatter that returns the text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Formatter for Passthrough {
    fn name(&self) -> &str {
        "none"
    }

    fn format(&self, source: &str) -> Result<String> {
        Ok(source.to_string())
    }
}

/// Formatter that pipes the text through `gofmt`.
#[derive(Debug, Clone)]
pub struct GoFmt {
    program: PathBuf,
}

impl GoFmt {
    /// Use `gofmt` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("gofmt")
    }

    /// Use a specific gofmt binary.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GoFmt {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for GoFmt {
    fn name(&self) -> &str {
        "gofmt"
    }

    fn format(&self, source: &str) -> Result<String> {
        let tool = self.program.display().to_string();
        let spawn_err = |e| {
            Box::new(Error::FormatterSpawn {
                tool: tool.clone(),
                source: e,
            })
        };

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        // gofmt reads all of stdin before writing, so writing first cannot deadlock.
        // A tool that exits without reading is reported through its exit status.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(source.as_bytes()) {
                Err(e) if e.kind() != ErrorKind::BrokenPipe => return Err(spawn_err(e)),
                _ => {}
            }
        }

        let output = child.wait_with_output().map_err(spawn_err)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::formatter(tool, stderr.trim()));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| Error::formatter(tool, "output is not valid UTF-8"))
    }
}

/// Build the formatter selected by `kind`.
pub fn formatter_for(kind: FormatterKind) -> Box<dyn Formatter> {
    match kind {
        FormatterKind::Gofmt => Box::new(GoFmt::new()),
        FormatterKind::None => Box::new(Passthrough),
    }
}
