//! Struct declaration extraction.

use std::path::Path;

use sqlcparams_core::{Result, SourceFile};

use crate::DeclarationPattern;

/// One captured struct declaration, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationBlock {
    name: String,
    lines: Vec<String>,
}

impl DeclarationBlock {
    fn open(name: String, line: String) -> Self {
        Self {
            name,
            lines: vec![line],
        }
    }

    /// Name of the declared struct (e.g. `GetUserParams`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lines of the declaration, from the `type` line through the closing brace.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the declaration followed by one blank separator line.
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push_str("\n\n");
        out
    }
}

/// Scanner state while walking the lines of one file.
enum ScanState {
    /// Looking for a start line.
    Idle,
    /// Inside a declaration; every line is buffered until an end line.
    Capturing(DeclarationBlock),
}

/// Extracts target struct declarations from Go source files.
#[derive(Debug, Clone, Default)]
pub struct StructExtractor {
    pattern: DeclarationPattern,
}

impl StructExtractor {
    /// Create an extractor using the given patterns.
    pub fn new(pattern: DeclarationPattern) -> Self {
        Self { pattern }
    }

    /// Extract every complete declaration from a file, in line order.
    pub fn extract(&self, path: impl AsRef<Path>) -> Result<Vec<DeclarationBlock>> {
        let path = path.as_ref();
        let blocks = self.scan(SourceFile::open(path)?)?;
        tracing::debug!(
            path = %path.display(),
            declarations = blocks.len(),
            "scanned file"
        );
        Ok(blocks)
    }

    /// Extract every complete declaration from a sequence of lines.
    ///
    /// While capturing, the start pattern is not re-tested; the first line
    /// matching the end pattern closes the declaration whatever its nesting.
    /// A declaration still open at end of input is dropped without error.
    pub fn scan<I>(&self, lines: I) -> Result<Vec<DeclarationBlock>>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        let mut blocks = Vec::new();
        let mut state = ScanState::Idle;

        for line in lines {
            let line = line?;
            state = match state {
                ScanState::Idle => match self.pattern.start_name(&line) {
                    Some(name) => {
                        let name = name.to_string();
                        ScanState::Capturing(DeclarationBlock::open(name, line))
                    }
                    None => ScanState::Idle,
                },
                ScanState::Capturing(mut block) => {
                    let closes = self.pattern.is_end(&line);
                    block.lines.push(line);
                    if closes {
                        tracing::debug!(
                            name = %block.name,
                            lines = block.lines.len(),
                            "captured declaration"
                        );
                        blocks.push(block);
                        ScanState::Idle
                    } else {
                        ScanState::Capturing(block)
                    }
                }
            };
        }

        if let ScanState::Capturing(block) = state {
            tracing::debug!(name = %block.name, "dropped unterminated declaration");
        }

        Ok(blocks)
    }
}
