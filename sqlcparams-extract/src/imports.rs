//! Import block extraction.

use std::path::Path;

use sqlcparams_core::{Result, SourceFile};

/// Token that opens a grouped import block.
const IMPORT_OPEN: &str = "import (";
/// Token that closes a grouped import block.
const IMPORT_CLOSE: &str = ")";

/// A grouped import block, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBlock {
    lines: Vec<String>,
}

impl ImportBlock {
    /// Lines of the block, from `import (` through the closing `)`.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the block followed by one blank separator line.
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push_str("\n\n");
        out
    }
}

/// Extract the first grouped import block from a file.
///
/// Returns `None` when the file has no `import (` line.
pub fn extract_imports(path: impl AsRef<Path>) -> Result<Option<ImportBlock>> {
    let path = path.as_ref();
    let block = scan_imports(SourceFile::open(path)?)?;
    match &block {
        Some(b) => tracing::debug!(
            path = %path.display(),
            lines = b.lines.len(),
            "copied import block"
        ),
        None => tracing::debug!(path = %path.display(), "no import block found"),
    }
    Ok(block)
}

/// Scan lines for the first grouped import block.
///
/// Only the first block is honored and scanning stops at its closing line,
/// so nothing after it is read. A block left open at end of input keeps
/// every line up to the end.
pub fn scan_imports<I>(lines: I) -> Result<Option<ImportBlock>>
where
    I: IntoIterator<Item = Result<String>>,
{
    let mut block: Option<Vec<String>> = None;

    for line in lines {
        let line = line?;
        match block.as_mut() {
            None => {
                if line.trim().starts_with(IMPORT_OPEN) {
                    block = Some(vec![line]);
                }
            }
            Some(buf) => {
                let closes = line.trim().starts_with(IMPORT_CLOSE);
                buf.push(line);
                if closes {
                    break;
                }
            }
        }
    }

    Ok(block.map(|lines| ImportBlock { lines }))
}
