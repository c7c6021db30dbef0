//! Line-oriented reading of source files.

use std::{
    fs,
    io::{BufRead, BufReader, Lines},
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// A source file opened for a single forward scan.
///
/// Yields lines without their `\n` / `\r\n` terminator. The file handle is
/// owned by the scanner and closed when it is dropped, whether the scan ran to
/// the end, stopped early, or hit an error.
pub struct SourceFile {
    path: PathBuf,
    lines: Lines<BufReader<fs::File>>,
}

impl SourceFile {
    /// Open a file for scanning.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|e| Error::io("open", path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for SourceFile {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .next()
            .map(|line| line.map_err(|e| Error::io("read", &self.path, e)))
    }
}
