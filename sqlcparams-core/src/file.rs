use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// A generated file to be written to disk
pub struct OutputFile {
    path: PathBuf,
    content: String,
}

impl OutputFile {
    /// Create a new output file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file, creating parent directories and replacing any existing file.
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content)
    }
}

/// Write `content` to `path` in one step.
///
/// The content goes to a temporary file next to the target which is then
/// renamed over it, so readers never observe a half-written file.
fn write_file(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| Error::io("create directory", parent, e))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| Error::io("write", path, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| Error::io("write", path, e))?;
    tmp.persist(path)
        .map_err(|e| Error::io("write", path, e.error))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("params_gen.go");

        write_file(&path, "package repo\n").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "package repo\n");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp
            .path()
            .join("internal")
            .join("repo")
            .join("params_gen.go");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("params_gen.go");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let file = OutputFile::new(temp.path().join("params_gen.go"), "content");

        file.write().unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, ["params_gen.go"]);
    }

    #[test]
    fn test_write_into_file_parent_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("repo");
        fs::write(&blocker, "not a dir").unwrap();

        let file = OutputFile::new(blocker.join("params_gen.go"), "content");
        let err = file.write().unwrap_err();

        assert!(matches!(
            *err,
            Error::Io {
                op: "create directory",
                ..
            }
        ));
    }

    #[test]
    fn test_output_file_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("repo").join("params_gen.go");

        OutputFile::new(&path, "package repo\n").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "package repo\n");
    }
}
