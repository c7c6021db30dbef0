//! Copy command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// What happened to the generated file.
#[derive(Debug)]
pub enum CopyResult {
    /// The file was written to disk.
    Written,
    /// Dry run; the file content that would be written.
    Preview { content: String },
}

/// Report data from a copy run.
#[derive(Debug)]
pub struct CopyReport {
    /// Path of the generated file.
    pub output_path: PathBuf,
    /// Package name used in the header.
    pub package: String,
    /// Number of source files scanned.
    pub files_scanned: usize,
    /// Copied struct names, in output order.
    pub declarations: Vec<String>,
    /// Whether the models.go import block was copied.
    pub imports_copied: bool,
    pub result: CopyResult,
}

impl Report for CopyReport {
    fn render(&self, out: &mut dyn Output) {
        if self.declarations.is_empty() {
            out.warning(&format!(
                "no matching structs found in {} scanned files",
                self.files_scanned
            ));
        }

        match &self.result {
            CopyResult::Written => {
                out.preformatted(&format!(
                    "copy-sqlc-params: wrote {}",
                    self.output_path.display()
                ));
            }
            CopyResult::Preview { content } => {
                out.divider(&format!("dry run: {}", self.output_path.display()));
                out.preformatted(content.trim_end());
                out.divider("Summary");
                out.key_value("package", &self.package);
                out.key_value("files scanned", &self.files_scanned.to_string());
                out.key_value(
                    "imports",
                    if self.imports_copied {
                        "copied from models.go"
                    } else {
                        "none"
                    },
                );
                out.key_value("structs", &self.declarations.len().to_string());
                for name in &self.declarations {
                    out.added_item(name);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records rendered lines instead of printing them.
    #[derive(Default)]
    struct Recorder {
        lines: Vec<String>,
    }

    impl Output for Recorder {
        fn key_value(&mut self, key: &str, value: &str) {
            self.lines.push(format!("{key}: {value}"));
        }

        fn added_item(&mut self, text: &str) {
            self.lines.push(format!("+ {text}"));
        }

        fn warning(&mut self, msg: &str) {
            self.lines.push(format!("warning: {msg}"));
        }

        fn divider(&mut self, label: &str) {
            self.lines.push(format!("-- {label} --"));
        }

        fn preformatted(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }
    }

    fn report(result: CopyResult, declarations: &[&str]) -> CopyReport {
        CopyReport {
            output_path: PathBuf::from("internal/repo/params_gen.go"),
            package: "repo".to_string(),
            files_scanned: 3,
            declarations: declarations.iter().map(|s| s.to_string()).collect(),
            imports_copied: true,
            result,
        }
    }

    #[test]
    fn test_written_prints_path() {
        let mut out = Recorder::default();
        report(CopyResult::Written, &["GetUserParams"]).render(&mut out);

        assert_eq!(
            out.lines,
            ["copy-sqlc-params: wrote internal/repo/params_gen.go"]
        );
    }

    #[test]
    fn test_nothing_found_warns() {
        let mut out = Recorder::default();
        report(CopyResult::Written, &[]).render(&mut out);

        assert_eq!(
            out.lines[0],
            "warning: no matching structs found in 3 scanned files"
        );
    }

    #[test]
    fn test_preview_lists_content_and_summary() {
        let mut out = Recorder::default();
        let content = "package repo\n\ntype GetUserParams struct {\n}\n".to_string();
        report(CopyResult::Preview { content }, &["GetUserParams"]).render(&mut out);

        assert_eq!(
            out.lines,
            [
                "-- dry run: internal/repo/params_gen.go --",
                "package repo\n\ntype GetUserParams struct {\n}",
                "-- Summary --",
                "package: repo",
                "files scanned: 3",
                "imports: copied from models.go",
                "structs: 1",
                "+ GetUserParams",
            ]
        );
    }
}
