//! The accumulated output file.

use crate::{DeclarationBlock, ImportBlock};

/// Marker recognized by Go tooling (golint, staticcheck, vet) as generated code.
pub const GENERATED_MARKER: &str = "// Code generated by copy-sqlc-params. DO NOT EDIT.";
/// Directive telling golangci-lint to skip the whole file.
pub const NOLINT_DIRECTIVE: &str = "//nolint:all";

/// One piece of the output file, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Markers and the package clause
    Header(String),
    Imports(ImportBlock),
    Declaration(DeclarationBlock),
}

impl Segment {
    fn render_into(&self, out: &mut String) {
        match self {
            Segment::Header(package) => {
                out.push_str(GENERATED_MARKER);
                out.push_str("\n\n");
                out.push_str(NOLINT_DIRECTIVE);
                out.push('\n');
                out.push_str("package ");
                out.push_str(package);
                out.push_str("\n\n");
            }
            Segment::Imports(block) => out.push_str(&block.render()),
            Segment::Declaration(block) => out.push_str(&block.render()),
        }
    }
}

/// Append-only accumulator for `params_gen.go`.
///
/// Starts with the package header; at most one import block follows,
/// then declarations in the order they were pushed. Serialized once with
/// [`ParamsFile::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamsFile {
    segments: Vec<Segment>,
    has_imports: bool,
}

impl ParamsFile {
    /// Start a new file for the given package.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Header(package.into())],
            has_imports: false,
        }
    }

    /// Append the import block.
    ///
    /// Only the first call has an effect, and only before any declaration has
    /// been pushed, so the block always sits right after the header.
    pub fn push_imports(&mut self, block: ImportBlock) {
        if self.has_imports || self.segments.len() > 1 {
            tracing::debug!("ignoring import block pushed out of order");
            return;
        }
        self.segments.push(Segment::Imports(block));
        self.has_imports = true;
    }

    /// Append declarations in order.
    pub fn extend_declarations(&mut self, blocks: impl IntoIterator<Item = DeclarationBlock>) {
        self.segments
            .extend(blocks.into_iter().map(Segment::Declaration));
    }

    /// Whether an import block was copied
    pub fn has_imports(&self) -> bool {
        self.has_imports
    }

    /// Iterate over the declarations in output order.
    pub fn declarations(&self) -> impl Iterator<Item = &DeclarationBlock> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Declaration(d) => Some(d),
            _ => None,
        })
    }

    /// Serialize the accumulated segments.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            segment.render_into(&mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StructExtractor, scan_imports};

    fn lines(src: &str) -> Vec<sqlcparams_core::Result<String>> {
        src.lines().map(|l| Ok(l.to_string())).collect()
    }

    fn imports(src: &str) -> ImportBlock {
        scan_imports(lines(src)).unwrap().unwrap()
    }

    fn declarations(src: &str) -> Vec<DeclarationBlock> {
        StructExtractor::default().scan(lines(src)).unwrap()
    }

    #[test]
    fn test_header_only() {
        let file = ParamsFile::new("repo");
        assert_eq!(
            file.render(),
            "// Code generated by copy-sqlc-params. DO NOT EDIT.\n\n//nolint:all\npackage repo\n\n"
        );
        assert!(!file.has_imports());
        assert_eq!(file.declarations().count(), 0);
    }

    #[test]
    fn test_full_file_shape() {
        let mut file = ParamsFile::new("repo");
        file.push_imports(imports("import (\n\t\"fmt\"\n)"));
        file.extend_declarations(declarations(
            "type AParams struct {\n\tA int\n}\ntype BParams struct {\n}",
        ));

        let expected = "// Code generated by copy-sqlc-params. DO NOT EDIT.\n\
                        \n\
                        //nolint:all\n\
                        package repo\n\
                        \n\
                        import (\n\
                        \t\"fmt\"\n\
                        )\n\
                        \n\
                        type AParams struct {\n\
                        \tA int\n\
                        }\n\
                        \n\
                        type BParams struct {\n\
                        }\n\
                        \n";
        assert_eq!(file.render(), expected);
    }

    #[test]
    fn test_second_import_block_ignored() {
        let mut file = ParamsFile::new("repo");
        file.push_imports(imports("import (\n\t\"fmt\"\n)"));
        file.push_imports(imports("import (\n\t\"os\"\n)"));

        assert_eq!(file.segments.len(), 2);
        assert!(file.render().contains("\"fmt\""));
        assert!(!file.render().contains("\"os\""));
    }

    #[test]
    fn test_imports_after_declarations_ignored() {
        let mut file = ParamsFile::new("repo");
        file.extend_declarations(declarations("type AParams struct {\n}"));
        file.push_imports(imports("import (\n\t\"fmt\"\n)"));

        assert!(!file.has_imports());
        assert!(matches!(file.segments[1], Segment::Declaration(_)));
    }

    #[test]
    fn test_declarations_keep_push_order() {
        let mut file = ParamsFile::new("repo");
        file.extend_declarations(declarations("type BParams struct {\n}"));
        file.extend_declarations(declarations("type AParams struct {\n}"));
        let names: Vec<_> = file.declarations().map(|d| d.name()).collect();
        assert_eq!(names, ["BParams", "AParams"]);
    }
}
