//! Start and end patterns for struct declarations.

use regex::Regex;

/// Suffix of the struct names sqlc generates for query parameters.
pub const DEFAULT_SUFFIX: &str = "Params";

/// Line patterns that delimit a target struct declaration.
///
/// A declaration starts on a line of the exact shape
/// `type <Name><suffix> struct {`, where `<Name>` is ASCII word characters,
/// and ends on the first later line that
/// begins with `}`. Brace depth is not tracked, so a nested block closed at
/// column 0 ends the declaration early.
///
/// # Example
///
/// ```
/// use sqlcparams_extract::DeclarationPattern;
///
/// let pattern = DeclarationPattern::default();
/// assert_eq!(pattern.start_name("type GetUserParams struct {"), Some("GetUserParams"));
/// assert_eq!(pattern.start_name("type GetUserRow struct {"), None);
/// assert!(pattern.is_end("}"));
/// ```
#[derive(Debug, Clone)]
pub struct DeclarationPattern {
    start: Regex,
    end: Regex,
}

impl DeclarationPattern {
    /// Build patterns matching structs whose name ends with `suffix`.
    pub fn new(suffix: &str) -> Self {
        let start = format!(r"^type ((?-u:\w)+{}) struct \{{", regex::escape(suffix));
        Self {
            start: Regex::new(&start).expect("escaped suffix always compiles"),
            end: Regex::new(r"^\}").expect("end pattern compiles"),
        }
    }

    /// Name of the declared struct if `line` opens a target declaration.
    pub fn start_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.start
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Whether `line` closes a declaration.
    pub fn is_end(&self, line: &str) -> bool {
        self.end.is_match(line)
    }
}

impl Default for DeclarationPattern {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIX)
    }
}
