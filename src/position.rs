use std::fmt;

/// Location of a vessel's cursor.
///
/// `offset` is authoritative and counts elements (chars for text input), never bytes.
/// `line` and `column` are 1-based and informational; vessels that cannot tell lines apart
/// simply leave `line` at 1 and count `column` along with `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub name: String,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "{}:{}:{}", self.name, self.line, self.column)
        }
    }
}
