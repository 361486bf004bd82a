use thiserror::Error;

/// The only failure a combinator can report.
///
/// End of input, an unexpected element and a malformed sequence all look the same: the parser
/// simply did not match. Where the vessel was left is up to the combinator (see `attempt`).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("no match")]
pub struct NoMatch;

pub type ParseResult<T> = Result<T, NoMatch>;

/// Outcome of a top-level parse run through [`crate::parser::parse`] or
/// [`crate::parser::parse_complete`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input did not match (stopped at offset {offset})")]
    NoMatch { offset: usize },

    #[error("unconsumed input at offset {offset} ({remaining} elements left)")]
    TrailingInput { offset: usize, remaining: usize },
}

impl ParseError {
    pub fn no_match(offset: usize) -> Self {
        Self::NoMatch { offset }
    }

    pub fn trailing_input(offset: usize, remaining: usize) -> Self {
        Self::TrailingInput { offset, remaining }
    }

    /// Offset the vessel was left at when the parse gave up.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::NoMatch { offset } => *offset,
            ParseError::TrailingInput { offset, .. } => *offset,
        }
    }
}
