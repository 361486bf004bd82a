//! Lexical configuration attached to a vessel.
//!
//! A [`Spec`] says what identifiers and operators look like, which names are reserved and how
//! comments are delimited. Combinators only ever read it.

use std::fmt;

use crate::parser::BoxedParser;
use crate::parser::primitive::{one_of, satisfy};
use crate::vessel::Vessel;

/// Characters an operator may be built from by default.
pub const DEFAULT_OPERATOR_CHARS: &str = ":!#$%&*+./<=>?@\\^|-~";

pub struct Spec<V: Vessel> {
    pub comment_start: String,
    pub comment_end: String,
    pub comment_line: String,
    pub nested_comments: bool,
    pub ident_start: BoxedParser<V, V::Element>,
    pub ident_letter: BoxedParser<V, V::Element>,
    pub op_start: BoxedParser<V, V::Element>,
    pub op_letter: BoxedParser<V, V::Element>,
    pub reserved_names: Vec<String>,
    pub reserved_op_names: Vec<String>,
    pub case_sensitive: bool,
}

impl<V: Vessel> Spec<V> {
    /// A spec with the given classifiers, no comments and no reserved names.
    pub fn new(
        ident_start: BoxedParser<V, V::Element>,
        ident_letter: BoxedParser<V, V::Element>,
        op_start: BoxedParser<V, V::Element>,
        op_letter: BoxedParser<V, V::Element>,
    ) -> Self {
        Self {
            comment_start: String::new(),
            comment_end: String::new(),
            comment_line: String::new(),
            nested_comments: false,
            ident_start,
            ident_letter,
            op_start,
            op_letter,
            reserved_names: Vec::new(),
            reserved_op_names: Vec::new(),
            case_sensitive: true,
        }
    }

    pub fn comment_start(mut self, start: impl Into<String>) -> Self {
        self.comment_start = start.into();
        self
    }

    pub fn comment_end(mut self, end: impl Into<String>) -> Self {
        self.comment_end = end.into();
        self
    }

    pub fn comment_line(mut self, line: impl Into<String>) -> Self {
        self.comment_line = line.into();
        self
    }

    pub fn nested_comments(mut self, nested: bool) -> Self {
        self.nested_comments = nested;
        self
    }

    pub fn ident_start(mut self, parser: BoxedParser<V, V::Element>) -> Self {
        self.ident_start = parser;
        self
    }

    pub fn ident_letter(mut self, parser: BoxedParser<V, V::Element>) -> Self {
        self.ident_letter = parser;
        self
    }

    pub fn op_start(mut self, parser: BoxedParser<V, V::Element>) -> Self {
        self.op_start = parser;
        self
    }

    pub fn op_letter(mut self, parser: BoxedParser<V, V::Element>) -> Self {
        self.op_letter = parser;
        self
    }

    pub fn reserved_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn reserved_op_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_op_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn case_sensitive(mut self, sensitive: bool) -> Self {
        self.case_sensitive = sensitive;
        self
    }

    /// Compares two names under this spec's case rule.
    pub fn names_match(&self, a: &str, b: &str) -> bool {
        if self.case_sensitive {
            a == b
        } else {
            a.to_lowercase() == b.to_lowercase()
        }
    }

    pub fn is_reserved_name(&self, name: &str) -> bool {
        self.reserved_names
            .iter()
            .any(|reserved| self.names_match(reserved, name))
    }

    pub fn is_reserved_op_name(&self, name: &str) -> bool {
        self.reserved_op_names
            .iter()
            .any(|reserved| self.names_match(reserved, name))
    }
}

impl<V> Default for Spec<V>
where
    V: Vessel<Element = char> + 'static,
{
    /// Identifiers start with a letter or `_` and continue with letters, digits or `_`;
    /// operators are built from [`DEFAULT_OPERATOR_CHARS`].
    fn default() -> Self {
        Spec::new(
            satisfy(|c: &char| c.is_alphabetic() || *c == '_'),
            satisfy(|c: &char| c.is_alphanumeric() || *c == '_'),
            one_of(DEFAULT_OPERATOR_CHARS),
            one_of(DEFAULT_OPERATOR_CHARS),
        )
    }
}

impl<V: Vessel> Clone for Spec<V> {
    fn clone(&self) -> Self {
        Self {
            comment_start: self.comment_start.clone(),
            comment_end: self.comment_end.clone(),
            comment_line: self.comment_line.clone(),
            nested_comments: self.nested_comments,
            ident_start: self.ident_start.clone(),
            ident_letter: self.ident_letter.clone(),
            op_start: self.op_start.clone(),
            op_letter: self.op_letter.clone(),
            reserved_names: self.reserved_names.clone(),
            reserved_op_names: self.reserved_op_names.clone(),
            case_sensitive: self.case_sensitive,
        }
    }
}

impl<V: Vessel> fmt::Debug for Spec<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spec")
            .field("comment_start", &self.comment_start)
            .field("comment_end", &self.comment_end)
            .field("comment_line", &self.comment_line)
            .field("nested_comments", &self.nested_comments)
            .field("reserved_names", &self.reserved_names)
            .field("reserved_op_names", &self.reserved_op_names)
            .field("case_sensitive", &self.case_sensitive)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vessel::StrVessel;

    #[test]
    fn reserved_names_respect_case_sensitivity() {
        let spec: Spec<StrVessel> = Spec::default().reserved_names(["let", "in"]);
        assert!(spec.is_reserved_name("let"));
        assert!(!spec.is_reserved_name("LET"));

        let spec = spec.case_sensitive(false);
        assert!(spec.is_reserved_name("LET"));
        assert!(!spec.is_reserved_name("letter"));
    }

    #[test]
    fn reserved_op_names_are_separate_from_names() {
        let spec: Spec<StrVessel> = Spec::default()
            .reserved_names(["if"])
            .reserved_op_names(["=>", "::"]);
        assert!(spec.is_reserved_op_name("=>"));
        assert!(!spec.is_reserved_op_name("if"));
        assert!(!spec.is_reserved_name("=>"));
    }

    #[test]
    fn builder_sets_comment_delimiters() {
        let spec: Spec<StrVessel> = Spec::default()
            .comment_start("{-")
            .comment_end("-}")
            .comment_line("--")
            .nested_comments(true);
        assert_eq!(spec.comment_start, "{-");
        assert_eq!(spec.comment_end, "-}");
        assert_eq!(spec.comment_line, "--");
        assert!(spec.nested_comments);
    }
}
