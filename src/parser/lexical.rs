//! Token-level helpers on top of the primitive and structural parsers.
//!
//! Identifier and operator shapes, reserved words and case sensitivity all come from the
//! vessel's [`Spec`](crate::spec::Spec). Comments are not skipped: `whitespace` only ever
//! consumes whitespace chars, whatever comment delimiters the `Spec` declares.

use crate::error::{NoMatch, ParseResult};
use crate::vessel::Vessel;

use super::Parser;
use super::combinators::{BoxedParser, attempt, between, many};
use super::primitive::{satisfy, string};

/// Zero or more whitespace chars. Never fails.
pub fn whitespace<V>() -> BoxedParser<V, Vec<char>>
where
    V: Vessel<Element = char> + 'static,
{
    many(satisfy(|c: &char| c.is_whitespace()))
}

/// `parser`, then any trailing whitespace.
///
/// Whitespace is skipped even when `parser` fails, starting from wherever it stopped.
pub fn lexeme<V, T>(parser: BoxedParser<V, T>) -> BoxedParser<V, T>
where
    V: Vessel<Element = char> + 'static,
    T: 'static,
{
    let skip = whitespace();
    BoxedParser::new(move |vessel: &mut V| {
        let output = parser.parse(vessel);
        let _ = skip.parse(vessel);
        output
    })
}

/// The literal `s` followed by whitespace.
pub fn symbol<V>(s: &str) -> BoxedParser<V, String>
where
    V: Vessel<Element = char> + 'static,
{
    lexeme(string(s))
}

/// `( parser )`, with whitespace allowed after each paren.
pub fn parens<V, T>(parser: BoxedParser<V, T>) -> BoxedParser<V, T>
where
    V: Vessel<Element = char> + 'static,
    T: 'static,
{
    lexeme(between(symbol("("), symbol(")"), parser))
}

/// An `ident_start` char followed by any number of `ident_letter` chars.
///
/// Reserved names are not rejected here; see [`unreserved_identifier`].
pub fn identifier<V>() -> BoxedParser<V, String>
where
    V: Vessel<Element = char> + 'static,
{
    BoxedParser::new(|vessel: &mut V| {
        let start = vessel.spec().ident_start.clone();
        let letter = vessel.spec().ident_letter.clone();
        word(vessel, start, letter)
    })
}

/// An `op_start` char followed by any number of `op_letter` chars.
pub fn operator<V>() -> BoxedParser<V, String>
where
    V: Vessel<Element = char> + 'static,
{
    BoxedParser::new(|vessel: &mut V| {
        let start = vessel.spec().op_start.clone();
        let letter = vessel.spec().op_letter.clone();
        word(vessel, start, letter)
    })
}

fn word<V>(
    vessel: &mut V,
    start: BoxedParser<V, char>,
    letter: BoxedParser<V, char>,
) -> ParseResult<String>
where
    V: Vessel<Element = char> + 'static,
{
    let first = start.parse(vessel)?;
    let rest = many(letter).parse(vessel)?;
    Ok(std::iter::once(first).chain(rest).collect())
}

/// An identifier that is not one of the `Spec`'s reserved names.
pub fn unreserved_identifier<V>() -> BoxedParser<V, String>
where
    V: Vessel<Element = char> + 'static,
{
    attempt(BoxedParser::new(|vessel: &mut V| {
        let name = identifier().parse(vessel)?;
        if vessel.spec().is_reserved_name(&name) {
            Err(NoMatch)
        } else {
            Ok(name)
        }
    }))
}

/// The keyword `name` as a whole identifier, followed by whitespace.
///
/// Atomic: on failure nothing is consumed, trailing whitespace included.
/// `reserved("let")` does not match the start of `letter`. Case follows `Spec::case_sensitive`.
pub fn reserved<V>(name: &str) -> BoxedParser<V, String>
where
    V: Vessel<Element = char> + 'static,
{
    let name = name.to_string();
    attempt(lexeme(BoxedParser::new(move |vessel: &mut V| {
        let word = identifier().parse(vessel)?;
        if vessel.spec().names_match(&word, &name) {
            Ok(word)
        } else {
            Err(NoMatch)
        }
    })))
}

/// The operator `name` as a whole operator, followed by whitespace.
///
/// `reserved_op("=")` does not match the start of `=>`.
pub fn reserved_op<V>(name: &str) -> BoxedParser<V, String>
where
    V: Vessel<Element = char> + 'static,
{
    let name = name.to_string();
    attempt(lexeme(BoxedParser::new(move |vessel: &mut V| {
        let op = operator().parse(vessel)?;
        if op == name { Ok(op) } else { Err(NoMatch) }
    })))
}
