//! Parser values and the top-level entry points.
//!
//! Every parser has the same shape: given a vessel, it either produces a value and leaves the
//! cursor after what it consumed, or reports [`NoMatch`]. Composition happens when parsers are
//! built; input is only looked at when they are invoked.

pub mod combinators;
pub mod lexical;
pub mod primitive;
pub mod recursive;

pub use combinators::*;
pub use lexical::*;
pub use primitive::*;
pub use recursive::*;

use tracing::debug;

use crate::error::{NoMatch, ParseError, ParseResult};
use crate::vessel::Vessel;

pub trait Parser<V, T> {
    fn parse(&self, vessel: &mut V) -> ParseResult<T>;
}

// Allow closures to be parsers
impl<V, T, F: Fn(&mut V) -> ParseResult<T>> Parser<V, T> for F {
    fn parse(&self, vessel: &mut V) -> ParseResult<T> {
        self(vessel)
    }
}

/// Runs `parser` once against `vessel`.
///
/// On failure the error carries the offset the vessel was left at; nothing is reverted unless the
/// parser itself reverts.
pub fn parse<V, T, P>(parser: &P, vessel: &mut V) -> Result<T, ParseError>
where
    V: Vessel,
    P: Parser<V, T>,
{
    debug!(
        name = %vessel.position().name,
        offset = vessel.offset(),
        "parse started"
    );
    match parser.parse(vessel) {
        Ok(output) => {
            debug!(offset = vessel.offset(), "parse matched");
            Ok(output)
        }
        Err(NoMatch) => {
            debug!(offset = vessel.offset(), "parse did not match");
            Err(ParseError::no_match(vessel.offset()))
        }
    }
}

/// Like [`parse`], but the whole input has to be consumed.
pub fn parse_complete<V, T, P>(parser: &P, vessel: &mut V) -> Result<T, ParseError>
where
    V: Vessel,
    P: Parser<V, T>,
{
    let output = parse(parser, vessel)?;
    if vessel.at_end() {
        Ok(output)
    } else {
        let remaining = vessel.input().len();
        debug!(offset = vessel.offset(), remaining, "parse left trailing input");
        Err(ParseError::trailing_input(vessel.offset(), remaining))
    }
}
