use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use tracing::trace;

use crate::error::{NoMatch, ParseResult};
use crate::vessel::Vessel;

use super::Parser;

type ParserFn<V, T> = Rc<dyn Fn(&mut V) -> ParseResult<T>>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser<V, T> {
    parser: ParserFn<V, T>,
}

impl<V, T> Clone for BoxedParser<V, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<V: 'static, T: 'static> BoxedParser<V, T> {
    pub fn new<P: Parser<V, T> + 'static>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(move |vessel: &mut V| parser.parse(vessel)),
        }
    }
}

impl<V, T> Parser<V, T> for BoxedParser<V, T> {
    fn parse(&self, vessel: &mut V) -> ParseResult<T> {
        (self.parser)(vessel)
    }
}

// === Combinators as methods ===

impl<V: Vessel + 'static, T: 'static> BoxedParser<V, T> {
    /// Sequence: parse self then other, return (T, U)
    pub fn seq<U: 'static>(self, other: BoxedParser<V, U>) -> BoxedParser<V, (T, U)> {
        BoxedParser::new(move |vessel: &mut V| {
            let a = self.parse(vessel)?;
            let b = other.parse(vessel)?;
            Ok((a, b))
        })
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'static>(self, other: BoxedParser<V, U>) -> BoxedParser<V, T> {
        BoxedParser::new(move |vessel: &mut V| {
            let a = self.parse(vessel)?;
            let _ = other.parse(vessel)?;
            Ok(a)
        })
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'static>(self, other: BoxedParser<V, U>) -> BoxedParser<V, U> {
        BoxedParser::new(move |vessel: &mut V| {
            let _ = self.parse(vessel)?;
            other.parse(vessel)
        })
    }

    /// Map: transform result
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<V, U> {
        BoxedParser::new(move |vessel: &mut V| {
            let a = self.parse(vessel)?;
            Ok(f(a))
        })
    }

    /// Choice between two parsers, with the same rules as [`any`].
    pub fn or(self, other: BoxedParser<V, T>) -> BoxedParser<V, T> {
        any(vec![self, other])
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<V: Vessel + 'static, T: 'static, U: 'static> Add<BoxedParser<V, U>> for BoxedParser<V, T> {
    type Output = BoxedParser<V, (T, U)>;

    fn add(self, rhs: BoxedParser<V, U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<V: Vessel + 'static, T: 'static, U: 'static> Sub<BoxedParser<V, U>> for BoxedParser<V, T> {
    type Output = BoxedParser<V, T>;

    fn sub(self, rhs: BoxedParser<V, U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<V: Vessel + 'static, T: 'static, U: 'static> Mul<BoxedParser<V, U>> for BoxedParser<V, T> {
    type Output = BoxedParser<V, U>;

    fn mul(self, rhs: BoxedParser<V, U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<V: Vessel + 'static, T: 'static> BitOr<BoxedParser<V, T>> for BoxedParser<V, T> {
    type Output = BoxedParser<V, T>;

    fn bitor(self, rhs: BoxedParser<V, T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<V: Vessel + 'static, T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F>
    for BoxedParser<V, T>
{
    type Output = BoxedParser<V, U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

// === Repetition ===

/// Parse zero or more occurrences. Never fails.
///
/// The sub-parser must fail without consuming; a partially consumed failure is left where it
/// stopped. A success that consumed nothing ends the loop, so `many(many(p))` terminates.
pub fn many<V: Vessel + 'static, T: 'static>(parser: BoxedParser<V, T>) -> BoxedParser<V, Vec<T>> {
    BoxedParser::new(move |vessel: &mut V| {
        let mut results = Vec::new();
        loop {
            let before = vessel.offset();
            match parser.parse(vessel) {
                Ok(item) => {
                    results.push(item);
                    if vessel.offset() == before {
                        break;
                    }
                }
                Err(NoMatch) => break,
            }
        }
        Ok(results)
    })
}

/// Parse one or more occurrences
pub fn many1<V: Vessel + 'static, T: 'static>(parser: BoxedParser<V, T>) -> BoxedParser<V, Vec<T>> {
    let rest = many(parser.clone());
    BoxedParser::new(move |vessel: &mut V| {
        let first = parser.parse(vessel)?;
        let mut results = vec![first];
        results.extend(rest.parse(vessel)?);
        Ok(results)
    })
}

/// `parser` repeated, separated by `delim`. Never fails.
///
/// A trailing delimiter is accepted: the loop ends as soon as either side fails.
pub fn sep_by<V, D, T>(delim: BoxedParser<V, D>, parser: BoxedParser<V, T>) -> BoxedParser<V, Vec<T>>
where
    V: Vessel + 'static,
    D: 'static,
    T: 'static,
{
    BoxedParser::new(move |vessel: &mut V| {
        let mut results = Vec::new();
        loop {
            let before = vessel.offset();
            match parser.parse(vessel) {
                Ok(item) => results.push(item),
                Err(NoMatch) => break,
            }
            if delim.parse(vessel).is_err() || vessel.offset() == before {
                break;
            }
        }
        Ok(results)
    })
}

/// Optional: parse zero or one
pub fn optional<V: Vessel + 'static, T: 'static>(
    parser: BoxedParser<V, T>,
) -> BoxedParser<V, Option<T>> {
    BoxedParser::new(move |vessel: &mut V| Ok(parser.parse(vessel).ok()))
}

// === Choice and sequencing ===

/// First alternative that matches.
///
/// Alternatives all start from the same position: when one fails after consuming input, the
/// remaining ones are not tried. Wrap such alternatives in [`attempt`].
pub fn any<V: Vessel + 'static, T: 'static>(parsers: Vec<BoxedParser<V, T>>) -> BoxedParser<V, T> {
    BoxedParser::new(move |vessel: &mut V| {
        let start = vessel.offset();
        for parser in &parsers {
            match parser.parse(vessel) {
                Ok(output) => return Ok(output),
                Err(NoMatch) if vessel.offset() == start => continue,
                Err(NoMatch) => break,
            }
        }
        Err(NoMatch)
    })
}

/// Run every parser in order and keep the last result.
///
/// Stops at the first failure without reverting. An empty list never matches.
pub fn all<V: Vessel + 'static, T: 'static>(parsers: Vec<BoxedParser<V, T>>) -> BoxedParser<V, T> {
    BoxedParser::new(move |vessel: &mut V| {
        let mut output = Err(NoMatch);
        for parser in &parsers {
            output = Ok(parser.parse(vessel)?);
        }
        output
    })
}

/// Run every parser in order and keep all results.
///
/// Stops at the first failure without reverting; partial results are dropped.
pub fn collect<V: Vessel + 'static, T: 'static>(
    parsers: Vec<BoxedParser<V, T>>,
) -> BoxedParser<V, Vec<T>> {
    BoxedParser::new(move |vessel: &mut V| {
        parsers
            .iter()
            .map(|parser| parser.parse(vessel))
            .collect::<ParseResult<Vec<T>>>()
    })
}

/// `begin`, then `parser`, then `end`, as one atomic step. Keeps only `parser`'s result.
pub fn between<V, B, E, T>(
    begin: BoxedParser<V, B>,
    end: BoxedParser<V, E>,
    parser: BoxedParser<V, T>,
) -> BoxedParser<V, T>
where
    V: Vessel + 'static,
    B: 'static,
    E: 'static,
    T: 'static,
{
    attempt(begin.skip_left(parser).skip(end))
}

// === Backtracking ===

/// Runs `parser`; if it fails, state and position are put back exactly as they were.
pub fn attempt<V: Vessel + 'static, T: 'static>(parser: BoxedParser<V, T>) -> BoxedParser<V, T> {
    BoxedParser::new(move |vessel: &mut V| {
        let state = vessel.state().clone();
        let position = vessel.position().clone();
        let result = parser.parse(vessel);
        if result.is_err() {
            trace!(from = vessel.offset(), to = position.offset, "reverting failed attempt");
            vessel.set_state(state);
            vessel.set_position(position);
        }
        result
    })
}

/// Succeeds without consuming anything iff `parser` fails here.
pub fn not_followed_by<V: Vessel + 'static, T: 'static>(
    parser: BoxedParser<V, T>,
) -> BoxedParser<V, ()> {
    BoxedParser::new(move |vessel: &mut V| {
        let state = vessel.state().clone();
        let position = vessel.position().clone();
        let matched = parser.parse(vessel).is_ok();
        vessel.set_state(state);
        vessel.set_position(position);
        if matched { Err(NoMatch) } else { Ok(()) }
    })
}
