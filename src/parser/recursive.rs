//! Self-referential grammars.
//!
//! Parsers are plain values built eagerly, so a rule cannot mention itself while it is being
//! built. Either declare a [`ParserRef`] up front and [`define`](ParserRef::define) it once the
//! rule exists, or write the rule as a function and wrap the recursive call in [`lazy`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::warn;

use crate::error::NoMatch;
use crate::vessel::Vessel;

use super::Parser;
use super::combinators::BoxedParser;

/// A parser slot that can be handed out before it is filled.
///
/// Handles returned by [`parser`](ParserRef::parser) look up the slot on every invocation.
/// A rule that contains its own handle keeps itself alive through an `Rc` cycle, so recursive
/// grammars built this way are meant to be built once and kept.
pub struct ParserRef<V, T> {
    slot: Rc<RefCell<Option<BoxedParser<V, T>>>>,
}

impl<V, T> Clone for ParserRef<V, T> {
    fn clone(&self) -> Self {
        ParserRef {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<V, T> Default for ParserRef<V, T> {
    fn default() -> Self {
        ParserRef {
            slot: Rc::new(RefCell::new(None)),
        }
    }
}

impl<V, T> fmt::Debug for ParserRef<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRef")
            .field("defined", &self.is_defined())
            .finish()
    }
}

impl<V, T> ParserRef<V, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the slot. Defining again replaces the previous parser for every handle.
    pub fn define(&self, parser: BoxedParser<V, T>) {
        *self.slot.borrow_mut() = Some(parser);
    }

    pub fn is_defined(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

impl<V: Vessel + 'static, T: 'static> ParserRef<V, T> {
    /// A parser that forwards to whatever the slot holds when it runs.
    ///
    /// Running it before the slot is defined is a no-match.
    pub fn parser(&self) -> BoxedParser<V, T> {
        let slot = Rc::clone(&self.slot);
        BoxedParser::new(move |vessel: &mut V| {
            let target = slot.borrow().clone();
            match target {
                Some(parser) => parser.parse(vessel),
                None => {
                    warn!(offset = vessel.offset(), "recursive parser invoked before definition");
                    Err(NoMatch)
                }
            }
        })
    }
}

/// Builds the parser with `build` each time it runs.
///
/// Lets grammar rules be plain functions that call each other, e.g.
/// `fn expr() -> BoxedParser<..> { any(vec![atom(), parens(lazy(expr))]) }`.
pub fn lazy<V, T, F>(build: F) -> BoxedParser<V, T>
where
    V: Vessel + 'static,
    T: 'static,
    F: Fn() -> BoxedParser<V, T> + 'static,
{
    BoxedParser::new(move |vessel: &mut V| build().parse(vessel))
}
