//! The cursor every combinator runs against.
//!
//! A vessel owns the whole input, the current [`Position`], the lexical [`Spec`] and an
//! arbitrary user state. Exactly one vessel exists per top-level parse and it is threaded by
//! `&mut` through every combinator call.

mod slice;

pub use slice::{SliceVessel, StrVessel};

use crate::position::Position;
use crate::spec::Spec;

/// An input element a vessel can hold.
pub trait Element: Clone {
    /// Whether consuming this element moves the cursor to the next line.
    fn is_line_break(&self) -> bool {
        false
    }
}

impl Element for char {
    fn is_line_break(&self) -> bool {
        *self == '\n'
    }
}

impl Element for u8 {
    fn is_line_break(&self) -> bool {
        *self == b'\n'
    }
}

pub trait Vessel: Sized {
    type Element: Element;
    type State: Clone;

    fn state(&self) -> &Self::State;
    fn state_mut(&mut self) -> &mut Self::State;
    fn set_state(&mut self, state: Self::State);

    /// Remaining input, starting at the current offset.
    fn input(&self) -> &[Self::Element];
    /// Replaces the underlying input. The position is kept as is.
    fn set_input(&mut self, input: Vec<Self::Element>);

    fn position(&self) -> &Position;
    fn set_position(&mut self, position: Position);

    fn spec(&self) -> &Spec<Self>;
    fn set_spec(&mut self, spec: Spec<Self>);

    /// Looks at the next `n` elements without consuming them.
    fn get(&self, n: usize) -> Option<&[Self::Element]> {
        self.input().get(..n)
    }

    /// Looks at the next element without consuming it.
    fn next(&self) -> Option<&Self::Element> {
        self.input().first()
    }

    /// Advances the cursor by `n` elements.
    fn pop(&mut self, n: usize);

    /// Moves the cursor back by `n` elements.
    fn push(&mut self, n: usize);

    fn offset(&self) -> usize {
        self.position().offset
    }

    fn at_end(&self) -> bool {
        self.next().is_none()
    }
}
