use crate::position::Position;
use crate::spec::Spec;

use super::{Element, Vessel};

/// Vessel over an in-memory sequence of elements.
#[derive(Debug)]
pub struct SliceVessel<E: Element, S: Clone = ()> {
    state: S,
    input: Vec<E>,
    position: Position,
    spec: Spec<SliceVessel<E, S>>,
}

/// Vessel over text, one element per `char`.
pub type StrVessel<S = ()> = SliceVessel<char, S>;

impl<E: Element, S: Clone> SliceVessel<E, S> {
    pub fn new(input: impl Into<Vec<E>>, spec: Spec<Self>, state: S) -> Self {
        Self {
            state,
            input: input.into(),
            position: Position::default(),
            spec,
        }
    }

    /// Names the input, e.g. after the file it was read from.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.position.name = name.into();
        self
    }

    /// Hands the user state back once parsing is over.
    pub fn into_state(self) -> S {
        self.state
    }

    fn locate(&self, offset: usize) -> (usize, usize) {
        let end = offset.min(self.input.len());
        self.input[..end]
            .iter()
            .fold((1, 1), |(line, column), element| {
                if element.is_line_break() {
                    (line + 1, 1)
                } else {
                    (line, column + 1)
                }
            })
    }
}

impl<S: Clone> SliceVessel<char, S> {
    pub fn from_text(input: &str, spec: Spec<Self>, state: S) -> Self {
        Self::new(input.chars().collect::<Vec<_>>(), spec, state)
    }
}

impl SliceVessel<char, ()> {
    /// Text vessel with the default [`Spec`] and no user state.
    pub fn text(input: &str) -> Self {
        Self::from_text(input, Spec::default(), ())
    }
}

impl<E: Element, S: Clone> Vessel for SliceVessel<E, S> {
    type Element = E;
    type State = S;

    fn state(&self) -> &S {
        &self.state
    }

    fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    fn set_state(&mut self, state: S) {
        self.state = state;
    }

    fn input(&self) -> &[E] {
        self.input.get(self.position.offset..).unwrap_or(&[])
    }

    fn set_input(&mut self, input: Vec<E>) {
        self.input = input;
    }

    fn position(&self) -> &Position {
        &self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn spec(&self) -> &Spec<Self> {
        &self.spec
    }

    fn set_spec(&mut self, spec: Spec<Self>) {
        self.spec = spec;
    }

    fn pop(&mut self, n: usize) {
        let start = self.position.offset.min(self.input.len());
        let end = start.saturating_add(n).min(self.input.len());
        for element in &self.input[start..end] {
            if element.is_line_break() {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }
        self.position.offset = end;
    }

    fn push(&mut self, n: usize) {
        let offset = self.position.offset.saturating_sub(n);
        let (line, column) = self.locate(offset);
        self.position.offset = offset;
        self.position.line = line;
        self.position.column = column;
    }
}
