//! # vessel-parsec - composable recursive-descent parsers
//!
//! A small parser-combinator toolkit. Parsers are first-class values built by composing
//! smaller parsers; they run against a [`Vessel`](vessel::Vessel), a mutable cursor that owns
//! the input, the current [`Position`](position::Position), the lexical
//! [`Spec`](spec::Spec) and an arbitrary user state.
//!
//! ## Layers
//!
//! 1. **Primitives** (`parser::primitive`) - `satisfy`, `string`, `token`: the only parsers
//!    that look at the input.
//! 2. **Structure** (`parser::combinators`) - `many`, `sep_by`, `any`, `all`, `collect`,
//!    `between`, `attempt`, built from other parsers only.
//! 3. **Lexical** (`parser::lexical`) - `whitespace`, `lexeme`, `symbol`, `parens`,
//!    `identifier` and friends, driven by the vessel's `Spec`.
//! 4. **Recursion** (`parser::recursive`) - `ParserRef` and `lazy` for self-referential rules.
//!
//! ## Backtracking
//!
//! A failed parser reports [`NoMatch`](error::NoMatch) and may leave the cursor wherever it
//! stopped. Only [`attempt`](parser::attempt) (and `between`, which uses it) puts the
//! position and state back. `any` moves on to the next alternative only when the failed one
//! consumed nothing, so alternatives sharing a prefix need `attempt`.
//!
//! ## Example
//!
//! ```
//! use vessel_parsec::parser::{Parser, identifier, lexeme, sep_by, symbol};
//! use vessel_parsec::vessel::StrVessel;
//!
//! let names = sep_by(symbol(","), lexeme(identifier()));
//! let mut vessel = StrVessel::text("alpha, beta ,gamma");
//!
//! assert_eq!(
//!     names.parse(&mut vessel),
//!     Ok(vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()])
//! );
//! ```
//!
//! ## Limits
//!
//! Parsing is synchronous and recursive on the call stack, so deeply nested input can exhaust
//! the stack. Left-recursive rules never terminate. There is no memoisation and no error
//! reporting beyond the offset at which a top-level parse gave up.

pub mod error;
pub mod parser;
pub mod position;
pub mod spec;
pub mod vessel;

pub use error::{NoMatch, ParseError, ParseResult};
pub use parser::{BoxedParser, Parser, parse, parse_complete};
pub use position::Position;
pub use spec::Spec;
pub use vessel::{Element, SliceVessel, StrVessel, Vessel};
