//! Runtime core for table-driven shift-reduce parsers.
//!
//! The crate holds the parse stack, executes shift/reduce/accept/error
//! transitions on instruction, and incrementally builds a syntax tree.
//! Grammar tables and the lexical scanner are external collaborators; see
//! [`Parser`] for the procedural contract.

mod cursor;
mod error;
mod parser;
mod trace;
mod tree;

pub use crate::cursor::{LexState, LexerCursor, Position};
pub use crate::error::{ParseError, ParseResult};
pub use crate::parser::{ParseState, Parser, ParserStats};
pub use crate::trace::{LogSink, TraceSink};
pub use crate::tree::{Symbol, SyntaxTree};
