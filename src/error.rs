//! Parse outcome and error records.
//!
//! A parse attempt terminates in exactly one of two ways: the driver accepts
//! (the finished tree lands in [`ParseResult::tree`]) or it reports a
//! classified failure (recorded in [`ParseResult::error`]). Before either
//! happens the result is in-progress: both fields read as "none".

use crate::tree::{Symbol, SyntaxTree};
use smartstring::alias::String;
use thiserror::Error;

/// Why a parse attempt halted, if it halted on failure.
///
/// The payload captures the offending lookahead symbol (`None` when lexing
/// failed before any symbol formed) and the human-readable descriptors of
/// the inputs that would have been acceptable. Both come from the external
/// driver; the engine records them verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No error recorded; the attempt is in progress or succeeded.
    #[default]
    #[error("no error")]
    None,

    /// The scanner could not extend any token from the current position.
    #[error("lexical error: expected one of {expected:?}, found {lookahead:?}")]
    Lexical {
        /// Symbol of the pending lookahead, if one had formed.
        lookahead: Option<Symbol>,
        /// Driver-supplied descriptions of acceptable inputs.
        expected: Vec<String>,
    },

    /// The action table had no transition for (state, lookahead).
    #[error("syntax error: expected one of {expected:?}, found {lookahead:?}")]
    Syntactic {
        /// Symbol of the pending lookahead, if one had formed.
        lookahead: Option<Symbol>,
        /// Driver-supplied descriptions of acceptable inputs.
        expected: Vec<String>,
    },
}

impl ParseError {
    /// Returns `true` if no error has been recorded.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, ParseError::None)
    }

    /// The recorded lookahead symbol, if this is an error variant.
    pub fn lookahead(&self) -> Option<Symbol> {
        match self {
            ParseError::None => None,
            ParseError::Lexical { lookahead, .. }
            | ParseError::Syntactic { lookahead, .. } => *lookahead,
        }
    }

    /// The driver-supplied expected-input descriptors, empty for `None`.
    pub fn expected(&self) -> &[String] {
        match self {
            ParseError::None => &[],
            ParseError::Lexical { expected, .. }
            | ParseError::Syntactic { expected, .. } => expected,
        }
    }
}

/// The accumulated outcome of a parse attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// The completed root node, set by `accept`.
    pub tree: Option<SyntaxTree>,
    /// The recorded failure, set by the error-reporting operations.
    pub error: ParseError,
}

impl ParseResult {
    /// Returns `true` once the attempt has terminated, by acceptance or by
    /// an error report.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.tree.is_some() || !self.error.is_none()
    }
}
