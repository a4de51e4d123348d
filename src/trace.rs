//! Optional structured tracing of shift, reduce, and lex events.
//!
//! A [`TraceSink`] is injected into the engine at construction time; when
//! none is installed, tracing costs nothing. [`LogSink`] is the stock
//! implementation, forwarding every event to [`log::trace!`].

use crate::cursor::LexState;
use crate::tree::Symbol;
use crate::parser::ParseState;

/// Observer for engine transitions.
///
/// One callback per event class; all have empty default bodies so a sink
/// may subscribe to a subset.
pub trait TraceSink {
    /// A lookahead node was pushed under `state`.
    fn shift(&mut self, state: ParseState) {
        let _ = state;
    }

    /// A reduction built `symbol` from `child_count` entries, leaving the
    /// parser in `state`.
    fn reduce(&mut self, symbol: Symbol, child_count: usize, state: ParseState) {
        let _ = (symbol, child_count, state);
    }

    /// The cursor consumed `ch` and entered lexical sub-state `lex_state`.
    fn advance(&mut self, ch: Option<u8>, lex_state: LexState) {
        let _ = (ch, lex_state);
    }

    /// The scanner committed a token with `symbol`.
    fn token(&mut self, symbol: Symbol) {
        let _ = symbol;
    }
}

/// A [`TraceSink`] that forwards every event to [`log::trace!`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn shift(&mut self, state: ParseState) {
        log::trace!("shift {}", state);
    }

    fn reduce(&mut self, symbol: Symbol, child_count: usize, state: ParseState) {
        log::trace!("reduce: {} ({}), state: {}", symbol, child_count, state);
    }

    fn advance(&mut self, ch: Option<u8>, lex_state: LexState) {
        match ch {
            Some(c) => log::trace!("character: {:?}, lex state: {}", c as char, lex_state),
            None => log::trace!("character: <end>, lex state: {}", lex_state),
        }
    }

    fn token(&mut self, symbol: Symbol) {
        log::trace!("token: {}", symbol);
    }
}
