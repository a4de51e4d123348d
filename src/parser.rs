//! The shift-reduce parser engine.
//!
//! [`Parser`] is the single stateful object of the runtime: it owns the
//! parse stack, the pending lookahead node, the lexer cursor, and the
//! accumulated [`ParseResult`]. It makes no grammar decisions of its own.
//! An external driver inspects [`Parser::state`] and
//! [`Parser::lookahead_symbol`], consults its action/goto tables, and
//! instructs the engine which transition to execute; an external scanner
//! inspects [`Parser::current_char`] and [`Parser::lex_state`] and commits
//! tokens via [`Parser::set_lookahead`].
//!
//! Misuse of the primitives (shifting without a resolved lookahead,
//! reducing more entries than exist, terminating an attempt twice) is a
//! driver-side contract violation and panics; it is never a recoverable
//! engine error.

use crate::cursor::{LexState, LexerCursor, Position};
use crate::error::{ParseError, ParseResult};
use crate::trace::TraceSink;
use crate::tree::{Symbol, SyntaxTree};
use smartstring::alias::String;

/// A parser state number: a node in the external action/goto table.
pub type ParseState = usize;

/// The synthetic state reported before the first shift establishes slot 0.
const START_STATE: ParseState = 0;

/// Stack capacity reserved up front; the stack grows past it freely.
const INITIAL_STACK_CAPACITY: usize = 100;

/// One slot of parse-stack memory: the state entered and the subtree that
/// was on deck when it was entered.
#[derive(Debug, Clone)]
struct StackEntry {
    state: ParseState,
    node: SyntaxTree,
}

/// Counters over one parse attempt.
#[derive(Debug, Clone, Default)]
pub struct ParserStats {
    /// Input units consumed by [`Parser::advance`].
    pub chars: usize,
    /// Tokens committed by [`Parser::set_lookahead`].
    pub tokens: usize,
    /// Shift transitions executed.
    pub shifts: usize,
    /// Reduce transitions executed.
    pub reductions: usize,
}

/// The parser runtime state for one input.
///
/// One engine instance per input; instances share nothing mutable, so the
/// (external, read-only) grammar tables may drive any number of them.
pub struct Parser<'a> {
    cursor: LexerCursor<'a>,
    stack: Vec<StackEntry>,
    lookahead: Option<SyntaxTree>,
    result: ParseResult,
    stats: ParserStats,
    sink: Option<Box<dyn TraceSink>>,
}

impl<'a> Parser<'a> {
    /// Creates an engine over `input`: empty stack, position 0, lex state
    /// 0, no lookahead, in-progress result.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: LexerCursor::new(input),
            stack: Vec::with_capacity(INITIAL_STACK_CAPACITY),
            lookahead: None,
            result: ParseResult::default(),
            stats: ParserStats::default(),
            sink: None,
        }
    }

    /// Creates an engine with a [`TraceSink`] observing its transitions.
    pub fn with_sink(input: &'a [u8], sink: impl TraceSink + 'static) -> Self {
        let mut parser = Self::new(input);
        parser.sink = Some(Box::new(sink));
        parser
    }

    /// Installs or replaces the trace sink.
    pub fn set_trace_sink(&mut self, sink: impl TraceSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    /// The current parse state: the top-of-stack state, or the synthetic
    /// initial state before anything has been shifted.
    #[inline]
    pub fn state(&self) -> ParseState {
        self.stack.last().map_or(START_STATE, |entry| entry.state)
    }

    /// Number of entries on the parse stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Pushes the resolved lookahead under `state`, clearing the slot.
    ///
    /// # Panics
    ///
    /// Panics if no lookahead is resolved.
    pub fn shift(&mut self, state: ParseState) {
        let Some(node) = self.lookahead.take() else {
            panic!("shift without a resolved lookahead");
        };
        self.stack.push(StackEntry { state, node });
        self.stats.shifts += 1;
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.shift(state);
        }
    }

    /// Pops `child_count` entries as the children of a fresh `symbol` node,
    /// in their original left-to-right order. The new node becomes the
    /// lookahead, so the driver can route it through the goto table or
    /// reduce again without re-lexing.
    ///
    /// # Panics
    ///
    /// Panics if `child_count` exceeds the stack depth.
    pub fn reduce(&mut self, symbol: Symbol, child_count: usize) {
        assert!(
            child_count <= self.stack.len(),
            "reduce of {} children with only {} stacked",
            child_count,
            self.stack.len()
        );
        let split = self.stack.len() - child_count;
        let children = self
            .stack
            .split_off(split)
            .into_iter()
            .map(|entry| entry.node)
            .collect();
        self.lookahead = Some(SyntaxTree::nonterminal(symbol, children));
        self.stats.reductions += 1;
        if let Some(sink) = self.sink.as_deref_mut() {
            let state = self.stack.last().map_or(START_STATE, |entry| entry.state);
            sink.reduce(symbol, child_count, state);
        }
    }

    /// Terminates the attempt successfully: the top entry's node moves into
    /// the result's tree field.
    ///
    /// # Panics
    ///
    /// Panics if the attempt already terminated, or on an empty stack.
    pub fn accept(&mut self) {
        assert!(!self.result.is_done(), "accept after attempt terminated");
        let Some(entry) = self.stack.pop() else {
            panic!("accept on an empty stack");
        };
        self.result.tree = Some(entry.node);
    }

    /// Records a syntactic failure: the action table had no transition for
    /// the current (state, lookahead) pair. Terminal for the attempt.
    ///
    /// # Panics
    ///
    /// Panics if the attempt already terminated.
    pub fn report_syntax_error(&mut self, expected: Vec<String>) {
        assert!(!self.result.is_done(), "error report after attempt terminated");
        self.result.error = ParseError::Syntactic {
            lookahead: self.lookahead_symbol(),
            expected,
        };
    }

    /// Records a lexical failure: the scanner could not extend any token
    /// from the current position and lex state. Terminal for the attempt.
    ///
    /// # Panics
    ///
    /// Panics if the attempt already terminated.
    pub fn report_lex_error(&mut self, expected: Vec<String>) {
        assert!(!self.result.is_done(), "error report after attempt terminated");
        self.result.error = ParseError::Lexical {
            lookahead: self.lookahead_symbol(),
            expected,
        };
    }

    /// Symbol of the pending lookahead node, `None` while unresolved.
    #[inline]
    pub fn lookahead_symbol(&self) -> Option<Symbol> {
        self.lookahead.as_ref().map(SyntaxTree::symbol)
    }

    /// The pending lookahead node itself.
    #[inline]
    pub fn lookahead(&self) -> Option<&SyntaxTree> {
        self.lookahead.as_ref()
    }

    /// Commits a scanned token: installs a fresh terminal node as the
    /// lookahead, overwriting any stale value.
    pub fn set_lookahead(&mut self, symbol: Symbol) {
        self.lookahead = Some(SyntaxTree::terminal(symbol));
        self.stats.tokens += 1;
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.token(symbol);
        }
    }

    /// Consumes one input unit and records the scanner's next sub-state.
    pub fn advance(&mut self, next_lex_state: LexState) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.advance(self.cursor.current_char(), next_lex_state);
        }
        self.cursor.advance(next_lex_state);
        self.stats.chars += 1;
    }

    /// Peeks at the byte under the cursor; `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<u8> {
        self.cursor.current_char()
    }

    /// The scanner's current lexical sub-state.
    #[inline]
    pub fn lex_state(&self) -> LexState {
        self.cursor.lex_state()
    }

    /// Overwrites the lexical sub-state without consuming input.
    #[inline]
    pub fn set_lex_state(&mut self, lex_state: LexState) {
        self.cursor.set_lex_state(lex_state);
    }

    /// Number of input units consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Line/column of the byte under the cursor.
    #[inline]
    pub fn location(&self) -> Position {
        self.cursor.location()
    }

    /// The accumulated outcome. Before `accept` or an error report both
    /// fields read as "none": in progress, neither success nor failure.
    #[inline]
    pub fn result(&self) -> &ParseResult {
        &self.result
    }

    /// Consumes the engine and yields the outcome.
    pub fn into_result(self) -> ParseResult {
        self.result
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> ParserStats {
        self.stats.clone()
    }
}
