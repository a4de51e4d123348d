//! Input cursor shared between the engine and the external scanner.
//!
//! The cursor tracks how much of the input has been consumed and which
//! lexical sub-state (the DFA state of the external scanner) is active. It
//! never interprets the bytes it consumes; the scanner decides token
//! boundaries and instructs the cursor one unit at a time.

/// A lexical sub-state of the external scanner's automaton, persisted
/// across [`LexerCursor::advance`] calls to support multi-character tokens.
pub type LexState = usize;

/// A 0-based line/column position in source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// 0-based line number.
    pub line: usize,
    /// 0-based column number (byte position in the line).
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Tracks input position and the scanner's current lexical sub-state.
///
/// Advancing consumes exactly one byte and records the sub-state the
/// scanner transitioned to. Line/column bookkeeping rides along for
/// diagnostics.
#[derive(Debug, Clone)]
pub struct LexerCursor<'a> {
    input: &'a [u8],
    pos: usize,
    lex_state: LexState,
    location: Position,
}

impl<'a> LexerCursor<'a> {
    /// Creates a cursor at position 0 with lex state 0.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            lex_state: 0,
            location: Position::default(),
        }
    }

    /// Peeks at the byte under the cursor without consuming it.
    ///
    /// Returns `None` at end of input; the scanner is expected to stop
    /// advancing there, typically by yielding an end-of-file token.
    #[inline]
    pub fn current_char(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consumes one byte and records the scanner's next sub-state.
    pub fn advance(&mut self, next_lex_state: LexState) {
        if self.current_char() == Some(b'\n') {
            self.location.line += 1;
            self.location.column = 0;
        } else {
            self.location.column += 1;
        }
        self.pos += 1;
        self.lex_state = next_lex_state;
    }

    /// Number of input units consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Line/column of the byte under the cursor.
    #[inline]
    pub fn location(&self) -> Position {
        self.location
    }

    /// The scanner's current lexical sub-state.
    #[inline]
    pub fn lex_state(&self) -> LexState {
        self.lex_state
    }

    /// Overwrites the lexical sub-state without consuming input.
    ///
    /// Used by the scanner to resume a multi-character token scan or to
    /// switch classification mode between tokens.
    #[inline]
    pub fn set_lex_state(&mut self, lex_state: LexState) {
        self.lex_state = lex_state;
    }

    /// Returns `true` once every input unit has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }
}
