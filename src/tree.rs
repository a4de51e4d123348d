//! Syntax-tree nodes produced by the parser engine.
//!
//! A [`SyntaxTree`] is either a terminal (a committed token, no children) or
//! a nonterminal built by a reduction, wrapping the stack entries the
//! reduction consumed. Nodes are exclusively owned: they move between the
//! lookahead slot, the parse stack, and a reduction's child list, and are
//! never aliased.

use std::fmt;

/// A grammar symbol identifier, terminal or nonterminal.
///
/// Symbol numbering is owned by the external grammar tables; the engine
/// treats symbols as opaque. "No symbol yet" is expressed as
/// `Option<Symbol>` at the use sites, never as an in-band sentinel value.
pub type Symbol = usize;

/// An immutable, arity-tagged syntax-tree node.
///
/// Terminals are created by [`Parser::set_lookahead`] and carry no children;
/// nonterminals are created by [`Parser::reduce`] and own exactly the nodes
/// the reduction popped, in their original left-to-right order.
///
/// [`Parser::set_lookahead`]: crate::Parser::set_lookahead
/// [`Parser::reduce`]: crate::Parser::reduce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    symbol: Symbol,
    children: Vec<SyntaxTree>,
}

impl SyntaxTree {
    /// Creates a terminal node for `symbol`.
    #[inline]
    pub fn terminal(symbol: Symbol) -> Self {
        Self {
            symbol,
            children: Vec::new(),
        }
    }

    /// Creates a nonterminal node for `symbol` owning `children`.
    #[inline]
    pub fn nonterminal(symbol: Symbol, children: Vec<SyntaxTree>) -> Self {
        Self { symbol, children }
    }

    /// The symbol this node is tagged with.
    #[inline]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The node's children, empty for terminals.
    #[inline]
    pub fn children(&self) -> &[SyntaxTree] {
        &self.children
    }

    /// Number of children; always equals `self.children().len()`.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }
}

/// Renders the node as an s-expression over symbol ids, e.g. `(3 1 2 1)`.
impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.children.is_empty() {
            write!(f, "{}", self.symbol)
        } else {
            write!(f, "({}", self.symbol)?;
            for child in &self.children {
                write!(f, " {}", child)?;
            }
            write!(f, ")")
        }
    }
}
