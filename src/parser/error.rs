//! Error types for the tree builder
//!
//! Every variant carries the token cursor position so callers can point at
//! the offending token when reporting.

use std::fmt;

use crate::lexer::{LexError, Token};

/// Errors that can occur while building the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Tokenization failed before tree building started
    Lex(LexError),
    /// The token sequence ended in the middle of a construct
    UnexpectedEndOfInput {
        position: usize,
        context: &'static str,
    },
    /// A token that cannot appear at this point in the grammar
    UnexpectedToken {
        found: Token,
        position: usize,
        context: &'static str,
    },
    /// A closing tag whose name differs from the tag it closes
    MismatchedTag {
        opened: String,
        closed: String,
        position: usize,
    },
    /// An attribute key that is not followed by `="value"`
    MissingAttributeValue { key: String, position: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => write!(f, "{}", err),
            ParseError::UnexpectedEndOfInput { position, context } => {
                write!(
                    f,
                    "unexpected end of input at token {} while reading {}",
                    position, context
                )
            }
            ParseError::UnexpectedToken {
                found,
                position,
                context,
            } => {
                write!(
                    f,
                    "unexpected {:?} at token {} while reading {}",
                    found, position, context
                )
            }
            ParseError::MismatchedTag {
                opened,
                closed,
                position,
            } => {
                write!(
                    f,
                    "closing tag '{}' at token {} does not match opening tag '{}'",
                    closed, position, opened
                )
            }
            ParseError::MissingAttributeValue { key, position } => {
                write!(
                    f,
                    "attribute '{}' at token {} has no quoted value",
                    key, position
                )
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}
