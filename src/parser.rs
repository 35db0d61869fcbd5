//! Tree builder module for the xmlite dialect
//!
//! Consumes the token sequence through a cursor with single-token
//! lookahead and no backtracking, producing an [`Element`](crate::ast::Element)
//! tree. All structural and well-formedness validation lives here; the
//! lexer stays permissive on purpose.
//!
//! Errors are fatal and carry the token cursor position. There is no
//! recovery: the first structural error aborts the whole parse.

pub mod error;
pub mod parser_impl;

pub use error::ParseError;
pub use parser_impl::{parse_tokens, Parser};

use crate::ast::Element;

/// Parse source text into an element tree: tokenize, then build
pub fn parse(source: &str) -> Result<Element, ParseError> {
    let tokens = crate::lexer::lex(source)?;
    parse_tokens(tokens)
}
