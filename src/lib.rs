//! # xmlite
//!
//! A parser and canonical pretty-printer for a restricted XML dialect.
//!
//! The pipeline is strictly one-way: text -> tokens -> tree -> text.
//! [`lexer`] produces the flat token sequence, [`parser`] builds the
//! [`ast::Element`] tree from it with single-token lookahead, and
//! [`formats::pretty`] re-emits canonical markup. For documents already in
//! canonical layout (tab indentation, one content branch per element),
//! parse-then-print reproduces the input byte for byte.
//!
//! The dialect is deliberately small: no DTDs, no entity expansion, no
//! namespaces, no CDATA, no comments. The first structural error aborts a
//! parse; there is no recovery.

pub mod ast;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;

pub use ast::{Attribute, Element, Instruction};
pub use formats::to_pretty_string;
pub use lexer::{lex, LexError, Token};
pub use parser::{parse, ParseError};
