//! Lexer module for the xmlite dialect
//!
//! Scans raw text in a single left-to-right pass and produces the flat
//! token sequence consumed by the parser. The scan has no lookahead beyond
//! the two-character glyphs and no backtracking.
//!
//! Two rules carry the round-trip guarantee:
//! - whitespace is lexed as maximal runs with the exact run preserved as
//!   the token payload, so indentation and newlines between tags survive
//!   tokenization;
//! - the glyphs `</`, `<?`, `/>` and `?>` are recognised directly at scan
//!   time, so the parser never has to reassemble them from adjacent
//!   characters.
//!
//! The token rules are total over the input alphabet: an unterminated
//! quoted string simply runs to the end of input, and every other byte
//! falls into some rule. Lexing therefore cannot fail in practice, but the
//! public contract stays `Result` so strictness can be tightened later
//! without touching callers.

pub mod detokenizer;
pub mod lexer_impl;
pub mod tokens;

pub use detokenizer::{detokenize, ToSourceString};
pub use lexer_impl::{lex, lex_with_spans, LexError};
pub use tokens::Token;
