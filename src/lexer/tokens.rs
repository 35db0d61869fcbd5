//! Token definitions for the xmlite dialect
//!
//! All tokens are defined with the logos derive macro. Payload-carrying
//! kinds keep the exact lexed substring (dequoted for
//! [`Token::QuotedString`]) so a token stream can be turned back into
//! source text losslessly; see the detokenizer module.
//!
//! A `/` or `?` that is not part of a `/>` or `?>` glyph falls through to
//! the keyword rule, so URLs and prose keep lexing as plain text. The
//! keyword rule refuses to end in `/` or `?`, which keeps the closing
//! glyphs recognisable even directly after a tag or instruction name
//! (`<a/>`, `<?xml?>`).

use logos::Logos;
use serde::Serialize;

/// All possible tokens in the xmlite dialect
#[derive(Logos, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Token {
    /// `</` opening a closing tag
    #[token("</")]
    CloseTagOpen,

    /// `<?` opening a processing instruction
    #[token("<?")]
    ProcInstrOpen,

    /// `<` opening a tag
    #[token("<")]
    OpenAngle,

    /// `/>` closing a self-closing tag
    #[token("/>")]
    SelfCloseAngle,

    /// `?>` closing a processing instruction
    #[token("?>")]
    ProcInstrClose,

    /// `>` closing a tag
    #[token(">")]
    CloseAngle,

    /// `=` between an attribute key and its value
    #[token("=")]
    Equals,

    /// A quoted string; the payload is the content without the quotes.
    /// There is no escape handling, and an unterminated string runs to the
    /// end of input.
    #[regex(r#""[^"]*"?"#, dequote)]
    QuotedString(String),

    /// A maximal run of whitespace, preserved verbatim
    #[regex(r"\s+", |lex| lex.slice().to_owned())]
    Whitespace(String),

    /// A bare run of non-delimiter characters: tag names, attribute keys,
    /// and unquoted text. Quotes are legal anywhere but the first
    /// character, where they start a quoted string instead. A run of two
    /// or more characters never ends in `/` or `?`: those stay available
    /// for the `/>` and `?>` glyphs, and the parser reassembles adjacent
    /// keyword payloads in text content, so `a/b` is one keyword while
    /// `a/` lexes as `a` then `/`.
    #[regex(r#"[^<>=\s"]([^<>=\s]*[^<>=\s/?])?"#, |lex| lex.slice().to_owned())]
    Keyword(String),
}

fn dequote(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = slice.strip_prefix('"').unwrap_or(slice);
    inner.strip_suffix('"').unwrap_or(inner).to_owned()
}

impl Token {
    /// Check if this token is a whitespace run
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }
}
