//! Implementation of the xmlite lexer
//!
//! Thin driver over the logos-generated state machine. See the module
//! docs on [`crate::lexer`] for why lexing is total in practice.

use std::fmt;

use logos::Logos;

use crate::lexer::tokens::Token;

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A byte sequence no token rule matched
    UnexpectedCharacter { position: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter { position } => {
                write!(f, "unexpected character at byte {}", position)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Tokenize source text into the flat token sequence
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(LexError::UnexpectedCharacter {
                    position: lexer.span().start,
                })
            }
        }
    }
    Ok(tokens)
}

/// Tokenize source text, keeping each token's byte range in the source
pub fn lex_with_spans(source: &str) -> Result<Vec<(Token, std::ops::Range<usize>)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(LexError::UnexpectedCharacter {
                    position: lexer.span().start,
                })
            }
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_lexes_to_no_tokens() {
        assert!(lex("").unwrap().is_empty());
    }

    #[test]
    fn simple_tag_lexes_to_three_tokens() {
        assert_eq!(
            lex("<foo>").unwrap(),
            vec![
                Token::OpenAngle,
                Token::Keyword("foo".to_string()),
                Token::CloseAngle,
            ]
        );
    }

    #[test]
    fn attribute_lexes_as_keyword_equals_string() {
        assert_eq!(
            lex("<foo version=\"1.0\">").unwrap(),
            vec![
                Token::OpenAngle,
                Token::Keyword("foo".to_string()),
                Token::Whitespace(" ".to_string()),
                Token::Keyword("version".to_string()),
                Token::Equals,
                Token::QuotedString("1.0".to_string()),
                Token::CloseAngle,
            ]
        );
    }

    #[test]
    fn lex_with_spans_reports_byte_ranges() {
        let pairs = lex_with_spans("<a>").unwrap();
        assert_eq!(
            pairs,
            vec![
                (Token::OpenAngle, 0..1),
                (Token::Keyword("a".to_string()), 1..2),
                (Token::CloseAngle, 2..3),
            ]
        );
    }

    #[test]
    fn processing_instruction_lexes_with_glyph_tokens() {
        assert_eq!(
            lex("<?xml version=\"1.0\"?>").unwrap(),
            vec![
                Token::ProcInstrOpen,
                Token::Keyword("xml".to_string()),
                Token::Whitespace(" ".to_string()),
                Token::Keyword("version".to_string()),
                Token::Equals,
                Token::QuotedString("1.0".to_string()),
                Token::ProcInstrClose,
            ]
        );
    }
}
