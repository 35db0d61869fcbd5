//! Detokenizer for the xmlite dialect
//!
//! Converts a token stream back into source text. For any stream the lexer
//! produced from input without unterminated quoted strings this is the
//! exact inverse of lexing, which makes it a useful oracle for the
//! whitespace-preservation rules.

use crate::lexer::tokens::Token;

/// Trait for converting a token to the source text it was lexed from
pub trait ToSourceString {
    fn to_source_string(&self) -> String;
}

impl ToSourceString for Token {
    fn to_source_string(&self) -> String {
        match self {
            Token::CloseTagOpen => "</".to_string(),
            Token::ProcInstrOpen => "<?".to_string(),
            Token::OpenAngle => "<".to_string(),
            Token::SelfCloseAngle => "/>".to_string(),
            Token::ProcInstrClose => "?>".to_string(),
            Token::CloseAngle => ">".to_string(),
            Token::Equals => "=".to_string(),
            Token::QuotedString(s) => format!("\"{}\"", s),
            Token::Whitespace(s) | Token::Keyword(s) => s.clone(),
        }
    }
}

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(ToSourceString::to_source_string).collect()
}
