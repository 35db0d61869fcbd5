//! Processing pipeline orchestration
//!
//! Maps a stage-format name to an output: the token stage stops after
//! lexing, the ast stage runs the full parse, and each stage has a plain
//! and a JSON rendering. The CLI is a thin wrapper around this module.

use std::fmt;

use crate::formats;
use crate::lexer::{self, LexError};
use crate::parser::{self, ParseError};

/// Errors that can occur while processing a document
#[derive(Debug)]
pub enum ProcessingError {
    Lex(LexError),
    Parse(ParseError),
    UnknownFormat(String),
    Serialize(serde_json::Error),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::Lex(err) => write!(f, "lexing failed: {}", err),
            ProcessingError::Parse(err) => write!(f, "parsing failed: {}", err),
            ProcessingError::UnknownFormat(name) => {
                write!(
                    f,
                    "unknown format '{}' (available: {})",
                    name,
                    available_formats().join(", ")
                )
            }
            ProcessingError::Serialize(err) => write!(f, "serialization failed: {}", err),
        }
    }
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingError::Lex(err) => Some(err),
            ProcessingError::Parse(err) => Some(err),
            ProcessingError::Serialize(err) => Some(err),
            ProcessingError::UnknownFormat(_) => None,
        }
    }
}

impl From<LexError> for ProcessingError {
    fn from(err: LexError) -> Self {
        ProcessingError::Lex(err)
    }
}

impl From<ParseError> for ProcessingError {
    fn from(err: ParseError) -> Self {
        ProcessingError::Parse(err)
    }
}

impl From<serde_json::Error> for ProcessingError {
    fn from(err: serde_json::Error) -> Self {
        ProcessingError::Serialize(err)
    }
}

/// Output formats understood by the processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One debug-formatted token per line
    TokenSimple,
    /// Token sequence as JSON
    TokenJson,
    /// Canonical pretty-printed markup
    AstPretty,
    /// Element tree as JSON
    AstJson,
}

impl OutputFormat {
    pub fn from_string(name: &str) -> Result<Self, ProcessingError> {
        match name {
            "token-simple" => Ok(OutputFormat::TokenSimple),
            "token-json" => Ok(OutputFormat::TokenJson),
            "ast-pretty" => Ok(OutputFormat::AstPretty),
            "ast-json" => Ok(OutputFormat::AstJson),
            _ => Err(ProcessingError::UnknownFormat(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::TokenSimple => "token-simple",
            OutputFormat::TokenJson => "token-json",
            OutputFormat::AstPretty => "ast-pretty",
            OutputFormat::AstJson => "ast-json",
        }
    }
}

/// All format names accepted by [`OutputFormat::from_string`]
pub fn available_formats() -> Vec<&'static str> {
    vec!["token-simple", "token-json", "ast-pretty", "ast-json"]
}

/// Process source text into the requested output
pub fn process_source(source: &str, format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::TokenSimple => {
            let tokens = lexer::lex(source)?;
            let mut out = String::new();
            for token in &tokens {
                out.push_str(&format!("{:?}\n", token));
            }
            Ok(out)
        }
        OutputFormat::TokenJson => {
            let tokens = lexer::lex(source)?;
            let mut out = serde_json::to_string_pretty(&tokens)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::AstPretty => {
            let root = parser::parse(source)?;
            Ok(formats::to_pretty_string(&root))
        }
        OutputFormat::AstJson => {
            let root = parser::parse(source)?;
            let mut out = formats::to_json_string(&root)?;
            out.push('\n');
            Ok(out)
        }
    }
}
