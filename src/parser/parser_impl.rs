//! Recursive-descent tree builder
//!
//! One call frame per nesting level; the cursor only ever moves forward.
//! The content model is text-only or element-only: whitespace runs between
//! tags are layout and get dropped once a child element appears, while any
//! other mixing of text and children is a structural error.
//!
//! Two deliberate permissive behaviors, kept for compatibility with the
//! documents this dialect is used on: an element still open at end of
//! input is treated as implicitly closed, and tokens after the root
//! element's closing tag are ignored.

use crate::ast::{Attribute, Element, Instruction};
use crate::lexer::Token;
use crate::parser::error::ParseError;

/// Cursor over the token sequence
pub struct Parser {
    tokens: Vec<Token>,
    curr: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, curr: 0 }
    }

    /// Parse a whole document: any processing instructions, then one root
    /// element. A document may also consist of instructions alone.
    pub fn parse_document(&mut self) -> Result<Element, ParseError> {
        let mut instructions = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(Token::ProcInstrOpen) => instructions.push(self.read_instruction()?),
                _ => break,
            }
        }

        if self.peek().is_none() {
            if instructions.is_empty() {
                return Err(self.end_of_input("document"));
            }
            return Ok(Element {
                instructions,
                ..Element::default()
            });
        }

        let mut root = self.read_element()?;
        root.instructions = instructions;
        Ok(root)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.curr)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.curr).cloned();
        if token.is_some() {
            self.curr += 1;
        }
        token
    }

    /// Clone the current token for an error report. Only called from match
    /// arms that have already peeked it.
    fn current(&self) -> Token {
        self.tokens[self.curr].clone()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(Token::is_whitespace) {
            self.curr += 1;
        }
    }

    fn end_of_input(&self, context: &'static str) -> ParseError {
        ParseError::UnexpectedEndOfInput {
            position: self.curr,
            context,
        }
    }

    fn unexpected(&self, found: Token, context: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            found,
            position: self.curr,
            context,
        }
    }

    /// Read one element: opening tag, content, closing tag
    fn read_element(&mut self) -> Result<Element, ParseError> {
        match self.bump() {
            Some(Token::OpenAngle) => {}
            Some(token) => return Err(self.unexpected(token, "opening tag")),
            None => return Err(self.end_of_input("opening tag")),
        }
        let name = match self.bump() {
            Some(Token::Keyword(name)) => name,
            Some(token) => return Err(self.unexpected(token, "tag name")),
            None => return Err(self.end_of_input("tag name")),
        };
        let mut element = Element::new(name);

        // Attributes until the opening tag closes.
        loop {
            match self.peek() {
                Some(Token::CloseAngle) => {
                    self.curr += 1;
                    break;
                }
                Some(Token::SelfCloseAngle) => {
                    self.curr += 1;
                    return Ok(element);
                }
                Some(Token::Whitespace(_)) => self.curr += 1,
                Some(Token::Keyword(_)) => {
                    let attribute = self.read_attribute()?;
                    element.attributes.push(attribute);
                }
                Some(_) => {
                    let token = self.current();
                    return Err(self.unexpected(token, "opening tag"));
                }
                None => return Err(self.end_of_input("opening tag")),
            }
        }

        // Content until the closing tag.
        let mut text = String::new();
        loop {
            match self.peek() {
                Some(Token::Whitespace(run)) => {
                    text.push_str(run);
                    self.curr += 1;
                }
                Some(Token::Keyword(word)) => {
                    if !element.children.is_empty() {
                        let token = self.current();
                        return Err(self.unexpected(token, "content after child elements"));
                    }
                    text.push_str(word);
                    self.curr += 1;
                }
                Some(Token::Equals) => {
                    // A bare `=` inside content is literal text, not an
                    // attribute marker (URLs with query strings).
                    if !element.children.is_empty() {
                        return Err(
                            self.unexpected(Token::Equals, "content after child elements")
                        );
                    }
                    text.push('=');
                    self.curr += 1;
                }
                Some(Token::OpenAngle) => {
                    if !text.trim().is_empty() {
                        let token = self.current();
                        return Err(self.unexpected(token, "child element after text content"));
                    }
                    text.clear();
                    let child = self.read_element()?;
                    element.children.push(child);
                }
                Some(Token::CloseTagOpen) => {
                    self.read_closing_tag(&element.name)?;
                    break;
                }
                Some(_) => {
                    let token = self.current();
                    return Err(self.unexpected(token, "element content"));
                }
                // Element left open at end of input: implicitly closed.
                None => break,
            }
        }

        if element.children.is_empty() {
            element.text = text;
        }
        Ok(element)
    }

    /// Validate `</name>` against the tag it closes
    fn read_closing_tag(&mut self, opened: &str) -> Result<(), ParseError> {
        match self.bump() {
            Some(Token::CloseTagOpen) => {}
            Some(token) => return Err(self.unexpected(token, "closing tag")),
            None => return Err(self.end_of_input("closing tag")),
        }
        match self.bump() {
            Some(Token::Keyword(closed)) => {
                if closed != opened {
                    return Err(ParseError::MismatchedTag {
                        opened: opened.to_owned(),
                        closed,
                        position: self.curr,
                    });
                }
            }
            Some(token) => return Err(self.unexpected(token, "closing tag name")),
            None => return Err(self.end_of_input("closing tag name")),
        }
        match self.bump() {
            Some(Token::CloseAngle) => Ok(()),
            Some(token) => Err(self.unexpected(token, "closing tag")),
            None => Err(self.end_of_input("closing tag")),
        }
    }

    /// Read a `key="value"` attribute. The caller has already peeked the
    /// key keyword.
    fn read_attribute(&mut self) -> Result<Attribute, ParseError> {
        let key = match self.bump() {
            Some(Token::Keyword(key)) => key,
            Some(token) => return Err(self.unexpected(token, "attribute key")),
            None => return Err(self.end_of_input("attribute key")),
        };
        match self.peek() {
            Some(Token::Equals) => self.curr += 1,
            Some(_) => {
                return Err(ParseError::MissingAttributeValue {
                    key,
                    position: self.curr,
                })
            }
            None => return Err(self.end_of_input("attribute value")),
        }
        let position = self.curr;
        match self.bump() {
            Some(Token::QuotedString(value)) => Ok(Attribute { key, value }),
            Some(_) => Err(ParseError::MissingAttributeValue { key, position }),
            None => Err(self.end_of_input("attribute value")),
        }
    }

    /// Read a `<?name key="value" ...?>` processing instruction
    fn read_instruction(&mut self) -> Result<Instruction, ParseError> {
        match self.bump() {
            Some(Token::ProcInstrOpen) => {}
            Some(token) => return Err(self.unexpected(token, "processing instruction")),
            None => return Err(self.end_of_input("processing instruction")),
        }
        let name = match self.bump() {
            Some(Token::Keyword(name)) => name,
            Some(token) => return Err(self.unexpected(token, "processing instruction name")),
            None => return Err(self.end_of_input("processing instruction name")),
        };
        let mut attributes = Vec::new();
        loop {
            match self.peek() {
                Some(Token::ProcInstrClose) => {
                    self.curr += 1;
                    return Ok(Instruction { name, attributes });
                }
                Some(Token::Whitespace(_)) => self.curr += 1,
                Some(Token::Keyword(_)) => attributes.push(self.read_attribute()?),
                Some(_) => {
                    let token = self.current();
                    return Err(self.unexpected(token, "processing instruction"));
                }
                None => return Err(self.end_of_input("processing instruction")),
            }
        }
    }
}

/// Build a tree from an already-lexed token sequence
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Element, ParseError> {
    Parser::new(tokens).parse_document()
}
