//! Tree model for parsed xmlite documents
//!
//! Attributes and processing instructions are ordered sequences of pairs,
//! never maps: document order is significant and duplicate keys are legal
//! and must survive a round trip. Children are exclusively owned by their
//! parent, so the tree is acyclic and finite by construction.

use serde::Serialize;

/// A single `key="value"` pair on a tag or processing instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A `<?name key="value" ...?>` directive attached to the document root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

/// A named tree node.
///
/// `text` and a non-empty `children` list are mutually exclusive; the
/// parser rejects mixed content. `instructions` is only populated on the
/// document root. A root with an empty name and empty content represents a
/// document consisting of processing instructions alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Element>,
    pub text: String,
    pub instructions: Vec<Instruction>,
}

impl Element {
    /// Create an empty element with the given tag name
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            ..Element::default()
        }
    }

    /// Create an element holding only text content
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            text: text.into(),
            ..Element::default()
        }
    }

    /// First attribute value for `key`, if any. Duplicate keys are kept in
    /// document order, so this returns the earliest one.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.key == key)
            .map(|attribute| attribute.value.as_str())
    }
}
