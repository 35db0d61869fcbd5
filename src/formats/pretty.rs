//! Canonical pretty-printer for xmlite trees
//!
//! Deterministic serializer used both for output and as the round-trip
//! oracle: for canonically formatted input, printing the parse of a
//! document reproduces it byte for byte. Indentation is one tab per
//! nesting level; childless, textless elements print in self-closing form.

use std::io;

use crate::ast::Element;

/// Serialize a document to canonical text
pub fn to_pretty_string(root: &Element) -> String {
    let mut out = String::new();
    for instruction in &root.instructions {
        out.push_str(&format!("<?{}", instruction.name));
        for attribute in &instruction.attributes {
            out.push_str(&format!(" {}=\"{}\"", attribute.key, attribute.value));
        }
        out.push_str("?>\n");
    }
    // A document can hold processing instructions alone.
    if root.name.is_empty() && root.children.is_empty() && root.text.is_empty() {
        return out;
    }
    write_element(root, 0, &mut out);
    out
}

/// Serialize one element (recursive, one frame per nesting level)
fn write_element(node: &Element, indent_level: usize, out: &mut String) {
    let indent = "\t".repeat(indent_level);
    out.push_str(&format!("{}<{}", indent, node.name));
    for attribute in &node.attributes {
        out.push_str(&format!(" {}=\"{}\"", attribute.key, attribute.value));
    }
    if node.text.is_empty() && node.children.is_empty() {
        out.push_str("/>\n");
        return;
    }
    out.push('>');
    if !node.text.is_empty() {
        out.push_str(&format!("{}</{}>\n", node.text, node.name));
        return;
    }
    out.push('\n');
    for child in &node.children {
        write_element(child, indent_level + 1, out);
    }
    out.push_str(&format!("{}</{}>\n", indent, node.name));
}

impl Element {
    /// Write the canonical serialization of this element to a sink
    pub fn pretty_print<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_all(to_pretty_string(self).as_bytes())
    }
}
