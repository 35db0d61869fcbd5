//! JSON dump of the element tree
//!
//! Structural output for tooling, built on the serde derives of the tree
//! types. Not part of the round-trip contract.

use crate::ast::Element;

/// Serialize a document to pretty-printed JSON
pub fn to_json_string(root: &Element) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Attribute;

    #[test]
    fn json_output_carries_names_and_attribute_order() {
        let root = Element {
            name: "a".to_string(),
            attributes: vec![Attribute::new("x", "1"), Attribute::new("y", "2")],
            ..Element::default()
        };
        let json = to_json_string(&root).unwrap();
        let x = json.find("\"x\"").unwrap();
        let y = json.find("\"y\"").unwrap();
        assert!(x < y);
        assert!(json.contains("\"name\": \"a\""));
    }
}
