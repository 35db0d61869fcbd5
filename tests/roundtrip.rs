//! Round-trip properties of the canonical printer
//!
//! For a document already in canonical layout, parse-then-print must
//! reproduce it byte for byte. The fixed cases pin the layout rules; the
//! proptest cases generate random canonical trees and check both
//! directions.

use proptest::prelude::*;
use xmlite::ast::{Attribute, Element, Instruction};
use xmlite::formats::to_pretty_string;
use xmlite::parser::parse;

fn assert_roundtrips(document: &str) {
    let root = parse(document).unwrap();
    assert_eq!(to_pretty_string(&root), document);
}

#[test]
fn canonical_feed_document_roundtrips() {
    assert_roundtrips(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <rss version=\"2.0\">\n\
         \t<channel>\n\
         \t\t<title>Tech Talk</title>\n\
         \t\t<link>https://example.com/feed</link>\n\
         \t\t<item>\n\
         \t\t\t<enclosure url=\"https://example.com/ep1.mp3\" length=\"7500000\" type=\"audio/mpeg\"/>\n\
         \t\t\t<description>Don't forget me this weekend!</description>\n\
         \t\t</item>\n\
         \t</channel>\n\
         </rss>\n",
    );
}

#[test]
fn instruction_only_document_roundtrips() {
    assert_roundtrips("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
}

#[test]
fn self_closing_element_roundtrips() {
    assert_roundtrips("<a x=\"1\"/>\n");
}

#[test]
fn empty_pair_normalizes_to_self_closing() {
    let root = parse("<a></a>").unwrap();
    assert_eq!(to_pretty_string(&root), "<a/>\n");
}

#[test]
fn nesting_reprints_with_tab_indentation() {
    let root = parse("<list><item>apples</item><item>pears</item></list>").unwrap();
    assert_eq!(
        to_pretty_string(&root),
        "<list>\n\t<item>apples</item>\n\t<item>pears</item>\n</list>\n"
    );
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

fn attribute_strategy() -> impl Strategy<Value = Attribute> {
    ("[a-z][a-z0-9]{0,5}", "[a-zA-Z0-9 ./:&-]{0,12}")
        .prop_map(|(key, value)| Attribute { key, value })
}

// Text that lexes back to keyword/whitespace/equals runs: anything except
// the tag delimiters, with a run start that cannot open a quoted string.
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 .,!?':=/-]{0,24}"
}

fn leaf_strategy() -> impl Strategy<Value = Element> {
    (
        name_strategy(),
        prop::collection::vec(attribute_strategy(), 0..3),
        prop::option::of(text_strategy()),
    )
        .prop_map(|(name, attributes, text)| Element {
            name,
            attributes,
            text: text.unwrap_or_default(),
            ..Element::default()
        })
}

fn element_strategy() -> impl Strategy<Value = Element> {
    leaf_strategy().prop_recursive(3, 24, 4, |inner| {
        (
            name_strategy(),
            prop::collection::vec(attribute_strategy(), 0..3),
            prop::collection::vec(inner, 1..4),
        )
            .prop_map(|(name, attributes, children)| Element {
                name,
                attributes,
                children,
                ..Element::default()
            })
    })
}

fn instruction_strategy() -> impl Strategy<Value = Instruction> {
    (
        name_strategy(),
        prop::collection::vec(attribute_strategy(), 0..3),
    )
        .prop_map(|(name, attributes)| Instruction { name, attributes })
}

fn document_strategy() -> impl Strategy<Value = Element> {
    (
        prop::collection::vec(instruction_strategy(), 0..2),
        element_strategy(),
    )
        .prop_map(|(instructions, mut root)| {
            root.instructions = instructions;
            root
        })
}

proptest! {
    #[test]
    fn printed_documents_reparse_to_the_same_tree(root in document_strategy()) {
        let printed = to_pretty_string(&root);
        let reparsed = parse(&printed).unwrap();
        prop_assert_eq!(&reparsed, &root);
        prop_assert_eq!(to_pretty_string(&reparsed), printed);
    }

    #[test]
    fn instruction_only_documents_roundtrip(instructions in prop::collection::vec(instruction_strategy(), 1..3)) {
        let root = Element { instructions, ..Element::default() };
        let printed = to_pretty_string(&root);
        let reparsed = parse(&printed).unwrap();
        prop_assert_eq!(&reparsed, &root);
        prop_assert_eq!(to_pretty_string(&reparsed), printed);
    }
}
