//! Output formats for xmlite documents
//!
//! `pretty` is the canonical serializer and the round-trip oracle; `json`
//! is a structural dump for tooling.

pub mod json;
pub mod pretty;

pub use json::to_json_string;
pub use pretty::to_pretty_string;
