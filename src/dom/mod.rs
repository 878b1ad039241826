//! DOM Module - Arena-based XML Document
//!
//! A thin tree built by recording tokenizer events:
//! - Arena allocation for nodes, NodeId (u32) indices for traversal
//! - Parent back-references as indices; parents own their children
//! - String interning for names, values, and text content

pub mod document;
pub mod node;
pub mod strings;

pub use document::{
    DocumentError, XmlAttr, XmlChild, XmlDocument, XmlElement, DEFAULT_SCRATCH_CAPACITY,
};
pub use node::{NodeId, NodeKind, XmlAttribute, XmlNode};
pub use strings::{StringId, StringPool};
