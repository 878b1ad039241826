//! XML Node representation
//!
//! Uses NodeId (u32) indices into the document's arena. The parent link is
//! a plain index; children are owned exclusively by the arena and reached
//! through their parent, so cycles cannot be constructed.

use super::strings::StringId;

/// Compact node identifier (index into the arena)
pub type NodeId = u32;

/// Type of XML node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Document root (arena slot 0)
    Document,
    /// Element node
    Element,
    /// Character data
    Text,
}

/// An XML node in the arena
#[derive(Debug, Clone)]
pub struct XmlNode {
    /// Type of this node
    pub kind: NodeKind,
    /// Parent node (None for the document root)
    pub parent: Option<NodeId>,
    /// First child node
    pub first_child: Option<NodeId>,
    /// Last child node
    pub last_child: Option<NodeId>,
    /// Previous sibling
    pub prev_sibling: Option<NodeId>,
    /// Next sibling
    pub next_sibling: Option<NodeId>,
    /// Tag name (elements) or content (text nodes) in the string pool
    pub name_id: StringId,
    /// Start of this element's attributes in the attribute arena
    pub attr_start: u32,
    /// Number of attributes
    pub attr_count: u16,
    /// Depth in the tree (document root is 0)
    pub depth: u16,
}

impl XmlNode {
    /// The document root node
    pub fn document() -> Self {
        XmlNode {
            kind: NodeKind::Document,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            name_id: 0,
            attr_start: 0,
            attr_count: 0,
            depth: 0,
        }
    }

    /// A new element node
    pub fn element(name_id: StringId, parent: NodeId, depth: u16) -> Self {
        XmlNode {
            kind: NodeKind::Element,
            parent: Some(parent),
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            name_id,
            attr_start: 0,
            attr_count: 0,
            depth,
        }
    }

    /// A new text node; the accumulated content is interned under `name_id`
    pub fn text(content_id: StringId, parent: NodeId, depth: u16) -> Self {
        XmlNode {
            kind: NodeKind::Text,
            parent: Some(parent),
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            name_id: content_id,
            attr_start: 0,
            attr_count: 0,
            depth,
        }
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }

    #[inline]
    pub fn has_attributes(&self) -> bool {
        self.attr_count > 0
    }
}

/// Stored attribute
///
/// The name always comes from the tokenizer's open-attribute cursor, the
/// value from the accumulated `AttrVal` chunks.
#[derive(Debug, Clone)]
pub struct XmlAttribute {
    /// Attribute name in the string pool
    pub name_id: StringId,
    /// Attribute value in the string pool
    pub value_id: StringId,
}

impl XmlAttribute {
    pub fn new(name_id: StringId, value_id: StringId) -> Self {
        XmlAttribute { name_id, value_id }
    }
}
