//! XML Document - Arena-based DOM built from tokenizer events
//!
//! The document drives one `push_byte` per input byte and records the
//! resulting events into an arena of nodes:
//! - `ElemStart` at top level creates the root, otherwise appends a child
//! - `Content` chunks accumulate into a lazily-created text child
//! - `AttrStart`/`AttrVal`/`AttrEnd` accumulate and store one attribute
//! - PI events are ignored
//!
//! On any parse error the partial tree is destroyed and the document holds
//! the constant error message plus the failure position. Before the first
//! successful parse the document reports the unparsed error state.

use std::error::Error;
use std::fmt;
use std::io::Read;

use log::debug;

use crate::core::tokenizer::{ParseError, Token, Tokenizer};
use crate::reader::feed::{FeedError, TokenFeed};

use super::node::{NodeId, NodeKind, XmlAttribute, XmlNode};
use super::strings::{StringId, StringPool};

/// Default size of the tokenizer scratch region; bounds element nesting
/// depth and name length
pub const DEFAULT_SCRATCH_CAPACITY: usize = 4096;

/// Why a document holds no tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentError {
    /// No successful parse has completed yet
    Unparsed,
    /// The input source failed to read
    Io,
    /// The tokenizer rejected the input
    Parse(ParseError),
}

impl DocumentError {
    /// Constant human-readable message
    pub fn message(self) -> &'static str {
        match self {
            DocumentError::Unparsed => "Document has not been parsed",
            DocumentError::Io => "I/O error while reading input",
            DocumentError::Parse(e) => e.message(),
        }
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for DocumentError {}

/// In-flight recorder state between events
struct Recording {
    /// Node receiving children (starts at the document node)
    cur: NodeId,
    /// Depth of nodes appended under `cur`
    depth: u16,
    /// Pending text chunks, flushed when a non-text sibling appears
    text: Vec<u8>,
    /// Name of the open attribute, captured at `AttrStart`
    attr_name: StringId,
    /// Pending attribute-value chunks
    value: Vec<u8>,
}

impl Recording {
    fn new() -> Self {
        Recording {
            cur: 0,
            depth: 1,
            text: Vec::new(),
            attr_name: 0,
            value: Vec::new(),
        }
    }
}

/// An XML document: node and attribute arenas, the interned strings, and
/// the tokenizer's scratch region (reused across parses)
pub struct XmlDocument {
    nodes: Vec<XmlNode>,
    attributes: Vec<XmlAttribute>,
    strings: StringPool,
    scratch: Vec<u8>,
    root: Option<NodeId>,
    error: Option<DocumentError>,
    error_line: u64,
    error_byte: u64,
}

impl XmlDocument {
    /// An empty document in the unparsed error state
    pub fn new() -> Self {
        Self::with_scratch_capacity(DEFAULT_SCRATCH_CAPACITY)
    }

    /// An empty document with a specific scratch size, for callers that
    /// need a different nesting-depth/name-length bound
    pub fn with_scratch_capacity(capacity: usize) -> Self {
        XmlDocument {
            nodes: Vec::new(),
            attributes: Vec::new(),
            strings: StringPool::new(),
            scratch: vec![0u8; capacity],
            root: None,
            error: Some(DocumentError::Unparsed),
            error_line: 0,
            error_byte: 0,
        }
    }

    /// Parse a byte slice in one call
    pub fn from_bytes(input: &[u8]) -> Self {
        let mut doc = Self::new();
        doc.parse(input);
        doc
    }

    /// Parse a complete document, replacing any previous tree
    ///
    /// Returns false and records the error when the input is rejected.
    pub fn parse(&mut self, input: &[u8]) -> bool {
        self.begin();
        let mut scratch = std::mem::take(&mut self.scratch);
        let mut rec = Recording::new();
        let (result, line, byte) = {
            let mut tok = Tokenizer::new(&mut scratch);
            let result = self
                .drive(&mut tok, &mut rec, input)
                .and_then(|_| tok.finish())
                .map_err(DocumentError::Parse);
            (result, tok.line(), tok.byte())
        };
        self.scratch = scratch;
        self.complete(result, line, byte)
    }

    /// Parse from any `Read` source, replacing any previous tree
    pub fn parse_reader<R: Read>(&mut self, reader: R) -> bool {
        self.begin();
        let mut scratch = std::mem::take(&mut self.scratch);
        let mut rec = Recording::new();
        let mut feed = TokenFeed::new(reader);
        let (result, line, byte) = {
            let mut tok = Tokenizer::new(&mut scratch);
            let result = match feed.run(&mut tok, |tok, ev| self.apply(tok, ev, &mut rec)) {
                Ok(()) => tok.finish().map_err(DocumentError::Parse),
                Err(FeedError::Io(err)) => {
                    debug!("XML input read failed: {err}");
                    Err(DocumentError::Io)
                }
                Err(FeedError::Parse(e)) => Err(DocumentError::Parse(e)),
            };
            (result, tok.line(), tok.byte())
        };
        self.scratch = scratch;
        self.complete(result, line, byte)
    }

    /// Whether the document holds no tree
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The reason the document holds no tree
    pub fn error(&self) -> Option<DocumentError> {
        self.error
    }

    /// Constant message for the current error state
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.map(DocumentError::message)
    }

    /// Line on which the last parse failed (1-based, 0 when not failed)
    pub fn error_line(&self) -> u64 {
        self.error_line
    }

    /// Byte offset within that line
    pub fn error_byte(&self) -> u64 {
        self.error_byte
    }

    /// The root element of a successfully parsed document
    pub fn root(&self) -> Option<XmlElement<'_>> {
        let id = self.root?;
        Some(XmlElement { doc: self, id })
    }

    /// Number of nodes in the arena, the document node included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ------------------------------------------------------------------
    // Recorder
    // ------------------------------------------------------------------

    fn begin(&mut self) {
        self.nodes.clear();
        self.attributes.clear();
        self.strings = StringPool::new();
        self.root = None;
        self.error = Some(DocumentError::Unparsed);
        self.error_line = 0;
        self.error_byte = 0;
        self.nodes.push(XmlNode::document());
    }

    fn drive(
        &mut self,
        tok: &mut Tokenizer<'_>,
        rec: &mut Recording,
        bytes: &[u8],
    ) -> Result<(), ParseError> {
        for &b in bytes {
            let ev = tok.push_byte(b)?;
            self.apply(tok, ev, rec);
        }
        Ok(())
    }

    fn apply(&mut self, tok: &Tokenizer<'_>, ev: Token, rec: &mut Recording) {
        match ev {
            Token::Ok => {}

            Token::ElemStart => {
                self.flush_text(rec);
                let name_id = self.strings.intern(tok.element_name());
                let id = self.push_node(XmlNode::element(name_id, rec.cur, rec.depth));
                self.link_child(rec.cur, id);
                if rec.cur == 0 {
                    self.root = Some(id);
                }
                rec.cur = id;
                rec.depth += 1;
            }

            Token::Content => rec.text.extend_from_slice(tok.data()),

            Token::ElemEnd => {
                self.flush_text(rec);
                rec.cur = self.nodes[rec.cur as usize].parent.unwrap_or(0);
                rec.depth -= 1;
            }

            Token::AttrStart => {
                rec.attr_name = self.strings.intern(tok.attribute_name());
                rec.value.clear();
            }

            Token::AttrVal => rec.value.extend_from_slice(tok.data()),

            Token::AttrEnd => {
                let value_id = self.strings.intern(&rec.value);
                let start = self.attributes.len() as u32;
                self.attributes.push(XmlAttribute::new(rec.attr_name, value_id));
                let node = &mut self.nodes[rec.cur as usize];
                if node.attr_count == 0 {
                    node.attr_start = start;
                }
                node.attr_count += 1;
                rec.value.clear();
            }

            // The default recorder has no use for processing instructions
            Token::PiStart | Token::PiContent | Token::PiEnd => {}
        }
    }

    /// Turn the accumulated content chunks into a text child of `cur`
    fn flush_text(&mut self, rec: &mut Recording) {
        if rec.text.is_empty() {
            return;
        }
        let content_id = self.strings.intern(&rec.text);
        let id = self.push_node(XmlNode::text(content_id, rec.cur, rec.depth));
        self.link_child(rec.cur, id);
        rec.text.clear();
    }

    fn push_node(&mut self, node: XmlNode) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }

    fn link_child(&mut self, parent: NodeId, child: NodeId) {
        let prev = {
            let p = &mut self.nodes[parent as usize];
            let prev = p.last_child;
            if p.first_child.is_none() {
                p.first_child = Some(child);
            }
            p.last_child = Some(child);
            prev
        };
        if let Some(prev) = prev {
            self.nodes[prev as usize].next_sibling = Some(child);
            self.nodes[child as usize].prev_sibling = Some(prev);
        }
    }

    fn complete(&mut self, result: Result<(), DocumentError>, line: u64, byte: u64) -> bool {
        match result {
            Ok(()) => {
                self.error = None;
                true
            }
            Err(err) => {
                debug!("XML parse failed at line {line}, byte {byte}: {}", err.message());
                self.nodes.clear();
                self.attributes.clear();
                self.strings = StringPool::new();
                self.root = None;
                self.error = Some(err);
                self.error_line = line;
                self.error_byte = byte;
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Serialisation
    // ------------------------------------------------------------------

    /// Serialise the children of `id` in document order.
    ///
    /// Text is emitted verbatim and attribute values are quoted with `"`
    /// without escaping; documents whose values contain markup characters
    /// will not round-trip.
    fn serialize_children(&self, id: NodeId, out: &mut String) {
        enum Step {
            Open(NodeId),
            Close(NodeId),
        }

        let mut stack: Vec<Step> = Vec::new();
        self.push_children_reversed(id, &mut stack, Step::Open);

        while let Some(step) = stack.pop() {
            match step {
                Step::Open(n) => {
                    let node = &self.nodes[n as usize];
                    match node.kind {
                        NodeKind::Text => out.push_str(self.strings.get_str(node.name_id)),
                        NodeKind::Element => {
                            out.push('<');
                            out.push_str(self.strings.get_str(node.name_id));
                            for attr in self.attribute_slice(n) {
                                out.push(' ');
                                out.push_str(self.strings.get_str(attr.name_id));
                                out.push_str("=\"");
                                out.push_str(self.strings.get_str(attr.value_id));
                                out.push('"');
                            }
                            out.push('>');
                            stack.push(Step::Close(n));
                            self.push_children_reversed(n, &mut stack, Step::Open);
                        }
                        NodeKind::Document => {}
                    }
                }
                Step::Close(n) => {
                    out.push_str("</");
                    out.push_str(self.strings.get_str(self.nodes[n as usize].name_id));
                    out.push('>');
                }
            }
        }
    }

    fn push_children_reversed<S>(&self, id: NodeId, stack: &mut Vec<S>, wrap: impl Fn(NodeId) -> S) {
        let mut child = self.nodes[id as usize].last_child;
        while let Some(c) = child {
            stack.push(wrap(c));
            child = self.nodes[c as usize].prev_sibling;
        }
    }

    fn attribute_slice(&self, id: NodeId) -> &[XmlAttribute] {
        let node = &self.nodes[id as usize];
        let start = node.attr_start as usize;
        let end = start + node.attr_count as usize;
        &self.attributes[start..end]
    }
}

impl Default for XmlDocument {
    fn default() -> Self {
        Self::new()
    }
}

// ----------------------------------------------------------------------
// Element handles
// ----------------------------------------------------------------------

/// Handle to an element node of a parsed document
#[derive(Clone, Copy)]
pub struct XmlElement<'doc> {
    doc: &'doc XmlDocument,
    id: NodeId,
}

/// One ordered child of an element
#[derive(Clone, Copy)]
pub enum XmlChild<'doc> {
    Element(XmlElement<'doc>),
    Text(&'doc str),
}

impl<'doc> XmlElement<'doc> {
    fn node(&self) -> &'doc XmlNode {
        &self.doc.nodes[self.id as usize]
    }

    /// Tag name
    pub fn tag_name(&self) -> &'doc str {
        self.doc.strings.get_str(self.node().name_id)
    }

    /// Enclosing element, None for the root
    pub fn parent(&self) -> Option<XmlElement<'doc>> {
        let pid = self.node().parent?;
        let parent = &self.doc.nodes[pid as usize];
        if parent.is_element() {
            Some(XmlElement { doc: self.doc, id: pid })
        } else {
            None
        }
    }

    /// Ordered iteration over all children, text included
    pub fn children(&self) -> XmlChildren<'doc> {
        XmlChildren {
            doc: self.doc,
            next: self.node().first_child,
        }
    }

    /// Ordered iteration over element children only
    pub fn child_elements(&self) -> XmlChildElements<'doc> {
        XmlChildElements {
            doc: self.doc,
            next: self.node().first_child,
        }
    }

    /// Number of element children
    pub fn child_element_count(&self) -> usize {
        self.child_elements().count()
    }

    /// Direct children with the given tag, in document order
    pub fn children_by_tag<'q>(&self, tag: &'q str) -> impl Iterator<Item = XmlElement<'doc>> + 'q
    where
        'doc: 'q,
    {
        self.child_elements().filter(move |e| e.tag_name() == tag)
    }

    /// First direct child with the given tag
    pub fn first_child_element(&self, tag: &str) -> Option<XmlElement<'doc>> {
        self.children_by_tag(tag).next()
    }

    /// Descendant elements with the given tag, in pre-order (document
    /// order): an element is visited before its own descendants
    pub fn get_elements_by_tag_name<'q>(
        &self,
        tag: &'q str,
    ) -> impl Iterator<Item = XmlElement<'doc>> + 'q
    where
        'doc: 'q,
    {
        self.descendants().filter(move |e| e.tag_name() == tag)
    }

    /// All descendant elements in pre-order
    pub fn descendants(&self) -> XmlDescendants<'doc> {
        let mut stack = Vec::new();
        self.doc
            .push_children_reversed(self.id, &mut stack, |id| id);
        XmlDescendants { doc: self.doc, stack }
    }

    /// Iterate over this element's attributes in document order
    pub fn attributes(&self) -> XmlAttrs<'doc> {
        let node = self.node();
        XmlAttrs {
            doc: self.doc,
            owner: self.id,
            index: node.attr_start,
            end: node.attr_start + node.attr_count as u32,
        }
    }

    /// Value of the first attribute with the given name
    pub fn get_attribute(&self, name: &str) -> Option<&'doc str> {
        self.attributes()
            .find(|a| a.name() == name)
            .map(|a| a.value())
    }

    /// Concatenation of all descendant text in document order
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut stack = Vec::new();
        self.doc
            .push_children_reversed(self.id, &mut stack, |id| id);
        while let Some(id) = stack.pop() {
            let node = &self.doc.nodes[id as usize];
            if node.is_text() {
                out.push_str(self.doc.strings.get_str(node.name_id));
            } else {
                self.doc.push_children_reversed(id, &mut stack, |id| id);
            }
        }
        out
    }

    /// Serialisation of this element's children
    ///
    /// Attribute values are quoted with `"`; neither text nor values are
    /// escaped.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        self.doc.serialize_children(self.id, &mut out);
        out
    }
}

impl fmt::Debug for XmlElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlElement")
            .field("tag", &self.tag_name())
            .field("id", &self.id)
            .finish()
    }
}

/// Handle to one attribute of an element
#[derive(Clone, Copy)]
pub struct XmlAttr<'doc> {
    doc: &'doc XmlDocument,
    owner: NodeId,
    index: u32,
}

impl<'doc> XmlAttr<'doc> {
    pub fn name(&self) -> &'doc str {
        self.doc
            .strings
            .get_str(self.doc.attributes[self.index as usize].name_id)
    }

    pub fn value(&self) -> &'doc str {
        self.doc
            .strings
            .get_str(self.doc.attributes[self.index as usize].value_id)
    }

    /// The element this attribute belongs to
    pub fn owner(&self) -> XmlElement<'doc> {
        XmlElement {
            doc: self.doc,
            id: self.owner,
        }
    }
}

/// Iterator over all children of an element
pub struct XmlChildren<'doc> {
    doc: &'doc XmlDocument,
    next: Option<NodeId>,
}

impl<'doc> Iterator for XmlChildren<'doc> {
    type Item = XmlChild<'doc>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.next?;
            let node = &self.doc.nodes[id as usize];
            self.next = node.next_sibling;
            match node.kind {
                NodeKind::Element => {
                    return Some(XmlChild::Element(XmlElement { doc: self.doc, id }))
                }
                NodeKind::Text => {
                    return Some(XmlChild::Text(self.doc.strings.get_str(node.name_id)))
                }
                NodeKind::Document => continue,
            }
        }
    }
}

/// Iterator over element children of an element
pub struct XmlChildElements<'doc> {
    doc: &'doc XmlDocument,
    next: Option<NodeId>,
}

impl<'doc> Iterator for XmlChildElements<'doc> {
    type Item = XmlElement<'doc>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.next?;
            let node = &self.doc.nodes[id as usize];
            self.next = node.next_sibling;
            if node.is_element() {
                return Some(XmlElement { doc: self.doc, id });
            }
        }
    }
}

/// Pre-order iterator over descendant elements
pub struct XmlDescendants<'doc> {
    doc: &'doc XmlDocument,
    stack: Vec<NodeId>,
}

impl<'doc> Iterator for XmlDescendants<'doc> {
    type Item = XmlElement<'doc>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.stack.pop()?;
            let node = &self.doc.nodes[id as usize];
            if node.is_element() {
                self.doc.push_children_reversed(id, &mut self.stack, |id| id);
                return Some(XmlElement { doc: self.doc, id });
            }
        }
    }
}

/// Iterator over an element's attributes
pub struct XmlAttrs<'doc> {
    doc: &'doc XmlDocument,
    owner: NodeId,
    index: u32,
    end: u32,
}

impl<'doc> Iterator for XmlAttrs<'doc> {
    type Item = XmlAttr<'doc>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.end {
            return None;
        }
        let attr = XmlAttr {
            doc: self.doc,
            owner: self.owner,
            index: self.index,
        };
        self.index += 1;
        Some(attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsed_error_state() {
        let doc = XmlDocument::new();
        assert!(doc.is_error());
        assert_eq!(doc.error(), Some(DocumentError::Unparsed));
        assert!(doc.root().is_none());
    }

    #[test]
    fn test_declaration_and_nested_elements() {
        let mut doc = XmlDocument::new();
        assert!(doc.parse(
            b"<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\
              <root><test /><test/><test><inner></inner></test></root>"
        ));
        assert!(!doc.is_error());

        let root = doc.root().unwrap();
        assert_eq!(root.tag_name(), "root");
        assert_eq!(root.child_element_count(), 3);
        let kids: Vec<_> = root.child_elements().collect();
        for kid in &kids {
            assert_eq!(kid.tag_name(), "test");
        }
        assert_eq!(kids[0].child_element_count(), 0);
        assert_eq!(kids[2].child_element_count(), 1);
        assert_eq!(
            kids[2].first_child_element("inner").unwrap().tag_name(),
            "inner"
        );
    }

    #[test]
    fn test_text_content() {
        let doc = XmlDocument::from_bytes(b"<html>This is text <p>lol</p>content</html>");
        assert!(!doc.is_error());
        let root = doc.root().unwrap();
        assert_eq!(root.text_content(), "This is text lolcontent");
    }

    #[test]
    fn test_attributes() {
        let doc = XmlDocument::from_bytes(b"<stuff major=\"lol\">hey</stuff>");
        let root = doc.root().unwrap();
        assert_eq!(root.tag_name(), "stuff");
        assert_eq!(root.get_attribute("major"), Some("lol"));
        assert_eq!(root.get_attribute("nope"), None);
        assert_eq!(root.text_content(), "hey");
    }

    #[test]
    fn test_inner_html() {
        let doc = XmlDocument::from_bytes(
            b"<html>This is innerHTML <b id=\"lol\">get</b> property</html>",
        );
        let root = doc.root().unwrap();
        assert_eq!(
            root.inner_html(),
            "This is innerHTML <b id=\"lol\">get</b> property"
        );
    }

    #[test]
    fn test_first_child_with_attribute() {
        let doc = XmlDocument::from_bytes(
            b"<?xml version=\"1.0\" encoding=\"UTF-8\"?><results><metric value=\"5.8\" /></results>",
        );
        let root = doc.root().unwrap();
        let metric = root.child_elements().next().unwrap();
        assert_eq!(metric.tag_name(), "metric");
        assert_eq!(metric.get_attribute("value"), Some("5.8"));
    }

    #[test]
    fn test_close_mismatch_reported() {
        let mut doc = XmlDocument::new();
        assert!(!doc.parse(b"<a><b></c></a>"));
        assert!(doc.is_error());
        assert_eq!(doc.error(), Some(DocumentError::Parse(ParseError::CloseMismatch)));
        assert_eq!(
            doc.error_message(),
            Some("Close tag does not match open tag (<Tag> .. </OtherTag>)")
        );
        assert!(doc.root().is_none());
        assert_eq!(doc.node_count(), 0);
    }

    #[test]
    fn test_error_position_recorded() {
        let mut doc = XmlDocument::new();
        assert!(!doc.parse(b"<a>\n ok\n</b>"));
        assert_eq!(doc.error_line(), 3);
        assert!(doc.error_byte() > 0);
    }

    #[test]
    fn test_document_is_reusable() {
        let mut doc = XmlDocument::new();
        assert!(!doc.parse(b"<broken"));
        assert!(doc.is_error());
        assert!(doc.parse(b"<fixed/>"));
        assert!(!doc.is_error());
        assert_eq!(doc.root().unwrap().tag_name(), "fixed");
    }

    #[test]
    fn test_ordered_children() {
        let doc = XmlDocument::from_bytes(b"<r>a<x/>b<y/>c</r>");
        let root = doc.root().unwrap();
        let mut shape = String::new();
        for child in root.children() {
            match child {
                XmlChild::Text(t) => shape.push_str(t),
                XmlChild::Element(e) => {
                    shape.push('<');
                    shape.push_str(e.tag_name());
                    shape.push('>');
                }
            }
        }
        assert_eq!(shape, "a<x>b<y>c");
    }

    #[test]
    fn test_attribute_iteration_and_owner() {
        let doc = XmlDocument::from_bytes(b"<e a='1' b='2' a='3'/>");
        let root = doc.root().unwrap();
        let attrs: Vec<_> = root.attributes().map(|a| (a.name(), a.value())).collect();
        assert_eq!(attrs, vec![("a", "1"), ("b", "2"), ("a", "3")]);
        // First match wins
        assert_eq!(root.get_attribute("a"), Some("1"));
        assert_eq!(root.attributes().next().unwrap().owner().tag_name(), "e");
    }

    #[test]
    fn test_children_by_tag() {
        let doc = XmlDocument::from_bytes(b"<r><a i='1'/><b/><a i='2'><a i='3'/></a></r>");
        let root = doc.root().unwrap();
        let direct: Vec<_> = root
            .children_by_tag("a")
            .filter_map(|e| e.get_attribute("i"))
            .collect();
        assert_eq!(direct, vec!["1", "2"]);
    }

    #[test]
    fn test_get_elements_by_tag_name_preorder() {
        let doc = XmlDocument::from_bytes(
            b"<r><a i='1'><a i='2'/></a><b><a i='3'/></b><a i='4'/></r>",
        );
        let root = doc.root().unwrap();
        let order: Vec<_> = root
            .get_elements_by_tag_name("a")
            .filter_map(|e| e.get_attribute("i"))
            .collect();
        assert_eq!(order, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_entities_and_cdata_in_tree() {
        let doc = XmlDocument::from_bytes(b"<r>x &amp; y<![CDATA[ <z> ]]></r>");
        let root = doc.root().unwrap();
        assert_eq!(root.text_content(), "x & y <z> ");
    }

    #[test]
    fn test_parent_links() {
        let doc = XmlDocument::from_bytes(b"<r><mid><leaf/></mid></r>");
        let root = doc.root().unwrap();
        let leaf = root.get_elements_by_tag_name("leaf").next().unwrap();
        assert_eq!(leaf.parent().unwrap().tag_name(), "mid");
        assert_eq!(leaf.parent().unwrap().parent().unwrap().tag_name(), "r");
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_parse_reader() {
        let mut doc = XmlDocument::new();
        let input = std::io::Cursor::new(b"<r a='1'>text<c/></r>".to_vec());
        assert!(doc.parse_reader(input));
        let root = doc.root().unwrap();
        assert_eq!(root.get_attribute("a"), Some("1"));
        assert_eq!(root.text_content(), "text");
    }

    #[test]
    fn test_deep_nesting_bounded_by_scratch() {
        let mut doc = XmlDocument::with_scratch_capacity(16);
        let deep = b"<a><a><a><a><a><a><a><a><a><a>";
        assert!(!doc.parse(deep));
        assert_eq!(
            doc.error(),
            Some(DocumentError::Parse(ParseError::StackOverflow))
        );
    }
}
