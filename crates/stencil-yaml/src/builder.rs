//! Structured builders for the document tree.
//!
//! Nesting is expressed with closures: `mapping("spec", .., |b| ...)` hands a
//! builder for the child mapping to the closure and control returns through
//! the call stack, so there is no cursor stack to unwind and no way to forget
//! a pop.

use crate::encode::encode_document;
use crate::error::EncodeError;
use crate::node::{Document, Node, NodeKind, SequenceStyle};

/// Head and line comments for a field.
#[derive(Debug, Clone, Default)]
pub struct Comments {
    pub head: Option<String>,
    pub line: Option<String>,
}

impl Comments {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn head(text: impl Into<String>) -> Self {
        Self {
            head: Some(text.into()),
            line: None,
        }
    }

    pub fn line(text: impl Into<String>) -> Self {
        Self {
            head: None,
            line: Some(text.into()),
        }
    }

    pub fn new(head: Option<String>, line: Option<String>) -> Self {
        Self { head, line }
    }
}

/// Builds one [`Document`].
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    doc: Document,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            doc: Document::new(),
        }
    }

    /// Set the verbatim header block written above the root mapping.
    pub fn set_header(&mut self, text: impl Into<String>) {
        self.doc.header = Some(text.into());
    }

    /// Builder for the root mapping.
    pub fn body(&mut self) -> MappingBuilder<'_> {
        let NodeKind::Mapping(entries) = &mut self.doc.root.kind else {
            // Document::new always creates a mapping root.
            unreachable!("document root is a mapping");
        };
        MappingBuilder { entries }
    }

    pub fn encode(&self) -> Result<String, EncodeError> {
        encode_document(&self.doc)
    }

    pub fn into_document(self) -> Document {
        self.doc
    }
}

/// Appends entries to one mapping node.
#[derive(Debug)]
pub struct MappingBuilder<'a> {
    entries: &'a mut Vec<(Node, Node)>,
}

impl MappingBuilder<'_> {
    fn push(&mut self, key: &str, comments: Comments, commented: bool, mut value: Node) {
        let mut key_node = Node::scalar(key);
        key_node.head_comment = comments.head;
        key_node.commented = commented;
        value.line_comment = comments.line;
        self.entries.push((key_node, value));
    }

    /// `key: value`
    pub fn field(&mut self, key: &str, value: impl Into<String>, comments: Comments) {
        self.push(key, comments, false, Node::scalar(value));
    }

    /// `# key: value`
    pub fn commented_field(&mut self, key: &str, value: impl Into<String>, comments: Comments) {
        self.push(key, comments, true, Node::scalar(value));
    }

    /// `key: {}`
    pub fn empty_mapping(&mut self, key: &str, comments: Comments) {
        self.push(key, comments, false, Node::mapping());
    }

    /// `key:` followed by nested fields built by `f`.
    pub fn mapping(&mut self, key: &str, comments: Comments, f: impl FnOnce(&mut MappingBuilder)) {
        self.push(key, comments, false, build_mapping(f));
    }

    /// `# key:` with every nested field inheriting the comment prefix.
    pub fn commented_mapping(
        &mut self,
        key: &str,
        comments: Comments,
        f: impl FnOnce(&mut MappingBuilder),
    ) {
        self.push(key, comments, true, build_mapping(f));
    }

    /// `key:` followed by block sequence items built by `f`.
    pub fn sequence(&mut self, key: &str, comments: Comments, f: impl FnOnce(&mut SequenceBuilder)) {
        self.push(key, comments, false, build_sequence(f));
    }

    /// Commented block sequence: `# key:` and `# - item` lines.
    pub fn commented_sequence(
        &mut self,
        key: &str,
        comments: Comments,
        f: impl FnOnce(&mut SequenceBuilder),
    ) {
        self.push(key, comments, true, build_sequence(f));
    }

    /// `key: [a, b, c]`
    pub fn inline_array(&mut self, key: &str, items: &[String], comments: Comments) {
        self.push(key, comments, false, flow_sequence(items));
    }

    /// `# key: [a, b, c]`
    pub fn commented_inline_array(&mut self, key: &str, items: &[String], comments: Comments) {
        self.push(key, comments, true, flow_sequence(items));
    }

    /// Commented block array of scalars:
    /// ```text
    /// # key:
    ///   # - a
    ///   # - b
    /// ```
    pub fn commented_block_array(&mut self, key: &str, items: &[String], comments: Comments) {
        let mut seq = Node::sequence(SequenceStyle::Block);
        if let NodeKind::Sequence { items: nodes, .. } = &mut seq.kind {
            nodes.extend(items.iter().map(Node::scalar));
        }
        self.push(key, comments, true, seq);
    }
}

/// Appends items to one block sequence node.
#[derive(Debug)]
pub struct SequenceBuilder<'a> {
    items: &'a mut Vec<Node>,
}

impl SequenceBuilder<'_> {
    /// `- key: value` item with fields built by `f`.
    pub fn mapping_item(&mut self, f: impl FnOnce(&mut MappingBuilder)) {
        self.items.push(build_mapping(f));
    }

    /// `- value` item.
    pub fn scalar_item(&mut self, value: impl Into<String>) {
        self.items.push(Node::scalar(value));
    }
}

fn build_mapping(f: impl FnOnce(&mut MappingBuilder)) -> Node {
    let mut node = Node::mapping();
    if let NodeKind::Mapping(entries) = &mut node.kind {
        f(&mut MappingBuilder { entries });
    }
    node
}

fn build_sequence(f: impl FnOnce(&mut SequenceBuilder)) -> Node {
    let mut node = Node::sequence(SequenceStyle::Block);
    if let NodeKind::Sequence { items, .. } = &mut node.kind {
        f(&mut SequenceBuilder { items });
    }
    node
}

fn flow_sequence(items: &[String]) -> Node {
    let mut node = Node::sequence(SequenceStyle::Flow);
    if let NodeKind::Sequence { items: nodes, .. } = &mut node.kind {
        nodes.extend(items.iter().map(Node::scalar));
    }
    node
}
