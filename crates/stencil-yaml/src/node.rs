//! Document tree for scaffolded YAML.
//!
//! The tree mirrors what the encoder can print: scalars, mappings, and
//! sequences, each with optional head/line comments. A node constructed as
//! commented renders with a `# ` prefix, and the encoder extends that prefix
//! to every descendant.

/// Rendering style for a sequence node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceStyle {
    /// One `- item` line per element.
    Block,
    /// Inline `[a, b, c]`.
    Flow,
}

/// The shape of a document node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Scalar(String),
    /// Ordered key/value pairs. Keys are scalar nodes in well-formed trees.
    Mapping(Vec<(Node, Node)>),
    Sequence {
        style: SequenceStyle,
        items: Vec<Node>,
    },
}

/// One node of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    /// Comment lines printed above the field. An empty line within the text
    /// is preserved as a blank separator line.
    pub head_comment: Option<String>,
    /// Comment printed after the value on the same line.
    pub line_comment: Option<String>,
    /// Render this node (and everything beneath it) as a comment.
    pub commented: bool,
}

impl Node {
    pub fn scalar(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Scalar(text.into()))
    }

    pub fn mapping() -> Self {
        Self::new(NodeKind::Mapping(Vec::new()))
    }

    pub fn sequence(style: SequenceStyle) -> Self {
        Self::new(NodeKind::Sequence {
            style,
            items: Vec::new(),
        })
    }

    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            head_comment: None,
            line_comment: None,
            commented: false,
        }
    }
}

/// A complete document: an optional verbatim header block above a root
/// mapping. The header is written as-is, one line at a time, so callers
/// provide it with `# ` prefixes already in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub header: Option<String>,
    pub root: Node,
}

impl Document {
    pub fn new() -> Self {
        Self {
            header: None,
            root: Node::mapping(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
