//! Text encoder for the document tree.
//!
//! Encoding rules:
//! - 2-space indent per nesting level.
//! - A key renders `# key:` when it is commented or any ancestor key was;
//!   the commented state is inherited through mappings and block sequences.
//! - Head comments render one `# line` per line above the field; a truly
//!   empty line in the comment text stays a blank line.
//! - Line comments render as ` # text` after the value.
//! - Block sequences of mappings put the first key on the dash line and the
//!   remaining keys two spaces deeper.
//! - Scalars with a YAML-significant leading character are single-quoted,
//!   with internal single quotes doubled.

use crate::error::EncodeError;
use crate::node::{Document, Node, NodeKind, SequenceStyle};

/// Serialize a document to YAML text.
pub fn encode_document(doc: &Document) -> Result<String, EncodeError> {
    let mut out = String::new();

    if let Some(header) = &doc.header {
        for line in header.split('\n') {
            out.push_str(line);
            out.push('\n');
        }
    }

    let NodeKind::Mapping(entries) = &doc.root.kind else {
        return Err(EncodeError::RootNotMapping);
    };
    encode_mapping(&mut out, entries, 0, false)?;
    Ok(out)
}

fn encode_mapping(
    out: &mut String,
    entries: &[(Node, Node)],
    indent: usize,
    parent_commented: bool,
) -> Result<(), EncodeError> {
    let indent_str = "  ".repeat(indent);

    for (key, value) in entries {
        let NodeKind::Scalar(key_text) = &key.kind else {
            return Err(EncodeError::NonScalarKey);
        };
        let commented = parent_commented || key.commented;

        if let Some(head) = &key.head_comment {
            for line in head.split('\n') {
                if line.is_empty() {
                    out.push('\n');
                } else {
                    out.push_str(&indent_str);
                    out.push_str("# ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }

        out.push_str(&indent_str);
        if commented {
            out.push_str("# ");
        }
        out.push_str(key_text);
        out.push(':');

        match &value.kind {
            NodeKind::Mapping(children) if !children.is_empty() => {
                push_line_comment(out, value);
                out.push('\n');
                encode_mapping(out, children, indent + 1, commented)?;
            }
            NodeKind::Mapping(_) => {
                out.push_str(" {}");
                push_line_comment(out, value);
                out.push('\n');
            }
            NodeKind::Sequence {
                style: SequenceStyle::Flow,
                items,
            } => {
                out.push(' ');
                encode_flow_sequence(out, items)?;
                push_line_comment(out, value);
                out.push('\n');
            }
            NodeKind::Sequence {
                style: SequenceStyle::Block,
                items,
            } => {
                push_line_comment(out, value);
                out.push('\n');
                encode_block_sequence(out, items, indent + 1, commented)?;
            }
            NodeKind::Scalar(text) => {
                if !text.is_empty() {
                    out.push(' ');
                    out.push_str(&quote_if_needed(text));
                }
                push_line_comment(out, value);
                out.push('\n');
            }
        }
    }

    Ok(())
}

fn encode_block_sequence(
    out: &mut String,
    items: &[Node],
    indent: usize,
    commented: bool,
) -> Result<(), EncodeError> {
    let indent_str = "  ".repeat(indent);

    for item in items {
        out.push_str(&indent_str);
        out.push_str(if commented { "# - " } else { "- " });

        match &item.kind {
            NodeKind::Mapping(entries) if !entries.is_empty() => {
                let (first_key, first_value) = &entries[0];
                let NodeKind::Scalar(key_text) = &first_key.kind else {
                    return Err(EncodeError::NonScalarKey);
                };
                out.push_str(key_text);
                out.push(':');

                match &first_value.kind {
                    NodeKind::Mapping(children) if !children.is_empty() => {
                        push_line_comment(out, first_value);
                        out.push('\n');
                        encode_mapping(out, children, indent + 2, commented)?;
                    }
                    NodeKind::Mapping(_) => {
                        out.push_str(" {}");
                        push_line_comment(out, first_value);
                        out.push('\n');
                    }
                    NodeKind::Sequence {
                        style: SequenceStyle::Flow,
                        items,
                    } => {
                        out.push(' ');
                        encode_flow_sequence(out, items)?;
                        push_line_comment(out, first_value);
                        out.push('\n');
                    }
                    NodeKind::Sequence {
                        style: SequenceStyle::Block,
                        items,
                    } => {
                        push_line_comment(out, first_value);
                        out.push('\n');
                        encode_block_sequence(out, items, indent + 2, commented)?;
                    }
                    NodeKind::Scalar(text) => {
                        out.push(' ');
                        out.push_str(&quote_if_needed(text));
                        push_line_comment(out, first_value);
                        out.push('\n');
                    }
                }

                if entries.len() > 1 {
                    encode_mapping(out, &entries[1..], indent + 1, commented)?;
                }
            }
            NodeKind::Mapping(_) => {
                out.push_str("{}\n");
            }
            NodeKind::Scalar(text) => {
                out.push_str(&quote_if_needed(text));
                out.push('\n');
            }
            NodeKind::Sequence { .. } => {
                return Err(EncodeError::UnsupportedSequenceItem);
            }
        }
    }

    Ok(())
}

fn encode_flow_sequence(out: &mut String, items: &[Node]) -> Result<(), EncodeError> {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let NodeKind::Scalar(text) = &item.kind else {
            return Err(EncodeError::NonScalarFlowItem);
        };
        out.push_str(text);
    }
    out.push(']');
    Ok(())
}

fn push_line_comment(out: &mut String, value: &Node) {
    if let Some(comment) = &value.line_comment {
        out.push_str(" # ");
        out.push_str(comment);
    }
}

/// Single-quote a scalar whose first character would otherwise be parsed as
/// YAML syntax. Boolean- and number-looking strings are left alone: values
/// come from typed schema defaults, so `true` really is a boolean.
fn quote_if_needed(s: &str) -> String {
    let Some(first) = s.chars().next() else {
        return String::new();
    };

    if matches!(
        first,
        '[' | '{' | '&' | '*' | '!' | '|' | '>' | '\'' | '"' | '%' | '@' | '`'
    ) {
        return format!("'{}'", s.replace('\'', "''"));
    }

    s.to_string()
}
