use crate::ast::{GroupKind, GroupRef, RegexNode, RepeatKind, SetItem};
use crate::atom;

/// Produce the pattern text for `node`. Children come from their cached renderings.
pub(crate) fn render_node(node: &RegexNode) -> String {
    match node {
        RegexNode::Literal(text) => text.clone(),
        RegexNode::Concat(nodes) => nodes.iter().map(|n| n.as_str()).collect(),
        RegexNode::Alt(branches) => branches
            .iter()
            .map(|b| b.as_str())
            .collect::<Vec<_>>()
            .join("|"),
        RegexNode::CharSet { items, negated } => {
            let mut out = String::from(if *negated { "[^" } else { "[" });
            for item in items {
                match item {
                    SetItem::Chars(text) => push_set_text(&mut out, text),
                    SetItem::Range(start, end) => {
                        push_set_text(&mut out, start);
                        out.push('-');
                        push_set_text(&mut out, end);
                    }
                }
            }
            out.push(']');
            out
        }
        RegexNode::Group { kind, node } => match kind {
            GroupKind::Capturing => format!("({node})"),
            GroupKind::Named(name) => format!("(?P<{name}>{node})"),
            GroupKind::NonCapturing => format!("(?:{node})"),
        },
        RegexNode::BackRef(GroupRef::Number(n)) => format!("\\{n}"),
        RegexNode::BackRef(GroupRef::Name(name)) => format!("(?P={name})"),
        RegexNode::Repeat { node, kind, greedy } => {
            let mut out = if atom::is_atomic(node) {
                node.as_str().to_string()
            } else {
                tracing::trace!(child = %node, "wrapping quantified child");
                format!("(?:{node})")
            };
            push_suffix(&mut out, *kind);
            if !*greedy {
                out.push('?');
            }
            out
        }
        RegexNode::LookAround { kind, node } => format!("{}{node})", kind.opener()),
        RegexNode::Conditional {
            group,
            then,
            otherwise,
        } => match otherwise {
            Some(otherwise) => format!("(?({group}){then}|{otherwise})"),
            None => format!("(?({group}){then})"),
        },
        RegexNode::Flags { flags, node } => match node {
            Some(node) => format!("(?{flags}:{node})"),
            None => format!("(?{flags})"),
        },
        RegexNode::Comment(text) => format!("(?#{text})"),
    }
}

fn push_suffix(out: &mut String, kind: RepeatKind) {
    match kind {
        RepeatKind::Optional => out.push('?'),
        RepeatKind::ZeroOrMore => out.push('*'),
        RepeatKind::OneOrMore => out.push('+'),
        RepeatKind::Exactly(n) => out.push_str(&format!("{{{n}}}")),
        RepeatKind::Between(n, m) => out.push_str(&format!("{{{n},{m}}}")),
        RepeatKind::AtLeast(n) => out.push_str(&format!("{{{n},}}")),
    }
}

// Escape sequences pass through whole; set metacharacters get a backslash.
fn push_set_text(out: &mut String, text: &str) {
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => {
                    out.push('\\');
                    out.push(escaped);
                }
                None => out.push_str("\\\\"),
            },
            ']' | '[' | '^' | '-' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
}
