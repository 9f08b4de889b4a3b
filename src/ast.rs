use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use serde::{Serialize, Serializer};

use crate::error::{BuildError, BuildResult};
use crate::flags::Flag;
use crate::render;

#[derive(Debug, Clone)]
pub enum RegexNode {
    /// Raw pattern text, emitted verbatim.
    Literal(String),
    Concat(Vec<Regex>),
    Alt(Vec<Regex>),
    CharSet {
        items: Vec<SetItem>,
        negated: bool,
    },
    Group {
        kind: GroupKind,
        node: Regex,
    },
    BackRef(GroupRef),
    Repeat {
        node: Regex,
        kind: RepeatKind,
        greedy: bool,
    },
    LookAround {
        kind: LookAround,
        node: Regex,
    },
    Conditional {
        group: GroupRef,
        then: Regex,
        otherwise: Option<Regex>,
    },
    /// Inline options; without a node they apply to the whole pattern.
    Flags {
        flags: Flag,
        node: Option<Regex>,
    },
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Capturing,
    Named(String),
    NonCapturing,
}

/// A group named or numbered by a backreference or conditional.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupRef {
    Number(u32),
    Name(String),
}

impl From<u32> for GroupRef {
    fn from(number: u32) -> Self {
        GroupRef::Number(number)
    }
}

impl From<&str> for GroupRef {
    fn from(name: &str) -> Self {
        GroupRef::Name(name.to_string())
    }
}

impl From<String> for GroupRef {
    fn from(name: String) -> Self {
        GroupRef::Name(name)
    }
}

impl fmt::Display for GroupRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupRef::Number(n) => write!(f, "{n}"),
            GroupRef::Name(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookAround {
    Ahead,
    NotAhead,
    Behind,
    NotBehind,
}

impl LookAround {
    pub(crate) fn opener(self) -> &'static str {
        match self {
            LookAround::Ahead => "(?=",
            LookAround::NotAhead => "(?!",
            LookAround::Behind => "(?<=",
            LookAround::NotBehind => "(?<!",
        }
    }
}

/// The repetition shape of a quantifier, collapsed from its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepeatKind {
    Optional,
    ZeroOrMore,
    OneOrMore,
    Exactly(u32),
    Between(u32, u32),
    AtLeast(u32),
}

impl RepeatKind {
    pub fn from_bounds(min: u32, max: Option<u32>) -> BuildResult<Self> {
        Ok(match (min, max) {
            (0, Some(1)) => RepeatKind::Optional,
            (0, None) => RepeatKind::ZeroOrMore,
            (1, None) => RepeatKind::OneOrMore,
            (n, None) => RepeatKind::AtLeast(n),
            (n, Some(m)) if n == m => RepeatKind::Exactly(n),
            (n, Some(m)) if n < m => RepeatKind::Between(n, m),
            (n, Some(m)) => return Err(BuildError::InvertedBounds { min: n, max: m }),
        })
    }

    pub fn bounds(self) -> (u32, Option<u32>) {
        match self {
            RepeatKind::Optional => (0, Some(1)),
            RepeatKind::ZeroOrMore => (0, None),
            RepeatKind::OneOrMore => (1, None),
            RepeatKind::Exactly(n) => (n, Some(n)),
            RepeatKind::Between(n, m) => (n, Some(m)),
            RepeatKind::AtLeast(n) => (n, None),
        }
    }
}

/// One entry of a character set: literal characters or an inclusive range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SetItem {
    Chars(String),
    Range(String, String),
}

impl From<char> for SetItem {
    fn from(c: char) -> Self {
        SetItem::Chars(c.to_string())
    }
}

impl From<&str> for SetItem {
    fn from(s: &str) -> Self {
        SetItem::Chars(s.to_string())
    }
}

impl From<String> for SetItem {
    fn from(s: String) -> Self {
        SetItem::Chars(s)
    }
}

impl From<(char, char)> for SetItem {
    fn from((start, end): (char, char)) -> Self {
        SetItem::Range(start.to_string(), end.to_string())
    }
}

impl From<(&str, &str)> for SetItem {
    fn from((start, end): (&str, &str)) -> Self {
        SetItem::Range(start.to_string(), end.to_string())
    }
}

/// Escapes such as `DIGIT` can sit inside a set.
impl From<&Regex> for SetItem {
    fn from(regex: &Regex) -> Self {
        SetItem::Chars(regex.as_str().to_string())
    }
}

struct Inner {
    node: RegexNode,
    rendered: OnceLock<String>,
}

/// An immutable, cheaply cloned expression tree.
///
/// Equality and hashing use the rendered pattern, so two trees that render
/// the same text are interchangeable as set members or map keys. The
/// rendering is computed on first use and cached.
#[derive(Clone)]
pub struct Regex {
    inner: Arc<Inner>,
}

impl Regex {
    pub(crate) fn from_node(node: RegexNode) -> Self {
        Self {
            inner: Arc::new(Inner {
                node,
                rendered: OnceLock::new(),
            }),
        }
    }

    pub fn node(&self) -> &RegexNode {
        &self.inner.node
    }

    /// The pattern string, ready for a regex engine.
    pub fn as_str(&self) -> &str {
        self.inner
            .rendered
            .get_or_init(|| render::render_node(&self.inner.node))
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.node(), f)
    }
}

impl PartialEq for Regex {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.as_str() == other.as_str()
    }
}

impl Eq for Regex {}

impl PartialEq<str> for Regex {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Regex {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Hash for Regex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Serialize for Regex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
