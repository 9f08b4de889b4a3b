use std::ops::{Add, Bound, BitOr, RangeBounds};

use crate::ast::{GroupKind, GroupRef, LookAround, Regex, RegexNode, RepeatKind, SetItem};
use crate::atom::is_identifier;
use crate::error::{BuildError, BuildResult};
use crate::flags::Flag;

impl Regex {
    /// Raw pattern text, emitted exactly as given.
    pub fn new(text: impl Into<String>) -> Regex {
        Regex::from_node(RegexNode::Literal(text.into()))
    }

    /// Text matched literally: every regex metacharacter is escaped.
    pub fn escaped(text: &str) -> Regex {
        Regex::new(regex::escape(text))
    }

    /// Concatenates `items` in order. Nested concatenations are spliced in.
    pub fn concat<I>(items: I) -> BuildResult<Regex>
    where
        I: IntoIterator,
        I::Item: Into<Regex>,
    {
        let mut nodes = Vec::new();
        for item in items {
            splice_concat(&mut nodes, item.into());
        }
        if nodes.is_empty() {
            return Err(BuildError::EmptyConcat);
        }
        Ok(Regex::from_node(RegexNode::Concat(nodes)))
    }

    /// `self` immediately followed by `next`.
    pub fn then(&self, next: impl Into<Regex>) -> Regex {
        let mut nodes = Vec::new();
        splice_concat(&mut nodes, self.clone());
        splice_concat(&mut nodes, next.into());
        Regex::from_node(RegexNode::Concat(nodes))
    }

    /// Alternatives joined by `|`, with no enclosing group.
    pub fn alternation<I>(items: I) -> BuildResult<Regex>
    where
        I: IntoIterator,
        I::Item: Into<Regex>,
    {
        let mut branches = Vec::new();
        for item in items {
            splice_alt(&mut branches, item.into());
        }
        if branches.len() < 2 {
            tracing::debug!(found = branches.len(), "rejected alternation");
            return Err(BuildError::TooFewAlternatives {
                found: branches.len(),
            });
        }
        Ok(Regex::from_node(RegexNode::Alt(branches)))
    }

    /// `self` or `other`. Chained calls build one flat alternation.
    ///
    /// The result is not grouped: `a.then(b.or(c))` matches `ab` or `c`.
    /// Wrap it with [`Regex::non_capturing`] to scope it.
    pub fn or(&self, other: impl Into<Regex>) -> Regex {
        let mut branches = Vec::new();
        splice_alt(&mut branches, self.clone());
        splice_alt(&mut branches, other.into());
        Regex::from_node(RegexNode::Alt(branches))
    }

    /// `[...]` matching any of `items`.
    pub fn any_of<I>(items: I) -> BuildResult<Regex>
    where
        I: IntoIterator,
        I::Item: Into<SetItem>,
    {
        char_set(items, false)
    }

    /// `[^...]` matching anything but `items`.
    pub fn none_of<I>(items: I) -> BuildResult<Regex>
    where
        I: IntoIterator,
        I::Item: Into<SetItem>,
    {
        char_set(items, true)
    }

    /// Capturing group around `self`.
    pub fn group(&self) -> Regex {
        group(GroupKind::Capturing, self.clone())
    }

    pub fn named(&self, name: &str) -> BuildResult<Regex> {
        Group::new().expr(self.clone()).name(name).build()
    }

    pub fn non_capturing(&self) -> Regex {
        group(GroupKind::NonCapturing, self.clone())
    }

    /// `\n`: the text matched by capturing group `number`.
    pub fn backref(number: u32) -> BuildResult<Regex> {
        Group::new().number(number).build()
    }

    /// `(?P=name)`: the text matched by the group called `name`.
    pub fn named_backref(name: &str) -> BuildResult<Regex> {
        Group::new().name(name).build()
    }

    /// Repeats `self` over `range`; `1..` is one or more, `2..=6` two to six.
    ///
    /// An exclusive end counts down by one, so `2..7` equals `2..=6`.
    #[tracing::instrument(level = "trace", skip(self, range), fields(child = %self))]
    pub fn repeat<R: RangeBounds<u32>>(&self, range: R) -> BuildResult<Regex> {
        let min = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.checked_add(1).ok_or(BuildError::EmptyRange)?,
            Bound::Unbounded => 0,
        };
        let max = match range.end_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) if n <= min => {
                tracing::debug!(min, end = n, "rejected empty repetition range");
                return Err(BuildError::EmptyRange);
            }
            Bound::Excluded(&n) => Some(n - 1),
            Bound::Unbounded => None,
        };
        self.repeat_between(min, max)
    }

    /// Repeats `self` between `min` and `max` times; `None` is unbounded.
    pub fn repeat_between(&self, min: u32, max: Option<u32>) -> BuildResult<Regex> {
        let kind = RepeatKind::from_bounds(min, max).inspect_err(|err| {
            tracing::debug!(error = %err, "rejected repetition bounds");
        })?;
        Ok(repeat(self.clone(), kind, true))
    }

    pub fn times(&self, n: u32) -> Regex {
        repeat(self.clone(), RepeatKind::Exactly(n), true)
    }

    pub fn optional(&self) -> Regex {
        repeat(self.clone(), RepeatKind::Optional, true)
    }

    pub fn zero_or_more(&self) -> Regex {
        repeat(self.clone(), RepeatKind::ZeroOrMore, true)
    }

    pub fn one_or_more(&self) -> Regex {
        repeat(self.clone(), RepeatKind::OneOrMore, true)
    }

    /// The same quantifier matching as few repetitions as possible.
    pub fn non_greedy(&self) -> BuildResult<Regex> {
        match self.node() {
            RegexNode::Repeat { node, kind, .. } => Ok(repeat(node.clone(), *kind, false)),
            _ => Err(BuildError::NotAQuantifier),
        }
    }

    /// Alias of [`Regex::non_greedy`].
    pub fn lazy(&self) -> BuildResult<Regex> {
        self.non_greedy()
    }

    pub fn lookahead(&self) -> Regex {
        look(LookAround::Ahead, self.clone())
    }

    pub fn negative_lookahead(&self) -> Regex {
        look(LookAround::NotAhead, self.clone())
    }

    pub fn lookbehind(&self) -> Regex {
        look(LookAround::Behind, self.clone())
    }

    pub fn negative_lookbehind(&self) -> Regex {
        look(LookAround::NotBehind, self.clone())
    }

    /// `self(?=next)`.
    pub fn followed_by(&self, next: impl Into<Regex>) -> Regex {
        self.then(next.into().lookahead())
    }

    /// `self(?!next)`.
    pub fn not_followed_by(&self, next: impl Into<Regex>) -> Regex {
        self.then(next.into().negative_lookahead())
    }

    /// `(?<=prev)self`: the assertion is placed before `self`.
    pub fn preceded_by(&self, prev: impl Into<Regex>) -> Regex {
        prev.into().lookbehind().then(self.clone())
    }

    /// `(?<!prev)self`.
    pub fn not_preceded_by(&self, prev: impl Into<Regex>) -> Regex {
        prev.into().negative_lookbehind().then(self.clone())
    }

    /// `(?(group)then|otherwise)`: `then` if `group` has matched, else `otherwise`.
    #[tracing::instrument(level = "trace", skip(then, otherwise))]
    pub fn conditional(
        group: impl Into<GroupRef> + std::fmt::Debug,
        then: impl Into<Regex>,
        otherwise: Option<impl Into<Regex>>,
    ) -> BuildResult<Regex> {
        let group = group.into();
        check_group_ref(&group)?;
        Ok(Regex::from_node(RegexNode::Conditional {
            group,
            then: then.into(),
            otherwise: otherwise.map(Into::into),
        }))
    }

    /// `(?#text)`, ignored by the engine.
    pub fn comment(text: &str) -> BuildResult<Regex> {
        if text.contains(')') {
            tracing::debug!(text, "rejected comment containing ')'");
            return Err(BuildError::CommentTerminator {
                text: text.to_string(),
            });
        }
        Ok(Regex::from_node(RegexNode::Comment(text.to_string())))
    }

    /// `(?flags)` for the whole pattern. It only takes effect as the first node.
    pub fn flags(flags: Flag) -> Regex {
        Regex::from_node(RegexNode::Flags { flags, node: None })
    }

    /// `(?flags:self)`: options scoped to `self`.
    pub fn with_flags(&self, flags: Flag) -> Regex {
        Regex::from_node(RegexNode::Flags {
            flags,
            node: Some(self.clone()),
        })
    }
}

fn splice_concat(nodes: &mut Vec<Regex>, item: Regex) {
    match item.node() {
        RegexNode::Concat(inner) => nodes.extend(inner.iter().cloned()),
        _ => nodes.push(item),
    }
}

fn splice_alt(branches: &mut Vec<Regex>, item: Regex) {
    match item.node() {
        RegexNode::Alt(inner) => branches.extend(inner.iter().cloned()),
        _ => branches.push(item),
    }
}

fn char_set<I>(items: I, negated: bool) -> BuildResult<Regex>
where
    I: IntoIterator,
    I::Item: Into<SetItem>,
{
    let items: Vec<SetItem> = items.into_iter().map(Into::into).collect();
    if items.is_empty() {
        return Err(BuildError::EmptySet);
    }
    let has_empty = items.iter().any(|item| match item {
        SetItem::Chars(text) => text.is_empty(),
        SetItem::Range(start, end) => start.is_empty() || end.is_empty(),
    });
    if has_empty {
        return Err(BuildError::EmptySetItem);
    }
    Ok(Regex::from_node(RegexNode::CharSet { items, negated }))
}

fn group(kind: GroupKind, node: Regex) -> Regex {
    Regex::from_node(RegexNode::Group { kind, node })
}

fn repeat(node: Regex, kind: RepeatKind, greedy: bool) -> Regex {
    Regex::from_node(RegexNode::Repeat { node, kind, greedy })
}

fn look(kind: LookAround, node: Regex) -> Regex {
    Regex::from_node(RegexNode::LookAround { kind, node })
}

fn check_group_ref(group: &GroupRef) -> BuildResult<()> {
    match group {
        GroupRef::Number(0) => Err(BuildError::InvalidGroupNumber { number: 0 }),
        GroupRef::Name(name) if !is_identifier(name) => {
            tracing::debug!(name = %name, "rejected group name");
            Err(BuildError::InvalidGroupName { name: name.clone() })
        }
        _ => Ok(()),
    }
}

/// Builds a group definition or a group reference from loose arguments.
///
/// With an expression it defines a capturing, named or non-capturing group.
/// Without one it refers back to an earlier group by name or number.
///
/// ```
/// use regex_compose::{Group, Regex};
///
/// let spam = Group::new().expr("spam").name("eggs").build().unwrap();
/// assert_eq!(spam, "(?P<eggs>spam)");
/// assert_eq!(Group::new().name("eggs").build().unwrap(), "(?P=eggs)");
/// assert_eq!(Group::new().number(1).build().unwrap(), r"\1");
/// ```
#[derive(Debug, Clone)]
pub struct Group {
    expr: Option<Regex>,
    number: Option<u32>,
    name: Option<String>,
    capture: bool,
}

impl Default for Group {
    fn default() -> Self {
        Self {
            expr: None,
            number: None,
            name: None,
            capture: true,
        }
    }
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expr(mut self, expr: impl Into<Regex>) -> Self {
        self.expr = Some(expr.into());
        self
    }

    pub fn number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    #[tracing::instrument(level = "trace", skip(self), fields(name = ?self.name, capture = self.capture))]
    pub fn build(self) -> BuildResult<Regex> {
        let result = match (self.expr, self.number, self.name, self.capture) {
            (Some(_), Some(number), _, _) => Err(BuildError::ChildWithReference { number }),
            (None, Some(_), Some(name), _) => Err(BuildError::NamedNumberReference { name }),
            (None, Some(_), None, false) | (None, None, Some(_), false) => {
                Err(BuildError::NonCapturingReference)
            }
            (None, Some(number), None, true) => {
                let group = GroupRef::Number(number);
                check_group_ref(&group).map(|()| Regex::from_node(RegexNode::BackRef(group)))
            }
            (None, None, Some(name), true) => {
                let group = GroupRef::Name(name);
                check_group_ref(&group).map(|()| Regex::from_node(RegexNode::BackRef(group)))
            }
            (None, None, None, _) => Err(BuildError::EmptyGroup),
            (Some(node), None, Some(name), capture) => {
                if !is_identifier(&name) {
                    Err(BuildError::InvalidGroupName { name })
                } else if !capture {
                    Err(BuildError::NamedNonCapturing { name })
                } else {
                    Ok(group(GroupKind::Named(name), node))
                }
            }
            (Some(node), None, None, true) => Ok(group(GroupKind::Capturing, node)),
            (Some(node), None, None, false) => Ok(group(GroupKind::NonCapturing, node)),
        };
        if let Err(err) = &result {
            tracing::debug!(error = %err, "rejected group");
        }
        result
    }
}

impl From<&str> for Regex {
    fn from(text: &str) -> Self {
        Regex::new(text)
    }
}

impl From<String> for Regex {
    fn from(text: String) -> Self {
        Regex::new(text)
    }
}

impl From<char> for Regex {
    fn from(c: char) -> Self {
        Regex::new(c.to_string())
    }
}

impl From<&Regex> for Regex {
    fn from(regex: &Regex) -> Self {
        regex.clone()
    }
}

impl<R: Into<Regex>> Add<R> for Regex {
    type Output = Regex;

    fn add(self, rhs: R) -> Regex {
        self.then(rhs)
    }
}

impl<R: Into<Regex>> Add<R> for &Regex {
    type Output = Regex;

    fn add(self, rhs: R) -> Regex {
        self.then(rhs)
    }
}

impl<R: Into<Regex>> BitOr<R> for Regex {
    type Output = Regex;

    fn bitor(self, rhs: R) -> Regex {
        self.or(rhs)
    }
}

impl<R: Into<Regex>> BitOr<R> for &Regex {
    type Output = Regex;

    fn bitor(self, rhs: R) -> Regex {
        self.or(rhs)
    }
}
