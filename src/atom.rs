use crate::ast::{Regex, RegexNode};

/// Whether a quantifier suffix can be appended to `regex` without wrapping it.
///
/// Node kinds that always render as one bracketed unit are atomic by
/// construction. Raw text and concatenations are decided by scanning the
/// rendered text.
pub(crate) fn is_atomic(regex: &Regex) -> bool {
    match regex.node() {
        RegexNode::Literal(_) | RegexNode::Concat(_) => fragment_is_atomic(regex.as_str()),
        RegexNode::CharSet { .. }
        | RegexNode::Group { .. }
        | RegexNode::BackRef(_)
        | RegexNode::LookAround { .. }
        | RegexNode::Conditional { .. } => true,
        RegexNode::Flags { node, .. } => node.is_some(),
        RegexNode::Alt(_) | RegexNode::Repeat { .. } | RegexNode::Comment(_) => false,
    }
}

/// Group names follow identifier rules: a letter or `_`, then letters, digits or `_`.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// A single character, a single escape, one bracketed set or one balanced group.
fn fragment_is_atomic(text: &str) -> bool {
    let mut cursor = Cursor::new(text);
    let consumed = match cursor.peek() {
        None => false,
        Some('\\') => cursor.skip_escape(),
        Some('[') => cursor.skip_set(),
        Some('(') => cursor.skip_group(),
        Some(c) if "|*+?{}()[]^$".contains(c) => false,
        Some(_) => cursor.advance().is_some(),
    };
    consumed && cursor.at_end()
}

/// Character cursor over a rendered fragment.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn expect(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn skip_while(&mut self, n: usize, pred: impl Fn(char) -> bool) -> bool {
        for _ in 0..n {
            match self.peek() {
                Some(c) if pred(c) => {
                    self.advance();
                }
                _ => return false,
            }
        }
        true
    }

    /// `\d`, `\.`, `\x41`, `\u00e9`, `\U0001F600`, `\pL`, `\p{Greek}`.
    fn skip_escape(&mut self) -> bool {
        if !self.expect('\\') {
            return false;
        }
        match self.advance() {
            None => false,
            Some('x') => self.skip_while(2, |c| c.is_ascii_hexdigit()),
            Some('u') => self.skip_while(4, |c| c.is_ascii_hexdigit()),
            Some('U') => self.skip_while(8, |c| c.is_ascii_hexdigit()),
            Some('p') | Some('P') => {
                if self.expect('{') {
                    while let Some(c) = self.advance() {
                        if c == '}' {
                            return true;
                        }
                    }
                    false
                } else {
                    self.advance().is_some()
                }
            }
            Some(_) => true,
        }
    }

    fn skip_set(&mut self) -> bool {
        if !self.expect('[') {
            return false;
        }
        self.expect('^');
        // a leading ']' is a literal member
        self.expect(']');
        while let Some(c) = self.peek() {
            match c {
                '\\' => {
                    self.advance();
                    if self.advance().is_none() {
                        return false;
                    }
                }
                ']' => {
                    self.advance();
                    return true;
                }
                _ => {
                    self.advance();
                }
            }
        }
        false
    }

    fn skip_group(&mut self) -> bool {
        if !self.expect('(') {
            return false;
        }
        let mut depth = 1usize;
        while let Some(c) = self.peek() {
            match c {
                '\\' => {
                    self.advance();
                    if self.advance().is_none() {
                        return false;
                    }
                }
                '[' => {
                    if !self.skip_set() {
                        return false;
                    }
                }
                '(' => {
                    self.advance();
                    depth += 1;
                }
                ')' => {
                    self.advance();
                    depth -= 1;
                    if depth == 0 {
                        return true;
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_characters_and_escapes_are_atomic() {
        for text in ["a", "é", r"\d", r"\.", r"\x41", r"\u00e9", r"\pL", r"\p{Greek}"] {
            assert!(fragment_is_atomic(text), "{text}");
        }
    }

    #[test]
    fn multi_unit_text_is_not_atomic() {
        for text in ["", "ab", r"\d\d", r"\x4", "a|b", "*", "^", "(a)(b)", "[ab]c", r"\"] {
            assert!(!fragment_is_atomic(text), "{text}");
        }
    }

    #[test]
    fn whole_sets_and_groups_are_atomic() {
        for text in ["[abc]", "[^a-z]", "[]a]", r"[\]]", "(spam)", "(?:a|b)", "(a(b)c)", "([)])"] {
            assert!(fragment_is_atomic(text), "{text}");
        }
    }

    #[test]
    fn unbalanced_brackets_are_not_atomic() {
        for text in ["[abc", "(abc", "((a)", r"(a\)"] {
            assert!(!fragment_is_atomic(text), "{text}");
        }
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("eggs"));
        assert!(is_identifier("_x1"));
        assert!(is_identifier("naïve"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("a b"));
    }
}
