use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use quickcheck::{quickcheck, TestResult};
use regex_compose::Regex;

fn plain(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

fn hash_of(regex: &Regex) -> u64 {
    let mut hasher = DefaultHasher::new();
    regex.hash(&mut hasher);
    hasher.finish()
}

fn bounds(min: u8, extra: Option<u8>) -> (u32, Option<u32>) {
    let min = u32::from(min);
    (min, extra.map(|e| min + u32::from(e)))
}

quickcheck! {
    fn concatenation_is_associative(a: String, b: String, c: String) -> bool {
        let (a, b, c) = (Regex::new(plain(&a)), Regex::new(plain(&b)), Regex::new(plain(&c)));
        let right = &a + (&b + &c);
        let left = (&a + &b) + &c;
        right.as_str() == left.as_str()
            && left.as_str() == format!("{a}{b}{c}")
    }

    fn alternation_joins_with_bars(a: String, b: String, c: String) -> bool {
        let (a, b, c) = (Regex::new(plain(&a)), Regex::new(plain(&b)), Regex::new(plain(&c)));
        let pair = &a | &b;
        let triple = (&a | &b) | &c;
        pair.as_str() == format!("{a}|{b}")
            && triple.as_str() == format!("{a}|{b}|{c}")
    }

    fn sets_are_never_wrapped(items: String, min: u8, extra: Option<u8>) -> TestResult {
        let items = plain(&items);
        if items.is_empty() {
            return TestResult::discard();
        }
        let (min, max) = bounds(min, extra);
        let set = match Regex::any_of([items.as_str()]) {
            Ok(set) => set,
            Err(_) => return TestResult::failed(),
        };
        let quantified = match set.repeat_between(min, max) {
            Ok(q) => q,
            Err(_) => return TestResult::failed(),
        };
        TestResult::from_bool(
            quantified.as_str().starts_with(set.as_str()) && !quantified.as_str().contains("(?:"),
        )
    }

    fn composite_children_are_always_wrapped(text: String, min: u8, extra: Option<u8>) -> TestResult {
        let text = plain(&text);
        if text.chars().count() < 2 {
            return TestResult::discard();
        }
        let (min, max) = bounds(min, extra);
        match Regex::new(text.clone()).repeat_between(min, max) {
            Ok(q) => TestResult::from_bool(q.as_str().starts_with(&format!("(?:{text})"))),
            Err(_) => TestResult::failed(),
        }
    }

    fn greediness_adds_exactly_one_question_mark(min: u8, extra: Option<u8>) -> bool {
        let (min, max) = bounds(min, extra);
        let Ok(greedy) = Regex::new("z").repeat_between(min, max) else {
            return false;
        };
        let Ok(lazy) = greedy.non_greedy() else {
            return false;
        };
        lazy.as_str() == format!("{greedy}?")
    }

    fn equal_renderings_compare_and_hash_equal(a: String, b: String) -> bool {
        let (a, b) = (plain(&a), plain(&b));
        let joined = Regex::new(format!("{a}{b}"));
        let composed = Regex::new(a.clone()) + b.clone();
        joined == composed && hash_of(&joined) == hash_of(&composed)
    }

    fn different_renderings_never_compare_equal(a: String, b: String) -> TestResult {
        let (a, b) = (plain(&a), plain(&b));
        if a == b {
            return TestResult::discard();
        }
        TestResult::from_bool(Regex::new(a) != Regex::new(b))
    }
}
