//! Ready-made escapes and option flags.

use std::sync::LazyLock;

use crate::ast::Regex;
use crate::flags::{Flag, Letters};

pub static DOT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\."));
pub static START: LazyLock<Regex> = LazyLock::new(|| Regex::new("^"));
pub static TRUE_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A"));
pub static END: LazyLock<Regex> = LazyLock::new(|| Regex::new("$"));
pub static TRUE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\Z"));
pub static WORD_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b"));
pub static NOT_WORD_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\B"));
pub static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d"));
pub static NOT_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D"));
pub static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s"));
pub static NOT_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S"));
pub static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w"));
pub static NOT_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W"));
/// Any character except a newline, unless `DOTALL` is set.
pub static ANY: LazyLock<Regex> = LazyLock::new(|| Regex::new("."));

pub const ASCII: Flag = Flag::enabling(Letters::A);
pub const IGNORECASE: Flag = Flag::enabling(Letters::I);
pub const LOCALE: Flag = Flag::enabling(Letters::L);
pub const MULTILINE: Flag = Flag::enabling(Letters::M);
pub const DOTALL: Flag = Flag::enabling(Letters::S);
pub const UNICODE: Flag = Flag::enabling(Letters::U);
pub const VERBOSE: Flag = Flag::enabling(Letters::X);

pub const A: Flag = ASCII;
pub const I: Flag = IGNORECASE;
pub const L: Flag = LOCALE;
pub const M: Flag = MULTILINE;
pub const S: Flag = DOTALL;
pub const U: Flag = UNICODE;
pub const X: Flag = VERBOSE;
