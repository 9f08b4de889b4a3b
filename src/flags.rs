use std::fmt;
use std::ops::{Add, BitOr};
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{BuildError, BuildResult};

bitflags! {
    /// One bit per inline option letter, declared in rendering order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Letters: u8 {
        const A = 0b0000_0001;
        const I = 0b0000_0010;
        const L = 0b0000_0100;
        const M = 0b0000_1000;
        const S = 0b0001_0000;
        const U = 0b0010_0000;
        const X = 0b0100_0000;
    }
}

const ALPHABET: [(char, Letters); 7] = [
    ('a', Letters::A),
    ('i', Letters::I),
    ('L', Letters::L),
    ('m', Letters::M),
    ('s', Letters::S),
    ('u', Letters::U),
    ('x', Letters::X),
];

/// Letters an inline group may switch off.
const DISABLEABLE: Letters = Letters::I.union(Letters::M).union(Letters::S).union(Letters::X);

fn letter_bit(letter: char) -> Option<Letters> {
    ALPHABET
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|(_, bit)| *bit)
}

fn first_letter(bits: Letters) -> char {
    ALPHABET
        .iter()
        .find(|(_, bit)| bits.contains(*bit))
        .map(|(c, _)| *c)
        .unwrap_or('?')
}

fn write_letters(f: &mut fmt::Formatter<'_>, bits: Letters) -> fmt::Result {
    for (c, bit) in ALPHABET {
        if bits.contains(bit) {
            write!(f, "{c}")?;
        }
    }
    Ok(())
}

/// A set of enabled and a set of disabled option letters.
///
/// A letter is never in both sets. Combining values applies the right
/// operand last: `I + I.negate()?` disables `i`, `I.negate()? + I` enables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flag {
    enabled: Letters,
    disabled: Letters,
}

impl Flag {
    pub const fn empty() -> Self {
        Self {
            enabled: Letters::empty(),
            disabled: Letters::empty(),
        }
    }

    pub const fn enabling(letters: Letters) -> Self {
        Self {
            enabled: letters,
            disabled: Letters::empty(),
        }
    }

    /// Builds a flag value from letter strings such as `("ai", "m")`.
    #[tracing::instrument(level = "trace")]
    pub fn new(enable: &str, disable: &str) -> BuildResult<Self> {
        let mut enabled = Letters::empty();
        for c in enable.chars() {
            enabled |= letter_bit(c).ok_or(BuildError::UnknownFlag { letter: c })?;
        }

        let mut disabled = Letters::empty();
        for c in disable.chars() {
            let bit = letter_bit(c).ok_or(BuildError::UnknownFlag { letter: c })?;
            if !DISABLEABLE.contains(bit) {
                tracing::debug!(letter = %c, "rejected flag that cannot be disabled");
                return Err(BuildError::FlagNotDisableable { letter: c });
            }
            disabled |= bit;
        }

        let both = enabled & disabled;
        if !both.is_empty() {
            return Err(BuildError::FlagConflict {
                letter: first_letter(both),
            });
        }

        Ok(Self { enabled, disabled })
    }

    pub fn enabled(&self) -> Letters {
        self.enabled
    }

    pub fn disabled(&self) -> Letters {
        self.disabled
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty() && self.disabled.is_empty()
    }

    /// Combines two values; where they disagree on a letter, `other` wins.
    pub fn union(self, other: Flag) -> Flag {
        Flag {
            enabled: self.enabled.difference(other.disabled) | other.enabled,
            disabled: self.disabled.difference(other.enabled) | other.disabled,
        }
    }

    /// Disables every enabled letter. Letters already disabled are dropped.
    ///
    /// Fails when an enabled letter (`a`, `L` or `u`) has no disabled form.
    pub fn negate(self) -> BuildResult<Flag> {
        let stuck = self.enabled.difference(DISABLEABLE);
        if !stuck.is_empty() {
            let letter = first_letter(stuck);
            tracing::debug!(letter = %letter, "rejected negation of flag that cannot be disabled");
            return Err(BuildError::FlagNotDisableable { letter });
        }
        Ok(Flag {
            enabled: Letters::empty(),
            disabled: self.enabled,
        })
    }

    /// `self` combined with the negation of `other`.
    pub fn difference(self, other: Flag) -> BuildResult<Flag> {
        Ok(self.union(other.negate()?))
    }
}

impl Add for Flag {
    type Output = Flag;

    fn add(self, rhs: Flag) -> Flag {
        self.union(rhs)
    }
}

impl BitOr for Flag {
    type Output = Flag;

    fn bitor(self, rhs: Flag) -> Flag {
        self.union(rhs)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_letters(f, self.enabled)?;
        if !self.disabled.is_empty() {
            f.write_str("-")?;
            write_letters(f, self.disabled)?;
        }
        Ok(())
    }
}

impl FromStr for Flag {
    type Err = BuildError;

    /// Parses the rendered form, e.g. `"ai-msx"`.
    fn from_str(s: &str) -> BuildResult<Self> {
        match s.split_once('-') {
            Some((enable, disable)) => Flag::new(enable, disable),
            None => Flag::new(s, ""),
        }
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
