use thiserror::Error;

/// Broad classification of a [`BuildError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value was malformed: a bad identifier, inverted bounds, an unknown flag letter.
    Validation,
    /// Arguments were combined in a way that has no meaning.
    Configuration,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("group name '{name}' is not a valid identifier")]
    InvalidGroupName { name: String },
    #[error("group number must be at least 1 (found {number})")]
    InvalidGroupNumber { number: u32 },
    #[error("a group reference by number cannot also carry the name '{name}'")]
    NamedNumberReference { name: String },
    #[error("a group reference cannot be non-capturing")]
    NonCapturingReference,
    #[error("group '{name}' cannot be both named and non-capturing")]
    NamedNonCapturing { name: String },
    #[error("a group needs either an expression or a name to refer to")]
    EmptyGroup,
    #[error("a group cannot define an expression and refer to group {number} at once")]
    ChildWithReference { number: u32 },
    #[error("repetition lower bound {min} exceeds upper bound {max}")]
    InvertedBounds { min: u32, max: u32 },
    #[error("repetition range is empty")]
    EmptyRange,
    #[error("only quantifiers can be made non-greedy")]
    NotAQuantifier,
    #[error("comment '{text}' contains ')', which would terminate it early")]
    CommentTerminator { text: String },
    #[error("unknown flag letter '{letter}'")]
    UnknownFlag { letter: char },
    #[error("flag '{letter}' cannot be disabled")]
    FlagNotDisableable { letter: char },
    #[error("flag '{letter}' is both enabled and disabled")]
    FlagConflict { letter: char },
    #[error("character set item is empty")]
    EmptySetItem,
    #[error("character set has no items")]
    EmptySet,
    #[error("alternation needs at least two alternatives (found {found})")]
    TooFewAlternatives { found: usize },
    #[error("concatenation needs at least one expression")]
    EmptyConcat,
}

impl BuildError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BuildError::NamedNumberReference { .. }
            | BuildError::NonCapturingReference
            | BuildError::NamedNonCapturing { .. }
            | BuildError::EmptyGroup
            | BuildError::ChildWithReference { .. }
            | BuildError::NotAQuantifier
            | BuildError::TooFewAlternatives { .. }
            | BuildError::EmptyConcat => ErrorKind::Configuration,
            _ => ErrorKind::Validation,
        }
    }
}

pub type BuildResult<T> = Result<T, BuildError>;
