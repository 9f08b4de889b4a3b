//! Build regular expressions out of typed nodes and render them to pattern
//! strings for an external engine.
//!
//! ```
//! use regex_compose::{Group, Regex, DIGIT, DOT};
//!
//! let price = Group::new()
//!     .name("price")
//!     .expr(DIGIT.one_or_more() + DOT.then(DIGIT.zero_or_more()).optional())
//!     .build()
//!     .unwrap();
//! let currency = Regex::any_of(["$", "£", "€"]).unwrap().named("currency").unwrap();
//!
//! assert_eq!(price + currency, r"(?P<price>\d+(?:\.\d*)?)(?P<currency>[$£€])");
//! ```

pub mod ast;
mod atom;
mod builder;
pub mod consts;
pub mod error;
pub mod flags;
mod render;

pub use ast::{GroupKind, GroupRef, LookAround, Regex, RegexNode, RepeatKind, SetItem};
pub use builder::Group;
pub use consts::*;
pub use error::{BuildError, BuildResult, ErrorKind};
pub use flags::{Flag, Letters};
