//! Build regular expression patterns out of small, validated pieces.
//!
//! A [`Regex`] is an immutable pattern string plus the names of the capture
//! groups it introduces. Every combinator returns a new value and checks its
//! operands first, so a mistake such as repeating a repetition or reusing a
//! group name is reported at the call that made it.
//!
//! ```
//! use iregex::{Regex, consts::DIGIT};
//!
//! let year = DIGIT.exactly(4)?.to_named_capture_group("year")?;
//! let re = (Regex::literal("v") + &year)?;
//! assert_eq!(re.render(), r"v(?<year>\d{4})");
//! # Ok::<(), iregex::Error>(())
//! ```

mod class;
mod combine;
mod compile;
pub mod consts;
mod error;
pub mod fragment;
mod group;
mod regex;
mod repeat;
pub mod shape;

pub use combine::*;
pub use compile::*;
pub use error::*;
pub use fragment::{Fragment, Fragments};
pub use self::regex::Regex;
pub use shape::Shape;
