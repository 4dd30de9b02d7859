//! Composable error chaining.
//!
//! [`WrapError`] accumulates any number of causes into a single error value
//! while staying a plain [`std::error::Error`]: it renders to a string,
//! exposes the previously accumulated chain through `source()`, and can be
//! flattened back into the list of leaf causes it was built from.
//!
//! ```
//! use wraperror::to_wrapped;
//!
//! let disk = std::io::Error::other("disk offline");
//! let parse = std::io::Error::other("settings parse failed");
//!
//! let err = to_wrapped(disk).wrap(parse);
//! assert_eq!(err.to_string(), "settings parse failed disk offline");
//! assert_eq!(err.flatten().len(), 2);
//! ```

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod convert;
mod inspect;
mod node;

pub use convert::{from_wrapped, to_wrapped, to_wrapped_dyn};
pub use inspect::{chain, find, is, Chain};
pub use node::{DynError, WrapError};
