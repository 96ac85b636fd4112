#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod index;
pub use index::{Index, OutOfBoundsError, ParseIndexError};
mod patch;
pub use patch::{apply_patch, Patch, PatchError, PatchOperation};
mod pointer;
pub use pointer::Pointer;
mod resolve;
pub use resolve::{Resolve, ResolveError};
mod token;
pub use token::Token;
mod tokens;
pub use tokens::Tokens;

pub mod prelude;

#[cfg(test)]
mod arbitrary;
