//! Abstract index representation for RFC 6901.
//!
//! [RFC 6901](https://datatracker.ietf.org/doc/html/rfc6901) defines two valid
//! ways to represent array indices as Pointer tokens: non-negative integers,
//! and the character `-`, which stands for the position after the last
//! existing array member. Which upper bound applies depends on the caller:
//! inserting at an index equal to the array length appends, while reading or
//! removing requires an existing element. [`Index`] resolves a parsed token
//! against either bound.
//!
//! The main use of the `Index` type is when resolving a
//! [`Token`](crate::Token) as a concrete index for a given array length:
//!
//! ```
//! # use jsonpatch::{Index, Token};
//! assert_eq!(Token::new("1").to_index(), Ok(Index::Num(1)));
//! assert_eq!(Token::new("-").to_index(), Ok(Index::Next));
//! assert!(Token::new("a").to_index().is_err());
//!
//! assert_eq!(Index::Num(0).for_len(1), Ok(0));
//! assert_eq!(Index::Next.for_len(3), Ok(2));
//! assert!(Index::Num(1).for_len(1).is_err());
//!
//! assert_eq!(Index::Num(1).for_len_incl(1), Ok(1));
//! assert_eq!(Index::Next.for_len_incl(1), Ok(1));
//! assert!(Index::Num(2).for_len_incl(1).is_err());
//! ```

use core::fmt;

/// Represents an abstract index into an array.
///
/// Produces a concrete numerical index when bounded by an array length with
/// [`Self::for_len`] or [`Self::for_len_incl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Index {
    /// A non-negative integer value
    Num(usize),
    /// The `-` token, the position after the last item in the array
    Next,
}

impl Index {
    /// Bounds the index for a given array length (exclusive).
    ///
    /// The upper range is exclusive, so only indices of existing elements are
    /// accepted as valid. [`Self::Next`] resolves to the last existing
    /// element. Use this bound when reading or removing.
    ///
    /// See also [`Self::for_len_incl`] for the insertion bound.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jsonpatch::Index;
    /// assert_eq!(Index::Num(0).for_len(1), Ok(0));
    /// assert_eq!(Index::Next.for_len(3), Ok(2));
    /// assert!(Index::Num(1).for_len(1).is_err());
    /// assert!(Index::Next.for_len(0).is_err());
    /// ```
    /// # Errors
    /// Returns [`OutOfBoundsError`] if the index does not address an existing
    /// element.
    pub fn for_len(&self, length: usize) -> Result<usize, OutOfBoundsError> {
        match *self {
            Self::Num(index) if index < length => Ok(index),
            Self::Num(index) => Err(OutOfBoundsError { length, index }),
            Self::Next => length
                .checked_sub(1)
                .ok_or(OutOfBoundsError { length, index: 0 }),
        }
    }

    /// Bounds the index for a given array length (inclusive).
    ///
    /// The upper range is inclusive, so an index pointing to the position
    /// _after_ the last element is considered valid; inserting there appends.
    /// [`Self::Next`] is always valid. Use this bound when inserting.
    ///
    /// See also [`Self::for_len`] for the reading/removal bound.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jsonpatch::Index;
    /// assert_eq!(Index::Num(1).for_len_incl(1), Ok(1));
    /// assert_eq!(Index::Next.for_len_incl(1), Ok(1));
    /// assert!(Index::Num(2).for_len_incl(1).is_err());
    /// ```
    ///
    /// # Errors
    /// Returns [`OutOfBoundsError`] if the index is out of bounds.
    pub fn for_len_incl(&self, length: usize) -> Result<usize, OutOfBoundsError> {
        match *self {
            Self::Num(index) if index <= length => Ok(index),
            Self::Num(index) => Err(OutOfBoundsError { length, index }),
            Self::Next => Ok(length),
        }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Num(index) => write!(f, "{index}"),
            Self::Next => f.write_str("-"),
        }
    }
}

impl From<usize> for Index {
    fn from(value: usize) -> Self {
        Self::Num(value)
    }
}

/// Indicates that a token could not be parsed as a valid RFC 6901 array
/// index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
#[cfg_attr(
    feature = "miette",
    diagnostic(
        code(jsonpatch::index::parse),
        help("array indices are non-negative integers or the end-of-array token `-`")
    )
)]
pub struct ParseIndexError {
    /// The token which failed to parse.
    pub token: String,
}

impl fmt::Display for ParseIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid array index: {}", self.token)
    }
}

impl std::error::Error for ParseIndexError {}

/// Indicates that an [`Index`] is not within the given bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
#[cfg_attr(feature = "miette", diagnostic(code(jsonpatch::index::out_of_bounds)))]
pub struct OutOfBoundsError {
    /// The length of the array.
    pub length: usize,

    /// The resolved numerical index.
    ///
    /// Note that [`Index::Next`] resolves against the array length, so this
    /// is only out of range when the array is empty.
    pub index: usize,
}

impl fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index out of bounds: {}", self.index)
    }
}

impl std::error::Error for OutOfBoundsError {}
