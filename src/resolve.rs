use crate::{OutOfBoundsError, ParseIndexError, Pointer};
use core::fmt;
use serde_json::Value;

/// Resolve is implemented by documents which can look up a node by a JSON
/// Pointer.
pub trait Resolve {
    /// Looks up the node addressed by `path`.
    ///
    /// An empty path addresses the receiver itself, and a non-container
    /// receiver resolves to itself for any path. Descent through the tree
    /// stops as soon as a primitive or null is reached, ignoring any
    /// remaining segments. A well-formed path whose object key is absent
    /// yields `Ok(None)` rather than an error.
    ///
    /// ## Examples
    /// ```
    /// # use jsonpatch::Resolve;
    /// # use serde_json::json;
    /// let doc = json!({ "name": "John" });
    /// assert_eq!(doc.get_node("/name").unwrap(), Some(&json!("John")));
    /// assert_eq!(doc.get_node("").unwrap(), Some(&doc));
    /// assert_eq!(doc.get_node("/email").unwrap(), None);
    /// ```
    /// ## Errors
    /// Returns [`ResolveError`] when the path violates the pointer syntax or
    /// an array segment is not a usable index.
    fn get_node(&self, path: &str) -> Result<Option<&Value>, ResolveError>;

    /// Returns the text content of the primitive node addressed by `path`.
    ///
    /// Absent nodes, containers and null all yield an empty string; strings
    /// yield their content without quotes, numbers and booleans their
    /// literal form.
    ///
    /// ## Examples
    /// ```
    /// # use jsonpatch::Resolve;
    /// # use serde_json::json;
    /// let doc = json!({ "name": "John", "age": 30 });
    /// assert_eq!(doc.get_node_text("/name").unwrap(), "John");
    /// assert_eq!(doc.get_node_text("/age").unwrap(), "30");
    /// assert_eq!(doc.get_node_text("/email").unwrap(), "");
    /// ```
    /// ## Errors
    /// Returns [`ResolveError`] under the same conditions as
    /// [`Self::get_node`].
    fn get_node_text(&self, path: &str) -> Result<String, ResolveError> {
        Ok(match self.get_node(path)? {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::Bool(flag)) => flag.to_string(),
            _ => String::new(),
        })
    }
}

impl Resolve for Value {
    fn get_node(&self, path: &str) -> Result<Option<&Value>, ResolveError> {
        // non-containers absorb any path, valid or not, and resolve to
        // themselves
        if !matches!(self, Value::Object(_) | Value::Array(_)) {
            return Ok(Some(self));
        }
        // the empty path addresses the root
        if path.is_empty() {
            return Ok(Some(self));
        }
        if !path.starts_with('/') {
            return Err(ResolveError::NoLeadingSlash);
        }
        if path.ends_with('/') {
            return Err(ResolveError::TrailingSlash);
        }
        let mut node = self;
        for token in Pointer::new(path).tokens() {
            node = match node {
                Value::Array(entries) => {
                    let index = token.to_index()?.for_len(entries.len())?;
                    &entries[index]
                }
                Value::Object(members) => match members.get(token.as_str()) {
                    Some(child) => child,
                    None => return Ok(None),
                },
                // a primitive or null swallows the rest of the path
                _ => break,
            };
        }
        Ok(Some(node))
    }
}

/// Indicates that a lookup by JSON Pointer failed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum ResolveError {
    /// The path was not empty and did not start with `'/'`.
    #[cfg_attr(feature = "miette", diagnostic(code(jsonpatch::resolve::no_leading_slash)))]
    NoLeadingSlash,

    /// The path ended with `'/'`.
    #[cfg_attr(feature = "miette", diagnostic(code(jsonpatch::resolve::trailing_slash)))]
    TrailingSlash,

    /// A segment addressed against an array was not a valid index.
    #[cfg_attr(feature = "miette", diagnostic(code(jsonpatch::resolve::parse_index)))]
    FailedToParseIndex {
        /// The source [`ParseIndexError`].
        source: ParseIndexError,
    },

    /// An array index was outside the bounds of its array.
    #[cfg_attr(feature = "miette", diagnostic(code(jsonpatch::resolve::out_of_bounds)))]
    OutOfBounds {
        /// The source [`OutOfBoundsError`].
        source: OutOfBoundsError,
    },
}

impl ResolveError {
    /// Returns `true` if this error is `NoLeadingSlash`.
    pub fn is_no_leading_slash(&self) -> bool {
        matches!(self, Self::NoLeadingSlash)
    }

    /// Returns `true` if this error is `TrailingSlash`.
    pub fn is_trailing_slash(&self) -> bool {
        matches!(self, Self::TrailingSlash)
    }

    /// Returns `true` if this error is `FailedToParseIndex`.
    pub fn is_failed_to_parse_index(&self) -> bool {
        matches!(self, Self::FailedToParseIndex { .. })
    }

    /// Returns `true` if this error is `OutOfBounds`.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLeadingSlash => f.write_str("path should start with a slash"),
            Self::TrailingSlash => f.write_str("path can not end with a slash"),
            Self::FailedToParseIndex { source } => write!(f, "{source}"),
            Self::OutOfBounds { source } => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FailedToParseIndex { source } => Some(source),
            Self::OutOfBounds { source } => Some(source),
            _ => None,
        }
    }
}

impl From<ParseIndexError> for ResolveError {
    fn from(source: ParseIndexError) -> Self {
        Self::FailedToParseIndex { source }
    }
}

impl From<OutOfBoundsError> for ResolveError {
    fn from(source: OutOfBoundsError) -> Self {
        Self::OutOfBounds { source }
    }
}
