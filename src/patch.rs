#[cfg(test)]
mod patch_test;

use crate::{OutOfBoundsError, ParseIndexError, Pointer, Resolve, ResolveError, Token};
use core::fmt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                               PatchOperation                                 ║
║                              ¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯                                ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// A single [RFC 6902](https://datatracker.ietf.org/doc/html/rfc6902) patch
/// operation.
///
/// The `op` field is kept as plain text rather than an enum so that an
/// unrecognized operation is reported when the patch is applied, not when
/// the document is deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    /// The operation to perform: `add`, `remove`, `replace`, `move` or
    /// `copy`, matched case-insensitively.
    pub op: String,

    /// The source location for `move` and `copy`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// The target location.
    pub path: String,

    /// The value for `add` and `replace`; defaults to null.
    #[serde(default)]
    pub value: Value,
}

impl PatchOperation {
    /// Constructs an `add` operation.
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: "add".into(),
            from: None,
            path: path.into(),
            value,
        }
    }

    /// Constructs a `remove` operation.
    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: "remove".into(),
            from: None,
            path: path.into(),
            value: Value::Null,
        }
    }

    /// Constructs a `replace` operation.
    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: "replace".into(),
            from: None,
            path: path.into(),
            value,
        }
    }

    /// Constructs a `copy` operation.
    pub fn copy(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            op: "copy".into(),
            from: Some(from.into()),
            path: path.into(),
            value: Value::Null,
        }
    }

    /// Constructs a `move` operation.
    ///
    /// Named `mov` as `move` is a reserved word.
    pub fn mov(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            op: "move".into(),
            from: Some(from.into()),
            path: path.into(),
            value: Value::Null,
        }
    }
}

/// An ordered list of patch operations, i.e. an RFC 6902 patch document.
///
/// Serializes to and from a JSON array of operation objects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch(
    /// The operations, applied in order.
    pub Vec<PatchOperation>,
);

impl Patch {
    /// Applies the patch to `source`, producing the modified document.
    ///
    /// See [`apply_patch`].
    ///
    /// ## Errors
    /// Returns [`PatchError`] for the first operation which fails; no
    /// document is produced.
    pub fn apply(&self, source: &Value) -> Result<Value, PatchError> {
        apply_patch(source, &self.0)
    }
}

impl From<Vec<PatchOperation>> for Patch {
    fn from(ops: Vec<PatchOperation>) -> Self {
        Self(ops)
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                 Application                                  ║
║                                ¯¯¯¯¯¯¯¯¯¯¯¯¯                                 ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// Applies `ops` to `source` in list order, producing the modified document.
///
/// `source` is never mutated: each operation rebuilds the spine of ancestors
/// above its mutation point and yields a new tree, which becomes the input
/// of the next operation. Application is atomic; if any operation fails the
/// whole call fails and no document is produced.
///
/// ## Example
/// ```
/// # use jsonpatch::{apply_patch, PatchOperation};
/// # use serde_json::json;
/// let doc = json!(["apple"]);
/// let patch = vec![PatchOperation::add("/1", json!("banana"))];
/// assert_eq!(apply_patch(&doc, &patch).unwrap(), json!(["apple", "banana"]));
/// ```
/// ## Errors
/// Returns [`PatchError`] for the first operation which fails.
pub fn apply_patch(source: &Value, ops: &[PatchOperation]) -> Result<Value, PatchError> {
    let mut modified = source.clone();
    for op in ops {
        modified = perform(&modified, op)?;
    }
    Ok(modified)
}

/// Performs a single operation, producing the next document.
fn perform(doc: &Value, operation: &PatchOperation) -> Result<Value, PatchError> {
    let op = operation.op.to_ascii_lowercase();
    let from = operation.from.as_deref();
    // the `from` check precedes the path check; both precede dispatch
    if matches!(op.as_str(), "copy" | "move") && from.is_none() {
        return Err(PatchError::FromRequired);
    }
    if !operation.path.is_empty() && !operation.path.starts_with('/') {
        return Err(PatchError::NoLeadingSlash);
    }
    let (parent, key) = Pointer::new(&operation.path).split_back();
    match op.as_str() {
        "add" => add(doc, parent, key, operation.value.clone()),
        "remove" => remove(doc, parent, key),
        "replace" => replace(doc, parent, key, operation.value.clone()),
        "copy" => copy(doc, from.ok_or(PatchError::FromRequired)?, parent, key),
        "move" => mov(doc, from.ok_or(PatchError::FromRequired)?, parent, key),
        _ => Err(PatchError::UnsupportedOp {
            op: operation.op.clone(),
        }),
    }
}

/// Adds `value` at `key` under the node addressed by `parent`.
///
/// Descends one token at a time, then rebuilds each ancestor on the way back
/// up with the mutated child substituted, so the input tree is untouched.
fn add(doc: &Value, parent: &Pointer, key: Token<'_>, value: Value) -> Result<Value, PatchError> {
    let Some((token, rest)) = parent.split_front() else {
        return insert(doc, key, value);
    };
    let invalid = || PatchError::InvalidTarget {
        path: parent.as_str().to_owned(),
    };
    match doc {
        Value::Array(entries) => {
            let index = token.to_index()?.for_len(entries.len())?;
            let child = &entries[index];
            if child.is_null() {
                return Err(invalid());
            }
            let child = add(child, rest, key, value)?;
            let mut entries = entries.clone();
            entries[index] = child;
            Ok(Value::Array(entries))
        }
        Value::Object(members) => {
            let child = members
                .get(token.as_str())
                .filter(|child| !child.is_null())
                .ok_or_else(invalid)?;
            let child = add(child, rest, key, value)?;
            let mut members = members.clone();
            members.insert(token.as_str().to_owned(), child);
            Ok(Value::Object(members))
        }
        _ => Err(invalid()),
    }
}

/// Removes the node at `key` under the node addressed by `parent`.
fn remove(doc: &Value, parent: &Pointer, key: Token<'_>) -> Result<Value, PatchError> {
    if key.is_empty() {
        // an empty terminal key clears the whole container
        return Ok(match doc {
            Value::Object(_) => Value::Object(Map::new()),
            Value::Array(_) => Value::Array(Vec::new()),
            other => other.clone(),
        });
    }
    let Some((token, rest)) = parent.split_front() else {
        return delete(doc, key);
    };
    let missing = || PatchError::MissingPath {
        path: parent.as_str().to_owned(),
    };
    match doc {
        Value::Array(entries) => {
            let index = token.to_index()?.for_len(entries.len())?;
            let child = &entries[index];
            if child.is_null() {
                return Err(missing());
            }
            let child = remove(child, rest, key)?;
            let mut entries = entries.clone();
            entries[index] = child;
            Ok(Value::Array(entries))
        }
        Value::Object(members) => {
            let child = members
                .get(token.as_str())
                .filter(|child| !child.is_null())
                .ok_or_else(missing)?;
            let child = remove(child, rest, key)?;
            let mut members = members.clone();
            members.insert(token.as_str().to_owned(), child);
            Ok(Value::Object(members))
        }
        _ => Err(missing()),
    }
}

/// Replaces the node at `key` under `parent` with `value`.
///
/// Composed as remove-then-add, both against the tree the previous step
/// produced; a missing target fails exactly the way `remove` would.
fn replace(
    doc: &Value,
    parent: &Pointer,
    key: Token<'_>,
    value: Value,
) -> Result<Value, PatchError> {
    add(&remove(doc, parent, key)?, parent, key, value)
}

/// Copies the node at `from` to `key` under `parent`.
fn copy(doc: &Value, from: &str, parent: &Pointer, key: Token<'_>) -> Result<Value, PatchError> {
    let found = doc
        .get_node(from)?
        .ok_or_else(|| PatchError::MissingFrom {
            from: from.to_owned(),
        })?
        .clone();
    add(doc, parent, key, found)
}

/// Moves the node at `from` to `key` under `parent`.
///
/// The removal happens first, against the original document; the add then
/// runs against the post-removal tree. A destination nested inside the
/// source follows mechanically from that order.
fn mov(doc: &Value, from: &str, parent: &Pointer, key: Token<'_>) -> Result<Value, PatchError> {
    let found = doc
        .get_node(from)?
        .ok_or_else(|| PatchError::MissingFrom {
            from: from.to_owned(),
        })?
        .clone();
    let (from_parent, from_key) = Pointer::new(from).split_back();
    let removed = remove(doc, from_parent, from_key)?;
    add(&removed, parent, key, found)
}

/// Inserts `value` at `key` directly into `doc`.
///
/// Setting an existing object key replaces its value in place; a new key is
/// appended. Array indices are bounded inclusively, so an index equal to the
/// length, or the `-` token, appends. A non-container `doc` is returned
/// unchanged.
fn insert(doc: &Value, key: Token<'_>, value: Value) -> Result<Value, PatchError> {
    match doc {
        Value::Array(entries) => {
            let index = key.to_index()?.for_len_incl(entries.len())?;
            let mut entries = entries.clone();
            entries.insert(index, value);
            Ok(Value::Array(entries))
        }
        Value::Object(members) => {
            let mut members = members.clone();
            members.insert(key.as_str().to_owned(), value);
            Ok(Value::Object(members))
        }
        other => Ok(other.clone()),
    }
}

/// Deletes the node at `key` directly from `doc`.
///
/// A non-container `doc` is returned unchanged.
fn delete(doc: &Value, key: Token<'_>) -> Result<Value, PatchError> {
    match doc {
        Value::Array(entries) => {
            let index = key.to_index()?.for_len(entries.len())?;
            let mut entries = entries.clone();
            entries.remove(index);
            Ok(Value::Array(entries))
        }
        Value::Object(members) => {
            if !members.contains_key(key.as_str()) {
                return Err(PatchError::MissingPath {
                    path: key.as_str().to_owned(),
                });
            }
            let mut members = members.clone();
            // shift_remove keeps the remaining members in insertion order
            members.shift_remove(key.as_str());
            Ok(Value::Object(members))
        }
        other => Ok(other.clone()),
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                  PatchError                                  ║
║                                 ¯¯¯¯¯¯¯¯¯¯¯¯                                 ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// Indicates that a patch operation could not be applied.
///
/// The `Display` output of each variant is part of the crate's contract;
/// calling code and tests key off the exact message text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum PatchError {
    /// A `copy` or `move` operation did not carry a `from` path.
    #[cfg_attr(feature = "miette", diagnostic(code(jsonpatch::patch::from_required)))]
    FromRequired,

    /// The operation's path was not empty and did not start with `'/'`.
    #[cfg_attr(feature = "miette", diagnostic(code(jsonpatch::patch::no_leading_slash)))]
    NoLeadingSlash,

    /// The operation named an op outside the supported set.
    #[cfg_attr(feature = "miette", diagnostic(code(jsonpatch::patch::unsupported_op)))]
    UnsupportedOp {
        /// The unrecognized op.
        op: String,
    },

    /// An intermediate node on an `add` target path was absent or null.
    #[cfg_attr(feature = "miette", diagnostic(code(jsonpatch::patch::invalid_target)))]
    InvalidTarget {
        /// The remainder of the path which failed to resolve.
        path: String,
    },

    /// The node addressed by a `remove`, or by the remove half of `replace`
    /// and `move`, was absent.
    #[cfg_attr(feature = "miette", diagnostic(code(jsonpatch::patch::missing_path)))]
    MissingPath {
        /// The remainder of the path which failed to resolve, or the absent
        /// terminal key.
        path: String,
    },

    /// The source of a `copy` or `move` did not resolve to a node.
    #[cfg_attr(feature = "miette", diagnostic(code(jsonpatch::patch::missing_from)))]
    MissingFrom {
        /// The `from` path.
        from: String,
    },

    /// A token addressed against an array was not a valid index.
    #[cfg_attr(feature = "miette", diagnostic(code(jsonpatch::patch::parse_index)))]
    FailedToParseIndex {
        /// The source [`ParseIndexError`].
        source: ParseIndexError,
    },

    /// An array index was outside the bounds of its array.
    #[cfg_attr(feature = "miette", diagnostic(code(jsonpatch::patch::out_of_bounds)))]
    OutOfBounds {
        /// The source [`OutOfBoundsError`].
        source: OutOfBoundsError,
    },

    /// Resolution of a `from` path failed before any mutation.
    #[cfg_attr(feature = "miette", diagnostic(code(jsonpatch::patch::resolve)))]
    Resolve {
        /// The source [`ResolveError`].
        source: ResolveError,
    },
}

impl PatchError {
    /// Returns `true` if this error is `FromRequired`.
    pub fn is_from_required(&self) -> bool {
        matches!(self, Self::FromRequired)
    }

    /// Returns `true` if this error is `NoLeadingSlash`.
    pub fn is_no_leading_slash(&self) -> bool {
        matches!(self, Self::NoLeadingSlash)
    }

    /// Returns `true` if this error is `UnsupportedOp`.
    pub fn is_unsupported_op(&self) -> bool {
        matches!(self, Self::UnsupportedOp { .. })
    }

    /// Returns `true` if this error is `InvalidTarget`.
    pub fn is_invalid_target(&self) -> bool {
        matches!(self, Self::InvalidTarget { .. })
    }

    /// Returns `true` if this error is `MissingPath`.
    pub fn is_missing_path(&self) -> bool {
        matches!(self, Self::MissingPath { .. })
    }

    /// Returns `true` if this error is `MissingFrom`.
    pub fn is_missing_from(&self) -> bool {
        matches!(self, Self::MissingFrom { .. })
    }

    /// Returns `true` if this error is `FailedToParseIndex`.
    pub fn is_failed_to_parse_index(&self) -> bool {
        matches!(self, Self::FailedToParseIndex { .. })
    }

    /// Returns `true` if this error is `OutOfBounds`.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns `true` if this error is `Resolve`.
    pub fn is_resolve(&self) -> bool {
        matches!(self, Self::Resolve { .. })
    }
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FromRequired => {
                f.write_str(r#"The "from" MUST exist for "copy" and "move" operation."#)
            }
            Self::NoLeadingSlash => {
                f.write_str("Invalid path property, it should start with a slash")
            }
            Self::UnsupportedOp { .. } => {
                f.write_str("Supported op: add, remove, replace, move, copy")
            }
            Self::InvalidTarget { path } => write!(f, r#"Invalid "path" prop: {path}"#),
            Self::MissingPath { path } => write!(f, r#"Missing "path" property: {path}"#),
            Self::MissingFrom { from } => write!(f, "Missing path property: {from}"),
            Self::FailedToParseIndex { source } => write!(f, "{source}"),
            Self::OutOfBounds { source } => write!(f, "{source}"),
            Self::Resolve { source } => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for PatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FailedToParseIndex { source } => Some(source),
            Self::OutOfBounds { source } => Some(source),
            Self::Resolve { source } => Some(source),
            _ => None,
        }
    }
}

impl From<ParseIndexError> for PatchError {
    fn from(source: ParseIndexError) -> Self {
        Self::FailedToParseIndex { source }
    }
}

impl From<OutOfBoundsError> for PatchError {
    fn from(source: OutOfBoundsError) -> Self {
        Self::OutOfBounds { source }
    }
}

impl From<ResolveError> for PatchError {
    fn from(source: ResolveError) -> Self {
        Self::Resolve { source }
    }
}
