use crate::{Token, Tokens};
use core::fmt;

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                   Pointer                                    ║
║                                  ¯¯¯¯¯¯¯¯¯                                   ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// A JSON Pointer is a string containing a sequence of zero or more reference
/// tokens, each prefixed by a `'/'` character.
///
/// The empty pointer addresses the whole document. See [RFC
/// 6901](https://datatracker.ietf.org/doc/html/rfc6901) for more information.
///
/// A `Pointer` wraps its string without validating it. The two consumers of
/// pointers, the resolver and the patch applier, enforce the syntax rules
/// themselves, each with its own failure wording.
///
/// ## Example
/// ```
/// use jsonpatch::Pointer;
///
/// let ptr = Pointer::new("/foo/bar");
/// let (parent, key) = ptr.split_back();
/// assert_eq!(parent.as_str(), "/foo");
/// assert_eq!(key.as_str(), "bar");
/// ```
#[repr(transparent)]
pub struct Pointer(str);

impl Pointer {
    /// Wraps a string as a `Pointer`.
    ///
    /// No validation is performed.
    pub fn new<S: AsRef<str> + ?Sized>(s: &S) -> &Self {
        let s = s.as_ref();
        // SAFETY: Pointer is a transparent wrapper around str
        unsafe { &*(core::ptr::from_ref::<str>(s) as *const Self) }
    }

    /// The root pointer, i.e. the empty string, which addresses the whole
    /// document.
    pub fn root() -> &'static Self {
        Self::new("")
    }

    /// Extracts a string slice containing the entire `Pointer`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the root pointer (the empty string).
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits the first token from the rest of the pointer.
    ///
    /// The remainder keeps its leading `'/'`, so it is itself a pointer.
    /// Returns `None` for the root pointer.
    ///
    /// ## Example
    /// ```
    /// # use jsonpatch::Pointer;
    /// let (token, rest) = Pointer::new("/foo/bar").split_front().unwrap();
    /// assert_eq!(token.as_str(), "foo");
    /// assert_eq!(rest.as_str(), "/bar");
    /// assert!(rest.split_front().unwrap().1.is_root());
    /// ```
    pub fn split_front(&self) -> Option<(Token<'_>, &Self)> {
        if self.is_root() {
            return None;
        }
        let rest = &self.0[1..];
        match rest.find('/') {
            Some(i) => Some((Token::new(&rest[..i]), Self::new(&rest[i..]))),
            None => Some((Token::new(rest), Self::root())),
        }
    }

    /// Splits the pointer into its parent path and terminal key.
    ///
    /// The split is total: the root pointer yields a root parent and an
    /// empty key, and `"/"` does as well.
    ///
    /// ## Example
    /// ```
    /// # use jsonpatch::Pointer;
    /// let (parent, key) = Pointer::new("/age").split_back();
    /// assert!(parent.is_root());
    /// assert_eq!(key.as_str(), "age");
    /// ```
    pub fn split_back(&self) -> (&Self, Token<'_>) {
        match self.0.rfind('/') {
            Some(i) => (Self::new(&self.0[..i]), Token::new(&self.0[i + 1..])),
            None => (Self::root(), Token::new(&self.0)),
        }
    }

    /// Returns an iterator over the `Token`s of the `Pointer`.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(&self.0)
    }
}

impl PartialEq for Pointer {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Pointer {}

impl PartialEq<str> for Pointer {
    fn eq(&self, other: &str) -> bool {
        &self.0 == other
    }
}

impl PartialEq<String> for Pointer {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other.as_str()
    }
}

impl AsRef<str> for Pointer {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::hash::Hash for Pointer {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0)
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0)
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                    Tests                                     ║
║                                   ¯¯¯¯¯¯¯                                    ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/
