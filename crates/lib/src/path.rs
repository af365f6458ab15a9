//! Dot-notation path types for nested container access.
//!
//! [`Path`] and [`PathBuf`] follow the borrowed/owned pattern of
//! `std::path::Path`/`PathBuf`: the borrowed form is unsized and lives behind
//! a reference, the owned form can be built incrementally.
//!
//! A path is a sequence of non-empty segments joined by `.`. The segment view
//! is produced lazily by [`Path::segments`]; the raw string form is kept
//! as-is so resolution can first try the whole string as a literal key
//! (a literal key containing `.` shadows segment traversal; see
//! `resolve`).
//!
//! ```
//! use dotmap::path::PathBuf;
//!
//! let path = PathBuf::new().push("user").push("profile").push("name");
//! assert_eq!(path.as_str(), "user.profile.name");
//! assert_eq!(path.segments().count(), 3);
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

/// Normalizes a path string by collapsing empty segments.
///
/// - `""` stays empty
/// - `".user"` → `"user"`
/// - `"user."` → `"user"`
/// - `"user..profile"` → `"user.profile"`
/// - `"..."` → `""`
pub fn normalize_path(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// An owned dot-notation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathBuf {
    inner: String,
}

/// A borrowed dot-notation path.
///
/// This type is unsized and must always be used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Path {
    inner: str,
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Appends a path fragment, normalizing the input.
    ///
    /// Accepts both plain segment strings and dotted fragments. Empty input
    /// is ignored.
    pub fn push(mut self, fragment: impl AsRef<str>) -> Self {
        let normalized = normalize_path(fragment.as_ref());
        if normalized.is_empty() {
            return self;
        }

        if self.inner.is_empty() {
            self.inner = normalized;
        } else {
            self.inner.push('.');
            self.inner.push_str(&normalized);
        }
        self
    }

    /// Joins this path with another path.
    pub fn join(mut self, other: impl AsRef<Path>) -> Self {
        let other = other.as_ref();
        if self.inner.is_empty() {
            self.inner = other.inner.to_string();
        } else if !other.inner.is_empty() {
            self.inner.push('.');
            self.inner.push_str(&other.inner);
        }
        self
    }

    /// Returns the parent path, or `None` if this path has a single segment
    /// or is empty.
    pub fn parent(&self) -> Option<PathBuf> {
        self.inner.rfind('.').map(|last_dot| PathBuf {
            inner: self.inner[..last_dot].to_string(),
        })
    }

    /// Creates a `PathBuf` by normalizing the input string.
    pub fn normalize(path: &str) -> Self {
        PathBuf {
            inner: normalize_path(path),
        }
    }
}

impl Path {
    /// Creates a `Path` from a string without normalization.
    ///
    /// The raw string is preserved; [`Path::segments`] filters empty segments
    /// on iteration, and resolution uses the raw form for literal-key
    /// precedence checks.
    pub fn from_raw(s: &str) -> &Path {
        // SAFETY: Path has the same memory layout as str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the non-empty path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.inner.split('.').filter(|s| !s.is_empty())
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments().count()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments().next().is_none()
    }

    /// Returns the last segment of the path, or `None` if empty.
    pub fn leaf(&self) -> Option<&str> {
        self.inner.split('.').filter(|s| !s.is_empty()).next_back()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

impl Default for PathBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::from_raw(self.inner.as_str())
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.deref()
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::from_raw(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::from_raw(self.as_str())
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.deref()
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

impl From<&str> for PathBuf {
    fn from(s: &str) -> Self {
        Self::normalize(s)
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.inner)
    }
}
