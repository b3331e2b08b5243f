use std::fmt;

use serde::{Deserialize, Serialize};

/// Container-relative key addressing a single blob.
///
/// Invariant: an `ObjectKey` never begins with `/`. Keys are derived from
/// request paths (which do carry a leading separator) via [`ObjectKey::from_path`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Build a key from a container path, stripping the leading separator.
    pub fn from_path(path: &str) -> Self {
        Self(path.strip_prefix('/').unwrap_or(path).to_string())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a child name under this key with a `/` separator.
    ///
    /// Used for the nested-index probe: the key of `name` inside the
    /// directory this key would denote.
    pub fn child(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}/{}", self.0, name))
        }
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectKey {
    fn from(path: &str) -> Self {
        Self::from_path(path)
    }
}
