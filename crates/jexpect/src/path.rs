//! Key paths: the location of a field within the compared trees.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The sequence of keys identifying a nested field's location.
///
/// Object keys are stored verbatim; array indexes are stored in their
/// decimal string form. `Display` renders JSON Pointer syntax (RFC 6901),
/// with the root path shown as `/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// The root path (the top-level object itself).
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns this path extended with one more segment.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.to_string());
        Self(segments)
    }

    /// The last segment — the offending key — or `None` at the root.
    pub fn key(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// All segments from the root down.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.0 {
            // RFC 6901 escaping: "~" -> "~0", "/" -> "~1".
            write!(f, "/{}", segment.replace('~', "~0").replace('/', "~1"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_displays_as_slash() {
        assert_eq!(KeyPath::root().to_string(), "/");
        assert!(KeyPath::root().is_root());
        assert_eq!(KeyPath::root().key(), None);
    }

    #[test]
    fn child_extends_path() {
        let path = KeyPath::root().child("config").child("port");
        assert_eq!(path.to_string(), "/config/port");
        assert_eq!(path.key(), Some("port"));
        assert_eq!(path.segments(), ["config", "port"]);
    }

    #[test]
    fn special_characters_are_escaped() {
        let path = KeyPath::root().child("a/b").child("c~d");
        assert_eq!(path.to_string(), "/a~1b/c~0d");
    }
}
