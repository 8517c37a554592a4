use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A value in a converted VDF document.
///
/// Quoted VDF values always come through as strings. Unquoted ones are parsed as JSON literals,
/// so a bare `123` becomes a number.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LibraryNode {
    Object(IndexMap<String, LibraryNode>),
    String(String),
    Number(serde_json::Number),
    Bool(bool),
    Null,
}

impl LibraryNode {
    /// Returns the child under `key` if this node is an object.
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }

    #[inline]
    pub const fn as_object(&self) -> Option<&IndexMap<String, Self>> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string),
            _ => None,
        }
    }
}
