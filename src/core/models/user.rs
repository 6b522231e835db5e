use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::key::Key;

/// An identity record keyed by email, owning zero or more keys.
///
/// `name` is a display label and need not be unique; `email` is the
/// primary key within a roster. Fields this tool does not know about are
/// captured in `extra` and written back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub keys: Vec<Key>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, keys: Vec<Key>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            keys,
            extra: BTreeMap::new(),
        }
    }

    /// Whether this user already holds a key with the given material.
    pub fn has_key(&self, key_value: &str) -> bool {
        self.keys.iter().any(|k| k.key == key_value)
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
