use serde::{Deserialize, Serialize};

/// A single credential owned by a user.
///
/// Only `type` and `key` are required in the roster file; `hostname`
/// defaults to empty and `access` to no scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    #[serde(rename = "type")]
    pub key_type: String,
    pub key: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub access: Vec<String>,
}

impl Key {
    /// Parse a raw `<type> <key> [hostname]` line.
    ///
    /// Returns `None` when fewer than two whitespace-separated tokens are
    /// present. Anything after the third token is ignored, matching the
    /// OpenSSH `authorized_keys` habit of trailing comments.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut tokens = raw.split_whitespace();
        let key_type = tokens.next()?.to_string();
        let key = tokens.next()?.to_string();
        let hostname = tokens.next().unwrap_or("").to_string();
        Some(Self {
            key_type,
            key,
            hostname,
            access: Vec::new(),
        })
    }

    /// Short display form: the type plus the first five characters of the
    /// key material and an ellipsis. Never used for comparison or storage.
    pub fn summary(&self) -> String {
        let prefix: String = self.key.chars().take(5).collect();
        format!("{} {}...", self.key_type, prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_line() {
        let key = Key::parse("ssh-ed25519 AAAABBBB host1").unwrap();
        assert_eq!(key.key_type, "ssh-ed25519");
        assert_eq!(key.key, "AAAABBBB");
        assert_eq!(key.hostname, "host1");
        assert!(key.access.is_empty());
    }

    #[test]
    fn parse_without_hostname() {
        let key = Key::parse("ssh-rsa KEY123").unwrap();
        assert_eq!(key.hostname, "");
    }

    #[test]
    fn parse_single_token_fails() {
        assert!(Key::parse("onlytype").is_none());
        assert!(Key::parse("").is_none());
        assert!(Key::parse("   ").is_none());
    }

    #[test]
    fn summary_truncates_to_five_chars() {
        let key = Key::parse("ssh-rsa ABCDEFGHIJ").unwrap();
        assert_eq!(key.summary(), "ssh-rsa ABCDE...");
    }

    #[test]
    fn summary_of_short_key_keeps_whole_material() {
        let key = Key::parse("ssh-rsa abc").unwrap();
        assert_eq!(key.summary(), "ssh-rsa abc...");
    }
}
