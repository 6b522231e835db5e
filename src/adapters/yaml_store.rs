use std::path::{Path, PathBuf};

use crate::core::errors::{Result, RosterError};
use crate::core::models::roster::Roster;
use crate::core::traits::roster_store::RosterStore;

/// File-based roster store persisting to a single YAML document.
///
/// The whole file is read and written wholesale. Top-level entries other
/// than `users`, and per-user fields this tool does not recognize, ride
/// along in the models' flattened maps and are written back verbatim.
///
/// Example `roster.yaml`:
/// ```text
/// users:
///   - name: Alice
///     email: a@x.com
///     keys:
///       - type: ssh-ed25519
///         key: AAAAC3Nza...
///         hostname: laptop
///         access: []
/// ```
#[derive(Clone)]
pub struct YamlRosterStore {
    path: PathBuf,
}

impl YamlRosterStore {
    /// Create a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Return the file path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists yet.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl RosterStore for YamlRosterStore {
    fn load(&self) -> Result<Roster> {
        if !self.path.exists() {
            return Err(RosterError::FileNotFound {
                path: self.path.clone(),
            });
        }
        let content = std::fs::read_to_string(&self.path)?;
        serde_yaml::from_str(&content).map_err(|e| RosterError::ParseError {
            path: self.path.clone(),
            detail: e.to_string(),
        })
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        let content = serde_yaml::to_string(roster).map_err(|e| RosterError::ParseError {
            path: self.path.clone(),
            detail: e.to_string(),
        })?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
