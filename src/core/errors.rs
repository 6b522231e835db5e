use std::path::PathBuf;

/// All hard failures for roster.
///
/// Everything recoverable at the prompt (duplicate email, missing user,
/// malformed key string) is a [`Signal`](crate::core::models::signal::Signal)
/// instead; only unavailable or unreadable storage ends up here.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error(
        "Roster file not found: {path}\n\n  \
         Check that the path is correct, or run 'roster init' to create one.\n  \
         Use '--file <path>' to point at a roster stored elsewhere."
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "Failed to parse {path}: {detail}\n\n  \
         The roster file must be a YAML mapping with a 'users' list.\n  \
         Fix the file by hand, or move it aside and run 'roster init'."
    )]
    ParseError { path: PathBuf, detail: String },

    #[error(
        "Roster file already exists: {path}\n\n  \
         Edit it with 'roster add' and friends, or pick another \
         location with '--file <path>'."
    )]
    AlreadyInitialized { path: PathBuf },

    #[error(
        "No usable key line in {path}\n\n  \
         Expected an OpenSSH-style public key: <type> <key> [comment]."
    )]
    EmptyKeyFile { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<dialoguer::Error> for RosterError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Io(std::io::Error::other(err))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RosterError>;
