/// Advisory outcome of a roster operation.
///
/// Signals are ordinary result variants, not failures: the interactive
/// session reports them to the operator and carries on, and programmatic
/// callers match on them. Only I/O problems become `RosterError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The mutation was applied to the roster.
    Applied,
    /// A user with that email (or a key with that value) is already present.
    AlreadyExists,
    /// No user with that email, or no key with that value.
    NotFound,
    /// A raw key string had fewer than two whitespace-separated tokens.
    InvalidKeyFormat,
    /// A 1-based key index outside the user's current key list.
    InvalidIndex,
}

impl Signal {
    /// True when the roster actually changed and should be re-saved.
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::Applied => "applied",
            Self::AlreadyExists => "already exists",
            Self::NotFound => "not found",
            Self::InvalidKeyFormat => {
                "invalid key format, expected: <type> <key> [hostname]"
            }
            Self::InvalidIndex => "invalid key number",
        };
        write!(f, "{msg}")
    }
}
