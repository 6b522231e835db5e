use crate::core::errors::Result;
use crate::core::models::roster::Roster;

/// Port for loading and persisting the whole roster.
///
/// Persistence is always wholesale: the session loads once, mutates in
/// memory, and writes everything back after each mutating action. There
/// is no locking; concurrent writers are out of scope.
pub trait RosterStore {
    /// Load the full roster from the backing storage.
    fn load(&self) -> Result<Roster>;

    /// Write the full roster back, replacing whatever was stored.
    fn save(&self, roster: &Roster) -> Result<()>;
}
