use crate::core::models::roster::Roster;
use crate::core::models::user::User;

/// Port for rendering roster state as text tables.
///
/// Implementations return the rendered table; callers decide where it
/// goes. Keeps the core free of terminal concerns.
pub trait TableView {
    /// The user overview: one row per key, continuation rows dashed,
    /// a `No keys` placeholder for keyless users.
    fn users(&self, roster: &Roster) -> String;

    /// A single user's keys with 1-based row numbers.
    fn keys(&self, user: &User) -> String;
}
