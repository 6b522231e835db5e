pub mod key;
pub mod roster;
pub mod signal;
pub mod user;
