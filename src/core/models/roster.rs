use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::key::Key;
use super::signal::Signal;
use super::user::User;

/// The full in-memory user/key collection.
///
/// Order-preserving: users stay in insertion order, as do each user's
/// keys. Top-level entries other than `users` are carried in `extra` and
/// survive load/save untouched.
///
/// Every operation here is a pure in-memory transformation; persistence
/// is the [`RosterStore`](crate::core::traits::roster_store::RosterStore)
/// port's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Roster {
    /// Look up a user by email.
    pub fn find_user(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    fn find_user_mut(&mut self, email: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.email == email)
    }

    /// All known emails, in roster order. Used as completion candidates.
    pub fn emails(&self) -> Vec<String> {
        self.users.iter().map(|u| u.email.clone()).collect()
    }

    /// Append a new user unless the email is already taken.
    pub fn add_user(&mut self, name: &str, email: &str, keys: Vec<Key>) -> Signal {
        if self.find_user(email).is_some() {
            return Signal::AlreadyExists;
        }
        self.users.push(User::new(name, email, keys));
        Signal::Applied
    }

    /// Remove the user with the given email, keys and all.
    pub fn remove_user(&mut self, email: &str) -> Signal {
        if self.find_user(email).is_none() {
            return Signal::NotFound;
        }
        self.users.retain(|u| u.email != email);
        Signal::Applied
    }

    /// Parse a raw `<type> <key> [hostname]` line and append it to the
    /// user's keys.
    ///
    /// Key material must be unique within that user's own keys only; two
    /// different users may hold the same key value.
    pub fn add_key(&mut self, email: &str, raw: &str) -> Signal {
        let Some(key) = Key::parse(raw) else {
            return Signal::InvalidKeyFormat;
        };
        let Some(user) = self.find_user_mut(email) else {
            return Signal::NotFound;
        };
        if user.has_key(&key.key) {
            return Signal::AlreadyExists;
        }
        user.keys.push(key);
        Signal::Applied
    }

    /// Remove the user's key with the given material.
    pub fn remove_key(&mut self, email: &str, key_value: &str) -> Signal {
        let Some(user) = self.find_user_mut(email) else {
            return Signal::NotFound;
        };
        if !user.has_key(key_value) {
            return Signal::NotFound;
        }
        user.keys.retain(|k| k.key != key_value);
        Signal::Applied
    }

    /// Remove a key by its 1-based position in the user's key list.
    pub fn remove_key_at(&mut self, email: &str, index: usize) -> Signal {
        let Some(user) = self.find_user_mut(email) else {
            return Signal::NotFound;
        };
        if index == 0 || index > user.keys.len() {
            return Signal::InvalidIndex;
        }
        user.keys.remove(index - 1);
        Signal::Applied
    }

    /// Each user with short display summaries of their keys.
    ///
    /// Lazy and restartable: a pure function of the current state that can
    /// be iterated as many times as the caller likes.
    pub fn overview(&self) -> impl Iterator<Item = (&User, Vec<String>)> {
        self.users
            .iter()
            .map(|u| (u, u.keys.iter().map(Key::summary).collect()))
    }

    /// A user's keys with their 1-based positions, or `None` when no user
    /// has that email.
    pub fn keys_of(&self, email: &str) -> Option<impl Iterator<Item = (usize, &Key)>> {
        self.find_user(email)
            .map(|u| u.keys.iter().enumerate().map(|(i, k)| (i + 1, k)))
    }
}
