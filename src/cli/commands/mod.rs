pub mod add_key;
pub mod add_user;
pub mod init;
pub mod list;
pub mod remove_key;
pub mod remove_user;

#[cfg(test)]
pub(crate) mod testutil {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use crate::core::errors::Result;
    use crate::core::models::roster::Roster;
    use crate::core::traits::line_input::LineInput;
    use crate::core::traits::roster_store::RosterStore;

    /// In-memory store for driving command flows without a filesystem.
    pub struct MemoryStore {
        inner: RefCell<Roster>,
        pub saves: RefCell<usize>,
    }

    impl MemoryStore {
        pub fn new(roster: Roster) -> Self {
            Self {
                inner: RefCell::new(roster),
                saves: RefCell::new(0),
            }
        }

        pub fn snapshot(&self) -> Roster {
            self.inner.borrow().clone()
        }
    }

    impl RosterStore for MemoryStore {
        fn load(&self) -> Result<Roster> {
            Ok(self.inner.borrow().clone())
        }

        fn save(&self, roster: &Roster) -> Result<()> {
            *self.inner.borrow_mut() = roster.clone();
            *self.saves.borrow_mut() += 1;
            Ok(())
        }
    }

    /// Scripted operator input: answers prompts from a fixed queue.
    pub struct ScriptedInput {
        lines: VecDeque<String>,
    }

    impl ScriptedInput {
        pub fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|s| s.to_string()).collect(),
            }
        }

        fn next(&mut self) -> String {
            self.lines.pop_front().unwrap_or_else(|| "done".to_string())
        }
    }

    impl LineInput for ScriptedInput {
        fn line(&mut self, _prompt: &str) -> Result<String> {
            Ok(self.next())
        }

        fn line_with_candidates(&mut self, _prompt: &str, _candidates: &[String]) -> Result<String> {
            Ok(self.next())
        }

        fn path(&mut self, _prompt: &str) -> Result<String> {
            Ok(self.next())
        }

        fn pause(&mut self) -> Result<()> {
            Ok(())
        }
    }
}
