use std::path::Path;

use crate::cli::output;
use crate::core::errors::{Result, RosterError};
use crate::core::models::roster::Roster;
use crate::core::traits::line_input::LineInput;
use crate::core::traits::roster_store::RosterStore;
use crate::core::traits::table_view::TableView;

/// Execute the `roster keys add` command.
///
/// With `--key` or `--from-file` this is a one-shot operation; otherwise
/// it loops, collecting raw key lines until the operator types `done`.
pub fn execute(
    store: &dyn RosterStore,
    input: &mut dyn LineInput,
    view: &dyn TableView,
    email: Option<String>,
    key: Option<String>,
    from_file: Option<String>,
) -> Result<()> {
    let mut roster = store.load()?;

    let prompted = email.is_none();
    let email = match email {
        Some(e) => e,
        None => {
            println!("{}", view.users(&roster));
            input.line_with_candidates("User email to add keys to", &roster.emails())?
        }
    };

    if roster.find_user(&email).is_none() {
        output::warning(&format!("User with email {email} not found."));
        if prompted {
            input.pause()?;
        }
        return Ok(());
    }

    if let Some(path) = from_file {
        let raw = read_key_file(Path::new(&path))?;
        apply(store, &mut roster, &email, &raw)?;
        return Ok(());
    }
    if let Some(raw) = key {
        apply(store, &mut roster, &email, &raw)?;
        return Ok(());
    }

    key_loop(store, &mut roster, input, view, &email)?;
    input.pause()?;
    Ok(())
}

/// Collect raw keys for one user until the `done` sentinel.
///
/// Also shared by the add-user flow, which drops straight into key
/// collection for the user it just created.
pub(super) fn key_loop(
    store: &dyn RosterStore,
    roster: &mut Roster,
    input: &mut dyn LineInput,
    view: &dyn TableView,
    email: &str,
) -> Result<()> {
    loop {
        if let Some(user) = roster.find_user(email) {
            output::header(&format!("Keys for {user}"));
            println!("{}", view.keys(user));
        }
        let raw = input.line("Key (<type> <key> [hostname]), 'file' to import, or 'done'")?;
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("done") {
            break;
        }
        if trimmed.eq_ignore_ascii_case("file") {
            let path = input.path("Path to public key file")?;
            match read_key_file(Path::new(&path)) {
                Ok(raw) => {
                    apply(store, roster, email, &raw)?;
                }
                Err(e) => output::warning(&e.to_string()),
            }
            continue;
        }
        apply(store, roster, email, trimmed)?;
    }
    Ok(())
}

/// Run one add-key mutation, persist on success, report the signal.
fn apply(store: &dyn RosterStore, roster: &mut Roster, email: &str, raw: &str) -> Result<()> {
    let signal = roster.add_key(email, raw);
    if signal.is_applied() {
        store.save(roster)?;
        output::success("Key added.");
    } else {
        output::signal(&format!("Key '{raw}'"), signal);
    }
    Ok(())
}

/// Read the first usable public key line from a file.
///
/// Blank lines and `#` comments are skipped, matching the layout of
/// OpenSSH `authorized_keys` and `.pub` files.
fn read_key_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)?;
    content
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .ok_or_else(|| RosterError::EmptyKeyFile {
            path: path.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::table_view::ComfyTableView;
    use crate::cli::commands::testutil::{MemoryStore, ScriptedInput};
    use crate::core::models::signal::Signal;

    fn store_with_alice() -> MemoryStore {
        let mut roster = Roster::default();
        roster.add_user("Alice", "a@x.com", vec![]);
        MemoryStore::new(roster)
    }

    #[test]
    fn one_shot_key_is_persisted() {
        let store = store_with_alice();
        let mut input = ScriptedInput::new(&[]);
        execute(
            &store,
            &mut input,
            &ComfyTableView,
            Some("a@x.com".into()),
            Some("ssh-rsa KEY123 myhost".into()),
            None,
        )
        .unwrap();

        let roster = store.snapshot();
        let keys = &roster.find_user("a@x.com").unwrap().keys;
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].hostname, "myhost");
        assert_eq!(*store.saves.borrow(), 1);
    }

    #[test]
    fn loop_collects_until_done() {
        let store = store_with_alice();
        let mut input = ScriptedInput::new(&[
            "a@x.com",
            "ssh-rsa ONE host1",
            "ssh-ed25519 TWO",
            "done",
        ]);
        execute(&store, &mut input, &ComfyTableView, None, None, None).unwrap();

        let roster = store.snapshot();
        assert_eq!(roster.find_user("a@x.com").unwrap().keys.len(), 2);
        assert_eq!(*store.saves.borrow(), 2);
    }

    #[test]
    fn invalid_line_reprompts_instead_of_exiting() {
        let store = store_with_alice();
        let mut input = ScriptedInput::new(&[
            "a@x.com",
            "onlytype",
            "onlytype",
            "ssh-rsa GOOD",
            "done",
        ]);
        execute(&store, &mut input, &ComfyTableView, None, None, None).unwrap();

        let roster = store.snapshot();
        let keys = &roster.find_user("a@x.com").unwrap().keys;
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].key, "GOOD");
    }

    #[test]
    fn duplicate_key_in_loop_is_advisory() {
        let store = store_with_alice();
        let mut input = ScriptedInput::new(&[
            "a@x.com",
            "ssh-rsa SAME",
            "ssh-rsa SAME",
            "done",
        ]);
        execute(&store, &mut input, &ComfyTableView, None, None, None).unwrap();
        assert_eq!(store.snapshot().find_user("a@x.com").unwrap().keys.len(), 1);
    }

    #[test]
    fn unknown_email_is_advisory_not_fatal() {
        let store = store_with_alice();
        let mut input = ScriptedInput::new(&[]);
        let result = execute(
            &store,
            &mut input,
            &ComfyTableView,
            Some("ghost@x.com".into()),
            Some("ssh-rsa KEY".into()),
            None,
        );
        assert!(result.is_ok());
        assert_eq!(*store.saves.borrow(), 0);
    }

    #[test]
    fn import_from_file_in_loop() {
        let dir = tempfile::tempdir().unwrap();
        let pubkey = dir.path().join("id_ed25519.pub");
        std::fs::write(&pubkey, "# comment\nssh-ed25519 AAAACCCC laptop\n").unwrap();

        let store = store_with_alice();
        let path = pubkey.to_string_lossy().into_owned();
        let mut input = ScriptedInput::new(&["a@x.com", "file", path.as_str(), "done"]);
        execute(&store, &mut input, &ComfyTableView, None, None, None).unwrap();

        let roster = store.snapshot();
        let keys = &roster.find_user("a@x.com").unwrap().keys;
        assert_eq!(keys[0].key, "AAAACCCC");
        assert_eq!(keys[0].hostname, "laptop");
    }

    #[test]
    fn read_key_file_rejects_comment_only_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.pub");
        std::fs::write(&path, "# nothing here\n\n").unwrap();
        assert!(matches!(
            read_key_file(&path),
            Err(RosterError::EmptyKeyFile { .. })
        ));
    }

    #[test]
    fn cross_user_duplicate_is_allowed_via_cli() {
        let mut roster = Roster::default();
        roster.add_user("Alice", "a@x.com", vec![]);
        roster.add_user("Bob", "b@x.com", vec![]);
        assert_eq!(roster.add_key("a@x.com", "ssh-rsa SHARED"), Signal::Applied);
        let store = MemoryStore::new(roster);

        let mut input = ScriptedInput::new(&[]);
        execute(
            &store,
            &mut input,
            &ComfyTableView,
            Some("b@x.com".into()),
            Some("ssh-rsa SHARED".into()),
            None,
        )
        .unwrap();
        assert_eq!(store.snapshot().find_user("b@x.com").unwrap().keys.len(), 1);
    }
}
