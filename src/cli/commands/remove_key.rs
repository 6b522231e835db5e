use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::roster::Roster;
use crate::core::models::signal::Signal;
use crate::core::traits::line_input::LineInput;
use crate::core::traits::roster_store::RosterStore;
use crate::core::traits::table_view::TableView;

/// Execute the `roster keys remove` command.
///
/// With `--index` or `--key` this is a one-shot operation; otherwise it
/// loops over the numbered key table until the operator types `done`.
pub fn execute(
    store: &dyn RosterStore,
    input: &mut dyn LineInput,
    view: &dyn TableView,
    email: Option<String>,
    index: Option<usize>,
    key: Option<String>,
) -> Result<()> {
    let mut roster = store.load()?;

    let prompted = email.is_none();
    let email = match email {
        Some(e) => e,
        None => {
            println!("{}", view.users(&roster));
            input.line_with_candidates("User email to remove keys from", &roster.emails())?
        }
    };

    if roster.find_user(&email).is_none() {
        output::warning(&format!("User with email {email} not found."));
        if prompted {
            input.pause()?;
        }
        return Ok(());
    }

    if let Some(i) = index {
        let signal = roster.remove_key_at(&email, i);
        report(store, &roster, &format!("Key number {i}"), signal)?;
        return Ok(());
    }
    if let Some(value) = key {
        let signal = roster.remove_key(&email, &value);
        report(store, &roster, &format!("Key '{value}'"), signal)?;
        return Ok(());
    }

    loop {
        if let Some(user) = roster.find_user(&email) {
            output::header(&format!("Keys for {user}"));
            println!("{}", view.keys(user));
        }
        let entry = input.line("Key number to remove, or 'done'")?;
        let trimmed = entry.trim();
        if trimmed.eq_ignore_ascii_case("done") {
            break;
        }
        match trimmed.parse::<usize>() {
            Ok(i) => {
                let signal = roster.remove_key_at(&email, i);
                report(store, &roster, &format!("Key number {i}"), signal)?;
            }
            Err(_) => output::warning("Enter a key number, or 'done' to finish."),
        }
    }

    input.pause()?;
    Ok(())
}

/// Persist on success and report the signal either way.
fn report(store: &dyn RosterStore, roster: &Roster, subject: &str, signal: Signal) -> Result<()> {
    if signal.is_applied() {
        store.save(roster)?;
        output::success(&format!("{subject} removed."));
    } else {
        output::signal(subject, signal);
    }
    Ok(())
}
