use crate::cli::output;
use crate::core::errors::Result;
use crate::core::traits::line_input::LineInput;
use crate::core::traits::roster_store::RosterStore;
use crate::core::traits::table_view::TableView;

/// Execute the `roster add` command.
///
/// Prompts for whatever `--name`/`--email` did not supply, creates the
/// user, and in interactive use drops straight into the add-key loop for
/// the new user.
pub fn execute(
    store: &dyn RosterStore,
    input: &mut dyn LineInput,
    view: &dyn TableView,
    name: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let mut roster = store.load()?;

    let interactive = name.is_none() || email.is_none();
    if interactive {
        println!("{}", view.users(&roster));
    }

    let name = match name {
        Some(n) => n,
        None => input.line("New user name")?,
    };
    let email = match email {
        Some(e) => e,
        None => input.line("New user email")?,
    };

    let signal = roster.add_user(&name, &email, Vec::new());
    if signal.is_applied() {
        store.save(&roster)?;
        output::success(&format!("User {name} added."));
        if interactive {
            super::add_key::key_loop(store, &mut roster, input, view, &email)?;
        }
    } else {
        output::signal(&format!("User with email {email}"), signal);
    }

    if interactive {
        println!("{}", view.users(&roster));
        input.pause()?;
    }
    Ok(())
}
