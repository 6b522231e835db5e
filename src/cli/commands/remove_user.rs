use crate::cli::output;
use crate::core::errors::Result;
use crate::core::traits::line_input::LineInput;
use crate::core::traits::roster_store::RosterStore;
use crate::core::traits::table_view::TableView;

/// Execute the `roster remove` command.
pub fn execute(
    store: &dyn RosterStore,
    input: &mut dyn LineInput,
    view: &dyn TableView,
    email: Option<String>,
) -> Result<()> {
    let mut roster = store.load()?;

    let interactive = email.is_none();
    let email = match email {
        Some(e) => e,
        None => {
            println!("{}", view.users(&roster));
            input.line_with_candidates("Email of user to remove", &roster.emails())?
        }
    };

    let signal = roster.remove_user(&email);
    if signal.is_applied() {
        store.save(&roster)?;
        output::success(&format!("User with email {email} removed."));
    } else {
        output::signal(&format!("User with email {email}"), signal);
    }

    if interactive {
        println!("{}", view.users(&roster));
        input.pause()?;
    }
    Ok(())
}
