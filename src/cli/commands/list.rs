use crate::cli::output;
use crate::core::errors::Result;
use crate::core::traits::roster_store::RosterStore;
use crate::core::traits::table_view::TableView;

/// Execute the `roster list` command: the full user overview.
pub fn users(store: &dyn RosterStore, view: &dyn TableView) -> Result<()> {
    let roster = store.load()?;
    println!("{}", view.users(&roster));
    if roster.users.is_empty() {
        println!("  No users yet. Add one with 'roster add'.");
    }
    Ok(())
}

/// Execute the `roster keys list` command: one user's keys, numbered.
pub fn keys(store: &dyn RosterStore, view: &dyn TableView, email: &str) -> Result<()> {
    let roster = store.load()?;
    match roster.find_user(email) {
        Some(user) => {
            output::header(&format!("Keys for {user}"));
            println!("{}", view.keys(user));
            if user.keys.is_empty() {
                println!("  No keys yet. Add one with 'roster keys add {email}'.");
            }
        }
        None => output::warning(&format!("User with email {email} not found.")),
    }
    Ok(())
}
