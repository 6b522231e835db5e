use crate::adapters::yaml_store::YamlRosterStore;
use crate::cli::output;
use crate::core::errors::{Result, RosterError};

/// Execute the `roster init` command.
///
/// Creates an empty roster file at the configured path.
pub fn execute(store: &YamlRosterStore) -> Result<()> {
    if store.exists() {
        return Err(RosterError::AlreadyInitialized {
            path: store.path().to_path_buf(),
        });
    }

    std::fs::write(store.path(), "users: []\n")?;
    output::success(&format!("Created {}", store.path().display()));
    println!("\n  Next: add your first user with 'roster add'.");

    Ok(())
}
