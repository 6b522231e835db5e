mod adapters;
mod cli;
mod core;

use std::path::PathBuf;

use clap::Parser;

use adapters::dialoguer_input::DialoguerInput;
use adapters::table_view::ComfyTableView;
use adapters::yaml_store::YamlRosterStore;
use cli::{Cli, Commands, KeysAction};

fn main() {
    let args = Cli::parse();

    let store = YamlRosterStore::new(PathBuf::from(&args.file));
    let mut input = DialoguerInput;
    let view = ComfyTableView;

    let result = match args.command {
        Commands::Init => cli::commands::init::execute(&store),
        Commands::List => cli::commands::list::users(&store, &view),
        Commands::Add { name, email } => {
            cli::commands::add_user::execute(&store, &mut input, &view, name, email)
        }
        Commands::Remove { email } => {
            cli::commands::remove_user::execute(&store, &mut input, &view, email)
        }
        Commands::Keys { action } => match action {
            KeysAction::List { email } => cli::commands::list::keys(&store, &view, &email),
            KeysAction::Add {
                email,
                key,
                from_file,
            } => cli::commands::add_key::execute(&store, &mut input, &view, email, key, from_file),
            KeysAction::Remove { email, index, key } => {
                cli::commands::remove_key::execute(&store, &mut input, &view, email, index, key)
            }
        },
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
