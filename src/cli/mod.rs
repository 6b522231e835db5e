pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Your users. Their keys. One file.
#[derive(Parser, Debug)]
#[command(name = "roster", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the roster file
    #[arg(long, global = true, default_value = "roster.yaml")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty roster file
    Init,

    /// Show all users and their keys
    List,

    /// Add a user, then collect their keys interactively
    Add {
        /// Display name; prompted for when omitted
        #[arg(long)]
        name: Option<String>,

        /// Email, unique per roster; prompted for when omitted
        #[arg(long)]
        email: Option<String>,
    },

    /// Remove a user and all their keys
    Remove {
        /// Email of the user to remove; prompted for when omitted
        email: Option<String>,
    },

    /// Manage a user's keys
    Keys {
        #[command(subcommand)]
        action: KeysAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum KeysAction {
    /// List a user's keys with their numbers
    List {
        /// Email of the user
        email: String,
    },

    /// Add keys to a user
    Add {
        /// Email of the user; prompted for when omitted
        email: Option<String>,

        /// One raw key `<type> <key> [hostname]`; skips the interactive loop
        #[arg(long)]
        key: Option<String>,

        /// Read the key from an OpenSSH-style public key file
        #[arg(long, value_name = "PATH", conflicts_with = "key")]
        from_file: Option<String>,
    },

    /// Remove keys from a user
    Remove {
        /// Email of the user; prompted for when omitted
        email: Option<String>,

        /// 1-based key number; skips the interactive loop
        #[arg(long)]
        index: Option<usize>,

        /// Exact key material to remove; skips the interactive loop
        #[arg(long, conflicts_with = "index")]
        key: Option<String>,
    },
}
