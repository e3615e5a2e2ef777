//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Minimal note taking: add, list and delete timestamped notes
#[derive(Parser, Debug)]
#[command(name = "memo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new memo item
    #[command(visible_alias = "a")]
    Add {
        /// Note text; unquoted words are joined with single spaces
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// List all memo items
    #[command(visible_alias = "l")]
    List,

    /// Delete a memo item
    #[command(visible_alias = "d")]
    Delete {
        /// Note id as shown by `list`
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,
}
