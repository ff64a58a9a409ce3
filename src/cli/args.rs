//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use clap_complete::Shell;

/// Order-preserving hierarchical note keys: generate keys that sort
/// between their neighbors and rebuild trees from flat key indexes
#[derive(Parser, Debug)]
#[command(name = "zkseq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Show author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a key segment between two neighbors
    Gen {
        /// Segment the new key must sort after
        #[arg(short, long)]
        prev: Option<String>,
        /// Segment the new key must sort before
        #[arg(short, long)]
        next: Option<String>,
    },

    /// Show the reconstructed tree(s) of an index file
    Tree {
        /// Index file (default: index_file from config)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Only show the subtree rooted at this key
        #[arg(short, long)]
        root: Option<String>,
    },

    /// List root keys of an index file
    Roots {
        /// Index file (default: index_file from config)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// New key sorting directly before an existing item
    Before {
        /// Key of the existing item
        key: String,
        /// Index file (default: index_file from config)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// New key sorting directly after an existing item
    After {
        /// Key of the existing item
        key: String,
        /// Index file (default: index_file from config)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// New key for a child of an existing item
    Child {
        /// Key of the existing item
        key: String,
        /// Index file (default: index_file from config)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,

    /// Create config template
    Init,
}
