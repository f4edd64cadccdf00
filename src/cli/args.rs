//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Documentation navigation engine: section trees, breadcrumbs, and linear page traversal
#[derive(Parser, Debug)]
#[command(name = "docnav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Navigation manifest (overrides config; default: compiled-in tree)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub manifest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the full table of contents
    Tree {
        /// Mark this path as active
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Resolve the section containing a page
    Resolve {
        /// Page path, e.g. /docs/quickstart
        path: String,
    },

    /// Look up the breadcrumb title of a page
    Title {
        /// Page path
        path: String,
    },

    /// Show the previous page in reading order
    Prev {
        /// Page path
        path: String,
    },

    /// Show the next page in reading order
    Next {
        /// Page path
        path: String,
    },

    /// Validate a navigation manifest
    Check {
        /// Manifest file (default: configured manifest)
        #[arg(value_hint = ValueHint::FilePath)]
        manifest: Option<PathBuf>,
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

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a config file template
    Template,
}
