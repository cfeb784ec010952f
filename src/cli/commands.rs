//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Blog viewer CLI
#[derive(Parser, Debug)]
#[command(name = "postboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Content API base URL
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Posts per page
    #[arg(short, long, global = true)]
    pub page_size: Option<usize>,

    /// Directly visible page buttons in the control
    #[arg(short = 'w', long, global = true)]
    pub window: Option<usize>,

    /// File backing the session slot (in-memory when omitted)
    #[arg(short, long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Search input quiet window in milliseconds
    #[arg(long, global = true)]
    pub debounce_ms: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a page of posts
    List {
        /// Search term
        #[arg(short, long)]
        query: Option<String>,

        /// Page to show (defaults to a restored position, else 1)
        #[arg(long)]
        page: Option<usize>,

        /// Open this post's detail view after the list (saves the position)
        #[arg(long)]
        open: Option<u64>,
    },

    /// Render a post's detail view with its comments
    Show {
        /// Post id
        id: u64,
    },
}
