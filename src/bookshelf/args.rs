use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", version)]
#[command(about = "A small personal book catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the catalog (default: $BOOKSHELF_HOME, then the user data dir)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book
    #[command(alias = "a")]
    Add {
        title: String,

        author: String,

        /// Publication year (negative for BCE)
        #[arg(allow_hyphen_values = true)]
        year: i32,
    },

    /// Delete one or more books by id
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Search by title, author and/or year (all given filters must match)
    #[command(alias = "s")]
    Search {
        /// Case-insensitive substring of the title
        #[arg(short, long)]
        title: Option<String>,

        /// Case-insensitive substring of the author
        #[arg(short, long)]
        author: Option<String>,

        /// Exact publication year
        #[arg(short, long, allow_hyphen_values = true)]
        year: Option<i32>,
    },

    /// List all books
    #[command(alias = "ls")]
    List,

    /// Set the status of a book to any text
    Status { id: u64, status: String },

    /// Mark a book as checked out
    Checkout { id: u64 },

    /// Mark a book as available again
    Return { id: u64 },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, strict-load)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive menu
    Shell,
}
