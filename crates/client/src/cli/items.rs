//! Item CLI commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Item management commands.
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub action: ItemsAction,
}

/// Available item actions.
#[derive(Debug, Subcommand)]
pub enum ItemsAction {
    /// List your items.
    List,
    /// Create a new item.
    Create {
        /// Item name.
        #[arg(long)]
        name: String,
        /// Item description.
        #[arg(long)]
        description: String,
        /// Date (YYYY-MM-DD). Defaults to one week from today.
        #[arg(long)]
        date: Option<String>,
    },
    /// Overwrite an item's name, date and description.
    Update {
        /// Item ID.
        id: String,
        /// New name.
        #[arg(long)]
        name: String,
        /// New date (YYYY-MM-DD).
        #[arg(long)]
        date: String,
        /// New description. Omit to clear it.
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an item by ID.
    Delete {
        /// Item ID.
        id: String,
    },
    /// Request an upload URL for an item, optionally uploading a file to it.
    Attach {
        /// Item ID.
        id: String,
        /// File to upload to the issued URL.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List an item's attachments.
    Attachments {
        /// Item ID.
        id: String,
    },
}
