//! memories_client - CLI client for the memories API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;
pub mod view;

pub use client::MemoriesClient;
pub use error::{ClientError, Result};
pub use view::{default_due_date, ItemsApi, ItemsView};
