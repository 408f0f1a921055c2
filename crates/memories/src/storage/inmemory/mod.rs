//! In-memory storage backend.
//!
//! Stores items and attachment records in HashMaps wrapped in
//! `Arc<RwLock<_>>` and signs upload URLs locally. Nothing is persisted,
//! which makes it the backend for tests and local development.
//!
//! # Example
//!
//! ```rust,ignore
//! use memories::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;
mod signer;

pub use repository::{InMemoryAttachmentRepository, InMemoryRepository};
pub use signer::LocalUploadSigner;
