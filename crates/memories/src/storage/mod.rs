//! Storage backend implementations.
//!
//! This module provides concrete implementations of the gateway traits
//! defined in `memories_core::storage`. The implementations are selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): HashMap-backed stores and a local URL signer
//! - `dynamodb`: AWS DynamoDB tables plus S3 pre-signed upload URLs
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with the in-memory backend (default):
//! ```bash
//! cargo build -p memories
//! ```
//!
//! Build with DynamoDB and S3:
//! ```bash
//! cargo build -p memories --no-default-features --features dynamodb
//! ```

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "dynamodb")]
pub mod s3;

#[cfg(feature = "inmemory")]
pub use inmemory::{InMemoryAttachmentRepository, InMemoryRepository, LocalUploadSigner};

#[cfg(feature = "dynamodb")]
pub use dynamodb::{DynamoDbAttachmentRepository, DynamoDbRepository};

#[cfg(feature = "dynamodb")]
pub use s3::S3UploadSigner;
