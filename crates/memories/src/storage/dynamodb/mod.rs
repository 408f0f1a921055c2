//! DynamoDB storage backend implementation.
//!
//! Two tables back the gateways:
//!
//! - items: `userId` hash key, `itemId` range key
//! - attachments: `itemId` hash key, `attachmentId` range key
//!
//! Request shaping (keys, update expressions, attribute conversions) is kept
//! in pure functions so it can be tested without DynamoDB access.

mod conversions;
mod error;
mod expressions;
mod repository;

pub use repository::{DynamoDbAttachmentRepository, DynamoDbRepository};
