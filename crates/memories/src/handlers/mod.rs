pub mod attachments;
pub mod error;
pub mod extractor;
pub mod health;
pub mod items;

pub use error::ApiError;
pub use extractor::BearerToken;
