mod error;
mod operations;
mod requests;
mod responses;
mod types;

pub use error::ItemError;
pub use operations::{
    attachment_url, created_at_millis, sort_newest_first, validate_create, validate_update,
    DATE_FORMAT, MAX_DESCRIPTION_LEN, MAX_NAME_LEN,
};
pub use requests::{CreateItemRequest, UpdateItemRequest};
pub use responses::{AttachmentUpload, AttachmentsResponse, ItemResponse, ItemsResponse};
pub use types::{AttachmentRecord, Item};
