use async_trait::async_trait;

use crate::auth::UserId;
use crate::items::{AttachmentRecord, Item, UpdateItemRequest};

use super::Result;

/// Item store gateway.
///
/// Every method that touches a single item is keyed by `(user_id, item_id)`,
/// so an item is never visible to a user that does not own it.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets all items owned by a user.
    async fn list_items(&self, user_id: &UserId) -> Result<Vec<Item>>;

    /// Gets a single item.
    async fn get_item(&self, user_id: &UserId, item_id: &str) -> Result<Option<Item>>;

    /// Stores an item, overwriting any item with the same key.
    async fn create_item(&self, item: &Item) -> Result<()>;

    /// Overwrites `name`, `date` and `description` of an existing item and
    /// returns the stored result.
    ///
    /// Returns `RepositoryError::NotFound` if the item does not exist.
    async fn update_item(
        &self,
        user_id: &UserId,
        item_id: &str,
        update: &UpdateItemRequest,
    ) -> Result<Item>;

    /// Sets the attachment id and URL of an existing item.
    ///
    /// Returns `RepositoryError::NotFound` if the item does not exist.
    async fn update_item_attachment(
        &self,
        user_id: &UserId,
        item_id: &str,
        attachment_id: &str,
        attachment_url: &str,
    ) -> Result<Item>;

    /// Deletes an item.
    ///
    /// Returns `RepositoryError::NotFound` if the item does not exist.
    async fn delete_item(&self, user_id: &UserId, item_id: &str) -> Result<()>;
}

/// Attachment metadata gateway. Records are append-only.
#[async_trait]
pub trait AttachmentRepository: Send + Sync {
    /// Stores an attachment record.
    async fn create_attachment(&self, record: &AttachmentRecord) -> Result<()>;

    /// Gets all attachment records of an item, newest first.
    async fn get_attachments(&self, item_id: &str) -> Result<Vec<AttachmentRecord>>;
}

/// Issues pre-signed upload URLs against the attachment bucket.
#[async_trait]
pub trait UploadUrlSigner: Send + Sync {
    /// Returns a time-limited URL that accepts a `PUT` of `object_key`.
    async fn generate_upload_url(&self, object_key: &str) -> Result<String>;

    /// Returns the public URL the object will be reachable at once uploaded.
    fn attachment_url(&self, object_key: &str) -> String;
}
