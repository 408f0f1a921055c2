//! Item service.
//!
//! Every operation takes the raw bearer token, resolves the caller's user id
//! from it, and then talks to the injected gateways. Nothing here knows which
//! storage backend is active.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use memories_core::auth::{parse_user_id, AuthError, UserId};
use memories_core::items::{
    created_at_millis, validate_create, validate_update, AttachmentRecord, AttachmentUpload,
    CreateItemRequest, Item, ItemError, UpdateItemRequest,
};
use memories_core::storage::{
    AttachmentRepository, ItemRepository, RepositoryError, UploadUrlSigner,
};

/// Errors surfaced by [`ItemService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Validation(#[from] ItemError),
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id, .. } => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Item operations scoped to the user identified by a bearer token.
pub struct ItemService {
    items: Arc<dyn ItemRepository>,
    attachments: Arc<dyn AttachmentRepository>,
    signer: Arc<dyn UploadUrlSigner>,
}

impl ItemService {
    pub fn new(
        items: Arc<dyn ItemRepository>,
        attachments: Arc<dyn AttachmentRepository>,
        signer: Arc<dyn UploadUrlSigner>,
    ) -> Self {
        Self {
            items,
            attachments,
            signer,
        }
    }

    pub async fn list_items(&self, token: &str) -> Result<Vec<Item>> {
        let user_id = parse_user_id(token)?;
        let items = self.items.list_items(&user_id).await?;

        tracing::debug!(%user_id, count = items.len(), "Listed items");
        Ok(items)
    }

    pub async fn create_item(&self, token: &str, request: CreateItemRequest) -> Result<Item> {
        let user_id = parse_user_id(token)?;
        validate_create(&request)?;

        let item = Item::from_request(
            user_id,
            Uuid::new_v4().to_string(),
            created_at_millis(Utc::now()),
            request,
        );
        self.items.create_item(&item).await?;

        tracing::info!(user_id = %item.user_id, item_id = %item.item_id, "Created item");
        Ok(item)
    }

    pub async fn update_item(
        &self,
        token: &str,
        item_id: &str,
        request: UpdateItemRequest,
    ) -> Result<Item> {
        let user_id = parse_user_id(token)?;
        validate_update(&request)?;

        let item = self.items.update_item(&user_id, item_id, &request).await?;

        tracing::info!(%user_id, item_id, "Updated item");
        Ok(item)
    }

    pub async fn delete_item(&self, token: &str, item_id: &str) -> Result<()> {
        let user_id = parse_user_id(token)?;
        self.items.delete_item(&user_id, item_id).await?;

        tracing::info!(%user_id, item_id, "Deleted item");
        Ok(())
    }

    /// Issues an upload URL for a new attachment of `item_id` and records it.
    ///
    /// `fields` are caller-supplied attributes stored with the attachment
    /// record; they never override the server-owned attributes.
    ///
    /// The record is written before the item is pointed at it, and the two
    /// writes are not transactional. If the item is deleted in between, the
    /// call fails with `NotFound` and the record stays behind without an item.
    pub async fn attach(
        &self,
        token: &str,
        item_id: &str,
        fields: Map<String, Value>,
    ) -> Result<AttachmentUpload> {
        let user_id = parse_user_id(token)?;
        let attachment_id = Uuid::new_v4().to_string();

        let upload_url = self.signer.generate_upload_url(&attachment_id).await?;
        let attachment_url = self.signer.attachment_url(&attachment_id);

        self.require_item(&user_id, item_id).await?;

        let record = AttachmentRecord::new(
            item_id,
            &attachment_id,
            user_id.clone(),
            &attachment_url,
            Utc::now(),
            fields,
        );
        self.attachments.create_attachment(&record).await?;

        let item = self
            .items
            .update_item_attachment(&user_id, item_id, &attachment_id, &attachment_url)
            .await?;
        let attachments = self.attachments.get_attachments(item_id).await?;

        tracing::info!(%user_id, item_id, %attachment_id, "Issued attachment upload URL");

        Ok(AttachmentUpload {
            upload_url,
            attachment_url,
            new_item: record,
            item,
            attachments,
        })
    }

    pub async fn get_attachments(
        &self,
        token: &str,
        item_id: &str,
    ) -> Result<Vec<AttachmentRecord>> {
        let user_id = parse_user_id(token)?;
        self.require_item(&user_id, item_id).await?;

        Ok(self.attachments.get_attachments(item_id).await?)
    }

    async fn require_item(&self, user_id: &UserId, item_id: &str) -> Result<Item> {
        self.items
            .get_item(user_id, item_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(item_id.to_string()))
    }
}
