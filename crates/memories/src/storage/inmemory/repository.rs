//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use memories_core::auth::UserId;
use memories_core::items::{sort_newest_first, AttachmentRecord, Item, UpdateItemRequest};
use memories_core::storage::{AttachmentRepository, ItemRepository, RepositoryError, Result};

type ItemKey = (UserId, String);

/// In-memory item store.
///
/// Items are keyed by `(user_id, item_id)` like the DynamoDB table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<HashMap<ItemKey, Item>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn key(user_id: &UserId, item_id: &str) -> ItemKey {
    (user_id.clone(), item_id.to_string())
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn list_items(&self, user_id: &UserId) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        let mut owned: Vec<Item> = items
            .values()
            .filter(|item| &item.user_id == user_id)
            .cloned()
            .collect();
        // Range-key order, as a DynamoDB query would return them.
        owned.sort_by(|a, b| a.item_id.cmp(&b.item_id));
        Ok(owned)
    }

    async fn get_item(&self, user_id: &UserId, item_id: &str) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(&key(user_id, item_id)).cloned())
    }

    async fn create_item(&self, item: &Item) -> Result<()> {
        let mut items = self.items.write().await;
        items.insert(key(&item.user_id, &item.item_id), item.clone());
        Ok(())
    }

    async fn update_item(
        &self,
        user_id: &UserId,
        item_id: &str,
        update: &UpdateItemRequest,
    ) -> Result<Item> {
        let mut items = self.items.write().await;
        let item = items
            .get_mut(&key(user_id, item_id))
            .ok_or_else(|| RepositoryError::item_not_found(item_id))?;

        item.apply_update(update);
        Ok(item.clone())
    }

    async fn update_item_attachment(
        &self,
        user_id: &UserId,
        item_id: &str,
        attachment_id: &str,
        attachment_url: &str,
    ) -> Result<Item> {
        let mut items = self.items.write().await;
        let item = items
            .get_mut(&key(user_id, item_id))
            .ok_or_else(|| RepositoryError::item_not_found(item_id))?;

        item.set_attachment(attachment_id, attachment_url);
        Ok(item.clone())
    }

    async fn delete_item(&self, user_id: &UserId, item_id: &str) -> Result<()> {
        let mut items = self.items.write().await;
        if items.remove(&key(user_id, item_id)).is_none() {
            return Err(RepositoryError::item_not_found(item_id));
        }
        Ok(())
    }
}

/// In-memory attachment record store, partitioned by item id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttachmentRepository {
    attachments: Arc<RwLock<HashMap<String, Vec<AttachmentRecord>>>>,
}

impl InMemoryAttachmentRepository {
    /// Creates a new empty attachment store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AttachmentRepository for InMemoryAttachmentRepository {
    async fn create_attachment(&self, record: &AttachmentRecord) -> Result<()> {
        let mut attachments = self.attachments.write().await;
        let records = attachments.entry(record.item_id.clone()).or_default();

        if records
            .iter()
            .any(|r| r.attachment_id == record.attachment_id)
        {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Attachment",
                id: record.attachment_id.clone(),
            });
        }
        records.push(record.clone());
        Ok(())
    }

    async fn get_attachments(&self, item_id: &str) -> Result<Vec<AttachmentRecord>> {
        let attachments = self.attachments.read().await;
        let mut records: Vec<AttachmentRecord> = attachments
            .get(item_id)
            .map(|records| records.iter().rev().cloned().collect())
            .unwrap_or_default();
        sort_newest_first(&mut records);
        Ok(records)
    }
}
