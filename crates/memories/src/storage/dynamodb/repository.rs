//! DynamoDB repository implementation.
//!
//! Implements the gateway traits from `memories_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;

use memories_core::auth::UserId;
use memories_core::items::{sort_newest_first, AttachmentRecord, Item, UpdateItemRequest};
use memories_core::storage::{AttachmentRepository, ItemRepository, RepositoryError, Result};

use super::conversions::{
    attachment_to_attrs, attrs_to_attachment, attrs_to_item, item_key, item_to_attrs, Attributes,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
    map_update_item_error,
};
use super::expressions::{
    attachment_not_exists_names, attachments_by_item, item_attachment_update,
    item_content_update, item_exists_names, items_by_user, Expression, ATTACHMENT_NOT_EXISTS,
    ITEM_EXISTS,
};

/// DynamoDB item store keyed by `(userId, itemId)`.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Runs a conditional update and returns the whole item afterwards.
    async fn update(&self, user_id: &UserId, item_id: &str, update: Expression) -> Result<Item> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(item_key(user_id, item_id)))
            .update_expression(update.expression)
            .condition_expression(ITEM_EXISTS)
            .set_expression_attribute_names(Some(update.names))
            .set_expression_attribute_values(Some(update.values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, "Item", item_id))?;

        let attrs = result.attributes.ok_or_else(|| {
            RepositoryError::QueryFailed("UpdateItem returned no attributes".to_string())
        })?;
        attrs_to_item(&attrs)
    }
}

/// Runs a query to exhaustion, following `LastEvaluatedKey`.
async fn query_all(
    client: &Client,
    table_name: &str,
    key_condition: Expression,
    newest_first: bool,
) -> Result<Vec<Attributes>> {
    let mut rows = Vec::new();
    let mut start_key = None;

    loop {
        let result = client
            .query()
            .table_name(table_name)
            .key_condition_expression(&key_condition.expression)
            .set_expression_attribute_names(Some(key_condition.names.clone()))
            .set_expression_attribute_values(Some(key_condition.values.clone()))
            .scan_index_forward(!newest_first)
            .set_exclusive_start_key(start_key)
            .send()
            .await
            .map_err(map_query_error)?;

        rows.extend(result.items.unwrap_or_default());

        match result.last_evaluated_key {
            Some(key) if !key.is_empty() => start_key = Some(key),
            _ => break,
        }
    }

    Ok(rows)
}

#[async_trait]
impl ItemRepository for DynamoDbRepository {
    async fn list_items(&self, user_id: &UserId) -> Result<Vec<Item>> {
        let rows = query_all(
            &self.client,
            &self.table_name,
            items_by_user(user_id.as_str()),
            false,
        )
        .await?;

        rows.iter().map(attrs_to_item).collect()
    }

    async fn get_item(&self, user_id: &UserId, item_id: &str) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(item_key(user_id, item_id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(attrs) => Ok(Some(attrs_to_item(&attrs)?)),
            None => Ok(None),
        }
    }

    async fn create_item(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attrs(item)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Item", &item.item_id))?;

        Ok(())
    }

    async fn update_item(
        &self,
        user_id: &UserId,
        item_id: &str,
        update: &UpdateItemRequest,
    ) -> Result<Item> {
        self.update(user_id, item_id, item_content_update(update)).await
    }

    async fn update_item_attachment(
        &self,
        user_id: &UserId,
        item_id: &str,
        attachment_id: &str,
        attachment_url: &str,
    ) -> Result<Item> {
        self.update(
            user_id,
            item_id,
            item_attachment_update(attachment_id, attachment_url),
        )
        .await
    }

    async fn delete_item(&self, user_id: &UserId, item_id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(item_key(user_id, item_id)))
            .condition_expression(ITEM_EXISTS)
            .set_expression_attribute_names(Some(item_exists_names()))
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, "Item", item_id))?;

        Ok(())
    }
}

/// DynamoDB attachment record store keyed by `(itemId, attachmentId)`.
pub struct DynamoDbAttachmentRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbAttachmentRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl AttachmentRepository for DynamoDbAttachmentRepository {
    async fn create_attachment(&self, record: &AttachmentRecord) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(attachment_to_attrs(record)))
            .condition_expression(ATTACHMENT_NOT_EXISTS)
            .set_expression_attribute_names(Some(attachment_not_exists_names()))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Attachment", &record.attachment_id))?;

        Ok(())
    }

    async fn get_attachments(&self, item_id: &str) -> Result<Vec<AttachmentRecord>> {
        let rows = query_all(
            &self.client,
            &self.table_name,
            attachments_by_item(item_id),
            true,
        )
        .await?;

        let mut records = rows
            .iter()
            .map(attrs_to_attachment)
            .collect::<Result<Vec<_>>>()?;
        // The range key is a random id, so order by issue time as well.
        sort_newest_first(&mut records);
        Ok(records)
    }
}
