//! Item API operations.

use reqwest::Method;
use serde_json::{Map, Value};

use memories_core::items::{
    AttachmentRecord, AttachmentUpload, AttachmentsResponse, CreateItemRequest, Item,
    ItemResponse, ItemsResponse, UpdateItemRequest,
};

use super::MemoriesClient;
use crate::error::{ClientError, Result};

impl MemoriesClient {
    /// List the caller's items.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let response = self.request(Method::GET, "/items").send().await?;
        let body: ItemsResponse = self.handle_response(response).await?;
        Ok(body.items)
    }

    /// Create a new item.
    pub async fn create_item(&self, req: &CreateItemRequest) -> Result<Item> {
        let response = self
            .request(Method::POST, "/items")
            .json(req)
            .send()
            .await?;
        let body: ItemResponse = self.handle_response(response).await?;
        Ok(body.item)
    }

    /// Overwrite an item's name, date and description.
    pub async fn update_item(&self, item_id: &str, req: &UpdateItemRequest) -> Result<Item> {
        let response = self
            .request(Method::PATCH, &format!("/items/{}", item_id))
            .json(req)
            .send()
            .await?;
        let body: ItemResponse = self.handle_response(response).await?;
        Ok(body.item)
    }

    /// Delete an item.
    pub async fn delete_item(&self, item_id: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("/items/{}", item_id))
            .send()
            .await?;
        let _: Value = self.handle_response(response).await?;
        Ok(())
    }

    /// Request an upload URL for an item, recording `fields` with it.
    pub async fn attach(
        &self,
        item_id: &str,
        fields: &Map<String, Value>,
    ) -> Result<AttachmentUpload> {
        let response = self
            .request(Method::POST, &format!("/items/{}/attachment", item_id))
            .json(fields)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List an item's attachment records, newest first.
    pub async fn list_attachments(&self, item_id: &str) -> Result<Vec<AttachmentRecord>> {
        let response = self
            .request(Method::GET, &format!("/items/{}/attachments", item_id))
            .send()
            .await?;
        let body: AttachmentsResponse = self.handle_response(response).await?;
        Ok(body.attachments)
    }

    /// Upload file contents to a pre-signed URL.
    ///
    /// The URL carries its own credentials, so no bearer token is sent.
    pub async fn upload_file(&self, upload_url: &str, contents: Vec<u8>) -> Result<()> {
        let response = self.client.put(upload_url).body(contents).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Upload(status.as_u16()))
        }
    }
}
