//! Local list state kept in step with the server.
//!
//! Every mutation goes to the server first. Local state only changes once the
//! server has confirmed the call, so a rejected call leaves the list untouched.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use serde_json::{Map, Value};

use memories_core::items::{
    AttachmentUpload, CreateItemRequest, Item, UpdateItemRequest, DATE_FORMAT,
};

use crate::client::MemoriesClient;
use crate::error::Result;

/// Days added to today for the date of a new item.
const DUE_DATE_OFFSET_DAYS: i64 = 7;

/// Date given to new items when none is supplied: today plus one week.
pub fn default_due_date(today: NaiveDate) -> String {
    (today + Duration::days(DUE_DATE_OFFSET_DAYS))
        .format(DATE_FORMAT)
        .to_string()
}

/// The server calls the list view depends on.
#[async_trait]
pub trait ItemsApi: Send + Sync {
    async fn list_items(&self) -> Result<Vec<Item>>;

    async fn create_item(&self, req: &CreateItemRequest) -> Result<Item>;

    async fn update_item(&self, item_id: &str, req: &UpdateItemRequest) -> Result<Item>;

    async fn delete_item(&self, item_id: &str) -> Result<()>;

    async fn attach(&self, item_id: &str, fields: &Map<String, Value>)
        -> Result<AttachmentUpload>;
}

#[async_trait]
impl ItemsApi for MemoriesClient {
    async fn list_items(&self) -> Result<Vec<Item>> {
        MemoriesClient::list_items(self).await
    }

    async fn create_item(&self, req: &CreateItemRequest) -> Result<Item> {
        MemoriesClient::create_item(self, req).await
    }

    async fn update_item(&self, item_id: &str, req: &UpdateItemRequest) -> Result<Item> {
        MemoriesClient::update_item(self, item_id, req).await
    }

    async fn delete_item(&self, item_id: &str) -> Result<()> {
        MemoriesClient::delete_item(self, item_id).await
    }

    async fn attach(
        &self,
        item_id: &str,
        fields: &Map<String, Value>,
    ) -> Result<AttachmentUpload> {
        MemoriesClient::attach(self, item_id, fields).await
    }
}

/// The caller's item list.
pub struct ItemsView<A> {
    api: A,
    items: Vec<Item>,
}

impl<A: ItemsApi> ItemsView<A> {
    /// Create an empty view. Call [`ItemsView::load`] to fill it.
    pub fn new(api: A) -> Self {
        Self {
            api,
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Replace the local list with the server's.
    pub async fn load(&mut self) -> Result<&[Item]> {
        self.items = self.api.list_items().await?;
        Ok(&self.items)
    }

    /// Create an item, using [`default_due_date`] when `date` is `None`.
    pub async fn create(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        date: Option<String>,
        today: NaiveDate,
    ) -> Result<&Item> {
        let date = date.unwrap_or_else(|| default_due_date(today));
        let req = CreateItemRequest::new(name, date).with_description(description);

        let item = self.api.create_item(&req).await?;
        self.items.push(item);
        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    /// Overwrite an item's content and replace the local copy.
    pub async fn update(&mut self, item_id: &str, req: &UpdateItemRequest) -> Result<Item> {
        let item = self.api.update_item(item_id, req).await?;
        match self.items.iter_mut().find(|i| i.item_id == item_id) {
            Some(existing) => *existing = item.clone(),
            None => self.items.push(item.clone()),
        }
        Ok(item)
    }

    /// Delete an item and drop it from the local list.
    pub async fn delete(&mut self, item_id: &str) -> Result<()> {
        self.api.delete_item(item_id).await?;
        self.items.retain(|item| item.item_id != item_id);
        Ok(())
    }

    /// Request an upload URL and point the local item at the new attachment.
    pub async fn attach(
        &mut self,
        item_id: &str,
        fields: &Map<String, Value>,
    ) -> Result<AttachmentUpload> {
        let upload = self.api.attach(item_id, fields).await?;
        if let Some(item) = self.items.iter_mut().find(|i| i.item_id == item_id) {
            item.set_attachment(
                upload.new_item.attachment_id.clone(),
                upload.attachment_url.clone(),
            );
        }
        Ok(upload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use chrono::Utc;
    use memories_core::auth::UserId;
    use memories_core::items::AttachmentRecord;
    use serde_json::json;
    use std::sync::Mutex;

    /// Fake server keeping items in a vector.
    #[derive(Default)]
    struct FakeApi {
        items: Mutex<Vec<Item>>,
        reject: bool,
    }

    impl FakeApi {
        fn with_items(items: Vec<Item>) -> Self {
            Self {
                items: Mutex::new(items),
                reject: false,
            }
        }

        fn rejecting() -> Self {
            Self {
                reject: true,
                ..Default::default()
            }
        }

        fn check(&self) -> Result<()> {
            if self.reject {
                return Err(ClientError::Api {
                    status: 500,
                    kind: "RepositoryError".to_string(),
                    message: "boom".to_string(),
                });
            }
            Ok(())
        }
    }

    fn item(id: &str) -> Item {
        Item::from_request(
            UserId::new("u1"),
            id,
            "1717243200000",
            CreateItemRequest::new("Birth", "2024-06-01"),
        )
    }

    #[async_trait]
    impl ItemsApi for FakeApi {
        async fn list_items(&self) -> Result<Vec<Item>> {
            self.check()?;
            Ok(self.items.lock().unwrap().clone())
        }

        async fn create_item(&self, req: &CreateItemRequest) -> Result<Item> {
            self.check()?;
            let mut items = self.items.lock().unwrap();
            let created = Item::from_request(
                UserId::new("u1"),
                format!("item-{}", items.len() + 1),
                "1717243200000",
                req.clone(),
            );
            items.push(created.clone());
            Ok(created)
        }

        async fn update_item(&self, item_id: &str, req: &UpdateItemRequest) -> Result<Item> {
            self.check()?;
            let mut items = self.items.lock().unwrap();
            let existing = items
                .iter_mut()
                .find(|i| i.item_id == item_id)
                .ok_or_else(|| ClientError::NotFound(item_id.to_string()))?;
            existing.apply_update(req);
            Ok(existing.clone())
        }

        async fn delete_item(&self, item_id: &str) -> Result<()> {
            self.check()?;
            let mut items = self.items.lock().unwrap();
            let before = items.len();
            items.retain(|i| i.item_id != item_id);
            if items.len() == before {
                return Err(ClientError::NotFound(item_id.to_string()));
            }
            Ok(())
        }

        async fn attach(
            &self,
            item_id: &str,
            fields: &Map<String, Value>,
        ) -> Result<AttachmentUpload> {
            self.check()?;
            let mut items = self.items.lock().unwrap();
            let existing = items
                .iter_mut()
                .find(|i| i.item_id == item_id)
                .ok_or_else(|| ClientError::NotFound(item_id.to_string()))?;
            let url = "https://bucket.s3.amazonaws.com/att-1".to_string();
            existing.set_attachment("att-1", url.clone());
            let record = AttachmentRecord::new(
                item_id,
                "att-1",
                UserId::new("u1"),
                url.clone(),
                Utc::now(),
                fields.clone(),
            );
            Ok(AttachmentUpload {
                upload_url: format!("{url}?X-Amz-Signature=abc"),
                attachment_url: url,
                new_item: record.clone(),
                item: existing.clone(),
                attachments: vec![record],
            })
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_default_due_date_is_one_week_out() {
        assert_eq!(default_due_date(today()), "2024-06-08");
    }

    #[test]
    fn test_default_due_date_crosses_month_and_year() {
        let new_years_eve = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
        assert_eq!(default_due_date(new_years_eve), "2025-01-04");
    }

    #[tokio::test]
    async fn test_load_replaces_local_state() {
        let mut view = ItemsView::new(FakeApi::with_items(vec![item("a"), item("b")]));

        let loaded = view.load().await.unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(view.items()[1].item_id, "b");
    }

    #[tokio::test]
    async fn test_create_appends_confirmed_item_with_default_date() {
        let mut view = ItemsView::new(FakeApi::default());

        let created = view
            .create("First steps", "In the garden", None, today())
            .await
            .unwrap()
            .clone();

        assert_eq!(created.date, "2024-06-08");
        assert_eq!(created.description.as_deref(), Some("In the garden"));
        assert_eq!(view.items(), &[created]);
    }

    #[tokio::test]
    async fn test_create_uses_given_date() {
        let mut view = ItemsView::new(FakeApi::default());

        let created = view
            .create("Birth", "Hamza", Some("2024-06-01".to_string()), today())
            .await
            .unwrap();

        assert_eq!(created.date, "2024-06-01");
    }

    #[tokio::test]
    async fn test_update_replaces_local_copy() {
        let mut view = ItemsView::new(FakeApi::with_items(vec![item("a")]));
        view.load().await.unwrap();

        let updated = view
            .update("a", &UpdateItemRequest::new("Birthday", "2024-06-02"))
            .await
            .unwrap();

        assert_eq!(updated.name, "Birthday");
        assert_eq!(view.items(), &[updated]);
    }

    #[tokio::test]
    async fn test_delete_removes_after_confirmation() {
        let mut view = ItemsView::new(FakeApi::with_items(vec![item("a"), item("b")]));
        view.load().await.unwrap();

        view.delete("a").await.unwrap();

        assert_eq!(view.items().len(), 1);
        assert_eq!(view.items()[0].item_id, "b");
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_local_state() {
        let mut view = ItemsView::new(FakeApi::with_items(vec![item("a")]));
        view.load().await.unwrap();

        let err = view.delete("missing").await.unwrap_err();

        assert!(matches!(err, ClientError::NotFound(_)));
        assert_eq!(view.items().len(), 1);
    }

    #[tokio::test]
    async fn test_rejected_create_leaves_list_untouched() {
        let mut view = ItemsView::new(FakeApi::rejecting());

        let result = view.create("Birth", "Hamza", None, today()).await;

        assert!(result.is_err());
        assert!(view.items().is_empty());
    }

    #[tokio::test]
    async fn test_attach_patches_local_item() {
        let mut view = ItemsView::new(FakeApi::with_items(vec![item("a")]));
        view.load().await.unwrap();

        let mut fields = Map::new();
        fields.insert("contentType".to_string(), json!("image/png"));
        let upload = view.attach("a", &fields).await.unwrap();

        assert_eq!(upload.new_item.fields["contentType"], "image/png");
        let local = &view.items()[0];
        assert_eq!(local.attachment_url.as_deref(), Some(upload.attachment_url.as_str()));
        assert_eq!(local.attachment_id.as_deref(), Some("att-1"));
    }
}
