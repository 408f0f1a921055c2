use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::requests::{CreateItemRequest, UpdateItemRequest};
use crate::auth::UserId;

/// A user-owned memory entry.
///
/// `(user_id, item_id)` is the primary key. The JSON shape is camelCase and
/// leaves out optional fields that are not set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub user_id: UserId,
    pub item_id: String,
    /// Creation instant in epoch milliseconds, as a decimal string.
    pub created_at: String,
    pub name: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

impl Item {
    /// Builds a new item from a create request.
    ///
    /// Field precedence is explicit: ownership and bookkeeping fields
    /// (`user_id`, `item_id`, `created_at`) always come from the server, the
    /// content fields come from the request verbatim, and an omitted
    /// description stays `None`. Attachment fields start empty.
    pub fn from_request(
        user_id: UserId,
        item_id: impl Into<String>,
        created_at: impl Into<String>,
        request: CreateItemRequest,
    ) -> Self {
        Self {
            user_id,
            item_id: item_id.into(),
            created_at: created_at.into(),
            name: request.name,
            date: request.date,
            description: request.description,
            attachment_id: None,
            attachment_url: None,
        }
    }

    /// Overwrites exactly `name`, `date` and `description`.
    pub fn apply_update(&mut self, update: &UpdateItemRequest) {
        self.name = update.name.clone();
        self.date = update.date.clone();
        self.description = update.description.clone();
    }

    /// Points the item at an uploaded attachment.
    pub fn set_attachment(&mut self, attachment_id: impl Into<String>, url: impl Into<String>) {
        self.attachment_id = Some(attachment_id.into());
        self.attachment_url = Some(url.into());
    }
}

/// Metadata written every time an upload URL is issued for an item.
///
/// Any extra fields supplied by the caller are kept in `fields`. The
/// server-owned fields are never taken from `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRecord {
    pub item_id: String,
    pub attachment_id: String,
    /// RFC 3339 timestamp of when the upload URL was issued.
    pub timestamp: String,
    pub user_id: UserId,
    pub attachment_url: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl AttachmentRecord {
    /// Attribute names owned by the server.
    pub const RESERVED_FIELDS: [&'static str; 5] = [
        "itemId",
        "attachmentId",
        "timestamp",
        "userId",
        "attachmentUrl",
    ];

    pub fn new(
        item_id: impl Into<String>,
        attachment_id: impl Into<String>,
        user_id: UserId,
        attachment_url: impl Into<String>,
        issued_at: DateTime<Utc>,
        mut fields: Map<String, Value>,
    ) -> Self {
        fields.retain(|key, _| !Self::RESERVED_FIELDS.contains(&key.as_str()));

        Self {
            item_id: item_id.into(),
            attachment_id: attachment_id.into(),
            timestamp: issued_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            user_id,
            attachment_url: attachment_url.into(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample_item() -> Item {
        Item::from_request(
            UserId::new("u1"),
            "item-1",
            "1717200000000",
            CreateItemRequest::new("Birth", "2024-06-01").with_description("Hamza"),
        )
    }

    #[test]
    fn from_request_keeps_caller_fields_verbatim() {
        let item = sample_item();

        assert_eq!(item.user_id.as_str(), "u1");
        assert_eq!(item.item_id, "item-1");
        assert_eq!(item.created_at, "1717200000000");
        assert_eq!(item.name, "Birth");
        assert_eq!(item.description.as_deref(), Some("Hamza"));
        assert_eq!(item.date, "2024-06-01");
        assert!(item.attachment_url.is_none());
    }

    #[test]
    fn from_request_leaves_missing_description_empty() {
        let item = Item::from_request(
            UserId::new("u1"),
            "item-1",
            "0",
            CreateItemRequest::new("Birth", "2024-06-01"),
        );
        assert_eq!(item.description, None);
    }

    #[test]
    fn apply_update_touches_only_content_fields() {
        let mut item = sample_item();
        item.set_attachment("att-1", "https://bucket.s3.amazonaws.com/att-1");

        item.apply_update(&UpdateItemRequest::new("Birthday", "2024-06-02"));

        assert_eq!(item.name, "Birthday");
        assert_eq!(item.date, "2024-06-02");
        assert_eq!(item.description, None);
        assert_eq!(item.created_at, "1717200000000");
        assert_eq!(
            item.attachment_url.as_deref(),
            Some("https://bucket.s3.amazonaws.com/att-1")
        );
    }

    #[test]
    fn item_serializes_camel_case_without_empty_optionals() {
        let value = serde_json::to_value(sample_item()).unwrap();

        assert_eq!(
            value,
            json!({
                "userId": "u1",
                "itemId": "item-1",
                "createdAt": "1717200000000",
                "name": "Birth",
                "date": "2024-06-01",
                "description": "Hamza"
            })
        );
    }

    #[test]
    fn attachment_record_server_fields_win() {
        let issued_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let fields = json!({
            "userId": "someone-else",
            "attachmentUrl": "https://evil.example",
            "caption": "first photo"
        });
        let fields = fields.as_object().cloned().unwrap();

        let record = AttachmentRecord::new(
            "item-1",
            "att-1",
            UserId::new("u1"),
            "https://bucket.s3.amazonaws.com/att-1",
            issued_at,
            fields,
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["userId"], "u1");
        assert_eq!(value["attachmentUrl"], "https://bucket.s3.amazonaws.com/att-1");
        assert_eq!(value["caption"], "first photo");
        assert_eq!(value["timestamp"], "2024-06-01T12:00:00.000Z");
        assert_eq!(record.fields.len(), 1);
    }

    #[test]
    fn attachment_record_collects_unknown_fields_on_read() {
        let record: AttachmentRecord = serde_json::from_value(json!({
            "itemId": "item-1",
            "attachmentId": "att-1",
            "timestamp": "2024-06-01T12:00:00.000Z",
            "userId": "u1",
            "attachmentUrl": "https://bucket.s3.amazonaws.com/att-1",
            "contentType": "image/png"
        }))
        .unwrap();

        assert_eq!(record.fields.get("contentType"), Some(&json!("image/png")));
    }
}
