//! API response envelopes for item operations.

use serde::{Deserialize, Serialize};

use super::types::{AttachmentRecord, Item};

/// `{ "item": Item }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub item: Item,
}

/// `{ "items": [Item] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

/// `{ "attachments": [AttachmentRecord] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentsResponse {
    pub attachments: Vec<AttachmentRecord>,
}

/// Everything a caller needs to upload an attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentUpload {
    /// Time-limited URL accepting a `PUT` of the file.
    pub upload_url: String,
    /// Where the file is reachable once uploaded.
    pub attachment_url: String,
    /// The attachment record written for this upload.
    pub new_item: AttachmentRecord,
    /// The item after its attachment URL was set.
    pub item: Item,
    /// All attachment records of the item, newest first.
    pub attachments: Vec<AttachmentRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attachment_upload_wire_shape() {
        let body = json!({
            "uploadUrl": "https://bucket.s3.amazonaws.com/att-1?X-Amz-Signature=abc",
            "attachmentUrl": "https://bucket.s3.amazonaws.com/att-1",
            "newItem": {
                "itemId": "item-1",
                "attachmentId": "att-1",
                "timestamp": "2024-06-01T12:00:00.000Z",
                "userId": "u1",
                "attachmentUrl": "https://bucket.s3.amazonaws.com/att-1",
                "contentType": "image/png"
            },
            "item": {
                "userId": "u1",
                "itemId": "item-1",
                "createdAt": "1717200000000",
                "name": "Birth",
                "date": "2024-06-01",
                "attachmentId": "att-1",
                "attachmentUrl": "https://bucket.s3.amazonaws.com/att-1"
            },
            "attachments": []
        });

        let upload: AttachmentUpload = serde_json::from_value(body).unwrap();

        assert_eq!(upload.new_item.fields.get("contentType"), Some(&json!("image/png")));
        assert_eq!(upload.item.attachment_id.as_deref(), Some("att-1"));
        assert!(upload.attachments.is_empty());
    }

    #[test]
    fn test_items_response_envelope() {
        let response: ItemsResponse = serde_json::from_value(json!({ "items": [] })).unwrap();
        assert!(response.items.is_empty());
    }
}
