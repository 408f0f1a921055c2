//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use memories_core::auth::UserId;
use memories_core::items::{AttachmentRecord, Item};
use memories_core::storage::RepositoryError;
use serde_json::{Map, Number, Value};

pub type Attributes = HashMap<String, AttributeValue>;

// ============================================================================
// Attribute names
// ============================================================================

pub const USER_ID: &str = "userId";
pub const ITEM_ID: &str = "itemId";
pub const CREATED_AT: &str = "createdAt";
pub const NAME: &str = "name";
pub const DATE: &str = "date";
pub const DESCRIPTION: &str = "description";
pub const ATTACHMENT_ID: &str = "attachmentId";
pub const ATTACHMENT_URL: &str = "attachmentUrl";
pub const TIMESTAMP: &str = "timestamp";

// ============================================================================
// Keys
// ============================================================================

/// Primary key of an item: `userId` hash, `itemId` range.
pub fn item_key(user_id: &UserId, item_id: &str) -> Attributes {
    HashMap::from([
        (USER_ID.to_string(), AttributeValue::S(user_id.to_string())),
        (ITEM_ID.to_string(), AttributeValue::S(item_id.to_string())),
    ])
}

// ============================================================================
// Item conversions
// ============================================================================

/// Convert an Item to DynamoDB attributes. Unset optional fields are omitted.
pub fn item_to_attrs(item: &Item) -> Attributes {
    let mut attrs = item_key(&item.user_id, &item.item_id);

    attrs.insert(
        CREATED_AT.to_string(),
        AttributeValue::S(item.created_at.clone()),
    );
    attrs.insert(NAME.to_string(), AttributeValue::S(item.name.clone()));
    attrs.insert(DATE.to_string(), AttributeValue::S(item.date.clone()));
    if let Some(description) = &item.description {
        attrs.insert(
            DESCRIPTION.to_string(),
            AttributeValue::S(description.clone()),
        );
    }
    if let Some(attachment_id) = &item.attachment_id {
        attrs.insert(
            ATTACHMENT_ID.to_string(),
            AttributeValue::S(attachment_id.clone()),
        );
    }
    if let Some(attachment_url) = &item.attachment_url {
        attrs.insert(
            ATTACHMENT_URL.to_string(),
            AttributeValue::S(attachment_url.clone()),
        );
    }

    attrs
}

/// Convert DynamoDB attributes to an Item.
pub fn attrs_to_item(attrs: &Attributes) -> Result<Item, RepositoryError> {
    Ok(Item {
        user_id: UserId::new(get_string(attrs, USER_ID)?),
        item_id: get_string(attrs, ITEM_ID)?,
        created_at: get_string(attrs, CREATED_AT)?,
        name: get_string(attrs, NAME)?,
        date: get_string(attrs, DATE)?,
        description: get_optional_string(attrs, DESCRIPTION),
        attachment_id: get_optional_string(attrs, ATTACHMENT_ID),
        attachment_url: get_optional_string(attrs, ATTACHMENT_URL),
    })
}

// ============================================================================
// Attachment conversions
// ============================================================================

/// Convert an AttachmentRecord to DynamoDB attributes.
///
/// Caller fields are written first so the server-owned attributes always
/// win on a name clash.
pub fn attachment_to_attrs(record: &AttachmentRecord) -> Attributes {
    let mut attrs: Attributes = record
        .fields
        .iter()
        .map(|(key, value)| (key.clone(), json_to_attr(value)))
        .collect();

    attrs.insert(
        ITEM_ID.to_string(),
        AttributeValue::S(record.item_id.clone()),
    );
    attrs.insert(
        ATTACHMENT_ID.to_string(),
        AttributeValue::S(record.attachment_id.clone()),
    );
    attrs.insert(
        TIMESTAMP.to_string(),
        AttributeValue::S(record.timestamp.clone()),
    );
    attrs.insert(
        USER_ID.to_string(),
        AttributeValue::S(record.user_id.to_string()),
    );
    attrs.insert(
        ATTACHMENT_URL.to_string(),
        AttributeValue::S(record.attachment_url.clone()),
    );

    attrs
}

/// Convert DynamoDB attributes to an AttachmentRecord.
pub fn attrs_to_attachment(attrs: &Attributes) -> Result<AttachmentRecord, RepositoryError> {
    let mut fields = Map::new();
    for (key, value) in attrs {
        if AttachmentRecord::RESERVED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        fields.insert(key.clone(), attr_to_json(key, value)?);
    }

    Ok(AttachmentRecord {
        item_id: get_string(attrs, ITEM_ID)?,
        attachment_id: get_string(attrs, ATTACHMENT_ID)?,
        timestamp: get_string(attrs, TIMESTAMP)?,
        user_id: UserId::new(get_string(attrs, USER_ID)?),
        attachment_url: get_string(attrs, ATTACHMENT_URL)?,
        fields,
    })
}

// ============================================================================
// JSON <-> AttributeValue
// ============================================================================

/// Convert a caller-supplied JSON value to an AttributeValue.
pub fn json_to_attr(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(json_to_attr).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_attr(v)))
                .collect(),
        ),
    }
}

/// Convert a stored AttributeValue back to JSON.
///
/// Binary attributes are never written by this service and are rejected.
pub fn attr_to_json(key: &str, value: &AttributeValue) -> Result<Value, RepositoryError> {
    let number = |n: &str| {
        n.parse::<Number>()
            .map(Value::Number)
            .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
    };

    match value {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => number(n),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| number(n))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::L(values) => values
            .iter()
            .map(|v| attr_to_json(key, v))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| attr_to_json(k, v).map(|json| (k.clone(), json)))
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object),
        _ => Err(RepositoryError::InvalidData(format!(
            "Unsupported attribute type: {}",
            key
        ))),
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(attrs: &Attributes, key: &str) -> Result<String, RepositoryError> {
    attrs
        .get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(attrs: &Attributes, key: &str) -> Option<String> {
    attrs
        .get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use memories_core::items::CreateItemRequest;
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
    fn test_item_key() {
        let key = item_key(&UserId::new("u1"), "item-1");

        assert_eq!(key.len(), 2);
        assert_eq!(key[USER_ID], AttributeValue::S("u1".to_string()));
        assert_eq!(key[ITEM_ID], AttributeValue::S("item-1".to_string()));
    }

    #[test]
    fn test_item_conversion_preserves_fields() {
        let mut item = sample_item();
        item.set_attachment("att-1", "https://bucket.s3.amazonaws.com/att-1");

        let attrs = item_to_attrs(&item);

        assert_eq!(attrs[NAME], AttributeValue::S("Birth".to_string()));
        assert_eq!(attrs_to_item(&attrs).unwrap(), item);
    }

    #[test]
    fn test_item_without_optionals_omits_attributes() {
        let mut item = sample_item();
        item.description = None;

        let attrs = item_to_attrs(&item);

        assert!(!attrs.contains_key(DESCRIPTION));
        assert!(!attrs.contains_key(ATTACHMENT_ID));
        assert!(!attrs.contains_key(ATTACHMENT_URL));
        assert_eq!(attrs_to_item(&attrs).unwrap().description, None);
    }

    #[test]
    fn test_attrs_to_item_missing_name() {
        let mut attrs = item_to_attrs(&sample_item());
        attrs.remove(NAME);

        let result = attrs_to_item(&attrs);

        assert!(matches!(result, Err(RepositoryError::InvalidData(msg)) if msg.contains("name")));
    }

    #[test]
    fn test_attachment_server_fields_win() {
        let mut record = AttachmentRecord::new(
            "item-1",
            "att-1",
            UserId::new("u1"),
            "https://bucket.s3.amazonaws.com/att-1",
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            Map::new(),
        );
        // Bypass the constructor's filtering to make sure the conversion
        // itself also protects the reserved names.
        record
            .fields
            .insert("userId".to_string(), json!("someone-else"));
        record
            .fields
            .insert("contentType".to_string(), json!("image/png"));

        let attrs = attachment_to_attrs(&record);

        assert_eq!(attrs[USER_ID], AttributeValue::S("u1".to_string()));
        assert_eq!(
            attrs["contentType"],
            AttributeValue::S("image/png".to_string())
        );
        assert_eq!(
            attrs[TIMESTAMP],
            AttributeValue::S("2024-06-01T12:00:00.000Z".to_string())
        );
    }

    #[test]
    fn test_attachment_extra_fields_survive() {
        let fields = json!({
            "contentType": "image/png",
            "size": 2048,
            "tags": ["family", "2024"],
            "meta": { "width": 640, "height": 480, "exif": null, "edited": false }
        });
        let Value::Object(fields) = fields else {
            unreachable!()
        };
        let record = AttachmentRecord::new(
            "item-1",
            "att-1",
            UserId::new("u1"),
            "https://bucket.s3.amazonaws.com/att-1",
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            fields,
        );

        let restored = attrs_to_attachment(&attachment_to_attrs(&record)).unwrap();

        assert_eq!(restored, record);
    }

    #[test]
    fn test_attr_to_json_number_sets() {
        let value = AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()]);

        assert_eq!(attr_to_json("ns", &value).unwrap(), json!([1, 2.5]));
    }

    #[test]
    fn test_attr_to_json_rejects_binary() {
        let value = AttributeValue::B(aws_sdk_dynamodb::primitives::Blob::new(vec![1, 2, 3]));

        assert!(matches!(
            attr_to_json("blob", &value),
            Err(RepositoryError::InvalidData(_))
        ));
    }
}
