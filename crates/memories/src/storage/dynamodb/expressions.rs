//! DynamoDB expression builders.
//!
//! `name` and `date` are DynamoDB reserved words, so every attribute is
//! referenced through a `#placeholder`.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use memories_core::items::UpdateItemRequest;

use super::conversions::{ATTACHMENT_ID, ATTACHMENT_URL, DATE, DESCRIPTION, ITEM_ID, NAME, USER_ID};

/// Condition that makes updates and deletes fail on unknown keys.
pub const ITEM_EXISTS: &str = "attribute_exists(#itemId)";

/// Condition that makes attachment inserts fail on a reused id.
pub const ATTACHMENT_NOT_EXISTS: &str = "attribute_not_exists(#attachmentId)";

/// An expression together with the placeholders it references.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

impl Expression {
    fn name(mut self, attribute: &str) -> Self {
        self.names
            .insert(format!("#{attribute}"), attribute.to_string());
        self
    }

    fn value(mut self, attribute: &str, value: impl Into<String>) -> Self {
        self.values
            .insert(format!(":{attribute}"), AttributeValue::S(value.into()));
        self
    }

    fn set(self, attribute: &str, value: impl Into<String>) -> Self {
        self.name(attribute).value(attribute, value)
    }
}

/// Key condition selecting every item of `user_id`.
pub fn items_by_user(user_id: &str) -> Expression {
    Expression {
        expression: format!("#{USER_ID} = :{USER_ID}"),
        ..Default::default()
    }
    .set(USER_ID, user_id)
}

/// Key condition selecting every attachment record of `item_id`.
pub fn attachments_by_item(item_id: &str) -> Expression {
    Expression {
        expression: format!("#{ITEM_ID} = :{ITEM_ID}"),
        ..Default::default()
    }
    .set(ITEM_ID, item_id)
}

/// Update overwriting exactly `name`, `date` and `description`.
///
/// An absent description removes the attribute. The expression also names
/// `#itemId` so it can be paired with [`ITEM_EXISTS`].
pub fn item_content_update(update: &UpdateItemRequest) -> Expression {
    let mut expression = format!("SET #{NAME} = :{NAME}, #{DATE} = :{DATE}");

    let base = Expression::default()
        .name(ITEM_ID)
        .set(NAME, &update.name)
        .set(DATE, &update.date);

    let base = match &update.description {
        Some(description) => {
            expression.push_str(&format!(", #{DESCRIPTION} = :{DESCRIPTION}"));
            base.set(DESCRIPTION, description)
        }
        None => {
            expression.push_str(&format!(" REMOVE #{DESCRIPTION}"));
            base.name(DESCRIPTION)
        }
    };

    Expression { expression, ..base }
}

/// Update pointing an item at its latest attachment.
pub fn item_attachment_update(attachment_id: &str, attachment_url: &str) -> Expression {
    Expression {
        expression: format!(
            "SET #{ATTACHMENT_ID} = :{ATTACHMENT_ID}, #{ATTACHMENT_URL} = :{ATTACHMENT_URL}"
        ),
        ..Default::default()
    }
    .name(ITEM_ID)
    .set(ATTACHMENT_ID, attachment_id)
    .set(ATTACHMENT_URL, attachment_url)
}

/// Placeholders used by [`ITEM_EXISTS`] on its own (deletes).
pub fn item_exists_names() -> HashMap<String, String> {
    Expression::default().name(ITEM_ID).names
}

/// Placeholders used by [`ATTACHMENT_NOT_EXISTS`].
pub fn attachment_not_exists_names() -> HashMap<String, String> {
    Expression::default().name(ATTACHMENT_ID).names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> AttributeValue {
        AttributeValue::S(value.to_string())
    }

    #[test]
    fn test_items_by_user() {
        let expr = items_by_user("u1");

        assert_eq!(expr.expression, "#userId = :userId");
        assert_eq!(expr.names["#userId"], "userId");
        assert_eq!(expr.values[":userId"], s("u1"));
    }

    #[test]
    fn test_attachments_by_item() {
        let expr = attachments_by_item("item-1");

        assert_eq!(expr.expression, "#itemId = :itemId");
        assert_eq!(expr.values[":itemId"], s("item-1"));
    }

    #[test]
    fn test_content_update_with_description() {
        let update = UpdateItemRequest::new("Birth", "2024-06-01").with_description("Hamza");

        let expr = item_content_update(&update);

        assert_eq!(
            expr.expression,
            "SET #name = :name, #date = :date, #description = :description"
        );
        assert_eq!(expr.values.len(), 3);
        assert_eq!(expr.values[":name"], s("Birth"));
        assert_eq!(expr.values[":date"], s("2024-06-01"));
        assert_eq!(expr.values[":description"], s("Hamza"));
        assert_eq!(expr.names["#itemId"], "itemId");
    }

    #[test]
    fn test_content_update_without_description_removes_it() {
        let update = UpdateItemRequest::new("Birth", "2024-06-01");

        let expr = item_content_update(&update);

        assert_eq!(
            expr.expression,
            "SET #name = :name, #date = :date REMOVE #description"
        );
        assert_eq!(expr.names["#description"], "description");
        assert!(!expr.values.contains_key(":description"));
    }

    #[test]
    fn test_content_update_never_touches_attachment_or_created_at() {
        let update = UpdateItemRequest::new("Birth", "2024-06-01").with_description("Hamza");

        let expr = item_content_update(&update);

        assert!(!expr.expression.contains("attachment"));
        assert!(!expr.expression.contains("createdAt"));
    }

    #[test]
    fn test_attachment_update() {
        let expr = item_attachment_update("att-1", "https://bucket.s3.amazonaws.com/att-1");

        assert_eq!(
            expr.expression,
            "SET #attachmentId = :attachmentId, #attachmentUrl = :attachmentUrl"
        );
        assert_eq!(expr.values[":attachmentId"], s("att-1"));
        assert_eq!(
            expr.values[":attachmentUrl"],
            s("https://bucket.s3.amazonaws.com/att-1")
        );
        assert!(expr.names.contains_key("#itemId"));
    }

    #[test]
    fn test_condition_names_match_conditions() {
        assert!(item_exists_names()
            .keys()
            .all(|placeholder| ITEM_EXISTS.contains(placeholder.as_str())));
        assert!(attachment_not_exists_names()
            .keys()
            .all(|placeholder| ATTACHMENT_NOT_EXISTS.contains(placeholder.as_str())));
    }
}
