//! API request types for item operations.
//!
//! Shared between the server and the client so both sides agree on the wire
//! shape. Pure data, no I/O.

use serde::{Deserialize, Serialize};

/// Request payload for creating a new item (`POST /items`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: String,
}

impl CreateItemRequest {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            date: date.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for updating an item (`PATCH /items/{itemId}`).
///
/// Every update overwrites all three fields; a missing description clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    pub name: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateItemRequest {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_keeps_empty_description() {
        let request: CreateItemRequest = serde_json::from_value(json!({
            "name": "Birth",
            "description": "",
            "date": "2024-06-01"
        }))
        .unwrap();

        assert_eq!(request.description.as_deref(), Some(""));
    }

    #[test]
    fn update_request_null_description_is_missing() {
        let request: UpdateItemRequest = serde_json::from_value(json!({
            "name": "Birth",
            "date": "2024-06-01",
            "description": null
        }))
        .unwrap();

        assert_eq!(request.description, None);
    }

    #[test]
    fn create_request_description_is_optional() {
        let request: CreateItemRequest =
            serde_json::from_value(json!({ "name": "Birth", "date": "2024-06-01" })).unwrap();

        assert_eq!(request, CreateItemRequest::new("Birth", "2024-06-01"));
    }

    #[test]
    fn create_request_requires_name_and_date() {
        let result: Result<CreateItemRequest, _> =
            serde_json::from_value(json!({ "description": "Hamza" }));
        assert!(result.is_err());
    }

    #[test]
    fn update_request_omits_missing_description_on_the_wire() {
        let value = serde_json::to_value(UpdateItemRequest::new("Birth", "2024-06-02")).unwrap();
        assert_eq!(value, json!({ "name": "Birth", "date": "2024-06-02" }));
    }
}
