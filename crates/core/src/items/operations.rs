use chrono::{DateTime, NaiveDate, Utc};

use super::error::ItemError;
use super::requests::{CreateItemRequest, UpdateItemRequest};
use super::types::AttachmentRecord;

/// Date format used for the `date` field of an item.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Validates a create request before an item is built from it.
pub fn validate_create(request: &CreateItemRequest) -> Result<(), ItemError> {
    validate_fields(&request.name, &request.date, request.description.as_deref())
}

/// Validates an update request before it is sent to storage.
pub fn validate_update(request: &UpdateItemRequest) -> Result<(), ItemError> {
    validate_fields(&request.name, &request.date, request.description.as_deref())
}

fn validate_fields(name: &str, date: &str, description: Option<&str>) -> Result<(), ItemError> {
    if name.trim().is_empty() {
        return Err(ItemError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ItemError::NameTooLong);
    }
    if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
        return Err(ItemError::InvalidDate(date.to_string()));
    }
    if description.is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_LEN) {
        return Err(ItemError::DescriptionTooLong);
    }
    Ok(())
}

/// Public URL of an uploaded attachment.
///
/// Pattern: `https://<bucket>.s3.amazonaws.com/<attachment_id>`
pub fn attachment_url(bucket: &str, attachment_id: &str) -> String {
    format!("https://{bucket}.s3.amazonaws.com/{attachment_id}")
}

/// Renders a creation instant the way items store it (epoch millis).
pub fn created_at_millis(now: DateTime<Utc>) -> String {
    now.timestamp_millis().to_string()
}

/// Orders attachment records newest first by their issue timestamp.
///
/// The sort is stable, so records issued in the same millisecond keep the
/// order the store returned them in.
pub fn sort_newest_first(records: &mut [AttachmentRecord]) {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
