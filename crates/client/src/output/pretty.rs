//! Pretty output formatting.

use memories_core::items::{AttachmentRecord, AttachmentUpload, Item};

/// Format an item for display.
pub fn format_item(item: &Item) -> String {
    let mut output = format!("{} ({})\n  ID: {}", item.name, item.date, item.item_id);
    if let Some(desc) = &item.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    if let Some(url) = &item.attachment_url {
        output.push_str(&format!("\n  Attachment: {}", url));
    }
    output
}

/// Format items for display.
pub fn format_items(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    let mut output = format!("ITEMS ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}

/// Format an attachment record for display.
pub fn format_attachment(record: &AttachmentRecord) -> String {
    let mut output = format!(
        "{}\n  Issued: {}\n  URL: {}",
        record.attachment_id, record.timestamp, record.attachment_url
    );
    for (key, value) in &record.fields {
        output.push_str(&format!("\n  {}: {}", key, value));
    }
    output
}

/// Format attachment records for display.
pub fn format_attachments(records: &[AttachmentRecord]) -> String {
    if records.is_empty() {
        return "No attachments found.".to_string();
    }
    let mut output = format!("ATTACHMENTS ({})\n", records.len());
    output.push_str(&"-".repeat(40));
    for record in records {
        output.push_str(&format!("\n{}", format_attachment(record)));
        output.push('\n');
    }
    output
}

/// Format an issued upload for display.
pub fn format_upload(upload: &AttachmentUpload) -> String {
    format!(
        "Upload URL: {}\nAttachment URL: {}\n{}",
        upload.upload_url,
        upload.attachment_url,
        format_item(&upload.item)
    )
}
