//! JSON output formatting.

use serde::Serialize;

use crate::error::Result;

/// Format a value as compact JSON, one document per line.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_json_is_compact() {
        assert_eq!(
            format_json(&json!({ "items": [] })).unwrap(),
            r#"{"items":[]}"#
        );
    }
}
