use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Items table name (default: "memories-items")
    #[cfg_attr(feature = "inmemory", allow(dead_code))]
    pub items_table: String,
    /// Attachment metadata table name (default: "memories-attachments")
    #[cfg_attr(feature = "inmemory", allow(dead_code))]
    pub attachment_table: String,
    /// Bucket holding uploaded attachments (default: "memories-attachments")
    pub bucket_name: String,
    /// Lifetime of a pre-signed upload URL in seconds (default: 1000)
    pub signed_url_expiration_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ITEMS_TABLE` - Items table name (default: "memories-items")
    /// - `ATTACHMENT_TABLE` - Attachment table name (default: "memories-attachments")
    /// - `S3_BUCKET_NAME` - Attachment bucket (default: "memories-attachments")
    /// - `SIGNED_URL_EXPIRATION` - Upload URL lifetime in seconds (default: 1000)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let string_or =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            items_table: string_or("ITEMS_TABLE", "memories-items"),
            attachment_table: string_or("ATTACHMENT_TABLE", "memories-attachments"),
            bucket_name: string_or("S3_BUCKET_NAME", "memories-attachments"),
            signed_url_expiration_seconds: lookup("SIGNED_URL_EXPIRATION")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
        }
    }

    /// Get the upload URL lifetime as a Duration.
    pub fn signed_url_expiration(&self) -> Duration {
        Duration::from_secs(self.signed_url_expiration_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_signed_url_expiration_conversion() {
        let config = Config {
            items_table: "items".to_string(),
            attachment_table: "attachments".to_string(),
            bucket_name: "bucket".to_string(),
            signed_url_expiration_seconds: 600,
        };

        assert_eq!(config.signed_url_expiration(), Duration::from_secs(600));
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.items_table, "memories-items");
        assert_eq!(config.attachment_table, "memories-attachments");
        assert_eq!(config.bucket_name, "memories-attachments");
        assert_eq!(config.signed_url_expiration_seconds, 1000);
    }

    #[test]
    fn test_values_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("ITEMS_TABLE", "prod-items"),
            ("ATTACHMENT_TABLE", "prod-attachments"),
            ("S3_BUCKET_NAME", "prod-bucket"),
            ("SIGNED_URL_EXPIRATION", "300"),
        ]));

        assert_eq!(config.items_table, "prod-items");
        assert_eq!(config.attachment_table, "prod-attachments");
        assert_eq!(config.bucket_name, "prod-bucket");
        assert_eq!(config.signed_url_expiration(), Duration::from_secs(300));
    }

    #[test]
    fn test_unparsable_expiration_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("SIGNED_URL_EXPIRATION", "soon")]));

        assert_eq!(config.signed_url_expiration_seconds, 1000);
    }
}
