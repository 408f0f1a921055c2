//! Table configuration types (Functional Core - pure data).

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: KeyAttribute,
}

/// A string key attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
}

impl KeyAttribute {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl TableConfig {
    /// Key schema rendered as `HASH/RANGE`.
    pub fn key_schema_display(&self) -> String {
        format!("{}/{}", self.partition_key.name, self.sort_key.name)
    }
}

/// Items table: one row per memory, partitioned by owner.
pub fn items_table_config(table_name: &str) -> TableConfig {
    TableConfig {
        table_name: table_name.to_string(),
        partition_key: KeyAttribute::new("userId"),
        sort_key: KeyAttribute::new("itemId"),
    }
}

/// Attachments table: one row per issued upload URL, partitioned by item.
pub fn attachments_table_config(table_name: &str) -> TableConfig {
    TableConfig {
        table_name: table_name.to_string(),
        partition_key: KeyAttribute::new("itemId"),
        sort_key: KeyAttribute::new("attachmentId"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_key_schemas() {
        assert_eq!(
            items_table_config("memories-items").key_schema_display(),
            "userId/itemId"
        );
        assert_eq!(
            attachments_table_config("memories-attachments").key_schema_display(),
            "itemId/attachmentId"
        );
    }
}
