//! Pure functions for calculating deployment plans (Functional Core).

use super::config::TableConfig;

/// Represents the current state of a table.
#[derive(Debug, Clone)]
pub struct TableState {
    pub status: TableStatus,
    pub partition_key: Option<String>,
    pub sort_key: Option<String>,
}

impl TableState {
    fn key_schema_display(&self) -> String {
        format!(
            "{}/{}",
            self.partition_key.as_deref().unwrap_or("-"),
            self.sort_key.as_deref().unwrap_or("-")
        )
    }
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Planned change for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TablePlan {
    /// Table doesn't exist, needs to be created.
    Create { config: TableConfig },
    /// Table exists with the expected keys.
    NoChanges { table_name: String },
    /// Table exists with different keys. Key schemas cannot be altered in place.
    Conflict {
        table_name: String,
        expected: String,
        actual: String,
    },
}

/// Planned change for one table on destroy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

/// Pure function: Calculate what changes are needed to reach desired state.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> TablePlan {
    match current {
        None => TablePlan::Create {
            config: desired.clone(),
        },
        Some(state)
            if state.partition_key.as_deref() == Some(desired.partition_key.name.as_str())
                && state.sort_key.as_deref() == Some(desired.sort_key.name.as_str()) =>
        {
            TablePlan::NoChanges {
                table_name: desired.table_name.clone(),
            }
        }
        Some(state) => TablePlan::Conflict {
            table_name: desired.table_name.clone(),
            expected: desired.key_schema_display(),
            actual: state.key_schema_display(),
        },
    }
}

/// Pure function: Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// True when at least one table would change.
pub fn has_deploy_changes(plans: &[TablePlan]) -> bool {
    plans.iter().any(|p| matches!(p, TablePlan::Create { .. }))
}

/// True when at least one table would be deleted.
pub fn has_destroy_changes(plans: &[DestroyPlan]) -> bool {
    plans
        .iter()
        .any(|p| matches!(p, DestroyPlan::DeleteTable { .. }))
}

/// Pure function: Format a deploy plan for display.
pub fn format_deploy_plan(plan: &TablePlan) -> Vec<String> {
    match plan {
        TablePlan::Create { config } => vec![
            format!("+ Create table: {}", config.table_name),
            format!("  Partition key: {} (S)", config.partition_key.name),
            format!("  Sort key: {} (S)", config.sort_key.name),
            "  Billing: PAY_PER_REQUEST".to_string(),
        ],
        TablePlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
        TablePlan::Conflict {
            table_name,
            expected,
            actual,
        } => vec![format!(
            "! Table '{}' has keys {}, expected {}",
            table_name, actual, expected
        )],
    }
}

/// Pure function: Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::{attachments_table_config, items_table_config};

    fn active(pk: &str, sk: &str) -> TableState {
        TableState {
            status: TableStatus::Active,
            partition_key: Some(pk.to_string()),
            sort_key: Some(sk.to_string()),
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let desired = items_table_config("memories-items");

        let plan = calculate_deploy_plan(None, &desired);

        assert_eq!(plan, TablePlan::Create { config: desired });
        assert!(has_deploy_changes(&[plan]));
    }

    #[test]
    fn test_matching_table_needs_no_changes() {
        let desired = attachments_table_config("memories-attachments");
        let state = active("itemId", "attachmentId");

        let plan = calculate_deploy_plan(Some(&state), &desired);

        assert!(matches!(plan, TablePlan::NoChanges { .. }));
        assert!(!has_deploy_changes(&[plan]));
    }

    #[test]
    fn test_mismatched_keys_conflict() {
        let desired = items_table_config("memories-items");
        let state = active("PK", "SK");

        let plan = calculate_deploy_plan(Some(&state), &desired);

        assert_eq!(
            plan,
            TablePlan::Conflict {
                table_name: "memories-items".to_string(),
                expected: "userId/itemId".to_string(),
                actual: "PK/SK".to_string(),
            }
        );
        assert_eq!(
            format_deploy_plan(&plan),
            vec!["! Table 'memories-items' has keys PK/SK, expected userId/itemId"]
        );
    }

    #[test]
    fn test_format_create_plan() {
        let plan = calculate_deploy_plan(None, &items_table_config("memories-items"));

        assert_eq!(
            format_deploy_plan(&plan),
            vec![
                "+ Create table: memories-items",
                "  Partition key: userId (S)",
                "  Sort key: itemId (S)",
                "  Billing: PAY_PER_REQUEST",
            ]
        );
    }

    #[test]
    fn test_destroy_plan() {
        let state = active("userId", "itemId");

        let existing = calculate_destroy_plan(Some(&state), "memories-items");
        let gone = calculate_destroy_plan(None, "memories-attachments");

        assert!(has_destroy_changes(&[existing, gone.clone()]));
        assert!(!has_destroy_changes(&[gone]));
    }
}
