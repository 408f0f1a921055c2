//! Application state.
//!
//! Holds the [`ItemService`] shared by all request handlers. The gateways
//! behind it are chosen at compile time via feature flags and injected here.

use std::sync::Arc;

use crate::{config::Config, service::ItemService};

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state, cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ItemService>,
}

impl AppState {
    pub fn from_service(service: ItemService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

// ============================================================================
// Factory functions for each storage backend
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::{InMemoryAttachmentRepository, InMemoryRepository, LocalUploadSigner};

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for local development without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!(bucket = %config.bucket_name, "Using in-memory storage");

            Ok(Self::with_inmemory(config))
        }

        pub fn with_inmemory(config: &Config) -> Self {
            Self::from_service(ItemService::new(
                Arc::new(InMemoryRepository::new()),
                Arc::new(InMemoryAttachmentRepository::new()),
                Arc::new(LocalUploadSigner::new(
                    &config.bucket_name,
                    config.signed_url_expiration().as_secs(),
                )),
            ))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::{DynamoDbAttachmentRepository, DynamoDbRepository, S3UploadSigner};

    impl AppState {
        /// Creates AppState with DynamoDB storage and S3 upload URLs.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
            let s3_client = aws_sdk_s3::Client::new(&aws_config);

            tracing::info!(
                items_table = %config.items_table,
                attachment_table = %config.attachment_table,
                bucket = %config.bucket_name,
                "Using DynamoDB storage"
            );

            Ok(Self::from_service(ItemService::new(
                Arc::new(DynamoDbRepository::new(dynamodb_client.clone(), &config.items_table)),
                Arc::new(DynamoDbAttachmentRepository::new(
                    dynamodb_client,
                    &config.attachment_table,
                )),
                Arc::new(S3UploadSigner::new(
                    s3_client,
                    &config.bucket_name,
                    config.signed_url_expiration(),
                )),
            )))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(all(test, feature = "inmemory"))]
impl Default for AppState {
    fn default() -> Self {
        Self::with_inmemory(&Config {
            items_table: "memories-items".to_string(),
            attachment_table: "memories-attachments".to_string(),
            bucket_name: "test-bucket".to_string(),
            signed_url_expiration_seconds: 1000,
        })
    }
}
