//! S3 pre-signed upload URLs.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;

use memories_core::items::attachment_url;
use memories_core::storage::{RepositoryError, Result, UploadUrlSigner};

/// Signs `PUT` URLs for objects in the attachment bucket.
///
/// Any caller may obtain a URL for any key; ownership is checked by the
/// item service before a URL is handed out.
pub struct S3UploadSigner {
    client: Client,
    bucket: String,
    expires_in: Duration,
}

impl S3UploadSigner {
    pub fn new(client: Client, bucket: impl Into<String>, expires_in: Duration) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            expires_in,
        }
    }
}

#[async_trait]
impl UploadUrlSigner for S3UploadSigner {
    async fn generate_upload_url(&self, object_key: &str) -> Result<String> {
        let presigning = PresigningConfig::expires_in(self.expires_in)
            .map_err(|e| RepositoryError::ObjectStore(e.to_string()))?;

        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key)
            .presigned(presigning)
            .await
            .map_err(|e| RepositoryError::ObjectStore(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!(bucket = %self.bucket, object_key, "Signed upload URL");
        Ok(request.uri().to_string())
    }

    fn attachment_url(&self, object_key: &str) -> String {
        attachment_url(&self.bucket, object_key)
    }
}
