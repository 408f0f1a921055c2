//! Local upload URL signer.
//!
//! Produces URLs with the same shape as S3 pre-signed PUT URLs so clients
//! can be exercised without AWS. The signature is random and nothing checks
//! it.

use async_trait::async_trait;
use rand::{distr::Alphanumeric, Rng};

use memories_core::items::attachment_url;
use memories_core::storage::{Result, UploadUrlSigner};

#[derive(Debug, Clone)]
pub struct LocalUploadSigner {
    bucket: String,
    expires_in_seconds: u64,
}

impl LocalUploadSigner {
    pub fn new(bucket: impl Into<String>, expires_in_seconds: u64) -> Self {
        Self {
            bucket: bucket.into(),
            expires_in_seconds,
        }
    }
}

fn random_signature() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

#[async_trait]
impl UploadUrlSigner for LocalUploadSigner {
    async fn generate_upload_url(&self, object_key: &str) -> Result<String> {
        Ok(format!(
            "{}?X-Amz-Expires={}&X-Amz-Signature={}",
            self.attachment_url(object_key),
            self.expires_in_seconds,
            random_signature()
        ))
    }

    fn attachment_url(&self, object_key: &str) -> String {
        attachment_url(&self.bucket, object_key)
    }
}
