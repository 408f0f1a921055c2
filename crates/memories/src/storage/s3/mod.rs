//! S3 upload URL signing.

mod signer;

pub use signer::S3UploadSigner;
