use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use std::io::ErrorKind;
use std::path::PathBuf;

/// Accepted upload types and the extension a stored file gets for each.
/// SVG is left out: it can carry script and would be served inline from our origin.
const ALLOWED_CONTENT_TYPES: [(&str, &str); 5] = [
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/webp", "webp"),
    ("image/gif", "gif"),
    ("application/pdf", "pdf"),
];

#[derive(Error, Debug)]
pub enum BlobError {
    #[error("Invalid blob key")]
    InvalidKey,

    #[error("Blob not found")]
    NotFound,

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredBlob {
    pub key: String,
    pub url: String,
}

/// Where uploaded media ends up. Handlers only ever pass bytes through.
pub trait BlobStore: Send + Sync {
    /// Stores `bytes` declared as `content_type`; the key's extension follows from that type.
    fn put<'a>(
        &'a self,
        content_type: &'a str,
        bytes: Vec<u8>,
    ) -> BoxFuture<'a, Result<StoredBlob, BlobError>>;

    fn remove<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<(), BlobError>>;
}

/// File extension for an allowed content type, ignoring parameters such as `charset`.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    ALLOWED_CONTENT_TYPES
        .iter()
        .find(|(mime, _)| mime.eq_ignore_ascii_case(essence))
        .map(|&(_, ext)| ext)
}

pub fn is_allowed_content_type(content_type: &str) -> bool {
    extension_for(content_type).is_some()
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= 64
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}

/// Stores blobs as files under one directory, served back by the static file handler.
pub struct LocalBlobStore {
    root: PathBuf,
    base_url: String,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl BlobStore for LocalBlobStore {
    fn put<'a>(
        &'a self,
        content_type: &'a str,
        bytes: Vec<u8>,
    ) -> BoxFuture<'a, Result<StoredBlob, BlobError>> {
        Box::pin(async move {
            let ext = extension_for(content_type)
                .ok_or_else(|| BlobError::UnsupportedType(content_type.to_string()))?;
            let key = format!("{}.{}", Uuid::new_v4(), ext);

            tokio::fs::create_dir_all(&self.root).await?;
            tokio::fs::write(self.root.join(&key), bytes).await?;

            Ok(StoredBlob {
                url: format!("{}/{}", self.base_url, key),
                key,
            })
        })
    }

    fn remove<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<(), BlobError>> {
        Box::pin(async move {
            if !is_valid_key(key) {
                return Err(BlobError::InvalidKey);
            }

            match tokio::fs::remove_file(self.root.join(key)).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Err(BlobError::NotFound),
                Err(e) => Err(BlobError::Io(e)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("packsite-blobs-{}", Uuid::new_v4()))
    }

    #[test]
    fn content_type_allowlist() {
        assert!(is_allowed_content_type("image/png"));
        assert!(is_allowed_content_type("IMAGE/JPEG"));
        assert!(is_allowed_content_type("application/pdf; charset=binary"));
        assert!(!is_allowed_content_type("text/html"));
        assert!(!is_allowed_content_type("image/svg+xml"));
        assert!(!is_allowed_content_type("application/x-msdownload"));
    }

    #[test]
    fn extension_follows_content_type() {
        assert_eq!(extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for("Image/PNG"), Some("png"));
        assert_eq!(extension_for("application/pdf; charset=binary"), Some("pdf"));
        assert_eq!(extension_for("text/html"), None);
    }

    #[test]
    fn key_validation_blocks_traversal() {
        assert!(is_valid_key("0b6c2a9e-5f0b-4c43-9a43-0f3d7c1b2e11.png"));
        assert!(!is_valid_key("../secrets.env"));
        assert!(!is_valid_key("nested/file.png"));
        assert!(!is_valid_key(".hidden"));
        assert!(!is_valid_key(""));
    }

    #[tokio::test]
    async fn put_then_remove() {
        let root = scratch_dir();
        let store = LocalBlobStore::new(&root, "/uploads/");

        let blob = store.put("application/pdf", b"%PDF-1.7".to_vec()).await.unwrap();

        assert!(blob.key.ends_with(".pdf"));
        assert_eq!(blob.url, format!("/uploads/{}", blob.key));
        assert_eq!(tokio::fs::read(root.join(&blob.key)).await.unwrap(), b"%PDF-1.7");

        store.remove(&blob.key).await.unwrap();
        assert!(matches!(store.remove(&blob.key).await, Err(BlobError::NotFound)));

        let _ = tokio::fs::remove_dir_all(&root).await;
    }

    #[tokio::test]
    async fn put_rejects_unlisted_type() {
        let root = scratch_dir();
        let store = LocalBlobStore::new(&root, "/uploads");

        let err = store.put("text/html", b"<script></script>".to_vec()).await.unwrap_err();
        assert!(matches!(err, BlobError::UnsupportedType(t) if t == "text/html"));
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn remove_rejects_invalid_key() {
        let store = LocalBlobStore::new(scratch_dir(), "/uploads");
        assert!(matches!(store.remove("../x").await, Err(BlobError::InvalidKey)));
    }
}
