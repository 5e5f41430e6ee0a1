use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use tokio::fs;

use crate::errors::FeedResult;

/// The generated feed on disk. Writes go through a sibling temp file that is
/// renamed over the target, so readers never see a partial document.
#[derive(Debug, Clone)]
pub struct FeedStore {
    path: PathBuf,
}

impl FeedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    pub async fn write(&self, document: &[u8]) -> FeedResult<()> {
        let temp_path = self.temp_path();
        if let Err(err) = fs::write(&temp_path, document).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(err.into());
        }
        fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }

    pub async fn read(&self) -> FeedResult<Vec<u8>> {
        Ok(fs::read(&self.path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FeedError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let store = FeedStore::new(dir.path().join("feed.xml"));

        store.write(b"<rss/>").await.unwrap();

        assert_eq!(store.read().await.unwrap(), b"<rss/>");
        assert!(!dir.path().join("feed.xml.tmp").exists());
    }

    #[tokio::test]
    async fn test_write_replaces_previous_document() {
        let dir = TempDir::new().unwrap();
        let store = FeedStore::new(dir.path().join("feed.xml"));

        store.write(b"first, and longer").await.unwrap();
        store.write(b"second").await.unwrap();

        assert_eq!(store.read().await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = FeedStore::new(dir.path().join("feed.xml"));

        assert!(matches!(store.read().await, Err(FeedError::Io(_))));
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = FeedStore::new(dir.path().join("missing").join("feed.xml"));

        assert!(matches!(store.write(b"<rss/>").await, Err(FeedError::Io(_))));
    }
}
