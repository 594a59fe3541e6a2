use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs;

use crate::dtos::upload::StoredFile;

/// Local file store backing the upload endpoint. Files land directly under
/// the base directory as `<upload-timestamp-millis>.<original-filename>`
/// and are served back read-only.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir).await
    }

    /// Raw byte passthrough to disk under the timestamp-prefixed name.
    pub async fn save(
        &self,
        fieldname: &str,
        originalname: &str,
        mimetype: &str,
        data: &[u8],
    ) -> std::io::Result<StoredFile> {
        self.ensure_dir().await?;
        let filename = format!("{}.{}", Utc::now().timestamp_millis(), originalname);
        let path = self.dir.join(&filename);
        fs::write(&path, data).await?;
        Ok(StoredFile {
            fieldname: fieldname.to_string(),
            originalname: originalname.to_string(),
            mimetype: mimetype.to_string(),
            destination: self.dir.display().to_string(),
            filename,
            path: path.display().to_string(),
            size: data.len() as u64,
        })
    }

    /// Maps a requested filename to its on-disk path, stripped down to the
    /// final path component so traversal segments never leave the base dir.
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        let safe = Path::new(filename).file_name()?;
        Some(self.dir.join(safe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_prefixes_a_timestamp_and_writes_the_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path());

        let stored = store
            .save("file", "pic.png", "image/png", b"not really a png")
            .await
            .unwrap();

        assert!(stored.filename.ends_with(".pic.png"));
        assert_eq!(stored.originalname, "pic.png");
        assert_eq!(stored.mimetype, "image/png");
        assert_eq!(stored.size, 16);

        let on_disk = std::fs::read(tmp.path().join(&stored.filename)).unwrap();
        assert_eq!(on_disk, b"not really a png");

        let prefix = stored.filename.split('.').next().unwrap();
        assert!(prefix.parse::<i64>().is_ok());
    }

    #[tokio::test]
    async fn save_creates_the_base_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path().join("uploads"));
        store.save("file", "a.txt", "text/plain", b"x").await.unwrap();
        assert!(tmp.path().join("uploads").is_dir());
    }

    #[test]
    fn resolve_rejects_traversal() {
        let store = FileStore::new("uploads");
        assert_eq!(
            store.resolve("../../etc/passwd").unwrap(),
            Path::new("uploads").join("passwd")
        );
        assert!(store.resolve("..").is_none());
        assert!(store.resolve("").is_none());
    }
}
