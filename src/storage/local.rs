use super::{StorageBackend, StorageItem};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};

/// ローカルファイルシステム用のストレージバックエンド
#[derive(Debug, Clone, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn path_to_storage_item(path: &Path) -> Result<StorageItem> {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        Ok(StorageItem {
            id: path.to_string_lossy().to_string(),
            name,
            size: metadata.len(),
            is_directory: metadata.is_dir(),
        })
    }
}

/// 同じディレクトリに一時ファイルを書き、renameで置き換える
fn write_atomically(path: &Path, data: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    std::fs::create_dir_all(&parent)
        .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

    let mut temp = tempfile::NamedTempFile::new_in(&parent)
        .with_context(|| format!("Failed to create temporary file in: {}", parent.display()))?;
    temp.write_all(data)
        .with_context(|| format!("Failed to write temporary file for: {}", path.display()))?;
    temp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to sync temporary file for: {}", path.display()))?;
    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to move report into place: {}", path.display()))?;

    Ok(())
}

#[async_trait]
impl StorageBackend for LocalStorageBackend {
    async fn list_items(&self, prefix: &str) -> Result<Vec<StorageItem>> {
        let path = Path::new(prefix);
        let mut items = Vec::new();

        let mut entries = tokio::fs::read_dir(path)
            .await
            .with_context(|| format!("Failed to read directory: {prefix}"))?;

        while let Some(entry) = entries.next_entry().await? {
            if let Ok(item) = Self::path_to_storage_item(&entry.path()) {
                items.push(item);
            }
        }

        Ok(items)
    }

    async fn read_item(&self, id: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(Path::new(id))
            .await
            .with_context(|| format!("Failed to read file: {id}"))?;
        Ok(data)
    }

    async fn write_item(&self, id: &str, data: &[u8]) -> Result<()> {
        let path = PathBuf::from(id);
        let data = data.to_vec();

        // tempfileは同期APIのためブロッキングスレッドで実行
        tokio::task::spawn_blocking(move || write_atomically(&path, &data))
            .await
            .context("Write task was interrupted")?
    }
}
