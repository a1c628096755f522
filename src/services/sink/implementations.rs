// レポート出力先の具象実装

use crate::core::{ComparisonError, ComparisonResult, ReportSink};
use crate::storage::StorageBackend;
use anyhow::Context;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::io::AsyncWriteExt;

/// 標準出力の表示名
pub const STDOUT_TARGET: &str = "<stdout>";

/// 標準出力への出力
#[derive(Debug, Default, Clone)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportSink for StdoutSink {
    async fn write_report(&self, report: &str) -> ComparisonResult<()> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(report.as_bytes())
            .await
            .context("Failed to write report to stdout")
            .map_err(|e| ComparisonError::sink_write_failure(STDOUT_TARGET, e))?;
        stdout
            .flush()
            .await
            .context("Failed to flush stdout")
            .map_err(|e| ComparisonError::sink_write_failure(STDOUT_TARGET, e))
    }

    fn target(&self) -> String {
        STDOUT_TARGET.to_string()
    }
}

/// ストレージ経由のファイル出力
///
/// 一時ファイルに書いてから置き換えるため、失敗時に既存ファイルは壊れない。
#[derive(Debug, Clone)]
pub struct FileSink<S> {
    storage: S,
    path: PathBuf,
}

impl<S> FileSink<S>
where
    S: StorageBackend,
{
    pub fn new(storage: S, path: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl<S> ReportSink for FileSink<S>
where
    S: StorageBackend,
{
    async fn write_report(&self, report: &str) -> ComparisonResult<()> {
        let target = self.target();
        self.storage
            .write_item(&target, report.as_bytes())
            .await
            .map_err(|e| ComparisonError::sink_write_failure(&target, e))?;

        tracing::debug!(target = %target, bytes = report.len(), "report written");
        Ok(())
    }

    fn target(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// メモリ内に保持する出力先（テスト・組み込み用）
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    contents: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最後に書き込まれたレポート
    pub fn last_report(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    pub fn write_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ReportSink for MemorySink {
    async fn write_report(&self, report: &str) -> ComparisonResult<()> {
        self.lock().push(report.to_string());
        Ok(())
    }

    fn target(&self) -> String {
        "<memory>".to_string()
    }
}
