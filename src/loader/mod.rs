// ResultSetローダー
//
// 1つの結果ファイルを読み込み、ベンチマーク名 → 実行時間のResultSetへ変換する。
// ソースごとに独立しており、1つの失敗が他のソースの読み込みに影響しない。

pub mod discovery;
pub mod parser;

use crate::core::{ComparisonError, ComparisonResult, ResultSet};
use crate::storage::StorageBackend;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use discovery::discover_sources;
pub use parser::{parse_result_set, MalformedRecordPolicy};

/// 比較対象となる1ソースの定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    /// ソースID（例: "go", "python", "pongo2"）
    pub id: String,
    /// 結果ファイルのパス
    pub path: PathBuf,
    /// 必須ソースかどうか（falseなら読み込み失敗時に全値欠損として続行）
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl SourceSpec {
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            required: true,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// ストレージ経由でResultSetを読み込むローダー
#[derive(Debug, Clone)]
pub struct ResultSetLoader<S> {
    storage: S,
    policy: MalformedRecordPolicy,
}

impl<S> ResultSetLoader<S>
where
    S: StorageBackend,
{
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            policy: MalformedRecordPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MalformedRecordPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> MalformedRecordPolicy {
        self.policy
    }

    /// 1ソースを読み込む
    pub async fn load(&self, spec: &SourceSpec) -> ComparisonResult<ResultSet> {
        let location = spec.path.to_string_lossy();
        let bytes = self
            .storage
            .read_item(&location)
            .await
            .map_err(|e| ComparisonError::source_unavailable(&spec.id, e))?;

        let result_set = parse_result_set(&spec.id, &bytes, self.policy)?;

        tracing::debug!(
            source_id = %spec.id,
            path = %location,
            cases = result_set.len(),
            skipped = result_set.skipped_records().len(),
            "loaded result set"
        );
        if !result_set.duplicate_names().is_empty() {
            tracing::warn!(
                source_id = %spec.id,
                duplicates = ?result_set.duplicate_names(),
                "duplicate benchmark names; last record wins"
            );
        }

        Ok(result_set)
    }
}
