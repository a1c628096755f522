// 結果ディレクトリからのソース発見
// 各実装のハーネスは `<id>_results.json` という名前で結果を書き出す

use super::SourceSpec;
use crate::storage::StorageBackend;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// ディレクトリ内の `<id>_results.json` をソースとして列挙（ID順）
pub async fn discover_sources<S>(storage: &S, directory: &str) -> Result<Vec<SourceSpec>>
where
    S: StorageBackend + ?Sized,
{
    let items = storage
        .list_items(directory)
        .await
        .with_context(|| format!("Failed to discover result files in: {directory}"))?;

    let mut sources: Vec<SourceSpec> = items
        .iter()
        .filter(|item| storage.is_result_file(item))
        .filter_map(|item| {
            item.result_source_id()
                .map(|id| SourceSpec::new(id, PathBuf::from(&item.id)))
        })
        .collect();

    sources.sort_by(|a, b| a.id.cmp(&b.id)); // 一貫した順序で列挙
    tracing::debug!(directory, discovered = sources.len(), "discovered result files");
    Ok(sources)
}
