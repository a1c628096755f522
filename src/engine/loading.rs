// ソースの並列読み込み
//
// ソースごとに1タスク、同時実行数はセマフォで制限する。
// 完了順に関係なく、結果は呼び出し側のソース順に並べ直して返す。

use crate::core::{ComparisonError, ComparisonResult, ResultSet};
use crate::loader::{ResultSetLoader, SourceSpec};
use crate::storage::StorageBackend;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// 1ソース分の読み込み結果
#[derive(Debug)]
pub struct LoadOutcome {
    pub spec: SourceSpec,
    pub result: ComparisonResult<ResultSet>,
}

/// 全ソースを並列に読み込む
///
/// 個々のソースの失敗は `LoadOutcome::result` に入る。Errが返るのはタスク自体が
/// 異常終了した場合のみ。
pub async fn load_sources<S>(
    loader: Arc<ResultSetLoader<S>>,
    specs: &[SourceSpec],
    max_concurrent: usize,
) -> ComparisonResult<Vec<LoadOutcome>>
where
    S: StorageBackend + 'static,
{
    let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));
    let mut tasks = JoinSet::new();

    for (index, spec) in specs.iter().cloned().enumerate() {
        let loader = Arc::clone(&loader);
        let semaphore = Arc::clone(&semaphore);

        tasks.spawn(async move {
            let result = match semaphore.acquire_owned().await {
                Ok(_permit) => loader.load(&spec).await,
                Err(e) => Err(ComparisonError::source_unavailable(
                    &spec.id,
                    anyhow::anyhow!("Semaphore error: {e}"),
                )),
            };
            (index, LoadOutcome { spec, result })
        });
    }

    let mut outcomes = Vec::with_capacity(specs.len());
    while let Some(joined) = tasks.join_next().await {
        outcomes.push(joined?);
    }

    // 完了順 → 宣言順
    outcomes.sort_by_key(|(index, _)| *index);
    Ok(outcomes.into_iter().map(|(_, outcome)| outcome).collect())
}
