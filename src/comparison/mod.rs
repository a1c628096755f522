// 比較エンジン
//
// 突き合わせ → 比の計算 → サマリーまでの純粋な変換。
// 状態を持たず、同じ入力からは常に同じComparisonReportを返す。

pub mod ratio;
pub mod reconciler;
pub mod summary;

use crate::core::{ComparisonReport, ResultSet};

pub use ratio::{ratio, RatioEngine};
pub use reconciler::reconcile;
pub use summary::summarize;

/// 読み込み済みのResultSet群から比較レポートを組み立てる
///
/// 列順は `result_sets` の並び順。ベースラインと比較対象は事前に検証されている前提。
pub fn compare(result_sets: &[ResultSet], baseline: &str, comparands: &[String]) -> ComparisonReport {
    let engine = RatioEngine::new(baseline, comparands.to_vec());
    let rows = engine.apply(reconcile(result_sets));
    let summary = summarize(&rows, baseline, comparands);

    ComparisonReport {
        sources: result_sets
            .iter()
            .map(|set| set.source_id().to_string())
            .collect(),
        baseline: baseline.to_string(),
        comparands: comparands.to_vec(),
        rows,
        summary,
    }
}
