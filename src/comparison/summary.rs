// 比較対象ごとの平均比

use crate::core::{ComparisonRow, Summary, SummaryEntry};

/// 定義済みの比だけで算術平均を取る（欠損は0扱いせず除外）
pub fn summarize(rows: &[ComparisonRow], baseline: &str, comparands: &[String]) -> Summary {
    let entries = comparands
        .iter()
        .map(|comparand| {
            let defined: Vec<f64> = rows.iter().filter_map(|row| row.ratio(comparand)).collect();
            let mean_ratio = mean(&defined);

            SummaryEntry {
                comparand: comparand.clone(),
                mean_ratio,
                valid_comparisons: defined.len(),
            }
        })
        .collect();

    Summary {
        baseline: baseline.to_string(),
        entries,
    }
}

/// 各項を件数で割ってから足す（合計がf64::MAXを超えても溢れない）
///
/// 空、または結果が有限でない場合はNone。
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let count = values.len() as f64;
    let mean: f64 = values.iter().map(|value| value / count).sum();
    mean.is_finite().then_some(mean)
}
