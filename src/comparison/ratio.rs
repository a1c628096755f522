// ベースライン比の計算
//
// ratio = comparand / baseline。両方の値があり baseline > 0 のときだけ定義される。
// 丸めは行わない（表示時の責務）。

use crate::core::ComparisonRow;
use std::collections::BTreeMap;

/// 1組の値からベースライン比を計算
///
/// どちらかが欠損、baselineが0以下、または結果が有限でない場合はNone。
pub fn ratio(baseline: Option<f64>, comparand: Option<f64>) -> Option<f64> {
    let (baseline, comparand) = (baseline?, comparand?);
    if !baseline.is_finite() || baseline <= 0.0 || !comparand.is_finite() {
        return None;
    }

    let quotient = comparand / baseline;
    quotient.is_finite().then_some(quotient)
}

/// ベースライン1つと任意個の比較対象から比の列を作るエンジン
#[derive(Debug, Clone)]
pub struct RatioEngine {
    baseline: String,
    comparands: Vec<String>,
}

impl RatioEngine {
    pub fn new(baseline: impl Into<String>, comparands: Vec<String>) -> Self {
        Self {
            baseline: baseline.into(),
            comparands,
        }
    }

    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    pub fn comparands(&self) -> &[String] {
        &self.comparands
    }

    /// 1行分の比（比較対象ID → 比）
    pub fn row_ratios(&self, row: &ComparisonRow) -> BTreeMap<String, Option<f64>> {
        let baseline = row.value(&self.baseline);
        self.comparands
            .iter()
            .map(|comparand| (comparand.clone(), ratio(baseline, row.value(comparand))))
            .collect()
    }

    /// 全行に比の列を付与する（行同士は独立）
    pub fn apply(&self, rows: Vec<ComparisonRow>) -> Vec<ComparisonRow> {
        rows.into_iter()
            .map(|mut row| {
                row.ratios = self.row_ratios(&row);
                row
            })
            .collect()
    }
}
