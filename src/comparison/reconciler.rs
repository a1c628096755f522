// ResultSetの突き合わせ
//
// 全ソースのベンチマーク名の和集合をバイト順に並べ、名前ごとに1行を作る。
// 行順はソースの並びやHashMapの走査順に依存しない。

use crate::core::{ComparisonRow, ResultSet};
use std::collections::{BTreeMap, BTreeSet};

/// N個のResultSetを名前順のComparisonRow列にまとめる
///
/// 同じソースIDが複数渡された場合は後のものが値を上書きする。
pub fn reconcile(result_sets: &[ResultSet]) -> Vec<ComparisonRow> {
    let names: BTreeSet<&str> = result_sets.iter().flat_map(|set| set.names()).collect();

    names
        .into_iter()
        .map(|name| {
            let values: BTreeMap<String, Option<f64>> = result_sets
                .iter()
                .map(|set| (set.source_id().to_string(), set.lookup(name)))
                .collect();
            ComparisonRow::new(name, values)
        })
        .collect()
}
