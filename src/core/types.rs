// 比較処理に関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// 1ソースが報告した1ベンチマークケース
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkCase {
    pub name: String,
    pub duration_ms: f64,
}

impl BenchmarkCase {
    pub fn new(name: impl Into<String>, duration_ms: f64) -> Self {
        Self {
            name: name.into(),
            duration_ms,
        }
    }
}

/// 1実装分の計測結果（ベンチマーク名 → 実行時間ms）
///
/// 読み込み後は読み取り専用。同名レコードは後勝ちで、上書きされた名前は
/// `duplicate_names` に記録される。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    source_id: String,
    durations: HashMap<String, f64>,
    duplicate_names: Vec<String>,
    skipped_records: Vec<usize>,
}

impl ResultSet {
    /// 空のResultSetを作成（縮退したソース用）
    pub fn empty(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            ..Self::default()
        }
    }

    /// ケース列からResultSetを構築（同名は後勝ち）
    pub fn from_cases<I>(source_id: impl Into<String>, cases: I) -> Self
    where
        I: IntoIterator<Item = BenchmarkCase>,
    {
        let mut set = Self::empty(source_id);
        for case in cases {
            set.insert(case);
        }
        set
    }

    pub(crate) fn insert(&mut self, case: BenchmarkCase) {
        if self
            .durations
            .insert(case.name.clone(), case.duration_ms)
            .is_some()
            && !self.duplicate_names.contains(&case.name)
        {
            self.duplicate_names.push(case.name);
        }
    }

    pub(crate) fn record_skipped(&mut self, record_index: usize) {
        self.skipped_records.push(record_index);
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// ベンチマーク名で実行時間を検索（存在しなければNone）
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.durations.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.durations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// 後勝ちで上書きされたベンチマーク名
    pub fn duplicate_names(&self) -> &[String] {
        &self.duplicate_names
    }

    /// 読み飛ばされたレコードのインデックス
    pub fn skipped_records(&self) -> &[usize] {
        &self.skipped_records
    }
}

/// 比較表の1行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub name: String,
    /// ソースID → 実行時間（未報告ならNone）
    pub values: BTreeMap<String, Option<f64>>,
    /// 比較対象ソースID → ベースライン比（計算不能ならNone）
    pub ratios: BTreeMap<String, Option<f64>>,
}

impl ComparisonRow {
    pub fn new(name: impl Into<String>, values: BTreeMap<String, Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
            ratios: BTreeMap::new(),
        }
    }

    pub fn value(&self, source_id: &str) -> Option<f64> {
        self.values.get(source_id).copied().flatten()
    }

    pub fn ratio(&self, comparand: &str) -> Option<f64> {
        self.ratios.get(comparand).copied().flatten()
    }
}

/// 比較対象ごとの平均比
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub comparand: String,
    /// 有効な比の算術平均（有効な比が0件ならNone）
    pub mean_ratio: Option<f64>,
    pub valid_comparisons: usize,
}

/// 比較全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub baseline: String,
    pub entries: Vec<SummaryEntry>,
}

impl Summary {
    pub fn mean_for(&self, comparand: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.comparand == comparand)
            .and_then(|entry| entry.mean_ratio)
    }
}

/// レンダラーに渡す比較結果一式
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// 列順のソースID
    pub sources: Vec<String>,
    pub baseline: String,
    pub comparands: Vec<String>,
    pub rows: Vec<ComparisonRow>,
    pub summary: Summary,
}

/// 1回の実行結果のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub total_rows: usize,
    pub loaded_sources: Vec<String>,
    /// 読み込みに失敗し、全値欠損として扱われた任意ソース
    pub degraded_sources: Vec<String>,
    pub skipped_records: usize,
    pub target: String,
}
