// 比較設定の具象実装
//
// 優先順位: デフォルト → JSON設定ファイル → CLIフラグ

use crate::core::{ComparisonError, ComparisonResult};
use crate::loader::{MalformedRecordPolicy, SourceSpec};
use crate::report::ReportFormat;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// ソース未指定時のベースライン
pub const LEGACY_BASELINE: &str = "go";

fn default_max_concurrent_loads() -> usize {
    num_cpus::get().max(1) * 2
}

/// 比較実行の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComparisonConfig {
    /// 列順に並んだソース定義
    pub sources: Vec<SourceSpec>,
    /// 未指定なら最初のソース
    pub baseline: Option<String>,
    /// 空ならベースライン以外の全ソース（宣言順）
    pub comparands: Vec<String>,
    /// 未指定なら標準出力
    pub output: Option<PathBuf>,
    pub format: ReportFormat,
    pub malformed_records: MalformedRecordPolicy,
    pub max_concurrent_loads: usize,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            baseline: None,
            comparands: Vec::new(),
            output: None,
            format: ReportFormat::default(),
            malformed_records: MalformedRecordPolicy::default(),
            max_concurrent_loads: default_max_concurrent_loads(),
        }
    }
}

impl ComparisonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// go / python の2ソース構成（カレントディレクトリの結果ファイル）
    pub fn legacy() -> Self {
        Self::default()
            .with_source(SourceSpec::new("go", "go_results.json"))
            .with_source(SourceSpec::new("python", "python_results.json"))
            .with_baseline(LEGACY_BASELINE)
    }

    /// JSON文字列から読み込む（省略したフィールドはデフォルト値）
    pub fn from_json_str(json: &str) -> ComparisonResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            ComparisonError::configuration(format!("設定ファイルの解析に失敗しました: {e}"))
        })
    }

    pub fn load_from_file(path: &Path) -> ComparisonResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ComparisonError::configuration(format!(
                "設定ファイルを読み込めません: {} ({e})",
                path.display()
            ))
        })?;
        Self::from_json_str(&json)
    }

    pub fn with_source(mut self, source: SourceSpec) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_sources(mut self, sources: Vec<SourceSpec>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline = Some(baseline.into());
        self
    }

    pub fn with_comparands(mut self, comparands: Vec<String>) -> Self {
        self.comparands = comparands;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_malformed_records(mut self, policy: MalformedRecordPolicy) -> Self {
        self.malformed_records = policy;
        self
    }

    pub fn with_max_concurrent_loads(mut self, max_concurrent_loads: usize) -> Self {
        self.max_concurrent_loads = max_concurrent_loads;
        self
    }

    /// 指定IDのソースを任意ソースにする
    pub fn mark_optional(&mut self, source_id: &str) -> ComparisonResult<()> {
        let source = self
            .sources
            .iter_mut()
            .find(|source| source.id == source_id)
            .ok_or_else(|| {
                ComparisonError::configuration(format!(
                    "任意指定されたソースが定義されていません: {source_id}"
                ))
            })?;
        source.required = false;
        Ok(())
    }

    /// ソースが1つも無ければ go / python 構成を補う
    pub fn or_legacy(self) -> Self {
        if !self.sources.is_empty() {
            return self;
        }
        let legacy = Self::legacy();
        Self {
            sources: legacy.sources,
            baseline: self.baseline.or(legacy.baseline),
            ..self
        }
    }

    pub fn resolved_baseline(&self) -> Option<&str> {
        self.baseline
            .as_deref()
            .or_else(|| self.sources.first().map(|source| source.id.as_str()))
    }

    pub fn resolved_comparands(&self) -> Vec<String> {
        if !self.comparands.is_empty() {
            return self.comparands.clone();
        }
        let baseline = self.resolved_baseline();
        self.sources
            .iter()
            .filter(|source| Some(source.id.as_str()) != baseline)
            .map(|source| source.id.clone())
            .collect()
    }

    /// 設定の整合性を検証
    pub fn validate(&self) -> ComparisonResult<()> {
        if self.sources.is_empty() {
            return Err(ComparisonError::configuration(
                "比較対象のソースが1つもありません",
            ));
        }

        let mut seen = HashSet::new();
        for source in &self.sources {
            if source.id.trim().is_empty() {
                return Err(ComparisonError::configuration("ソースIDが空です"));
            }
            if !seen.insert(source.id.as_str()) {
                return Err(ComparisonError::configuration(format!(
                    "ソースIDが重複しています: {}",
                    source.id
                )));
            }
        }

        let baseline = self.resolved_baseline().unwrap_or_default();
        if !seen.contains(baseline) {
            return Err(ComparisonError::configuration(format!(
                "ベースラインがソースとして定義されていません: {baseline}"
            )));
        }

        let mut listed = HashSet::new();
        for comparand in &self.comparands {
            if !listed.insert(comparand.as_str()) {
                return Err(ComparisonError::configuration(format!(
                    "比較対象が重複しています: {comparand}"
                )));
            }
            if comparand == baseline {
                return Err(ComparisonError::configuration(format!(
                    "ベースライン自身を比較対象にはできません: {comparand}"
                )));
            }
            if !seen.contains(comparand.as_str()) {
                return Err(ComparisonError::configuration(format!(
                    "比較対象がソースとして定義されていません: {comparand}"
                )));
            }
        }

        if self.max_concurrent_loads == 0 {
            return Err(ComparisonError::configuration(
                "並列読み込み数は1以上である必要があります",
            ));
        }

        Ok(())
    }
}
