// テストユーティリティ
// 結果ファイルの生成ヘルパーと記録用の進捗レポーター


pub use mocks::*;

use bench_compare::SourceSpec;
use std::fs;
use std::path::{Path, PathBuf};

/// `[{"name", "execution_time_ms"}]` 形式のJSONを組み立てる
pub fn results_json(cases: &[(&str, f64)]) -> String {
    let records: Vec<serde_json::Value> = cases
        .iter()
        .map(|(name, duration)| serde_json::json!({"name": name, "execution_time_ms": duration}))
        .collect();
    serde_json::to_string_pretty(&records).unwrap()
}

/// `<id>_results.json` を書き出してソース定義を返す
pub fn write_results(dir: &Path, id: &str, cases: &[(&str, f64)]) -> SourceSpec {
    let path = dir.join(format!("{id}_results.json"));
    fs::write(&path, results_json(cases)).unwrap();
    SourceSpec::new(id, path)
}

/// 任意の内容で結果ファイルを書き出す（不正データ用）
pub fn write_raw_results(dir: &Path, id: &str, contents: &str) -> SourceSpec {
    let path = dir.join(format!("{id}_results.json"));
    fs::write(&path, contents).unwrap();
    SourceSpec::new(id, path)
}

pub fn go_cases() -> Vec<(&'static str, f64)> {
    vec![("render_simple", 1.0), ("render_loop", 4.0)]
}

pub fn python_cases() -> Vec<(&'static str, f64)> {
    vec![
        ("render_simple", 2.0),
        ("render_loop", 4.0),
        ("render_extra", 5.0),
    ]
}

pub fn pongo2_cases() -> Vec<(&'static str, f64)> {
    vec![("render_simple", 0.5), ("render_loop", 6.0)]
}

pub fn missing_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{id}_missing.json"))
}
