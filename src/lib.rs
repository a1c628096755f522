// ベンチマーク結果比較ツール
//
// 複数のテンプレートエンジン実装が出力した計測結果(JSON)を読み込み、
// ベンチマーク名で突き合わせてベースライン比を計算し、表とサマリーを出力する。

pub mod cli;
pub mod comparison;
pub mod core;
pub mod engine;
pub mod loader;
pub mod report;
pub mod services;
pub mod storage;

pub use crate::comparison::compare;
pub use crate::core::{
    BenchmarkCase, ComparisonError, ComparisonReport, ComparisonResult, ComparisonRow, ResultSet,
    RunSummary,
};
pub use crate::engine::ComparisonEngine;
pub use crate::loader::{MalformedRecordPolicy, ResultSetLoader, SourceSpec};
pub use crate::report::{render_report, ReportFormat};
pub use crate::services::ComparisonConfig;
