// サービス層 - 機能別の具象実装
// 設定、進捗報告、レポート出力先

pub mod config;
pub mod monitoring;
pub mod sink;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{ComparisonConfig, LEGACY_BASELINE};
pub use monitoring::{ConsoleProgressReporter, NoOpProgressReporter};
pub use sink::{FileSink, MemorySink, StdoutSink, STDOUT_TARGET};
