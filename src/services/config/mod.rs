// 設定管理機能
// 比較対象ソース、ベースライン、出力先、並列度などの実行設定

pub mod implementations;

// 公開API
pub use implementations::{ComparisonConfig, LEGACY_BASELINE};
