// エンジン層 - 並列読み込みとオーケストレーション
// サービス層と比較ロジックを組み合わせて1回の比較実行を提供

pub mod comparison_engine;
pub mod loading;

// 公開API
pub use comparison_engine::ComparisonEngine;
pub use loading::{load_sources, LoadOutcome};
