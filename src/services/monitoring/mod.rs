// 進捗監視機能
// ソース読み込み、レコード読み飛ばし、失敗、完了の通知

pub mod implementations;

// 公開API
pub use implementations::{ConsoleProgressReporter, NoOpProgressReporter};
