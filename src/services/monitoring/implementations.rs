// 進捗監視の具象実装
//
// レポート本体が標準出力に出る場合があるため、進捗は常に標準エラー出力へ書く。

use crate::core::ProgressReporter;
use async_trait::async_trait;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_sources: usize) {
        if !self.quiet {
            eprintln!("🚀 Loading {total_sources} result sources...");
        }
    }

    async fn report_source_loaded(&self, source_id: &str, cases: usize) {
        if !self.quiet {
            eprintln!("📊 {source_id}: {cases} benchmark(s)");
        }
    }

    async fn report_record_skipped(&self, source_id: &str, record_index: usize) {
        // 読み飛ばしは黙って行わない（quietでも表示）
        eprintln!("⚠️  {source_id}: skipped malformed record #{record_index}");
    }

    async fn report_source_failed(&self, source_id: &str, error: &str, required: bool) {
        if self.quiet {
            return;
        }
        if let Some(message) = failure_message(source_id, error, required) {
            eprintln!("{message}");
        }
    }

    async fn report_completed(&self, total_rows: usize, target: &str) {
        if !self.quiet {
            eprintln!("✅ Completed! {total_rows} benchmark(s) written to {target}");
        }
    }
}

/// ソース読み込み失敗の表示文言
///
/// 必須ソースの失敗は実行全体のエラーとしてmainが表示するためNone。
fn failure_message(source_id: &str, error: &str, required: bool) -> Option<String> {
    (!required)
        .then(|| format!("⚠️  Optional source {source_id} unavailable, reported as N/A: {error}"))
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_sources: usize) {}

    async fn report_source_loaded(&self, _source_id: &str, _cases: usize) {}

    async fn report_record_skipped(&self, _source_id: &str, _record_index: usize) {}

    async fn report_source_failed(&self, _source_id: &str, _error: &str, _required: bool) {}

    async fn report_completed(&self, _total_rows: usize, _target: &str) {}
}
