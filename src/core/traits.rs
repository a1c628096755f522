// 比較パイプラインのトレイト定義
// 出力先と進捗報告の抽象化インターフェースを定義

use super::error::ComparisonResult;
use async_trait::async_trait;
use mockall::automock;

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 読み込み開始時の報告
    async fn report_started(&self, total_sources: usize);

    /// ソース読み込み完了の報告
    async fn report_source_loaded(&self, source_id: &str, cases: usize);

    /// レコード読み飛ばしの報告
    async fn report_record_skipped(&self, source_id: &str, record_index: usize);

    /// ソース読み込み失敗の報告
    async fn report_source_failed(&self, source_id: &str, error: &str, required: bool);

    /// 処理完了時の報告
    async fn report_completed(&self, total_rows: usize, target: &str);
}

/// レンダリング済みレポートの出力先を抽象化するトレイト
#[automock]
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// レポート全体を書き込む（途中までの書き込みは成功扱いにしない）
    async fn write_report(&self, report: &str) -> ComparisonResult<()>;

    /// 出力先の表示名
    fn target(&self) -> String;
}

// ReportSink for Box<dyn ReportSink>
#[async_trait]
impl ReportSink for Box<dyn ReportSink> {
    async fn write_report(&self, report: &str) -> ComparisonResult<()> {
        self.as_ref().write_report(report).await
    }

    fn target(&self) -> String {
        self.as_ref().target()
    }
}
