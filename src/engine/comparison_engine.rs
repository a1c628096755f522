// ComparisonEngine - 読み込みから出力までのオーケストレーション
//
// loader → reconciler → ratio engine → renderer → sink の一方向パイプライン。
// 実行間で状態を持たない。

use super::loading::load_sources;
use crate::{
    comparison::compare,
    core::{ComparisonError, ComparisonResult, ProgressReporter, ReportSink, ResultSet, RunSummary},
    loader::ResultSetLoader,
    report::render_report,
    services::ComparisonConfig,
    storage::StorageBackend,
};
use std::sync::Arc;

/// 依存関係をコンストラクタで受け取る比較エンジン
pub struct ComparisonEngine<S, R, K> {
    storage: Arc<S>,
    reporter: Arc<R>,
    sink: Arc<K>,
}

impl<S, R, K> ComparisonEngine<S, R, K>
where
    S: StorageBackend + 'static,
    R: ProgressReporter,
    K: ReportSink,
{
    pub fn new(storage: S, reporter: R, sink: K) -> Self {
        Self {
            storage: Arc::new(storage),
            reporter: Arc::new(reporter),
            sink: Arc::new(sink),
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// 設定に従って1回比較を実行
    ///
    /// 必須ソースが1つでも読めなければ、宣言順で最初の失敗を返し何も出力しない。
    /// 任意ソースの失敗は空のResultSetとして続行する。
    pub async fn run(&self, config: &ComparisonConfig) -> ComparisonResult<RunSummary> {
        config.validate()?;

        let baseline = config
            .resolved_baseline()
            .ok_or_else(|| ComparisonError::configuration("ベースラインが決定できません"))?
            .to_string();
        let comparands = config.resolved_comparands();

        tracing::info!(
            sources = config.sources.len(),
            baseline = %baseline,
            comparands = ?comparands,
            "starting comparison"
        );
        self.reporter.report_started(config.sources.len()).await;

        let loader = Arc::new(
            ResultSetLoader::new(Arc::clone(&self.storage)).with_policy(config.malformed_records),
        );
        let outcomes = load_sources(loader, &config.sources, config.max_concurrent_loads).await?;

        let mut result_sets = Vec::with_capacity(outcomes.len());
        let mut loaded_sources = Vec::new();
        let mut degraded_sources = Vec::new();
        let mut skipped_records = 0;
        let mut first_failure = None;

        for outcome in outcomes {
            let source_id = outcome.spec.id;
            match outcome.result {
                Ok(set) => {
                    for &record_index in set.skipped_records() {
                        self.reporter
                            .report_record_skipped(&source_id, record_index)
                            .await;
                    }
                    skipped_records += set.skipped_records().len();
                    self.reporter.report_source_loaded(&source_id, set.len()).await;
                    loaded_sources.push(source_id);
                    result_sets.push(set);
                }
                Err(error) => {
                    let required = outcome.spec.required || !error.is_recoverable();
                    self.reporter
                        .report_source_failed(&source_id, &error.to_string(), required)
                        .await;

                    if required {
                        // 最初の失敗はmainがエラーとして表示する
                        if first_failure.is_none() {
                            tracing::debug!(
                                source_id = %source_id,
                                error = %error,
                                "required source failed"
                            );
                            first_failure = Some(error);
                        } else {
                            tracing::error!(
                                source_id = %source_id,
                                error = %error,
                                "another required source failed"
                            );
                        }
                    } else {
                        tracing::warn!(source_id = %source_id, error = %error, "optional source degraded");
                        result_sets.push(ResultSet::empty(&source_id));
                        degraded_sources.push(source_id);
                    }
                }
            }
        }

        if let Some(error) = first_failure {
            return Err(error);
        }

        let report = compare(&result_sets, &baseline, &comparands);
        let rendered = render_report(&report, config.format)?;
        self.sink.write_report(&rendered).await?;

        let target = self.sink.target();
        self.reporter.report_completed(report.rows.len(), &target).await;
        tracing::info!(rows = report.rows.len(), target = %target, "comparison finished");

        Ok(RunSummary {
            total_rows: report.rows.len(),
            loaded_sources,
            degraded_sources,
            skipped_records,
            target,
        })
    }
}
