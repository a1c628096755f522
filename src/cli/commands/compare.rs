use crate::cli::args::CompareArgs;
use crate::core::{ComparisonError, ProgressReporter, ReportSink};
use crate::engine::ComparisonEngine;
use crate::loader::{discover_sources, MalformedRecordPolicy};
use crate::services::{ComparisonConfig, ConsoleProgressReporter, FileSink, StdoutSink};
use crate::storage::local::LocalStorageBackend;
use crate::storage::StorageBackend;
use anyhow::Result;
use std::path::Path;

/// デフォルト → 設定ファイル → CLIフラグの順に重ねた設定を作る
pub async fn build_config<S>(args: &CompareArgs, storage: &S) -> Result<ComparisonConfig>
where
    S: StorageBackend,
{
    let mut config = match &args.config {
        Some(path) => ComparisonConfig::load_from_file(path)?,
        None => ComparisonConfig::default(),
    };

    if !args.sources.is_empty() {
        config.sources = args.sources.clone();
    }

    if let Some(dir) = &args.results_dir {
        let directory = dir.to_string_lossy();
        let discovered = discover_sources(storage, &directory).await?;
        if discovered.is_empty() {
            return Err(ComparisonError::configuration(format!(
                "結果ファイル (*_results.json) が見つかりません: {directory}"
            ))
            .into());
        }
        for source in discovered {
            // 明示指定されたソースを優先
            if !config.sources.iter().any(|existing| existing.id == source.id) {
                config.sources.push(source);
            }
        }
    }

    if let Some(baseline) = &args.baseline {
        config.baseline = Some(baseline.clone());
    }
    if !args.comparands.is_empty() {
        config.comparands = args.comparands.clone();
    }
    if let Some(output) = &args.output {
        config.output = Some(output.clone());
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    if args.skip_malformed {
        config.malformed_records = MalformedRecordPolicy::Skip;
    }
    if let Some(jobs) = args.jobs {
        config.max_concurrent_loads = jobs;
    }

    let mut config = config.or_legacy();
    for id in &args.optional {
        config.mark_optional(id)?;
    }

    Ok(config)
}

/// 出力先に応じたシンクを作成
pub fn create_sink(output: Option<&Path>) -> Box<dyn ReportSink> {
    match output {
        Some(path) => Box::new(FileSink::new(LocalStorageBackend::new(), path)),
        None => Box::new(StdoutSink::new()),
    }
}

/// 組み立て済みの設定で比較を実行
pub async fn run_with_config<R>(config: &ComparisonConfig, reporter: R) -> Result<()>
where
    R: ProgressReporter,
{
    let engine = ComparisonEngine::new(
        LocalStorageBackend::new(),
        reporter,
        create_sink(config.output.as_deref()),
    );

    let summary = engine.run(config).await?;
    if !summary.degraded_sources.is_empty() {
        tracing::warn!(degraded = ?summary.degraded_sources, "some optional sources were unavailable");
    }
    Ok(())
}

/// compareコマンド
pub async fn execute_compare(args: CompareArgs) -> Result<()> {
    let storage = LocalStorageBackend::new();
    let config = build_config(&args, &storage).await?;

    tracing::debug!(?config, "resolved configuration");

    let reporter = if args.quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };
    run_with_config(&config, reporter).await
}
