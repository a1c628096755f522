use super::compare::run_with_config;
use crate::cli::args::InspectArgs;
use crate::loader::{MalformedRecordPolicy, SourceSpec};
use crate::services::{ComparisonConfig, ConsoleProgressReporter};
use crate::storage::RESULT_FILE_SUFFIX;
use anyhow::Result;
use std::path::Path;

/// ファイル名からソースIDを推定（`go_results.json` → `go`）
pub fn infer_source_id(file: &Path) -> String {
    let name = file.file_name().and_then(|name| name.to_str()).unwrap_or("");

    name.strip_suffix(RESULT_FILE_SUFFIX)
        .filter(|id| !id.is_empty())
        .or_else(|| file.file_stem().and_then(|stem| stem.to_str()))
        .filter(|id| !id.is_empty())
        .unwrap_or("results")
        .to_string()
}

/// inspectコマンド（1ソースのみ、比較対象なし）
pub async fn execute_inspect(args: InspectArgs) -> Result<()> {
    let id = args
        .id
        .clone()
        .unwrap_or_else(|| infer_source_id(&args.file));

    let mut config = ComparisonConfig::new()
        .with_source(SourceSpec::new(id, &args.file))
        .with_format(args.format);
    if let Some(output) = &args.output {
        config = config.with_output(output);
    }
    if args.skip_malformed {
        config = config.with_malformed_records(MalformedRecordPolicy::Skip);
    }

    run_with_config(&config, ConsoleProgressReporter::quiet()).await
}
