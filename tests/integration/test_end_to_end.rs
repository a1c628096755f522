// エンドツーエンド統合テスト
#[allow(dead_code)]
#[path = "../fixtures/mod.rs"]
mod fixtures;

use bench_compare::{
    cli::{build_config, execute_compare, CompareArgs},
    engine::ComparisonEngine,
    services::{FileSink, MemorySink, NoOpProgressReporter},
    storage::local::LocalStorageBackend,
    ComparisonConfig, ReportFormat, SourceSpec,
};
use fixtures::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn engine_with_memory_sink(
    sink: MemorySink,
) -> ComparisonEngine<LocalStorageBackend, NoOpProgressReporter, MemorySink> {
    ComparisonEngine::new(LocalStorageBackend::new(), NoOpProgressReporter::new(), sink)
}

#[tokio::test]
async fn test_go_python_reference_report() {
    let temp_dir = TempDir::new().unwrap();
    let config = ComparisonConfig::new()
        .with_source(write_results(temp_dir.path(), "go", &go_cases()))
        .with_source(write_results(temp_dir.path(), "python", &python_cases()));
    let sink = MemorySink::new();

    engine_with_memory_sink(sink.clone()).run(&config).await.unwrap();

    let expected = "\
+---------------+----------+-------------+--------------+
| Benchmark     |  go (ms) | python (ms) | python vs go |
+===============+==========+=============+==============+
| render_extra  |      N/A |    5.000000 |          N/A |
+---------------+----------+-------------+--------------+
| render_loop   | 4.000000 |    4.000000 |        1.00x |
+---------------+----------+-------------+--------------+
| render_simple | 1.000000 |    2.000000 |        2.00x |
+---------------+----------+-------------+--------------+

Summary:
python vs go: average ratio 1.50x over 2 benchmark(s) (higher means go is faster)
";
    assert_eq!(sink.last_report().unwrap(), expected);
}

#[tokio::test]
async fn test_three_sources_with_independent_ratio_columns() {
    let temp_dir = TempDir::new().unwrap();
    let config = ComparisonConfig::new()
        .with_source(write_results(temp_dir.path(), "go", &go_cases()))
        .with_source(write_results(temp_dir.path(), "python", &python_cases()))
        .with_source(write_results(temp_dir.path(), "pongo2", &pongo2_cases()));
    let sink = MemorySink::new();

    let summary = engine_with_memory_sink(sink.clone())
        .run(&config)
        .await
        .unwrap();

    assert_eq!(summary.total_rows, 3);
    let report = sink.last_report().unwrap();
    let header = report.lines().nth(1).unwrap();
    assert!(header.contains("python vs go"));
    assert!(header.contains("pongo2 vs go"));
    assert!(header.find("python (ms)") < header.find("pongo2 (ms)"));

    // pongo2: 0.5/1.0 と 6.0/4.0 → 平均 1.00x
    assert!(report.contains("pongo2 vs go: average ratio 1.00x over 2 benchmark(s)"));
    assert!(report.contains("python vs go: average ratio 1.50x over 2 benchmark(s)"));
}

#[tokio::test]
async fn test_source_order_does_not_change_rows() {
    let temp_dir = TempDir::new().unwrap();
    let go = write_results(temp_dir.path(), "go", &go_cases());
    let python = write_results(temp_dir.path(), "python", &python_cases());

    let forward = MemorySink::new();
    engine_with_memory_sink(forward.clone())
        .run(
            &ComparisonConfig::new()
                .with_source(go.clone())
                .with_source(python.clone())
                .with_format(ReportFormat::Json),
        )
        .await
        .unwrap();

    let backward = MemorySink::new();
    engine_with_memory_sink(backward.clone())
        .run(
            &ComparisonConfig::new()
                .with_source(python)
                .with_source(go)
                .with_baseline("go")
                .with_format(ReportFormat::Json),
        )
        .await
        .unwrap();

    let forward: Value = serde_json::from_str(&forward.last_report().unwrap()).unwrap();
    let backward: Value = serde_json::from_str(&backward.last_report().unwrap()).unwrap();
    assert_eq!(forward["rows"], backward["rows"]);
    assert_eq!(forward["summary"], backward["summary"]);
}

#[tokio::test]
async fn test_repeated_runs_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("comparison.txt");
    let config = ComparisonConfig::new()
        .with_source(write_results(temp_dir.path(), "go", &go_cases()))
        .with_source(write_results(temp_dir.path(), "python", &python_cases()))
        .with_source(write_results(temp_dir.path(), "pongo2", &pongo2_cases()))
        .with_max_concurrent_loads(3);

    let mut outputs = Vec::new();
    for _ in 0..5 {
        let engine = ComparisonEngine::new(
            LocalStorageBackend::new(),
            NoOpProgressReporter::new(),
            FileSink::new(LocalStorageBackend::new(), &output),
        );
        engine.run(&config).await.unwrap();
        outputs.push(fs::read(&output).unwrap());
    }

    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn test_json_report_format() {
    let temp_dir = TempDir::new().unwrap();
    let config = ComparisonConfig::new()
        .with_source(write_results(temp_dir.path(), "go", &go_cases()))
        .with_source(write_results(temp_dir.path(), "python", &python_cases()))
        .with_format(ReportFormat::Json);
    let sink = MemorySink::new();

    engine_with_memory_sink(sink.clone()).run(&config).await.unwrap();

    let report: Value = serde_json::from_str(&sink.last_report().unwrap()).unwrap();
    assert_eq!(report["sources"], serde_json::json!(["go", "python"]));
    assert_eq!(report["rows"][0]["name"], "render_extra");
    assert!(report["rows"][0]["ratios"]["python"].is_null());
    assert_eq!(report["rows"][2]["ratios"]["python"], 2.0);
    assert_eq!(report["summary"]["entries"][0]["mean_ratio"], 1.5);
}

#[tokio::test]
async fn test_compare_command_with_results_dir() {
    let temp_dir = TempDir::new().unwrap();
    let results_dir = temp_dir.path().join("results");
    fs::create_dir_all(&results_dir).unwrap();
    write_results(&results_dir, "go", &go_cases());
    write_results(&results_dir, "python", &python_cases());
    write_results(&results_dir, "pongo2", &pongo2_cases());
    let output = temp_dir.path().join("reports").join("comparison.txt");

    let args = CompareArgs {
        results_dir: Some(results_dir),
        baseline: Some("go".to_string()),
        comparands: vec!["python".to_string()],
        output: Some(output.clone()),
        quiet: true,
        ..CompareArgs::default()
    };
    execute_compare(args).await.unwrap();

    let report = fs::read_to_string(&output).unwrap();
    // 発見順（ID順）で列が並ぶ
    let header = report.lines().nth(1).unwrap();
    assert!(header.find("go (ms)") < header.find("pongo2 (ms)"));
    assert!(header.find("pongo2 (ms)") < header.find("python (ms)"));
    assert!(!header.contains("pongo2 vs go"));
    assert!(report.contains("python vs go: average ratio 1.50x"));
}

#[tokio::test]
async fn test_config_file_layering() {
    let temp_dir = TempDir::new().unwrap();
    let go = write_results(temp_dir.path(), "go", &go_cases());
    let python = write_results(temp_dir.path(), "python", &python_cases());
    let config_path = temp_dir.path().join("compare.json");
    let file_config = ComparisonConfig::new()
        .with_sources(vec![go, python])
        .with_format(ReportFormat::Json);
    fs::write(&config_path, serde_json::to_string(&file_config).unwrap()).unwrap();

    let args = CompareArgs {
        config: Some(config_path),
        format: Some(ReportFormat::Grid),
        ..CompareArgs::default()
    };
    let config = build_config(&args, &LocalStorageBackend::new())
        .await
        .unwrap();

    assert_eq!(config.format, ReportFormat::Grid);
    assert_eq!(
        config.sources.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
        vec!["go", "python"]
    );
}

#[tokio::test]
async fn test_single_source_report() {
    let temp_dir = TempDir::new().unwrap();
    let config =
        ComparisonConfig::new().with_source(write_results(temp_dir.path(), "go", &go_cases()));
    let sink = MemorySink::new();

    let summary = engine_with_memory_sink(sink.clone())
        .run(&config)
        .await
        .unwrap();

    assert_eq!(summary.total_rows, 2);
    let report = sink.last_report().unwrap();
    assert!(report.contains("No comparand sources to compare against go"));
    assert!(!report.contains(" vs go |"));
}

#[tokio::test]
async fn test_empty_sources_render_header_only() {
    let temp_dir = TempDir::new().unwrap();
    let config = ComparisonConfig::new()
        .with_source(write_results(temp_dir.path(), "go", &[]))
        .with_source(write_results(temp_dir.path(), "python", &[]));
    let sink = MemorySink::new();

    let summary = engine_with_memory_sink(sink.clone())
        .run(&config)
        .await
        .unwrap();

    assert_eq!(summary.total_rows, 0);
    let report = sink.last_report().unwrap();
    assert!(report.contains("python vs go: no valid comparisons"));
    assert_eq!(report.lines().filter(|l| l.starts_with('|')).count(), 1);
}

#[test]
fn test_source_spec_serialization_in_config() {
    let spec = SourceSpec::new("pongo2", "pongo2_results.json").optional();
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["required"], false);
}
