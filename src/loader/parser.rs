// 結果JSONのパース
//
// 入力は `[{"name": ..., "execution_time_ms": ...}, ...]` 形式の配列。
// 配列全体が読めない場合はソース単位のエラー、個々のレコードの不備は
// MalformedRecordPolicy に従って失敗または読み飛ばしとする。

use crate::core::{BenchmarkCase, ComparisonError, ComparisonResult, ResultSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 不正なレコードの扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedRecordPolicy {
    /// ソース全体の読み込みを失敗させる
    #[default]
    Fail,
    /// レコードを読み飛ばし、インデックスを記録する
    Skip,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    execution_time_ms: f64,
}

/// 1レコードを検証してBenchmarkCaseに変換
fn parse_record(value: Value) -> Result<BenchmarkCase, String> {
    if !value.is_object() {
        return Err("record is not an object".to_string());
    }

    let record: RawRecord = serde_json::from_value(value).map_err(|e| e.to_string())?;

    if !record.execution_time_ms.is_finite() {
        return Err("execution_time_ms is not finite".to_string());
    }
    if record.execution_time_ms < 0.0 {
        return Err(format!(
            "execution_time_ms must be non-negative, got {}",
            record.execution_time_ms
        ));
    }

    Ok(BenchmarkCase::new(record.name, record.execution_time_ms))
}

/// 1ソース分のバイト列をResultSetに変換
pub fn parse_result_set(
    source_id: &str,
    bytes: &[u8],
    policy: MalformedRecordPolicy,
) -> ComparisonResult<ResultSet> {
    let document: Value = serde_json::from_slice(bytes).map_err(|e| {
        ComparisonError::source_unavailable(
            source_id,
            anyhow::Error::new(e).context("invalid JSON"),
        )
    })?;

    let Value::Array(records) = document else {
        return Err(ComparisonError::source_unavailable(
            source_id,
            anyhow::anyhow!("expected a JSON array of benchmark records"),
        ));
    };

    let mut result_set = ResultSet::empty(source_id);
    for (index, value) in records.into_iter().enumerate() {
        match parse_record(value) {
            Ok(case) => result_set.insert(case),
            Err(reason) => match policy {
                MalformedRecordPolicy::Fail => {
                    return Err(ComparisonError::malformed_record(source_id, index, reason));
                }
                MalformedRecordPolicy::Skip => {
                    tracing::warn!(source_id, index, %reason, "skipping malformed record");
                    result_set.record_skipped(index);
                }
            },
        }
    }

    Ok(result_set)
}
