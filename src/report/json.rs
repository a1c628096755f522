// JSON形式のレポート出力

use crate::core::{ComparisonReport, ComparisonResult};

/// 比較結果を整形済みJSONで出力（末尾改行付き）
///
/// 行・値はBTreeMapで保持しているため、キー順は常に一定。
pub fn render_json(report: &ComparisonReport) -> ComparisonResult<String> {
    let mut rendered = serde_json::to_string_pretty(report)?;
    rendered.push('\n');
    Ok(rendered)
}
