// グリッド形式の表レンダリング
//
// 例:
// +--------------+----------+-------------+--------------+
// | Benchmark    |  go (ms) | python (ms) | python vs go |
// +==============+==========+=============+==============+
// | render_loop  | 4.000000 |    4.000000 |        1.00x |
// +--------------+----------+-------------+--------------+

use crate::core::{ComparisonReport, Summary};

/// 欠損値の表示
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

pub fn format_duration(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |ms| format!("{ms:.6}"))
}

pub fn format_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |ratio| format!("{ratio:.2}x"))
}

pub fn duration_header(source_id: &str) -> String {
    format!("{source_id} (ms)")
}

pub fn ratio_header(comparand: &str, baseline: &str) -> String {
    format!("{comparand} vs {baseline}")
}

fn border(widths: &[usize], fill: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|width| fill.to_string().repeat(width + 2))
        .collect();
    format!("+{}+", segments.join("+"))
}

fn line(cells: &[String], widths: &[usize], aligns: &[Align]) -> String {
    let segments: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(aligns)
        .map(|((cell, &width), align)| match align {
            Align::Left => format!(" {cell:<width$} "),
            Align::Right => format!(" {cell:>width$} "),
        })
        .collect();
    format!("|{}|", segments.join("|"))
}

/// 表部分のみをレンダリング（末尾改行なし）
///
/// 列幅は文字数（`char`単位）で数える。全角文字（CJKなど）を含む名前では
/// 端末上の列がずれる。
pub fn render_table(report: &ComparisonReport) -> String {
    let mut headers = vec!["Benchmark".to_string()];
    headers.extend(report.sources.iter().map(|id| duration_header(id)));
    headers.extend(
        report
            .comparands
            .iter()
            .map(|comparand| ratio_header(comparand, &report.baseline)),
    );

    let body: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.name.clone()];
            cells.extend(report.sources.iter().map(|id| format_duration(row.value(id))));
            cells.extend(
                report
                    .comparands
                    .iter()
                    .map(|comparand| format_ratio(row.ratio(comparand))),
            );
            cells
        })
        .collect();

    let mut aligns = vec![Align::Left];
    aligns.resize(headers.len(), Align::Right);

    let widths: Vec<usize> = (0..headers.len())
        .map(|column| {
            std::iter::once(&headers[column])
                .chain(body.iter().map(|cells| &cells[column]))
                // `{:<width$}` の詰め方に合わせて文字数で数える
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = vec![border(&widths, '-'), line(&headers, &widths, &aligns)];
    if body.is_empty() {
        lines.push(border(&widths, '-'));
    } else {
        lines.push(border(&widths, '='));
        for cells in &body {
            lines.push(line(cells, &widths, &aligns));
            lines.push(border(&widths, '-'));
        }
    }

    lines.join("\n")
}

/// サマリー部分をレンダリング（"Summary:" 見出し + 比較対象ごとに1行）
pub fn render_summary(summary: &Summary) -> String {
    let mut lines = vec!["Summary:".to_string()];

    if summary.entries.is_empty() {
        lines.push(format!(
            "No comparand sources to compare against {}",
            summary.baseline
        ));
    }

    for entry in &summary.entries {
        let label = ratio_header(&entry.comparand, &summary.baseline);
        match entry.mean_ratio {
            Some(mean) => lines.push(format!(
                "{label}: average ratio {} over {} benchmark(s) (higher means {} is faster)",
                format_ratio(Some(mean)),
                entry.valid_comparisons,
                summary.baseline
            )),
            None => lines.push(format!("{label}: no valid comparisons")),
        }
    }

    lines.join("\n")
}

/// 表 + 空行 + サマリー
pub fn render_grid(report: &ComparisonReport) -> String {
    format!(
        "{}\n\n{}\n",
        render_table(report),
        render_summary(&report.summary)
    )
}
