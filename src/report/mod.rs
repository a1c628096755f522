// レポートレンダラー
// ComparisonReportを人間向けの表（grid）または機械向けのJSONに変換する

pub mod grid;
pub mod json;

use crate::core::{ComparisonReport, ComparisonResult};
use serde::{Deserialize, Serialize};

pub use grid::{render_grid, render_summary, render_table, NOT_AVAILABLE};
pub use json::render_json;

/// 出力フォーマット
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Grid,
    Json,
}

/// 指定フォーマットでレポートをレンダリング
pub fn render_report(report: &ComparisonReport, format: ReportFormat) -> ComparisonResult<String> {
    match format {
        ReportFormat::Grid => Ok(render_grid(report)),
        ReportFormat::Json => render_json(report),
    }
}
