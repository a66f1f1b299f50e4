//! # 结果报告
//!
//! 把批次内容整理为表格行，用于终端展示和 CSV 导出。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `models/batch.rs`
//! - 使用 `tabled` 渲染表格，`csv` + `serde` 写入报告

use crate::error::{PdfStripError, Result};
use crate::models::{Batch, ProcessingItem};

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 报告中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ReportRow {
    #[tabled(rename = "ID")]
    pub id: u64,
    #[tabled(rename = "Original")]
    pub original_name: String,
    #[tabled(rename = "Bytes")]
    pub bytes: usize,
    #[tabled(rename = "New name")]
    pub new_name: String,
    #[tabled(rename = "Status")]
    pub status: &'static str,
    #[tabled(rename = "Reason")]
    pub reason: String,
}

impl From<&ProcessingItem> for ReportRow {
    fn from(item: &ProcessingItem) -> Self {
        let outcome = item.outcome();
        ReportRow {
            id: item.id().0,
            original_name: item.original_name().to_string(),
            bytes: item.original_bytes().len(),
            new_name: item.new_name().to_string(),
            status: if outcome.is_renamed() {
                "renamed"
            } else {
                "rejected"
            },
            reason: outcome
                .reason()
                .map(|r| r.to_string())
                .unwrap_or_default(),
        }
    }
}

/// 按批次顺序生成报告行
pub fn rows(batch: &Batch) -> Vec<ReportRow> {
    batch.items().iter().map(ReportRow::from).collect()
}

/// 渲染为终端表格
pub fn render_table(rows: &[ReportRow]) -> String {
    Table::new(rows).to_string()
}

/// 保存报告到 CSV
pub fn save_csv(rows: &[ReportRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(PdfStripError::CsvError)?;

    for row in rows {
        wtr.serialize(row).map_err(PdfStripError::CsvError)?;
    }

    wtr.flush().map_err(|e| PdfStripError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
