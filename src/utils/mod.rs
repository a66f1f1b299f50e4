//! # 工具函数模块
//!
//! 提供美化输出、进度条、结果表格与 CSV 报告。
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `batch/` 模块使用
//! - 子模块: output, progress, report

pub mod output;
pub mod progress;
pub mod report;
