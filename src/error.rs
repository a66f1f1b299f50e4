//! # 统一错误处理模块
//!
//! 定义 pdfstrip 的操作级错误类型，使用 `thiserror` 派生。
//! 单个文件的重命名失败不属于这里，见 `models::RejectReason`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - `error_chain` 被 `main.rs` 用于打印完整的错误原因链
//! - 无外部模块依赖

use thiserror::Error;

/// pdfstrip 统一错误类型
#[derive(Error, Debug)]
pub enum PdfStripError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 归档错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to decode archive: {reason}")]
    ArchiveDecode { reason: String },

    #[error("Failed to build output archive: {reason}")]
    ArchiveEncode { reason: String },

    #[error("Nothing to package: the batch has no renamed documents")]
    NothingToPackage,

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Refusing to overwrite input file: {path}")]
    OutputIsInput { path: String },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write CSV report")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PdfStripError>;

/// 拼接错误及其全部底层原因，形如 `外层: 原因: 更底层原因`
pub fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
