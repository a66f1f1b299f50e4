//! # rename 子命令 CLI 定义
//!
//! 批量重命名 PDF，可从 zip 归档中读取并打包输出
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use pdfstrip::batch::collector::DEFAULT_PATTERN;

use clap::Args;
use std::path::PathBuf;

/// rename 子命令参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Input PDF files, zip archives or directories
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory for renamed files or the packaged archive
    #[arg(short, long, default_value = ".", env = "PDFSTRIP_OUTPUT_DIR")]
    pub output: PathBuf,

    /// Glob patterns for files inside input directories (comma separated)
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Package all renamed files into a single zip archive
    #[arg(short, long, default_value_t = false)]
    pub zip: bool,

    /// Remove items by ID before writing output (repeatable)
    #[arg(short, long = "exclude", value_name = "ID")]
    pub exclude: Vec<u64>,

    /// Write a per-file CSV report
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Show the results without writing any files
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Number of parallel file readers (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "PDFSTRIP_JOBS")]
    pub jobs: usize,
}
