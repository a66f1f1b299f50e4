//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `rename`: 批量重命名 PDF（支持 zip 输入与打包输出）
//! - `check`: 仅检查文件名的重命名结果
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: rename, check

pub mod check;
pub mod rename;

use clap::{Parser, Subcommand};

/// pdfstrip - 去除 PDF 文件名的管理前缀
#[derive(Parser)]
#[command(name = "pdfstrip")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Batch-rename PDFs by stripping the first four underscore-delimited fields",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase diagnostic log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Rename PDF files and PDFs inside zip archives
    Rename(rename::RenameArgs),

    /// Show how file names would be renamed without touching any file
    Check(check::CheckArgs),
}
