//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `parsers/`, `models/`, `utils/`
//! - 子模块: rename, check

pub mod check;
pub mod rename;

use crate::cli::Commands;
use pdfstrip::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Rename(args) => rename::execute(args),
        Commands::Check(args) => check::execute(args),
    }
}
