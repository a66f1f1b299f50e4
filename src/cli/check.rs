//! # check 子命令 CLI 定义
//!
//! 对给定文件名运行规范化，不读写任何文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/check.rs`

use clap::Args;

/// check 子命令参数
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File names to check
    #[arg(required = true)]
    pub names: Vec<String>,
}
