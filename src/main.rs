//! # pdfstrip - PDF 文件名前缀批量去除工具
//!
//! 上游系统导出的 PDF 文件名形如
//! `<人名>_<人名>_<日期>_<金额>_<真实文件名>.pdf`，
//! 本工具去掉前四个字段，可直接处理 zip 归档并重新打包。
//!
//! ## 子命令
//! - `rename` - 批量重命名（PDF / zip / 目录输入）
//! - `check`  - 只检查文件名，不读写文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   └── commands/   (命令执行逻辑)
//!         └── pdfstrip (核心库: batch/, archive/, parsers/, models/, utils/, error.rs)
//! ```

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use log::LevelFilter;
use pdfstrip::error::error_chain;
use pdfstrip::utils::output;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = commands::run(cli.command) {
        output::print_error(&error_chain(&e));
        std::process::exit(1);
    }
}

/// 初始化诊断日志，`RUST_LOG` 优先于 `-v`
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
