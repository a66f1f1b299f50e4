//! # check 命令实现
//!
//! 对给定文件名运行规范化并打印结果，不读写文件。
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 使用 `parsers/filename.rs`
//! - 使用 `utils/output.rs`

use crate::cli::check::CheckArgs;
use pdfstrip::error::Result;
use pdfstrip::parsers;
use pdfstrip::utils::output;

/// 执行 check 命令
pub fn execute(args: CheckArgs) -> Result<()> {
    let mut accepted = 0;

    for name in &args.names {
        match parsers::normalize(name) {
            Ok(new_name) => {
                output::print_rename(name, &new_name);
                accepted += 1;
            }
            Err(reason) => output::print_rejected(name, &reason.to_string()),
        }
    }

    output::print_summary(&format!(
        "{} of {} name(s) would be renamed",
        accepted,
        args.names.len()
    ));

    Ok(())
}
