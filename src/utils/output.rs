//! # 终端输出
//!
//! 每行以一个状态标签开头，标签对应重命名流程中的一种事件。
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `main.rs` 使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};

/// 行首状态标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Renamed,
    Rejected,
    Excluded,
    Skipped,
    Written,
    Packaged,
    Info,
    Warning,
    Error,
    Summary,
}

impl Tag {
    pub fn label(self) -> &'static str {
        match self {
            Tag::Renamed => "[RENAMED]",
            Tag::Rejected => "[REJECTED]",
            Tag::Excluded => "[EXCLUDED]",
            Tag::Skipped => "[SKIPPED]",
            Tag::Written => "[WRITTEN]",
            Tag::Packaged => "[ZIP]",
            Tag::Info => "[INFO]",
            Tag::Warning => "[WARN]",
            Tag::Error => "[ERROR]",
            Tag::Summary => "[SUMMARY]",
        }
    }

    fn styled(self) -> ColoredString {
        let label = self.label();
        match self {
            Tag::Renamed | Tag::Written | Tag::Packaged => label.green().bold(),
            Tag::Rejected | Tag::Error => label.red().bold(),
            Tag::Excluded | Tag::Skipped => label.dimmed(),
            Tag::Info => label.blue().bold(),
            Tag::Warning => label.yellow().bold(),
            Tag::Summary => label.cyan().bold(),
        }
    }
}

/// 组装一行带标签的输出
pub fn tagged(tag: Tag, msg: &str) -> String {
    format!("{} {}", tag.styled(), msg)
}

/// 重命名映射行：`旧名 -> 新名`
pub fn rename_line(from: &str, to: &str) -> String {
    tagged(Tag::Renamed, &format!("{} {} {}", from.dimmed(), "->".cyan(), to))
}

/// 拒绝行：`文件名: 原因`
pub fn rejected_line(name: &str, reason: &str) -> String {
    tagged(Tag::Rejected, &format!("{}: {}", name, reason.yellow()))
}

pub fn print_rename(from: &str, to: &str) {
    println!("{}", rename_line(from, to));
}

pub fn print_rejected(name: &str, reason: &str) {
    println!("{}", rejected_line(name, reason));
}

/// 按 ID 排除的条目
pub fn print_excluded(id: u64, name: &str) {
    println!("{}", tagged(Tag::Excluded, &format!("#{} '{}'", id, name)));
}

/// 未写出的文件（已存在、不是普通文件名、本身是输入等）
pub fn print_skipped(msg: &str) {
    println!("{}", tagged(Tag::Skipped, msg));
}

pub fn print_written(msg: &str) {
    println!("{}", tagged(Tag::Written, msg));
}

/// 输出归档已写入
pub fn print_packaged(entry_count: usize, path: &str) {
    println!(
        "{}",
        tagged(
            Tag::Packaged,
            &format!("{} file(s) packaged into '{}'", entry_count, path)
        )
    );
}

pub fn print_info(msg: &str) {
    println!("{}", tagged(Tag::Info, msg));
}

pub fn print_warning(msg: &str) {
    println!("{}", tagged(Tag::Warning, msg));
}

pub fn print_error(msg: &str) {
    eprintln!("{}", tagged(Tag::Error, msg));
}

pub fn print_summary(msg: &str) {
    println!("{}", tagged(Tag::Summary, msg));
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}
