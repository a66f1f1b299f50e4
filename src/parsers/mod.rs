//! # 解析器模块
//!
//! 文件名规范化，以及按文件名后缀对输入进行分类。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: filename

pub mod filename;

pub use filename::normalize;

const PDF_EXTENSION: &str = ".pdf";
const ZIP_EXTENSION: &str = ".zip";
const PDF_MEDIA_TYPE: &str = "application/pdf";

/// 输入类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Pdf,
    Archive,
    Unsupported,
}

/// 按文件名后缀（主）和声明的媒体类型（辅）分类
pub fn classify(name: &str, media_type: Option<&str>) -> InputKind {
    if has_suffix_ignore_case(name, ZIP_EXTENSION) {
        InputKind::Archive
    } else if is_pdf_name(name)
        || media_type.is_some_and(|m| m.trim().eq_ignore_ascii_case(PDF_MEDIA_TYPE))
    {
        InputKind::Pdf
    } else {
        InputKind::Unsupported
    }
}

/// 文件名是否以 `.pdf` 结尾（不区分大小写）
pub fn is_pdf_name(name: &str) -> bool {
    has_suffix_ignore_case(name, PDF_EXTENSION)
}

/// 去掉末尾的 `.pdf`（不区分大小写），没有则返回 `None`
pub fn strip_pdf_extension(name: &str) -> Option<&str> {
    if has_suffix_ignore_case(name, PDF_EXTENSION) {
        Some(&name[..name.len() - PDF_EXTENSION.len()])
    } else {
        None
    }
}

/// 归档基础名：去掉目录部分和最后一个扩展名
pub fn archive_base_name(name: &str) -> &str {
    let file_name = name.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(name);
    match file_name.rfind('.') {
        Some(0) | None => file_name,
        Some(pos) => &file_name[..pos],
    }
}

fn has_suffix_ignore_case(name: &str, suffix: &str) -> bool {
    let (n, s) = (name.as_bytes(), suffix.as_bytes());
    n.len() >= s.len() && n[n.len() - s.len()..].eq_ignore_ascii_case(s)
}
