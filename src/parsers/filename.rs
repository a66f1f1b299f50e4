//! # 文件名规范化
//!
//! 上游命名约定为 `<人名>_<人名>_<日期>_<金额>_<真实文件名>`，
//! 前四个下划线分隔的字段是需要丢弃的管理信息。
//! 第 4 个下划线之后的全部内容（包括其中的下划线）原样保留。
//!
//! ## 依赖关系
//! - 被 `batch/pipeline.rs`, `commands/check.rs` 调用
//! - 使用 `models/item.rs` 的 `RejectReason`
//! - 使用 `regex` 匹配 `数字)` 开头

use super::strip_pdf_extension;
use crate::models::RejectReason;

use regex::Regex;
use std::sync::LazyLock;

/// 需要丢弃的前缀字段数
const PREFIX_FIELDS: usize = 4;

/// 允许作为首字符的德语变音字母
const GERMAN_LETTERS: [char; 7] = ['ä', 'ö', 'ü', 'Ä', 'Ö', 'Ü', 'ß'];

static NUMBERED_LEAD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\)").unwrap());

/// 规范化文件名
///
/// 成功时返回去掉前缀并带小写 `.pdf` 扩展名的新文件名。
/// 纯函数，无 I/O。
pub fn normalize(name: &str) -> Result<String, RejectReason> {
    let stem = strip_pdf_extension(name).unwrap_or(name);

    let segments: Vec<&str> = stem.split('_').collect();
    if segments.len() <= PREFIX_FIELDS {
        return Err(RejectReason::TooFewSeparators);
    }

    let candidate = segments[PREFIX_FIELDS..].join("_");
    if candidate.is_empty() {
        return Err(RejectReason::EmptyResult);
    }

    if !has_expected_lead(&candidate) {
        return Err(RejectReason::UnexpectedFormat);
    }

    Ok(format!("{}.pdf", candidate))
}

/// 检查首字符：`数字)` 开头，或字母（ASCII 与德语变音字母）
fn has_expected_lead(candidate: &str) -> bool {
    if NUMBERED_LEAD.is_match(candidate) {
        return true;
    }

    match candidate.chars().next() {
        Some(c) => c.is_ascii_alphabetic() || GERMAN_LETTERS.contains(&c),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_example() {
        assert_eq!(
            normalize("Max_Mustermann_01.01.2024_1500,00_1)_Beratungsdokumente.pdf"),
            Ok("1)_Beratungsdokumente.pdf".to_string())
        );
    }

    #[test]
    fn test_uppercase_extension_and_umlaut() {
        assert_eq!(
            normalize("A_B_C_D_Bürobedarf.PDF"),
            Ok("Bürobedarf.pdf".to_string())
        );
        assert_eq!(normalize("A_B_C_D_Übersicht.pdf"), Ok("Übersicht.pdf".to_string()));
    }

    #[test]
    fn test_missing_extension_still_processed() {
        assert_eq!(normalize("A_B_C_D_Rechnung"), Ok("Rechnung.pdf".to_string()));
    }

    #[test]
    fn test_keeps_underscores_after_fourth() {
        assert_eq!(
            normalize("A_B_C_D_Vertrag_final_v2.pdf"),
            Ok("Vertrag_final_v2.pdf".to_string())
        );
    }

    #[test]
    fn test_too_few_separators() {
        for name in ["plain.pdf", "A_B.pdf", "A_B_C_D.pdf", "A_B_C_Dfoo", ""] {
            assert_eq!(normalize(name), Err(RejectReason::TooFewSeparators), "{name}");
        }
    }

    #[test]
    fn test_empty_result() {
        assert_eq!(normalize("A_B_C_D_"), Err(RejectReason::EmptyResult));
        assert_eq!(normalize("A_B_C_D_.pdf"), Err(RejectReason::EmptyResult));
    }

    #[test]
    fn test_unexpected_format() {
        assert_eq!(
            normalize("4_B_C_D_2somefile"),
            Err(RejectReason::UnexpectedFormat)
        );
        assert_eq!(normalize("A_B_C_D_42"), Err(RejectReason::UnexpectedFormat));
        assert_eq!(normalize("A_B_C_D_)x.pdf"), Err(RejectReason::UnexpectedFormat));
        assert_eq!(normalize("A_B_C_D__x.pdf"), Err(RejectReason::UnexpectedFormat));
        assert_eq!(normalize("A_B_C_D_é.pdf"), Err(RejectReason::UnexpectedFormat));
    }

    #[test]
    fn test_multi_digit_numbered_lead() {
        assert_eq!(
            normalize("A_B_C_D_12)Anlage.pdf"),
            Ok("12)Anlage.pdf".to_string())
        );
    }

    #[test]
    fn test_only_trailing_pdf_is_stripped() {
        // 中间的 .pdf 不算扩展名
        assert_eq!(
            normalize("A_B_C_D_x.pdf.bak"),
            Ok("x.pdf.bak.pdf".to_string())
        );
    }

    #[test]
    fn test_idempotent_calls() {
        let name = "Max_Mustermann_01.01.2024_1500,00_Angebot.pdf";
        assert_eq!(normalize(name), normalize(name));
    }
}
