//! # 处理条目数据模型
//!
//! 一个文档（散装 PDF 或从归档中取出的条目）及其唯一的处理结果。
//!
//! ## 依赖关系
//! - 被 `models/batch.rs`, `batch/pipeline.rs` 使用
//! - 被 `parsers/filename.rs` 使用 (`RejectReason`)

use thiserror::Error;

/// 拒绝原因
///
/// 前三种来自文件名规范化，后两种针对整个归档输入。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// 下划线少于 4 个
    #[error("too few separators")]
    TooFewSeparators,

    /// 第 4 个下划线之后为空
    #[error("empty result")]
    EmptyResult,

    /// 剩余部分的首字符既不是 `数字)` 也不是字母
    #[error("unexpected format")]
    UnexpectedFormat,

    /// 归档容器无法解码
    #[error("archive unreadable")]
    ArchiveUnreadable,

    /// 归档可以解码，但不含 .pdf 条目
    #[error("no PDF entries found")]
    NoPdfEntriesFound,
}

/// 条目处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 重命名成功
    Renamed(String),
    /// 被拒绝，`fallback_name` 为原始文件名
    Rejected {
        reason: RejectReason,
        fallback_name: String,
    },
}

impl Outcome {
    /// 由规范化结果构造，拒绝时以原始文件名作为回退名
    pub fn from_normalized(original_name: &str, result: Result<String, RejectReason>) -> Self {
        match result {
            Ok(new_name) => Outcome::Renamed(new_name),
            Err(reason) => Outcome::rejected(original_name, reason),
        }
    }

    pub fn rejected(original_name: &str, reason: RejectReason) -> Self {
        Outcome::Rejected {
            reason,
            fallback_name: original_name.to_string(),
        }
    }

    /// 目标文件名（拒绝时为原始文件名）
    pub fn new_name(&self) -> &str {
        match self {
            Outcome::Renamed(name) => name,
            Outcome::Rejected { fallback_name, .. } => fallback_name,
        }
    }

    pub fn is_renamed(&self) -> bool {
        matches!(self, Outcome::Renamed(_))
    }

    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Outcome::Renamed(_) => None,
            Outcome::Rejected { reason, .. } => Some(*reason),
        }
    }
}

/// 条目在所属批次内的稳定标识，不会复用
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 处理条目
///
/// 结果在构造时给定且不可更改，因此任何条目在被外部看到之前都已有结果。
#[derive(Debug, Clone)]
pub struct ProcessingItem {
    id: ItemId,
    original_name: String,
    original_bytes: Vec<u8>,
    outcome: Outcome,
}

impl ProcessingItem {
    pub(crate) fn new(
        id: ItemId,
        original_name: impl Into<String>,
        original_bytes: Vec<u8>,
        outcome: Outcome,
    ) -> Self {
        ProcessingItem {
            id,
            original_name: original_name.into(),
            original_bytes,
            outcome,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn original_bytes(&self) -> &[u8] {
        &self.original_bytes
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn new_name(&self) -> &str {
        self.outcome.new_name()
    }

    /// 单条目输出：仅对重命名成功的条目返回 (新文件名, 原始字节)
    pub fn renamed(&self) -> Option<(&str, &[u8])> {
        match &self.outcome {
            Outcome::Renamed(name) => Some((name.as_str(), self.original_bytes.as_slice())),
            Outcome::Rejected { .. } => None,
        }
    }
}
