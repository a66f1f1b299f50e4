//! # 归档编解码模块
//!
//! 把归档的解码与编码抽象为可注入的 `ArchiveCodec`，
//! 处理流水线只依赖该 trait，不直接依赖具体的 zip 实现。
//!
//! ## 子模块
//! - `zip_codec`: 基于 `zip` crate 的 deflate zip 实现
//!
//! ## 依赖关系
//! - 被 `batch/pipeline.rs` 使用
//! - 被 `commands/rename.rs` 构造

pub mod zip_codec;

pub use zip_codec::ZipCodec;

use crate::error::Result;

/// 归档中的一个文件条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// 归档内的完整条目名
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        ArchiveEntry {
            name: name.into(),
            bytes,
        }
    }
}

/// 归档编解码能力
pub trait ArchiveCodec {
    /// 解码归档，按归档内部顺序返回全部文件条目（不含目录）
    ///
    /// 容器无法解码时返回 `PdfStripError::ArchiveDecode`。
    fn extract_entries(&self, bytes: &[u8]) -> Result<Vec<ArchiveEntry>>;

    /// 把条目按给定顺序写入一个新归档
    ///
    /// 调用方保证条目名不重复。失败时返回 `PdfStripError::ArchiveEncode`。
    fn build_archive(&self, entries: &[ArchiveEntry]) -> Result<Vec<u8>>;
}
