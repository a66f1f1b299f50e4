//! # 批处理流水线
//!
//! 接收一组输入（散装 PDF 与 zip 归档），对每个文档运行文件名规范化，
//! 把结果按输入顺序追加到批次；按需把所有成功条目重新打包为一个 zip。
//!
//! ## 功能
//! - 按后缀分类输入，无法识别的输入静默忽略（只计数）
//! - 归档级失败只影响该归档，不中断其余输入
//! - 重名条目打包时后者覆盖前者
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `archive::ArchiveCodec` 解码/编码归档
//! - 使用 `parsers/` 分类与规范化

use crate::archive::{ArchiveCodec, ArchiveEntry};
use crate::error::{PdfStripError, Result};
use crate::models::{Batch, InputDocument, Outcome, RejectReason};
use crate::parsers::{self, InputKind};

use log::{debug, error, info, warn};
use std::collections::HashMap;

/// 没有来源归档时的输出归档名
pub const DEFAULT_ARCHIVE_NAME: &str = "renamed_pdfs.zip";

/// 一次提交的统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubmitSummary {
    /// 追加到批次的条目数
    pub appended: usize,
    /// 其中重命名成功的条目数
    pub renamed: usize,
    /// 既不是 PDF 也不是归档、被忽略的输入数
    pub ignored: usize,
}

/// 打包结果，是否落盘由调用方决定
#[derive(Debug, Clone)]
pub struct PackagedArchive {
    /// 建议的文件名
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// 写入归档的条目数（去重后）
    pub entry_count: usize,
}

/// 批处理流水线
pub struct Pipeline<C: ArchiveCodec> {
    codec: C,
}

impl<C: ArchiveCodec> Pipeline<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    /// 处理一组新输入并追加到批次
    pub fn submit(&self, batch: &mut Batch, inputs: Vec<InputDocument>) -> SubmitSummary {
        let mut summary = SubmitSummary::default();
        let before = batch.len();

        for input in inputs {
            match parsers::classify(&input.name, input.media_type.as_deref()) {
                InputKind::Archive => self.submit_archive(batch, input),
                InputKind::Pdf => submit_document(batch, input.name, input.bytes),
                InputKind::Unsupported => {
                    debug!("Ignoring unsupported input '{}'", input.name);
                    summary.ignored += 1;
                }
            }
        }

        summary.appended = batch.len() - before;
        summary.renamed = batch.items()[before..]
            .iter()
            .filter(|item| item.outcome().is_renamed())
            .count();

        info!(
            "Submitted {} item(s): {} renamed, {} rejected, {} input(s) ignored",
            summary.appended,
            summary.renamed,
            summary.appended - summary.renamed,
            summary.ignored
        );
        summary
    }

    fn submit_archive(&self, batch: &mut Batch, input: InputDocument) {
        batch.record_source_archive(parsers::archive_base_name(&input.name));

        let entries = match self.codec.extract_entries(&input.bytes) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Archive '{}' is unreadable: {}", input.name, e);
                reject_archive(batch, input, RejectReason::ArchiveUnreadable);
                return;
            }
        };

        let pdf_entries: Vec<ArchiveEntry> = entries
            .into_iter()
            .filter(|entry| parsers::is_pdf_name(&entry.name))
            .collect();

        if pdf_entries.is_empty() {
            warn!("Archive '{}' contains no PDF entries", input.name);
            reject_archive(batch, input, RejectReason::NoPdfEntriesFound);
            return;
        }

        debug!(
            "Archive '{}' yielded {} PDF entries",
            input.name,
            pdf_entries.len()
        );
        for entry in pdf_entries {
            submit_document(batch, entry.name, entry.bytes);
        }
    }

    /// 把批次中所有重命名成功的条目打包为一个归档
    pub fn package_successful(&self, batch: &Batch) -> Result<PackagedArchive> {
        let entries = collect_package_entries(batch);
        if entries.is_empty() {
            return Err(PdfStripError::NothingToPackage);
        }

        let bytes = self.codec.build_archive(&entries).map_err(|e| {
            error!("Failed to package {} renamed file(s): {}", entries.len(), e);
            e
        })?;

        let file_name = match batch.source_archive_base_name() {
            Some(base) => format!("{}.zip", base),
            None => DEFAULT_ARCHIVE_NAME.to_string(),
        };

        info!(
            "Packaged {} file(s) into '{}' ({} bytes)",
            entries.len(),
            file_name,
            bytes.len()
        );
        Ok(PackagedArchive {
            file_name,
            bytes,
            entry_count: entries.len(),
        })
    }
}

/// 规范化一个文档名并追加条目
fn submit_document(batch: &mut Batch, name: String, bytes: Vec<u8>) {
    let outcome = Outcome::from_normalized(&name, parsers::normalize(&name));
    match &outcome {
        Outcome::Renamed(new_name) => debug!("'{}' -> '{}'", name, new_name),
        Outcome::Rejected { reason, .. } => debug!("'{}' rejected: {}", name, reason),
    }
    batch.push(name, bytes, outcome);
}

/// 为整个归档追加一个被拒绝的条目
fn reject_archive(batch: &mut Batch, input: InputDocument, reason: RejectReason) {
    let outcome = Outcome::rejected(&input.name, reason);
    batch.push(input.name, input.bytes, outcome);
}

/// 按批次顺序收集待打包条目，同名时后者的内容覆盖前者
fn collect_package_entries(batch: &Batch) -> Vec<ArchiveEntry> {
    let mut entries: Vec<ArchiveEntry> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (new_name, bytes) in batch.items().iter().filter_map(|item| item.renamed()) {
        match positions.get(new_name) {
            Some(&pos) => {
                debug!("Duplicate output name '{}', keeping the later file", new_name);
                entries[pos].bytes = bytes.to_vec();
            }
            None => {
                positions.insert(new_name, entries.len());
                entries.push(ArchiveEntry::new(new_name, bytes.to_vec()));
            }
        }
    }

    entries
}
