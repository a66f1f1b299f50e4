//! # 批次数据模型
//!
//! 一次会话中处理过的全部条目，按插入顺序保存。
//!
//! ## 依赖关系
//! - 被 `batch/pipeline.rs` 写入
//! - 被 `commands/rename.rs`, `utils/report.rs` 读取

use super::item::{ItemId, Outcome, ProcessingItem};

/// 有序的处理条目集合
///
/// 只能通过追加增长，通过 `remove` / `clear` 缩小。
#[derive(Debug, Default)]
pub struct Batch {
    items: Vec<ProcessingItem>,
    next_id: u64,
    source_archive_base_name: Option<String>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个条目并返回其标识
    pub(crate) fn push(
        &mut self,
        original_name: impl Into<String>,
        original_bytes: Vec<u8>,
        outcome: Outcome,
    ) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items
            .push(ProcessingItem::new(id, original_name, original_bytes, outcome));
        id
    }

    /// 记录来源归档名，仅第一次生效
    pub(crate) fn record_source_archive(&mut self, base_name: &str) {
        if self.source_archive_base_name.is_none() {
            self.source_archive_base_name = Some(base_name.to_string());
        }
    }

    pub fn source_archive_base_name(&self) -> Option<&str> {
        self.source_archive_base_name.as_deref()
    }

    pub fn items(&self) -> &[ProcessingItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&ProcessingItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// 移除单个条目，其余条目保持原有顺序
    pub fn remove(&mut self, id: ItemId) -> Option<ProcessingItem> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(pos))
    }

    /// 清空批次，同时忘记来源归档名
    pub fn clear(&mut self) {
        self.items.clear();
        self.source_archive_base_name = None;
    }

    /// 重命名成功的条目（按批次顺序）
    pub fn renamed_items(&self) -> impl Iterator<Item = &ProcessingItem> {
        self.items.iter().filter(|item| item.outcome().is_renamed())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn renamed_count(&self) -> usize {
        self.renamed_items().count()
    }

    pub fn rejected_count(&self) -> usize {
        self.len() - self.renamed_count()
    }
}
