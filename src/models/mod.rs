//! # 数据模型模块
//!
//! 定义输入文档、处理条目、处理结果和批次。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `batch/` 和 `commands/` 使用
//! - 子模块: input, item, batch

pub mod batch;
pub mod input;
pub mod item;

pub use batch::Batch;
pub use input::InputDocument;
pub use item::{ItemId, Outcome, ProcessingItem, RejectReason};
