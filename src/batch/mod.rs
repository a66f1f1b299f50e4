//! # 批量处理模块
//!
//! 提供从磁盘收集输入到重命名、打包的完整批处理能力。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 收集匹配文件列表并并行读取
//! - 文件名规范化与归档解包/打包
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `rayon` 进行并行读取
//! - 使用 `archive/` 编解码归档

pub mod collector;
pub mod loader;
pub mod pipeline;

pub use collector::FileCollector;
pub use loader::InputLoader;
pub use pipeline::{PackagedArchive, Pipeline};
