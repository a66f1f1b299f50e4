//! # pdfstrip 核心库
//!
//! 文件名规范化、zip 编解码和批处理流水线，不依赖命令行。
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── batch/     (收集、读取、批处理流水线)
//!   ├── archive/   (zip 编解码)
//!   ├── parsers/   (文件名规范化与分类)
//!   ├── models/    (数据模型)
//!   ├── utils/     (输出、进度条、报告)
//!   └── error.rs   (错误处理)
//! ```

pub mod archive;
pub mod batch;
pub mod error;
pub mod models;
pub mod parsers;
pub mod utils;
