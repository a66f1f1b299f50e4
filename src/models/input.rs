//! # 输入文档
//!
//! 表现层（或命令行）交给处理流水线的带名二进制数据。
//!
//! ## 依赖关系
//! - 由 `batch/loader.rs` 从磁盘构造
//! - 被 `batch/pipeline.rs` 消费

/// 一个待处理的输入：散装 PDF 或归档
#[derive(Debug, Clone)]
pub struct InputDocument {
    /// 文件名（不含目录）
    pub name: String,
    /// 声明的媒体类型，仅作为识别 PDF 的辅助提示
    pub media_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl InputDocument {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        InputDocument {
            name: name.into(),
            media_type: None,
            bytes,
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}
