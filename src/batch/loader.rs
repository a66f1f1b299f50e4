//! # 并行读取器
//!
//! 把收集到的文件并行读入内存，构造成 `InputDocument`。
//!
//! ## 功能
//! - 基于 rayon 的并行读取，结果保持输入顺序
//! - 进度条显示
//! - 按扩展名附带媒体类型提示 (`mime_guess`)
//! - 任一文件读取失败即整体失败
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行读取

use crate::error::{PdfStripError, Result};
use crate::models::InputDocument;
use crate::utils::progress;

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// 并行读取器
pub struct InputLoader {
    /// 并行作业数
    jobs: usize,
}

impl InputLoader {
    /// 创建新的读取器（0 = 自动）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行读取文件列表
    pub fn load(&self, files: &[PathBuf]) -> Result<Vec<InputDocument>> {
        let pb = progress::create_progress_bar(files.len() as u64, "Reading");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| PdfStripError::Other(format!("Failed to start reader pool: {}", e)))?;

        // par_iter + collect 保持原有顺序
        let result: Result<Vec<InputDocument>> = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let doc = read_document(path);
                    pb.inc(1);
                    doc
                })
                .collect()
        });

        pb.finish_and_clear();
        result
    }
}

fn read_document(path: &Path) -> Result<InputDocument> {
    let bytes = fs::read(path).map_err(|e| PdfStripError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    // 与文件选择器一样按扩展名声明媒体类型
    let doc = InputDocument::new(name, bytes);
    Ok(match mime_guess::from_path(path).first_raw() {
        Some(media_type) => doc.with_media_type(media_type),
        None => doc,
    })
}
