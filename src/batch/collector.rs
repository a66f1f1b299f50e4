//! # 文件收集器
//!
//! 根据输入路径和模式收集待处理文件列表。
//!
//! ## 功能
//! - 支持单文件和目录输入，可混合多个路径
//! - glob 模式匹配（不区分大小写，逗号分隔多模式）
//! - 递归目录搜索
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{PdfStripError, Result};

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 默认匹配模式
pub const DEFAULT_PATTERN: &str = "*.pdf,*.zip";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    inputs: Vec<PathBuf>,
    /// 匹配模式列表
    patterns: Vec<Pattern>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            patterns: Vec::new(),
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s).map_err(|e| PdfStripError::InvalidPattern {
                    pattern: s.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 按输入顺序收集所有文件
    ///
    /// 直接给出的文件不做模式过滤；目录中的文件按模式过滤并排序。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for input in &self.inputs {
            if input.is_file() {
                files.push(input.clone());
            } else if input.is_dir() {
                files.extend(self.collect_dir(input));
            } else {
                return Err(PdfStripError::FileNotFound {
                    path: input.display().to_string(),
                });
            }
        }

        Ok(files)
    }

    fn collect_dir(&self, dir: &Path) -> Vec<PathBuf> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches_patterns(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// 检查文件是否匹配任一模式（未设置模式时全部匹配）
    fn matches_patterns(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.is_empty()
            || self
                .patterns
                .iter()
                .any(|p| p.matches_with(filename, MATCH_OPTIONS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_collect_directory_with_patterns() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("b.PDF"));
        touch(&dir.path().join("a.zip"));
        touch(&dir.path().join("notes.txt"));
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("sub").join("c.pdf"));

        let flat = FileCollector::new(vec![dir.path().to_path_buf()])
            .with_pattern(DEFAULT_PATTERN)
            .unwrap()
            .collect()
            .unwrap();
        let names: Vec<_> = flat
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.zip", "b.PDF"]);

        let deep = FileCollector::new(vec![dir.path().to_path_buf()])
            .with_pattern(DEFAULT_PATTERN)
            .unwrap()
            .recursive(true)
            .collect()
            .unwrap();
        assert_eq!(deep.len(), 3);
    }

    #[test]
    fn test_explicit_files_bypass_pattern_and_keep_order() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("z.txt");
        let first = dir.path().join("a.pdf");
        touch(&second);
        touch(&first);

        let files = FileCollector::new(vec![second.clone(), first.clone()])
            .with_pattern("*.pdf")
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(files, vec![second, first]);
    }

    #[test]
    fn test_missing_input_is_error() {
        let result = FileCollector::new(vec![PathBuf::from("/definitely/not/here.zip")]).collect();
        assert!(matches!(result, Err(PdfStripError::FileNotFound { .. })));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = FileCollector::new(vec![]).with_pattern("[*.pdf");
        assert!(matches!(result, Err(PdfStripError::InvalidPattern { .. })));
    }
}
