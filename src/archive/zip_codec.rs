//! # Zip 编解码
//!
//! 基于 `zip` crate 的内存内 zip 读写。
//!
//! ## 依赖关系
//! - 实现 `archive::ArchiveCodec`
//! - 使用 `zip` crate

use super::{ArchiveCodec, ArchiveEntry};
use crate::error::{PdfStripError, Result};

use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// deflate zip 编解码器
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipCodec;

impl ZipCodec {
    pub fn new() -> Self {
        ZipCodec
    }
}

fn decode_error(e: impl std::fmt::Display) -> PdfStripError {
    PdfStripError::ArchiveDecode {
        reason: e.to_string(),
    }
}

fn encode_error(e: impl std::fmt::Display) -> PdfStripError {
    PdfStripError::ArchiveEncode {
        reason: e.to_string(),
    }
}

impl ArchiveCodec for ZipCodec {
    fn extract_entries(&self, bytes: &[u8]) -> Result<Vec<ArchiveEntry>> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(decode_error)?;

        // 条目数与大小均来自不可信的头部，不据此预分配
        let mut entries = Vec::new();
        for i in 0..archive.len() {
            let mut file = archive.by_index(i).map_err(decode_error)?;
            if file.is_dir() {
                continue;
            }

            let name = file.name().to_string();
            let mut content = Vec::new();
            // 条目损坏（CRC 不符等）同样视为整个归档不可读
            file.read_to_end(&mut content).map_err(decode_error)?;

            entries.push(ArchiveEntry::new(name, content));
        }

        Ok(entries)
    }

    fn build_archive(&self, entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for entry in entries {
            writer
                .start_file(entry.name.as_str(), options)
                .map_err(encode_error)?;
            writer
                .write_all(&entry.bytes)
                .map_err(encode_error)?;
        }

        let cursor = writer.finish().map_err(encode_error)?;
        Ok(cursor.into_inner())
    }
}
