//! # rename 命令实现
//!
//! 批量重命名 PDF 文件。
//!
//! ## 功能
//! - 收集并并行读取输入文件（PDF / zip / 目录）
//! - 提交到批处理流水线，展示结果表格
//! - 按 ID 排除条目
//! - 逐个写出重命名后的文件，或打包为单个 zip
//! - 可选 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch/`, `archive/`, `models/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/report.rs`

use crate::cli::rename::RenameArgs;
use pdfstrip::archive::{ArchiveCodec, ZipCodec};
use pdfstrip::batch::{FileCollector, InputLoader, PackagedArchive, Pipeline};
use pdfstrip::error::{PdfStripError, Result};
use pdfstrip::models::{Batch, ItemId};
use pdfstrip::utils::{output, progress, report};

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// 单文件写出统计
#[derive(Debug, Default, PartialEq, Eq)]
struct WriteStats {
    written: usize,
    skipped: usize,
}

/// 本次运行读取的输入文件（规范化后的路径）
///
/// 输出目录与输入目录相同时，写出前据此拒绝覆盖任何输入文件。
#[derive(Debug, Default)]
struct InputGuard {
    paths: HashSet<PathBuf>,
}

impl InputGuard {
    fn new(files: &[PathBuf]) -> Self {
        InputGuard {
            paths: files.iter().filter_map(|p| fs::canonicalize(p).ok()).collect(),
        }
    }

    /// 不存在的路径不可能是输入
    fn is_input(&self, path: &Path) -> bool {
        fs::canonicalize(path)
            .map(|p| self.paths.contains(&p))
            .unwrap_or(false)
    }
}

/// 执行 rename 命令
pub fn execute(args: RenameArgs) -> Result<()> {
    output::print_header("Renaming PDF documents");

    // 收集输入文件
    let files = FileCollector::new(args.inputs.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!("No files matched '{}'", args.pattern));
        return Ok(());
    }

    output::print_info(&format!("Found {} input file(s)", files.len()));

    let documents = InputLoader::new(args.jobs).load(&files)?;
    let guard = InputGuard::new(&files);

    let pipeline = Pipeline::new(ZipCodec::new());
    let mut batch = Batch::new();
    let summary = pipeline.submit(&mut batch, documents);

    if summary.ignored > 0 {
        output::print_warning(&format!(
            "Ignored {} input(s) that are neither PDF nor zip",
            summary.ignored
        ));
    }

    if batch.is_empty() {
        output::print_warning("No PDF documents to process.");
        return Ok(());
    }

    println!("{}", report::render_table(&report::rows(&batch)));

    apply_exclusions(&mut batch, &args.exclude);

    if let Some(ref report_path) = args.report {
        report::save_csv(&report::rows(&batch), report_path)?;
        output::print_written(&format!("report '{}'", report_path.display()));
    }

    let renamed = batch.renamed_count();
    let rejected = batch.rejected_count();

    if args.dry_run {
        output::print_info("Dry run: no files were written.");
    } else {
        fs::create_dir_all(&args.output).map_err(|e| PdfStripError::FileWriteError {
            path: args.output.display().to_string(),
            source: e,
        })?;

        if args.zip {
            write_package(&pipeline, &batch, &args.output, args.overwrite, &guard)?;
        } else {
            let stats = write_renamed_files(&batch, &args.output, args.overwrite, &guard)?;
            output::print_written(&format!(
                "{} file(s) to '{}' ({} skipped)",
                stats.written,
                args.output.display(),
                stats.skipped
            ));
        }
    }

    output::print_summary(&format!(
        "{} renamed, {} rejected, {} ignored",
        renamed, rejected, summary.ignored
    ));

    Ok(())
}

/// 按 ID 移除条目
fn apply_exclusions(batch: &mut Batch, ids: &[u64]) {
    for &id in ids {
        match batch.remove(ItemId(id)) {
            Some(item) => output::print_excluded(id, item.original_name()),
            None => output::print_warning(&format!("No item with ID {}", id)),
        }
    }
}

/// 打包所有重命名成功的条目并写入输出目录
fn write_package<C: ArchiveCodec>(
    pipeline: &Pipeline<C>,
    batch: &Batch,
    output_dir: &Path,
    overwrite: bool,
    guard: &InputGuard,
) -> Result<()> {
    let spinner = progress::create_spinner("Packaging");
    let packaged = pipeline.package_successful(batch);
    spinner.finish_and_clear();

    match packaged {
        Ok(archive) => {
            if let Some(path) = write_archive(&archive, output_dir, overwrite, guard)? {
                output::print_packaged(archive.entry_count, &path.display().to_string());
            }
            Ok(())
        }
        Err(PdfStripError::NothingToPackage) => {
            output::print_warning("Nothing to package: no file was renamed.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// 写出打包结果，目标已存在且不允许覆盖时返回 `None`
///
/// 目标正是某个输入归档时直接报错，`--overwrite` 也不例外。
fn write_archive(
    archive: &PackagedArchive,
    output_dir: &Path,
    overwrite: bool,
    guard: &InputGuard,
) -> Result<Option<PathBuf>> {
    let path = output_dir.join(&archive.file_name);

    if guard.is_input(&path) {
        return Err(PdfStripError::OutputIsInput {
            path: path.display().to_string(),
        });
    }

    if path.exists() && !overwrite {
        output::print_skipped(&format!(
            "'{}' already exists (use --overwrite)",
            path.display()
        ));
        return Ok(None);
    }

    fs::write(&path, &archive.bytes).map_err(|e| PdfStripError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(Some(path))
}

/// 逐个写出重命名成功的条目
///
/// 同一次运行中重名的文件后者覆盖前者；已存在的旧文件只在 `overwrite` 时覆盖，
/// 输入文件本身永不覆盖。
fn write_renamed_files(
    batch: &Batch,
    output_dir: &Path,
    overwrite: bool,
    guard: &InputGuard,
) -> Result<WriteStats> {
    let mut stats = WriteStats::default();
    let mut written_names: HashSet<&str> = HashSet::new();

    for (new_name, bytes) in batch.items().iter().filter_map(|item| item.renamed()) {
        if !is_plain_file_name(new_name) {
            output::print_skipped(&format!("'{}' is not a plain file name", new_name));
            stats.skipped += 1;
            continue;
        }

        let path = output_dir.join(new_name);
        if guard.is_input(&path) {
            output::print_skipped(&format!("'{}' is an input file", path.display()));
            stats.skipped += 1;
            continue;
        }
        if path.exists() && !overwrite && !written_names.contains(new_name) {
            output::print_skipped(&format!(
                "'{}' already exists (use --overwrite)",
                path.display()
            ));
            stats.skipped += 1;
            continue;
        }

        fs::write(&path, bytes).map_err(|e| PdfStripError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;

        if !written_names.insert(new_name) {
            // 同名覆盖不重复计数
            continue;
        }
        stats.written += 1;
    }

    Ok(stats)
}

/// 名称是否为单个普通路径分量（不含目录分隔符、`..` 等）
fn is_plain_file_name(name: &str) -> bool {
    if name.contains(|c: char| c == '/' || c == '\\') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfstrip::archive::ArchiveEntry;
    use pdfstrip::models::InputDocument;

    fn batch_of(docs: &[(&str, &str)]) -> Batch {
        let mut batch = Batch::new();
        let inputs = docs
            .iter()
            .map(|(n, b)| InputDocument::new(*n, b.as_bytes().to_vec()))
            .collect();
        Pipeline::new(ZipCodec::new()).submit(&mut batch, inputs);
        batch
    }

    fn args_for(inputs: Vec<PathBuf>, output: &Path) -> RenameArgs {
        RenameArgs {
            inputs,
            output: output.to_path_buf(),
            pattern: pdfstrip::batch::collector::DEFAULT_PATTERN.to_string(),
            recursive: false,
            zip: false,
            exclude: Vec::new(),
            report: None,
            dry_run: false,
            overwrite: false,
            jobs: 2,
        }
    }

    #[test]
    fn test_is_plain_file_name() {
        assert!(is_plain_file_name("Bürobedarf.pdf"));
        assert!(is_plain_file_name("1)_Beratung.pdf"));
        assert!(!is_plain_file_name("sub/x.pdf"));
        assert!(!is_plain_file_name("..\\x.pdf"));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name(""));
    }

    #[test]
    fn test_write_renamed_files() {
        let dir = tempfile::tempdir().unwrap();
        let batch = batch_of(&[
            ("A_B_C_D_Brief.pdf", "old"),
            ("kurz.pdf", "rejected"),
            ("A_B_C_D_sub/evil.pdf", "nested"),
            ("E_F_G_H_Brief.pdf", "new"),
        ]);

        let stats = write_renamed_files(&batch, dir.path(), false, &InputGuard::default()).unwrap();

        assert_eq!(stats, WriteStats { written: 1, skipped: 1 });
        assert_eq!(fs::read(dir.path().join("Brief.pdf")).unwrap(), b"new");
        assert!(!dir.path().join("kurz.pdf").exists());
    }

    #[test]
    fn test_existing_files_need_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Brief.pdf"), b"keep").unwrap();
        let batch = batch_of(&[("A_B_C_D_Brief.pdf", "new")]);

        let stats = write_renamed_files(&batch, dir.path(), false, &InputGuard::default()).unwrap();
        assert_eq!(stats, WriteStats { written: 0, skipped: 1 });
        assert_eq!(fs::read(dir.path().join("Brief.pdf")).unwrap(), b"keep");

        let stats = write_renamed_files(&batch, dir.path(), true, &InputGuard::default()).unwrap();
        assert_eq!(stats, WriteStats { written: 1, skipped: 0 });
        assert_eq!(fs::read(dir.path().join("Brief.pdf")).unwrap(), b"new");
    }

    #[test]
    fn test_apply_exclusions() {
        let mut batch = batch_of(&[("A_B_C_D_eins.pdf", "1"), ("A_B_C_D_zwei.pdf", "2")]);
        apply_exclusions(&mut batch, &[0, 99]);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.items()[0].new_name(), "zwei.pdf");
    }

    #[test]
    fn test_execute_packages_zip_input() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        let codec = ZipCodec::new();

        let upload = codec
            .build_archive(&[
                ArchiveEntry::new("A_B_C_D_Rechnung.pdf", b"%PDF-r".to_vec()),
                ArchiveEntry::new("readme.txt", b"skip".to_vec()),
            ])
            .unwrap();
        let zip_path = input_dir.path().join("Kunde.zip");
        fs::write(&zip_path, upload).unwrap();
        let loose_path = input_dir.path().join("X_Y_Z_W_Angebot.PDF");
        fs::write(&loose_path, b"%PDF-a").unwrap();

        let mut args = args_for(vec![zip_path, loose_path], output_dir.path());
        args.zip = true;
        args.report = Some(output_dir.path().join("report.csv"));
        execute(args).unwrap();

        let packaged = fs::read(output_dir.path().join("Kunde.zip")).unwrap();
        let entries = codec.extract_entries(&packaged).unwrap();
        assert_eq!(
            entries,
            vec![
                ArchiveEntry::new("Rechnung.pdf", b"%PDF-r".to_vec()),
                ArchiveEntry::new("Angebot.pdf", b"%PDF-a".to_vec()),
            ]
        );

        let report = fs::read_to_string(output_dir.path().join("report.csv")).unwrap();
        assert_eq!(report.lines().count(), 3);
    }

    #[test]
    fn test_execute_dry_run_writes_nothing() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        fs::write(input_dir.path().join("A_B_C_D_Angebot.pdf"), b"%PDF").unwrap();
        fs::write(input_dir.path().join("notes.txt"), b"ignored").unwrap();

        let mut args = args_for(vec![input_dir.path().to_path_buf()], output_dir.path());
        args.dry_run = true;
        execute(args).unwrap();

        assert_eq!(fs::read_dir(output_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_execute_writes_individual_files() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        fs::write(input_dir.path().join("A_B_C_D_Angebot.pdf"), b"%PDF-1").unwrap();
        fs::write(input_dir.path().join("ohne.pdf"), b"%PDF-2").unwrap();

        let args = args_for(vec![input_dir.path().to_path_buf()], output_dir.path());
        execute(args).unwrap();

        assert_eq!(
            fs::read(output_dir.path().join("Angebot.pdf")).unwrap(),
            b"%PDF-1"
        );
        assert_eq!(fs::read_dir(output_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_execute_never_overwrites_input_archive() {
        // 输入与输出在同一目录，打包结果与输入归档同名
        let dir = tempfile::tempdir().unwrap();
        let upload = ZipCodec::new()
            .build_archive(&[ArchiveEntry::new("A_B_C_D_Rechnung.pdf", b"%PDF-r".to_vec())])
            .unwrap();
        let zip_path = dir.path().join("Kunde.zip");
        fs::write(&zip_path, &upload).unwrap();

        for overwrite in [false, true] {
            let mut args = args_for(vec![zip_path.clone()], dir.path());
            args.zip = true;
            args.overwrite = overwrite;

            assert!(matches!(
                execute(args),
                Err(PdfStripError::OutputIsInput { .. })
            ));
            assert_eq!(fs::read(&zip_path).unwrap(), upload);
        }
    }

    #[test]
    fn test_execute_never_overwrites_input_pdf() {
        // `ohne.pdf` 本身是输入（被拒绝），`A_B_C_D_ohne.pdf` 重命名后与之同名
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("A_B_C_D_ohne.pdf"), b"%PDF-new").unwrap();
        fs::write(dir.path().join("ohne.pdf"), b"%PDF-old").unwrap();

        let mut args = args_for(vec![dir.path().to_path_buf()], dir.path());
        args.overwrite = true;
        execute(args).unwrap();

        assert_eq!(fs::read(dir.path().join("ohne.pdf")).unwrap(), b"%PDF-old");
        assert_eq!(
            fs::read(dir.path().join("A_B_C_D_ohne.pdf")).unwrap(),
            b"%PDF-new"
        );
    }

    #[test]
    fn test_execute_missing_input_fails() {
        let output_dir = tempfile::tempdir().unwrap();
        let args = args_for(vec![PathBuf::from("/no/such/input.zip")], output_dir.path());
        assert!(matches!(
            execute(args),
            Err(PdfStripError::FileNotFound { .. })
        ));
    }
}
