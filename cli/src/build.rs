//! Reads Sedra record files and writes the converted modules.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use sedra_backend::export_helpers::{convert_records, OutputFormat, OutputModule};
use sedra_backend::logger;
use sedra_backend::types::RecordType;

use crate::encoding::read_sedra_file;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildStats {
    pub converted: Vec<RecordType>,
    pub skipped: Vec<RecordType>,
    pub modules_written: usize,
}

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {:?}", path))?;
    }
    Ok(())
}

/// Parse one record file into its output modules.
pub fn convert_file(
    record_type: RecordType,
    input_path: &Path,
    format: OutputFormat,
    minify: bool,
) -> Result<Vec<OutputModule>> {
    let content = read_sedra_file(input_path)?;
    let modules = convert_records(record_type, &content, format, minify)
        .with_context(|| format!("Failed to convert {} records from {:?}", record_type.as_str(), input_path))?;
    Ok(modules)
}

pub fn write_modules(output_dir: &Path, modules: &[OutputModule], format: OutputFormat) -> Result<usize> {
    ensure_directory_exists(output_dir)?;

    for module in modules {
        let path = output_dir.join(module.file_name(format));
        fs::write(&path, &module.content)
            .with_context(|| format!("Failed to write file: {:?}", path))?;
        logger::info(&format!("Wrote {:?}", path));
    }

    Ok(modules.len())
}

/// Convert every requested record type found in `sedra_dir`.
///
/// A missing input file is skipped with a warning. A file that fails to
/// convert stops the build.
pub fn build_all(
    sedra_dir: &Path,
    output_dir: &Path,
    record_types: &[RecordType],
    format: OutputFormat,
    minify: bool,
) -> Result<BuildStats> {
    let mut stats = BuildStats::default();

    for &record_type in record_types {
        let input_path = sedra_dir.join(record_type.source_file_name());
        if !input_path.is_file() {
            logger::warn(&format!(
                "{} not found in {:?}, skipping {}",
                record_type.source_file_name(),
                sedra_dir,
                record_type.as_str()
            ));
            stats.skipped.push(record_type);
            continue;
        }

        let start = Instant::now();
        let modules = convert_file(record_type, &input_path, format, minify)?;
        stats.modules_written += write_modules(output_dir, &modules, format)?;
        stats.converted.push(record_type);

        logger::info(&format!(
            "Converted {} in {}",
            record_type.as_str(),
            logger::format_duration(start.elapsed())
        ));
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_all_writes_modules_and_skips_missing() {
        let sedra_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        let out = output_dir.path().join("dist");

        fs::write(
            sedra_dir.path().join("ROOTS.TXT"),
            "0:40,\"AONGL;ON\",\"afncljfn     |0\",0\r\n",
        ).unwrap();
        fs::write(
            sedra_dir.path().join("ETYMOLOGY.TXT"),
            "4:10,1:75,\"eu\\310\",5\r\n",
        ).unwrap();

        let stats = build_all(
            sedra_dir.path(),
            &out,
            &[RecordType::Roots, RecordType::Words, RecordType::Etymology],
            OutputFormat::Js,
            true,
        ).unwrap();

        assert_eq!(stats.converted, vec![RecordType::Roots, RecordType::Etymology]);
        assert_eq!(stats.skipped, vec![RecordType::Words]);
        assert_eq!(stats.modules_written, 3);

        let roots = fs::read_to_string(out.join("roots.js")).unwrap();
        assert_eq!(roots, "export default Object.freeze([,r(\")wnglywn\",\"afncljfn     |0\",0)]);\n");

        let lids = fs::read_to_string(out.join("etymologyLids.js")).unwrap();
        assert_eq!(lids, "export default Object.freeze({75:10});\n");
    }

    #[test]
    fn test_build_all_fails_on_bad_locator_file() {
        let sedra_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        fs::write(sedra_dir.path().join("BFBS.TXT"), "0:1,520100101,33565194,64\r\noops\r\n").unwrap();

        let result = build_all(
            sedra_dir.path(),
            output_dir.path(),
            &[RecordType::Ubs],
            OutputFormat::Json,
            false,
        );
        assert!(result.is_err());
        assert!(!output_dir.path().join("ubs.json").exists());
    }
}
