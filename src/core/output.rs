use crate::core::pipeline::Operation;
use crate::utils::error::{GeoError, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Where the batch goes, resolved once before emission.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

/// Absent output means stdout. An existing directory derives a
/// timestamped `results_*.csv` inside it; a file path whose parent
/// directory is missing is a configuration error.
pub fn resolve_target(path: Option<&Path>) -> Result<OutputTarget> {
    match path {
        None => Ok(OutputTarget::Stdout),
        Some(p) if p.is_dir() => Ok(OutputTarget::File(p.join(default_file_name()))),
        Some(p) => {
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(GeoError::OutputDirNotFound(parent.display().to_string()));
                }
            }
            Ok(OutputTarget::File(p.to_path_buf()))
        }
    }
}

fn default_file_name() -> String {
    format!("results_{}.csv", Utc::now().format("%Y-%m-%dT%H-%M-%SZ"))
}

/// File output gets a header row and is flushed before close; stdout
/// output is headerless, one comma-joined line per record. Row order
/// matches the record order exactly.
pub fn write_records<O: Operation>(
    op: &O,
    target: &OutputTarget,
    records: &[O::Record],
) -> Result<()> {
    match target {
        OutputTarget::File(path) => {
            let mut writer = csv::Writer::from_path(path)?;
            writer.write_record(op.headers())?;
            for rec in records {
                writer.write_record(op.to_row(rec))?;
            }
            writer.flush()?;
        }
        OutputTarget::Stdout => {
            for rec in records {
                println!("{}", op.to_row(rec).join(","));
            }
        }
    }
    Ok(())
}
