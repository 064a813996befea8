use crate::core::pipeline::Operation;
use crate::utils::error::Result;
use csv::{ReaderBuilder, StringRecord};
use std::path::{Path, PathBuf};

/// Where the batch comes from, resolved once at the input boundary.
#[derive(Debug, Clone)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn resolve(path: Option<&Path>) -> Self {
        match path {
            Some(p) => InputSource::File(p.to_path_buf()),
            None => InputSource::Stdin,
        }
    }
}

/// Materializes every row up front so the batch processor can report
/// total progress. A named file carries a header row (discarded here);
/// piped stdin does not.
pub fn read_rows(source: &InputSource) -> Result<Vec<StringRecord>> {
    match source {
        InputSource::File(path) => {
            let mut reader = ReaderBuilder::new()
                .has_headers(true)
                .flexible(true)
                .from_path(path)?;
            collect_rows(&mut reader)
        }
        InputSource::Stdin => {
            let mut reader = ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_reader(std::io::stdin());
            collect_rows(&mut reader)
        }
    }
}

fn collect_rows<R: std::io::Read>(reader: &mut csv::Reader<R>) -> Result<Vec<StringRecord>> {
    let mut rows = Vec::new();
    for row in reader.records() {
        rows.push(row?);
    }
    Ok(rows)
}

/// One record per data row, in row order. Numeric parse failures abort
/// the whole run before any remote call is made.
pub fn parse_records<O: Operation>(op: &O, rows: &[StringRecord]) -> Result<Vec<O::Record>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| op.parse_row(i + 1, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ops::{ElevationOp, GeocodeOp};
    use crate::utils::error::GeoError;

    #[test]
    fn test_file_input_skips_header_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        std::fs::write(&path, "id,address\n1,380 New York St\n2,1600 Pennsylvania Ave\n")
            .unwrap();

        let source = InputSource::resolve(Some(&path));
        let rows = read_rows(&source).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(0), Some("1"));
        assert_eq!(rows[1].get(1), Some("1600 Pennsylvania Ave"));
    }

    #[test]
    fn test_parse_records_preserves_row_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        std::fs::write(&path, "id,address\nb,second st\na,first st\n").unwrap();

        let rows = read_rows(&InputSource::resolve(Some(&path))).unwrap();
        let records = parse_records(&GeocodeOp::new(None), &rows).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "b");
        assert_eq!(records[1].id, "a");
    }

    #[test]
    fn test_bad_numeric_field_aborts_ingestion() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        std::fs::write(&path, "id,lat,lng\n1,39.7,-104.9\n2,high,-104.9\n").unwrap();

        let rows = read_rows(&InputSource::resolve(Some(&path))).unwrap();
        let err = parse_records(&ElevationOp, &rows).unwrap_err();

        match err {
            GeoError::FieldParse { row, field, value } => {
                assert_eq!(row, 2);
                assert_eq!(field, "lat");
                assert_eq!(value, "high");
            }
            other => panic!("expected field parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_input_file_is_fatal() {
        let source = InputSource::resolve(Some(Path::new("/no/such/input.csv")));
        assert!(read_rows(&source).is_err());
    }
}
