//! Loading the scorecard spreadsheet into an immutable, ordered table.
//!
//! # Input format
//!
//! Comma-delimited CSV with a header row, optionally gzip-compressed
//! (`.gz` suffix). The header must contain the columns
//! `Scorecard name`, `IMS year` and `IMS status`; any other columns are
//! carried through to the detail table untouched.
//!
//! ```text
//! Scorecard name,IMS year,IMS status,Owner
//! Alpha,2020,Done,Kim
//! Alpha,2021,Open,Kim
//! ```

use crate::error::{DatasetError, Result};
use crate::record::{ColumnIndex, Record};
use crate::{IMS_STATUS_COLUMN, IMS_YEAR_COLUMN, SCORECARD_NAME_COLUMN};
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The full scorecard table. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Read a CSV (or `.gz` compressed CSV) file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let reader = BufReader::new(file);
        let is_gzip = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gz"))
            .unwrap_or(false);

        let dataset = if is_gzip {
            Self::from_reader(GzDecoder::new(reader))?
        } else {
            Self::from_reader(reader)?
        };
        log::info!(
            "loader: loaded {} records ({} columns) from {}",
            dataset.len(),
            dataset.headers.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parse CSV held in memory.
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Parse CSV from any reader.
    ///
    /// Rows shorter than the header are padded with empty cells; cells past
    /// the header width are dropped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(DatasetError::NoHeader);
        }
        let index = ColumnIndex {
            scorecard_name: column_position(&headers, SCORECARD_NAME_COLUMN)?,
            ims_year: column_position(&headers, IMS_YEAR_COLUMN)?,
            ims_status: column_position(&headers, IMS_STATUS_COLUMN)?,
        };

        let width = headers.len();
        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let mut cells: Vec<String> = row.iter().take(width).map(str::to_string).collect();
            cells.resize(width, String::new());
            records.push(Record::from_cells(cells, &index));
        }
        log::debug!("loader: parsed {} rows", records.len());
        Ok(Self { headers, records })
    }

    /// Column names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct scorecard names in order of first appearance.
    ///
    /// Empty names are skipped since selecting "" means "all scorecards".
    pub fn scorecard_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(Record::scorecard_name)
            .filter(|name| !name.is_empty() && seen.insert(*name))
            .collect()
    }
}

fn column_position(headers: &[String], column: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or(DatasetError::MissingColumn(column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const SAMPLE: &str = "\
Scorecard name,IMS year,IMS status,Owner
A,2020,Done,Kim
A,2021,Open,Kim
B,2020,Done,Lee
";

    #[test]
    fn parses_records_in_file_order() {
        let ds = Dataset::from_csv_str(SAMPLE).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.headers(), &["Scorecard name", "IMS year", "IMS status", "Owner"]);
        assert_eq!(ds.records()[1].ims_status(), "Open");
        assert_eq!(ds.records()[2].scorecard_name(), "B");
        assert_eq!(ds.records()[2].cells()[3], "Lee");
    }

    #[test]
    fn required_columns_may_appear_in_any_order() {
        let csv = "\
IMS status,Notes,IMS year,Scorecard name
Done,first,2020,A
";
        let ds = Dataset::from_csv_str(csv).unwrap();
        let record = &ds.records()[0];
        assert_eq!(record.scorecard_name(), "A");
        assert_eq!(record.ims_year().key().as_str(), "2020");
        assert_eq!(record.ims_status(), "Done");
    }

    #[test]
    fn header_and_cells_are_trimmed() {
        let csv = " Scorecard name , IMS year ,IMS status\n A , 2020 , Done \n";
        let ds = Dataset::from_csv_str(csv).unwrap();
        assert_eq!(ds.records()[0].scorecard_name(), "A");
        assert_eq!(ds.records()[0].ims_status(), "Done");
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "Scorecard name,IMS year\nA,2020\n";
        let err = Dataset::from_csv_str(csv).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn(IMS_STATUS_COLUMN)));
    }

    #[test]
    fn empty_input_has_no_header() {
        let err = Dataset::from_csv_str("").unwrap_err();
        assert!(matches!(err, DatasetError::NoHeader));
    }

    #[test]
    fn ragged_rows_are_normalised_to_header_width() {
        let csv = "\
Scorecard name,IMS year,IMS status,Owner
A,2020
B,2021,Open,Lee,overflow
";
        let ds = Dataset::from_csv_str(csv).unwrap();
        assert_eq!(ds.records()[0].cells(), &["A", "2020", "", ""]);
        assert_eq!(ds.records()[0].ims_status(), "");
        assert_eq!(ds.records()[1].cells().len(), 4);
    }

    #[test]
    fn header_only_yields_empty_dataset() {
        let ds = Dataset::from_csv_str("Scorecard name,IMS year,IMS status\n").unwrap();
        assert!(ds.is_empty());
        assert!(ds.scorecard_names().is_empty());
    }

    #[test]
    fn scorecard_names_are_distinct_in_first_appearance_order() {
        let csv = "\
Scorecard name,IMS year,IMS status
Zeta,2020,Done
Alpha,2020,Done
Zeta,2021,Open
,2021,Open
";
        let ds = Dataset::from_csv_str(csv).unwrap();
        assert_eq!(ds.scorecard_names(), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn load_reads_plain_and_gzip_files() {
        let dir = std::env::temp_dir().join(format!("scd-core-load-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let plain = dir.join("scorecards.csv");
        std::fs::write(&plain, SAMPLE).unwrap();
        assert_eq!(Dataset::load(&plain).unwrap().len(), 3);

        let gz = dir.join("scorecards.csv.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(SAMPLE.as_bytes()).unwrap();
        std::fs::write(&gz, encoder.finish().unwrap()).unwrap();
        assert_eq!(
            Dataset::load(&gz).unwrap(),
            Dataset::load(&plain).unwrap()
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn bundled_fixture_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/scorecards.csv");
        let ds = Dataset::load(path).unwrap();
        assert_eq!(ds.len(), 20);
        assert_eq!(ds.scorecard_names().len(), 4);
        assert_eq!(ds.headers().len(), 6);
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let err = Dataset::load("/nonexistent/scorecards.csv").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
