use crate::year::ImsYear;

/// One row of the scorecard spreadsheet.
///
/// The three fields the dashboard filters on are held typed; every cell of
/// the row, including those three, is kept in header order in `cells` so the
/// detail table can show the full row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    scorecard_name: String,
    ims_year: ImsYear,
    ims_status: String,
    cells: Vec<String>,
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub scorecard_name: usize,
    pub ims_year: usize,
    pub ims_status: usize,
}

impl Record {
    /// Build a record from a full row of cells.
    ///
    /// Cells missing at a required position read as empty.
    pub fn from_cells(cells: Vec<String>, index: &ColumnIndex) -> Self {
        let cell = |i: usize| cells.get(i).map(String::as_str).unwrap_or("");
        let scorecard_name = cell(index.scorecard_name).to_string();
        let ims_year = ImsYear::new(cell(index.ims_year));
        let ims_status = cell(index.ims_status).to_string();
        Self {
            scorecard_name,
            ims_year,
            ims_status,
            cells,
        }
    }

    pub fn scorecard_name(&self) -> &str {
        &self.scorecard_name
    }

    pub fn ims_year(&self) -> &ImsYear {
        &self.ims_year
    }

    pub fn ims_status(&self) -> &str {
        &self.ims_status
    }

    /// All cells in header order.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn accessors_follow_column_index() {
        let index = ColumnIndex {
            scorecard_name: 2,
            ims_year: 0,
            ims_status: 1,
        };
        let record = Record::from_cells(row(&["2020", "Done", "Alpha", "extra"]), &index);
        assert_eq!(record.scorecard_name(), "Alpha");
        assert_eq!(record.ims_year().raw(), "2020");
        assert_eq!(record.ims_status(), "Done");
        assert_eq!(record.cells().len(), 4);
        assert_eq!(record.cells()[3], "extra");
    }

    #[test]
    fn short_row_reads_missing_fields_as_empty() {
        let index = ColumnIndex {
            scorecard_name: 0,
            ims_year: 1,
            ims_status: 2,
        };
        let record = Record::from_cells(row(&["Alpha"]), &index);
        assert_eq!(record.scorecard_name(), "Alpha");
        assert_eq!(record.ims_year().raw(), "");
        assert_eq!(record.ims_status(), "");
    }
}
