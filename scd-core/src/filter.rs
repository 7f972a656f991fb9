//! Selecting records from the dataset.
//!
//! Neither filter can fail: a selection with no matches yields an empty
//! subset and the renderers decide how to show that.

use crate::dataset::Dataset;
use crate::record::Record;
use crate::year::YearKey;

/// Records belonging to one scorecard, or every record when no scorecard is
/// selected (`None` or an empty name).
pub fn filter_by_scorecard<'a>(dataset: &'a Dataset, name: Option<&str>) -> Vec<&'a Record> {
    match name.filter(|n| !n.is_empty()) {
        Some(name) => dataset
            .records()
            .iter()
            .filter(|r| r.scorecard_name() == name)
            .collect(),
        None => dataset.records().iter().collect(),
    }
}

/// Records whose year and status both equal the clicked coordinate.
///
/// A click without a status matches nothing.
pub fn filter_by_year_status<'a>(
    dataset: &'a Dataset,
    year: &YearKey,
    status: Option<&str>,
) -> Vec<&'a Record> {
    let Some(status) = status else {
        return Vec::new();
    };
    dataset
        .records()
        .iter()
        .filter(|r| r.ims_year().matches(year) && r.ims_status() == status)
        .collect()
}
