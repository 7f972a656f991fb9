//! Grouped bar chart of IMS status counts per IMS year.

use crate::models::{Bar, ChartSpec, Series};
use crate::NO_MATCH_MESSAGE;
use scd_core::{Record, YearKey};
use std::collections::{BTreeSet, HashMap};

/// Label used in the title when no scorecard is selected.
pub const ALL_SCORECARDS: &str = "All Scorecards";

/// Build the chart for a filtered subset.
///
/// Rows are grouped by (year, status) and counted. There is one series per
/// status in order of first appearance in `subset`; within a series bars
/// follow the year axis order. Only pairs that occur produce a bar.
pub fn render_chart(subset: &[&Record], scorecard: Option<&str>) -> ChartSpec {
    let mut statuses: Vec<&str> = Vec::new();
    let mut years: BTreeSet<&YearKey> = BTreeSet::new();
    let mut counts: HashMap<(&YearKey, &str), usize> = HashMap::new();

    for record in subset {
        let year = record.ims_year().key();
        let status = record.ims_status();
        if !statuses.contains(&status) {
            statuses.push(status);
        }
        years.insert(year);
        *counts.entry((year, status)).or_insert(0) += 1;
    }

    let series: Vec<Series> = statuses
        .iter()
        .map(|&status| Series {
            name: status.to_string(),
            bars: years
                .iter()
                .filter_map(|&year| {
                    counts.get(&(year, status)).map(|&y| Bar {
                        x: year.clone(),
                        y,
                        custom_data: vec![status.to_string()],
                    })
                })
                .collect(),
        })
        .collect();

    let label = scorecard.filter(|n| !n.is_empty()).unwrap_or(ALL_SCORECARDS);
    log::debug!(
        "chart: {} rows -> {} series over {} years for {}",
        subset.len(),
        series.len(),
        years.len(),
        label
    );

    ChartSpec {
        title: format!("Number of IMS Status per Year for {}", label),
        x_label: scd_core::IMS_YEAR_COLUMN.to_string(),
        y_label: "count".to_string(),
        legend_title: scd_core::IMS_STATUS_COLUMN.to_string(),
        barmode: "group".to_string(),
        categories: years.into_iter().cloned().collect(),
        empty_message: if subset.is_empty() {
            Some(NO_MATCH_MESSAGE.to_string())
        } else {
            None
        },
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scd_core::filter::filter_by_scorecard;
    use scd_core::Dataset;

    fn scenario() -> Dataset {
        Dataset::from_csv_str(
            "\
Scorecard name,IMS year,IMS status
A,2020,Done
A,2021,Open
B,2020,Done
",
        )
        .unwrap()
    }

    fn key(y: &str) -> YearKey {
        YearKey::parse(y)
    }

    #[test]
    fn selected_scorecard_counts_its_pairs() {
        let ds = scenario();
        let subset = filter_by_scorecard(&ds, Some("A"));
        let chart = render_chart(&subset, Some("A"));

        assert_eq!(chart.title, "Number of IMS Status per Year for A");
        assert_eq!(chart.bar_count(), 2);
        assert_eq!(chart.count(&key("2020"), "Done"), 1);
        assert_eq!(chart.count(&key("2021"), "Open"), 1);
        assert_eq!(chart.count(&key("2021"), "Done"), 0);
        assert!(chart.empty_message.is_none());
    }

    #[test]
    fn all_scorecards_sums_across_names() {
        let ds = scenario();
        let subset = filter_by_scorecard(&ds, None);
        let chart = render_chart(&subset, None);

        assert_eq!(chart.title, "Number of IMS Status per Year for All Scorecards");
        assert_eq!(chart.count(&key("2020"), "Done"), 2);
        assert_eq!(chart.categories, vec![key("2020"), key("2021")]);
    }

    #[test]
    fn bar_height_equals_pair_frequency() {
        let ds = Dataset::from_csv_str(
            "\
Scorecard name,IMS year,IMS status
A,2022,Open
A,2021,Open
A,2022,Open
A,2022.0,Closed
A,2021,Closed
A,2022,Open
",
        )
        .unwrap();
        let subset = filter_by_scorecard(&ds, None);
        let chart = render_chart(&subset, None);

        for record in ds.records() {
            let year = record.ims_year().key();
            let status = record.ims_status();
            let expected = ds
                .records()
                .iter()
                .filter(|r| r.ims_year().key() == year && r.ims_status() == status)
                .count();
            assert_eq!(chart.count(year, status), expected);
        }
        assert_eq!(chart.count(&key("2022"), "Open"), 3);
    }

    #[test]
    fn series_follow_first_appearance_and_bars_follow_axis() {
        let ds = Dataset::from_csv_str(
            "\
Scorecard name,IMS year,IMS status
A,2023,Open
A,2021,Done
A,2021,Open
",
        )
        .unwrap();
        let subset = filter_by_scorecard(&ds, None);
        let chart = render_chart(&subset, None);

        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Open", "Done"]);
        let open_years: Vec<&str> = chart.series[0].bars.iter().map(|b| b.x.as_str()).collect();
        assert_eq!(open_years, vec!["2021", "2023"]);
        assert_eq!(chart.series[1].bars[0].custom_data, vec!["Done".to_string()]);
    }

    #[test]
    fn empty_subset_has_no_bars_and_a_message() {
        let ds = scenario();
        let subset = filter_by_scorecard(&ds, Some("Missing"));
        let chart = render_chart(&subset, Some("Missing"));

        assert!(chart.series.is_empty());
        assert!(chart.categories.is_empty());
        assert_eq!(chart.bar_count(), 0);
        assert_eq!(chart.empty_message.as_deref(), Some(NO_MATCH_MESSAGE));
        assert_eq!(chart.title, "Number of IMS Status per Year for Missing");
    }

    #[test]
    fn serialises_for_the_browser() {
        let ds = scenario();
        let subset = filter_by_scorecard(&ds, Some("B"));
        let json = serde_json::to_value(render_chart(&subset, Some("B"))).unwrap();

        assert_eq!(json["barmode"], "group");
        assert_eq!(json["series"][0]["name"], "Done");
        assert_eq!(json["series"][0]["bars"][0]["x"], "2020");
        assert_eq!(json["series"][0]["bars"][0]["y"], 1);
        assert_eq!(json["series"][0]["bars"][0]["custom_data"][0], "Done");
        assert!(json["empty_message"].is_null());
    }
}
