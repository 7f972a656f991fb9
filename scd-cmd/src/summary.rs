//! Plain-text summary of a scorecard file, for checking data before serving it.

use anyhow::Context;
use scd_core::filter::filter_by_scorecard;
use scd_core::Dataset;
use scd_render::chart::render_chart;
use scd_render::models::ChartSpec;
use std::path::Path;

/// Load the dataset and print the summary to stdout.
pub fn run_summary(data: &Path, scorecard: Option<&str>) -> anyhow::Result<()> {
    let dataset = Dataset::load(data)
        .with_context(|| format!("Failed to load scorecard data from {}", data.display()))?;
    print!("{}", summarize(&dataset, scorecard));
    Ok(())
}

/// Record count, scorecard names and the (year, status) counts the chart would show.
pub fn summarize(dataset: &Dataset, scorecard: Option<&str>) -> String {
    let subset = filter_by_scorecard(dataset, scorecard);
    let chart = render_chart(&subset, scorecard);

    let mut out = format!(
        "Records:    {}\nColumns:    {}\nScorecards: {}\n\n{}\n",
        dataset.len(),
        dataset.headers().join(", "),
        dataset.scorecard_names().join(", "),
        chart.title
    );
    for line in count_lines(&chart) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn count_lines(chart: &ChartSpec) -> Vec<String> {
    if let Some(message) = &chart.empty_message {
        return vec![format!("  {}", message)];
    }
    chart
        .categories
        .iter()
        .map(|year| {
            let counts: String = chart
                .series
                .iter()
                .filter_map(|series| match chart.count(year, &series.name) {
                    0 => None,
                    count => Some(format!(" {}={}", series.name, count)),
                })
                .collect();
            format!("  {:>8}:{}", year, counts)
        })
        .collect()
}
