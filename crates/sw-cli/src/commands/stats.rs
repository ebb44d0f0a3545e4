//! The `stats` subcommand: choice-frequency table with a bar chart.

use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use sw_stats::BarChart;

pub fn run(file: &Path, width: usize) -> Result<(), String> {
    let source = super::load_story(file)?;
    let counts = sw_stats::aggregate(&source);

    if counts.is_empty() {
        println!("  No choices found.");
        return Ok(());
    }

    let rows: Vec<(String, u64)> = counts.into_iter().collect();
    let max = rows.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let chart = BarChart::new().with_width(width);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Choice", "Count", "Frequency"]);

    for (label, count) in &rows {
        table.add_row(vec![
            label.clone(),
            count.to_string(),
            chart.bar(*count, max),
        ]);
    }

    println!("  {} for {}", "Choice frequency".bold(), file.display());
    println!("{table}");
    println!();
    println!("  {} distinct choice labels", rows.len());

    Ok(())
}
