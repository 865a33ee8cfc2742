//! Terminal rendering of the derived tables.

use serde_json::Value;

use crate::aggregation::{ContributorsTable, ProgressTable};


const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const BAR_WIDTH: usize = 20;
const CELL_WIDTH: usize = 16;
const PROGRESS_WIDTHS: [usize; 6] = [10, 6, 9, 17, 20, 11];


/// Create a simple text bar for visualization.
fn create_bar(value: i64, max_value: i64, width: usize, color: &str) -> String {
    if max_value <= 0 {
        return "░".repeat(width);
    }

    let filled = ((value.max(0) as f64 / max_value as f64) * width as f64) as usize;
    let filled = filled.min(width);

    format!(
        "{}{}{}{}{}",
        color,
        "█".repeat(filled),
        RESET,
        DIM,
        "░".repeat(width - filled),
    ) + RESET
}


/// Lines of the progress table, one per day plus a header.
pub fn progress_lines(table: &ProgressTable) -> Vec<String> {
    let header: Vec<String> = ProgressTable::columns()
        .into_iter()
        .zip(PROGRESS_WIDTHS)
        .map(|(column, width)| {
            if column == "date" {
                format!("{column:<width$}")
            } else {
                format!("{column:>width$}")
            }
        })
        .collect();
    let mut lines = vec![format!("{}{}  {}{}", BOLD, header.join(" "), "mapped / day", RESET)];

    let max_mapped = table.rows().iter().map(|r| r.mapped).max().unwrap_or(0);

    for row in table.rows() {
        lines.push(format!(
            "{:<10} {:>6} {:>9} {:>17} {:>20} {:>11}  {}",
            row.date.format("%Y-%m-%d"),
            row.mapped,
            row.validated,
            row.cumulative_mapped,
            row.cumulative_validated,
            row.total_tasks,
            create_bar(row.mapped, max_mapped, BAR_WIDTH, BLUE),
        ));
    }

    lines
}


/// Lines of the contributors table, one per contributor plus a header.
pub fn contributor_lines(table: &ContributorsTable) -> Vec<String> {
    let header: Vec<String> = table
        .columns()
        .iter()
        .map(|c| format!("{:<CELL_WIDTH$}", truncate(c, CELL_WIDTH)))
        .collect();
    let mut lines = vec![format!("{}{}{}", BOLD, header.join(" "), RESET)];

    for row in table.rows() {
        let cells: Vec<String> = table
            .columns()
            .iter()
            .map(|column| {
                let text = row.get(column).map(cell_text).unwrap_or_default();
                format!("{:<CELL_WIDTH$}", truncate(&text, CELL_WIDTH))
            })
            .collect();
        lines.push(cells.join(" "));
    }

    lines
}


/// Print the progress table.
pub fn render_progress_table(table: &ProgressTable) {
    if table.is_empty() {
        println!("{}No progress data available{}", DIM, RESET);
        return;
    }

    for line in progress_lines(table) {
        println!("{line}");
    }

    if let (Some(start), Some(end)) = (table.start_date(), table.end_date()) {
        println!();
        println!("{}Data range: {}{}{} to {}{}", DIM, RESET, CYAN, start, end, RESET);
    }
}


/// Print the contributors table with a per-level summary.
pub fn render_contributors_table(table: &ContributorsTable) {
    if table.is_empty() {
        println!("{}No contributor data available{}", DIM, RESET);
        return;
    }

    for line in contributor_lines(table) {
        println!("{line}");
    }

    let summary = table.summary();
    println!();
    println!(
        "{}Beginner: {}{}{}  Intermediate: {}{}{}  Advanced: {}{}{}  Total: {}{}{}",
        DIM,
        GREEN, summary.beginner, DIM,
        GREEN, summary.intermediate, DIM,
        GREEN, summary.advanced, DIM,
        BOLD, summary.total, RESET,
    );
}


fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}


fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
