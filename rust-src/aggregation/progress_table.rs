//! Daily progress table reindexed onto a contiguous date range.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{Result, StatsError};
use crate::models::ProgressDay;


/// Per-day counters, zero-filled on missing days.
pub const DAILY_COLUMNS: [&str; 2] = ["mapped", "validated"];

/// Running totals, carried forward on missing days.
pub const CUMULATIVE_COLUMNS: [&str; 3] = ["cumulative_mapped", "cumulative_validated", "total_tasks"];


/// One calendar day of project progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressRow {
    pub date: NaiveDate,
    pub mapped: i64,
    pub validated: i64,
    pub cumulative_mapped: i64,
    pub cumulative_validated: i64,
    pub total_tasks: i64,
}


impl ProgressRow {
    /// Value of a named column, `None` for `date` or unknown names.
    pub fn get(&self, column: &str) -> Option<i64> {
        match column {
            "mapped" => Some(self.mapped),
            "validated" => Some(self.validated),
            "cumulative_mapped" => Some(self.cumulative_mapped),
            "cumulative_validated" => Some(self.cumulative_validated),
            "total_tasks" => Some(self.total_tasks),
            _ => None,
        }
    }
}


#[derive(Debug, Clone, Copy)]
struct Daily {
    mapped: i64,
    validated: i64,
}


#[derive(Debug, Clone, Copy)]
struct Cumulative {
    mapped: i64,
    validated: i64,
    total_tasks: i64,
}


/// Progress table with one row per day from the first to the last reported date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressTable {
    rows: Vec<ProgressRow>,
}


impl ProgressTable {
    /// Build the table from the `stats` array of the daily progress record.
    ///
    /// Records may arrive unsorted or with gaps. The output covers
    /// `[min(date), max(date)]` without holes. When a date repeats, the later
    /// record wins.
    pub fn from_stats(stats: &[ProgressDay]) -> Result<Self> {
        let mut daily: BTreeMap<NaiveDate, Daily> = BTreeMap::new();
        let mut cumulative: BTreeMap<NaiveDate, Cumulative> = BTreeMap::new();

        for day in stats {
            let date = parse_date(&day.date)?;
            daily.insert(date, Daily {
                mapped: day.mapped,
                validated: day.validated,
            });
            cumulative.insert(date, Cumulative {
                mapped: day.cumulative_mapped,
                validated: day.cumulative_validated,
                total_tasks: day.total_tasks,
            });
        }

        let (Some(&start), Some(&end)) = (daily.keys().next(), daily.keys().next_back()) else {
            return Ok(Self::default());
        };

        let mut rows = Vec::with_capacity((end - start).num_days() as usize + 1);
        // Both maps share keys, so `start` is present in `cumulative`.
        let mut carried = cumulative[&start];

        for current in start.iter_days().take_while(|date| *date <= end) {
            let counts = daily.get(&current).copied().unwrap_or(Daily { mapped: 0, validated: 0 });
            if let Some(totals) = cumulative.get(&current) {
                carried = *totals;
            }

            rows.push(ProgressRow {
                date: current,
                mapped: counts.mapped,
                validated: counts.validated,
                cumulative_mapped: carried.mapped,
                cumulative_validated: carried.validated,
                total_tasks: carried.total_tasks,
            });
        }

        Ok(Self { rows })
    }

    /// Column names in output order, `date` first.
    pub fn columns() -> Vec<&'static str> {
        let mut columns = vec!["date"];
        columns.extend(DAILY_COLUMNS);
        columns.extend(CUMULATIVE_COLUMNS);
        columns
    }

    pub fn rows(&self) -> &[ProgressRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|r| r.date)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.date)
    }

    /// All values of a numeric column, in date order.
    pub fn column(&self, name: &str) -> Option<Vec<i64>> {
        self.rows.iter().map(|row| row.get(name)).collect()
    }
}


/// Parse `YYYY-MM-DD`, tolerating a trailing time component.
fn parse_date(value: &str) -> Result<NaiveDate> {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| StatsError::InvalidDate(value.to_string()))
}
