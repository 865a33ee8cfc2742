//! Composite progress chart for a project.

use std::path::PathBuf;

use serde_json::Value;
use tracing::info;

use crate::aggregation::ContributorSummary;
use crate::api::Transport;
use crate::capability::{require, Capability};
use crate::config::preview_chart_path;
use crate::error::{Result, StatsError};
use crate::models::MappingLevel;
use crate::visualization::{export_chart, open_file, ChartFormat, ProgressChart, Series};

use super::ProjectStats;


/// Options for [`ProjectStats::plot`].
#[derive(Debug, Clone, Default)]
pub struct PlotOptions {
    /// Series to draw; `None` draws all four.
    pub which: Option<Vec<String>>,
    /// Draw a dashed line at the total task count.
    pub total: bool,
    /// Write the chart here instead of displaying it.
    pub save_path: Option<PathBuf>,
}


impl<T: Transport> ProjectStats<T> {
    /// Render the progress chart and either save or display it.
    ///
    /// The series selection is validated before anything is fetched or drawn.
    pub fn plot(&mut self, options: &PlotOptions) -> Result<()> {
        let svg = self.render_svg(options)?;

        match &options.save_path {
            Some(path) => {
                export_chart(&svg, path)?;
                info!(path = %path.display(), format = ?ChartFormat::from_path(path), "saved chart");
            }
            None => {
                let path = preview_chart_path(self.project_id());
                export_chart(&svg, &path)?;
                info!(path = %path.display(), "opening chart preview");
                open_file(&path)?;
            }
        }

        Ok(())
    }

    /// Build the chart SVG without writing it anywhere.
    pub fn render_svg(&mut self, options: &PlotOptions) -> Result<String> {
        let series = Series::parse_selection(options.which.as_deref())?;
        require(Capability::Chart)?;

        let progress = self.get_progress_df()?;
        let total_line = if options.total {
            Some(self.total_tasks()?)
        } else {
            None
        };

        let contributors = self.get_contributors_df()?.summary();
        let title = self.title()?;
        let annotation = self.annotation(&contributors)?;

        let chart = ProgressChart {
            title,
            annotation,
            progress: &progress,
            series: &series,
            total_line,
        };
        Ok(chart.to_svg())
    }

    fn title(&self) -> Result<String> {
        Ok(format!(
            "Project {}: ({})",
            display_value(self.data_value("projectId")?),
            self.name()?
        ))
    }

    fn annotation(&self, contributors: &ContributorSummary) -> Result<Vec<String>> {
        let mut lines: Vec<String> = MappingLevel::ALL
            .into_iter()
            .map(|level| format!("{} contributors: {}", level.label(), contributors.count(level)))
            .collect();

        lines.push(format!("Total contributors: {}", contributors.total));
        lines.push(format!(
            "Percentage of all tasks mapped: {}%",
            display_value(self.data_value("percentMapped")?)
        ));
        lines.push(format!(
            "Percentage of all tasks validated: {}%",
            display_value(self.data_value("percentValidated")?)
        ));

        let created = display_value(self.data_value("created")?);
        let created_date = created.split('T').next().unwrap_or_default();
        lines.push(format!("Created on: {created_date}"));

        Ok(lines)
    }

    fn data_value(&self, key: &str) -> Result<&Value> {
        self.data()
            .get(key)
            .ok_or_else(|| StatsError::KeyNotFound(key.to_string()))
    }
}


/// Strings without quotes, everything else as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::project::fixtures::{self, BASE_URL, PROJECT_ID, TOTAL_TASKS};

    #[cfg(feature = "chart")]
    fn attribute<'a>(element: &'a str, name: &str) -> &'a str {
        let start = element.find(&format!(" {name}=\"")).unwrap() + name.len() + 3;
        let len = element[start..].find('"').unwrap();
        &element[start..start + len]
    }

    #[test]
    fn test_bogus_series_rejected_without_side_effects() {
        let transport = fixtures::transport();
        let calls = transport.calls();
        let mut stats = ProjectStats::new(PROJECT_ID, ApiClient::new(BASE_URL, transport)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let options = PlotOptions {
            which: Some(vec!["bogus".to_string()]),
            total: false,
            save_path: Some(path.clone()),
        };

        match stats.plot(&options) {
            Err(StatsError::InvalidSeriesSelection { item, valid }) => {
                assert_eq!(item, "bogus");
                assert_eq!(valid, vec!["mapped", "cumulative_mapped", "validated", "cumulative_validated"]);
            }
            other => panic!("expected invalid selection, got {other:?}"),
        }
        assert!(!path.exists());
        assert_eq!(calls.borrow().len(), 1);
    }

    #[cfg(feature = "chart")]
    #[test]
    fn test_render_svg_annotation() {
        let mut stats = fixtures::project_stats();
        let svg = stats.render_svg(&PlotOptions::default()).unwrap();

        assert!(svg.contains("Project 9507: (Flood mapping: Lower Shire)"));
        assert!(svg.contains("Beginner contributors: 1"));
        assert!(svg.contains("Intermediate contributors: 1"));
        assert!(svg.contains("Advanced contributors: 1"));
        assert!(svg.contains("Total contributors: 3"));
        assert!(svg.contains("Percentage of all tasks mapped: 64%"));
        assert!(svg.contains("Percentage of all tasks validated: 31%"));
        assert!(svg.contains("Created on: 2020-11-02<"));
        assert!(!svg.contains("total-line"));
    }

    #[cfg(feature = "chart")]
    #[test]
    fn test_plot_with_total_line_saves_svg() {
        let mut stats = fixtures::project_stats();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");

        let options = PlotOptions {
            which: None,
            total: true,
            save_path: Some(path.clone()),
        };
        stats.plot(&options).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert_eq!(svg.matches("class=\"total-line\"").count(), 1);
        assert_eq!(stats.total_tasks().unwrap(), TOTAL_TASKS);

        let progress = stats.get_progress_df().unwrap();
        let expected = ProgressChart {
            title: String::new(),
            annotation: Vec::new(),
            progress: &progress,
            series: &Series::ALL,
            total_line: Some(TOTAL_TASKS),
        }
        .y_position(TOTAL_TASKS as f64);

        let line = svg.lines().find(|l| l.contains("class=\"total-line\"")).unwrap();
        assert_eq!(attribute(line, "y1"), format!("{expected:.1}"));
        assert_eq!(attribute(line, "y2"), format!("{expected:.1}"));
    }

    #[cfg(feature = "chart")]
    #[test]
    fn test_plot_subset_of_series() {
        let mut stats = fixtures::project_stats();
        let options = PlotOptions {
            which: Some(vec!["cumulative_mapped".to_string()]),
            ..Default::default()
        };
        let svg = stats.render_svg(&options).unwrap();

        assert!(svg.contains("area-cumulative_mapped"));
        assert!(!svg.contains("bar-mapped"));
        assert!(!svg.contains("area-cumulative_validated"));
    }

    #[cfg(feature = "chart")]
    #[test]
    fn test_plot_png() {
        let mut stats = fixtures::project_stats();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");

        stats
            .plot(&PlotOptions {
                total: true,
                save_path: Some(path.clone()),
                ..Default::default()
            })
            .unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[cfg(not(feature = "chart"))]
    #[test]
    fn test_plot_requires_chart_capability() {
        let transport = fixtures::transport();
        let calls = transport.calls();
        let mut stats = ProjectStats::new(PROJECT_ID, ApiClient::new(BASE_URL, transport)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let options = PlotOptions {
            which: None,
            total: true,
            save_path: Some(path.clone()),
        };

        assert!(matches!(
            stats.plot(&options),
            Err(StatsError::MissingCapability(Capability::Chart))
        ));
        assert!(matches!(
            stats.render_svg(&options),
            Err(StatsError::MissingCapability(Capability::Chart))
        ));
        assert!(!path.exists());
        assert_eq!(calls.borrow().len(), 1);
    }
}
