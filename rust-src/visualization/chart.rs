//! SVG generation for the project progress chart.

use crate::aggregation::ProgressTable;

use super::series::Series;


// Canvas layout
const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 680.0;
const PLOT_LEFT: f64 = 70.0;
const PLOT_RIGHT: f64 = WIDTH - 30.0;
const PLOT_TOP: f64 = 220.0;
const PLOT_BOTTOM: f64 = HEIGHT - 60.0;

const BAR_WIDTH: f64 = 0.45;
const LINE_HEIGHT: f64 = 18.0;
const TITLE_WRAP: usize = 80;
const FONT: &str = "DejaVu Sans, Arial, sans-serif";


/// Everything needed to draw one chart.
#[derive(Debug, Clone)]
pub struct ProgressChart<'a> {
    pub title: String,
    pub annotation: Vec<String>,
    pub progress: &'a ProgressTable,
    pub series: &'a [Series],
    /// Height of the dashed reference line, if drawn.
    pub total_line: Option<usize>,
}


/// Maps data coordinates onto the plot area.
struct Axes {
    days: usize,
    y_max: f64,
}


impl Axes {
    fn day_width(&self) -> f64 {
        (PLOT_RIGHT - PLOT_LEFT) / self.days.max(1) as f64
    }

    /// Centre of day `index`; the x domain is `[-0.5, days - 0.5]`.
    fn x(&self, index: f64) -> f64 {
        PLOT_LEFT + (index + 0.5) * self.day_width()
    }

    fn y(&self, value: f64) -> f64 {
        PLOT_BOTTOM - (value / self.y_max) * (PLOT_BOTTOM - PLOT_TOP)
    }
}


impl ProgressChart<'_> {
    fn has(&self, series: Series) -> bool {
        self.series.contains(&series)
    }

    fn values(&self, series: Series) -> Vec<i64> {
        self.progress.column(series.name()).unwrap_or_default()
    }

    /// Largest value drawn, including the reference line.
    fn data_max(&self) -> i64 {
        let series_max = self
            .series
            .iter()
            .flat_map(|s| self.values(*s))
            .max()
            .unwrap_or(0);
        let total = self.total_line.map(|t| t as i64).unwrap_or(0);
        series_max.max(total)
    }

    fn y_step(&self) -> f64 {
        // Task counts are whole numbers, so ticks never go below 1
        nice_step(self.data_max().max(1) as f64 / 5.0).max(1.0)
    }

    fn axes(&self) -> Axes {
        let y_step = self.y_step();
        Axes {
            days: self.progress.len(),
            y_max: ((self.data_max() as f64 * 1.05) / y_step).ceil().max(1.0) * y_step,
        }
    }

    /// Vertical canvas position of a task count.
    #[cfg(test)]
    pub(crate) fn y_position(&self, value: f64) -> f64 {
        self.axes().y(value)
    }

    /// Render the chart as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let y_step = self.y_step();
        let axes = self.axes();

        let mut svg_parts = vec![
            format!(
                r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
                w = WIDTH,
                h = HEIGHT
            ),
            format!(r#"<rect width="{}" height="{}" fill="white"/>"#, WIDTH, HEIGHT),
        ];

        // Annotation block, top left
        for (i, line) in self.annotation.iter().enumerate() {
            svg_parts.push(format!(
                r#"<text x="10" y="{:.1}" font-family="{}" font-size="13" fill="black">{}</text>"#,
                22.0 + i as f64 * LINE_HEIGHT,
                FONT,
                escape_xml(line)
            ));
        }

        // Title, wrapped and anchored just above the plot area
        let title_lines = wrap_text(&self.title, TITLE_WRAP);
        for (i, line) in title_lines.iter().enumerate() {
            let y = PLOT_TOP - 12.0 - (title_lines.len() - 1 - i) as f64 * LINE_HEIGHT;
            svg_parts.push(format!(
                r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="{}" font-size="15" fill="black">{}</text>"#,
                (PLOT_LEFT + PLOT_RIGHT) / 2.0,
                y,
                FONT,
                escape_xml(line)
            ));
        }

        svg_parts.extend(self.grid(&axes, y_step));

        // Filled areas go under the bars
        for series in Series::ALL.into_iter().filter(|s| s.is_cumulative() && self.has(*s)) {
            svg_parts.push(self.area(&axes, series));
        }

        let offset = if self.has(Series::Mapped) && self.has(Series::Validated) {
            BAR_WIDTH / 2.0
        } else {
            0.0
        };
        if self.has(Series::Mapped) {
            svg_parts.extend(self.bars(&axes, Series::Mapped, -offset));
        }
        if self.has(Series::Validated) {
            svg_parts.extend(self.bars(&axes, Series::Validated, offset));
        }

        if let Some(total) = self.total_line {
            svg_parts.push(format!(
                r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="black" stroke-width="1.5" stroke-dasharray="6,4" class="total-line"/>"#,
                PLOT_LEFT,
                PLOT_RIGHT,
                y = axes.y(total as f64)
            ));
        }

        svg_parts.extend(self.legend());

        svg_parts.push("</svg>".to_string());
        svg_parts.join("\n")
    }

    fn grid(&self, axes: &Axes, y_step: f64) -> Vec<String> {
        let mut parts = vec![format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="black"/>"#,
            PLOT_LEFT,
            PLOT_TOP,
            PLOT_RIGHT - PLOT_LEFT,
            PLOT_BOTTOM - PLOT_TOP
        )];

        // Y ticks
        let ticks = (axes.y_max / y_step).round() as usize;
        for tick in 0..=ticks {
            let value = tick as f64 * y_step;
            let y = axes.y(value);
            parts.push(format!(
                r#"<line x1="{:.1}" y1="{y:.1}" x2="{}" y2="{y:.1}" stroke="black"/>"#,
                PLOT_LEFT - 5.0,
                PLOT_LEFT
            ));
            parts.push(format!(
                r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-family="{}" font-size="11" fill="black">{}</text>"#,
                PLOT_LEFT - 8.0,
                y + 4.0,
                FONT,
                value
            ));
        }

        // X ticks, day index since the project started
        let x_step = nice_step(axes.days as f64 / 10.0).max(1.0) as usize;
        for day in (0..axes.days).step_by(x_step) {
            let x = axes.x(day as f64);
            parts.push(format!(
                r#"<line x1="{x:.1}" y1="{}" x2="{x:.1}" y2="{:.1}" stroke="black"/>"#,
                PLOT_BOTTOM,
                PLOT_BOTTOM + 5.0
            ));
            parts.push(format!(
                r#"<text x="{x:.1}" y="{:.1}" text-anchor="middle" font-family="{}" font-size="11" fill="black">{}</text>"#,
                PLOT_BOTTOM + 18.0,
                FONT,
                day
            ));
        }

        parts.push(format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="{}" font-size="13" fill="black">Days since project beginning</text>"#,
            (PLOT_LEFT + PLOT_RIGHT) / 2.0,
            HEIGHT - 18.0,
            FONT
        ));
        parts.push(format!(
            r#"<text x="18" y="{y:.1}" text-anchor="middle" font-family="{}" font-size="13" fill="black" transform="rotate(-90 18 {y:.1})">Tasks</text>"#,
            FONT,
            y = (PLOT_TOP + PLOT_BOTTOM) / 2.0
        ));

        parts
    }

    fn bars(&self, axes: &Axes, series: Series, offset: f64) -> Vec<String> {
        let width = BAR_WIDTH * axes.day_width();
        self.values(series)
            .into_iter()
            .enumerate()
            .filter(|(_, value)| *value > 0)
            .map(|(day, value)| {
                let left = axes.x(day as f64 + offset) - width / 2.0;
                let top = axes.y(value as f64);
                format!(
                    r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" class="bar-{}"/>"#,
                    left,
                    top,
                    width,
                    PLOT_BOTTOM - top,
                    series.color(),
                    series.name()
                )
            })
            .collect()
    }

    fn area(&self, axes: &Axes, series: Series) -> String {
        let values = self.values(series);
        let last = values.len().saturating_sub(1) as f64;

        let mut points = vec![format!("{:.2},{:.2}", axes.x(0.0), PLOT_BOTTOM)];
        for (day, value) in values.iter().enumerate() {
            points.push(format!("{:.2},{:.2}", axes.x(day as f64), axes.y(*value as f64)));
        }
        points.push(format!("{:.2},{:.2}", axes.x(last), PLOT_BOTTOM));

        format!(
            r#"<polygon points="{}" fill="{}" class="area-{}"/>"#,
            points.join(" "),
            series.color(),
            series.name()
        )
    }

    fn legend(&self) -> Vec<String> {
        let x = WIDTH - 200.0;
        let mut parts = Vec::new();
        let mut row = 0.0;

        for series in Series::ALL.into_iter().filter(|s| self.has(*s)) {
            let y = 20.0 + row * LINE_HEIGHT;
            parts.push(format!(
                r#"<rect x="{x}" y="{:.1}" width="18" height="10" fill="{}"/>"#,
                y - 9.0,
                series.color()
            ));
            parts.push(legend_label(x, y, series.label()));
            row += 1.0;
        }

        if self.total_line.is_some() {
            let y = 20.0 + row * LINE_HEIGHT;
            parts.push(format!(
                r#"<line x1="{x}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="black" stroke-dasharray="4,3"/>"#,
                y - 4.0,
                x + 18.0,
                y - 4.0
            ));
            parts.push(legend_label(x, y, "Total"));
        }

        parts
    }
}


fn legend_label(x: f64, y: f64, label: &str) -> String {
    format!(
        r#"<text x="{:.1}" y="{:.1}" font-family="{}" font-size="11" fill="black">{}</text>"#,
        x + 24.0,
        y,
        FONT,
        label
    )
}


/// Round a raw step up to 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}


/// Greedy word wrap.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}


fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
