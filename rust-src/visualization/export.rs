//! Export of rendered charts to SVG or PNG files.

use std::path::Path;

use tracing::debug;

use crate::error::Result;


/// Output format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Svg,
    Png,
}


impl ChartFormat {
    /// `.svg` writes SVG; any other extension is rasterized to PNG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ChartFormat::Svg,
            _ => ChartFormat::Png,
        }
    }
}


/// Write the chart to `output_path` in the format implied by its extension.
pub fn export_chart(svg_content: &str, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    match ChartFormat::from_path(output_path) {
        ChartFormat::Svg => export_chart_svg(svg_content, output_path),
        ChartFormat::Png => export_chart_png(svg_content, output_path),
    }
}


/// Export chart as SVG.
pub fn export_chart_svg(svg_content: &str, output_path: &Path) -> Result<()> {
    std::fs::write(output_path, svg_content)?;
    debug!(path = %output_path.display(), "wrote SVG chart");
    Ok(())
}


/// Export chart as PNG.
#[cfg(feature = "chart")]
pub fn export_chart_png(svg_content: &str, output_path: &Path) -> Result<()> {
    use crate::error::StatsError;

    let mut options = resvg::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    // Parse SVG
    let tree = resvg::usvg::Tree::from_str(svg_content, &options)
        .map_err(|e| StatsError::Render(format!("Failed to parse SVG: {e}")))?;

    // Render to pixmap
    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| StatsError::Render(format!("Failed to create {width}x{height} pixmap")))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap
        .save_png(output_path)
        .map_err(|e| StatsError::Render(format!("Failed to save PNG to {}: {e}", output_path.display())))?;

    debug!(path = %output_path.display(), width, height, "wrote PNG chart");
    Ok(())
}


/// Export chart as PNG (unavailable in this build).
#[cfg(not(feature = "chart"))]
pub fn export_chart_png(_svg_content: &str, _output_path: &Path) -> Result<()> {
    use crate::capability::{require, Capability};

    require(Capability::Chart)
}


/// Open file with default application.
pub fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.to_string_lossy()])
            .spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()?;
    }

    Ok(())
}
