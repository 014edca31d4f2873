use plotters::prelude::*;
use serde::Deserialize;

use super::analytics::{LanguageCount, SizeBucket, TimelineBucket};
use super::format::format_number;

/// Which aggregate a chart is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Languages,
    Timeline,
    Sizes,
}

impl ChartKind {
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Languages => "Language Distribution",
            ChartKind::Timeline => "Repository Creation Timeline",
            ChartKind::Sizes => "Repository Size Distribution",
        }
    }
}

/// Chart configuration options
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub colors: Vec<RGBColor>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            title: "Repository Analytics".to_string(),
            colors: vec![
                RGBColor(99, 102, 241), // Indigo
                RGBColor(236, 72, 153), // Pink
                RGBColor(16, 185, 129), // Emerald
                RGBColor(245, 158, 11), // Amber
                RGBColor(59, 130, 246), // Blue
                RGBColor(139, 92, 246), // Violet
                RGBColor(239, 68, 68),  // Red
                RGBColor(20, 184, 166), // Teal
            ],
        }
    }
}

impl ChartConfig {
    pub fn titled(kind: ChartKind) -> Self {
        Self {
            title: kind.title().to_string(),
            ..Self::default()
        }
    }

    fn color(&self, idx: usize) -> RGBColor {
        if self.colors.is_empty() {
            BLUE
        } else {
            self.colors[idx % self.colors.len()]
        }
    }
}

/// Label/value pairs ready to plot
pub fn language_series(languages: &[LanguageCount]) -> Vec<(String, u64)> {
    languages
        .iter()
        .map(|l| (l.language.clone(), l.count))
        .collect()
}

pub fn timeline_series(timeline: &[TimelineBucket]) -> Vec<(String, u64)> {
    timeline
        .iter()
        .map(|bucket| (bucket.label.clone(), bucket.count))
        .collect()
}

pub fn size_series(sizes: &[SizeBucket]) -> Vec<(String, u64)> {
    sizes
        .iter()
        .map(|bucket| (bucket.range.to_string(), bucket.count))
        .collect()
}

/// Upper bound of the value axis with ~10% headroom
fn value_axis_max(series: &[(String, u64)]) -> u64 {
    let max = series.iter().map(|(_, count)| *count).max().unwrap_or(0);
    if max == 0 {
        10
    } else {
        max + (max / 10).max(1)
    }
}

pub fn generate_language_chart(
    languages: &[LanguageCount],
    config: &ChartConfig,
) -> Result<String, String> {
    generate_bar_chart(&language_series(languages), config, "Language")
}

/// Sizes always has four buckets, so an all-zero histogram counts as empty
pub fn generate_size_chart(
    sizes: &[SizeBucket],
    config: &ChartConfig,
) -> Result<String, String> {
    let series = size_series(sizes);
    if series.iter().all(|(_, count)| *count == 0) {
        return Ok(generate_empty_chart(&config.title, config.width, config.height));
    }
    generate_bar_chart(&series, config, "Size")
}

fn generate_bar_chart(
    series: &[(String, u64)],
    config: &ChartConfig,
    x_desc: &str,
) -> Result<String, String> {
    if series.is_empty() {
        return Ok(generate_empty_chart(&config.title, config.width, config.height));
    }

    let y_max = value_axis_max(series);
    let labels: Vec<&str> = series.iter().map(|(label, _)| label.as_str()).collect();

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (config.width, config.height))
            .into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| format!("Failed to fill background: {}", e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, ("Arial", 24).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d((0u32..series.len() as u32).into_segmented(), 0u64..y_max)
            .map_err(|e| format!("Failed to build chart: {}", e))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(x_desc)
            .y_desc("Repositories")
            .x_labels(series.len())
            .x_label_formatter(&|value| match value {
                SegmentValue::CenterOf(idx) | SegmentValue::Exact(idx) => labels
                    .get(*idx as usize)
                    .map(|label| label.to_string())
                    .unwrap_or_default(),
                SegmentValue::Last => String::new(),
            })
            .y_label_formatter(&|y| format_number(*y))
            .draw()
            .map_err(|e| format!("Failed to configure mesh: {}", e))?;

        for (idx, (label, count)) in series.iter().enumerate() {
            let color = config.color(idx);
            chart
                .draw_series(
                    Histogram::vertical(&chart)
                        .style(color.filled())
                        .margin(10)
                        .data(std::iter::once((idx as u32, *count))),
                )
                .map_err(|e| format!("Failed to draw bar for {}: {}", label, e))?;
        }

        root.present()
            .map_err(|e| format!("Failed to present chart: {}", e))?;
    }

    Ok(buffer)
}

/// Line chart of repositories created per month
pub fn generate_timeline_chart(
    timeline: &[TimelineBucket],
    config: &ChartConfig,
) -> Result<String, String> {
    let series = timeline_series(timeline);
    if series.is_empty() {
        return Ok(generate_empty_chart(&config.title, config.width, config.height));
    }

    let y_max = value_axis_max(&series);
    // A single month still needs a non-empty x range
    let x_max = (series.len() as u32).saturating_sub(1).max(1);
    let labels: Vec<&str> = series.iter().map(|(label, _)| label.as_str()).collect();
    let color = config.color(0);

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (config.width, config.height))
            .into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| format!("Failed to fill background: {}", e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, ("Arial", 24).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(0u32..x_max, 0u64..y_max)
            .map_err(|e| format!("Failed to build chart: {}", e))?;

        chart
            .configure_mesh()
            .x_desc("Month")
            .y_desc("Repositories Created")
            .x_labels(series.len())
            .x_label_formatter(&|idx| {
                labels
                    .get(*idx as usize)
                    .map(|label| label.to_string())
                    .unwrap_or_default()
            })
            .y_label_formatter(&|y| format_number(*y))
            .draw()
            .map_err(|e| format!("Failed to configure mesh: {}", e))?;

        let points: Vec<(u32, u64)> = series
            .iter()
            .enumerate()
            .map(|(idx, (_, count))| (idx as u32, *count))
            .collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
            .map_err(|e| format!("Failed to draw line series: {}", e))?;

        chart
            .draw_series(PointSeries::of_element(
                points.iter().copied(),
                3,
                color,
                &|coord, size, style| Circle::new(coord, size, style.filled()),
            ))
            .map_err(|e| format!("Failed to draw points: {}", e))?;

        root.present()
            .map_err(|e| format!("Failed to present chart: {}", e))?;
    }

    Ok(buffer)
}

/// Generates an empty chart when no data is available
fn generate_empty_chart(title: &str, width: u32, height: u32) -> String {
    format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\
            <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\
            <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"Arial\" font-size=\"18\" fill=\"#666666\">\
                No data available for: {}\
            </text>\
        </svg>",
        width,
        height,
        width / 2,
        height / 2,
        title
    )
}
