use super::colors::GRID_GREY;
use super::ChartSpec;
use crate::error::{PlotError, Result};
use crate::layout::{FigureSpec, TickPlan};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::coord::combinators::BindKeyPoints;
use plotters::prelude::*;
use plotters::style::FontTransform;

/// Narrowest image we draw, in pixels. Keeps few-atom all-atom figures legible.
pub const MIN_PIXEL_WIDTH: u32 = 480;
pub const MIN_PIXEL_HEIGHT: u32 = 320;

const TICK_FONT_SIZE: u32 = 10;

fn backend_error<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Backend(e.to_string())
}

/// Largest image side we draw, in pixels.
pub const MAX_PIXEL_SIDE: u32 = 1 << 16;

/// Figure size in pixels at `dpi` pixels per figure unit.
pub(crate) fn pixel_size(figure: &FigureSpec, dpi: f64) -> Result<(u32, u32)> {
    let width = figure.width * dpi;
    let height = figure.height * dpi;
    let valid = |v: f64| v.is_finite() && v >= 0.0 && v.round() <= MAX_PIXEL_SIDE as f64;
    if !valid(width) || !valid(height) || !(dpi.is_finite() && dpi > 0.0) {
        return Err(PlotError::InvalidDimensions { width, height });
    }
    Ok((
        (width.round() as u32).max(MIN_PIXEL_WIDTH),
        (height.round() as u32).max(MIN_PIXEL_HEIGHT),
    ))
}

// Vertical tick labels need room for the longest one.
fn x_label_area_size(ticks: &TickPlan) -> u32 {
    let longest = ticks
        .major_labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0) as u32;
    (longest * 7 + 15).clamp(30, 200)
}

fn y_range(spec: &ChartSpec) -> std::ops::Range<f64> {
    match spec.y_bounds() {
        None => 0.0..1.0,
        Some((lo, hi)) if (hi - lo).abs() < f64::EPSILON => (lo - 1.0)..(hi + 1.0),
        Some((lo, hi)) => {
            let pad = (hi - lo) * 0.05;
            (lo - pad)..(hi + pad)
        }
    }
}

/// Draw `spec` into an in-memory RGB buffer and encode it as PNG.
///
/// The pixel buffer and drawing area live only for this call.
pub(crate) fn draw_png(spec: &ChartSpec, dpi: f64) -> Result<Vec<u8>> {
    let (width, height) = pixel_size(&spec.figure, dpi)?;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(backend_error)?;

        // one slot of margin on each side of the atom positions
        let x_axis = (-1..spec.x_extent().max(1) as i32)
            .with_key_points(
                spec.ticks
                    .major_positions
                    .iter()
                    .map(|&p| p as i32)
                    .collect(),
            )
            .with_light_points(spec.ticks.minor_positions.iter().map(|&p| p as i32));

        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(x_label_area_size(&spec.ticks))
            .y_label_area_size(70)
            .build_cartesian_2d(x_axis, y_range(spec))
            .map_err(backend_error)?;

        let x_formatter = |x: &i32| {
            let Ok(position) = usize::try_from(*x) else {
                return String::new();
            };
            spec.ticks
                .label_at(position)
                .unwrap_or_default()
                .to_string()
        };

        // mesh first, so the grid sits beneath the lines
        chart
            .configure_mesh()
            .x_label_formatter(&x_formatter)
            .x_label_style(
                ("sans-serif", TICK_FONT_SIZE)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .y_desc(spec.y_label.as_str())
            .bold_line_style(GRID_GREY.mix(0.6))
            .light_line_style(GRID_GREY.mix(0.2))
            .draw()
            .map_err(backend_error)?;

        for line in &spec.lines {
            let color = line.color;
            chart
                .draw_series(LineSeries::new(
                    line.points.iter().map(|&(x, y)| (x as i32, y)),
                    color.stroke_width(2),
                ))
                .map_err(backend_error)?
                .label(line.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(backend_error)?;

        root.present().map_err(backend_error)?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(&buffer, width, height, ExtendedColorType::Rgb8)?;
    Ok(png)
}
