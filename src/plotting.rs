/*
Figure rendering for the analytical trajectory.

Three figures are produced: position vs time, velocity vs time, and a
twin-axis overlay of both series. The library core stays free of I/O; only
these helpers (driven from the binary) touch the filesystem.
*/

use std::path::Path;

use ndarray::Array1;
use plotters::prelude::*;

pub const POSITION_BLUE: RGBColor = RGBColor(0x25, 0x65, 0xE8);
pub const VELOCITY_RED: RGBColor = RGBColor(0xD2, 0x04, 0x2D);

type PlotResult = Result<(), Box<dyn std::error::Error>>;

/// Axis range of a series with a 5% margin on either side.
fn padded_range(values: &Array1<f64>) -> (f64, f64) {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = max - min;
    let pad = if span > 0.0 { 0.05 * span } else { 0.5 };
    (min - pad, max + pad)
}

fn plot_single_series(
    path: &Path,
    y_label: &str,
    series_label: &str,
    color: RGBColor,
    times: &Array1<f64>,
    values: &Array1<f64>,
) -> PlotResult {
    let root = BitMapBackend::new(path, (1280, 960)).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max) = padded_range(times);
    let (y_min, y_max) = padded_range(values);

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart.configure_mesh().x_desc("Time").y_desc(y_label).draw()?;

    chart
        .draw_series(LineSeries::new(
            times.iter().zip(values.iter()).map(|(&t, &v)| (t, v)),
            &color,
        ))?
        .label(series_label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

    // Sample markers on top of the line, matching the reference figures.
    chart.draw_series(
        times
            .iter()
            .zip(values.iter())
            .map(|(&t, &v)| Circle::new((t, v), 3, color.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Position vs time.
pub fn plot_positions(path: &Path, times: &Array1<f64>, positions: &Array1<f64>) -> PlotResult {
    plot_single_series(
        path,
        "Analytical Position",
        "Analytical Positions",
        POSITION_BLUE,
        times,
        positions,
    )
}

/// Velocity vs time.
pub fn plot_velocities(path: &Path, times: &Array1<f64>, velocities: &Array1<f64>) -> PlotResult {
    plot_single_series(
        path,
        "Analytical Velocity",
        "Analytical Velocity",
        VELOCITY_RED,
        times,
        velocities,
    )
}

/// Both series on one chart, position on a secondary y-axis.
pub fn plot_twin_axes(
    path: &Path,
    times: &Array1<f64>,
    positions: &Array1<f64>,
    velocities: &Array1<f64>,
) -> PlotResult {
    let root = BitMapBackend::new(path, (1280, 960)).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max) = padded_range(times);
    let (v_min, v_max) = padded_range(velocities);
    let (p_min, p_max) = padded_range(positions);

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, v_min..v_max)?
        .set_secondary_coord(x_min..x_max, p_min..p_max);

    chart
        .configure_mesh()
        .x_desc("Time")
        .y_desc("Analytical Velocity")
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc("Analytical Position")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            times.iter().zip(velocities.iter()).map(|(&t, &v)| (t, v)),
            &VELOCITY_RED,
        ))?
        .label("Analytical Velocity")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], VELOCITY_RED));

    chart
        .draw_secondary_series(LineSeries::new(
            times.iter().zip(positions.iter()).map(|(&t, &x)| (t, x)),
            &POSITION_BLUE,
        ))?
        .label("Analytical Positions")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], POSITION_BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
