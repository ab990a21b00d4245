//! Solid-angle map driver.
//!
//! Computes the per-pixel fractional solid angle map for a square detector
//! grid and a point source, prints it to stdout, and optionally renders it as
//! an annotated heat map with a color-scale legend.
//!
//! Usage:
//! ```
//! cargo run --release --bin omega_map -- -n 2 -s 24.25 -x -12.125 -y 12.125 -z 12.125
//! cargo run --release --bin omega_map -- -n 8 -s 6.0 -x 3.0 -y -4.5 -z 20.0 --plot
//! ```

use clap::Parser;
use log::info;
use ndarray::Array2;
use pixel_solid_angle::{solid_angle_map, DetectorGrid, SourcePoint};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

#[derive(Parser)]
#[command(name = "omega_map")]
#[command(about = "Per-pixel solid angle map for a square detector grid")]
#[command(version)]
struct Args {
    /// Number of rows/columns in the square detector grid
    #[arg(short = 'n', long)]
    dimension: usize,

    /// Edge length of one square pixel (any consistent unit)
    #[arg(short = 's', long)]
    pixel_size: f64,

    /// Source x coordinate, same unit as the pixel size
    #[arg(short = 'x', long, allow_hyphen_values = true)]
    source_x: f64,

    /// Source y coordinate, same unit as the pixel size
    #[arg(short = 'y', long, allow_hyphen_values = true)]
    source_y: f64,

    /// Perpendicular source distance from the detector plane (nonzero)
    #[arg(short = 'z', long, allow_hyphen_values = true)]
    source_z: f64,

    /// Render the map as an annotated heat map image
    #[arg(long)]
    plot: bool,

    /// Output file for the heat map
    #[arg(long, default_value = "omega_map.png")]
    plot_output: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let grid = DetectorGrid::new(args.dimension, args.pixel_size)?;
    let source = SourcePoint::new(args.source_x, args.source_y, args.source_z)?;
    info!(
        "{}x{} grid, pixel size {}, source at ({}, {}, {})",
        args.dimension,
        args.dimension,
        args.pixel_size,
        args.source_x,
        args.source_y,
        args.source_z
    );

    let map = solid_angle_map(&grid, &source);

    for row in map.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:.4}")).collect();
        println!("{}", cells.join("  "));
    }
    println!();
    println!("total fraction of sphere: {:.4}", map.sum());

    if args.plot {
        render_heat_map(&map, &args.plot_output)?;
        println!("wrote {}", args.plot_output);
    }

    Ok(())
}

/// Map a normalized value in [0, 1] to a perceptual dark-to-bright ramp.
fn heat_color(t: f64) -> RGBColor {
    const STOPS: [(f64, (u8, u8, u8)); 3] = [
        (0.0, (68, 1, 84)),
        (0.5, (33, 145, 140)),
        (1.0, (253, 231, 37)),
    ];

    let t = t.clamp(0.0, 1.0);
    for w in STOPS.windows(2) {
        let (t0, c0) = w[0];
        let (t1, c1) = w[1];
        if t <= t1 {
            let f = (t - t0) / (t1 - t0);
            let lerp = |a: u8, b: u8| (a as f64 + f * (b as f64 - a as f64)).round() as u8;
            return RGBColor(lerp(c0.0, c1.0), lerp(c0.1, c1.1), lerp(c0.2, c1.2));
        }
    }
    let (_, c) = STOPS[2];
    RGBColor(c.0, c.1, c.2)
}

/// Render the map as a color-coded grid, one annotated cell per pixel, with a
/// vertical color-scale legend on the right. Row 0 is drawn topmost to match
/// the detector's physical layout.
fn render_heat_map(map: &Array2<f64>, path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let n = map.nrows();
    let min = map.iter().copied().fold(f64::INFINITY, f64::min);
    let max = map.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };

    let root = BitMapBackend::new(path, (780, 660)).into_drawing_area();
    root.fill(&WHITE)?;
    let (main, legend) = root.split_horizontally(640);

    let mut chart = ChartBuilder::on(&main)
        .caption("dΩ / 4π", ("sans-serif", 28))
        .margin(10)
        .build_cartesian_2d(0f64..n as f64, 0f64..n as f64)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .disable_y_axis()
        .draw()?;

    let label_style = ("sans-serif", 15)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    for ((row, col), &value) in map.indexed_iter() {
        let x0 = col as f64;
        let y0 = (n - 1 - row) as f64;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, y0), (x0 + 1.0, y0 + 1.0)],
            heat_color((value - min) / span).filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("{value:.4}"),
            (x0 + 0.5, y0 + 0.5),
            label_style.clone(),
        )))?;
    }

    let mut bar = ChartBuilder::on(&legend)
        .margin(15)
        .set_label_area_size(LabelAreaPosition::Right, 60)
        .build_cartesian_2d(0f64..1f64, min..(min + span))?;
    bar.configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_labels(6)
        .y_label_formatter(&|v| format!("{v:.4}"))
        .draw()?;

    let steps = 64;
    bar.draw_series((0..steps).map(|k| {
        let lo = min + span * k as f64 / steps as f64;
        let hi = min + span * (k + 1) as f64 / steps as f64;
        Rectangle::new([(0.0, lo), (1.0, hi)], heat_color((lo - min) / span).filled())
    }))?;

    root.present()?;
    Ok(())
}
