use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use concentrator_charging::geometry::{
    compare_configurations, max_topshell_width_for_rows, min_angle_for_rows,
};
use concentrator_charging::logging::init_tracing;
use concentrator_charging::report::save_geometry_curves;
use concentrator_charging::Config;

/// Concentrator rows that fit for each topshell hypothesis and the monocoque
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// TOML configuration file
    #[arg(long, env = "CONCSETUP_CONFIG")]
    config: Option<PathBuf>,

    /// Write every curve (space and rows vs. angle) to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = Config::load(args.config.as_deref()).context("loading configuration")?;
    let geom = &config.geometry;
    let curves = compare_configurations(geom);

    println!(
        "Rows of concentrators for various topshell widths, 0-{} degrees",
        geom.max_angle
    );
    println!("Topshell 'height' = {}", geom.topshell_height);
    for curve in &curves {
        let first = curve.samples.first();
        let last = curve.samples.last();
        let rows_range = match (first, last) {
            (Some(f), Some(l)) => format!("{} -> {} rows", f.rows_that_fit(), l.rows_that_fit()),
            _ => "no samples".to_string(),
        };
        let min_angle = match min_angle_for_rows(curve, geom.target_rows) {
            Some(theta) => format!("{theta} degrees"),
            None => "never".to_string(),
        };
        println!(
            "{:>10}: {rows_range}; smallest angle for {} rows = {min_angle}",
            curve.configuration.label, geom.target_rows
        );
    }
    println!(
        "Max topshell width for {} rows at vertical (m) = {}",
        geom.target_rows,
        max_topshell_width_for_rows(geom, geom.target_rows)
    );

    if let Some(path) = args.csv {
        save_geometry_curves(&path, &curves)
            .with_context(|| format!("writing curves to {}", path.display()))?;
        println!("Wrote {} curves to {}", curves.len(), path.display());
    }
    Ok(())
}
