use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use concentrator_charging::logging::init_tracing;
use concentrator_charging::report::save_solpos_table;
use concentrator_charging::solpos::{generate_day, sun_bounds};
use concentrator_charging::Config;

/// Solar position and ground direct-normal irradiance for every minute of daylight
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output file (default: solposdata.csv)
    output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, env = "CONCSETUP_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = Config::load(args.config.as_deref()).context("loading configuration")?;
    let site = config.site;
    let output = args.output.unwrap_or_else(|| site.output_path.clone());

    let bounds = sun_bounds(&site);
    println!("Sunrise: {}", bounds.sunrise);
    println!("Sunset : {}", bounds.sunset);

    let samples = generate_day(&site).context("computing solar positions")?;
    save_solpos_table(&output, &samples)
        .with_context(|| format!("writing {}", output.display()))?;
    println!("Wrote {} rows to {}", samples.len(), output.display());
    println!("DONE!");
    Ok(())
}
