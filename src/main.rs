use anyhow::Context;
use clap::Parser;
use tracing::debug;

use concentrator_charging::command::{self, Mode, NOTHING_TO_DO};
use concentrator_charging::logging::init_tracing;
use concentrator_charging::report::hrs_to_readable;
use concentrator_charging::Config;

mod cli;

use cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();
    if !args.rest.is_empty() {
        debug!(ignored = ?args.rest, "extra arguments ignored");
    }

    match Mode::from_keyword(args.mode.as_deref()) {
        Mode::Times => {
            let config = Config::load(args.config.as_deref()).context("loading configuration")?;
            let mut setup = config.setup_time;
            if let Some(input) = args.input {
                setup.input_path = input;
            }
            if let Some(output) = args.output {
                setup.output_path = output;
            }

            let report = command::run_times(&setup).with_context(|| {
                format!("setup-time analysis of {}", setup.input_path.display())
            })?;

            println!("Sunrise (hr from 12am): {}", hrs_to_readable(report.sunrise));
            println!("Sunset (hr from 12am): {}", hrs_to_readable(report.sunset));
            println!(
                "Sunrise to {:.0}:00 energy (Wh/m^2): {:.2}",
                setup.morning_cutoff, report.morning_energy
            );
            println!(
                "{:.0}:00 to sunset energy (Wh/m^2): {:.2}",
                setup.evening_start, report.evening_energy
            );
            println!(
                "Wrote {} setup times to {}",
                report.entries.len(),
                setup.output_path.display()
            );
        }
        Mode::NConcs => {
            command::run_nconcs();
        }
        Mode::Nothing => println!("{NOTHING_TO_DO}"),
    }
    Ok(())
}
