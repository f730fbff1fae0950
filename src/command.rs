use tracing::{info, warn};

use crate::config::SetupTimeConfig;
use crate::error::ChargingResult;
use crate::irradiance::load_irradiance_table;
use crate::report::save_energy_table;
use crate::setup_time::{self, ConcentratorCountStudy};
use crate::types::SetupTimeReport;

pub const NOTHING_TO_DO: &str = "Nothing to be done.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Times,
    NConcs,
    Nothing,
}

impl Mode {
    /// Case-insensitive keyword lookup; anything unrecognised (or nothing)
    /// maps to `Nothing`.
    pub fn from_keyword(keyword: Option<&str>) -> Self {
        match keyword {
            Some(k) if k.eq_ignore_ascii_case("TIMES") => Mode::Times,
            Some(k) if k.eq_ignore_ascii_case("NCONCS") => Mode::NConcs,
            _ => Mode::Nothing,
        }
    }
}

/// Load the irradiance table, run the tradeoff analysis and write the
/// energy-vs-setup-time table.
pub fn run_times(config: &SetupTimeConfig) -> ChargingResult<SetupTimeReport> {
    info!(path = %config.input_path.display(), "loading solpos data");
    let table = load_irradiance_table(
        &config.input_path,
        config.time_column,
        config.irradiance_column,
    )?;
    let report = setup_time::analyze(&table, config)?;
    info!(path = %config.output_path.display(), "writing energy table");
    save_energy_table(&config.output_path, &report.entries)?;
    Ok(report)
}

pub fn run_nconcs() -> ConcentratorCountStudy {
    let study = ConcentratorCountStudy::default();
    warn!(
        element_len_cm = study.element_len_cm,
        max_concentrators = study.max_concentrators,
        "concentrator count comparison is not implemented"
    );
    study
}
