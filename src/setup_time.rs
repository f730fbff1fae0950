//! Setup time versus harvested energy.
//!
//! Charging happens from sunrise to the morning cutoff (8:00) and from the
//! evening start (17:00) to sunset. Deploying the concentrators eats into
//! both windows, so a setup time of `m` minutes leaves
//! `[sunrise, 8 − m/60]` and `[17 + m/60, sunset]`.
//!
//! Windows are integrated with signed bounds: once a setup time pushes a
//! window start past its end, that window contributes negative energy.

use tracing::info;

use crate::config::SetupTimeConfig;
use crate::error::{ChargingError, ChargingResult};
use crate::quadrature::{integrate, QuadOptions};
use crate::report::hrs_to_readable;
use crate::types::{IrradianceTable, SetupTimeEntry, SetupTimeReport};

/// Energy per unit area (Wh/m^2) collected between `ti` and `tf`, both in
/// decimal hours, for an irradiance function `f` in W/m^2.
pub fn total_normal_energy<F: Fn(f64) -> f64>(ti: f64, tf: f64, f: F, opts: &QuadOptions) -> f64 {
    integrate(f, ti, tf, opts).value
}

/// Morning plus evening energy left after `minutes` of setup in each window.
pub fn energy_for_setup_time<F: Fn(f64) -> f64>(
    minutes: f64,
    sunrise: f64,
    sunset: f64,
    f: F,
    config: &SetupTimeConfig,
) -> f64 {
    let opts = QuadOptions::from(config);
    let shift = minutes / 60.0;
    let morning = total_normal_energy(sunrise, config.morning_cutoff - shift, &f, &opts);
    let evening = total_normal_energy(config.evening_start + shift, sunset, &f, &opts);
    morning + evening
}

pub fn setup_time_table<F: Fn(f64) -> f64>(
    sunrise: f64,
    sunset: f64,
    f: F,
    config: &SetupTimeConfig,
) -> Vec<SetupTimeEntry> {
    (0..=config.max_setup_minutes)
        .map(|minutes| SetupTimeEntry {
            minutes,
            energy: energy_for_setup_time(minutes as f64, sunrise, sunset, &f, config),
        })
        .collect()
}

/// Full tradeoff analysis for one day of samples.
pub fn analyze(
    table: &IrradianceTable,
    config: &SetupTimeConfig,
) -> ChargingResult<SetupTimeReport> {
    let (sunrise, sunset) = match (table.sunrise(), table.sunset()) {
        (Some(sunrise), Some(sunset)) => (sunrise, sunset),
        _ => return Err(ChargingError::EmptyTable),
    };

    info!("interpolating");
    let spline = table.interpolate()?;
    let f = |t: f64| spline.eval(t);
    let opts = QuadOptions::from(config);

    info!(
        sunrise = %hrs_to_readable(sunrise),
        sunset = %hrs_to_readable(sunset),
        "day bounds (hours from midnight)"
    );

    let morning_energy = total_normal_energy(sunrise, config.morning_cutoff, f, &opts);
    info!(energy = morning_energy, "sunrise to morning cutoff");
    let evening_energy = total_normal_energy(config.evening_start, sunset, f, &opts);
    info!(energy = evening_energy, "evening start to sunset");

    info!(max_minutes = config.max_setup_minutes, "computing energy for range of setup times");
    let entries = setup_time_table(sunrise, sunset, f, config);

    Ok(SetupTimeReport {
        sunrise,
        sunset,
        morning_energy,
        evening_energy,
        entries,
    })
}

pub const ELEMENT_LEN_CM: f64 = 15.5;
pub const ELEMENT_AREA_CM2: f64 = ELEMENT_LEN_CM * ELEMENT_LEN_CM;
pub const MAX_CONCENTRATORS: u32 = 65;

/// Parameters of the "more concentrators vs. more setup time" comparison.
/// Only the element geometry is defined; the comparison itself has no model
/// yet and produces nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcentratorCountStudy {
    pub element_len_cm: f64,
    pub element_area_cm2: f64,
    pub max_concentrators: u32,
}

impl Default for ConcentratorCountStudy {
    fn default() -> Self {
        Self {
            element_len_cm: ELEMENT_LEN_CM,
            element_area_cm2: ELEMENT_AREA_CM2,
            max_concentrators: MAX_CONCENTRATORS,
        }
    }
}

impl ConcentratorCountStudy {
    pub fn is_implemented(&self) -> bool {
        false
    }
}
