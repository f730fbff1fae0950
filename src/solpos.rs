//! One day of solar position and direct-normal irradiance for a site.
//!
//! Produces the table consumed by the setup-time calculator: a row at
//! sunrise, one per whole minute in between, and a row at sunset. During
//! polar night the table is empty.

use chrono::{FixedOffset, NaiveDate, TimeZone};
use tracing::{debug, info};

use crate::angles;
use crate::config::SiteConfig;
use crate::error::{ChargingError, ChargingResult};
use crate::types::{SolposSample, SunriseSunset};

const MINUTES_PER_DAY: f64 = 1440.0;

/// Whole (hour, minute, second) for a time in minutes from midnight.
pub fn hms_from_minutes(time: f64) -> (u32, u32, u32) {
    let hour = (time / 60.0) as u32;
    let minute = (time as u32) % 60;
    let second = (60.0 * time.fract()) as u32;
    (hour, minute, second)
}

/// Ground direct-normal irradiance from the extraterrestrial value and the
/// pressure-corrected air mass.
pub fn ground_direct_normal(etrn: f64, ampress: f64) -> f64 {
    if ampress < 0.0 {
        return 0.0;
    }
    1.1 * etrn * 0.7_f64.powf(ampress.powf(0.678))
}

pub fn sun_bounds(site: &SiteConfig) -> SunriseSunset {
    angles::sunrise_sunset(
        site.latitude,
        site.longitude,
        site.timezone,
        site.day_of_year as i32,
    )
}

fn site_offset(site: &SiteConfig) -> ChargingResult<FixedOffset> {
    let seconds = (site.timezone * 3600.0).round() as i32;
    FixedOffset::east_opt(seconds).ok_or_else(|| {
        ChargingError::Config(format!("site.timezone {} is out of range", site.timezone))
    })
}

pub fn sample_at(
    site: &SiteConfig,
    hour: u32,
    minute: u32,
    second: u32,
) -> ChargingResult<SolposSample> {
    let date = NaiveDate::from_yo_opt(site.year, site.day_of_year).ok_or_else(|| {
        ChargingError::Config(format!(
            "day {} does not exist in {}",
            site.day_of_year, site.year
        ))
    })?;
    let naive = date.and_hms_opt(hour, minute, second).ok_or_else(|| {
        ChargingError::Config(format!("invalid time {hour}:{minute}:{second}"))
    })?;
    let dt = site_offset(site)?
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| ChargingError::Config(format!("ambiguous local time {naive}")))?;

    let position = angles::solar_position(site.latitude, site.longitude, &dt);
    let elevation_refracted =
        angles::refracted_elevation(position.altitude, site.temperature, site.pressure);
    let zenith_refracted = 90.0 - elevation_refracted;
    let etrn = angles::extraterrestrial_normal(position.day_of_year, zenith_refracted);
    let ampress = angles::pressure_air_mass(zenith_refracted, site.pressure).unwrap_or(-1.0);

    Ok(SolposSample {
        hour,
        minute,
        second,
        position,
        elevation_refracted,
        etrn,
        ampress,
        gndrn: ground_direct_normal(etrn, ampress),
    })
}

fn sample_at_minutes(site: &SiteConfig, time: f64) -> ChargingResult<SolposSample> {
    let (hour, minute, second) = hms_from_minutes(time);
    sample_at(site, hour, minute, second)
}

pub fn generate_day(site: &SiteConfig) -> ChargingResult<Vec<SolposSample>> {
    let bounds = sun_bounds(site);
    let sunrise = bounds.sunrise.max(0.0);
    // Keep the last sample inside the calendar day.
    let sunset = bounds.sunset.min(MINUTES_PER_DAY - 1.0 / 60.0);
    info!(sunrise, sunset, "sun bounds (minutes from midnight)");
    if sunset <= sunrise {
        info!("sun stays below the horizon; no rows generated");
        return Ok(Vec::new());
    }

    let mut samples = Vec::with_capacity((sunset - sunrise).max(0.0) as usize + 2);
    samples.push(sample_at_minutes(site, sunrise)?);
    let mut time = sunrise.trunc() + 1.0;
    while time < sunset {
        samples.push(sample_at_minutes(site, time)?);
        time += 1.0;
    }
    samples.push(sample_at_minutes(site, sunset)?);
    debug!(rows = samples.len(), "generated day table");
    Ok(samples)
}
