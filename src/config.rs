//! Run configuration.
//!
//! Every calculator takes its parameters from these structs instead of
//! module constants. Values are layered: built-in defaults, then an optional
//! TOML file, then `CONCSETUP__SECTION__FIELD` environment variables.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{ChargingError, ChargingResult};
use crate::types::ShellConfiguration;

pub const INCH_TO_M: f64 = 0.0254;
pub const ENV_PREFIX: &str = "CONCSETUP__";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub geometry: GeometryConfig,
    pub setup_time: SetupTimeConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Bounding box height (m).
    pub box_height: f64,
    /// Bounding box width (m).
    pub box_width: f64,
    /// Deployed element length: lens, cell assembly, focal length, enclosure.
    pub element_length: f64,
    /// Deployed element width; elements are taken as square.
    pub element_width: f64,
    pub max_angle: f64,
    pub npoints: usize,
    pub monocoque_width: f64,
    pub monocoque_height: f64,
    pub topshell_min_width: f64,
    pub topshell_max_width: f64,
    pub topshell_count: usize,
    /// Topshell curvature expressed as an equivalent height (m).
    pub topshell_height: f64,
    pub target_rows: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            box_height: 2.2,
            box_width: 1.8,
            element_length: 12.0 * INCH_TO_M,
            element_width: 7.0 * INCH_TO_M,
            max_angle: 30.0,
            npoints: 1000,
            monocoque_width: 1.8,
            monocoque_height: 0.55,
            topshell_min_width: 1.5,
            topshell_max_width: 1.8,
            topshell_count: 4,
            topshell_height: 0.2,
            target_rows: 3,
        }
    }
}

impl GeometryConfig {
    pub fn monocoque(&self) -> ShellConfiguration {
        ShellConfiguration {
            label: "Monocoque".to_string(),
            width: self.monocoque_width,
            height: self.monocoque_height,
        }
    }

    pub fn topshell_hypotheses(&self) -> Vec<ShellConfiguration> {
        crate::geometry::linspace(
            self.topshell_min_width,
            self.topshell_max_width,
            self.topshell_count,
        )
        .into_iter()
        .map(|width| ShellConfiguration {
            label: format!("{width:.2}"),
            width,
            height: self.topshell_height,
        })
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupTimeConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub time_column: usize,
    pub irradiance_column: usize,
    /// End of morning charging (decimal hours).
    pub morning_cutoff: f64,
    /// Start of evening charging (decimal hours).
    pub evening_start: f64,
    pub max_setup_minutes: u32,
    pub quad_limit: usize,
    pub epsabs: f64,
    pub epsrel: f64,
}

impl Default for SetupTimeConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("solposdata.csv"),
            output_path: PathBuf::from("energyVSetupTime.csv"),
            time_column: 0,
            irradiance_column: 11,
            morning_cutoff: 8.0,
            evening_start: 17.0,
            max_setup_minutes: 30,
            quad_limit: 100,
            epsabs: 1.49e-8,
            epsrel: 1.49e-8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub latitude: f64,
    pub longitude: f64,
    /// Clock offset from UTC in hours.
    pub timezone: f64,
    pub year: i32,
    pub day_of_year: u32,
    /// Ambient temperature (°C) for refraction.
    pub temperature: f64,
    /// Surface pressure (mbar).
    pub pressure: f64,
    pub output_path: PathBuf,
}

impl Default for SiteConfig {
    // Coober Pedy, 20 October 2015, daylight time.
    fn default() -> Self {
        Self {
            latitude: -29.0111,
            longitude: 134.7556,
            timezone: 10.5,
            year: 2015,
            day_of_year: 293,
            temperature: 20.0,
            pressure: 1013.0,
            output_path: PathBuf::from("solposdata.csv"),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> ChargingResult<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            if !path.is_file() {
                return Err(ChargingError::Config(format!(
                    "config file {} not found",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(path));
        }
        let config: Config = figment.merge(Env::prefixed(ENV_PREFIX).split("__")).extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChargingResult<()> {
        let g = &self.geometry;
        if g.npoints == 0 {
            return Err(ChargingError::Config("geometry.npoints must be positive".into()));
        }
        if g.element_width.is_nan() || g.element_width <= 0.0 {
            return Err(ChargingError::Config(
                "geometry.element_width must be positive".into(),
            ));
        }
        let s = &self.setup_time;
        if s.quad_limit == 0 {
            return Err(ChargingError::Config("setup_time.quad_limit must be positive".into()));
        }
        let site = &self.site;
        if !(-90.0..=90.0).contains(&site.latitude) {
            return Err(ChargingError::Config(format!(
                "site.latitude must be between -90 and 90, got {}",
                site.latitude
            )));
        }
        let days = if crate::angles::leap_year(site.year) { 366 } else { 365 };
        if !(1..=days).contains(&site.day_of_year) {
            return Err(ChargingError::Config(format!(
                "site.day_of_year must be between 1 and {days}, got {}",
                site.day_of_year
            )));
        }
        Ok(())
    }
}
