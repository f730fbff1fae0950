pub mod angles;
pub mod command;
pub mod config;
pub mod error;
pub mod geometry;
pub mod interpolation;
pub mod irradiance;
pub mod logging;
pub mod quadrature;
pub mod report;
pub mod setup_time;
pub mod solpos;
pub mod types;

pub use angles::{
    day_of_year, deg_to_rad, equation_of_time, hour_angle, normalize_angle, pressure_air_mass,
    rad_to_deg, refracted_elevation, relative_air_mass, solar_altitude, solar_azimuth,
    solar_declination, solar_position, solar_zenith_angle, sunrise_sunset, DEGREES_PER_HOUR,
    EARTH_AXIAL_TILT, SOLAR_CONSTANT,
};

pub use command::Mode;
pub use config::{Config, GeometryConfig, SetupTimeConfig, SiteConfig};
pub use error::{ChargingError, ChargingResult};

pub use geometry::{
    angle_sweep, compare_configurations, geometry_curve, linspace, max_topshell_width_for_rows,
    min_angle_for_rows, row_count, space_available, space_curve,
};

pub use interpolation::CubicSpline;
pub use irradiance::{load_irradiance_table, read_irradiance_table};
pub use quadrature::{integrate, QuadOptions, Quadrature};
pub use setup_time::{energy_for_setup_time, setup_time_table, total_normal_energy};
pub use solpos::generate_day;

pub use types::{
    GeometryCurve, GeometrySample, IrradianceTable, SetupTimeEntry, SetupTimeReport,
    ShellConfiguration, SolarPosition, SolposSample, SunriseSunset,
};
