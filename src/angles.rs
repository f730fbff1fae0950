use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

use crate::types::{SolarPosition, SunriseSunset};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const SOLAR_CONSTANT: f64 = 1367.0;
pub const STANDARD_PRESSURE_MBAR: f64 = 1013.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

pub fn day_of_year(year: i32, month: u32, day: u32) -> i32 {
    let dim = days_in_months(year);
    let sum: u32 = dim[..(month - 1) as usize].iter().sum();
    (sum + day) as i32
}

pub fn intermediate_angle_b(n: i32) -> f64 {
    deg_to_rad((n - 1) as f64 * (360.0 / 365.0))
}

/// Equation of time in minutes for day number `n`.
pub fn equation_of_time(n: i32) -> f64 {
    let b = intermediate_angle_b(n);
    229.18
        * (0.000075
            + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

/// Hours to add to UTC to get local solar time at `longitude` (east positive).
pub fn utc_lst_correction(longitude: f64, eot: f64) -> f64 {
    (4.0 * longitude + eot) / 60.0
}

pub fn hour_angle(local_solar_time: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

pub fn solar_declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * ((284 + n) as f64 / 365.0)).sin()
}

pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let cos_zenith =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}

pub fn solar_altitude(zenith_angle: f64) -> f64 {
    90.0 - zenith_angle
}

pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_az = -dec_rad.cos() * ha_rad.sin();
    let cos_az = dec_rad.sin() * lat_rad.cos() - dec_rad.cos() * lat_rad.sin() * ha_rad.cos();
    let az_rad = sin_az.atan2(cos_az);
    normalize_angle(rad_to_deg(az_rad))
}

/// Solar position for a local civil time. The day number is taken from the
/// local calendar date, so early-morning samples east of Greenwich stay on
/// the same day as the rest of the table.
pub fn solar_position<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> SolarPosition {
    let offset_hours = dt.offset().fix().local_minus_utc() as f64 / 3600.0;
    let local_hours =
        dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
    let utc_hours = local_hours - offset_hours;
    let n = dt.ordinal() as i32;
    let eot = equation_of_time(n);
    let decl = solar_declination(n);
    let correction = utc_lst_correction(longitude, eot);
    let lst = (utc_hours + correction).rem_euclid(24.0);
    let ha = hour_angle(lst);
    let zenith = solar_zenith_angle(latitude, decl, ha);
    SolarPosition {
        day_of_year: n,
        declination: decl,
        equation_of_time: eot,
        local_solar_time: lst,
        hour_angle: ha,
        zenith,
        altitude: solar_altitude(zenith),
        azimuth: solar_azimuth(latitude, decl, ha),
    }
}

/// Atmospheric refraction correction in degrees for an unrefracted
/// elevation, scaled for temperature (°C) and pressure (mbar).
pub fn refraction_correction(elevation: f64, temperature: f64, pressure: f64) -> f64 {
    if elevation > 85.0 {
        return 0.0;
    }
    let tan_elev = deg_to_rad(elevation).tan();
    let arcsec = if elevation >= 5.0 {
        58.1 / tan_elev - 0.07 / tan_elev.powi(3) + 0.000086 / tan_elev.powi(5)
    } else if elevation >= -0.575 {
        1735.0
            + elevation
                * (-518.2 + elevation * (103.4 + elevation * (-12.79 + elevation * 0.711)))
    } else {
        -20.774 / tan_elev
    };
    let pressure_temperature =
        (pressure * 283.0) / (STANDARD_PRESSURE_MBAR * (273.0 + temperature));
    arcsec * pressure_temperature / 3600.0
}

/// Refracted elevation, floored at -9° like the unrefracted horizon limit.
pub fn refracted_elevation(elevation: f64, temperature: f64, pressure: f64) -> f64 {
    (elevation + refraction_correction(elevation, temperature, pressure)).max(-9.0)
}

/// Kasten relative optical air mass for a refracted zenith angle.
/// Returns `None` once the sun is more than 3° below the horizon.
pub fn relative_air_mass(zenith_refracted: f64) -> Option<f64> {
    if zenith_refracted > 93.0 {
        return None;
    }
    Some(
        1.0 / (deg_to_rad(zenith_refracted).cos()
            + 0.50572 * (96.07995 - zenith_refracted).powf(-1.6364)),
    )
}

pub fn pressure_air_mass(zenith_refracted: f64, pressure: f64) -> Option<f64> {
    relative_air_mass(zenith_refracted).map(|am| am * pressure / STANDARD_PRESSURE_MBAR)
}

/// Earth radius vector correction factor (mean distance / distance)^2.
pub fn earth_radius_vector_correction(n: i32) -> f64 {
    let b = intermediate_angle_b(n);
    1.000110
        + 0.034221 * b.cos()
        + 0.001280 * b.sin()
        + 0.000719 * (2.0 * b).cos()
        + 0.000077 * (2.0 * b).sin()
}

/// Extraterrestrial direct normal irradiance (W/m^2); zero while the
/// refracted sun is below the horizon.
pub fn extraterrestrial_normal(n: i32, zenith_refracted: f64) -> f64 {
    if deg_to_rad(zenith_refracted).cos() > 0.0 {
        SOLAR_CONSTANT * earth_radius_vector_correction(n)
    } else {
        0.0
    }
}

/// Unrefracted sunrise and sunset in minutes from local midnight for a site
/// whose clock runs `timezone` hours ahead of UTC.
pub fn sunrise_sunset(latitude: f64, longitude: f64, timezone: f64, n: i32) -> SunriseSunset {
    let lat_rad = deg_to_rad(latitude);
    let decl_rad = deg_to_rad(solar_declination(n));
    let cos_h = -lat_rad.tan() * decl_rad.tan();
    let solar_noon = 720.0 - 4.0 * longitude - equation_of_time(n) + 60.0 * timezone;

    if cos_h >= 1.0 {
        SunriseSunset {
            sunrise: solar_noon,
            sunset: solar_noon,
        }
    } else if cos_h <= -1.0 {
        SunriseSunset {
            sunrise: 0.0,
            sunset: 1440.0,
        }
    } else {
        let half_day_minutes = (rad_to_deg(cos_h.acos()) / DEGREES_PER_HOUR) * 60.0;
        SunriseSunset {
            sunrise: solar_noon - half_day_minutes,
            sunset: solar_noon + half_day_minutes,
        }
    }
}
