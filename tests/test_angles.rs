use chrono::{FixedOffset, TimeZone};
use chrono_tz::Australia::Adelaide;

use concentrator_charging::angles::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── DayOfYear ──

#[test]
fn test_day_of_year_known_dates() {
    assert_eq!(day_of_year(2026, 1, 1), 1);
    assert_eq!(day_of_year(2026, 3, 21), 80);
    assert_eq!(day_of_year(2015, 10, 20), 293);
    assert_eq!(day_of_year(2026, 12, 31), 365);
}

#[test]
fn test_day_of_year_leap_year() {
    assert_eq!(day_of_year(2024, 2, 29), 60);
    assert_eq!(day_of_year(2024, 12, 31), 366);
    assert_eq!(day_of_year(2000, 2, 29), 60);
    assert_eq!(day_of_year(1900, 2, 28), 59);
}

// ── NormalizeAngle ──

#[test]
fn test_normalize_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (360.0, 0.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (405.0, 45.0),
        (-450.0, 270.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(input), expected, 1e-9);
    }
}

// ── SolarDeclination / EoT ──

#[test]
fn test_solar_declination_solstices_equinoxes() {
    assert_approx!(solar_declination(172), 23.45, 0.5);
    assert_approx!(solar_declination(355), -23.45, 0.5);
    assert_approx!(solar_declination(80), 0.0, 1.0);
}

#[test]
fn test_declination_and_eot_mid_october() {
    assert_approx!(solar_declination(293), -11.40, 0.01);
    assert_approx!(equation_of_time(293), 15.35, 0.01);
}

// ── SolarPosition ──

#[test]
fn test_springfield_equinox_standard_time() {
    let cst = FixedOffset::west_opt(6 * 3600).unwrap();
    let dt = cst.with_ymd_and_hms(2026, 3, 21, 12, 0, 0).unwrap();
    let pos = solar_position(39.8, -89.6, &dt);
    assert_eq!(pos.day_of_year, 80);
    assert_approx!(pos.declination, 0.0, 1.0);
    assert_approx!(pos.equation_of_time, -7.5, 2.0);
    assert_approx!(pos.zenith, 40.0, 2.0);
    assert_approx!(pos.altitude, 50.0, 2.0);
    assert!(pos.azimuth >= 174.0 && pos.azimuth <= 185.0, "azimuth={}", pos.azimuth);
}

#[test]
fn test_day_number_follows_local_date() {
    // 06:00 ACDT is still the previous day in UTC.
    let acdt = FixedOffset::east_opt(37800).unwrap();
    let dt = acdt.with_ymd_and_hms(2015, 10, 20, 6, 0, 0).unwrap();
    assert_eq!(solar_position(-29.0111, 134.7556, &dt).day_of_year, 293);
}

#[test]
fn test_fixed_offset_matches_named_zone() {
    let acdt = FixedOffset::east_opt(37800).unwrap();
    let fixed = acdt.with_ymd_and_hms(2015, 10, 20, 13, 16, 0).unwrap();
    let named = Adelaide.with_ymd_and_hms(2015, 10, 20, 13, 16, 0).unwrap();
    let a = solar_position(-29.0111, 134.7556, &fixed);
    let b = solar_position(-29.0111, 134.7556, &named);
    assert_approx!(a.zenith, b.zenith, 1e-12);
    assert_approx!(a.azimuth, b.azimuth, 1e-12);
}

#[test]
fn test_southern_hemisphere_noon_sun_is_north() {
    let acdt = FixedOffset::east_opt(37800).unwrap();
    let dt = acdt.with_ymd_and_hms(2015, 10, 20, 13, 16, 0).unwrap();
    let pos = solar_position(-29.0111, 134.7556, &dt);
    assert_approx!(pos.altitude, 72.39, 0.05);
    assert!(pos.azimuth > 355.0 || pos.azimuth < 5.0, "azimuth={}", pos.azimuth);
}

// ── Refraction / air mass ──

#[test]
fn test_refraction_vanishes_near_zenith() {
    assert_eq!(refraction_correction(86.0, 20.0, 1013.0), 0.0);
}

#[test]
fn test_refraction_lifts_low_sun() {
    let low = refraction_correction(0.5, 20.0, 1013.0);
    let high = refraction_correction(30.0, 20.0, 1013.0);
    assert!(low > 0.3 && low < 0.6, "low={}", low);
    assert!(high > 0.0 && high < low);
}

#[test]
fn test_refracted_elevation_floor() {
    assert_eq!(refracted_elevation(-60.0, 20.0, 1013.0), -9.0);
}

#[test]
fn test_air_mass_overhead_is_one() {
    assert_approx!(relative_air_mass(0.0).unwrap(), 1.0, 1e-3);
    assert_approx!(pressure_air_mass(0.0, 506.5).unwrap(), 0.5, 1e-3);
}

#[test]
fn test_air_mass_undefined_below_horizon() {
    assert!(relative_air_mass(93.5).is_none());
    assert!(relative_air_mass(90.0).unwrap() > 30.0);
}

#[test]
fn test_extraterrestrial_normal() {
    assert_approx!(extraterrestrial_normal(293, 30.0), 1379.09, 0.05);
    assert_approx!(extraterrestrial_normal(1, 30.0), SOLAR_CONSTANT * 1.035, 0.2);
    assert_eq!(extraterrestrial_normal(293, 91.0), 0.0);
}

// ── Sunrise / sunset ──

#[test]
fn test_sunrise_sunset_coober_pedy() {
    let ss = sunrise_sunset(-29.0111, 134.7556, 10.5, 293);
    assert_approx!(ss.sunrise, 409.94, 0.05);
    assert_approx!(ss.sunset, 1181.31, 0.05);
}

#[test]
fn test_sunrise_sunset_symmetric_about_noon() {
    let ss = sunrise_sunset(40.0, 15.0, 1.0, 172);
    let noon = 720.0 - 4.0 * 15.0 - equation_of_time(172) + 60.0;
    assert_approx!((ss.sunrise + ss.sunset) / 2.0, noon, 1e-9);
}

#[test]
fn test_polar_day_and_night() {
    let day = sunrise_sunset(80.0, 0.0, 0.0, 172);
    assert_eq!((day.sunrise, day.sunset), (0.0, 1440.0));
    let night = sunrise_sunset(80.0, 0.0, 0.0, 355);
    assert_eq!(night.sunrise, night.sunset);
}
