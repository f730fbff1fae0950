use std::path::{Path, PathBuf};

use concentrator_charging::config::{Config, SetupTimeConfig, SiteConfig};
use concentrator_charging::error::ChargingError;

#[test]
fn test_default_setup_time_config() {
    let c = SetupTimeConfig::default();
    assert_eq!(c.input_path, PathBuf::from("solposdata.csv"));
    assert_eq!(c.output_path, PathBuf::from("energyVSetupTime.csv"));
    assert_eq!((c.time_column, c.irradiance_column), (0, 11));
    assert_eq!((c.morning_cutoff, c.evening_start), (8.0, 17.0));
    assert_eq!(c.max_setup_minutes, 30);
    assert_eq!(c.quad_limit, 100);
}

#[test]
fn test_default_site_config() {
    let s = SiteConfig::default();
    assert_eq!(s.latitude, -29.0111);
    assert_eq!(s.longitude, 134.7556);
    assert_eq!(s.timezone, 10.5);
    assert_eq!((s.year, s.day_of_year), (2015, 293));
    assert_eq!((s.temperature, s.pressure), (20.0, 1013.0));
}

#[test]
fn test_defaults_validate() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_toml_overrides_defaults() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "charging.toml",
            r#"
            [geometry]
            npoints = 300
            topshell_height = 0.25

            [setup_time]
            max_setup_minutes = 45
            "#,
        )?;
        let config = Config::load(Some(Path::new("charging.toml"))).expect("config loads");
        assert_eq!(config.geometry.npoints, 300);
        assert_eq!(config.geometry.topshell_height, 0.25);
        assert_eq!(config.geometry.box_height, 2.2);
        assert_eq!(config.setup_time.max_setup_minutes, 45);
        assert_eq!(config.site, SiteConfig::default());
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("charging.toml", "[setup_time]\nquad_limit = 50\n")?;
        jail.set_env("CONCSETUP__SETUP_TIME__QUAD_LIMIT", "200");
        jail.set_env("CONCSETUP__SITE__DAY_OF_YEAR", "172");
        let config = Config::load(Some(Path::new("charging.toml"))).expect("config loads");
        assert_eq!(config.setup_time.quad_limit, 200);
        assert_eq!(config.site.day_of_year, 172);
        Ok(())
    });
}

#[test]
fn test_missing_config_file() {
    let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
    assert!(matches!(err, ChargingError::Config(_)));
}

#[test]
fn test_invalid_values_rejected() {
    let mut config = Config::default();
    config.geometry.npoints = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.site.day_of_year = 366;
    assert!(config.validate().is_err());
    config.site.year = 2016;
    assert!(config.validate().is_ok());

    let mut config = Config::default();
    config.geometry.element_width = f64::NAN;
    assert!(config.validate().is_err());
}
