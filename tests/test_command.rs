use std::fmt::Write as _;

use rstest::rstest;

use concentrator_charging::command::{run_nconcs, run_times, Mode};
use concentrator_charging::config::SetupTimeConfig;
use concentrator_charging::error::ChargingError;

// ── Keyword dispatch ──

#[rstest]
#[case(Some("TIMES"), Mode::Times)]
#[case(Some("times"), Mode::Times)]
#[case(Some("TiMeS"), Mode::Times)]
#[case(Some("NCONCS"), Mode::NConcs)]
#[case(Some("nconcs"), Mode::NConcs)]
#[case(Some("geometry"), Mode::Nothing)]
#[case(Some(""), Mode::Nothing)]
#[case(Some("TIMES "), Mode::Nothing)]
#[case(None, Mode::Nothing)]
fn test_mode_from_keyword(#[case] keyword: Option<&str>, #[case] expected: Mode) {
    assert_eq!(Mode::from_keyword(keyword), expected);
}

// ── TIMES end to end ──

fn write_constant_solpos(path: &std::path::Path) {
    let mut csv = String::from(
        "Time(hr),Time(min),Time(sec), Hour,Minute,Second,Azim,Elevetr,Elevref,Etrn,Ampress,Gndrn\n",
    );
    for i in 0..=720 {
        let minutes = 360 + i;
        let hours = minutes as f64 / 60.0;
        writeln!(
            csv,
            "{hours},{minutes},{},{},{},0,90,10,10,1370,2,500",
            minutes * 60,
            minutes / 60,
            minutes % 60
        )
        .unwrap();
    }
    std::fs::write(path, csv).unwrap();
}

#[test]
fn test_run_times_writes_31_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("solposdata.csv");
    let output = dir.path().join("energyVSetupTime.csv");
    write_constant_solpos(&input);

    let config = SetupTimeConfig {
        input_path: input,
        output_path: output.clone(),
        ..SetupTimeConfig::default()
    };
    let report = run_times(&config).unwrap();
    assert_eq!(report.sunrise, 6.0);
    assert_eq!(report.sunset, 18.0);

    let text = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 32);
    assert_eq!(lines[0], "# Time(min),Energy(Wh/m^2)");
    assert_eq!(lines[1], "0,1500.00");
    assert_eq!(lines[31], "30,1000.00");
    for (i, line) in lines[1..].iter().enumerate() {
        assert!(line.starts_with(&format!("{i},")), "{line}");
    }
}

#[test]
fn test_run_times_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let config = SetupTimeConfig {
        input_path: dir.path().join("missing.csv"),
        output_path: dir.path().join("out.csv"),
        ..SetupTimeConfig::default()
    };
    assert!(matches!(run_times(&config), Err(ChargingError::Io { .. })));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_nconcs_is_a_no_op() {
    let study = run_nconcs();
    assert!(!study.is_implemented());
    assert_eq!(study.max_concentrators, 65);
}
