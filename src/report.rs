//! Output formatting and CSV writers.
//!
//! Calculators return plain data; everything that ends up on a terminal or in
//! a file is shaped here.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{io_error, ChargingResult};
use crate::types::{GeometryCurve, SetupTimeEntry, SolposSample};

pub const ENERGY_TABLE_HEADER: &str = "# Time(min),Energy(Wh/m^2)";
pub const SOLPOS_HEADER: &str =
    "Time(hr),Time(min),Time(sec), Hour,Minute,Second,Azim,Elevetr,Elevref,Etrn,Ampress,Gndrn";

/// Decimal hours as `H:M:S`, each part truncated and unpadded.
pub fn hrs_to_readable(time: f64) -> String {
    let hours = time.trunc();
    let minutes_frac = time.fract() * 60.0;
    let minutes = minutes_frac.trunc();
    let seconds = minutes_frac.fract() * 60.0;
    format!("{}:{}:{}", hours as i64, minutes as i64, seconds.trunc() as i64)
}

pub fn write_energy_table<W: Write>(mut out: W, entries: &[SetupTimeEntry]) -> std::io::Result<()> {
    writeln!(out, "{ENERGY_TABLE_HEADER}")?;
    for entry in entries {
        writeln!(out, "{},{:.2}", entry.minutes, entry.energy)?;
    }
    out.flush()
}

pub fn save_energy_table(path: &Path, entries: &[SetupTimeEntry]) -> ChargingResult<()> {
    let file = File::create(path).map_err(io_error(path))?;
    write_energy_table(BufWriter::new(file), entries).map_err(io_error(path))?;
    debug!(path = %path.display(), rows = entries.len(), "wrote energy table");
    Ok(())
}

/// One `theta` column, then a space and a row column per curve. All curves
/// must share the same sweep.
pub fn write_geometry_curves<W: Write>(
    mut out: W,
    curves: &[GeometryCurve],
) -> std::io::Result<()> {
    write!(out, "theta")?;
    for curve in curves {
        write!(out, ",d[{0}],rows[{0}]", curve.configuration.label)?;
    }
    writeln!(out)?;

    let len = curves.iter().map(|c| c.samples.len()).min().unwrap_or(0);
    for i in 0..len {
        write!(out, "{}", curves[0].samples[i].theta)?;
        for curve in curves {
            let s = &curve.samples[i];
            write!(out, ",{:.6},{}", s.space, s.rows)?;
        }
        writeln!(out)?;
    }
    out.flush()
}

pub fn save_geometry_curves(path: &Path, curves: &[GeometryCurve]) -> ChargingResult<()> {
    let file = File::create(path).map_err(io_error(path))?;
    write_geometry_curves(BufWriter::new(file), curves).map_err(io_error(path))
}

pub fn write_solpos_table<W: Write>(mut out: W, samples: &[SolposSample]) -> std::io::Result<()> {
    writeln!(out, "{SOLPOS_HEADER}")?;
    for s in samples {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            s.time_hours(),
            s.time_minutes(),
            s.time_seconds(),
            s.hour,
            s.minute,
            s.second,
            s.position.azimuth,
            s.position.altitude,
            s.elevation_refracted,
            s.etrn,
            s.ampress,
            s.gndrn
        )?;
    }
    out.flush()
}

pub fn save_solpos_table(path: &Path, samples: &[SolposSample]) -> ChargingResult<()> {
    let file = File::create(path).map_err(io_error(path))?;
    write_solpos_table(BufWriter::new(file), samples).map_err(io_error(path))?;
    debug!(path = %path.display(), rows = samples.len(), "wrote solpos table");
    Ok(())
}
