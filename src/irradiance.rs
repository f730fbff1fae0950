//! Loading the one-day irradiance table.
//!
//! The file is comma-delimited with a single header row. Every field must
//! parse as a number; `#` starts a comment and blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{io_error, ChargingError, ChargingResult};
use crate::interpolation::CubicSpline;
use crate::types::IrradianceTable;

/// Parse every data row into numeric fields.
pub fn read_rows<R: BufRead>(reader: R) -> ChargingResult<Vec<(usize, Vec<f64>)>> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let line = line.map_err(|e| ChargingError::Parse {
            line: line_no,
            column: 0,
            message: e.to_string(),
        })?;
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        let fields = content
            .split(',')
            .enumerate()
            .map(|(col, field)| {
                let field = field.trim();
                field.parse::<f64>().map_err(|_| ChargingError::Parse {
                    line: line_no,
                    column: col,
                    message: format!("could not convert '{field}' to a number"),
                })
            })
            .collect::<ChargingResult<Vec<f64>>>()?;
        rows.push((line_no, fields));
    }
    Ok(rows)
}

pub fn read_irradiance_table<R: BufRead>(
    reader: R,
    time_column: usize,
    irradiance_column: usize,
) -> ChargingResult<IrradianceTable> {
    let rows = read_rows(reader)?;
    if rows.is_empty() {
        return Err(ChargingError::EmptyTable);
    }
    let needed = time_column.max(irradiance_column);
    let mut times = Vec::with_capacity(rows.len());
    let mut irradiance = Vec::with_capacity(rows.len());
    for (line_no, fields) in rows {
        if fields.len() <= needed {
            return Err(ChargingError::MissingColumn {
                row: line_no,
                column: needed,
                found: fields.len(),
            });
        }
        times.push(fields[time_column]);
        irradiance.push(fields[irradiance_column]);
    }
    Ok(IrradianceTable { times, irradiance })
}

pub fn load_irradiance_table(
    path: &Path,
    time_column: usize,
    irradiance_column: usize,
) -> ChargingResult<IrradianceTable> {
    let file = File::open(path).map_err(io_error(path))?;
    let table = read_irradiance_table(BufReader::new(file), time_column, irradiance_column)?;
    debug!(path = %path.display(), rows = table.len(), "loaded irradiance table");
    Ok(table)
}

impl IrradianceTable {
    pub fn interpolate(&self) -> ChargingResult<CubicSpline> {
        CubicSpline::new(&self.times, &self.irradiance)
    }
}
