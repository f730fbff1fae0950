#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub day_of_year: i32,
    pub declination: f64,
    pub equation_of_time: f64,
    pub local_solar_time: f64,
    pub hour_angle: f64,
    pub zenith: f64,
    pub altitude: f64,
    pub azimuth: f64,
}

/// Minutes from local midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunriseSunset {
    pub sunrise: f64,
    pub sunset: f64,
}

/// One row of the generated day irradiance table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolposSample {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub position: SolarPosition,
    pub elevation_refracted: f64,
    pub etrn: f64,
    /// Pressure-corrected air mass, -1 when undefined.
    pub ampress: f64,
    pub gndrn: f64,
}

impl SolposSample {
    pub fn time_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second as f64 / 3600.0
    }

    pub fn time_minutes(&self) -> f64 {
        60.0 * self.hour as f64 + self.minute as f64 + self.second as f64 / 60.0
    }

    pub fn time_seconds(&self) -> u32 {
        3600 * self.hour + 60 * self.minute + self.second
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySample {
    pub theta: f64,
    pub space: f64,
    /// Raw `floor(space / element_width)`; may be negative or NaN.
    pub rows: f64,
}

impl GeometrySample {
    /// Rows usable in practice: negative and non-finite counts mean none fit.
    pub fn rows_that_fit(&self) -> u32 {
        if self.rows.is_finite() && self.rows > 0.0 {
            self.rows as u32
        } else {
            0
        }
    }
}

/// A panel surface hypothesis: concentrator width and height left over by
/// the shell at the top of the bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfiguration {
    pub label: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCurve {
    pub configuration: ShellConfiguration,
    pub samples: Vec<GeometrySample>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IrradianceTable {
    pub times: Vec<f64>,
    pub irradiance: Vec<f64>,
}

impl IrradianceTable {
    pub fn sunrise(&self) -> Option<f64> {
        self.times.first().copied()
    }

    pub fn sunset(&self) -> Option<f64> {
        self.times.last().copied()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetupTimeEntry {
    pub minutes: u32,
    pub energy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetupTimeReport {
    pub sunrise: f64,
    pub sunset: f64,
    pub morning_energy: f64,
    pub evening_energy: f64,
    pub entries: Vec<SetupTimeEntry>,
}
