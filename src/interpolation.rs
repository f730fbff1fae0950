//! Cubic spline interpolation of sampled irradiance.
//!
//! The spline uses not-a-knot end conditions: the third derivative is
//! continuous across the second and second-to-last knots, so four samples of
//! a cubic reproduce that cubic exactly. Queries outside the sampled range
//! evaluate to zero; there is no extrapolation.

use crate::error::{ChargingError, ChargingResult};

pub const MIN_SAMPLES: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    knots: Vec<f64>,
    values: Vec<f64>,
    /// Second derivative of the spline at each knot.
    moments: Vec<f64>,
}

impl CubicSpline {
    pub fn new(knots: &[f64], values: &[f64]) -> ChargingResult<Self> {
        if knots.len() != values.len() {
            return Err(ChargingError::Interpolation(format!(
                "{} sample times but {} values",
                knots.len(),
                values.len()
            )));
        }
        if knots.len() < MIN_SAMPLES {
            return Err(ChargingError::Interpolation(format!(
                "cubic interpolation needs at least {MIN_SAMPLES} samples, got {}",
                knots.len()
            )));
        }
        if let Some(i) = knots.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(ChargingError::Interpolation(format!(
                "sample times must be strictly increasing (index {} -> {}: {} -> {})",
                i,
                i + 1,
                knots[i],
                knots[i + 1]
            )));
        }
        let moments = not_a_knot_moments(knots, values)?;
        Ok(Self {
            knots: knots.to_vec(),
            values: values.to_vec(),
            moments,
        })
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.knots[0], self.knots[self.knots.len() - 1])
    }

    pub fn eval(&self, t: f64) -> f64 {
        let (lo, hi) = self.domain();
        if t < lo || t > hi {
            return 0.0;
        }
        let n = self.knots.len();
        let i = self
            .knots
            .partition_point(|&k| k <= t)
            .saturating_sub(1)
            .min(n - 2);
        let (x0, x1) = (self.knots[i], self.knots[i + 1]);
        let (y0, y1) = (self.values[i], self.values[i + 1]);
        let (m0, m1) = (self.moments[i], self.moments[i + 1]);
        let h = x1 - x0;
        let a = x1 - t;
        let b = t - x0;
        m0 * a.powi(3) / (6.0 * h)
            + m1 * b.powi(3) / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * a
            + (y1 / h - m1 * h / 6.0) * b
    }
}

/// Second derivatives at the knots. The two not-a-knot conditions are
/// folded into the first and last interior equations, leaving a tridiagonal
/// system in the interior moments.
fn not_a_knot_moments(x: &[f64], y: &[f64]) -> ChargingResult<Vec<f64>> {
    let n = x.len();
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let slope: Vec<f64> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]).collect();

    let k = n - 2;
    let mut sub = vec![0.0; k];
    let mut diag = vec![0.0; k];
    let mut sup = vec![0.0; k];
    let mut rhs = vec![0.0; k];
    for r in 0..k {
        let j = r + 1;
        sub[r] = h[j - 1];
        diag[r] = 2.0 * (h[j - 1] + h[j]);
        sup[r] = h[j];
        rhs[r] = 6.0 * (slope[j] - slope[j - 1]);
    }

    let (h0, h1) = (h[0], h[1]);
    diag[0] += h0 * (h0 + h1) / h1;
    sup[0] -= h0 * h0 / h1;
    sub[0] = 0.0;

    let (hp, hl) = (h[n - 3], h[n - 2]);
    diag[k - 1] += hl * (hp + hl) / hp;
    sub[k - 1] -= hl * hl / hp;
    sup[k - 1] = 0.0;

    let interior = thomas_solve(&sub, &diag, &sup, &rhs)?;

    let mut moments = Vec::with_capacity(n);
    moments.push(((h0 + h1) * interior[0] - h0 * interior[1]) / h1);
    moments.extend_from_slice(&interior);
    moments.push(((hp + hl) * interior[k - 1] - hl * interior[k - 2]) / hp);
    Ok(moments)
}

/// Thomas algorithm for `a[i]·x[i-1] + b[i]·x[i] + c[i]·x[i+1] = d[i]`.
fn thomas_solve(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> ChargingResult<Vec<f64>> {
    let n = d.len();
    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    if b[0] == 0.0 {
        return Err(ChargingError::Interpolation("singular spline system".into()));
    }
    c_prime[0] = c[0] / b[0];
    d_prime[0] = d[0] / b[0];

    for i in 1..n {
        let den = b[i] - a[i] * c_prime[i - 1];
        if den == 0.0 {
            return Err(ChargingError::Interpolation("singular spline system".into()));
        }
        if i < n - 1 {
            c_prime[i] = c[i] / den;
        }
        d_prime[i] = (d[i] - a[i] * d_prime[i - 1]) / den;
    }

    let mut x = vec![0.0; n];
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }
    Ok(x)
}
