//! Concentrator fitting geometry.
//!
//! A topshell (or the monocoque body) of width `wc` and height `hc` sits in
//! the bounding box; tilting the deployed assembly by `theta` opens a linear
//! space `d` at the top of the box into which square concentrator elements
//! are packed in rows:
//!
//! ```text
//! d = WB·sin θ + HB·cos θ − ((hc + L) / 2)·sin 2θ − wc
//! rows = floor(d / W)
//! ```
//!
//! Nothing here checks the physical sense of the inputs; negative space and
//! NaN propagate to the caller.

use crate::angles::deg_to_rad;
use crate::config::GeometryConfig;
use crate::types::{GeometryCurve, GeometrySample, ShellConfiguration};

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Deployment angles in degrees over `(0, max_angle]`: `npoints + 1` even
/// steps from zero with the zero endpoint dropped.
pub fn angle_sweep(max_angle: f64, npoints: usize) -> Vec<f64> {
    let mut theta = linspace(0.0, max_angle, npoints + 1);
    if !theta.is_empty() {
        theta.remove(0);
    }
    theta
}

pub fn space_available(geom: &GeometryConfig, wc: f64, hc: f64, theta_deg: f64) -> f64 {
    let theta = deg_to_rad(theta_deg);
    geom.box_width * theta.sin() + geom.box_height * theta.cos()
        - ((hc + geom.element_length) / 2.0) * (2.0 * theta).sin()
        - wc
}

pub fn space_curve(geom: &GeometryConfig, wc: f64, hc: f64, theta_deg: &[f64]) -> Vec<f64> {
    theta_deg
        .iter()
        .map(|&theta| space_available(geom, wc, hc, theta))
        .collect()
}

pub fn row_count(geom: &GeometryConfig, space: f64) -> f64 {
    (space / geom.element_width).floor()
}

pub fn geometry_curve(
    geom: &GeometryConfig,
    shell: &ShellConfiguration,
    theta_deg: &[f64],
) -> GeometryCurve {
    let samples = theta_deg
        .iter()
        .map(|&theta| {
            let space = space_available(geom, shell.width, shell.height, theta);
            GeometrySample {
                theta,
                space,
                rows: row_count(geom, space),
            }
        })
        .collect();
    GeometryCurve {
        configuration: shell.clone(),
        samples,
    }
}

/// Curves for every topshell width hypothesis, followed by the monocoque
/// curve so all configurations can be compared side by side.
pub fn compare_configurations(geom: &GeometryConfig) -> Vec<GeometryCurve> {
    let theta = angle_sweep(geom.max_angle, geom.npoints);
    let mut curves: Vec<GeometryCurve> = geom
        .topshell_hypotheses()
        .iter()
        .map(|shell| geometry_curve(geom, shell, &theta))
        .collect();
    curves.push(geometry_curve(geom, &geom.monocoque(), &theta));
    curves
}

/// First sweep angle whose row count is exactly `rows`. A curve that jumps
/// straight past `rows` yields `None`.
pub fn min_angle_for_rows(curve: &GeometryCurve, rows: u32) -> Option<f64> {
    let target = rows as f64;
    curve
        .samples
        .iter()
        .find(|s| s.rows == target)
        .map(|s| s.theta)
}

/// Index of the sample with the most space; ties resolve to the first.
pub fn peak_index(curve: &GeometryCurve) -> Option<usize> {
    curve
        .samples
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, s)| match best {
            Some((_, space)) if space >= s.space => best,
            _ if s.space.is_nan() => best,
            _ => Some((i, s.space)),
        })
        .map(|(i, _)| i)
}

/// Widest topshell that still leaves room for `rows` rows with the panel
/// vertical (θ = 0).
pub fn max_topshell_width_for_rows(geom: &GeometryConfig, rows: u32) -> f64 {
    geom.box_height - rows as f64 * geom.element_width
}
