//! Property-based tests for the fitting geometry and the spline.

use concentrator_charging::config::GeometryConfig;
use concentrator_charging::geometry::{geometry_curve, row_count, space_available};
use concentrator_charging::interpolation::CubicSpline;
use concentrator_charging::types::ShellConfiguration;
use proptest::prelude::*;

proptest! {
    /// Row count is the floor of space over element width at every angle.
    #[test]
    fn rows_are_floor_of_space(theta in 0.001f64..=30.0, wc in 0.0f64..2.5, hc in 0.0f64..1.0) {
        let g = GeometryConfig::default();
        let d = space_available(&g, wc, hc, theta);
        let rows = row_count(&g, d);
        prop_assert_eq!(rows, (d / g.element_width).floor());
        prop_assert!(rows * g.element_width <= d + 1e-12);
        prop_assert!((rows + 1.0) * g.element_width > d);
    }

    /// With the panel vertical only the shell width matters.
    #[test]
    fn vertical_space_ignores_height(wc in -1.0f64..3.0, hc in -1.0f64..3.0) {
        let g = GeometryConfig::default();
        prop_assert_eq!(space_available(&g, wc, hc, 0.0), g.box_height - wc);
    }

    /// A taller shell never leaves more room.
    #[test]
    fn taller_shell_leaves_less_space(theta in 0.01f64..=30.0, hc in 0.0f64..1.0, extra in 0.0f64..1.0) {
        let g = GeometryConfig::default();
        let low = space_available(&g, 1.6, hc, theta);
        let high = space_available(&g, 1.6, hc + extra, theta);
        prop_assert!(high <= low + 1e-12);
    }

    /// Samples carry the row count of their own space value.
    #[test]
    fn curve_samples_consistent(width in 1.0f64..2.0, height in 0.0f64..0.6) {
        let g = GeometryConfig::default();
        let shell = ShellConfiguration { label: "x".into(), width, height };
        let theta: Vec<f64> = (1..=30).map(f64::from).collect();
        let curve = geometry_curve(&g, &shell, &theta);
        for s in &curve.samples {
            prop_assert_eq!(s.rows, row_count(&g, s.space));
        }
    }

    /// Outside the sampled range the spline is exactly zero.
    #[test]
    fn spline_zero_outside(offset in 1e-6f64..100.0, values in prop::collection::vec(-1000.0f64..1000.0, 6)) {
        let knots = [6.0, 7.0, 8.5, 10.0, 14.0, 18.0];
        let spline = CubicSpline::new(&knots, &values).unwrap();
        prop_assert_eq!(spline.eval(6.0 - offset), 0.0);
        prop_assert_eq!(spline.eval(18.0 + offset), 0.0);
    }
}
