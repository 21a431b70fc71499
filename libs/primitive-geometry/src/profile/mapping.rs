//! # Boundary Mappings
//!
//! The closed set of 2D boundary curves a profile can follow. Every variant
//! shares one calling convention: `angle × shape parameters → point`.

use config::constants::FULL_TURN;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_3, FRAC_PI_6};

/// Shape parameters after defaults and overrides are resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    /// Horizontal scale.
    pub sx: f64,
    /// Vertical scale.
    pub sy: f64,
    /// Lamé exponent (ignored by constant-width mappings).
    pub m: f64,
}

/// A named boundary curve.
///
/// The superellipse family follows the Lamé curve
/// `x = sx · sgn(cos θ) · |cos θ|^(2/m)`, `y = sy · sgn(sin θ) · |sin θ|^(2/m)`;
/// each named variant only fixes a default exponent, which callers may
/// override. [`Mapping::Reuleux`] is the constant-width triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mapping {
    /// m = 2
    #[default]
    Ellipse,
    /// m = 4, the Lamé quartic.
    Squircle,
    /// m = 1
    Diamond,
    /// m = 2/3
    Astroid,
    /// m = 5/2, Piet Hein's superellipse.
    PietHein,
    /// m = 8, a rectangle with elliptic corners.
    Rectellipse,
    /// General Lamé curve, m = 3 unless overridden.
    Superellipse,
    /// Three 60° circular arcs centered on the vertices of an equilateral
    /// triangle inscribed in the unit circle.
    Reuleux,
}

impl Mapping {
    /// Exponent used when the caller does not override `m`.
    pub fn default_exponent(self) -> f64 {
        match self {
            Mapping::Ellipse | Mapping::Reuleux => 2.0,
            Mapping::Squircle => 4.0,
            Mapping::Diamond => 1.0,
            Mapping::Astroid => 2.0 / 3.0,
            Mapping::PietHein => 2.5,
            Mapping::Rectellipse => 8.0,
            Mapping::Superellipse => 3.0,
        }
    }

    /// Returns true for mappings that read the exponent.
    pub fn uses_exponent(self) -> bool {
        !matches!(self, Mapping::Reuleux)
    }

    /// Resolves scales and the exponent override into [`ShapeParams`].
    pub fn params(self, sx: f64, sy: f64, m: Option<f64>) -> ShapeParams {
        ShapeParams {
            sx,
            sy,
            m: m.unwrap_or_else(|| self.default_exponent()),
        }
    }

    /// Evaluates the boundary point at angle `theta` (radians).
    ///
    /// # Example
    ///
    /// ```rust
    /// use primitive_geometry::profile::Mapping;
    ///
    /// let params = Mapping::Ellipse.params(2.0, 1.0, None);
    /// let p = Mapping::Ellipse.evaluate(0.0, &params);
    /// assert!((p.x - 2.0).abs() < 1e-12 && p.y.abs() < 1e-12);
    /// ```
    pub fn evaluate(self, theta: f64, params: &ShapeParams) -> DVec2 {
        let unit = match self {
            Mapping::Reuleux => reuleux(theta),
            _ => lame(theta, params.m),
        };
        DVec2::new(params.sx * unit.x, params.sy * unit.y)
    }
}

fn lame(theta: f64, m: f64) -> DVec2 {
    let power = 2.0 / m;
    let (sin, cos) = theta.sin_cos();
    DVec2::new(
        cos.signum() * cos.abs().powf(power),
        sin.signum() * sin.abs().powf(power),
    )
}

/// Sector `k` runs from the triangle vertex at `-30° + 120°k` to the one at
/// `90° + 120°k` along the arc centered on the opposite vertex.
fn reuleux(theta: f64) -> DVec2 {
    let sector = FULL_TURN / 3.0;
    let shifted = (theta + FRAC_PI_6).rem_euclid(FULL_TURN);
    let k = (shifted / sector).floor().min(2.0);
    let t = (shifted - k * sector) / sector;

    let center_angle = 7.0 * FRAC_PI_6 + k * sector;
    let center = DVec2::new(center_angle.cos(), center_angle.sin());
    let phi = k * sector + FRAC_PI_3 * t;
    let side = 3.0_f64.sqrt();

    center + side * DVec2::new(phi.cos(), phi.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reuleux_hits_triangle_vertices() {
        let params = Mapping::Reuleux.params(1.0, 1.0, None);
        for degrees in [90.0_f64, 210.0, 330.0] {
            let p = Mapping::Reuleux.evaluate(degrees.to_radians() - 1e-12, &params);
            let expected = DVec2::new(degrees.to_radians().cos(), degrees.to_radians().sin());
            assert_abs_diff_eq!(p.x, expected.x, epsilon = 1e-6);
            assert_abs_diff_eq!(p.y, expected.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_reuleux_constant_width() {
        // Each boundary point is at distance sqrt(3) from the opposite vertex.
        let params = Mapping::Reuleux.params(1.0, 1.0, None);
        let p = Mapping::Reuleux.evaluate(30.0_f64.to_radians(), &params);
        let opposite = DVec2::new(210.0_f64.to_radians().cos(), 210.0_f64.to_radians().sin());
        assert_abs_diff_eq!(p.distance(opposite), 3.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_diamond_on_l1_ball() {
        let params = Mapping::Diamond.params(1.0, 1.0, None);
        for i in 0..16 {
            let p = Mapping::Diamond.evaluate(i as f64 * 0.4, &params);
            assert_abs_diff_eq!(p.x.abs() + p.y.abs(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_exponent_override() {
        let params = Mapping::Ellipse.params(1.0, 1.0, Some(4.0));
        assert_eq!(params.m, 4.0);
        assert_eq!(Mapping::Astroid.default_exponent(), 2.0 / 3.0);
        assert!(!Mapping::Reuleux.uses_exponent());
    }
}
