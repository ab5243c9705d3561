//! Planar geometry for the court-corner search: Hough lines in normal form,
//! their intersections, convex hulls and polygon simplification.
//!
//! Points are `[x, y]` pairs in image pixels (y grows downwards).

pub mod hull;
pub mod polygon;

pub use hull::{arc_length, convex_hull};
pub use polygon::{approx_polygon, order_corners};

use serde::Serialize;

const DET_EPS: f32 = 1e-6;

/// Straight line `x·cos θ + y·sin θ = ρ` as reported by the Hough stage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolarLine {
    pub rho: f32,
    /// Normal angle in radians, `[0, π)`.
    pub theta: f32,
    pub votes: u32,
}

impl PolarLine {
    pub fn theta_deg(&self) -> f32 {
        self.theta.to_degrees()
    }

    /// Solve the 2×2 system of both normal equations. `None` when the lines are
    /// parallel (or numerically indistinguishable from it).
    pub fn intersect(&self, other: &PolarLine) -> Option<[f32; 2]> {
        let (a1, b1) = (self.theta.cos(), self.theta.sin());
        let (a2, b2) = (other.theta.cos(), other.theta.sin());
        let det = a1 * b2 - a2 * b1;
        if det.abs() < DET_EPS {
            return None;
        }
        let x = (self.rho * b2 - other.rho * b1) / det;
        let y = (a1 * other.rho - a2 * self.rho) / det;
        (x.is_finite() && y.is_finite()).then_some([x, y])
    }
}

/// Intersections of every unordered pair of `lines`, skipping parallel pairs.
pub fn pairwise_intersections(lines: &[PolarLine]) -> Vec<[f32; 2]> {
    let mut out = Vec::with_capacity(lines.len() * lines.len().saturating_sub(1) / 2);
    for (i, a) in lines.iter().enumerate() {
        for b in &lines[i + 1..] {
            if let Some(p) = a.intersect(b) {
                out.push(p);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn line(rho: f32, theta: f32) -> PolarLine {
        PolarLine {
            rho,
            theta,
            votes: 0,
        }
    }

    #[test]
    fn axis_aligned_lines_meet_at_offsets() {
        let p = line(40.0, 0.0).intersect(&line(120.0, FRAC_PI_2)).unwrap();
        assert!((p[0] - 40.0).abs() < 1e-3);
        assert!((p[1] - 120.0).abs() < 1e-3);
    }

    #[test]
    fn diagonal_intersection() {
        // normal at 45°: the line x + y = 20
        let diag = line(20.0 / 2f32.sqrt(), FRAC_PI_4);
        let p = diag.intersect(&line(5.0, 0.0)).unwrap();
        assert!((p[0] - 5.0).abs() < 1e-3);
        assert!((p[1] - 15.0).abs() < 1e-3);
    }

    #[test]
    fn parallel_pairs_are_skipped() {
        assert!(line(10.0, 0.0).intersect(&line(50.0, 0.0)).is_none());
        let lines = [
            line(10.0, 0.0),
            line(50.0, 0.0),
            line(5.0, FRAC_PI_2),
            line(30.0, FRAC_PI_2),
        ];
        assert_eq!(pairwise_intersections(&lines).len(), 4);
    }
}
