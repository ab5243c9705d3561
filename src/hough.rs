//! Standard Hough transform for straight lines in normal form
//! `x·cos θ + y·sin θ = ρ`.
//!
//! The accumulator spans θ ∈ [0, π) and ρ ∈ [-(w + h), w + h]. A cell becomes
//! a line when it collects more than `threshold` votes and is a local maximum
//! against its four accumulator neighbours. Lines are returned strongest
//! first.
//!
//! With the `parallel` feature the voting runs one θ row per task on rayon.
use crate::edges::EdgeMap;
use crate::geometry::PolarLine;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoughParams {
    /// Distance resolution of the accumulator in pixels.
    pub rho_res: f32,
    /// Angle resolution of the accumulator in degrees.
    pub theta_res_deg: f32,
    /// Minimum number of votes (exclusive) for a line.
    pub threshold: u32,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            rho_res: 1.0,
            theta_res_deg: 1.0,
            threshold: 150,
        }
    }
}

struct Accumulator {
    num_theta: usize,
    num_rho: usize,
    // (num_theta + 2) × (num_rho + 2) with a zero frame around the cells
    votes: Vec<u32>,
}

impl Accumulator {
    #[inline]
    fn stride(&self) -> usize {
        self.num_rho + 2
    }

    #[inline]
    fn at(&self, t: usize, r: usize) -> u32 {
        self.votes[(t + 1) * self.stride() + r + 1]
    }
}

/// Detect lines in a binary edge map.
pub fn hough_lines(edges: &EdgeMap, params: &HoughParams) -> Vec<PolarLine> {
    if edges.w == 0 || edges.h == 0 || params.rho_res <= 0.0 || params.theta_res_deg <= 0.0 {
        return Vec::new();
    }
    let theta_res = params.theta_res_deg.to_radians();
    let num_theta = (std::f32::consts::PI / theta_res).round().max(1.0) as usize;
    let max_rho = (edges.w + edges.h) as f32;
    let num_rho = ((2.0 * max_rho) / params.rho_res).round() as usize + 1;
    let rho_offset = (num_rho - 1) / 2;

    let points = edges.points();
    let trig: Vec<(f32, f32)> = (0..num_theta)
        .map(|t| {
            let theta = t as f32 * theta_res;
            (theta.cos() / params.rho_res, theta.sin() / params.rho_res)
        })
        .collect();

    let mut acc = Accumulator {
        num_theta,
        num_rho,
        votes: vec![0; (num_theta + 2) * (num_rho + 2)],
    };
    let stride = acc.stride();

    let vote_row = |t: usize, row: &mut [u32]| {
        let (c, s) = trig[t];
        for &(x, y) in &points {
            let r = (x as f32 * c + y as f32 * s).round() as isize + rho_offset as isize;
            if r >= 0 && (r as usize) < num_rho {
                row[r as usize + 1] += 1;
            }
        }
    };

    let body = &mut acc.votes[stride..stride * (num_theta + 1)];
    #[cfg(feature = "parallel")]
    body.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(t, row)| vote_row(t, row));
    #[cfg(not(feature = "parallel"))]
    body.chunks_mut(stride)
        .enumerate()
        .for_each(|(t, row)| vote_row(t, row));

    let mut lines = Vec::new();
    for t in 0..acc.num_theta {
        for r in 0..acc.num_rho {
            let v = acc.at(t, r);
            if v <= params.threshold {
                continue;
            }
            let base = (t + 1) * stride + r + 1;
            let local_max = v > acc.votes[base - 1]
                && v >= acc.votes[base + 1]
                && v > acc.votes[base - stride]
                && v >= acc.votes[base + stride];
            if local_max {
                lines.push(PolarLine {
                    rho: (r as f32 - rho_offset as f32) * params.rho_res,
                    theta: t as f32 * theta_res,
                    votes: v,
                });
            }
        }
    }

    // Stable sort keeps (θ, ρ) raster order among equal vote counts.
    lines.sort_by(|a, b| b.votes.cmp(&a.votes));
    log::debug!(
        "hough: {} edge points -> {} lines (threshold {})",
        points.len(),
        lines.len(),
        params.threshold
    );
    lines
}
