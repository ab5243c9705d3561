//! Projective transforms between image pixels and the canonical court canvas.
use nalgebra::{Matrix3, SMatrix, SVector, Vector3};

const EPS: f32 = 1e-9;

/// Exact perspective transform mapping four `src` points onto four `dst`
/// points (with `h33 = 1`).
///
/// Returns `None` when three points of either quad are collinear or the 8×8
/// system is otherwise singular.
pub fn perspective_transform(src: &[[f32; 2]; 4], dst: &[[f32; 2]; 4]) -> Option<Matrix3<f32>> {
    if has_collinear_triple(src) || has_collinear_triple(dst) {
        return None;
    }
    let mut a = SMatrix::<f64, 8, 8>::zeros();
    let mut b = SVector::<f64, 8>::zeros();
    for i in 0..4 {
        let (x, y) = (src[i][0] as f64, src[i][1] as f64);
        let (u, v) = (dst[i][0] as f64, dst[i][1] as f64);
        let r = 2 * i;
        a[(r, 0)] = x;
        a[(r, 1)] = y;
        a[(r, 2)] = 1.0;
        a[(r, 6)] = -x * u;
        a[(r, 7)] = -y * u;
        b[r] = u;
        a[(r + 1, 3)] = x;
        a[(r + 1, 4)] = y;
        a[(r + 1, 5)] = 1.0;
        a[(r + 1, 6)] = -x * v;
        a[(r + 1, 7)] = -y * v;
        b[r + 1] = v;
    }

    let h = a.lu().solve(&b)?;
    if h.iter().any(|v| !v.is_finite()) {
        return None;
    }
    Some(Matrix3::new(
        h[0] as f32,
        h[1] as f32,
        h[2] as f32,
        h[3] as f32,
        h[4] as f32,
        h[5] as f32,
        h[6] as f32,
        h[7] as f32,
        1.0,
    ))
}

fn has_collinear_triple(pts: &[[f32; 2]; 4]) -> bool {
    let extent = pts
        .iter()
        .flat_map(|p| pts.iter().map(move |q| (p[0] - q[0]).abs().max((p[1] - q[1]).abs())))
        .fold(0.0f32, f32::max);
    if extent <= EPS {
        return true;
    }
    let tol = 1e-6 * extent * extent;
    const TRIPLES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];
    TRIPLES.iter().any(|&[i, j, k]| {
        let (a, b, c) = (pts[i], pts[j], pts[k]);
        let area2 = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
        area2.abs() <= tol
    })
}

/// Map one point through `h`; `None` if it lands on the line at infinity.
pub fn apply_homography_point(h: &Matrix3<f32>, p: [f32; 2]) -> Option<[f32; 2]> {
    let v = h * Vector3::new(p[0], p[1], 1.0);
    let w = v[2];
    if !w.is_finite() || w.abs() <= EPS || !v[0].is_finite() || !v[1].is_finite() {
        return None;
    }
    Some([v[0] / w, v[1] / w])
}

/// Map a batch of points; fails as a whole if any point is degenerate.
pub fn apply_homography_points(h: &Matrix3<f32>, pts: &[[f32; 2]]) -> Option<Vec<[f32; 2]>> {
    pts.iter().map(|&p| apply_homography_point(h, p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 2], b: [f32; 2], tol: f32) -> bool {
        (a[0] - b[0]).abs() <= tol && (a[1] - b[1]).abs() <= tol
    }

    #[test]
    fn maps_trapezoid_onto_rectangle() {
        let src = [[220.0, 80.0], [420.0, 80.0], [600.0, 460.0], [40.0, 460.0]];
        let dst = [[0.0, 0.0], [1000.0, 0.0], [1000.0, 2000.0], [0.0, 2000.0]];
        let h = perspective_transform(&src, &dst).unwrap();
        let mapped = apply_homography_points(&h, &src).unwrap();
        for (m, d) in mapped.iter().zip(&dst) {
            assert!(close(*m, *d, 1e-2), "{m:?} vs {d:?}");
        }
    }

    #[test]
    fn pure_scaling_is_recovered() {
        let src = [[0.0, 0.0], [10.0, 0.0], [10.0, 20.0], [0.0, 20.0]];
        let dst = [[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]];
        let h = perspective_transform(&src, &dst).unwrap();
        assert!((h[(0, 0)] - 10.0).abs() < 1e-4);
        assert!((h[(1, 1)] - 5.0).abs() < 1e-4);
        assert!(h[(2, 0)].abs() < 1e-6 && h[(2, 1)].abs() < 1e-6);
        let p = apply_homography_point(&h, [5.0, 10.0]).unwrap();
        assert!(close(p, [50.0, 50.0], 1e-3));
    }

    #[test]
    fn collinear_sources_are_rejected() {
        let src = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]];
        let dst = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        assert!(perspective_transform(&src, &dst).is_none());
    }

    #[test]
    fn point_at_infinity_is_rejected() {
        let h = Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0);
        assert!(apply_homography_point(&h, [0.0, 3.0]).is_none());
        assert!(apply_homography_points(&h, &[[1.0, 1.0], [0.0, 3.0]]).is_none());
    }
}
