//! Closed-polygon simplification and corner ordering.

/// Douglas–Peucker simplification of a closed contour.
///
/// The contour is split at vertex 0 and the vertex farthest from it; each
/// half is simplified as an open chain and the halves are stitched back
/// together. Vertex order is preserved.
pub fn approx_polygon(contour: &[[f32; 2]], epsilon: f32) -> Vec<[f32; 2]> {
    let n = contour.len();
    if n < 3 {
        return contour.to_vec();
    }

    let far = (1..n)
        .max_by(|&a, &b| dist2(contour[0], contour[a]).total_cmp(&dist2(contour[0], contour[b])))
        .unwrap_or(1);

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[far] = true;
    simplify_chain(contour, 0, far, epsilon, &mut keep);
    simplify_chain(contour, far, n, epsilon, &mut keep);

    contour
        .iter()
        .zip(&keep)
        .filter_map(|(&p, &k)| k.then_some(p))
        .collect()
}

/// Mark the vertices of `contour[first..=last]` (indices taken modulo the
/// contour length) that survive simplification.
fn simplify_chain(contour: &[[f32; 2]], first: usize, last: usize, epsilon: f32, keep: &mut [bool]) {
    let n = contour.len();
    let mut stack = vec![(first, last)];
    while let Some((a, b)) = stack.pop() {
        if b <= a + 1 {
            continue;
        }
        let pa = contour[a % n];
        let pb = contour[b % n];
        let mut best = (a, -1.0f32);
        for i in a + 1..b {
            let d = dist_to_line(contour[i % n], pa, pb);
            if d > best.1 {
                best = (i, d);
            }
        }
        if best.1 > epsilon {
            keep[best.0 % n] = true;
            stack.push((a, best.0));
            stack.push((best.0, b));
        }
    }
}

#[inline]
fn dist2(a: [f32; 2], b: [f32; 2]) -> f32 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)
}

fn dist_to_line(p: [f32; 2], a: [f32; 2], b: [f32; 2]) -> f32 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let len = (dx * dx + dy * dy).sqrt();
    if len <= f32::EPSILON {
        return dist2(p, a).sqrt();
    }
    ((p[0] - a[0]) * dy - (p[1] - a[1]) * dx).abs() / len
}

/// Order four corners as top-left, top-right, bottom-right, bottom-left.
///
/// The two smallest-y points form the top pair (sorted by ascending x), the
/// other two the bottom pair (sorted by descending x).
pub fn order_corners(corners: [[f32; 2]; 4]) -> [[f32; 2]; 4] {
    let mut by_y = corners;
    by_y.sort_by(|a, b| a[1].total_cmp(&b[1]));
    let mut top = [by_y[0], by_y[1]];
    let mut bottom = [by_y[2], by_y[3]];
    top.sort_by(|a, b| a[0].total_cmp(&b[0]));
    bottom.sort_by(|a, b| b[0].total_cmp(&a[0]));
    [top[0], top[1], bottom[0], bottom[1]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_survives_ten_percent_tolerance() {
        let rect = [[100.0, 50.0], [500.0, 50.0], [500.0, 350.0], [100.0, 350.0]];
        let eps = 0.1 * crate::geometry::arc_length(&rect);
        assert_eq!(approx_polygon(&rect, eps), rect.to_vec());
    }

    #[test]
    fn near_collinear_vertex_is_removed() {
        let contour = [
            [0.0, 0.0],
            [50.0, 1.0],
            [100.0, 0.0],
            [100.0, 100.0],
            [0.0, 100.0],
        ];
        let out = approx_polygon(&contour, 5.0);
        assert_eq!(out.len(), 4);
        assert!(!out.contains(&[50.0, 1.0]));
    }

    #[test]
    fn flat_triangle_collapses() {
        let tri = [[0.0, 0.0], [100.0, 0.0], [50.0, 2.0]];
        assert_eq!(approx_polygon(&tri, 10.0).len(), 2);
    }

    #[test]
    fn corners_are_ordered_clockwise_from_top_left() {
        let ordered = order_corners([
            [480.0, 400.0],
            [120.0, 60.0],
            [90.0, 410.0],
            [520.0, 70.0],
        ]);
        assert_eq!(
            ordered,
            [[120.0, 60.0], [520.0, 70.0], [480.0, 400.0], [90.0, 410.0]]
        );
    }
}
