//! Image-ratio → court coordinates through the stored calibration.
use crate::calibration::Calibration;
use crate::homography::apply_homography_point;
use crate::types::{CourtPoint, ImageRatioPoint};

/// Holds the session's calibration once it exists and converts points with it.
#[derive(Clone, Debug, Default)]
pub struct CoordinateMapper {
    calibration: Option<Calibration>,
}

impl CoordinateMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calibration(calibration: Calibration) -> Self {
        Self {
            calibration: Some(calibration),
        }
    }

    /// Install the calibration. A mapper that already has one keeps it and
    /// returns `false`.
    pub fn install(&mut self, calibration: &Calibration) -> bool {
        if self.calibration.is_some() {
            return false;
        }
        self.calibration = Some(calibration.clone());
        true
    }

    pub fn calibration(&self) -> Option<&Calibration> {
        self.calibration.as_ref()
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_some()
    }

    /// Denormalize to pixels, apply the transform, normalize by the canvas.
    /// `None` without a calibration or if the point maps to infinity.
    pub fn to_court(
        &self,
        point: ImageRatioPoint,
        frame_w: usize,
        frame_h: usize,
    ) -> Option<CourtPoint> {
        let calibration = self.calibration.as_ref()?;
        let px = [point.x * frame_w as f32, point.y * frame_h as f32];
        let [cx, cy] = apply_homography_point(&calibration.hmtx, px)?;
        Some(CourtPoint::new(
            cx / calibration.canvas.width,
            cy / calibration.canvas.height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::CourtCanvas;

    const W: usize = 640;
    const H: usize = 480;

    fn trapezoid() -> Calibration {
        let corners = [[220.0, 80.0], [420.0, 80.0], [600.0, 460.0], [40.0, 460.0]];
        Calibration::from_corners(corners, CourtCanvas::default()).unwrap()
    }

    #[test]
    fn uncalibrated_mapper_yields_nothing() {
        let mapper = CoordinateMapper::new();
        assert!(mapper.to_court(ImageRatioPoint::new(0.5, 0.5), W, H).is_none());
    }

    #[test]
    fn calibration_corners_land_on_unit_square() {
        let calibration = trapezoid();
        let mapper = CoordinateMapper::with_calibration(calibration.clone());
        let expected = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        for (corner, want) in calibration.corners.iter().zip(expected) {
            let ratio = ImageRatioPoint::new(corner[0] / W as f32, corner[1] / H as f32);
            let court = mapper.to_court(ratio, W, H).unwrap();
            assert!((court.x - want[0]).abs() < 1e-3, "{court:?} vs {want:?}");
            assert!((court.y - want[1]).abs() < 1e-3, "{court:?} vs {want:?}");
        }
    }

    #[test]
    fn install_keeps_first_calibration() {
        let first = trapezoid();
        let other = Calibration::from_corners(
            [[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]],
            CourtCanvas::default(),
        )
        .unwrap();
        let mut mapper = CoordinateMapper::new();
        assert!(mapper.install(&first));
        assert!(!mapper.install(&other));
        assert_eq!(mapper.calibration(), Some(&first));
    }

    #[test]
    fn perspective_compresses_far_court() {
        let mapper = CoordinateMapper::with_calibration(trapezoid());
        // Midpoint of the image-space centre line is past the court midline.
        let mid = mapper
            .to_court(ImageRatioPoint::new(320.0 / W as f32, 270.0 / H as f32), W, H)
            .unwrap();
        assert!((mid.x - 0.5).abs() < 1e-3);
        assert!(mid.y > 0.5);
    }
}
