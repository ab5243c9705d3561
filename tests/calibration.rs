mod common;

use common::synthetic_image::{court_frame, default_court, CourtRect, GRASS};
use court_tracker::calibration::{
    calibrate_frame, Calibration, CalibrationFailure, CalibrationOutcome, CalibrationParams,
    CourtCalibrator, CourtCanvas,
};
use court_tracker::image::RgbFrame;
use court_tracker::mapper::CoordinateMapper;
use court_tracker::types::ImageRatioPoint;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_corners_near(actual: [[f32; 2]; 4], expected: [[f32; 2]; 4], tol: f32) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!(
            (a[0] - e[0]).abs() <= tol && (a[1] - e[1]).abs() <= tol,
            "corner {a:?} too far from {e:?}"
        );
    }
}

#[test]
fn synthetic_court_is_calibrated_on_first_frame() {
    init_logger();
    let (frame, rect) = default_court();
    let (outcome, report) = calibrate_frame(frame.as_view(), &CalibrationParams::default());

    let calibration = outcome.calibration().expect("court outline should calibrate");
    assert_corners_near(calibration.corners, rect.corners(), 3.0);
    assert!(report.succeeded());
    assert!(report.horizontal_lines >= 2);
    assert!(report.vertical_lines >= 2);
    assert!(report.edge_pixels > 0);
    assert!(report.timings.total_ms >= 0.0);
}

#[test]
fn plain_grass_is_not_yet_calibrated() {
    init_logger();
    let frame = RgbFrame::filled(320, 240, GRASS);
    let (outcome, report) = calibrate_frame(frame.as_view(), &CalibrationParams::default());
    assert_eq!(outcome, CalibrationOutcome::NotYet(CalibrationFailure::NoLines));
    assert!(!report.succeeded());
    assert_eq!(report.failure, Some(CalibrationFailure::NoLines));
}

#[test]
fn calibration_is_idempotent_once_found() {
    init_logger();
    let (frame, _) = default_court();
    let mut calibrator = CourtCalibrator::default();
    let first = calibrator.try_calibrate(frame.as_view());
    let first = first.calibration().cloned().expect("first frame calibrates");
    assert_eq!(calibrator.attempts(), 1);

    // A different court in later frames must not move the calibration.
    let other = court_frame(
        640,
        480,
        CourtRect {
            x0: 40,
            y0: 20,
            x1: 600,
            y1: 460,
        },
        3,
    );
    let blank = RgbFrame::filled(640, 480, GRASS);
    for f in [&other, &blank, &frame] {
        let again = calibrator.try_calibrate(f.as_view());
        assert_eq!(again.calibration(), Some(&first));
    }
    assert_eq!(calibrator.attempts(), 1);
    assert_eq!(calibrator.calibration(), Some(&first));
}

#[test]
fn calibrator_retries_until_court_visible() {
    init_logger();
    let blank = RgbFrame::filled(640, 480, GRASS);
    let (frame, _) = default_court();
    let mut calibrator = CourtCalibrator::default();
    for _ in 0..3 {
        assert!(!calibrator.try_calibrate(blank.as_view()).is_calibrated());
    }
    assert!(calibrator.try_calibrate(frame.as_view()).is_calibrated());
    assert_eq!(calibrator.attempts(), 4);
    assert!(calibrator.last_report().is_some_and(|r| r.succeeded()));
}

#[test]
fn calibration_corners_round_trip_to_unit_square() {
    let corners = [[120.0, 80.0], [520.0, 90.0], [600.0, 400.0], [40.0, 390.0]];
    let calibration = Calibration::from_corners(corners, CourtCanvas::default())
        .expect("non-degenerate quadrilateral");
    let mapper = CoordinateMapper::with_calibration(calibration);
    let (w, h) = (640usize, 480usize);
    let expected = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    for (src, dst) in corners.iter().zip(expected) {
        let ratio = ImageRatioPoint::new(src[0] / w as f32, src[1] / h as f32);
        let court = mapper.to_court(ratio, w, h).expect("calibrated mapper");
        assert!((court.x - dst[0]).abs() < 1e-3, "{court:?} vs {dst:?}");
        assert!((court.y - dst[1]).abs() < 1e-3, "{court:?} vs {dst:?}");
    }
}

#[test]
fn detected_court_maps_its_centre_to_mid_court() {
    let (frame, rect) = default_court();
    let mut calibrator = CourtCalibrator::default();
    let outcome = calibrator.try_calibrate(frame.as_view());
    let calibration = outcome.calibration().expect("court outline should calibrate");
    let mapper = CoordinateMapper::with_calibration(calibration.clone());

    let (w, h) = (frame.width(), frame.height());
    let cx = rect.column_at(0.5);
    let cy = rect.row_at(0.5);
    let court = mapper
        .to_court(ImageRatioPoint::new(cx / w as f32, cy / h as f32), w, h)
        .expect("calibrated mapper");
    assert!((court.x - 0.5).abs() < 0.02, "{court:?}");
    assert!((court.y - 0.5).abs() < 0.02, "{court:?}");
}
