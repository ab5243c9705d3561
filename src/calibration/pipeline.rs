use super::params::CalibrationParams;
use super::{Calibration, CalibrationFailure, CalibrationOutcome};
use crate::angle::LineFamily;
use crate::diagnostics::CalibrationReport;
use crate::edges::canny;
use crate::filters::{self, GAUSSIAN_5TAP};
use crate::geometry::{
    approx_polygon, arc_length, convex_hull, order_corners, pairwise_intersections, PolarLine,
};
use crate::hough::hough_lines;
use crate::image::{ImageF32, ImageView, RgbImageU8};
use log::debug;
use std::time::Instant;

/// Run one calibration attempt on a colour frame.
pub fn calibrate_frame(
    frame: RgbImageU8<'_>,
    params: &CalibrationParams,
) -> (CalibrationOutcome, CalibrationReport) {
    let t0 = Instant::now();
    let luma = frame.to_gray_f32();
    let gray_ms = elapsed_ms(t0);
    let (outcome, mut report) = calibrate_luma(&luma, params);
    report.timings.stages.insert(0, crate::diagnostics::StageTiming::new("gray", gray_ms));
    report.timings.total_ms += gray_ms;
    (outcome, report)
}

/// Run one calibration attempt on a `[0, 1]` luma image.
pub fn calibrate_luma(
    luma: &ImageF32,
    params: &CalibrationParams,
) -> (CalibrationOutcome, CalibrationReport) {
    let t0 = Instant::now();
    let mut report = CalibrationReport {
        width: luma.width(),
        height: luma.height(),
        ..Default::default()
    };
    let outcome = match find_calibration(luma, params, &mut report) {
        Ok(calibration) => CalibrationOutcome::Calibrated(calibration),
        Err(failure) => {
            debug!(
                "court calibration not yet ({}x{}): {failure}",
                report.width, report.height
            );
            report.failure = Some(failure);
            CalibrationOutcome::NotYet(failure)
        }
    };
    report.timings.total_ms = elapsed_ms(t0);
    (outcome, report)
}

fn find_calibration(
    luma: &ImageF32,
    params: &CalibrationParams,
    report: &mut CalibrationReport,
) -> Result<Calibration, CalibrationFailure> {
    if luma.is_empty() {
        return Err(CalibrationFailure::EmptyFrame);
    }

    let t = Instant::now();
    let blurred;
    let source = if params.blur {
        blurred = filters::apply(&GAUSSIAN_5TAP, luma);
        &blurred
    } else {
        luma
    };
    report.timings.push("blur", elapsed_ms(t));

    let t = Instant::now();
    let edges = canny(source, &params.canny);
    report.edge_pixels = edges.count();
    report.timings.push("canny", elapsed_ms(t));

    let t = Instant::now();
    let lines = hough_lines(&edges, &params.hough);
    report.lines = lines.len();
    report.timings.push("hough", elapsed_ms(t));
    if lines.is_empty() {
        return Err(CalibrationFailure::NoLines);
    }

    let t = Instant::now();
    let mut horizontal = Vec::new();
    let mut vertical = Vec::new();
    for line in &lines {
        match params.bands.classify(line.theta) {
            Some(LineFamily::Horizontal) => horizontal.push(*line),
            Some(LineFamily::Vertical) => vertical.push(*line),
            None => {}
        }
    }
    report.horizontal_lines = horizontal.len();
    report.vertical_lines = vertical.len();
    if horizontal.is_empty() {
        return Err(CalibrationFailure::MissingHorizontal);
    }
    if vertical.is_empty() {
        return Err(CalibrationFailure::MissingVertical);
    }

    let boundary = [
        extremal(&horizontal, Extreme::MaxRho),
        extremal(&horizontal, Extreme::MinRho),
        extremal(&vertical, Extreme::MinRho),
        extremal(&vertical, Extreme::MaxRho),
    ];
    for line in &boundary {
        debug!(
            "boundary line rho={:.1} theta={:.1}deg votes={}",
            line.rho,
            line.theta_deg(),
            line.votes
        );
    }
    let intersections = pairwise_intersections(&boundary);
    report.intersections = intersections.clone();
    if intersections.len() < 4 {
        return Err(CalibrationFailure::TooFewIntersections);
    }

    let hull = convex_hull(&intersections);
    report.hull = hull.clone();
    if hull.len() < 4 {
        return Err(CalibrationFailure::DegenerateHull);
    }

    let epsilon = params.approx_epsilon_frac * arc_length(&hull);
    let quad: [[f32; 2]; 4] = approx_polygon(&hull, epsilon)
        .try_into()
        .map_err(|_| CalibrationFailure::NotQuadrilateral)?;
    let corners = order_corners(quad);
    report.corners = Some(corners);
    report.timings.push("corners", elapsed_ms(t));

    Calibration::from_corners(corners, params.canvas).ok_or(CalibrationFailure::SingularTransform)
}

#[derive(Clone, Copy)]
enum Extreme {
    MinRho,
    MaxRho,
}

/// First line with the smallest/largest ρ. `lines` must be non-empty.
fn extremal(lines: &[PolarLine], which: Extreme) -> PolarLine {
    let mut best = lines[0];
    for line in &lines[1..] {
        let better = match which {
            Extreme::MinRho => line.rho < best.rho,
            Extreme::MaxRho => line.rho > best.rho,
        };
        if better {
            best = *line;
        }
    }
    best
}

#[inline]
fn elapsed_ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}
