use court_tracker::tracker::{BounceCall, TrackerParams, TrajectoryKind, TrajectoryTracker};
use court_tracker::types::{CourtPoint, ImageRatioPoint};

const FPS: f32 = 30.0;

fn observe_y(tracker: &mut TrajectoryTracker, y: f32) -> court_tracker::tracker::TrackOutput {
    let image = ImageRatioPoint::new(0.5, y);
    tracker.observe(Some(image), Some(CourtPoint::new(0.5, y)), FPS)
}

#[test]
fn end_to_end_scenario_records_one_bounce_at_lowest_point() {
    let mut tracker = TrajectoryTracker::default();

    for _ in 0..4 {
        let out = tracker.observe(None, None, FPS);
        assert_eq!(out.speed, 0.0);
        assert_eq!(out.trajectory, TrajectoryKind::NotAvailable);
        assert!(out.bounce.is_none());
    }

    let ys = [0.50, 0.55, 0.60, 0.65];
    let images: Vec<ImageRatioPoint> = ys
        .iter()
        .enumerate()
        .map(|(i, &y)| ImageRatioPoint::new(0.3 + 0.01 * i as f32, y - 0.1))
        .collect();
    for (i, (&y, &image)) in ys.iter().zip(&images).enumerate() {
        let out = tracker.observe(Some(image), Some(CourtPoint::new(0.5, y)), FPS);
        assert!(out.bounce.is_none());
        if i >= 1 {
            assert!(tracker.state().is_falling, "falling after frame {}", 6 + i - 1);
        }
    }
    assert!(tracker.history().is_empty());

    let out = tracker.observe(
        Some(ImageRatioPoint::new(0.4, 0.48)),
        Some(CourtPoint::new(0.5, 0.58)),
        FPS,
    );
    let bounce = out.bounce.expect("reversal confirms a bounce");
    assert_eq!(tracker.history().len(), 1);
    assert_eq!(bounce.x, images[3].x);
    assert_eq!(bounce.y, images[3].y);
    assert_eq!(bounce.call, BounceCall::Good);
    assert_eq!(bounce.frame_index, 8);
    assert!(!tracker.state().is_falling);
    assert_eq!(out.trajectory, TrajectoryKind::Flat);
}

#[test]
fn ring_buffer_keeps_most_recent_samples() {
    let mut tracker = TrajectoryTracker::default();
    for i in 0..45 {
        let x = i as f32 / 100.0;
        tracker.observe(
            Some(ImageRatioPoint::new(x, 0.5)),
            Some(CourtPoint::new(x, 0.5)),
            FPS,
        );
    }
    let buffer = tracker.buffer();
    assert_eq!(buffer.len(), 30);
    let xs: Vec<f32> = buffer.iter().filter_map(|s| s.court).map(|c| c.x).collect();
    let expected: Vec<f32> = (15..45).map(|i| i as f32 / 100.0).collect();
    assert_eq!(xs, expected);
}

#[test]
fn sustained_reversal_fires_once() {
    let mut tracker = TrajectoryTracker::default();
    let down = (1..=6).map(|i| i as f32 / 10.0);
    let up = (1..=5).rev().map(|i| i as f32 / 10.0);
    let bounces = down
        .chain(up)
        .filter(|&y| observe_y(&mut tracker, y).bounce.is_some())
        .count();
    assert_eq!(bounces, 1);
    assert_eq!(tracker.history().len(), 1);
}

#[test]
fn jitter_within_threshold_never_bounces() {
    let mut tracker = TrajectoryTracker::default();
    for i in 0..60 {
        let y = if i % 2 == 0 { 0.500 } else { 0.505 };
        assert!(observe_y(&mut tracker, y).bounce.is_none());
    }
    assert!(tracker.history().is_empty());
    assert!(!tracker.state().is_falling);
}

#[test]
fn occlusion_resets_falling_but_keeps_previous_y() {
    let mut tracker = TrajectoryTracker::default();
    observe_y(&mut tracker, 0.50);
    observe_y(&mut tracker, 0.60);
    assert!(tracker.state().is_falling);

    for _ in 0..3 {
        tracker.observe(None, None, FPS);
    }
    let state = tracker.state();
    assert!(!state.is_falling);
    assert_eq!(state.previous_y, Some(0.60));

    // A single upward move straight after the gap is not a bounce.
    let out = observe_y(&mut tracker, 0.55);
    assert!(out.bounce.is_none());
    assert_eq!(out.speed, 0.0);
    assert!(tracker.history().is_empty());
}

#[test]
fn speed_between_consecutive_samples() {
    let mut tracker = TrajectoryTracker::default();
    let first = tracker.observe(None, Some(CourtPoint::new(0.0, 0.0)), FPS);
    assert_eq!(first.speed, 0.0);
    let second = tracker.observe(None, Some(CourtPoint::new(0.0, 0.1)), FPS);
    assert!((second.speed - 3.0).abs() < 1e-4, "speed {}", second.speed);
}

#[test]
fn history_is_append_only() {
    let mut tracker = TrajectoryTracker::new(TrackerParams::default());
    let mut previous = tracker.history().snapshot();
    // Three bounces: fall, rise, repeated.
    let ys = [
        0.2, 0.3, 0.4, 0.3, 0.2, 0.3, 0.4, 0.5, 0.4, 0.3, 0.4, 0.5, 0.6, 0.5,
    ];
    for y in ys {
        observe_y(&mut tracker, y);
        let current = tracker.history().snapshot();
        assert!(current.len() >= previous.len());
        assert_eq!(&current[..previous.len()], &previous[..]);
        previous = current;
    }
    assert_eq!(previous.len(), 3);
}
