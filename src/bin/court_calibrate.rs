use court_tracker::annotate::draw_court_corners;
use court_tracker::calibration::{calibrate_frame, CalibrationOutcome};
use court_tracker::config::{load_config, DemoConfig};
use court_tracker::edges::canny;
use court_tracker::filters::{self, GAUSSIAN_5TAP};
use court_tracker::image::io::{load_rgb_image, save_grayscale_f32, save_rgb_image, write_json_file};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: DemoConfig = load_config(Path::new(&config_path))?;
    let params = config.analyzer.into_params().calibration;

    let frame = load_rgb_image(&config.input)?;
    let (outcome, report) = calibrate_frame(frame.as_view(), &params);

    match &outcome {
        CalibrationOutcome::Calibrated(calibration) => {
            let [tl, tr, br, bl] = calibration.corners;
            println!(
                "Calibrated in {:.2} ms: tl={tl:?} tr={tr:?} br={br:?} bl={bl:?}",
                report.timings.total_ms
            );
        }
        CalibrationOutcome::NotYet(failure) => {
            println!("Not calibrated: {failure}");
        }
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("Saved calibration report to {}", path.display());
    }

    if let Some(path) = &config.output.annotated_image {
        let mut annotated = frame.clone();
        if let Some(calibration) = outcome.calibration() {
            draw_court_corners(&mut annotated, calibration);
        }
        save_rgb_image(&annotated, path)?;
        println!("Saved annotated image to {}", path.display());
    }

    if let Some(path) = &config.output.edges_image {
        let luma = frame.as_view().to_gray_f32();
        let source = if params.blur {
            filters::apply(&GAUSSIAN_5TAP, &luma)
        } else {
            luma
        };
        let edges = canny(&source, &params.canny);
        save_grayscale_f32(&edges.to_image_f32(), path)?;
        println!("Saved {} edge pixels to {}", edges.count(), path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: court_calibrate <config.json>".to_string()
}
