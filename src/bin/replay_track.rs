use court_tracker::config::{load_config, DemoConfig};
use court_tracker::detection::ScriptedDetector;
use court_tracker::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use court_tracker::{CourtAnalyzer, FrameAnalysis};
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
    let params = config.analyzer.into_params();
    let fps = params.default_fps;

    // Static camera: the calibration image stands in for every frame.
    let frame = load_rgb_image(&config.input)?;
    let frames = config.detections.len();
    let mut detector = ScriptedDetector::new(config.detections);
    let mut analyzer = CourtAnalyzer::new(params);

    let mut last: Option<FrameAnalysis> = None;
    for _ in 0..frames {
        let analysis = analyzer.analyze_with(&mut detector, frame.as_view(), fps);
        let line = serde_json::to_string(&analysis)
            .map_err(|e| format!("Failed to serialize frame {}: {e}", analysis.frame_index))?;
        println!("{line}");
        last = Some(analysis);
    }

    let Some(last) = last else {
        return Err("Config has no detections to replay".to_string());
    };

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &last.bounce_history)?;
        eprintln!("Saved {} bounces to {}", last.bounce_history.len(), path.display());
    }

    if let Some(path) = &config.output.annotated_image {
        let mut annotated = frame.clone();
        analyzer.annotate(&mut annotated, &last);
        save_rgb_image(&annotated, path)?;
        eprintln!("Saved annotated frame to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: replay_track <config.json>".to_string()
}
