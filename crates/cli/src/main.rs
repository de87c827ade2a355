use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;

use facelens_core::compositing::infrastructure::cpu_compositor::{CpuCompositor, OverlayAnchor};
use facelens_core::detection::domain::landmark_detector::DetectorConfig;
use facelens_core::detection::infrastructure::json_landmark_detector::JsonLandmarkDetector;
use facelens_core::geometry::landmark_schema::LandmarkSchema;
use facelens_core::overlay::domain::asset_loader::AssetLoader;
use facelens_core::overlay::infrastructure::image_asset_loader::ImageAssetLoader;
use facelens_core::overlay::overlay_store::OverlayStore;
use facelens_core::pipeline::augment_stream_use_case::AugmentStreamUseCase;
use facelens_core::pipeline::infrastructure::threaded_pipeline_driver::ThreadedPipelineDriver;
use facelens_core::pipeline::pipeline_logger::{PipelineLogger, StdoutPipelineLogger};
use facelens_core::shared::constants::DEFAULT_LIP_TINT;
use facelens_core::shared::draw_state::BlendMode;
use facelens_core::video::infrastructure::image_sequence_sink::ImageSequenceSink;
use facelens_core::video::infrastructure::image_sequence_source::ImageSequenceSource;

/// Face-anchored overlay compositing for frame sequences.
#[derive(Parser)]
#[command(name = "facelens")]
struct Cli {
    /// Directory of input frames (sorted by filename).
    frames_dir: PathBuf,

    /// Directory of per-frame landmark JSON files (000000.json, ...).
    landmarks_dir: PathBuf,

    /// Output directory for composited frames.
    output: PathBuf,

    /// Overlay sprite image (RGBA); omit to render frames unchanged.
    #[arg(long)]
    overlay: Option<PathBuf>,

    /// Overlay opacity (0.0-1.0).
    #[arg(long, default_value = "0.8")]
    opacity: f32,

    /// Overlay blend mode: normal, multiply or screen.
    #[arg(long, default_value = "normal")]
    blend: String,

    /// Soften (blur) radius applied to the overlay sprite, in pixels.
    #[arg(long, default_value = "1.0")]
    soften: f32,

    /// Tint the lips with the default rose color.
    #[arg(long)]
    lip_tint: bool,

    /// Overlay anchor: iris or eyes.
    #[arg(long, default_value = "iris")]
    anchor: String,

    /// Maximum number of faces per frame.
    #[arg(long, default_value = "1")]
    max_faces: usize,

    /// Detector confidence threshold (0.0-1.0), passed through.
    #[arg(long, default_value = "0.5")]
    confidence: f64,

    /// Detector tracking threshold (0.0-1.0), passed through.
    #[arg(long, default_value = "0.5")]
    tracking_confidence: f64,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let blend_mode = BlendMode::from_name(&cli.blend)
        .ok_or_else(|| format!("Unknown blend mode '{}' (use normal, multiply or screen)", cli.blend))?;
    let anchor = parse_anchor(&cli.anchor)?;
    if !(0.0..=1.0).contains(&cli.opacity) {
        return Err("Opacity must be between 0.0 and 1.0".into());
    }
    if cli.soften < 0.0 {
        return Err("Soften radius must not be negative".into());
    }

    let store = OverlayStore::new();
    store.set_opacity(cli.opacity);
    store.set_blend_mode(blend_mode);
    store.set_soften_radius(cli.soften);
    if cli.lip_tint {
        store.set_lip_tint(Some(DEFAULT_LIP_TINT));
    }
    if let Some(ref path) = cli.overlay {
        let image = ImageAssetLoader.load(path)?;
        store.select_overlay(Arc::new(image));
    }

    let source = ImageSequenceSource::new(&cli.frames_dir)?;
    let total_frames = source.frame_count();
    let sink = ImageSequenceSink::new(&cli.output)?;
    let detector = JsonLandmarkDetector::new(&cli.landmarks_dir);
    let compositor = CpuCompositor::new(LandmarkSchema::default(), anchor);

    let detector_config = DetectorConfig {
        max_faces: cli.max_faces,
        refine_landmarks: anchor == OverlayAnchor::Iris,
        min_detection_confidence: cli.confidence,
        min_tracking_confidence: cli.tracking_confidence,
    };

    let mut use_case = AugmentStreamUseCase::new(
        Box::new(source),
        Box::new(detector),
        Box::new(compositor),
        Box::new(sink),
        store,
        Box::new(ThreadedPipelineDriver::new()),
        detector_config,
        total_frames,
        None,
        None,
    );

    let mut logger = StdoutPipelineLogger::default();
    logger.info(&format!(
        "Compositing {total_frames} frames from {}",
        cli.frames_dir.display()
    ));
    use_case.execute(&mut logger)?;
    logger.info(&format!("Output written to {}", cli.output.display()));

    Ok(())
}

fn parse_anchor(name: &str) -> Result<OverlayAnchor, Box<dyn std::error::Error>> {
    match name {
        "iris" => Ok(OverlayAnchor::Iris),
        "eyes" => Ok(OverlayAnchor::Eyes),
        other => Err(format!("Unknown anchor '{other}' (use iris or eyes)").into()),
    }
}
