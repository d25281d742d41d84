use anyhow::Context;
use clap::Parser;
use gesture_detection::draw::Canvas;
use gesture_detection::webcam;
use gesture_detection::{
    Config, FpsSmoother, FrameSize, GestureModel, GesturePipeline, LandmarkDetector,
    OnnxHandLandmarker, OnnxKeypointClassifier,
};
use log::{debug, error, info, warn};
use minifb::{Key, Window, WindowOptions};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Webcam hand sign recognition", long_about = None)]
struct Args {
    /// Camera index to use
    #[arg(long, default_value_t = 0)]
    cam: u32,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Hand landmark ONNX model (overrides config)
    #[arg(long)]
    landmarker: Option<PathBuf>,

    /// Keypoint classifier ONNX model (overrides config)
    #[arg(long)]
    classifier: Option<PathBuf>,

    /// Do not mirror the camera image
    #[arg(long)]
    no_mirror: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(level));

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(path) = args.landmarker {
        config.models.landmarker = path;
    }
    if let Some(path) = args.classifier {
        config.models.classifier = path;
    }
    if args.no_mirror {
        config.display.mirror = false;
    }
    config.validate()?;

    // Classifier and labels are validated as a pair before any frame is read
    let classifier = OnnxKeypointClassifier::new(
        &config.models.classifier,
        &config.models.classifier_input,
        &config.models.classifier_output,
    )?;
    let model = GestureModel::new(classifier, config.gestures.label_table()?)?;
    let mut pipeline = GesturePipeline::new(model);

    let mut landmarker = OnnxHandLandmarker::new(
        &config.models.landmarker,
        config.models.landmarker_tensors(),
        config.detection.min_confidence,
        config.detection.max_hands,
    )?;

    let mut camera = webcam::setup(args.cam)?;
    camera.open_stream()?;

    let width = config.display.width as usize;
    let height = config.display.height as usize;
    let size = FrameSize::new(config.display.width, config.display.height);

    let mut window = Window::new("gesture_detection", width, height, WindowOptions::default())?;
    let frame_time = Duration::from_micros(1_000_000 / config.display.target_fps as u64);
    window.limit_update_rate(Some(frame_time));

    // Pre-allocate the pixel buffer to avoid allocating a new vector every frame
    let mut buffer = vec![0u32; width * height];

    let mut frame_fps = FpsSmoother::new(config.fps.buffer_len, config.fps.precision);
    let mut display_fps = FpsSmoother::new(config.fps.display_len, config.fps.precision);

    info!("Entering main loop");
    while window.is_open() && !window.is_key_down(Key::Escape) {
        let decoded = match webcam::capture_and_decode_frame(&mut camera) {
            Ok(frame) => frame,
            Err(e) => {
                warn!("Failed to capture or decode frame: {}", e);
                continue;
            }
        };
        let frame = webcam::prepare_frame(
            &decoded,
            config.display.width,
            config.display.height,
            config.display.mirror,
        );

        let fps = display_fps.push(frame_fps.tick());

        let mut canvas = Canvas::new(&mut buffer, width, height);
        canvas.blit_rgb(frame.as_raw());

        let detections = match landmarker.detect(&frame) {
            Ok(detections) => detections,
            Err(e) => {
                error!("Landmark detection failed: {}", e);
                Vec::new()
            }
        };

        for result in pipeline.process_frame(detections, size) {
            match result {
                Ok(gesture) => {
                    info!("hand_sign_id: {} ({})", gesture.class_index, gesture.caption());
                    canvas.hand(&gesture);
                }
                Err(e) => warn!("Skipping hand: {}", e),
            }
        }

        canvas.fps(fps);
        debug!("FPS: {}", fps);
        window.update_with_buffer(&buffer, width, height)?;
    }

    Ok(())
}
