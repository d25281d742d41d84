//! Hand sign recognition from per-frame hand landmarks.
//!
//! Each detected hand goes through the same steps:
//! 1. Project the 21 normalized landmarks onto the frame's pixel grid
//! 2. Box the projected points for the overlay
//! 3. Normalize them into a wrist-relative, scale-free 42-value feature vector
//! 4. Classify the vector and look the class index up in the label table
//!
//! ```no_run
//! use gesture_detection::{
//!     FrameSize, GestureModel, GesturePipeline, LabelTable, LandmarkDetector,
//!     LandmarkerTensors, OnnxHandLandmarker, OnnxKeypointClassifier,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier =
//!     OnnxKeypointClassifier::new("models/keypoint_classifier.onnx", "input_1", "Identity")?;
//! let mut pipeline = GesturePipeline::new(GestureModel::new(classifier, LabelTable::default())?);
//! let mut landmarker =
//!     OnnxHandLandmarker::new("models/hand_landmark.onnx", LandmarkerTensors::default(), 0.7, 1)?;
//!
//! let frame = image::open("hand.jpg")?.to_rgb8();
//! let size = FrameSize::new(frame.width(), frame.height());
//! for gesture in pipeline.process_frame(landmarker.detect(&frame)?, size) {
//!     println!("{}", gesture?.caption());
//! }
//! # Ok(())
//! # }
//! ```

mod classifier;
mod config;
mod detector;
pub mod error;
mod font;
mod fps;
mod landmarks;
mod overlay;
mod pipeline;
mod sensor;

pub use classifier::keypoint_classifier;
pub use config::settings;
pub use detector::hand_landmarker;
pub use font::glyphs;
pub use fps::frame_rate;
pub use landmarks::geometry;
pub use overlay::draw;
pub use pipeline::gesture_pipeline;
pub use sensor::webcam;

pub use error::{GestureError, Result};
pub use frame_rate::FpsSmoother;
pub use gesture_pipeline::{FrameSize, GesturePipeline, HandGesture};
pub use geometry::{
    BoundingBox, FEATURE_LEN, FeatureVector, LANDMARK_COUNT, Landmark, PixelPoint, bounding_box,
    normalize, project,
};
pub use hand_landmarker::{
    HandDetection, Handedness, LandmarkDetector, LandmarkerTensors, OnnxHandLandmarker,
};
pub use keypoint_classifier::{
    DEFAULT_LABELS, GestureClassifier, GestureModel, LabelTable, OnnxKeypointClassifier,
};
pub use settings::Config;
