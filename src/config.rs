pub mod settings {
    //! YAML configuration for the gesture detector.

    use crate::error::{GestureError, Result};
    use crate::frame_rate::MAX_PRECISION;
    use crate::hand_landmarker::LandmarkerTensors;
    use crate::keypoint_classifier::{DEFAULT_LABELS, LabelTable};
    use serde::{Deserialize, Serialize};
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Config {
        pub models: ModelConfig,
        pub detection: DetectionConfig,
        pub gestures: GestureConfig,
        pub display: DisplayConfig,
        pub fps: FpsConfig,
    }

    /// Model files and tensor names
    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(default)]
    pub struct ModelConfig {
        pub landmarker: PathBuf,
        pub classifier: PathBuf,
        pub landmarker_input: String,
        pub landmarker_landmarks: String,
        pub landmarker_presence: String,
        pub landmarker_handedness: String,
        pub classifier_input: String,
        pub classifier_output: String,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(default)]
    pub struct DetectionConfig {
        /// Minimum hand presence score (0.0-1.0)
        pub min_confidence: f32,
        pub max_hands: usize,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(default)]
    pub struct GestureConfig {
        /// Labels in classifier output order
        pub labels: Vec<String>,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(default)]
    pub struct DisplayConfig {
        pub width: u32,
        pub height: u32,
        pub mirror: bool,
        pub target_fps: u32,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(default)]
    pub struct FpsConfig {
        /// Frame interval samples averaged into the raw rate
        pub buffer_len: usize,
        /// Raw rates averaged into the displayed rate
        pub display_len: usize,
        /// Decimal places of the reported rate
        pub precision: u32,
    }

    impl Default for ModelConfig {
        fn default() -> Self {
            let tensors = LandmarkerTensors::default();
            Self {
                landmarker: PathBuf::from("models/hand_landmark.onnx"),
                classifier: PathBuf::from("models/keypoint_classifier.onnx"),
                landmarker_input: tensors.input,
                landmarker_landmarks: tensors.landmarks,
                landmarker_presence: tensors.presence,
                landmarker_handedness: tensors.handedness,
                classifier_input: "input_1".to_string(),
                classifier_output: "Identity".to_string(),
            }
        }
    }

    impl Default for DetectionConfig {
        fn default() -> Self {
            Self {
                min_confidence: 0.7,
                max_hands: 1,
            }
        }
    }

    impl Default for GestureConfig {
        fn default() -> Self {
            Self {
                labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl Default for DisplayConfig {
        fn default() -> Self {
            Self {
                width: 960,
                height: 540,
                mirror: true,
                target_fps: 30,
            }
        }
    }

    impl Default for FpsConfig {
        fn default() -> Self {
            Self {
                buffer_len: 10,
                display_len: 16,
                precision: 0,
            }
        }
    }

    impl ModelConfig {
        pub fn landmarker_tensors(&self) -> LandmarkerTensors {
            LandmarkerTensors {
                input: self.landmarker_input.clone(),
                landmarks: self.landmarker_landmarks.clone(),
                presence: self.landmarker_presence.clone(),
                handedness: self.landmarker_handedness.clone(),
            }
        }
    }

    impl GestureConfig {
        pub fn label_table(&self) -> Result<LabelTable> {
            LabelTable::new(self.labels.iter().cloned())
        }
    }

    impl Config {
        pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
            let content = std::fs::read_to_string(path)?;
            Self::from_yaml(&content)
        }

        pub fn from_yaml(content: &str) -> Result<Self> {
            serde_yaml::from_str(content)
                .map_err(|e| GestureError::Config(format!("Failed to parse config: {}", e)))
        }

        pub fn to_yaml(&self) -> Result<String> {
            serde_yaml::to_string(self)
                .map_err(|e| GestureError::Config(format!("Failed to serialize config: {}", e)))
        }

        pub fn validate(&self) -> Result<()> {
            if !(0.0..=1.0).contains(&self.detection.min_confidence) {
                return Err(GestureError::Config(
                    "Detection confidence must be between 0.0 and 1.0".to_string(),
                ));
            }
            if self.gestures.labels.is_empty() {
                return Err(GestureError::Config(
                    "At least one gesture label is required".to_string(),
                ));
            }
            if self.display.width == 0 || self.display.height == 0 {
                return Err(GestureError::Config(
                    "Frame dimensions must be non-zero".to_string(),
                ));
            }
            if self.display.target_fps == 0 {
                return Err(GestureError::Config("Target FPS must be greater than 0".to_string()));
            }
            if self.fps.precision > MAX_PRECISION {
                return Err(GestureError::Config(format!(
                    "FPS precision must be at most {} decimal places",
                    MAX_PRECISION
                )));
            }
            if self.fps.buffer_len == 0 || self.fps.display_len == 0 {
                return Err(GestureError::Config(
                    "FPS window sizes must be greater than 0".to_string(),
                ));
            }
            Ok(())
        }
    }

    /// Example configuration file content
    pub const EXAMPLE_CONFIG: &str = r#"# Gesture Detection Configuration

models:
  landmarker: "models/hand_landmark.onnx"
  classifier: "models/keypoint_classifier.onnx"
  classifier_input: "input_1"
  classifier_output: "Identity"

detection:
  min_confidence: 0.7
  max_hands: 1

# Must follow the classifier's class order
gestures:
  labels: ["Open", "Close", "Pointer", "OK"]

display:
  width: 960
  height: 540
  mirror: true
  target_fps: 30

fps:
  buffer_len: 10
  display_len: 16
  precision: 0
"#;

}
