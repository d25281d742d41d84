pub mod hand_landmarker {
    use crate::error::{GestureError, Result};
    use crate::geometry::{LANDMARK_COUNT, Landmark};
    use crate::keypoint_classifier::load_session;
    use image::{RgbImage, imageops::FilterType};
    use log::{debug, info};
    use ndarray::Array4;
    use ort::{inputs, session::Session, value::Value};
    use std::fmt;
    use std::path::Path;

    /// Square input edge of the hand landmark model.
    pub const MODEL_INPUT_SIZE: u32 = 224;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Handedness {
        Left,
        Right,
    }

    impl fmt::Display for Handedness {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Handedness::Left => write!(f, "Left"),
                Handedness::Right => write!(f, "Right"),
            }
        }
    }

    /// One hand as reported by a landmark detector.
    #[derive(Debug, Clone, PartialEq)]
    pub struct HandDetection {
        pub landmarks: Vec<Landmark>,
        pub handedness: Handedness,
        pub score: f32,
    }

    /// Source of per-frame hand landmarks.
    pub trait LandmarkDetector {
        /// Zero or more hands found in `frame`, in the detector's own order.
        fn detect(&mut self, frame: &RgbImage) -> Result<Vec<HandDetection>>;
    }

    /// Tensor names of the landmark model.
    #[derive(Debug, Clone)]
    pub struct LandmarkerTensors {
        pub input: String,
        pub landmarks: String,
        pub presence: String,
        pub handedness: String,
    }

    impl Default for LandmarkerTensors {
        fn default() -> Self {
            Self {
                input: "input_1".to_string(),
                landmarks: "Identity".to_string(),
                presence: "Identity_1".to_string(),
                handedness: "Identity_2".to_string(),
            }
        }
    }

    /// Full-frame hand landmark model run through ONNX Runtime.
    ///
    /// The model sees the whole frame squashed to 224x224 and reports a single
    /// hand, so `max_hands` above 1 has no further effect.
    pub struct OnnxHandLandmarker {
        session: Session,
        tensors: LandmarkerTensors,
        min_confidence: f32,
        max_hands: usize,
    }

    impl OnnxHandLandmarker {
        pub fn new<P: AsRef<Path>>(
            model_path: P,
            tensors: LandmarkerTensors,
            min_confidence: f32,
            max_hands: usize,
        ) -> Result<Self> {
            let session = load_session(model_path.as_ref(), 4)?;

            info!("Loaded hand landmarker {}", model_path.as_ref().display());

            Ok(Self {
                session,
                tensors,
                min_confidence,
                max_hands,
            })
        }
    }

    impl LandmarkDetector for OnnxHandLandmarker {
        fn detect(&mut self, frame: &RgbImage) -> Result<Vec<HandDetection>> {
            if self.max_hands == 0 {
                return Ok(Vec::new());
            }

            let size = MODEL_INPUT_SIZE;
            let resized = image::imageops::resize(frame, size, size, FilterType::Triangle);

            // NHWC [1, 224, 224, 3], 0.0-1.0
            let mut input = Array4::<f32>::zeros((1, size as usize, size as usize, 3));
            for (x, y, rgb) in resized.enumerate_pixels() {
                for c in 0..3 {
                    input[[0, y as usize, x as usize, c]] = rgb[c] as f32 / 255.0;
                }
            }
            let input_tensor = Value::from_array(input)?;

            let outputs = self
                .session
                .run(inputs![self.tensors.input.as_str() => input_tensor])?;

            let (_, coords) =
                outputs[self.tensors.landmarks.as_str()].try_extract_tensor::<f32>()?;
            let (_, presence) =
                outputs[self.tensors.presence.as_str()].try_extract_tensor::<f32>()?;
            let (_, handedness) =
                outputs[self.tensors.handedness.as_str()].try_extract_tensor::<f32>()?;

            let score = first_value(presence, "presence")?;
            if score < self.min_confidence {
                debug!("No hand (presence {:.2})", score);
                return Ok(Vec::new());
            }

            Ok(vec![HandDetection {
                landmarks: decode_landmarks(coords, size as f32)?,
                handedness: decode_handedness(first_value(handedness, "handedness")?),
                score,
            }])
        }
    }

    fn first_value(data: &[f32], what: &str) -> Result<f32> {
        data.first()
            .copied()
            .ok_or_else(|| GestureError::Model(format!("empty {} output", what)))
    }

    /// Convert raw `[x, y, z] * 21` model output in input-pixel units to
    /// normalized landmarks.
    pub fn decode_landmarks(coords: &[f32], input_size: f32) -> Result<Vec<Landmark>> {
        if coords.len() < LANDMARK_COUNT * 3 {
            return Err(GestureError::Model(format!(
                "expected {} landmark values, got {}",
                LANDMARK_COUNT * 3,
                coords.len()
            )));
        }

        Ok(coords
            .chunks_exact(3)
            .take(LANDMARK_COUNT)
            .map(|c| Landmark::new(c[0] / input_size, c[1] / input_size, c[2] / input_size))
            .collect())
    }

    /// Model handedness score: above 0.5 is a right hand.
    pub fn decode_handedness(score: f32) -> Handedness {
        if score > 0.5 {
            Handedness::Right
        } else {
            Handedness::Left
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_decode_landmarks() {
            let coords: Vec<f32> = (0..LANDMARK_COUNT * 3)
                .map(|i| (i % 3) as f32 * 112.0)
                .collect();
            let lms = decode_landmarks(&coords, 224.0).unwrap();
            assert_eq!(lms.len(), LANDMARK_COUNT);
            assert_eq!(lms[0], Landmark::new(0.0, 0.5, 1.0));
        }

        #[test]
        fn test_decode_landmarks_short_output() {
            assert!(matches!(
                decode_landmarks(&[0.0; 10], 224.0),
                Err(GestureError::Model(_))
            ));
        }

        #[test]
        fn test_handedness() {
            assert_eq!(decode_handedness(0.9), Handedness::Right);
            assert_eq!(decode_handedness(0.1), Handedness::Left);
            assert_eq!(Handedness::Left.to_string(), "Left");
        }
    }
}
