pub mod gesture_pipeline {
    //! Per-hand gesture decision: project, box, normalize, classify, label.
    //!
    //! Nothing is carried from one frame to the next; each detection is
    //! decided on its own and a failure only drops that hand.

    use crate::error::{GestureError, Result};
    use crate::geometry::{
        BoundingBox, FeatureVector, LANDMARK_COUNT, PixelPoint, bounding_box, normalize, project,
    };
    use crate::hand_landmarker::{HandDetection, Handedness};
    use crate::keypoint_classifier::{GestureClassifier, GestureModel};
    use log::debug;

    /// Pixel dimensions of the frame the landmarks were detected in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FrameSize {
        pub width: u32,
        pub height: u32,
    }

    impl FrameSize {
        pub fn new(width: u32, height: u32) -> Self {
            Self { width, height }
        }
    }

    /// Everything the overlay needs for one decided hand.
    #[derive(Debug, Clone, PartialEq)]
    pub struct HandGesture {
        pub bounding_box: BoundingBox,
        pub label: String,
        pub class_index: usize,
        pub handedness: Handedness,
        pub features: FeatureVector,
        pub points: Vec<PixelPoint>,
    }

    impl HandGesture {
        /// Overlay caption, e.g. `Right:Open`.
        pub fn caption(&self) -> String {
            if self.label.is_empty() {
                self.handedness.to_string()
            } else {
                format!("{}:{}", self.handedness, self.label)
            }
        }
    }

    pub struct GesturePipeline<C> {
        model: GestureModel<C>,
    }

    impl<C: GestureClassifier> GesturePipeline<C> {
        pub fn new(model: GestureModel<C>) -> Self {
            Self { model }
        }

        pub fn model(&self) -> &GestureModel<C> {
            &self.model
        }

        /// Decide the gesture of a single detected hand.
        pub fn process_hand(
            &mut self,
            detection: &HandDetection,
            size: FrameSize,
        ) -> Result<HandGesture> {
            if detection.landmarks.len() != LANDMARK_COUNT {
                return Err(GestureError::MalformedInput {
                    expected: LANDMARK_COUNT,
                    actual: detection.landmarks.len(),
                });
            }

            let points = project(&detection.landmarks, size.width, size.height);
            let bounding_box = bounding_box(&points).ok_or(GestureError::MalformedInput {
                expected: LANDMARK_COUNT,
                actual: 0,
            })?;
            let features = normalize(&points)?;
            if features.is_degenerate() {
                debug!("All landmarks on the wrist, classifying zero vector");
            }

            let (class_index, label) = self.model.decide(&features)?;
            debug!(
                "{} hand -> {} ({}) in {:?}",
                detection.handedness, label, class_index, bounding_box
            );

            Ok(HandGesture {
                bounding_box,
                label: label.to_string(),
                class_index,
                handedness: detection.handedness,
                features,
                points,
            })
        }

        /// Decide every hand of one frame, lazily and in detector order.
        ///
        /// Each item is independent: an error for one hand does not end the
        /// iteration.
        pub fn process_frame<'a, I>(
            &'a mut self,
            detections: I,
            size: FrameSize,
        ) -> impl Iterator<Item = Result<HandGesture>> + 'a
        where
            I: IntoIterator<Item = HandDetection>,
            I::IntoIter: 'a,
        {
            detections
                .into_iter()
                .map(move |detection| self.process_hand(&detection, size))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::geometry::Landmark;
        use crate::keypoint_classifier::LabelTable;

        /// Picks the class from the sign of the first non-wrist x offset.
        struct SignClassifier;

        impl GestureClassifier for SignClassifier {
            fn class_count(&self) -> usize {
                4
            }

            fn classify(&mut self, features: &FeatureVector) -> Result<usize> {
                let dx = features.as_slice()[2];
                Ok(if dx > 0.0 {
                    0
                } else if dx < 0.0 {
                    1
                } else {
                    3
                })
            }
        }

        fn pipeline() -> GesturePipeline<SignClassifier> {
            GesturePipeline::new(GestureModel::new(SignClassifier, LabelTable::default()).unwrap())
        }

        fn detection(dx: f32) -> HandDetection {
            HandDetection {
                landmarks: (0..LANDMARK_COUNT)
                    .map(|i| {
                        let t = i as f32 / 100.0;
                        Landmark::new(0.5 + dx * t, 0.5 - t, 0.0)
                    })
                    .collect(),
                handedness: Handedness::Right,
                score: 0.9,
            }
        }

        #[test]
        fn test_process_hand() {
            let gesture = pipeline()
                .process_hand(&detection(1.0), FrameSize::new(960, 540))
                .unwrap();
            assert_eq!(gesture.label, "Open");
            assert_eq!(gesture.class_index, 0);
            assert_eq!(gesture.caption(), "Right:Open");
            assert_eq!(gesture.points.len(), LANDMARK_COUNT);
            assert_eq!(gesture.bounding_box.xmin, 480);
            assert_eq!(gesture.bounding_box.ymax, 270);
        }

        #[test]
        fn test_malformed_hand() {
            let mut bad = detection(1.0);
            bad.landmarks.truncate(5);
            assert!(matches!(
                pipeline().process_hand(&bad, FrameSize::new(960, 540)),
                Err(GestureError::MalformedInput { expected: 21, actual: 5 })
            ));
        }

        #[test]
        fn test_frame_without_hands() {
            let mut p = pipeline();
            let hands = Vec::<HandDetection>::new();
            assert_eq!(p.process_frame(hands, FrameSize::new(960, 540)).count(), 0);
        }

        #[test]
        fn test_frame_isolates_failures() {
            let mut bad = detection(1.0);
            bad.landmarks.pop();
            let mut p = pipeline();
            let results: Vec<_> = p
                .process_frame(vec![detection(1.0), bad, detection(-1.0)], FrameSize::new(960, 540))
                .collect();
            assert_eq!(results.len(), 3);
            assert_eq!(results[0].as_ref().unwrap().label, "Open");
            assert!(results[1].is_err());
            assert_eq!(results[2].as_ref().unwrap().label, "Close");
        }
    }
}
