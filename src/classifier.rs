pub mod keypoint_classifier {
    use crate::error::{GestureError, Result};
    use crate::geometry::{FEATURE_LEN, FeatureVector};
    use log::{debug, info};
    use ndarray::{Array2, ArrayView, Ix2};
    use ort::{inputs, session::Session, session::builder::GraphOptimizationLevel, value::Value};
    use std::path::Path;

    /// Labels matching the class order of the stock keypoint model.
    pub const DEFAULT_LABELS: [&str; 4] = ["Open", "Close", "Pointer", "OK"];

    /// Maps a feature vector to a class index.
    ///
    /// Implementations must be deterministic for a fixed model and must only
    /// return indices below [`GestureClassifier::class_count`].
    pub trait GestureClassifier {
        /// Number of classes the model can emit.
        fn class_count(&self) -> usize;

        fn classify(&mut self, features: &FeatureVector) -> Result<usize>;
    }

    impl<C: GestureClassifier + ?Sized> GestureClassifier for Box<C> {
        fn class_count(&self) -> usize {
            (**self).class_count()
        }

        fn classify(&mut self, features: &FeatureVector) -> Result<usize> {
            (**self).classify(features)
        }
    }

    /// Ordered class-index to label lookup.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LabelTable {
        labels: Vec<String>,
    }

    impl LabelTable {
        pub fn new<I, S>(labels: I) -> Result<Self>
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
            if labels.is_empty() {
                return Err(GestureError::EmptyLabelTable);
            }
            Ok(Self { labels })
        }

        pub fn len(&self) -> usize {
            self.labels.len()
        }

        pub fn is_empty(&self) -> bool {
            self.labels.is_empty()
        }

        pub fn get(&self, index: usize) -> Result<&str> {
            self.labels
                .get(index)
                .map(String::as_str)
                .ok_or(GestureError::ClassifierRange {
                    index,
                    labels: self.labels.len(),
                })
        }

        pub fn iter(&self) -> impl Iterator<Item = &str> {
            self.labels.iter().map(String::as_str)
        }
    }

    impl Default for LabelTable {
        fn default() -> Self {
            Self {
                labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    /// A classifier and the label table it was trained against.
    ///
    /// Construction fails unless both agree on the number of classes.
    pub struct GestureModel<C> {
        classifier: C,
        labels: LabelTable,
    }

    impl<C: GestureClassifier> GestureModel<C> {
        pub fn new(classifier: C, labels: LabelTable) -> Result<Self> {
            let classes = classifier.class_count();
            if classes != labels.len() {
                return Err(GestureError::LabelMismatch {
                    classes,
                    labels: labels.len(),
                });
            }
            Ok(Self { classifier, labels })
        }

        pub fn labels(&self) -> &LabelTable {
            &self.labels
        }

        pub fn classifier(&self) -> &C {
            &self.classifier
        }

        /// Classify `features` and resolve the label.
        pub fn decide(&mut self, features: &FeatureVector) -> Result<(usize, &str)> {
            let index = self.classifier.classify(features)?;
            let label = self.labels.get(index)?;
            Ok((index, label))
        }
    }

    /// Keypoint classifier exported to ONNX: `[1, 42]` in, `[1, classes]` scores out.
    pub struct OnnxKeypointClassifier {
        session: Session,
        input_name: String,
        output_name: String,
        classes: usize,
    }

    impl OnnxKeypointClassifier {
        pub fn new<P: AsRef<Path>>(
            model_path: P,
            input_name: &str,
            output_name: &str,
        ) -> Result<Self> {
            let session = load_session(model_path.as_ref(), 1)?;

            let mut classifier = Self {
                session,
                input_name: input_name.to_string(),
                output_name: output_name.to_string(),
                classes: 0,
            };

            // Probe once to learn the output width
            let scores = classifier.scores(&[0.0; FEATURE_LEN])?;
            if scores.is_empty() {
                return Err(GestureError::Model("classifier produced no scores".to_string()));
            }
            classifier.classes = scores.len();

            info!(
                "Loaded keypoint classifier {} ({} classes)",
                model_path.as_ref().display(),
                classifier.classes
            );

            Ok(classifier)
        }

        fn scores(&mut self, features: &[f32]) -> Result<Vec<f32>> {
            let input = Array2::from_shape_vec((1, FEATURE_LEN), features.to_vec())?;
            let input_tensor = Value::from_array(input)?;

            let outputs = self
                .session
                .run(inputs![self.input_name.as_str() => input_tensor])?;

            let (shape, data) = outputs[self.output_name.as_str()].try_extract_tensor::<f32>()?;
            first_row(shape, data)
        }
    }

    /// Build an optimized CPU session for `model_path`.
    pub(crate) fn load_session(model_path: &Path, threads: usize) -> ort::Result<Session> {
        Ok(Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(threads)?
            .commit_from_file(model_path)?)
    }

    /// First row of a `[batch, classes]` score tensor.
    pub fn first_row(shape: &[i64], data: &[f32]) -> Result<Vec<f32>> {
        let shape: Vec<usize> = shape.iter().map(|&d| d as usize).collect();
        let scores = ArrayView::from_shape(shape, data)?.into_dimensionality::<Ix2>()?;
        Ok(scores.row(0).to_vec())
    }

    impl GestureClassifier for OnnxKeypointClassifier {
        fn class_count(&self) -> usize {
            self.classes
        }

        fn classify(&mut self, features: &FeatureVector) -> Result<usize> {
            let scores = self.scores(features.as_slice())?;
            let index = argmax(&scores)
                .ok_or_else(|| GestureError::Model("classifier produced no scores".to_string()))?;
            debug!("Keypoint scores {:?} -> {}", scores, index);
            Ok(index)
        }
    }

    /// Index of the largest score; the first one wins on ties.
    pub fn argmax(scores: &[f32]) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, &s) in scores.iter().enumerate() {
            match best {
                Some((_, b)) if s <= b => {}
                _ => best = Some((i, s)),
            }
        }
        best.map(|(i, _)| i)
    }

}
