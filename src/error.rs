//! Error types for the gesture detection library.

use thiserror::Error;

/// Errors raised while turning a hand detection into a gesture decision.
#[derive(Error, Debug)]
pub enum GestureError {
    /// A hand did not carry the fixed number of landmarks
    #[error("malformed landmark set: expected {expected} points, got {actual}")]
    MalformedInput { expected: usize, actual: usize },

    /// The classifier produced an index the label table cannot resolve
    #[error("classifier returned index {index}, but only {labels} labels are configured")]
    ClassifierRange { index: usize, labels: usize },

    /// Classifier output width and label table length disagree
    #[error("classifier reports {classes} classes, but the label table has {labels} labels")]
    LabelMismatch { classes: usize, labels: usize },

    /// Label table with no entries
    #[error("label table is empty")]
    EmptyLabelTable,

    /// Model produced data in an unexpected layout
    #[error("model error: {0}")]
    Model(String),

    /// ONNX Runtime failed to load or run a model
    #[error("ONNX Runtime error: {0}")]
    Onnx(#[from] ort::Error),

    /// Tensor data did not fit the expected shape
    #[error("tensor shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable configuration
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GestureError>;
