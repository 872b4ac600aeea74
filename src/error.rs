use thiserror::Error;


/// Configuration and shape errors.
///
/// Construction reports these through [Network::try_new](crate::Network::try_new).
/// Inference and training treat them as violated preconditions and panic
/// with the error's message.

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
  #[error("at least two layer sizes are required, got {0}")]
  TooFewLayers(usize),

  #[error("layer {index} must have at least one neuron")]
  EmptyLayer { index: usize },

  #[error("inputs must have {expected} items, got {actual}")]
  InputSize { expected: usize, actual: usize },

  #[error("targets must have {expected} items, got {actual}")]
  TargetSize { expected: usize, actual: usize },

  #[error("trace must have one slot per layer ({expected}), got {actual}")]
  TraceSize { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, NetworkError>;
