use rand::Rng;
use tracing::debug;

mod layer;
mod neuron;

pub use layer::Layer;
pub use neuron::Neuron;

use crate::{
  scalar::Real,
  config::NetworkConfig,
  error::{ NetworkError, Result },
};


/// Fully connected feedforward network with sigmoid activations.
///
/// The input layer is implicit: it holds no neurons and is represented by
/// its size only. `layers()[0]` is therefore the first *hidden* layer, and
/// a network built from `n` layer sizes has `n - 1` layers.
///
/// When talking about activations, index 0 refers to the input vector and
/// index `i > 0` to the outputs of `layers()[i - 1]`.

#[derive(Debug, Clone, PartialEq)]
pub struct Network<R: Real = f64> {
  input_size: usize,
  pub(crate) layers: Vec<Layer<R>>,
}

impl<R: Real> Network<R> {
  /// Build a randomly initialized network.
  ///
  /// Panics if the configuration has fewer than two layer sizes
  /// or contains a zero size.

  pub fn new(config: impl Into<NetworkConfig>) -> Self {
    Self::try_new(config).unwrap_or_else(|err| panic!("{err}") )
  }

  pub fn try_new(config: impl Into<NetworkConfig>) -> Result<Self> {
    Self::from_rng(config, &mut rand::thread_rng())
  }

  /// Build a network, drawing every weight and threshold from `rng`,
  /// uniformly in `[0, 1/1000)`.

  pub fn from_rng(config: impl Into<NetworkConfig>, rng: &mut impl Rng) -> Result<Self> {
    let config = config.into();
    config.validate()?;

    let layers = config.layer_sizes
      .windows(2)
      .map(|pair| Layer::random(pair[0], pair[1], rng) )
      .collect();

    debug!(layer_sizes = ?config.layer_sizes, "Built network");

    Ok(Self { input_size: config.input_size(), layers })
  }

  pub fn layers(&self) -> &[Layer<R>] {
    &self.layers
  }

  /// Number of neuron layers, not counting the implicit input layer.

  pub fn num_layers(&self) -> usize {
    self.layers.len()
  }

  /// All sizes this network was built from, including the input size.

  pub fn layer_sizes(&self) -> Vec<usize> {
    std::iter::once(self.input_size)
      .chain(self.layers.iter().map(|layer| layer.len() ))
      .collect()
  }

  pub fn input_size(&self) -> usize {
    self.input_size
  }

  pub fn output_size(&self) -> usize {
    self.layers[self.layers.len() - 1].len()
  }

  /// Neuron count of the widest layer.

  pub fn max_layer_size(&self) -> usize {
    self.layers.iter().map(|layer| layer.len() ).max().unwrap_or(0)
  }

  pub fn check_input(&self, input: &[R]) -> Result<()> {
    if input.len() != self.input_size {
      return Err(NetworkError::InputSize { expected: self.input_size, actual: input.len() })
    }
    Ok(())
  }

  pub fn check_target(&self, target: &[R]) -> Result<()> {
    if target.len() != self.output_size() {
      return Err(NetworkError::TargetSize { expected: self.output_size(), actual: target.len() })
    }
    Ok(())
  }

  pub fn check_trace(&self, trace: &[Vec<R>]) -> Result<()> {
    if trace.len() != self.layers.len() {
      return Err(NetworkError::TraceSize { expected: self.layers.len(), actual: trace.len() })
    }
    Ok(())
  }

  /// Forward pass. Returns the outputs of the last layer.
  ///
  /// Panics if `input` doesn't match the network's input size.

  pub fn ignite(&self, input: &[R]) -> Vec<R> {
    self.check_input(input).unwrap_or_else(|err| panic!("{err}") );
    self.layers.iter().fold(input.to_vec(), |activations, layer| layer.ignite(&activations) )
  }

  /// Forward pass that also records every layer's outputs.
  ///
  /// `trace` needs one slot per layer. Slot `i` receives the outputs of
  /// `layers()[i]`, reusing whatever allocation it already holds.
  /// The returned vector equals the last slot.

  pub fn ignite_traced(&self, input: &[R], trace: &mut [Vec<R>]) -> Vec<R> {
    self.record(input, trace);
    trace[trace.len() - 1].clone()
  }

  pub(crate) fn record(&self, input: &[R], trace: &mut [Vec<R>]) {
    self.check_input(input).unwrap_or_else(|err| panic!("{err}") );
    self.check_trace(trace).unwrap_or_else(|err| panic!("{err}") );
    for (i, layer) in self.layers.iter().enumerate() {
      let (done, pending) = trace.split_at_mut(i);
      let inputs = done.last().map_or(input, |prev| prev.as_slice() );
      layer.ignite_into(inputs, &mut pending[0]);
    }
  }

  /// Allocate a trace suitable for [ignite_traced](Self::ignite_traced).

  pub fn trace_buffer(&self) -> Vec<Vec<R>> {
    self.layers.iter().map(|layer| Vec::with_capacity(layer.len()) ).collect()
  }
}
