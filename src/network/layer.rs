use rand::Rng;
use itertools::Itertools;

use crate::scalar::Real;
use super::Neuron;


/// Neurons sharing the same inputs.

#[derive(Debug, Clone, PartialEq)]
pub struct Layer<R: Real> {
  pub(crate) neurons: Vec<Neuron<R>>,
}

impl<R: Real> Layer<R> {
  pub(crate) fn random(input_size: usize, size: usize, rng: &mut impl Rng) -> Self {
    let neurons = (0..size).map(|_| Neuron::random(input_size, rng) ).collect();
    Self { neurons }
  }

  pub fn neurons(&self) -> &[Neuron<R>] {
    &self.neurons
  }

  pub fn len(&self) -> usize {
    self.neurons.len()
  }

  pub fn is_empty(&self) -> bool {
    self.neurons.is_empty()
  }

  /// Number of weights carried by each neuron.

  pub fn input_size(&self) -> usize {
    self.neurons[0].weights.len()
  }

  pub fn ignite(&self, inputs: &[R]) -> Vec<R> {
    self.neurons.iter().map(|neuron| neuron.ignite(inputs) ).collect()
  }

  /// Like [ignite](Self::ignite), but reuses the allocation of `outputs`.

  pub fn ignite_into(&self, inputs: &[R], outputs: &mut Vec<R>) {
    outputs.clear();
    outputs.extend(self.neurons.iter().map(|neuron| neuron.ignite(inputs) ));
  }

  /// Apply one gradient step, given an error term per neuron.

  pub(crate) fn nudge(&mut self, eta: R, deltas: &[R], inputs: &[R]) {
    for (neuron, &delta) in self.neurons.iter_mut().zip_eq(deltas) {
      neuron.nudge(-eta * delta, inputs);
    }
  }
}
