use rand::Rng;
use itertools::Itertools;

use crate::{
  internal::*,
  scalar::Real,
};


/// A single unit: one weight per output of the preceding layer,
/// plus a threshold that gets subtracted from the weighted sum.

#[derive(Debug, Clone, PartialEq)]
pub struct Neuron<R: Real> {
  pub(crate) threshold: R,
  pub(crate) weights: Vec<R>,
}

impl<R: Real> Neuron<R> {
  pub(crate) fn random(input_size: usize, rng: &mut impl Rng) -> Self {
    let threshold = small_random(rng);
    let weights = (0..input_size).map(|_| small_random(rng) ).collect();
    Self { threshold, weights }
  }

  pub fn threshold(&self) -> R {
    self.threshold
  }

  pub fn weights(&self) -> &[R] {
    &self.weights
  }

  pub fn ignite(&self, inputs: &[R]) -> R {
    sigmoid(dot(&self.weights, inputs) - self.threshold)
  }

  // The threshold acts as a weight on a constant input of -1
  pub(crate) fn nudge(&mut self, step: R, inputs: &[R]) {
    for (weight, &input) in self.weights.iter_mut().zip_eq(inputs) {
      *weight += step * input;
    }
    self.threshold += step * -R::one();
  }
}
