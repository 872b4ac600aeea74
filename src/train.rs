use itertools::Itertools;
use tracing::trace;

use crate::{
  scalar::Real,
  network::Network,
};


/// Sum of squared differences between `output` and `target`.

pub fn squared_error<R: Real>(output: &[R], target: &[R]) -> R {
  output.iter()
    .zip_eq(target)
    .map(|(&o, &t)| (o - t) * (o - t) )
    .sum()
}


/// Online backpropagation with plain gradient descent.
///
/// Holds the scratch space of a training step, so that repeated calls to
/// [step](Self::step) don't allocate. A `Backprop` may be reused across
/// networks; it resizes itself when handed a differently shaped one.
///
/// ```
/// use microneuron::{ Network, Backprop };
///
/// let mut net = Network::new([2, 3, 1]);
/// let mut backprop = Backprop::new(&net);
/// for _ in 0..100 {
///   backprop.step(&mut net, 0.5, &[0.0, 1.0], &[1.0]);
/// }
/// assert!(net.ignite(&[0.0, 1.0])[0] > 0.5);
/// ```

#[derive(Debug, Clone)]
pub struct Backprop<R: Real> {
  // Outputs of every layer, as written by Network::ignite_traced.
  // Activation i of the network is `input` for i == 0, else trace[i - 1].
  trace: Vec<Vec<R>>,
  // Error terms of the layer being processed. Both buffers are sized to the
  // widest layer; only the first `layer.len()` entries are meaningful.
  deltas: Vec<R>,
  // Error terms of the following layer, computed one iteration earlier
  next_deltas: Vec<R>,
}

impl<R: Real> Backprop<R> {
  pub fn new(network: &Network<R>) -> Self {
    let width = network.max_layer_size();
    Self {
      trace: network.trace_buffer(),
      deltas: vec![R::zero(); width],
      next_deltas: vec![R::zero(); width],
    }
  }

  fn fits(&self, network: &Network<R>) -> bool {
    self.trace.len() == network.num_layers() && self.deltas.len() >= network.max_layer_size()
  }

  /// Train `network` on a single sample.
  ///
  /// Runs a traced forward pass, then walks the layers from output to
  /// input computing each neuron's error term. A layer's weights move by
  /// `-eta * delta * input` as soon as the error terms of its predecessor
  /// have been derived from them. Thresholds see a constant input of -1.
  ///
  /// Panics if `input` or `target` don't match the network's shape.

  pub fn step(&mut self, network: &mut Network<R>, eta: R, input: &[R], target: &[R]) {
    network.check_target(target).unwrap_or_else(|err| panic!("{err}") );
    if !self.fits(network) { *self = Self::new(network) }

    network.record(input, &mut self.trace);
    trace!(eta = ?eta, error = ?squared_error(&self.trace[self.trace.len() - 1], target), "Backprop step");

    for i in (0..network.layers.len()).rev() {
      let outputs = &self.trace[i];

      match network.layers.get_mut(i + 1) {
        None => for (j, &o) in outputs.iter().enumerate() {
          self.deltas[j] = o * (R::one() - o) * (o - target[j]);
        },
        Some(next) => {
          let next_deltas = &self.next_deltas[..next.len()];
          for (j, &o) in outputs.iter().enumerate() {
            // Neuron k of the next layer stores its weight for neuron j at index j
            let blame: R = next.neurons.iter()
              .zip(next_deltas)
              .map(|(successor, &delta)| delta * successor.weights[j] )
              .sum();
            self.deltas[j] = o * (R::one() - o) * blame;
          }
          // Old weights of the next layer have been consumed
          next.nudge(eta, next_deltas, outputs);
        },
      }

      std::mem::swap(&mut self.deltas, &mut self.next_deltas);
    }

    // Activation record 0 is the raw input
    let first = &mut network.layers[0];
    let width = first.len();
    first.nudge(eta, &self.next_deltas[..width], input);
  }
}


impl<R: Real> Network<R> {
  /// Perform a single online training step.
  ///
  /// Convenience wrapper that allocates a fresh [Backprop] for every call.
  /// Keep a [Backprop] around when training in a loop.

  pub fn train(&mut self, eta: R, input: &[R], target: &[R]) {
    let mut backprop = Backprop::new(self);
    backprop.step(self, eta, input, target);
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use rand::{ SeedableRng, rngs::StdRng };
  use crate::network::Neuron;

  fn seeded(sizes: &[usize], seed: u64) -> Network {
    Network::from_rng(sizes, &mut StdRng::seed_from_u64(seed)).unwrap()
  }

  fn error_of(net: &Network, input: &[f64], target: &[f64]) -> f64 {
    squared_error(&net.ignite(input), target)
  }

  #[test]
  fn squared_error_sum() {
    assert_eq!(squared_error(&[1.0, 2.0], &[0.0, 4.0]), 5.0);
    assert_eq!(squared_error::<f64>(&[], &[]), 0.0);
  }

  #[test]
  fn error_decreases() {
    let mut net = seeded(&[2, 3, 2], 0);
    let input = [0.4, -1.2];
    let target = [0.9, 0.1];
    let mut backprop = Backprop::new(&net);
    let mut previous = error_of(&net, &input, &target);
    for _ in 0..200 {
      backprop.step(&mut net, 0.01, &input, &target);
      let error = error_of(&net, &input, &target);
      assert!(error < previous, "{error} >= {previous}");
      previous = error;
    }
  }

  #[test]
  fn train_matches_backprop() {
    let mut a = seeded(&[3, 4, 2, 1], 1);
    let mut b = a.clone();
    let mut backprop = Backprop::new(&b);
    for _ in 0..10 {
      a.train(0.3, &[0.1, 0.2, 0.3], &[0.8]);
      backprop.step(&mut b, 0.3, &[0.1, 0.2, 0.3], &[0.8]);
    }
    assert_eq!(a, b);
  }

  #[test]
  fn output_layer_update() {
    let mut net = seeded(&[2, 1], 2);
    net.layers[0].neurons[0] = Neuron { threshold: 0.0, weights: vec![0.0, 0.0] };
    net.train(1.0, &[1.0, -2.0], &[1.0]);
    // o = 0.5, delta = 0.5 * 0.5 * (0.5 - 1.0) = -0.125
    let neuron = &net.layers()[0].neurons()[0];
    assert_eq!(neuron.weights(), &[0.125, -0.25]);
    assert_eq!(neuron.threshold(), -0.125);
  }

  #[test]
  fn hidden_layer_update() {
    let mut net = seeded(&[1, 2, 1], 3);
    net.layers[0].neurons[0] = Neuron { threshold: 0.0, weights: vec![0.0] };
    net.layers[0].neurons[1] = Neuron { threshold: 0.0, weights: vec![0.0] };
    net.layers[1].neurons[0] = Neuron { threshold: 1.0, weights: vec![2.0, -2.0] };
    net.train(1.0, &[1.0], &[0.0]);

    // Hidden outputs are both 0.5, so the output neuron sees a sum of 0
    let o = crate::internal::sigmoid(-1.0);
    let delta_out = o * (1.0 - o) * o;
    let output = &net.layers()[1].neurons()[0];
    assert_eq!(output.weights(), &[2.0 - delta_out * 0.5, -2.0 - delta_out * 0.5]);
    assert_eq!(output.threshold(), 1.0 + delta_out);

    // Hidden error terms use the output neuron's weights before its update
    let hidden = net.layers()[0].neurons();
    assert_eq!(hidden[0].weights(), &[-(0.25 * delta_out * 2.0)]);
    assert_eq!(hidden[1].weights(), &[-(0.25 * delta_out * -2.0)]);
    assert_eq!(hidden[0].threshold(), 0.25 * delta_out * 2.0);
  }

  #[test]
  fn wide_then_narrow() {
    // A narrow layer after a wide one must not read stale error terms
    let mut net = seeded(&[2, 6, 1, 3], 4);
    let mut backprop = Backprop::new(&net);
    let mut previous = error_of(&net, &[0.5, 0.5], &[1.0, 0.0, 1.0]);
    for _ in 0..50 {
      backprop.step(&mut net, 0.02, &[0.5, 0.5], &[1.0, 0.0, 1.0]);
      let error = error_of(&net, &[0.5, 0.5], &[1.0, 0.0, 1.0]);
      assert!(error < previous);
      previous = error;
    }
  }

  #[test]
  fn backprop_refits() {
    let small = seeded(&[1, 1], 5);
    let mut large = seeded(&[2, 5, 2], 6);
    let mut reference = large.clone();
    let mut backprop = Backprop::new(&small);
    backprop.step(&mut large, 0.1, &[1.0, 0.0], &[0.0, 1.0]);
    reference.train(0.1, &[1.0, 0.0], &[0.0, 1.0]);
    assert_eq!(large, reference);
  }

  #[test]
  fn learns_mapping() {
    let mut net = seeded(&[1, 3, 1], 7);
    let mut backprop = Backprop::new(&net);
    for _ in 0..5000 {
      backprop.step(&mut net, 0.5, &[0.0], &[0.1]);
      backprop.step(&mut net, 0.5, &[1.0], &[0.9]);
    }
    assert!(net.ignite(&[0.0])[0] < 0.3);
    assert!(net.ignite(&[1.0])[0] > 0.7);
  }

  #[test]
  #[should_panic(expected = "targets must have 1 items, got 2")]
  fn wrong_target_size() {
    seeded(&[1, 2, 1], 8).train(0.1, &[1.0], &[1.0, 2.0]);
  }

  #[test]
  #[should_panic(expected = "inputs must have 1 items")]
  fn wrong_input_size() {
    seeded(&[1, 2, 1], 9).train(0.1, &[1.0, 2.0], &[1.0]);
  }
}
