use rand::Rng;
use itertools::Itertools;

use crate::{
  scalar::Real,
};


// Upper bound (exclusive) of initial weights and thresholds
const INIT_SCALE: f64 = 1.0 / 1000.0;


/// Logistic function. Saturates to exactly 0 or 1 for large |z|.

#[inline]
pub fn sigmoid<R: Real>(z: R) -> R {
  R::one() / (R::one() + (-z).exp())
}


#[inline]
pub fn dot<R: Real>(weights: &[R], inputs: &[R]) -> R {
  weights.iter()
    .zip_eq(inputs)
    .map(|(&w, &x)| w * x )
    .sum()
}


// Uniform draw from [0, 1/1000)

pub fn small_random<R: Real>(rng: &mut impl Rng) -> R {
  rng.gen_range(R::zero(), R::from(INIT_SCALE).unwrap())
}


#[cfg(test)]
mod tests {
  use super::*;
  use rand::{ SeedableRng, rngs::StdRng };

  #[test]
  fn sigmoid_midpoint() {
    assert_eq!(sigmoid(0.0), 0.5);
    assert!(sigmoid(2.0) > 0.5 && sigmoid(2.0) < 1.0);
    assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0f64).abs() < 1e-12);
  }

  #[test]
  fn sigmoid_saturates() {
    assert_eq!(sigmoid(-1000.0f64), 0.0);
    assert_eq!(sigmoid(1000.0f64), 1.0);
    assert!(!sigmoid(-1000.0f64).is_nan());
  }

  #[test]
  fn dot_product() {
    assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
    assert_eq!(dot::<f64>(&[], &[]), 0.0);
  }

  #[test]
  #[should_panic]
  fn dot_length_mismatch() {
    dot(&[1.0, 2.0], &[1.0]);
  }

  #[test]
  fn small_random_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
      let x: f64 = small_random(&mut rng);
      assert!(x >= 0.0 && x < 0.001);
    }
  }
}
