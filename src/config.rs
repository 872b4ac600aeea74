use serde::{ Serialize, Deserialize };

use crate::error::{ NetworkError, Result };


/// Construction options for a [Network](crate::Network).
///
/// The first layer size is the dimensionality of the input vector, the last
/// one that of the output vector. Everything in between describes hidden
/// layers. Field names are PascalCase on the wire:
///
/// ```
/// let config: microneuron::NetworkConfig =
///   serde_json::from_str(r#"{ "LayerSizes": [1, 3, 1] }"#).unwrap();
/// assert_eq!(config.layer_sizes, vec![1, 3, 1]);
/// ```

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkConfig {
  pub layer_sizes: Vec<usize>,
}

impl NetworkConfig {
  pub fn new(layer_sizes: &[usize]) -> Self {
    Self { layer_sizes: layer_sizes.to_vec() }
  }

  pub fn validate(&self) -> Result<()> {
    if self.layer_sizes.len() < 2 {
      return Err(NetworkError::TooFewLayers(self.layer_sizes.len()))
    }
    match self.layer_sizes.iter().position(|&size| size == 0 ) {
      Some(index) => Err(NetworkError::EmptyLayer { index }),
      None => Ok(()),
    }
  }

  pub fn input_size(&self) -> usize {
    self.layer_sizes[0]
  }

  pub fn output_size(&self) -> usize {
    self.layer_sizes[self.layer_sizes.len() - 1]
  }
}

impl From<Vec<usize>> for NetworkConfig {
  fn from(layer_sizes: Vec<usize>) -> Self {
    Self { layer_sizes }
  }
}

impl From<&[usize]> for NetworkConfig {
  fn from(layer_sizes: &[usize]) -> Self {
    Self::new(layer_sizes)
  }
}

impl<const N: usize> From<[usize; N]> for NetworkConfig {
  fn from(layer_sizes: [usize; N]) -> Self {
    Self::new(&layer_sizes)
  }
}
