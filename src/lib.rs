//! Fully connected feedforward networks with sigmoid activations,
//! trained one sample at a time by backpropagation.
//! Tiny. Few dependencies. CPU only.
//!
//! # Features
//!
//! - **Configurable topology** — Any number of layers of any width, described
//! by a list of layer sizes. The first size is the input dimensionality,
//! the last one the output dimensionality.
//!
//! - **Online training** — Every call to [Network::train] runs a forward pass,
//! propagates error terms from the output layer back to the first hidden layer
//! and updates all weights and thresholds in place.
//!
//! - **Allocation-free training loops** — A [Backprop] keeps the activation
//! trace and error term buffers around between steps.
//!
//! - **Reproducible** — Networks may be initialized from any [rand::Rng],
//! so seeded generators yield bit-identical networks and outputs.
//!
//! # Examples
//!
//! Learning a small mapping:
//! ```
//! use microneuron::{ Network, Backprop };
//!
//! let mut net = Network::new([1, 3, 1]);
//! let mut backprop = Backprop::new(&net);
//!
//! for _ in 0..2000 {
//!   backprop.step(&mut net, 0.5, &[0.0], &[0.2]);
//!   backprop.step(&mut net, 0.5, &[1.0], &[0.8]);
//! }
//!
//! let low = net.ignite(&[0.0])[0];
//! let high = net.ignite(&[1.0])[0];
//! assert!(low < high);
//! ```
//!
//! Recording intermediate activations:
//! ```
//! use microneuron::Network;
//!
//! let net: Network = Network::new([2, 4, 1]);
//! let mut trace = net.trace_buffer();
//! let output = net.ignite_traced(&[0.5, -0.5], &mut trace);
//!
//! assert_eq!(trace[0].len(), 4);
//! assert_eq!(trace[1], output);
//! ```
//!
//! ## More examples
//! Check the `/demos` folder for a network learning the sine function.

mod internal;
mod error;
mod config;
mod network;
mod train;

pub mod scalar;

pub use error::{ NetworkError, Result };
pub use config::NetworkConfig;
pub use network::{ Network, Layer, Neuron };
pub use train::{ Backprop, squared_error };
