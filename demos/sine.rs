// This demo trains a small network on samples of the sine function,
// one sample at a time, and periodically reports what it predicts
// at 0, π/2 and π.

// Sigmoid outputs live in (0, 1), so the negative half of the wave
// can only ever be approached from above.

use std::f64::consts::PI;

use clap::Parser;
use rand::{ SeedableRng, rngs::StdRng };
use tracing::info;
use tracing_subscriber::EnvFilter;

use microneuron::{ Network, NetworkConfig, Backprop, squared_error };

#[derive(Parser, Debug)]
#[command(about = "Fit a feedforward network to sin(x) on [0, 2π)")]
struct Args {
  /// Layer sizes, input first
  #[arg(long, value_delimiter = ',', default_value = "1,3,1")]
  layers: Vec<usize>,

  /// Learning rate
  #[arg(long, default_value_t = 0.1)]
  eta: f64,

  /// Passes over the 100 sample points
  #[arg(long, default_value_t = 100_000)]
  epochs: usize,

  /// Print predictions every this many epochs
  #[arg(long, default_value_t = 10_000)]
  report_every: usize,

  /// Seed for weight initialization, random if omitted
  #[arg(long)]
  seed: Option<u64>,
}

const SAMPLES: usize = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let args = Args::parse();
  let config = NetworkConfig::from(args.layers);

  // Build network from seed or entropy
  let mut net: Network = match args.seed {
    Some(seed) => Network::from_rng(config, &mut StdRng::seed_from_u64(seed))?,
    None => Network::try_new(config)?,
  };
  if net.input_size() != 1 || net.output_size() != 1 {
    return Err("the first and last layer sizes must both be 1".into())
  }

  let samples: Vec<(f64, f64)> = (0..SAMPLES)
    .map(|j| {
      let x = PI * 2.0 * j as f64 / SAMPLES as f64;
      (x, x.sin())
    })
    .collect();

  let mut backprop = Backprop::new(&net);
  for epoch in 0..=args.epochs {
    for &(x, y) in &samples {
      backprop.step(&mut net, args.eta, &[x], &[y]);
    }

    if epoch % args.report_every.max(1) == 0 {
      let error = samples.iter()
        .map(|&(x, y)| squared_error(&net.ignite(&[x]), &[y]) )
        .sum::<f64>() / SAMPLES as f64;
      let a = net.ignite(&[0.0])[0];
      let b = net.ignite(&[PI * 0.5])[0];
      let c = net.ignite(&[PI])[0];
      info!("train:{epoch:7} x={:.6}, {a:.6}; x={:.6}, {b:.6}; x={:.6}, {c:.6}; mse={error:.6}", 0.0, PI * 0.5, PI);
    }
  }

  Ok(())
}
