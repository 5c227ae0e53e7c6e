//! Basic usage of the reversed-reconstruction autoencoder.
//!
//! Builds a small model, runs a teacher-forced pass and an autoregressive
//! pass over the same batch, and prints the resulting shapes.

use burn::backend::NdArray;
use burn::tensor::Tensor;
use revae::prelude::*;

fn main() {
    env_logger::init();
    println!("=== revae basic example ===\n");

    type Backend = NdArray<f32>;
    let device = Default::default();

    // L = 100 timesteps, 2 features, latent width 64
    let model = SequenceAutoencoder::<Backend>::new(100, 2, 64, &device).with_dropout(0.2);

    println!("Created autoencoder:");
    println!("  Sequence length: {}", model.seq_len());
    println!("  Input features:  {}", model.input_size());
    println!("  Latent width:    {}", model.hidden_size());
    println!();

    // Input shape: [batch=4, seq=100, features=2]
    let batch = Tensor::<Backend, 3>::random(
        [4, 100, 2],
        burn::tensor::Distribution::Uniform(-1.0, 1.0),
        &device,
    );

    // Training-mode pass: the decoder is fed ground-truth values (teacher
    // forcing) and dropout masks are active.
    let recon = model
        .forward(batch.clone(), Mode::Training)
        .expect("shapes match the configuration");

    println!("Teacher-forced pass:");
    println!("  Input shape:  {:?}", batch.dims());
    println!("  Output shape: {:?}", recon.dims());
    println!();

    // Inference-mode pass: the decoder feeds its own previous output back in
    // and dropout is disabled.
    let recon = model
        .forward(batch.clone(), Mode::Inference)
        .expect("shapes match the configuration");

    println!("Autoregressive pass:");
    println!("  Output shape: {:?}", recon.dims());
    println!();

    // The terminal encoder state alone can be inspected as well.
    let (hidden, cell) = model.encode(batch, Mode::Inference).unwrap();
    println!("Latent state:");
    println!("  Hidden shape: {:?}", hidden.dims());
    println!("  Cell shape:   {:?}", cell.dims());
}
