//! # Sequence-level components
//!
//! These wrap the single-timestep cells in [`crate::cells`] with sequence
//! processing, batching, and state management. **[`SequenceAutoencoder`] is
//! the primary API most users should use.**
//!
//! ## Tensor shapes
//!
//! | Tensor | Shape |
//! |--------|-------|
//! | Input batch | `[batch, seq_len, input_size]` |
//! | Hidden / cell state | `[batch, hidden_size]` |
//! | Reconstruction | `[batch, seq_len, output_size]` |
//!
//! ## Quick start
//!
//! ```ignore
//! use revae::prelude::*;
//! use burn::tensor::Tensor;
//!
//! let model = SequenceAutoencoder::<Backend>::new(100, 2, 64, &device)
//!     .with_dropout(0.2);
//!
//! // Teacher-forced pass (training): decoder consumes ground truth.
//! let recon = model.forward(batch.clone(), Mode::Training)?;
//!
//! // Autoregressive pass (inference): decoder consumes its own outputs.
//! let recon = model.forward(batch, Mode::Inference)?;
//! ```
//!
//! ## Why reconstruct backward?
//!
//! The decoder emits timestep `L - 1` first, directly from the encoder's
//! terminal state, then walks down to timestep `0`. The terminal state is
//! temporally closest to the last input, so the last output gets the shortest
//! encoder-to-target path. The returned tensor is nevertheless indexed in
//! original chronological order.

pub mod autoencoder;
pub mod encoder;

pub use autoencoder::SequenceAutoencoder;
pub use encoder::RecurrentEncoder;
