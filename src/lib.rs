//! # revae - Reversed-reconstruction LSTM autoencoder (Rust)
//!
//! Sequence-to-sequence recurrent autoencoder for fixed-length multivariate
//! time series, built on the Burn framework.
//!
//! ## Features
//!
//! - **SequenceAutoencoder**: encode once, decode backward through time
//! - **Teacher forcing / autoregressive feedback**: selected per call via [`Mode`]
//! - **Call-scoped dropout**: one mask pair per forward pass, fixed across
//!   all decode steps, redrawn every call
//! - **Fail-fast shape checks**: mismatched batch dimensions abort the call
//!   with no partial output
//!
//! ## Quick Start
//!
//! ```rust
//! use burn::backend::NdArray;
//! use burn::tensor::Tensor;
//! use revae::prelude::*;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! // L = 8 timesteps, 2 features, latent width 16
//! let model = SequenceAutoencoder::<Backend>::new(8, 2, 16, &device);
//!
//! let batch = Tensor::<Backend, 3>::zeros([4, 8, 2], &device);
//! let recon = model.forward(batch, Mode::Inference).unwrap();
//!
//! assert_eq!(recon.dims(), [4, 8, 2]);
//! ```

pub mod cells;
pub mod dropout;
pub mod error;
pub mod mode;
pub mod rnn;

pub mod prelude {
    pub use crate::cells::{DecoderCell, LstmCell};
    pub use crate::dropout::DropoutMasks;
    pub use crate::error::{Result, RevaeError};
    pub use crate::mode::Mode;
    pub use crate::rnn::{RecurrentEncoder, SequenceAutoencoder};
}
