//! Reversed-reconstruction sequence autoencoder.

use crate::cells::DecoderCell;
use crate::error::{Result, RevaeError};
use crate::mode::Mode;
use crate::rnn::RecurrentEncoder;
use burn::module::Module;
use burn::nn::{Initializer, Linear, LinearConfig};
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use log::debug;

/// LSTM autoencoder that reconstructs a sequence in reverse temporal order.
///
/// The encoder compresses an input of shape `[batch, seq_len, input_size]`
/// into its terminal `(hidden, cell)` state. The decoder starts from that
/// state, emits the *last* timestep first, then walks backward to timestep
/// zero, feeding in the ground-truth value at `t + 1` during training and its
/// own previous output during inference. Generating the last output directly
/// from the encoder state gives the shortest encoder-to-target path and
/// improves gradient flow to remote timesteps.
///
/// The returned tensor is indexed in the original chronological order; the
/// reversal is computation order only.
#[derive(Module, Debug)]
pub struct SequenceAutoencoder<B: Backend> {
    encoder: RecurrentEncoder<B>,
    decoder: DecoderCell<B>,
    projection: Linear<B>,
    #[module(skip)]
    seq_len: usize,
    #[module(skip)]
    input_size: usize,
    #[module(skip)]
    output_size: usize,
    #[module(skip)]
    hidden_size: usize,
}

impl<B: Backend> SequenceAutoencoder<B> {
    /// Create a new autoencoder with `output_size = input_size` and dropout
    /// disabled.
    ///
    /// # Arguments
    /// * `seq_len` - Fixed reconstruction length `L`; every batch must carry
    ///   exactly this many timesteps
    /// * `input_size` - Number of input features per timestep
    /// * `hidden_size` - Width of the latent hidden and cell states
    /// * `device` - Device to create the module on
    ///
    /// # Panics
    /// Panics if `seq_len` is zero.
    pub fn new(
        seq_len: usize,
        input_size: usize,
        hidden_size: usize,
        device: &B::Device,
    ) -> Self {
        assert!(seq_len >= 1, "seq_len must be at least 1");

        Self {
            encoder: RecurrentEncoder::new(input_size, hidden_size, device),
            decoder: DecoderCell::new(input_size, hidden_size, device),
            projection: LinearConfig::new(hidden_size, input_size)
                .with_bias(true)
                .init(device),
            seq_len,
            input_size,
            output_size: input_size,
            hidden_size,
        }
    }

    /// Assemble an autoencoder from independently configured components.
    ///
    /// The decoder's input width must equal `output_size`, since inference
    /// feeds projected outputs back into it.
    pub fn from_parts(
        encoder: RecurrentEncoder<B>,
        decoder: DecoderCell<B>,
        projection: Linear<B>,
        seq_len: usize,
        output_size: usize,
    ) -> Self {
        assert!(seq_len >= 1, "seq_len must be at least 1");
        assert_eq!(
            decoder.input_size(),
            output_size,
            "decoder input width must match the output feature width"
        );
        assert_eq!(
            encoder.hidden_size(),
            decoder.hidden_size(),
            "encoder and decoder must share the latent width"
        );

        let input_size = encoder.input_size();
        let hidden_size = encoder.hidden_size();

        Self {
            encoder,
            decoder,
            projection,
            seq_len,
            input_size,
            output_size,
            hidden_size,
        }
    }

    /// Set the dropout probability for both the encoder and the decoder.
    ///
    /// # Panics
    /// Panics if `dropout` is outside `[0, 1)`.
    pub fn with_dropout(mut self, dropout: f64) -> Self {
        self.encoder = self.encoder.with_dropout(dropout);
        self.decoder = self.decoder.with_dropout(dropout);
        self
    }

    /// Set the output feature width and rebuild the projection and decoder
    /// cell accordingly.
    ///
    /// Training requires `output_size == input_size`, since teacher forcing
    /// feeds ground-truth input slices into the decoder.
    pub fn with_output_size(mut self, output_size: usize, device: &B::Device) -> Self {
        let dropout = self.decoder.dropout();
        self.decoder =
            DecoderCell::new(output_size, self.hidden_size, device).with_dropout(dropout);
        self.projection = LinearConfig::new(self.hidden_size, output_size)
            .with_bias(true)
            .init(device);
        self.output_size = output_size;
        self
    }

    /// Reinitialize every weight in the model with the given initializer.
    pub fn with_initializer(mut self, initializer: Initializer, device: &B::Device) -> Self {
        self.encoder = self.encoder.with_initializer(initializer.clone(), device);
        self.decoder = self.decoder.with_initializer(initializer.clone(), device);
        self.projection = LinearConfig::new(self.hidden_size, self.output_size)
            .with_bias(true)
            .with_initializer(initializer)
            .init(device);
        self
    }

    /// Get the reconstruction length
    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    /// Get the input feature width
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get the output feature width
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Get the latent width
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Encode a batch into its terminal `(hidden, cell)` state pair.
    pub fn encode(&self, input: Tensor<B, 3>, mode: Mode) -> Result<(Tensor<B, 2>, Tensor<B, 2>)> {
        self.encoder.forward(input, mode)
    }

    /// Reconstruct a batch of sequences.
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape `[batch, seq_len, input_size]`
    /// * `mode` - Training (teacher forcing, dropout active) or inference
    ///   (autoregressive feedback, dropout identity)
    ///
    /// # Returns
    /// Reconstruction of shape `[batch, seq_len, output_size]`, index-aligned
    /// with the input.
    ///
    /// # Errors
    /// [`RevaeError::ShapeMismatch`] if the batch dimensions disagree with the
    /// configured `seq_len`/`input_size`, or if teacher forcing is requested
    /// while `input_size != output_size`.
    pub fn forward(&self, input: Tensor<B, 3>, mode: Mode) -> Result<Tensor<B, 3>> {
        let [batch_size, seq_len, features] = input.dims();
        if seq_len != self.seq_len || features != self.input_size {
            return Err(RevaeError::ShapeMismatch {
                expected: format!("[batch, {}, {}]", self.seq_len, self.input_size),
                got: format!("[{}, {}, {}]", batch_size, seq_len, features),
            });
        }
        if mode.is_training() && self.input_size != self.output_size {
            return Err(RevaeError::ShapeMismatch {
                expected: format!("teacher-forced feed of width {}", self.decoder.input_size()),
                got: format!("ground-truth slices of width {}", self.input_size),
            });
        }

        debug!(
            "reconstructing batch of {} sequences of length {} ({:?})",
            batch_size, seq_len, mode
        );

        let device = input.device();

        // One mask pair per pass, fixed for all decode steps below.
        let masks = self.decoder.reset_masks(batch_size, mode, &device);

        let (mut hidden, mut cell) = self.encoder.forward(input.clone(), mode)?;

        // Outputs are written back to front; index t of `frames` is the true
        // timestep t.
        let mut frames: Vec<Tensor<B, 2>> =
            vec![Tensor::zeros([batch_size, self.output_size], &device); self.seq_len];
        frames[self.seq_len - 1] = self.projection.forward(hidden.clone());

        for t in (0..self.seq_len - 1).rev() {
            let feed = match mode {
                Mode::Training => input.clone().narrow(1, t + 1, 1).squeeze(1),
                Mode::Inference => frames[t + 1].clone(),
            };

            (hidden, cell) = self.decoder.step(feed, (hidden, cell), &masks);
            frames[t] = self.projection.forward(hidden.clone());
        }

        Ok(Tensor::stack(frames, 1))
    }
}
