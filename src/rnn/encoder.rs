//! Sequence encoder.

use crate::cells::LstmCell;
use crate::dropout::DropoutMasks;
use crate::error::{Result, RevaeError};
use crate::mode::Mode;
use burn::module::Module;
use burn::nn::Initializer;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use log::debug;

/// LSTM encoder that compresses a sequence into its terminal state.
///
/// Processes the input forward in time (index `0` to `L - 1`) and exposes
/// only the final `(hidden, cell)` pair; per-timestep outputs are discarded.
/// In training mode a dropout mask is applied to every step input and a
/// recurrent mask to every state transition, both drawn once per call and
/// fixed across timesteps.
#[derive(Module, Debug)]
pub struct RecurrentEncoder<B: Backend> {
    cell: LstmCell<B>,
    #[module(skip)]
    input_size: usize,
    #[module(skip)]
    hidden_size: usize,
    #[module(skip)]
    dropout: f64,
}

impl<B: Backend> RecurrentEncoder<B> {
    /// Create a new encoder with dropout disabled.
    ///
    /// # Arguments
    /// * `input_size` - Number of input features per timestep
    /// * `hidden_size` - Width of the hidden and cell states
    /// * `device` - Device to create the module on
    pub fn new(input_size: usize, hidden_size: usize, device: &B::Device) -> Self {
        Self {
            cell: LstmCell::new(input_size, hidden_size, device),
            input_size,
            hidden_size,
            dropout: 0.0,
        }
    }

    /// Set the dropout probability, applied in training mode only.
    ///
    /// # Panics
    /// Panics if `dropout` is outside `[0, 1)`.
    pub fn with_dropout(mut self, dropout: f64) -> Self {
        assert!(
            (0.0..1.0).contains(&dropout),
            "dropout probability must be in [0, 1), got {}",
            dropout
        );
        self.dropout = dropout;
        self
    }

    /// Reinitialize the cell weights with the given initializer.
    pub fn with_initializer(mut self, initializer: Initializer, device: &B::Device) -> Self {
        self.cell = self.cell.with_initializer(initializer, device);
        self
    }

    /// Get the input size
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get the hidden size
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Get the dropout probability
    pub fn dropout(&self) -> f64 {
        self.dropout
    }

    /// Encode a batch of sequences into terminal states.
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape `[batch, seq_len, input_size]`
    /// * `mode` - Training (dropout active) or inference (dropout identity)
    ///
    /// # Returns
    /// Tuple of (final_hidden, final_cell), each of shape `[batch, hidden_size]`
    ///
    /// # Errors
    /// [`RevaeError::ShapeMismatch`] if the feature axis does not match the
    /// configured input size.
    pub fn forward(
        &self,
        input: Tensor<B, 3>,
        mode: Mode,
    ) -> Result<(Tensor<B, 2>, Tensor<B, 2>)> {
        let [batch_size, seq_len, features] = input.dims();
        if features != self.input_size {
            return Err(RevaeError::ShapeMismatch {
                expected: format!("[batch, seq, {}]", self.input_size),
                got: format!("[{}, {}, {}]", batch_size, seq_len, features),
            });
        }

        debug!(
            "encoding batch of {} sequences of length {} ({:?})",
            batch_size, seq_len, mode
        );

        let device = input.device();
        let masks = if mode.is_training() {
            DropoutMasks::draw(
                self.dropout,
                batch_size,
                self.input_size,
                self.hidden_size,
                &device,
            )
        } else {
            DropoutMasks::identity()
        };

        let mut hidden = Tensor::<B, 2>::zeros([batch_size, self.hidden_size], &device);
        let mut cell = Tensor::<B, 2>::zeros([batch_size, self.hidden_size], &device);

        for t in 0..seq_len {
            let step_input = input.clone().narrow(1, t, 1).squeeze(1);
            let step_input = masks.apply_input(step_input);
            let masked_hidden = masks.apply_recurrent(hidden);
            (hidden, cell) = self.cell.forward(step_input, (masked_hidden, cell));
        }

        Ok((hidden, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_encoder_creation() {
        let device = Default::default();
        let encoder = RecurrentEncoder::<TestBackend>::new(2, 64, &device).with_dropout(0.1);

        assert_eq!(encoder.input_size(), 2);
        assert_eq!(encoder.hidden_size(), 64);
        assert_eq!(encoder.dropout(), 0.1);
    }

    #[test]
    fn test_encoder_state_shapes() {
        let device = Default::default();
        let encoder = RecurrentEncoder::<TestBackend>::new(2, 64, &device);

        let input = Tensor::<TestBackend, 3>::zeros([4, 10, 2], &device);
        let (hidden, cell) = encoder.forward(input, Mode::Inference).unwrap();

        assert_eq!(hidden.dims(), [4, 64]);
        assert_eq!(cell.dims(), [4, 64]);
    }

    #[test]
    fn test_encoder_feature_mismatch() {
        let device = Default::default();
        let encoder = RecurrentEncoder::<TestBackend>::new(2, 16, &device);

        let input = Tensor::<TestBackend, 3>::zeros([4, 10, 3], &device);
        let result = encoder.forward(input, Mode::Inference);

        assert!(matches!(result, Err(RevaeError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_encoder_inference_ignores_dropout() {
        let device = Default::default();
        let encoder = RecurrentEncoder::<TestBackend>::new(2, 16, &device).with_dropout(0.9);

        let input = Tensor::<TestBackend, 3>::random(
            [2, 8, 2],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        );

        let (h1, _) = encoder.forward(input.clone(), Mode::Inference).unwrap();
        let (h2, _) = encoder.forward(input, Mode::Inference).unwrap();

        let diff = (h1 - h2).abs().sum().into_scalar();
        assert_eq!(diff, 0.0, "inference must be deterministic despite dropout");
    }
}
