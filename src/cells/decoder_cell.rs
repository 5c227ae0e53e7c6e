//! Decoder cell with call-scoped dropout masks.

use crate::cells::LstmCell;
use crate::dropout::DropoutMasks;
use crate::mode::Mode;
use burn::module::Module;
use burn::nn::Initializer;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// LSTM decoder cell whose dropout masks are fixed per forward pass.
///
/// The cell itself is stateless across calls. Callers draw a fresh mask pair
/// with [`reset_masks`](DecoderCell::reset_masks) exactly once at the start
/// of every pass, then thread that value through every
/// [`step`](DecoderCell::step) of the pass. Two concurrent passes therefore
/// never share mask state: each holds its own [`DropoutMasks`] value.
#[derive(Module, Debug)]
pub struct DecoderCell<B: Backend> {
    cell: LstmCell<B>,
    #[module(skip)]
    dropout: f64,
}

impl<B: Backend> DecoderCell<B> {
    /// Create a new decoder cell with dropout disabled.
    ///
    /// # Arguments
    /// * `input_size` - Width of the fed-back vector (the output feature width)
    /// * `hidden_size` - Width of the hidden and cell states
    /// * `device` - Device to create the module on
    pub fn new(input_size: usize, hidden_size: usize, device: &B::Device) -> Self {
        Self {
            cell: LstmCell::new(input_size, hidden_size, device),
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
        self.cell.input_size()
    }

    /// Get the hidden size
    pub fn hidden_size(&self) -> usize {
        self.cell.hidden_size()
    }

    /// Get the dropout probability
    pub fn dropout(&self) -> f64 {
        self.dropout
    }

    /// Draw the mask pair for one forward pass.
    ///
    /// Must be called exactly once per pass, before the first step. The
    /// returned value holds one input mask and one recurrent mask, both kept
    /// fixed for every subsequent step of that pass. In inference mode (or
    /// with zero dropout) the masks are identity.
    pub fn reset_masks(
        &self,
        batch_size: usize,
        mode: Mode,
        device: &B::Device,
    ) -> DropoutMasks<B> {
        if mode.is_training() {
            DropoutMasks::draw(
                self.dropout,
                batch_size,
                self.cell.input_size(),
                self.cell.hidden_size(),
                device,
            )
        } else {
            DropoutMasks::identity()
        }
    }

    /// Perform one decode step.
    ///
    /// Applies the cached input mask to `input` and the cached recurrent mask
    /// to the previous hidden state, then runs the LSTM transition.
    ///
    /// # Arguments
    /// * `input` - Fed-back vector of shape `[batch_size, input_size]`
    /// * `states` - Tuple of (hidden_state, cell_state), each `[batch_size, hidden_size]`
    /// * `masks` - The mask pair drawn at the start of this pass
    ///
    /// # Returns
    /// Tuple of (new_hidden_state, new_cell_state)
    pub fn step(
        &self,
        input: Tensor<B, 2>,
        states: (Tensor<B, 2>, Tensor<B, 2>),
        masks: &DropoutMasks<B>,
    ) -> (Tensor<B, 2>, Tensor<B, 2>) {
        let (hidden_state, cell_state) = states;
        let input = masks.apply_input(input);
        let hidden_state = masks.apply_recurrent(hidden_state);
        self.cell.forward(input, (hidden_state, cell_state))
    }
}
