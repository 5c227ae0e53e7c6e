use burn::module::Module;
use burn::nn::{Initializer, Linear, LinearConfig};
use burn::tensor::activation;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// Single-timestep LSTM transition, shared by the encoder and the decoder.
///
/// Implements the standard LSTM equations:
/// - g = tanh(W_ig @ x + b_ig + W_hg @ h)
/// - i = sigmoid(W_ii @ x + b_ii + W_hi @ h)
/// - f = sigmoid(W_if @ x + b_if + W_hf @ h + 1)
/// - o = sigmoid(W_io @ x + b_io + W_ho @ h)
/// - c' = f * c + i * g
/// - h' = o * tanh(c')
///
/// The `+ 1` on the forget gate biases it open at initialization so early
/// training does not erase the cell state.
#[derive(Module, Debug)]
pub struct LstmCell<B: Backend> {
    #[module(skip)]
    input_size: usize,
    #[module(skip)]
    hidden_size: usize,
    input_map: Linear<B>,     // Maps input to 4 * hidden_size (with bias)
    recurrent_map: Linear<B>, // Maps hidden state to 4 * hidden_size (no bias)
}

impl<B: Backend> LstmCell<B> {
    /// Create a new LSTM cell with default (Kaiming uniform) initialization.
    ///
    /// # Arguments
    /// * `input_size` - Width of the per-step input vector
    /// * `hidden_size` - Width of the hidden and cell states
    /// * `device` - Device to create the module on
    pub fn new(input_size: usize, hidden_size: usize, device: &B::Device) -> Self {
        let input_map = LinearConfig::new(input_size, 4 * hidden_size)
            .with_bias(true)
            .init(device);

        let recurrent_map = LinearConfig::new(hidden_size, 4 * hidden_size)
            .with_bias(false)
            .init(device);

        Self {
            input_size,
            hidden_size,
            input_map,
            recurrent_map,
        }
    }

    /// Reinitialize both weight maps with the given initializer.
    pub fn with_initializer(mut self, initializer: Initializer, device: &B::Device) -> Self {
        self.input_map = LinearConfig::new(self.input_size, 4 * self.hidden_size)
            .with_bias(true)
            .with_initializer(initializer.clone())
            .init(device);
        self.recurrent_map = LinearConfig::new(self.hidden_size, 4 * self.hidden_size)
            .with_bias(false)
            .with_initializer(initializer)
            .init(device);
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

    /// Perform one LSTM transition.
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape `[batch_size, input_size]`
    /// * `states` - Tuple of (hidden_state, cell_state), each of shape
    ///   `[batch_size, hidden_size]`
    ///
    /// # Returns
    /// Tuple of (new_hidden_state, new_cell_state)
    pub fn forward(
        &self,
        input: Tensor<B, 2>,
        states: (Tensor<B, 2>, Tensor<B, 2>),
    ) -> (Tensor<B, 2>, Tensor<B, 2>) {
        let (hidden_state, cell_state) = states;

        let input_contrib = self.input_map.forward(input);
        let recurrent_contrib = self.recurrent_map.forward(hidden_state);
        let gates = input_contrib + recurrent_contrib;

        let chunks = gates.chunk(4, 1);
        let candidate = chunks[0].clone().tanh();
        let input_gate = activation::sigmoid(chunks[1].clone());
        let forget_gate = activation::sigmoid(chunks[2].clone() + 1.0);
        let output_gate = activation::sigmoid(chunks[3].clone());

        let new_cell = cell_state * forget_gate + candidate * input_gate;
        let new_hidden = new_cell.clone().tanh() * output_gate;

        (new_hidden, new_cell)
    }
}
