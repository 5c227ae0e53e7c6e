//! # Single-timestep cells
//!
//! Cells process one timestep at a time and are wrapped by the sequence-level
//! components in [`crate::rnn`].
//!
//! | Cell | Description |
//! |------|-------------|
//! | [`LstmCell`] | Bare LSTM transition (gates + candidate update) |
//! | [`DecoderCell`] | LSTM transition with call-scoped dropout masks |
//!
//! All cells expect 2D tensors:
//!
//! | Tensor | Shape |
//! |--------|-------|
//! | `input` | `[batch, input_size]` |
//! | `hidden_state` / `cell_state` | `[batch, hidden_size]` |

pub mod decoder_cell;
pub mod lstm_cell;

pub use decoder_cell::DecoderCell;
pub use lstm_cell::LstmCell;
