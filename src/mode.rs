//! Forward-pass execution mode.

/// Selects how one forward pass runs.
///
/// The mode is chosen once per call and held constant for every timestep of
/// that call. It controls two things:
///
/// - **Decoder feed**: `Training` feeds the ground-truth input at `t + 1`
///   (teacher forcing); `Inference` feeds the model's own previous output
///   (autoregressive feedback).
/// - **Dropout**: masks are drawn and applied only in `Training`; in
///   `Inference` they act as identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Mode {
    /// Teacher-forced execution with dropout active.
    Training,
    /// Autoregressive execution with dropout disabled.
    Inference,
}

impl Mode {
    /// Whether dropout masks should be drawn and applied.
    pub fn is_training(self) -> bool {
        matches!(self, Mode::Training)
    }
}
