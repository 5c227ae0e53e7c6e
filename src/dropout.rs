//! Call-scoped dropout mask pair.
//!
//! A recurrent layer that applies dropout must use the *same* mask at every
//! timestep of one forward pass, then redraw it for the next pass. Holding
//! the masks as a plain value, drawn once at call start and passed into the
//! step loop, keeps that discipline explicit: there is no shared mutable
//! cache for two concurrent passes to corrupt.

use burn::tensor::backend::Backend;
use burn::tensor::{Distribution, Tensor};

/// A pair of inverted-dropout masks, fixed for the duration of one pass.
///
/// The input mask has shape `[batch, input_size]` and is applied to the
/// external input of each step; the recurrent mask has shape
/// `[batch, hidden_size]` and is applied to the previous hidden state.
/// Kept units are scaled by `1 / (1 - prob)` so the expected activation is
/// unchanged.
#[derive(Debug, Clone)]
pub struct DropoutMasks<B: Backend> {
    input: Option<Tensor<B, 2>>,
    recurrent: Option<Tensor<B, 2>>,
}

impl<B: Backend> DropoutMasks<B> {
    /// Masks that pass everything through unchanged.
    ///
    /// Used in inference mode and whenever the dropout probability is zero.
    pub fn identity() -> Self {
        Self {
            input: None,
            recurrent: None,
        }
    }

    /// Draw a fresh mask pair.
    ///
    /// # Arguments
    /// * `prob` - Dropout probability in `[0, 1)`; `0.0` yields identity masks
    /// * `batch_size` - Number of sequences in the batch
    /// * `input_size` - Width of the per-step external input
    /// * `hidden_size` - Width of the hidden state
    /// * `device` - Device to draw the masks on
    pub fn draw(
        prob: f64,
        batch_size: usize,
        input_size: usize,
        hidden_size: usize,
        device: &B::Device,
    ) -> Self {
        assert!(
            (0.0..1.0).contains(&prob),
            "dropout probability must be in [0, 1), got {}",
            prob
        );
        if prob == 0.0 {
            return Self::identity();
        }

        let keep = 1.0 - prob;
        let scale = (1.0 / keep) as f32;

        let input = Tensor::<B, 2>::random(
            [batch_size, input_size],
            Distribution::Bernoulli(keep),
            device,
        ) * scale;
        let recurrent = Tensor::<B, 2>::random(
            [batch_size, hidden_size],
            Distribution::Bernoulli(keep),
            device,
        ) * scale;

        Self {
            input: Some(input),
            recurrent: Some(recurrent),
        }
    }

    /// Whether these masks pass activations through unchanged.
    pub fn is_identity(&self) -> bool {
        self.input.is_none()
    }

    /// Apply the input mask to a `[batch, input_size]` tensor.
    pub fn apply_input(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        match &self.input {
            Some(mask) => input * mask.clone(),
            None => input,
        }
    }

    /// Apply the recurrent mask to a `[batch, hidden_size]` tensor.
    pub fn apply_recurrent(&self, hidden: Tensor<B, 2>) -> Tensor<B, 2> {
        match &self.recurrent {
            Some(mask) => hidden * mask.clone(),
            None => hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_identity_masks_pass_through() {
        let device = Default::default();
        let masks = DropoutMasks::<TestBackend>::identity();
        assert!(masks.is_identity());

        let x = Tensor::<TestBackend, 2>::ones([2, 4], &device);
        let y = masks.apply_input(x.clone());

        let diff = (y - x).abs().sum().into_scalar();
        assert_eq!(diff, 0.0);
    }

    #[test]
    fn test_zero_prob_is_identity() {
        let device = Default::default();
        let masks = DropoutMasks::<TestBackend>::draw(0.0, 2, 4, 8, &device);
        assert!(masks.is_identity());
    }

    #[test]
    fn test_mask_values_are_zero_or_scaled() {
        let device = Default::default();
        let masks = DropoutMasks::<TestBackend>::draw(0.5, 1, 64, 64, &device);

        let x = Tensor::<TestBackend, 2>::ones([1, 64], &device);
        let y = masks.apply_input(x);

        // With p = 0.5 every kept unit is scaled by 2.0.
        for i in 0..64 {
            let v = y.clone().slice([0..1, i..i + 1]).into_scalar();
            assert!(
                v == 0.0 || (v - 2.0).abs() < 1e-6,
                "unexpected mask value {}",
                v
            );
        }
    }

    #[test]
    fn test_mask_fixed_across_applications() {
        let device = Default::default();
        let masks = DropoutMasks::<TestBackend>::draw(0.5, 2, 32, 16, &device);

        let x = Tensor::<TestBackend, 2>::ones([2, 32], &device);
        let first = masks.apply_input(x.clone());
        let second = masks.apply_input(x);

        let diff = (first - second).abs().sum().into_scalar();
        assert_eq!(diff, 0.0, "one mask pair must act identically at every step");
    }

    #[test]
    fn test_independent_draws_differ() {
        let device = Default::default();
        let x = Tensor::<TestBackend, 2>::ones([4, 256], &device);

        let a = DropoutMasks::<TestBackend>::draw(0.5, 4, 256, 16, &device).apply_input(x.clone());
        let b = DropoutMasks::<TestBackend>::draw(0.5, 4, 256, 16, &device).apply_input(x);

        // 1024 Bernoulli(0.5) units agreeing across two draws is vanishingly
        // unlikely.
        let diff = (a - b).abs().sum().into_scalar();
        assert!(diff > 0.0, "two draws should produce different supports");
    }

    #[test]
    #[should_panic]
    fn test_invalid_probability() {
        let device: <TestBackend as burn::tensor::backend::Backend>::Device = Default::default();
        let _ = DropoutMasks::<TestBackend>::draw(1.0, 1, 4, 4, &device);
    }
}
