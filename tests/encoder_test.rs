#[cfg(test)]
mod tests {
    use burn::backend::NdArray;
    use burn::tensor::Tensor;
    use revae::prelude::*;

    type Backend = NdArray<f32>;

    #[test]
    fn test_encoder_terminal_state_shapes() {
        let device = Default::default();
        let encoder = RecurrentEncoder::<Backend>::new(2, 64, &device);

        for batch_size in [1, 4, 16] {
            let input = Tensor::<Backend, 3>::zeros([batch_size, 10, 2], &device);
            let (hidden, cell) = encoder.forward(input, Mode::Inference).unwrap();

            assert_eq!(hidden.dims(), [batch_size, 64]);
            assert_eq!(cell.dims(), [batch_size, 64]);
        }
    }

    #[test]
    fn test_encoder_rejects_wrong_feature_width() {
        let device = Default::default();
        let encoder = RecurrentEncoder::<Backend>::new(2, 16, &device);

        let input = Tensor::<Backend, 3>::zeros([4, 10, 5], &device);
        assert!(matches!(
            encoder.forward(input, Mode::Training),
            Err(RevaeError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_encoder_deterministic_without_dropout() {
        let device = Default::default();
        let encoder = RecurrentEncoder::<Backend>::new(2, 16, &device);

        let input = Tensor::<Backend, 3>::random(
            [2, 10, 2],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        );

        let (h1, c1) = encoder.forward(input.clone(), Mode::Training).unwrap();
        let (h2, c2) = encoder.forward(input, Mode::Training).unwrap();

        let diff = (h1 - h2).abs().sum().into_scalar() + (c1 - c2).abs().sum().into_scalar();
        assert_eq!(diff, 0.0);
    }

    #[test]
    fn test_encoder_dropout_varies_across_training_calls() {
        let device = Default::default();
        let encoder = RecurrentEncoder::<Backend>::new(2, 64, &device).with_dropout(0.5);

        let input = Tensor::<Backend, 3>::random(
            [2, 10, 2],
            burn::tensor::Distribution::Uniform(-1.0, 1.0),
            &device,
        );

        let (h1, _) = encoder.forward(input.clone(), Mode::Training).unwrap();
        let (h2, _) = encoder.forward(input.clone(), Mode::Training).unwrap();
        let diff = (h1 - h2).abs().sum().into_scalar();
        assert!(diff > 0.0, "training masks are redrawn per call");

        let (h1, _) = encoder.forward(input.clone(), Mode::Inference).unwrap();
        let (h2, _) = encoder.forward(input, Mode::Inference).unwrap();
        let diff = (h1 - h2).abs().sum().into_scalar();
        assert_eq!(diff, 0.0, "inference ignores dropout");
    }

    #[test]
    fn test_encoder_consumes_the_whole_sequence() {
        let device = Default::default();
        let encoder = RecurrentEncoder::<Backend>::new(2, 16, &device);

        let base = Tensor::<Backend, 3>::from_floats(
            [[[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]],
            &device,
        );
        let perturbed = Tensor::<Backend, 3>::from_floats(
            [[[9.0, 9.0], [2.0, 2.0], [3.0, 3.0]]],
            &device,
        );

        let (h1, _) = encoder.forward(base, Mode::Inference).unwrap();
        let (h2, _) = encoder.forward(perturbed, Mode::Inference).unwrap();

        let diff = (h1 - h2).abs().sum().into_scalar();
        assert!(diff > 0.0, "early timesteps reach the terminal state");
    }
}
