/// A small trait abstraction for the pretrained classifier invoked by the
/// scorer. Centralizing the contract here keeps the pipeline independent of
/// the concrete model, so tests can substitute a stub with known output.
pub trait ChurnClassifier {
    /// Width of the feature vector the model was trained on.
    fn input_width(&self) -> usize;

    /// Single-example inference. Returns the churn probability in [0, 1].
    /// Callers are expected to pass a vector of `input_width()` scaled
    /// features; the bundle validates widths at load time.
    fn predict_proba(&self, features: &[f32]) -> f32;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
