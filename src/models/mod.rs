pub mod classifier_trait;
pub mod mlp;

pub use classifier_trait::ChurnClassifier;
pub use mlp::MlpClassifier;
