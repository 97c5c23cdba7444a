//! churn-predictor: churn risk scoring for bank customers.
//!
//! This crate loads a pretrained feed-forward classifier and its fitted
//! preprocessing artifacts (label encoder, one-hot encoder, scaler) from
//! disk, assembles customer submissions into the training-time feature
//! schema, and produces a churn probability with a three-band risk label,
//! rule-based risk flags, a recommended action, and a CSV report row.
//!
//! The design keeps all process-wide state in an explicitly constructed
//! immutable [`artifacts::ArtifactBundle`] so the pipeline stays free of
//! hidden globals and is easy to test with substitute artifacts.
pub mod artifacts;
pub mod config;
pub mod encoding;
pub mod error;
pub mod explain;
pub mod features;
pub mod models;
pub mod preprocessing;
pub mod profile;
pub mod report;
pub mod risk;
pub mod scorer;
