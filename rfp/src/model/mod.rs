/// Training matrix and train/holdout splitting
pub mod dataset;

/// CART regression trees with bagging
pub mod forest;

/// Layout prediction on top of a trained model
pub mod predictor;

/// Standardization of the input features
pub mod scaler;

/// Fitting and persisting the geometry model
pub mod trainer;
