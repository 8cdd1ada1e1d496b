use crate::model::dataset::N_SCALED_FEATURES;
use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

/// Standardizes the leading [`N_SCALED_FEATURES`] feature columns to zero mean and
/// unit variance; the remaining columns pass through untouched.
///
/// The standard deviation is the population one (ddof = 0). Columns with zero
/// spread are left unscaled rather than blowing up to infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: [f64; N_SCALED_FEATURES],
    pub std: [f64; N_SCALED_FEATURES],
}

impl StandardScaler {
    pub fn fit(features: &Array2<f64>) -> Self {
        let mut mean = [0.0; N_SCALED_FEATURES];
        let mut std = [1.0; N_SCALED_FEATURES];
        for c in 0..N_SCALED_FEATURES {
            let column = features.column(c);
            mean[c] = column.mean().unwrap_or(0.0);
            let spread = column.std(0.0);
            if spread > 0.0 {
                std[c] = spread;
            }
        }
        StandardScaler { mean, std }
    }

    pub fn transform(&self, features: &Array2<f64>) -> Array2<f64> {
        let mut scaled = features.clone();
        for (c, mut column) in scaled
            .axis_iter_mut(Axis(1))
            .take(N_SCALED_FEATURES)
            .enumerate()
        {
            column.mapv_inplace(|v| (v - self.mean[c]) / self.std[c]);
        }
        scaled
    }

    pub fn fit_transform(features: &Array2<f64>) -> (Self, Array2<f64>) {
        let scaler = Self::fit(features);
        let scaled = scaler.transform(features);
        (scaler, scaled)
    }
}
