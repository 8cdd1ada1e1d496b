use crate::config::RfpConfig;
use crate::model::trainer::HoldoutScores;
use serde::{Deserialize, Serialize};

/// Contents of the `report.json` written after training.
#[derive(Serialize, Deserialize, Clone)]
pub struct TrainingReport {
    pub config: RfpConfig,
    /// Number of synthetic layouts sampled
    pub n_layouts: usize,
    /// Number of rows in the training matrix (one per room)
    pub n_rows: usize,
    pub scores: HoldoutScores,
}
