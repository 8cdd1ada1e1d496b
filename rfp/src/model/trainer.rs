use crate::config::RfpConfig;
use crate::model::dataset::{Dataset, Split, TARGET_NAMES, select_elems, select_rows};
use crate::model::forest::{RandomForest, r2_score};
use crate::model::scaler::StandardScaler;
use anyhow::{Context, Result};
use log::info;
use rand::Rng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thousands::Separable;

/// A trained geometry model: the scaler that standardized the training features
/// plus one forest per coordinate target.
#[derive(Serialize, Deserialize, Clone)]
pub struct GeometryModel {
    pub scaler: StandardScaler,
    pub forest_x: RandomForest,
    pub forest_y: RandomForest,
    pub forest_w: RandomForest,
    pub forest_h: RandomForest,
}

impl GeometryModel {
    /// The four forests in target order (x, y, width, height).
    pub fn forests(&self) -> [&RandomForest; 4] {
        [&self.forest_x, &self.forest_y, &self.forest_w, &self.forest_h]
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("could not create model file: {}", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), self).context("could not serialize model")?;
        info!("[TRAIN] model written to {}", path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("could not open model file: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file)).context("incorrect model file format")
    }
}

/// Holdout R² per coordinate target.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct HoldoutScores {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Fits the scaler and the four forests on `dataset`.
///
/// All targets share one scaled feature matrix and one train/holdout split, so
/// their holdout scores are directly comparable. Each forest gets its own base
/// seed drawn from `rng`, keeping the whole fit deterministic for a seeded RNG.
pub fn train(dataset: &Dataset, config: &RfpConfig, rng: &mut SmallRng) -> (GeometryModel, HoldoutScores) {
    let (scaler, scaled) = StandardScaler::fit_transform(&dataset.features);
    let split = Split::new(dataset.n_rows(), config.holdout_frac, rng);
    info!(
        "[TRAIN] fitting {} forests of {} trees on {} rows ({} holdout)",
        TARGET_NAMES.len(),
        config.forest.n_trees,
        split.train.len().separate_with_commas(),
        split.holdout.len().separate_with_commas()
    );

    let train_features = select_rows(&scaled, &split.train);
    let holdout_features = select_rows(&scaled, &split.holdout);

    let mut fit_target = |target: usize| {
        let column = dataset.target_column(target);
        let train_targets = select_elems(&column, &split.train);
        let holdout_targets = select_elems(&column, &split.holdout);
        let forest = RandomForest::fit(
            &train_features,
            &train_targets,
            &config.forest,
            rng.random(),
        );
        let predicted = forest.predict(&holdout_features);
        let score = r2_score(holdout_targets.view(), predicted.view());
        info!(
            "[TRAIN] target {}: holdout R² = {:.3}",
            TARGET_NAMES[target], score
        );
        (forest, score)
    };

    let (forest_x, score_x) = fit_target(0);
    let (forest_y, score_y) = fit_target(1);
    let (forest_w, score_w) = fit_target(2);
    let (forest_h, score_h) = fit_target(3);

    let model = GeometryModel {
        scaler,
        forest_x,
        forest_y,
        forest_w,
        forest_h,
    };
    let scores = HoldoutScores {
        x: score_x,
        y: score_y,
        width: score_w,
        height: score_h,
    };
    (model, scores)
}
