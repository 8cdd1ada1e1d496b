use crate::model::forest::ForestConfig;
use crate::synth::SynthConfig;
use roomgen::io::svg::SvgDrawOptions;
use roomgen::repair::RepairConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the random forest floor plan pipeline
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct RfpConfig {
    /// Seed for the PRNG. If undefined, the pipeline will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Configuration of the synthetic layout sampler
    pub synth: SynthConfig,
    /// Forest hyperparameters, shared by all four coordinate targets
    pub forest: ForestConfig,
    /// Fraction of training rows withheld to score the forests
    pub holdout_frac: f64,
    /// Configuration of the layout repair engine
    pub repair: RepairConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for RfpConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(42),
            synth: SynthConfig::default(),
            forest: ForestConfig::default(),
            holdout_frac: 0.2,
            repair: RepairConfig::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
