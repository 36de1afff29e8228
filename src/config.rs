use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for models in the crate.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ModelConfig {
    /// Seed for the model's random source. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(flatten)]
    pub model_type: ModelType,
}

/// Supported model types.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ModelType {
    /// Draws labels at random according to the training label frequencies.
    #[default]
    Stratified,
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stratified" => Ok(ModelType::Stratified),
            _ => Err(format!(
                "Unknown model type: {}. Supported model types: stratified",
                s
            )),
        }
    }
}

impl ModelConfig {
    pub fn new(seed: Option<u64>, model_type: ModelType) -> Self {
        Self { seed, model_type }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed), ModelType::default())
    }
}
