#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// The process-wide allow-list of model names plus the default selection.
/// Built once at startup and shared read-only by every session.
pub struct ModelCatalog {
    models: Vec<String>,
    default_model: String,
}

impl ModelCatalog {
    pub fn new(models: Vec<String>, default_model: &str) -> Result<ModelCatalog> {
        if models.is_empty() {
            bail!("The model allow-list cannot be empty");
        }

        if !models.iter().any(|model| return model == default_model) {
            bail!(format!(
                "The default model {default_model} is not in the allow-list"
            ));
        }

        return Ok(ModelCatalog {
            models,
            default_model: default_model.to_string(),
        });
    }

    pub fn from_config() -> Result<ModelCatalog> {
        let models = Config::get(ConfigKey::Models)
            .split(',')
            .map(|model| return model.trim().to_string())
            .filter(|model| return !model.is_empty())
            .collect::<Vec<String>>();

        return ModelCatalog::new(models, &Config::get(ConfigKey::Model));
    }

    pub fn contains(&self, name: &str) -> bool {
        return self.models.iter().any(|model| return model == name);
    }

    pub fn models(&self) -> &[String] {
        return &self.models;
    }

    pub fn default_model(&self) -> &str {
        return &self.default_model;
    }
}
