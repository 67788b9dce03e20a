//! Loading `ModelParameters` from JSON.
//!
//! Missing fields fall back to `ModelParameters::default()`. Zero or negative
//! coefficients are accepted (the model clamps to zero effort); only values the
//! formulas cannot carry at all are rejected.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::model::ModelParameters;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("parameter `{field}` is not finite")]
    NonFinite { field: &'static str },
    #[error("share must lie in [0, 1], got {0}")]
    ShareOutOfRange(f64),
}

impl ModelParameters {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("production_coefficient", self.production_coefficient),
            ("cost_coefficient", self.cost_coefficient),
            ("share", self.share),
            ("altruism_factor", self.altruism_factor),
            ("loss_aversion_factor", self.loss_aversion_factor),
            ("endowment", self.endowment),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field: *field });
        }
        if !(0.0..=1.0).contains(&self.share) {
            return Err(ConfigError::ShareOutOfRange(self.share));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let params: ModelParameters = serde_json::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let params = Self::from_json_str(&fs::read_to_string(path)?)?;
        debug!(path = %path.display(), ?params, "loaded model parameters");
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
