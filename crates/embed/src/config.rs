use serde::{Deserialize, Serialize};

use crate::EmbedError;

/// Runtime configuration for embedding providers.
///
/// The dimension is fixed per provider instance; every vector a provider
/// emits must have exactly this length. Normalization to unit length is
/// recommended when the vectors feed cosine-similarity ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedConfig {
    /// Output vector dimension.
    #[serde(default = "EmbedConfig::default_dimension")]
    pub dimension: usize,
    /// L2-normalize emitted vectors to unit length.
    #[serde(default = "EmbedConfig::default_normalize")]
    pub normalize: bool,
    /// Friendly label surfaced for observability; has no effect on output.
    #[serde(default = "EmbedConfig::default_model_name")]
    pub model_name: String,
}

impl EmbedConfig {
    pub(crate) fn default_dimension() -> usize {
        384
    }

    pub(crate) fn default_normalize() -> bool {
        true
    }

    pub(crate) fn default_model_name() -> String {
        "stub-embedder".to_string()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), EmbedError> {
        if self.dimension == 0 {
            return Err(EmbedError::InvalidConfig(
                "dimension must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            dimension: Self::default_dimension(),
            normalize: Self::default_normalize(),
            model_name: Self::default_model_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = EmbedConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.dimension, 384);
        assert!(cfg.normalize);
    }

    #[test]
    fn zero_dimension_rejected() {
        let cfg = EmbedConfig {
            dimension: 0,
            ..Default::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        assert!(err.to_string().contains("dimension"));
    }

    #[test]
    fn omitted_fields_fall_back_to_defaults() {
        let cfg: EmbedConfig = serde_json::from_str("{}").expect("parse");
        assert_eq!(cfg, EmbedConfig::default());
    }
}
