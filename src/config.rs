use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{Decimal, ProvinceCode};

const DEFAULT_PREVIEW_WEIGHTS: &str = "0.5,1,3,5,10,20";

/// Settings of the preview binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file holding `{template_type, template_data}`.
    pub document_path: PathBuf,
    /// CSV province catalog; the built-in catalog when unset.
    pub province_catalog_path: Option<PathBuf>,
    pub preview_weights: Vec<Decimal>,
    /// Provinces to resolve; every catalog province when empty.
    pub preview_provinces: Vec<ProvinceCode>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let document_path = env_map
            .get("QUOTE_DOCUMENT_PATH")
            .map(PathBuf::from)
            .ok_or_else(|| ConfigError::MissingEnv("QUOTE_DOCUMENT_PATH".to_string()))?;

        let province_catalog_path = env_map
            .get("PROVINCE_CATALOG_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let preview_weights = parse_weights(
            env_map
                .get("PREVIEW_WEIGHTS")
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_PREVIEW_WEIGHTS),
        )?;

        let preview_provinces: Vec<ProvinceCode> = env_map
            .get("PREVIEW_PROVINCES")
            .map(|s| {
                s.split(',')
                    .map(|code| code.trim())
                    .filter(|code| !code.is_empty())
                    .map(ProvinceCode::new)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Config {
            document_path,
            province_catalog_path,
            preview_weights,
            preview_provinces,
        })
    }
}

fn parse_weights(raw: &str) -> Result<Vec<Decimal>, ConfigError> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            Decimal::from_str_canonical(s)
                .ok()
                .filter(|w| !w.is_negative())
                .ok_or_else(|| {
                    ConfigError::InvalidValue(
                        "PREVIEW_WEIGHTS".to_string(),
                        format!("{} is not a non-negative decimal", s),
                    )
                })
        })
        .collect()
}
