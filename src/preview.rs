//! Loading inputs for, and building, a resolved price table.

use serde::Serialize;

use crate::config::Config;
use crate::domain::{
    Decimal, PricingConfiguration, ProvinceCatalog, ProvinceCode, TemplateDocument,
};
use crate::engine::{preview, ResolvedPrice};
use crate::error::{AppError, PricingError};

/// One resolved cell of the preview table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    pub weight: Decimal,
    pub province: ProvinceCode,
    pub result: Result<ResolvedPrice, String>,
}

pub fn load_catalog(config: &Config) -> Result<ProvinceCatalog, AppError> {
    match &config.province_catalog_path {
        Some(path) => Ok(ProvinceCatalog::from_csv_path(path)?),
        None => Ok(ProvinceCatalog::default()),
    }
}

pub fn load_template(config: &Config) -> Result<TemplateDocument, AppError> {
    let raw = std::fs::read_to_string(&config.document_path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Resolve every (weight, province) pair. Weight-banded configurations ignore
/// the province, so they are resolved once per weight.
pub fn build_table(
    configuration: &PricingConfiguration,
    catalog: &ProvinceCatalog,
    weights: &[Decimal],
    provinces: &[ProvinceCode],
) -> Vec<PreviewRow> {
    let provinces: Vec<ProvinceCode> = match configuration {
        PricingConfiguration::WeightBanded(_) => vec![ProvinceCode::new("*")],
        PricingConfiguration::RegionTiered(_) if provinces.is_empty() => {
            catalog.provinces().iter().map(|p| p.code.clone()).collect()
        }
        PricingConfiguration::RegionTiered(_) => provinces.to_vec(),
    };

    let mut rows = Vec::with_capacity(weights.len() * provinces.len());
    for weight in weights {
        for province in &provinces {
            let result = preview(configuration, *weight, province, catalog)
                .map_err(|e: PricingError| e.to_string());
            rows.push(PreviewRow {
                weight: *weight,
                province: province.clone(),
                result,
            });
        }
    }
    rows
}
