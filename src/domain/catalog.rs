//! Region and province catalogs supplied by the surrounding application.
//!
//! The pricing core never owns these; it only reads them to seed region rows
//! and to map a province to the region it inherits from.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::domain::{ProvinceCode, RegionName};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Csv(#[from] csv::Error),
    #[error("Catalog is empty")]
    Empty,
    #[error("Duplicate province code: {0}")]
    DuplicateProvince(ProvinceCode),
}

/// One province and the region it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub code: ProvinceCode,
    pub name: String,
    pub region_name: RegionName,
}

impl Province {
    pub fn new(code: &str, name: &str, region_name: &str) -> Self {
        Province {
            code: ProvinceCode::new(code),
            name: name.to_string(),
            region_name: RegionName::new(region_name),
        }
    }
}

/// Entry of the ordered region catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub region_name: RegionName,
}

/// Ordered list of provinces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceCatalog {
    provinces: Vec<Province>,
}

const DEFAULT_PROVINCES: &[(&str, &str, &str)] = &[
    ("32", "江苏", "1区"),
    ("33", "浙江", "1区"),
    ("34", "安徽", "1区"),
    ("31", "上海", "1区"),
    ("11", "北京", "2区"),
    ("12", "天津", "2区"),
    ("13", "河北", "2区"),
    ("37", "山东", "2区"),
    ("41", "河南", "2区"),
    ("43", "湖南", "3区"),
    ("42", "湖北", "3区"),
    ("36", "江西", "3区"),
    ("44", "广东", "3区"),
    ("35", "福建", "3区"),
    ("45", "广西", "3区"),
    ("46", "海南", "3区"),
    ("51", "四川", "4区"),
    ("50", "重庆", "4区"),
    ("53", "云南", "4区"),
    ("52", "贵州", "4区"),
    ("61", "陕西", "4区"),
    ("14", "山西", "4区"),
    ("62", "甘肃", "4区"),
    ("64", "宁夏", "4区"),
    ("21", "辽宁", "5区"),
    ("22", "吉林", "5区"),
    ("23", "黑龙江", "5区"),
    ("15", "内蒙古", "5区"),
    ("65", "新疆", "6区"),
    ("54", "西藏", "6区"),
    ("63", "青海", "6区"),
    ("81", "香港", "6区"),
    ("82", "澳门", "6区"),
    ("71", "台湾", "6区"),
];

impl ProvinceCatalog {
    /// Build a catalog, rejecting duplicate province codes.
    pub fn new(provinces: Vec<Province>) -> Result<Self, CatalogError> {
        if provinces.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for province in &provinces {
            if !seen.insert(province.code.clone()) {
                return Err(CatalogError::DuplicateProvince(province.code.clone()));
            }
        }
        Ok(ProvinceCatalog { provinces })
    }

    /// Load `code,name,region_name` rows with a header line.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        Self::from_records(rdr)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;
        Self::from_records(rdr)
    }

    fn from_records<R: Read>(mut rdr: csv::Reader<R>) -> Result<Self, CatalogError> {
        let provinces = rdr
            .deserialize::<Province>()
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(provinces)
    }

    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn get(&self, code: &ProvinceCode) -> Option<&Province> {
        self.provinces.iter().find(|p| &p.code == code)
    }

    pub fn region_of(&self, code: &ProvinceCode) -> Option<&RegionName> {
        self.get(code).map(|p| &p.region_name)
    }

    /// Regions in order of first appearance.
    pub fn region_catalog(&self) -> Vec<RegionEntry> {
        let mut seen = HashSet::new();
        self.provinces
            .iter()
            .filter(|p| seen.insert(p.region_name.clone()))
            .map(|p| RegionEntry {
                region_name: p.region_name.clone(),
            })
            .collect()
    }

    pub fn provinces_in<'a>(
        &'a self,
        region: &'a RegionName,
    ) -> impl Iterator<Item = &'a Province> + 'a {
        self.provinces.iter().filter(move |p| &p.region_name == region)
    }
}

impl Default for ProvinceCatalog {
    fn default() -> Self {
        ProvinceCatalog {
            provinces: DEFAULT_PROVINCES
                .iter()
                .map(|(code, name, region)| Province::new(code, name, region))
                .collect(),
        }
    }
}
