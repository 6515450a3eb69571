use std::sync::Arc;

use thiserror::Error;

use crate::catalog::{Country, RegionCatalog};

pub mod list_cities;
pub mod list_countries;
pub mod list_districts;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegionError {
    #[error("Invalid country")]
    InvalidCountry,
    #[error("Invalid city")]
    InvalidCity,
}

/// `{id, name}` pair returned by every listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSummary {
    pub id: String,
    pub name: String,
}

#[derive(Clone)]
pub struct RegionQueryService {
    catalog: Arc<RegionCatalog>,
}

impl RegionQueryService {
    pub fn new(catalog: Arc<RegionCatalog>) -> Self {
        Self { catalog }
    }

    fn country(&self, name: &str) -> Result<&Country, RegionError> {
        self.catalog
            .country(name)
            .ok_or(RegionError::InvalidCountry)
    }
}
