use itertools::Itertools;

use crate::contracts::{RegionError, RegionQueryService, RegionSummary};

impl RegionQueryService {
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn list_cities(&self, country: &str) -> Result<Vec<RegionSummary>, RegionError> {
        let country = self.country(country)?;
        Ok(country
            .cities
            .iter()
            .map(|city| RegionSummary {
                id: city.id.inner(),
                name: city.name.clone(),
            })
            .collect_vec())
    }
}
