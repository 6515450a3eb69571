use itertools::Itertools;

use crate::contracts::{RegionQueryService, RegionSummary};

impl RegionQueryService {
    /// Countries are keyed by their display name, so `id == name`.
    pub fn list_countries(&self) -> Vec<RegionSummary> {
        self.catalog
            .country_names()
            .map(|name| RegionSummary {
                id: name.to_owned(),
                name: name.to_owned(),
            })
            .collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use crate::contracts::fixtures::{self, summary};
    use crate::{RegionCatalog, RegionQueryService};

    #[test]
    fn test_every_country_is_listed_once_in_catalog_order() {
        let countries = fixtures::service().list_countries();
        assert_eq!(
            countries,
            vec![
                summary("Turkey", "Turkey"),
                summary("Iraq", "Iraq"),
                summary("Antarctica", "Antarctica"),
            ]
        );
        let unique = countries.iter().map(|c| &c.id).collect::<HashSet<_>>();
        assert_eq!(unique.len(), countries.len());
        assert!(countries.iter().all(|country| country.id == country.name));
    }

    #[test]
    fn test_empty_catalog_lists_no_countries() {
        let service = RegionQueryService::new(Arc::new(RegionCatalog::default()));
        assert!(service.list_countries().is_empty());
    }
}
