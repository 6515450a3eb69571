use itertools::Itertools;

use crate::contracts::{RegionError, RegionQueryService, RegionSummary};

impl RegionQueryService {
    /// The city is found by a linear scan over the country's cities.
    #[tracing::instrument(err, skip(self), level = "debug")]
    pub fn list_districts(
        &self,
        country: &str,
        city_id: &str,
    ) -> Result<Vec<RegionSummary>, RegionError> {
        let city = self
            .country(country)?
            .city(city_id)
            .ok_or(RegionError::InvalidCity)?;
        Ok(city
            .districts
            .iter()
            .map(|district| RegionSummary {
                id: district.id.inner(),
                name: district.name.clone(),
            })
            .collect_vec())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::contracts::fixtures::{self, summary};
    use crate::RegionError;

    #[test]
    fn test_districts_of_a_city_are_listed() {
        let districts = fixtures::service()
            .list_districts("Turkey", "34")
            .unwrap();
        assert_eq!(districts, vec![summary("1", "Kadikoy")]);
    }

    #[test]
    fn test_every_city_lists_exactly_its_own_districts() {
        let service = fixtures::service();
        let ankara = service.list_districts("Turkey", "06").unwrap();
        assert_eq!(
            ankara,
            vec![summary("9206", "Ankara"), summary("9207", "Akyurt")]
        );
        assert_eq!(service.list_districts("Turkey", "16"), Ok(vec![]));
        assert_eq!(
            service.list_districts("Iraq", "10034"),
            Ok(vec![summary("10034", "Musul")])
        );
    }

    #[rstest]
    #[case("Turkey", "99")]
    #[case("Turkey", "6")]
    #[case("Turkey", "")]
    #[case("Iraq", "34")]
    fn test_unknown_city_is_rejected(#[case] country: &str, #[case] city_id: &str) {
        assert_eq!(
            fixtures::service().list_districts(country, city_id),
            Err(RegionError::InvalidCity)
        );
    }

    #[test]
    fn test_unknown_country_takes_precedence_over_city() {
        assert_eq!(
            fixtures::service().list_districts("Atlantis", "34"),
            Err(RegionError::InvalidCountry)
        );
    }
}
