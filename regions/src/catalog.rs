use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use serde::Deserialize;
use shared_kernel::string_key;

string_key!(CityId);
string_key!(DistrictId);

#[derive(Debug, Clone, Deserialize)]
pub struct District {
    pub id: DistrictId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    #[serde(default)]
    pub districts: Vec<District>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub cities: Vec<City>,
}

impl Country {
    pub fn city(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.id == *id)
    }
}

/// Country name -> cities -> districts, in the order of the source file.
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct RegionCatalog {
    countries: IndexMap<String, Country>,
}

impl RegionCatalog {
    #[tracing::instrument(err, level = "info")]
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read region data from {}", path.display()))?;
        let catalog = Self::from_json(&contents)
            .with_context(|| format!("Invalid region data in {}", path.display()))?;
        tracing::info!(countries = catalog.countries.len(), "Loaded region catalog");
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to deserialize region catalog")
    }

    pub fn country_names(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    pub fn country(&self, name: &str) -> Option<&Country> {
        self.countries.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_country_order_follows_the_source_document() {
        let catalog =
            RegionCatalog::from_json(r#"{"Turkey": {"cities": []}, "Iraq": {"cities": []}, "Germany": {"cities": []}}"#)
                .unwrap();
        let names = catalog.country_names().collect::<Vec<_>>();
        assert_eq!(names, vec!["Turkey", "Iraq", "Germany"]);
    }

    #[test]
    fn test_city_ids_are_compared_as_opaque_strings() {
        let catalog = RegionCatalog::from_json(
            r#"{"Turkey": {"cities": [{"id": "034", "name": "Istanbul", "districts": []}]}}"#,
        )
        .unwrap();
        let turkey = catalog.country("Turkey").unwrap();
        assert!(turkey.city("034").is_some());
        assert!(turkey.city("34").is_none());
    }

    #[test]
    fn test_malformed_data_is_rejected() {
        assert!(RegionCatalog::from_json(r#"{"Turkey": {"cities": [{"name": "Istanbul"}]}}"#).is_err());
        assert!(RegionCatalog::from_json("[]").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = RegionCatalog::from_path(Path::new("/definitely/not/here.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../data/countries_cities_districts.json");
        let catalog = RegionCatalog::from_path(&path).unwrap();
        assert!(catalog.country("Turkey").is_some());
        assert!(catalog.country("Iraq").is_some());
    }
}
