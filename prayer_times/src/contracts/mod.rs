use std::sync::Arc;

use indexmap::IndexMap;

use crate::errors::PrayerTimesError;
use crate::fetcher::{Locality, PrayerTimesSource};
use crate::parser;
use crate::translator::translate;

pub const DEFAULT_LOCALITY_NAME: &str = "musul";
pub const DEFAULT_LANGUAGE: &str = "tr";

/// Translated label -> time, in the order the page lists the cells.
pub type PrayerTimeResult = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerTimeRequest {
    pub locality_name: String,
    pub locality_id: String,
    pub language: String,
}

impl PrayerTimeRequest {
    /// Absent values fall back to the defaults; values that are present but
    /// blank are kept and rejected later as an invalid request.
    pub fn new(
        locality_name: Option<String>,
        locality_id: Option<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            locality_name: locality_name.unwrap_or_else(|| DEFAULT_LOCALITY_NAME.to_owned()),
            locality_id: locality_id.unwrap_or_default(),
            language: language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned()),
        }
    }
}

/// Fetch, parse, translate. One upstream request per call, nothing cached.
#[derive(Clone)]
pub struct PrayerTimesService {
    source: Arc<dyn PrayerTimesSource>,
}

impl PrayerTimesService {
    pub fn new(source: Arc<dyn PrayerTimesSource>) -> Self {
        Self { source }
    }

    #[tracing::instrument(err, skip(self), level = "info")]
    pub async fn prayer_times(
        &self,
        request: &PrayerTimeRequest,
    ) -> Result<PrayerTimeResult, PrayerTimesError> {
        let locality = Locality::new(&request.locality_name, &request.locality_id)?;
        let html = self.source.fetch(&locality).await?;
        let entries = parser::parse(&html)?;
        tracing::debug!(entries = entries.len(), "Parsed prayer times");

        // A repeated label keeps its first position and takes the later time.
        Ok(entries
            .into_iter()
            .map(|entry| (translate(&entry.canonical_id, &request.language), entry.time))
            .collect())
    }
}
