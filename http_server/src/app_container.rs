use std::sync::Arc;

use prayer_times::{PrayerTimesService, PrayerTimesSource};
use regions::{RegionCatalog, RegionQueryService};

pub struct Application {
    pub regions: RegionQueryService,
    pub prayer_times: PrayerTimesService,
}

impl Application {
    pub fn new(catalog: RegionCatalog, prayer_times_source: Arc<dyn PrayerTimesSource>) -> Self {
        Application {
            regions: RegionQueryService::new(Arc::new(catalog)),
            prayer_times: PrayerTimesService::new(prayer_times_source),
        }
    }
}
