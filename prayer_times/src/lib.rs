pub mod contracts;
pub mod errors;
pub mod fetcher;
pub mod parser;
pub mod translator;
pub mod vakit;

pub use contracts::{PrayerTimeRequest, PrayerTimeResult, PrayerTimesService};
pub use errors::PrayerTimesError;
pub use fetcher::{DiyanetClient, PrayerTimesSource, UpstreamSettings};
