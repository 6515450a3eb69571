use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrayerTimesError {
    #[error("Invalid city name or ID")]
    InvalidRequest,
    #[error("Could not reach site: {0}")]
    UpstreamUnreachable(#[source] anyhow::Error),
    /// The page was fetched but has no prayer-times row, either because the
    /// markup changed or because the locality has no data.
    #[error("Prayer times not found.")]
    PrayerTimesNotFound,
}

/// A time cell the parser could not read. Never surfaced to callers, such
/// cells are logged and skipped.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MalformedPrayerTimeCell {
    #[error("prayer time cell has no `data-vakit-name` attribute")]
    MissingVakitName,
    #[error("prayer time cell `{0}` has no time element")]
    MissingTime(String),
}
