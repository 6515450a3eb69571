use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

use crate::errors::{MalformedPrayerTimeCell, PrayerTimesError};

lazy_static! {
    static ref TODAY_ROW: Selector =
        Selector::parse("div#today-pray-times-row").expect("TODAY_ROW selector to compile");
    static ref TIME_CELL: Selector =
        Selector::parse("div.tpt-cell").expect("TIME_CELL selector to compile");
    static ref TIME_TEXT: Selector =
        Selector::parse("div.tpt-time").expect("TIME_TEXT selector to compile");
}

const VAKIT_NAME_ATTRIBUTE: &str = "data-vakit-name";

/// One prayer time as rendered by the source page. `time` is kept as the
/// page's text, it is never parsed into a clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VakitEntry {
    pub canonical_id: String,
    pub time: String,
}

/// Extracts today's prayer times in document order.
///
/// Fails with [`PrayerTimesError::PrayerTimesNotFound`] when the page has no
/// `#today-pray-times-row` container. Cells inside the container that cannot
/// be read are logged and skipped.
pub fn parse(html: &str) -> Result<Vec<VakitEntry>, PrayerTimesError> {
    let document = Html::parse_document(html);
    let today_row = document
        .select(&TODAY_ROW)
        .next()
        .ok_or(PrayerTimesError::PrayerTimesNotFound)?;

    let entries = today_row
        .select(&TIME_CELL)
        .filter_map(|cell| match parse_cell(cell) {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "Skipping malformed prayer time cell");
                None
            }
        })
        .collect();
    Ok(entries)
}

fn parse_cell(cell: ElementRef) -> Result<VakitEntry, MalformedPrayerTimeCell> {
    let canonical_id = cell
        .value()
        .attr(VAKIT_NAME_ATTRIBUTE)
        .ok_or(MalformedPrayerTimeCell::MissingVakitName)?;
    let time = cell
        .select(&TIME_TEXT)
        .next()
        .ok_or_else(|| MalformedPrayerTimeCell::MissingTime(canonical_id.to_owned()))?
        .text()
        .collect::<String>();

    Ok(VakitEntry {
        canonical_id: canonical_id.to_owned(),
        time: time.trim().to_owned(),
    })
}
