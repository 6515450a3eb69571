use std::str::FromStr;

use crate::vakit::{Language, Vakit};

/// Display label for a vakit id in the requested language code.
///
/// Translation never fails: ids outside the six known vakits and language
/// codes other than `tr`, `en` and `ar` leave the id untouched.
pub fn translate(canonical_id: &str, language: &str) -> String {
    match (Vakit::from_str(canonical_id), Language::from_str(language)) {
        (Ok(vakit), Ok(language)) => vakit.label(language).to_owned(),
        _ => canonical_id.to_owned(),
    }
}
