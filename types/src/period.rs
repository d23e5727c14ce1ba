//! Period strings such as `"1861-1882, 1887-1888"`.

use std::sync::LazyLock;

use regex::Regex;

use crate::year::MIN_YEAR;

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("year pattern is valid"));

/// Extract the first 4-digit year from a free-text period.
///
/// A period without any 4-digit run falls back to [`MIN_YEAR`] so a malformed
/// record still renders at the start of the timeline.
#[must_use]
pub fn parse_start_year(period: &str) -> u16 {
    try_parse_start_year(period).unwrap_or(MIN_YEAR)
}

/// Like [`parse_start_year`] but reports malformed input instead of defaulting.
#[must_use]
pub(crate) fn try_parse_start_year(period: &str) -> Option<u16> {
    YEAR_PATTERN
        .find(period)
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::{parse_start_year, try_parse_start_year};

    #[test]
    fn single_year() {
        assert_eq!(parse_start_year("1886"), 1886);
    }

    #[test]
    fn first_year_of_range_list() {
        assert_eq!(parse_start_year("1861-1882, 1887-1888"), 1861);
        assert_eq!(parse_start_year("1892, 1896"), 1892);
    }

    #[test]
    fn year_embedded_in_text() {
        assert_eq!(parse_start_year("circa 1890 (Brussels)"), 1890);
    }

    #[test]
    fn malformed_defaults_to_min_year() {
        assert_eq!(parse_start_year(""), 1861);
        assert_eq!(parse_start_year("unknown"), 1861);
        assert_eq!(parse_start_year("'92"), 1861);
        assert_eq!(try_parse_start_year("unknown"), None);
    }

    #[test]
    fn non_ascii_digits_are_ignored() {
        // Arabic-Indic digits must not count as a year.
        assert_eq!(try_parse_start_year("١٨٩٠"), None);
    }
}
