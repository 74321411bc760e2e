//! # Historical dates
//!
//! A historical date is either an exact calendar date, a bare year, or a
//! century written as a Roman numeral. Each may be approximate and each
//! carries an era. This module moves a date between three shapes:
//!
//! - the UI shape ([`UiDate`]): the four strings bound to the date picker row,
//!   using the picker's option labels;
//! - the canonical shape ([`HistoricalDate`]): what goes over the wire;
//! - the display shape: a localized string produced by [`format`].
//!
//! Validation is deliberately lenient about calendars: `31.02.2000` is a
//! well-formed exact date. Only the textual shape is checked.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::invalid_date_message;
use crate::locale::Locale;

pub use shared::{DateKind, Era, HistoricalDate, Precision, UNKNOWN_DATE_VALUE};

// `[0-9]` rather than `\d`: the regex crate treats `\d` as any Unicode digit.
static EXACT_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})$").expect("valid exact date regex")
});
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid year regex"));
static CENTURY_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*w\.?\s*$").expect("valid century marker regex"));
static ROMAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[IVXLCDM]+$").expect("valid roman regex"));

/// Option labels shown by the date picker row
pub mod labels {
    pub const TYPE_DATE: &str = "Data";
    pub const TYPE_YEAR: &str = "Rok";
    pub const TYPE_CENTURY: &str = "Wiek";

    pub const EXACT: &str = "Dokładnie";
    pub const APPROX: &str = "Około";

    pub const AD: &str = "n.e.";
    pub const BC: &str = "p.n.e.";

    pub const TYPES: [&str; 3] = [TYPE_DATE, TYPE_YEAR, TYPE_CENTURY];
    pub const PRECISIONS: [&str; 2] = [EXACT, APPROX];
    pub const ERAS: [&str; 2] = [AD, BC];

    /// Marker appended to centuries while they are being edited
    pub const CENTURY_MARKER: &str = "w";
}

pub fn kind_label(kind: DateKind) -> &'static str {
    match kind {
        DateKind::ExactDate => labels::TYPE_DATE,
        DateKind::Year => labels::TYPE_YEAR,
        DateKind::Century => labels::TYPE_CENTURY,
    }
}

pub fn kind_from_label(label: &str) -> Option<DateKind> {
    match label {
        labels::TYPE_DATE => Some(DateKind::ExactDate),
        labels::TYPE_YEAR => Some(DateKind::Year),
        labels::TYPE_CENTURY => Some(DateKind::Century),
        _ => None,
    }
}

pub fn precision_label(precision: Precision) -> &'static str {
    match precision {
        Precision::Exact => labels::EXACT,
        Precision::Approx => labels::APPROX,
    }
}

pub fn era_label(era: Era) -> &'static str {
    match era {
        Era::Ad => labels::AD,
        Era::Bc => labels::BC,
    }
}

/// Input hint for the value field of a given kind
pub fn placeholder(kind: Option<DateKind>) -> &'static str {
    match kind {
        Some(DateKind::ExactDate) | None => "DD.MM.YYYY",
        Some(DateKind::Year) => "np. 424",
        Some(DateKind::Century) => "np. V w.",
    }
}

/// Remove a trailing century marker (`w`, `w.`, any case) and surrounding whitespace
pub fn strip_century_marker(value: &str) -> String {
    CENTURY_MARKER_RE.replace(value.trim(), "").trim().to_string()
}

/// Check that `raw_value` is well formed for `kind`. Empty values are invalid.
pub fn validate(kind: DateKind, raw_value: &str) -> bool {
    match kind {
        DateKind::ExactDate => EXACT_DATE_RE.is_match(raw_value),
        DateKind::Year => YEAR_RE.is_match(raw_value),
        DateKind::Century => ROMAN_RE.is_match(&strip_century_marker(raw_value)),
    }
}

/// Entry state of a date row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStatus {
    /// Nothing typed yet; no inline error, but submission stays blocked
    Empty,
    Valid,
    Invalid,
}

/// The four values bound to a date picker row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiDate {
    pub type_label: String,
    pub value: String,
    pub approx_label: String,
    pub era_label: String,
}

impl Default for UiDate {
    fn default() -> Self {
        Self {
            type_label: labels::TYPE_DATE.to_string(),
            value: String::new(),
            approx_label: labels::EXACT.to_string(),
            era_label: labels::AD.to_string(),
        }
    }
}

impl UiDate {
    pub fn kind(&self) -> Option<DateKind> {
        kind_from_label(&self.type_label)
    }

    pub fn status(&self) -> DateStatus {
        if self.value.is_empty() {
            return DateStatus::Empty;
        }
        match self.kind() {
            Some(kind) if validate(kind, &self.value) => DateStatus::Valid,
            _ => DateStatus::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status() == DateStatus::Valid
    }

    /// Inline error for the row; `None` while empty or valid
    pub fn error_message(&self, locale: Locale) -> Option<&'static str> {
        match self.status() {
            DateStatus::Invalid => Some(invalid_date_message(locale)),
            DateStatus::Empty | DateStatus::Valid => None,
        }
    }
}

/// Map picker labels to the canonical date
///
/// Unknown labels fall back the way the picker defaults do: an unknown type
/// becomes an exact date, anything but the exact label is approximate, and
/// anything but the AD label is BC. Unknown types are still rejected by
/// [`UiDate::status`] before a submission gets this far.
pub fn to_canonical(ui: &UiDate) -> HistoricalDate {
    let kind = ui.kind().unwrap_or(DateKind::ExactDate);
    let raw_value = match kind {
        DateKind::Century => strip_century_marker(&ui.value),
        DateKind::ExactDate | DateKind::Year => ui.value.clone(),
    };
    let precision = if ui.approx_label == labels::EXACT {
        Precision::Exact
    } else {
        Precision::Approx
    };
    let era = if ui.era_label == labels::AD { Era::Ad } else { Era::Bc };

    HistoricalDate {
        kind,
        raw_value,
        precision,
        era,
    }
}

/// Inverse of [`to_canonical`]; centuries get the edit marker back
pub fn to_ui(date: &HistoricalDate) -> UiDate {
    let value = match date.kind {
        DateKind::Century => {
            let numeral = strip_century_marker(&date.raw_value);
            if numeral.is_empty() {
                numeral
            } else {
                format!("{} {}", numeral, labels::CENTURY_MARKER)
            }
        }
        DateKind::ExactDate | DateKind::Year => date.raw_value.clone(),
    };

    UiDate {
        type_label: kind_label(date.kind).to_string(),
        value,
        approx_label: precision_label(date.precision).to_string(),
        era_label: era_label(date.era).to_string(),
    }
}

/// Localized display string for a date
///
/// Exact dates in the AD era are printed bare as `day.month.year`, ignoring
/// precision and era. Every other case is built from an optional
/// "approximately" prefix, the value, a century unit where applicable, and
/// an era suffix.
pub fn format(date: &HistoricalDate, locale: Locale) -> String {
    if date.is_unknown() {
        return "-".to_string();
    }

    let approx = match date.precision {
        Precision::Approx => locale.approx_token(),
        Precision::Exact => "",
    };
    let era = match date.era {
        Era::Bc => locale.bc_token(),
        Era::Ad => locale.ad_token(),
    };

    match date.kind {
        DateKind::ExactDate => {
            let day_month_year = date.raw_value.split('.').take(3).collect::<Vec<_>>().join(".");
            if date.era == Era::Ad {
                return day_month_year;
            }
            join_tokens(&[approx, &day_month_year, era])
        }
        DateKind::Year => join_tokens(&[approx, &date.raw_value, era]),
        DateKind::Century => {
            let numeral = strip_century_marker(&date.raw_value);
            join_tokens(&[approx, &numeral, locale.century_token(), era])
        }
    }
}

/// [`format`] for optional fields; a missing date renders as nothing
pub fn format_optional(date: Option<&HistoricalDate>, locale: Locale) -> String {
    date.map(|d| format(d, locale)).unwrap_or_default()
}

fn join_tokens(tokens: &[&str]) -> String {
    tokens
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Year on a signed axis (BC negative) for exact dates and years
pub fn signed_year(date: &HistoricalDate) -> Option<i64> {
    let year = match date.kind {
        DateKind::ExactDate => EXACT_DATE_RE
            .captures(&date.raw_value)
            .and_then(|caps| caps.get(3))
            .and_then(|m| m.as_str().parse::<i64>().ok())?,
        DateKind::Year if YEAR_RE.is_match(&date.raw_value) => date.raw_value.parse::<i64>().ok()?,
        DateKind::Year | DateKind::Century => return None,
    };
    Some(match date.era {
        Era::Ad => year,
        Era::Bc => -year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(kind: DateKind, raw: &str, precision: Precision, era: Era) -> HistoricalDate {
        HistoricalDate::new(kind, raw, precision, era)
    }

    #[test]
    fn test_exact_date_accepts_one_and_two_digit_day_month() {
        for day in ["1", "01", "9", "31"] {
            for month in ["1", "07", "12"] {
                let raw = format!("{}.{}.1848", day, month);
                assert!(validate(DateKind::ExactDate, &raw), "{} should be valid", raw);
            }
        }
    }

    #[test]
    fn test_exact_date_rejects_malformed_values() {
        for raw in ["1.1", "1.1.", "1-1-2000", "1/1/2000", "1.1.200", "1.1.20000", "001.1.2000", "a.b.cdef", ""] {
            assert!(!validate(DateKind::ExactDate, raw), "{} should be invalid", raw);
        }
    }

    #[test]
    fn test_exact_date_skips_calendar_checks() {
        // Day 31 in February is accepted on purpose; only the shape is checked.
        assert!(validate(DateKind::ExactDate, "31.02.2000"));
        assert!(validate(DateKind::ExactDate, "99.99.0000"));
    }

    #[test]
    fn test_exact_date_rejects_non_ascii_digits() {
        assert!(!validate(DateKind::ExactDate, "١.١.٢٠٠٠"));
    }

    #[test]
    fn test_year_validation() {
        assert!(validate(DateKind::Year, "424"));
        assert!(validate(DateKind::Year, "0"));
        assert!(!validate(DateKind::Year, "-424"));
        assert!(!validate(DateKind::Year, "+5"));
        assert!(!validate(DateKind::Year, "12a"));
        assert!(!validate(DateKind::Year, ""));
    }

    #[test]
    fn test_century_validation() {
        for raw in ["V", "v", "XIV", "V w", "V w.", "xv W.", "  III   w  ", "Vw"] {
            assert!(validate(DateKind::Century, raw), "{} should be valid", raw);
        }
        for raw in ["", "w", "w.", "5 w.", "V w. n.e.", "ABC"] {
            assert!(!validate(DateKind::Century, raw), "{} should be invalid", raw);
        }
    }

    #[test]
    fn test_ui_status_is_tri_state() {
        let mut ui = UiDate::default();
        assert_eq!(ui.status(), DateStatus::Empty);
        assert_eq!(ui.error_message(Locale::Pl), None);

        ui.value = "1.1".to_string();
        assert_eq!(ui.status(), DateStatus::Invalid);
        assert_eq!(ui.error_message(Locale::Pl), Some("Niepoprawny format daty"));

        ui.value = "1.1.2000".to_string();
        assert_eq!(ui.status(), DateStatus::Valid);
        assert!(ui.is_valid());
    }

    #[test]
    fn test_unknown_type_label_is_invalid() {
        let ui = UiDate {
            type_label: "Dekada".to_string(),
            value: "1990".to_string(),
            ..UiDate::default()
        };
        assert_eq!(ui.kind(), None);
        assert_eq!(ui.status(), DateStatus::Invalid);
    }

    #[test]
    fn test_to_canonical_maps_labels() {
        let ui = UiDate {
            type_label: labels::TYPE_YEAR.to_string(),
            value: "424".to_string(),
            approx_label: labels::APPROX.to_string(),
            era_label: labels::BC.to_string(),
        };
        assert_eq!(to_canonical(&ui), date(DateKind::Year, "424", Precision::Approx, Era::Bc));
    }

    #[test]
    fn test_to_canonical_strips_century_marker() {
        let ui = UiDate {
            type_label: labels::TYPE_CENTURY.to_string(),
            value: " XV w. ".to_string(),
            ..UiDate::default()
        };
        let canonical = to_canonical(&ui);
        assert_eq!(canonical.kind, DateKind::Century);
        assert_eq!(canonical.raw_value, "XV");
    }

    #[test]
    fn test_to_ui_appends_century_marker() {
        let ui = to_ui(&date(DateKind::Century, "V", Precision::Exact, Era::Bc));
        assert_eq!(ui.type_label, labels::TYPE_CENTURY);
        assert_eq!(ui.value, "V w");
        assert_eq!(ui.era_label, labels::BC);

        // A marker already stored upstream is not doubled.
        let ui = to_ui(&date(DateKind::Century, "V w.", Precision::Exact, Era::Ad));
        assert_eq!(ui.value, "V w");

        let ui = to_ui(&date(DateKind::Century, "", Precision::Exact, Era::Ad));
        assert_eq!(ui.value, "");
    }

    #[test]
    fn test_round_trip_law() {
        let dates = [
            date(DateKind::ExactDate, "1.1.2000", Precision::Exact, Era::Ad),
            date(DateKind::ExactDate, "15.03.0044", Precision::Approx, Era::Bc),
            date(DateKind::Year, "424", Precision::Approx, Era::Bc),
            date(DateKind::Year, "1914", Precision::Exact, Era::Ad),
            date(DateKind::Century, "XIV", Precision::Exact, Era::Ad),
            date(DateKind::Century, "v", Precision::Approx, Era::Bc),
            HistoricalDate::default(),
        ];
        for d in dates {
            assert_eq!(to_canonical(&to_ui(&d)), d);
        }
    }

    #[test]
    fn test_round_trip_normalizes_stored_century_marker() {
        let stored = date(DateKind::Century, "V w.", Precision::Exact, Era::Ad);
        let normalized = to_canonical(&to_ui(&stored));
        assert_eq!(normalized.raw_value, "V");
        assert_eq!(normalized.kind, DateKind::Century);
    }

    #[test]
    fn test_format_year_polish_bc_approx() {
        let d = date(DateKind::Year, "424", Precision::Approx, Era::Bc);
        assert_eq!(format(&d, Locale::Pl), "około 424 p. n. e.");
        assert_eq!(format(&d, Locale::En), "c. 424 BC");
    }

    #[test]
    fn test_format_ad_suffix_only_outside_default_locale() {
        let d = date(DateKind::Year, "1410", Precision::Exact, Era::Ad);
        assert_eq!(format(&d, Locale::Pl), "1410");
        assert_eq!(format(&d, Locale::En), "1410 AD");
    }

    #[test]
    fn test_format_exact_ad_date_ignores_precision_and_era_tokens() {
        // AD exact dates short-circuit to the bare day.month.year in every locale.
        for precision in [Precision::Exact, Precision::Approx] {
            let d = date(DateKind::ExactDate, "1.1.2000", precision, Era::Ad);
            assert_eq!(format(&d, Locale::Pl), "1.1.2000");
            assert_eq!(format(&d, Locale::En), "1.1.2000");
        }
    }

    #[test]
    fn test_format_exact_bc_date_is_decorated() {
        let d = date(DateKind::ExactDate, "15.03.0044", Precision::Approx, Era::Bc);
        assert_eq!(format(&d, Locale::Pl), "około 15.03.0044 p. n. e.");
        assert_eq!(format(&d, Locale::En), "c. 15.03.0044 BC");
    }

    #[test]
    fn test_format_exact_date_keeps_padding_verbatim() {
        let d = date(DateKind::ExactDate, "05.07.1920", Precision::Exact, Era::Ad);
        assert_eq!(format(&d, Locale::Pl), "05.07.1920");
    }

    #[test]
    fn test_format_century() {
        let d = date(DateKind::Century, "V", Precision::Approx, Era::Bc);
        assert_eq!(format(&d, Locale::Pl), "około V w. p. n. e.");
        assert_eq!(format(&d, Locale::En), "c. V BC");

        let d = date(DateKind::Century, "XIV", Precision::Exact, Era::Ad);
        assert_eq!(format(&d, Locale::Pl), "XIV w.");
        assert_eq!(format(&d, Locale::En), "XIV AD");
    }

    #[test]
    fn test_format_century_with_stored_marker() {
        let d = date(DateKind::Century, "V w.", Precision::Exact, Era::Ad);
        assert_eq!(format(&d, Locale::Pl), "V w.");
        assert_eq!(format(&d, Locale::En), "V AD");

        let d = date(DateKind::Century, "iii W", Precision::Approx, Era::Bc);
        assert_eq!(format(&d, Locale::Pl), "około iii w. p. n. e.");
    }

    #[test]
    fn test_format_unknown_sentinel() {
        for kind in [DateKind::ExactDate, DateKind::Year, DateKind::Century] {
            let d = date(kind, UNKNOWN_DATE_VALUE, Precision::Approx, Era::Bc);
            assert_eq!(format(&d, Locale::Pl), "-");
            assert_eq!(format(&d, Locale::En), "-");
        }
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(None, Locale::Pl), "");
        let d = date(DateKind::Year, "966", Precision::Exact, Era::Ad);
        assert_eq!(format_optional(Some(&d), Locale::Pl), "966");
    }

    #[test]
    fn test_signed_year() {
        assert_eq!(signed_year(&date(DateKind::ExactDate, "1.9.1939", Precision::Exact, Era::Ad)), Some(1939));
        assert_eq!(signed_year(&date(DateKind::ExactDate, "15.3.0044", Precision::Exact, Era::Bc)), Some(-44));
        assert_eq!(signed_year(&date(DateKind::Year, "424", Precision::Exact, Era::Bc)), Some(-424));
        assert_eq!(signed_year(&date(DateKind::Year, "abc", Precision::Exact, Era::Ad)), None);
        assert_eq!(signed_year(&date(DateKind::Century, "V", Precision::Exact, Era::Ad)), None);
    }

    #[test]
    fn test_label_helpers_are_inverse() {
        for kind in [DateKind::ExactDate, DateKind::Year, DateKind::Century] {
            assert_eq!(kind_from_label(kind_label(kind)), Some(kind));
        }
        assert_eq!(placeholder(Some(DateKind::Year)), "np. 424");
        assert_eq!(placeholder(None), "DD.MM.YYYY");
    }
}
