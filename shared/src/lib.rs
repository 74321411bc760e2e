use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw value the backend stores when a date is not known at all
pub const UNKNOWN_DATE_VALUE: &str = "Unknown";

/// Which of the three historical date representations a value uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateKind {
    /// Calendar date in `DD.MM.YYYY` form
    #[default]
    #[serde(rename = "Date")]
    ExactDate,
    /// Bare year, sign carried by the era
    Year,
    /// Roman numeral century
    Century,
}

/// Whether a historical date is known precisely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Precision {
    #[default]
    Exact,
    Approx,
}

/// Calendar era of a historical date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Era {
    #[default]
    #[serde(rename = "AD")]
    Ad,
    #[serde(rename = "BC")]
    Bc,
}

/// Canonical wire form of a historical date
///
/// Serialized as `{ "type", "value", "precision", "era" }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoricalDate {
    #[serde(rename = "type")]
    pub kind: DateKind,
    /// Meaning depends on `kind`: `D.M.YYYY`, digits, or a Roman numeral
    #[serde(rename = "value")]
    pub raw_value: String,
    pub precision: Precision,
    pub era: Era,
}

impl HistoricalDate {
    pub fn new(kind: DateKind, raw_value: impl Into<String>, precision: Precision, era: Era) -> Self {
        Self {
            kind,
            raw_value: raw_value.into(),
            precision,
            era,
        }
    }

    /// True when the backend marked the value as unknown
    pub fn is_unknown(&self) -> bool {
        self.raw_value == UNKNOWN_DATE_VALUE
    }
}

impl fmt::Display for DateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateKind::ExactDate => write!(f, "Date"),
            DateKind::Year => write!(f, "Year"),
            DateKind::Century => write!(f, "Century"),
        }
    }
}

/// Minimal author reference embedded in quotes and lookup results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub id: i64,
    pub name: String,
}

/// Author as returned by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub birth_date_info: HistoricalDate,
    #[serde(default)]
    pub death_date_info: HistoricalDate,
    /// ISO 3166 alpha-2 code, lowercase; empty when unset
    #[serde(default)]
    pub nationality_primary: String,
    #[serde(default)]
    pub nationality_secondary: String,
}

/// Author body sent on submission and moderation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    pub name: String,
    pub birth_date_info: HistoricalDate,
    pub death_date_info: HistoricalDate,
    pub nationality_primary: String,
    pub nationality_secondary: String,
}

/// Moderated author update, the payload addressed by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorUpdate {
    pub id: i64,
    #[serde(flatten)]
    pub payload: AuthorPayload,
}

/// Quote as returned by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub author: Option<AuthorRef>,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub quote_date_info: Option<HistoricalDate>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl QuoteRecord {
    /// Author id, preferring the embedded author over the bare id field
    pub fn resolved_author_id(&self) -> Option<i64> {
        self.author.as_ref().map(|a| a.id).or(self.author_id)
    }

    pub fn author_name(&self) -> &str {
        self.author.as_ref().map(|a| a.name.as_str()).unwrap_or("")
    }
}

/// Quote body sent on submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    pub text: String,
    pub author_id: Option<i64>,
    pub quote_date_info: HistoricalDate,
    pub period: String,
    pub source: String,
}

/// Moderated quote update; the backend also expects the author object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteUpdate {
    pub id: i64,
    pub author: Option<AuthorRef>,
    #[serde(flatten)]
    pub payload: QuotePayload,
}

/// One page of a remote collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
}

/// Signed-in user as reported by `/users/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub email: String,
    pub nickname: String,
    #[serde(rename = "moderator", default)]
    pub is_moderator: bool,
}

/// Quote featured on a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOfDay {
    pub id: i64,
    pub quote_date: chrono::NaiveDate,
    pub quote: QuoteRecord,
}

/// Country entry used by the nationality picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

impl Country {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    /// Small flag image for this country
    pub fn flag_url(code: &str, width: u32) -> String {
        format!("https://flagcdn.com/w{}/{}.png", width, code)
    }
}
