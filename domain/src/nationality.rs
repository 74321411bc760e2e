use std::collections::BTreeMap;

use shared::Country;

/// Codes shown as flags without searching
pub const BASIC_COUNTRIES: [(&str, &str); 9] = [
    ("pl", "Polska"),
    ("gb", "Wielka Brytania"),
    ("us", "Stany Zjednoczone"),
    ("fr", "Francja"),
    ("de", "Niemcy"),
    ("it", "Włochy"),
    ("es", "Hiszpania"),
    ("cn", "Chiny"),
    ("jp", "Japonia"),
];

/// Placeholder some records carry instead of an empty code
const NONE_CODE: &str = "None";

const MAX_NATIONALITIES: usize = 2;

pub fn basic_countries() -> Vec<Country> {
    BASIC_COUNTRIES.iter().map(|(code, name)| Country::new(code, name)).collect()
}

pub fn is_basic(code: &str) -> bool {
    BASIC_COUNTRIES.iter().any(|(c, _)| *c == code)
}

/// Build the searchable country list from a `code -> name` map
pub fn countries_from_codes(codes: BTreeMap<String, String>) -> Vec<Country> {
    codes
        .into_iter()
        .map(|(code, name)| Country {
            code: code.to_lowercase(),
            name,
        })
        .collect()
}

/// Case-insensitive substring match on country names, capped at `limit`
pub fn filter_countries<'a>(countries: &'a [Country], term: &str, limit: usize) -> Vec<&'a Country> {
    let term = term.to_lowercase();
    countries
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&term))
        .take(limit)
        .collect()
}

/// Which slot a selected flag occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagRank {
    Primary,
    Secondary,
}

impl FlagRank {
    pub fn border_color(rank: Option<FlagRank>) -> &'static str {
        match rank {
            Some(FlagRank::Primary) => "gold",
            Some(FlagRank::Secondary) => "silver",
            None => "transparent",
        }
    }
}

/// Ordered selection of at most two nationality codes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NationalityPicker {
    selected: Vec<String>,
}

impl NationalityPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a record's primary/secondary fields, skipping blanks
    pub fn from_codes(primary: &str, secondary: &str) -> Self {
        let selected = [primary, secondary]
            .into_iter()
            .filter(|c| !c.is_empty() && *c != NONE_CODE)
            .map(str::to_string)
            .collect();
        Self { selected }
    }

    /// Add or remove a code; a third code is ignored. Returns whether anything changed.
    pub fn toggle(&mut self, code: &str) -> bool {
        if let Some(pos) = self.selected.iter().position(|c| c == code) {
            self.selected.remove(pos);
            true
        } else if self.selected.len() < MAX_NATIONALITIES {
            self.selected.push(code.to_string());
            true
        } else {
            false
        }
    }

    /// Single-choice variant used by list filters
    pub fn toggle_single(&mut self, code: &str) {
        if self.selected.len() == 1 && self.selected[0] == code {
            self.selected.clear();
        } else {
            self.selected = vec![code.to_string()];
        }
    }

    pub fn rank(&self, code: &str) -> Option<FlagRank> {
        match self.selected.iter().position(|c| c == code) {
            Some(0) => Some(FlagRank::Primary),
            Some(1) => Some(FlagRank::Secondary),
            _ => None,
        }
    }

    pub fn primary(&self) -> &str {
        self.selected.first().map(String::as_str).unwrap_or("")
    }

    pub fn secondary(&self) -> &str {
        self.selected.get(1).map(String::as_str).unwrap_or("")
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Selected codes that are not among the basic flags
    pub fn extra_selected(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str).filter(|c| !is_basic(c))
    }

    /// Comma-joined codes for a query parameter; `None` when empty
    pub fn as_filter(&self) -> Option<String> {
        if self.selected.is_empty() {
            None
        } else {
            Some(self.selected.join(","))
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
