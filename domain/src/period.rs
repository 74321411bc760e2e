use crate::historical_date::{signed_year, DateKind, HistoricalDate};

/// Coarse historical period a quote is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Antiquity,
    MiddleAges,
    EarlyModern,
    Modern,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Antiquity, Period::MiddleAges, Period::EarlyModern, Period::Modern];

    /// Period containing a signed year (BC negative)
    pub fn from_year(year: i64) -> Self {
        match year {
            y if y < 476 => Period::Antiquity,
            476..=1491 => Period::MiddleAges,
            1492..=1913 => Period::EarlyModern,
            _ => Period::Modern,
        }
    }

    /// Label stored in the quote's `period` field
    pub fn label(&self) -> &'static str {
        match self {
            Period::Antiquity => "Starożytność",
            Period::MiddleAges => "Średniowiecze",
            Period::EarlyModern => "Nowożytność",
            Period::Modern => "Współczesność",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

/// What the derived period field should become after the date changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodUpdate {
    Set(Period),
    Clear,
    /// Centuries never touch the stored period
    Keep,
}

impl PeriodUpdate {
    /// Apply to a stored period label
    pub fn apply(self, period: &mut String) {
        match self {
            PeriodUpdate::Set(p) => *period = p.label().to_string(),
            PeriodUpdate::Clear => period.clear(),
            PeriodUpdate::Keep => {}
        }
    }
}

/// Recompute the period from a canonical date
pub fn derive_period(date: &HistoricalDate) -> PeriodUpdate {
    if date.kind == DateKind::Century {
        return PeriodUpdate::Keep;
    }
    match signed_year(date) {
        Some(year) => PeriodUpdate::Set(Period::from_year(year)),
        None => PeriodUpdate::Clear,
    }
}
