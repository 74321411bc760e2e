//! Error taxonomy for the catalog client.
//!
//! Validation errors stay at the form boundary and never reach the network
//! layer. Network and authorization errors are caught where the remote call
//! is made and turned into a user-facing message.

use crate::locale::Locale;

/// Field-level problem that blocks a form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("author name is required")]
    MissingAuthorName,
    #[error("quote text is required")]
    MissingQuoteText,
    #[error("one of the date fields is empty or malformed")]
    InvalidDate,
    #[error("the quote author was not chosen from the list")]
    AuthorNotResolved,
    #[error("no record is selected")]
    NoTargetSelected,
}

impl ValidationError {
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ValidationError::MissingAuthorName, Locale::Pl) => "Proszę podać imię i nazwisko autora.",
            (ValidationError::MissingAuthorName, Locale::En) => "Please enter the author's name.",
            (ValidationError::MissingQuoteText, Locale::Pl) => "Proszę podać treść cytatu.",
            (ValidationError::MissingQuoteText, Locale::En) => "Please enter the quote text.",
            (ValidationError::InvalidDate, Locale::Pl) => "Proszę poprawić błędy w polach dat.",
            (ValidationError::InvalidDate, Locale::En) => "Please fix the date fields.",
            (ValidationError::AuthorNotResolved, Locale::Pl) => "Proszę wybrać autora z listy.",
            (ValidationError::AuthorNotResolved, Locale::En) => "Please pick the author from the list.",
            (ValidationError::NoTargetSelected, Locale::Pl) => "Wybierz rekord z listy.",
            (ValidationError::NoTargetSelected, Locale::En) => "Select a record from the list.",
        }
    }
}

/// Inline message shown under a malformed date row
pub fn invalid_date_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Pl => "Niepoprawny format daty",
        Locale::En => "Invalid date format",
    }
}

/// Any failure surfaced by the catalog client
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Request could not be sent or the response never arrived
    #[error("network error: {0}")]
    Network(String),
    /// Server answered with a non-success status other than 401/403
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("not authorized")]
    Authorization,
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Map an HTTP status to the matching error; 401 and 403 mean missing permissions
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => CatalogError::Authorization,
            _ => CatalogError::Status {
                status,
                message: message.into(),
            },
        }
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, CatalogError::Authorization)
    }

    pub fn user_message(&self, locale: Locale) -> String {
        match self {
            CatalogError::Validation(e) => e.user_message(locale).to_string(),
            CatalogError::Authorization => match locale {
                Locale::Pl => "Nie masz uprawnień do tej strony.".to_string(),
                Locale::En => "You do not have permission to view this page.".to_string(),
            },
            CatalogError::Network(_) => match locale {
                Locale::Pl => "Błąd połączenia z serwerem.".to_string(),
                Locale::En => "Could not reach the server.".to_string(),
            },
            CatalogError::Status { status, .. } => match locale {
                Locale::Pl => format!("Błąd serwera ({}).", status),
                Locale::En => format!("Server error ({}).", status),
            },
            CatalogError::Decode(_) => match locale {
                Locale::Pl => "Nieprawidłowa odpowiedź serwera.".to_string(),
                Locale::En => "Unexpected server response.".to_string(),
            },
        }
    }
}
