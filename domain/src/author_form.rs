use shared::{AuthorPayload, AuthorRecord};

use crate::error::ValidationError;
use crate::historical_date::{to_canonical, to_ui, UiDate};
use crate::locale::Locale;
use crate::nationality::NationalityPicker;
use crate::record_form::{FormDraft, RecordForm};

/// Editable state of the author form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorDraft {
    pub name: String,
    pub birth: UiDate,
    pub death: UiDate,
    pub nationalities: NationalityPicker,
}

impl AuthorDraft {
    pub fn birth_error(&self, locale: Locale) -> Option<&'static str> {
        self.birth.error_message(locale)
    }

    pub fn death_error(&self, locale: Locale) -> Option<&'static str> {
        self.death.error_message(locale)
    }
}

impl FormDraft for AuthorDraft {
    type Record = AuthorRecord;
    type Payload = AuthorPayload;

    fn from_record(record: &AuthorRecord) -> Self {
        Self {
            name: record.name.clone(),
            birth: to_ui(&record.birth_date_info),
            death: to_ui(&record.death_date_info),
            nationalities: NationalityPicker::from_codes(
                &record.nationality_primary,
                &record.nationality_secondary,
            ),
        }
    }

    fn record_id(record: &AuthorRecord) -> i64 {
        record.id
    }

    fn check(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingAuthorName);
        }
        if !self.birth.is_valid() || !self.death.is_valid() {
            return Err(ValidationError::InvalidDate);
        }
        Ok(())
    }

    fn to_payload(&self) -> AuthorPayload {
        AuthorPayload {
            name: self.name.trim().to_string(),
            birth_date_info: to_canonical(&self.birth),
            death_date_info: to_canonical(&self.death),
            nationality_primary: self.nationalities.primary().to_string(),
            nationality_secondary: self.nationalities.secondary().to_string(),
        }
    }
}

pub type AuthorForm = RecordForm<AuthorDraft>;
