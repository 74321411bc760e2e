//! Quote form draft and the author lookup that feeds it.
//!
//! A quote can only be submitted once its author has been picked from the
//! lookup suggestions: typing a name is not enough, the draft must carry the
//! author's id. Editing the name again drops the id.

use log::{debug, warn};
use shared::{AuthorRef, QuotePayload, QuoteRecord};

use crate::collection::AuthorDirectory;
use crate::error::ValidationError;
use crate::historical_date::{to_canonical, to_ui, UiDate};
use crate::locale::Locale;
use crate::period::derive_period;
use crate::record_form::{FormDraft, RecordForm};
use crate::sequence::{Sequencer, Ticket};

/// What a quote submission sends: the payload plus the chosen author for moderation updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSubmission {
    pub payload: QuotePayload,
    pub author: Option<AuthorRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteDraft {
    pub text: String,
    author_name: String,
    author_id: Option<i64>,
    date: UiDate,
    period: String,
    pub source: String,
    suggestions: Vec<AuthorRef>,
}

impl QuoteDraft {
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn author_id(&self) -> Option<i64> {
        self.author_id
    }

    pub fn date(&self) -> &UiDate {
        &self.date
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn suggestions(&self) -> &[AuthorRef] {
        &self.suggestions
    }

    pub fn date_error(&self, locale: Locale) -> Option<&'static str> {
        self.date.error_message(locale)
    }

    /// Typing in the author field unresolves the author
    pub fn set_author_name(&mut self, name: &str) {
        self.author_name = name.to_string();
        self.author_id = None;
    }

    pub fn choose_author(&mut self, author: &AuthorRef) {
        debug!("Author {} chosen for quote", author.id);
        self.author_name = author.name.clone();
        self.author_id = Some(author.id);
        self.suggestions.clear();
    }

    pub fn set_suggestions(&mut self, suggestions: Vec<AuthorRef>) {
        self.suggestions = suggestions;
    }

    pub fn close_suggestions(&mut self) {
        self.suggestions.clear();
    }

    pub fn set_date_type(&mut self, label: &str) {
        self.date.type_label = label.to_string();
        self.refresh_period();
    }

    pub fn set_date_value(&mut self, value: &str) {
        self.date.value = value.to_string();
        self.refresh_period();
    }

    pub fn set_date_era(&mut self, label: &str) {
        self.date.era_label = label.to_string();
        self.refresh_period();
    }

    /// Precision has no bearing on the period
    pub fn set_date_precision(&mut self, label: &str) {
        self.date.approx_label = label.to_string();
    }

    /// Manual override; the next date edit recomputes it
    pub fn set_period(&mut self, period: &str) {
        self.period = period.to_string();
    }

    fn refresh_period(&mut self) {
        derive_period(&to_canonical(&self.date)).apply(&mut self.period);
    }
}

impl FormDraft for QuoteDraft {
    type Record = QuoteRecord;
    type Payload = QuoteSubmission;

    /// Loading never recomputes the period; the stored one is kept as is
    fn from_record(record: &QuoteRecord) -> Self {
        Self {
            text: record.text.clone(),
            author_name: record.author_name().to_string(),
            author_id: record.resolved_author_id(),
            date: record.quote_date_info.as_ref().map(to_ui).unwrap_or_default(),
            period: record.period.clone().unwrap_or_default(),
            source: record.source.clone().unwrap_or_default(),
            suggestions: Vec::new(),
        }
    }

    fn record_id(record: &QuoteRecord) -> i64 {
        record.id
    }

    fn check(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::MissingQuoteText);
        }
        if !self.date.is_valid() {
            return Err(ValidationError::InvalidDate);
        }
        if self.author_id.is_none() {
            return Err(ValidationError::AuthorNotResolved);
        }
        Ok(())
    }

    fn to_payload(&self) -> QuoteSubmission {
        QuoteSubmission {
            payload: QuotePayload {
                text: self.text.clone(),
                author_id: self.author_id,
                quote_date_info: to_canonical(&self.date),
                period: self.period.clone(),
                source: self.source.clone(),
            },
            author: self.author_id.map(|id| AuthorRef {
                id,
                name: self.author_name.clone(),
            }),
        }
    }
}

pub type QuoteForm = RecordForm<QuoteDraft>;

/// Next step after the author field changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupStep {
    /// Fetch suggestions for `name`, then apply them with `ticket`
    Query { ticket: Ticket, name: String },
    /// Too short to search; drop suggestions
    Clear,
}

/// Sequencing for author-name lookups
#[derive(Debug)]
pub struct AuthorLookup {
    seq: Sequencer,
    min_chars: usize,
}

impl AuthorLookup {
    pub fn new(min_chars: usize) -> Self {
        Self {
            seq: Sequencer::new(),
            min_chars,
        }
    }

    pub fn begin(&mut self, name: &str) -> LookupStep {
        if name.trim().chars().count() < self.min_chars {
            self.seq.invalidate();
            return LookupStep::Clear;
        }
        LookupStep::Query {
            ticket: self.seq.issue(),
            name: name.trim().to_string(),
        }
    }

    pub fn accepts(&self, ticket: &Ticket) -> bool {
        self.seq.is_current(ticket)
    }

    /// Drop in-flight lookups, e.g. once an author has been chosen
    pub fn invalidate(&mut self) {
        self.seq.invalidate();
    }

    pub fn cancel(&mut self) {
        self.seq.cancel();
    }

    /// Apply suggestions if `ticket` is still current; returns whether they were applied
    pub fn deliver(&self, draft: &mut QuoteDraft, ticket: &Ticket, suggestions: Vec<AuthorRef>) -> bool {
        if !self.accepts(ticket) {
            debug!("Ignoring stale author suggestions (generation {})", ticket.generation());
            return false;
        }
        draft.set_suggestions(suggestions);
        true
    }
}

/// Fetch suggestions; a failed lookup yields none
pub async fn find_suggestions<D: AuthorDirectory + ?Sized>(directory: &D, name: &str) -> Vec<AuthorRef> {
    match directory.find_authors(name).await {
        Ok(authors) => authors,
        Err(e) => {
            warn!("Author lookup for '{}' failed: {}", name, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::historical_date::{labels, to_ui, DateKind, Era, HistoricalDate, Precision};
    use crate::period::Period;
    use crate::record_form::{EditTarget, Submission};
    use async_trait::async_trait;

    fn quote() -> QuoteRecord {
        QuoteRecord {
            id: 5,
            text: "Cogito, ergo sum".to_string(),
            author: Some(AuthorRef {
                id: 2,
                name: "Kartezjusz".to_string(),
            }),
            author_id: None,
            quote_date_info: Some(HistoricalDate::new(DateKind::Year, "1637", Precision::Exact, Era::Ad)),
            period: Some("Średniowiecze".to_string()),
            source: Some("Rozprawa o metodzie".to_string()),
        }
    }

    struct FakeDirectory {
        authors: Vec<AuthorRef>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl AuthorDirectory for FakeDirectory {
        async fn find_authors(&self, name: &str) -> Result<Vec<AuthorRef>, CatalogError> {
            if self.fail {
                return Err(CatalogError::Network("offline".to_string()));
            }
            let needle = name.to_lowercase();
            Ok(self
                .authors
                .iter()
                .filter(|a| a.name.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }
    }

    #[test]
    fn test_switching_target_reloads_date_and_author() {
        let first = EditTarget::new(quote());
        let mut form = QuoteForm::new();
        form.observe(Some(&first));

        form.draft_mut().set_date_value("1650");
        form.draft_mut().set_author_name("Kartez");
        assert_eq!(form.draft().author_id(), None);
        assert!(!form.observe(Some(&first)));
        assert_eq!(form.draft().date().value, "1650");

        let marcus = QuoteRecord {
            id: 6,
            text: "Tyle twojej wartości, ile twoich dążeń".to_string(),
            author: None,
            author_id: Some(9),
            quote_date_info: Some(HistoricalDate::new(DateKind::Century, "II", Precision::Approx, Era::Ad)),
            period: Some("Starożytność".to_string()),
            source: None,
        };
        let second = EditTarget::new(marcus.clone());
        assert!(form.observe(Some(&second)));

        let draft = form.draft();
        assert_eq!(draft.date(), &to_ui(marcus.quote_date_info.as_ref().unwrap()));
        assert_eq!(draft.author_id(), Some(9));
        assert_eq!(draft.author_name(), "");
        assert_eq!(draft.period(), "Starożytność");
        assert!(draft.suggestions().is_empty());
    }

    #[test]
    fn test_loading_keeps_stored_period() {
        let target = EditTarget::new(quote());
        let form = QuoteForm::with_target(Some(&target));
        assert_eq!(form.draft().period(), "Średniowiecze");
        assert_eq!(form.draft().author_id(), Some(2));
        assert_eq!(form.draft().author_name(), "Kartezjusz");
    }

    #[test]
    fn test_date_edits_recompute_period() {
        let mut draft = QuoteDraft::default();
        draft.set_date_type(labels::TYPE_YEAR);
        draft.set_date_value("1914");
        assert_eq!(draft.period(), Period::Modern.label());

        draft.set_date_type(labels::TYPE_CENTURY);
        assert_eq!(draft.period(), Period::Modern.label());

        draft.set_date_type(labels::TYPE_YEAR);
        draft.set_date_era(labels::BC);
        assert_eq!(draft.period(), Period::Antiquity.label());

        draft.set_date_value("19x");
        assert_eq!(draft.period(), "");
    }

    #[test]
    fn test_author_must_be_resolved() {
        let mut draft = QuoteDraft {
            text: "Panta rhei".to_string(),
            ..QuoteDraft::default()
        };
        draft.set_date_type(labels::TYPE_CENTURY);
        draft.set_date_value("VI w.");
        draft.set_author_name("Heraklit");
        assert_eq!(draft.check(), Err(ValidationError::AuthorNotResolved));

        draft.choose_author(&AuthorRef {
            id: 9,
            name: "Heraklit z Efezu".to_string(),
        });
        assert_eq!(draft.check(), Ok(()));

        draft.set_author_name("Heraklit z Efez");
        assert_eq!(draft.author_id(), None);
    }

    #[test]
    fn test_check_order() {
        let mut draft = QuoteDraft::default();
        assert_eq!(draft.check(), Err(ValidationError::MissingQuoteText));
        draft.text = "x".to_string();
        assert_eq!(draft.check(), Err(ValidationError::InvalidDate));
    }

    #[test]
    fn test_failed_submit_produces_no_payload() {
        let mut form = QuoteForm::new();
        form.draft_mut().text = "Cytat".to_string();
        form.draft_mut().set_date_value("1.1.2000");
        assert_eq!(form.submit(), Err(ValidationError::AuthorNotResolved));
        assert_eq!(form.message(Locale::Pl), Some("Proszę wybrać autora z listy."));
    }

    #[test]
    fn test_update_carries_author() {
        let target = EditTarget::new(quote());
        let mut form = QuoteForm::with_target(Some(&target));
        let submission = form.submit().unwrap();

        let Submission::Update { id, payload } = submission else {
            panic!("expected an update");
        };
        assert_eq!(id, 5);
        assert_eq!(payload.payload.author_id, Some(2));
        assert_eq!(payload.payload.period, "Średniowiecze");
        assert_eq!(payload.author.map(|a| a.name), Some("Kartezjusz".to_string()));
    }

    #[test]
    fn test_lookup_threshold_and_staleness() {
        let mut lookup = AuthorLookup::new(2);
        assert_eq!(lookup.begin("K"), LookupStep::Clear);

        let LookupStep::Query { ticket: first, .. } = lookup.begin("Ka") else {
            panic!("expected a query");
        };
        let LookupStep::Query { ticket: second, name } = lookup.begin("Kan") else {
            panic!("expected a query");
        };
        assert_eq!(name, "Kan");

        let mut draft = QuoteDraft::default();
        let kant = AuthorRef {
            id: 1,
            name: "Kant".to_string(),
        };
        assert!(!lookup.deliver(&mut draft, &first, vec![kant.clone()]));
        assert!(lookup.deliver(&mut draft, &second, vec![kant.clone()]));
        assert_eq!(draft.suggestions(), &[kant.clone()]);

        draft.choose_author(&kant);
        lookup.invalidate();
        assert!(!lookup.deliver(&mut draft, &second, vec![kant]));
        assert!(draft.suggestions().is_empty());
    }

    #[tokio::test]
    async fn test_find_suggestions_against_directory() {
        let directory = FakeDirectory {
            authors: vec![
                AuthorRef {
                    id: 1,
                    name: "Immanuel Kant".to_string(),
                },
                AuthorRef {
                    id: 2,
                    name: "Seneka".to_string(),
                },
            ],
            fail: false,
        };
        let found = find_suggestions(&directory, "kant").await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);

        let broken = FakeDirectory {
            authors: vec![],
            fail: true,
        };
        assert!(find_suggestions(&broken, "kant").await.is_empty());
    }
}
