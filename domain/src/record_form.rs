//! # Record form reconciliation
//!
//! A form either creates a new record or edits one handed over by a
//! moderation list. The handed-over record is an [`EditTarget`]: a read-only,
//! shared record plus an opaque [`TargetToken`]. The form re-initializes its
//! draft only when it observes a token it has not seen last time, so
//! re-supplying the same target after an unrelated re-render keeps whatever
//! the user has typed since. A different target always re-initializes, even
//! when its fields are equal to the previous one.
//!
//! The form never talks to the network. [`RecordForm::submit`] validates the
//! draft and hands back a [`Submission`] for the caller to send.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};

use crate::error::ValidationError;
use crate::locale::Locale;

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Identity of one edit target; clones of the target share it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetToken(u64);

impl TargetToken {
    fn fresh() -> Self {
        TargetToken(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

/// A record supplied to a form for editing
pub struct EditTarget<R> {
    token: TargetToken,
    record: Rc<R>,
}

impl<R> EditTarget<R> {
    /// Wrap a record under a new identity
    pub fn new(record: R) -> Self {
        Self {
            token: TargetToken::fresh(),
            record: Rc::new(record),
        }
    }

    pub fn token(&self) -> TargetToken {
        self.token
    }

    pub fn record(&self) -> &R {
        &self.record
    }
}

impl<R> Clone for EditTarget<R> {
    fn clone(&self) -> Self {
        Self {
            token: self.token,
            record: Rc::clone(&self.record),
        }
    }
}

/// Targets compare by identity, not by field values
impl<R> PartialEq for EditTarget<R> {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl<R: fmt::Debug> fmt::Debug for EditTarget<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditTarget")
            .field("token", &self.token)
            .field("record", &self.record)
            .finish()
    }
}

/// Local editable state of one record kind
pub trait FormDraft: Default {
    /// Canonical record the draft can be loaded from
    type Record;
    /// Wire body produced on submit
    type Payload;

    fn from_record(record: &Self::Record) -> Self;

    fn record_id(record: &Self::Record) -> i64;

    /// Submission preconditions, in order; the first failure wins
    fn check(&self) -> Result<(), ValidationError>;

    /// Map UI state to the canonical payload. Only called after `check` passed.
    fn to_payload(&self) -> Self::Payload;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: i64 },
}

/// Validated payload ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<P> {
    Create(P),
    Update { id: i64, payload: P },
}

impl<P> Submission<P> {
    pub fn payload(&self) -> &P {
        match self {
            Submission::Create(payload) | Submission::Update { payload, .. } => payload,
        }
    }
}

/// Result of the form's second button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondaryAction {
    /// Create mode: the draft was reset to defaults
    Cleared,
    /// Edit mode: the caller should reject (delete) the record; the draft is untouched
    RejectRequested { id: i64 },
}

#[derive(Debug, Clone)]
pub struct RecordForm<D> {
    draft: D,
    mode: FormMode,
    seen: Option<TargetToken>,
    error: Option<ValidationError>,
}

impl<D: FormDraft> Default for RecordForm<D> {
    fn default() -> Self {
        Self {
            draft: D::default(),
            mode: FormMode::Create,
            seen: None,
            error: None,
        }
    }
}

impl<D: FormDraft> RecordForm<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(target: Option<&EditTarget<D::Record>>) -> Self {
        let mut form = Self::new();
        form.observe(target);
        form
    }

    /// Reconcile with the currently supplied edit target
    ///
    /// Returns `true` when the draft was re-initialized. Observing the same
    /// target again is a no-op, so this can run on every render. Losing the
    /// target returns the form to create mode with a fresh draft.
    pub fn observe(&mut self, target: Option<&EditTarget<D::Record>>) -> bool {
        match target {
            Some(target) if self.seen == Some(target.token()) => false,
            Some(target) => {
                let id = D::record_id(target.record());
                debug!("Loading edit target {} into form", id);
                self.seen = Some(target.token());
                self.draft = D::from_record(target.record());
                self.mode = FormMode::Edit { id };
                self.error = None;
                true
            }
            None if self.seen.is_some() => {
                debug!("Edit target released, form back to create mode");
                self.seen = None;
                self.mode = FormMode::Create;
                self.clear();
                true
            }
            None => false,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn message(&self, locale: Locale) -> Option<&'static str> {
        self.error.map(|e| e.user_message(locale))
    }

    /// Validate the draft and produce a create or update submission
    pub fn submit(&mut self) -> Result<Submission<D::Payload>, ValidationError> {
        if let Err(e) = self.draft.check() {
            warn!("Form submission blocked: {}", e);
            self.error = Some(e);
            return Err(e);
        }
        self.error = None;

        let payload = self.draft.to_payload();
        Ok(match self.mode {
            FormMode::Create => Submission::Create(payload),
            FormMode::Edit { id } => Submission::Update { id, payload },
        })
    }

    /// Clear in create mode, request rejection in edit mode
    pub fn secondary_action(&mut self) -> SecondaryAction {
        match self.mode {
            FormMode::Create => {
                self.clear();
                SecondaryAction::Cleared
            }
            FormMode::Edit { id } => SecondaryAction::RejectRequested { id },
        }
    }

    /// Reset the draft to defaults, keeping the mode
    pub fn clear(&mut self) {
        self.draft = D::default();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: i64,
        title: String,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct NoteDraft {
        title: String,
    }

    impl FormDraft for NoteDraft {
        type Record = Note;
        type Payload = String;

        fn from_record(record: &Note) -> Self {
            Self {
                title: record.title.clone(),
            }
        }

        fn record_id(record: &Note) -> i64 {
            record.id
        }

        fn check(&self) -> Result<(), ValidationError> {
            if self.title.trim().is_empty() {
                return Err(ValidationError::MissingQuoteText);
            }
            Ok(())
        }

        fn to_payload(&self) -> String {
            self.title.clone()
        }
    }

    fn note(id: i64, title: &str) -> Note {
        Note {
            id,
            title: title.to_string(),
        }
    }

    #[test]
    fn test_starts_in_create_mode() {
        let form: RecordForm<NoteDraft> = RecordForm::new();
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.draft(), &NoteDraft::default());
        assert!(!form.is_editing());
    }

    #[test]
    fn test_same_target_does_not_reinitialize() {
        let target = EditTarget::new(note(1, "Original"));
        let mut form: RecordForm<NoteDraft> = RecordForm::with_target(Some(&target));
        assert_eq!(form.mode(), FormMode::Edit { id: 1 });

        form.draft_mut().title = "Edited".to_string();

        let same = target.clone();
        assert!(!form.observe(Some(&same)));
        assert!(!form.observe(Some(&target)));
        assert_eq!(form.draft().title, "Edited");
    }

    #[test]
    fn test_distinct_target_reinitializes_even_when_equal() {
        let first = EditTarget::new(note(1, "Same"));
        let mut form: RecordForm<NoteDraft> = RecordForm::with_target(Some(&first));
        form.draft_mut().title = "Edited".to_string();

        let lookalike = EditTarget::new(note(1, "Same"));
        assert_ne!(first, lookalike);
        assert!(form.observe(Some(&lookalike)));
        assert_eq!(form.draft().title, "Same");
    }

    #[test]
    fn test_switching_targets_loads_new_fields() {
        let a = EditTarget::new(note(1, "A"));
        let b = EditTarget::new(note(2, "B"));
        let mut form: RecordForm<NoteDraft> = RecordForm::with_target(Some(&a));
        form.draft_mut().title = "A edited".to_string();

        assert!(form.observe(Some(&b)));
        assert_eq!(form.draft().title, "B");
        assert_eq!(form.mode(), FormMode::Edit { id: 2 });

        // Going back to A is a new observation relative to B.
        assert!(form.observe(Some(&a)));
        assert_eq!(form.draft().title, "A");
    }

    #[test]
    fn test_releasing_target_returns_to_create_mode() {
        let a = EditTarget::new(note(1, "A"));
        let mut form: RecordForm<NoteDraft> = RecordForm::with_target(Some(&a));

        assert!(form.observe(None));
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.draft().title, "");
        assert!(!form.observe(None));
    }

    #[test]
    fn test_submit_create_and_update() {
        let mut form: RecordForm<NoteDraft> = RecordForm::new();
        form.draft_mut().title = "New".to_string();
        assert_eq!(form.submit().unwrap(), Submission::Create("New".to_string()));

        let target = EditTarget::new(note(7, "Old"));
        form.observe(Some(&target));
        let submission = form.submit().unwrap();
        assert_eq!(
            submission,
            Submission::Update {
                id: 7,
                payload: "Old".to_string()
            }
        );
        assert_eq!(submission.payload(), "Old");
    }

    #[test]
    fn test_failed_submit_records_message() {
        let mut form: RecordForm<NoteDraft> = RecordForm::new();
        assert_eq!(form.submit(), Err(ValidationError::MissingQuoteText));
        assert_eq!(form.error(), Some(ValidationError::MissingQuoteText));
        assert_eq!(form.message(Locale::Pl), Some("Proszę podać treść cytatu."));

        form.draft_mut().title = "Fixed".to_string();
        assert!(form.submit().is_ok());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_secondary_action_clears_or_requests_reject() {
        let mut form: RecordForm<NoteDraft> = RecordForm::new();
        form.draft_mut().title = "Draft".to_string();
        assert_eq!(form.secondary_action(), SecondaryAction::Cleared);
        assert_eq!(form.draft().title, "");

        let target = EditTarget::new(note(3, "Pending"));
        form.observe(Some(&target));
        form.draft_mut().title = "Pending, edited".to_string();
        assert_eq!(form.secondary_action(), SecondaryAction::RejectRequested { id: 3 });
        assert_eq!(form.draft().title, "Pending, edited");
    }
}
