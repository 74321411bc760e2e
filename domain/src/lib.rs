//! Core of the quotations catalog client.
//!
//! Everything here is plain Rust with no browser dependencies: historical
//! date conversion and formatting, form reconciliation, list and moderation
//! state, and the async collaborator traits the frontend implements over
//! HTTP.

pub mod author_form;
pub mod collection;
pub mod config;
pub mod error;
pub mod favorites;
pub mod historical_date;
pub mod listing;
pub mod locale;
pub mod moderation;
pub mod nationality;
pub mod period;
pub mod quote_form;
pub mod record_form;
pub mod sequence;
pub mod session;

pub use author_form::{AuthorDraft, AuthorForm};
pub use collection::{Approval, AuthorDirectory, Page, RecordMutation, RemoteCollection, SearchRequest, SortSpec};
pub use config::CatalogConfig;
pub use error::{CatalogError, ValidationError};
pub use historical_date::{format, to_canonical, to_ui, validate, UiDate};
pub use locale::Locale;
pub use quote_form::{AuthorLookup, LookupStep, QuoteDraft, QuoteForm, QuoteSubmission};
pub use record_form::{EditTarget, FormDraft, FormMode, RecordForm, SecondaryAction, Submission};
pub use session::{SessionSource, SessionState, SubmitTarget};
