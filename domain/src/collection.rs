//! Collaborator contracts the core consumes.
//!
//! Implementations live in the frontend's REST client; tests use in-memory
//! fakes. Futures are not `Send` because everything runs on the browser's
//! single event loop.

use async_trait::async_trait;
use log::info;
use shared::{AuthorRef, PageResponse};

use crate::error::CatalogError;
use crate::record_form::Submission;

/// Whether a query targets published records or the moderation backlog
///
/// The catalog encodes "published" differently per collection, so each
/// published list names its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approval {
    /// Published authors, `approved=1`
    ApprovedAuthors,
    /// Published quotes, `approved=2`
    ApprovedQuotes,
    /// Moderation backlog of either collection, `approved=0`
    Pending,
}

impl Approval {
    pub fn as_param(&self) -> &'static str {
        match self {
            Approval::ApprovedAuthors => "1",
            Approval::ApprovedQuotes => "2",
            Approval::Pending => "0",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

/// Query against a remote collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Text filters; empty values are not sent
    pub filters: Vec<(String, String)>,
    pub approval: Option<Approval>,
    pub page: u32,
    pub size: u32,
    pub sort: Option<SortSpec>,
}

impl SearchRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            filters: Vec::new(),
            approval: None,
            page,
            size,
            sort: None,
        }
    }

    pub fn with_approval(mut self, approval: Approval) -> Self {
        self.approval = Some(approval);
        self
    }

    pub fn with_filter(mut self, key: &str, value: &str) -> Self {
        self.filters.push((key.to_string(), value.to_string()));
        self
    }

    /// Query-string pairs in the order the catalog API expects
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .filters
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .cloned()
            .collect();
        if let Some(approval) = self.approval {
            pairs.push(("approved".to_string(), approval.as_param().to_string()));
        }
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("size".to_string(), self.size.to_string()));
        if let Some(sort) = &self.sort {
            pairs.push(("sortBy".to_string(), sort.field.clone()));
            pairs.push(("asc".to_string(), sort.ascending.to_string()));
        }
        pairs
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Never below 1, even for an empty collection
    pub total_pages: u32,
}

impl<T> From<PageResponse<T>> for Page<T> {
    fn from(response: PageResponse<T>) -> Self {
        Self {
            items: response.content,
            total_pages: response.total_pages.max(1),
        }
    }
}

#[async_trait(?Send)]
pub trait RemoteCollection {
    type Item;

    async fn search(&self, request: &SearchRequest) -> Result<Page<Self::Item>, CatalogError>;
}

#[async_trait(?Send)]
pub trait RecordMutation {
    type Payload;

    /// Submit a new record; it enters the moderation queue
    async fn create(&self, payload: &Self::Payload) -> Result<(), CatalogError>;
    /// Save a pending record as approved
    async fn update(&self, id: i64, payload: &Self::Payload) -> Result<(), CatalogError>;
    async fn delete(&self, id: i64) -> Result<(), CatalogError>;
}

/// Author name lookup used by the quote form
#[async_trait(?Send)]
pub trait AuthorDirectory {
    async fn find_authors(&self, name: &str) -> Result<Vec<AuthorRef>, CatalogError>;
}

impl<P> Submission<P> {
    /// Send through the mutation collaborator as a create or an update
    pub async fn send<M>(&self, mutation: &M) -> Result<(), CatalogError>
    where
        M: RecordMutation<Payload = P> + ?Sized,
    {
        match self {
            Submission::Create(payload) => {
                info!("Submitting new record");
                mutation.create(payload).await
            }
            Submission::Update { id, payload } => {
                info!("Submitting update for record {}", id);
                mutation.update(*id, payload).await
            }
        }
    }
}
