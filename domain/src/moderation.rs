//! Moderation queue: pending submissions a moderator approves or rejects.
//!
//! Each pending record is wrapped in an [`EditTarget`] once, when the page
//! arrives. Selecting a row hands that same target to the form, so clicking
//! the selected row again does not wipe the moderator's edits.

use log::info;
use shared::{AuthorRecord, QuoteRecord};

use crate::collection::{Approval, Page, RecordMutation, SearchRequest};
use crate::error::{CatalogError, ValidationError};
use crate::listing::RecordList;
use crate::record_form::{EditTarget, SecondaryAction, Submission};
use crate::sequence::Ticket;

/// Records with a server-assigned id
pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for AuthorRecord {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for QuoteRecord {
    fn id(&self) -> i64 {
        self.id
    }
}

pub struct ModerationQueue<R> {
    list: RecordList<EditTarget<R>>,
    selected: Option<EditTarget<R>>,
}

impl<R: Identified> ModerationQueue<R> {
    pub fn new(page_size: u32) -> Self {
        Self {
            list: RecordList::new(page_size).with_approval(Approval::Pending),
            selected: None,
        }
    }

    pub fn list(&self) -> &RecordList<EditTarget<R>> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut RecordList<EditTarget<R>> {
        &mut self.list
    }

    pub fn pending(&self) -> impl Iterator<Item = &R> {
        self.list.items().iter().map(EditTarget::record)
    }

    pub fn selected(&self) -> Option<&EditTarget<R>> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.as_ref().is_some_and(|t| t.record().id() == id)
    }

    /// Hand a pending row to the form; returns `false` if the id is not on this page
    pub fn select(&mut self, id: i64) -> bool {
        match self.list.items().iter().find(|t| t.record().id() == id) {
            Some(target) => {
                self.selected = Some(target.clone());
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn begin_load(&mut self) -> (Ticket, SearchRequest) {
        self.list.begin()
    }

    /// Apply a fetched page of pending records
    ///
    /// A selection that is no longer pending is dropped; one that still is
    /// keeps its current target so the form keeps its draft. A failed load
    /// leaves the selection alone.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Page<R>, CatalogError>) -> bool {
        let selected_id = self.selected.as_ref().map(|t| t.record().id());
        let loaded = result.is_ok();
        let previous = self.selected.take();
        let wrapped = result.map(|page| Page {
            items: page
                .items
                .into_iter()
                .map(|record| match &previous {
                    Some(target) if Some(record.id()) == selected_id => target.clone(),
                    _ => EditTarget::new(record),
                })
                .collect(),
            total_pages: page.total_pages,
        });
        let applied = self.list.finish(ticket, wrapped);
        self.selected = previous;
        if applied && loaded {
            if let Some(id) = selected_id {
                if !self.select(id) {
                    self.selected = None;
                }
            }
        }
        applied
    }

    /// Call after a successful approve or reject
    pub fn settle(&mut self, id: i64) {
        info!("Moderation of record {} settled", id);
        self.list.items_mut().retain(|t| t.record().id() != id);
        self.clear_selection();
    }

    pub fn cancel(&mut self) {
        self.list.cancel();
    }
}

/// Send an edited pending record as approved
pub async fn approve<M>(mutation: &M, submission: Submission<M::Payload>) -> Result<i64, CatalogError>
where
    M: RecordMutation + ?Sized,
{
    match submission {
        Submission::Update { id, payload } => {
            mutation.update(id, &payload).await?;
            info!("Approved record {}", id);
            Ok(id)
        }
        Submission::Create(_) => Err(ValidationError::NoTargetSelected.into()),
    }
}

/// Delete the pending record the form asked to reject
pub async fn reject<M>(mutation: &M, action: SecondaryAction) -> Result<i64, CatalogError>
where
    M: RecordMutation + ?Sized,
{
    match action {
        SecondaryAction::RejectRequested { id } => {
            mutation.delete(id).await?;
            info!("Rejected record {}", id);
            Ok(id)
        }
        SecondaryAction::Cleared => Err(ValidationError::NoTargetSelected.into()),
    }
}
