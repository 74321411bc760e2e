//! Paged, sortable, filterable list state.
//!
//! `RecordList` owns the query (page, size, sort, filters) and the last page
//! it received. Every fetch is started with [`RecordList::begin`], which
//! hands out a ticket; [`RecordList::finish`] drops results that belong to
//! an older ticket.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::collection::{Approval, Page, SearchRequest, SortSpec};
use crate::error::CatalogError;
use crate::locale::Locale;
use crate::sequence::{Sequencer, Ticket};

/// Arrow shown next to a column header
pub fn sort_indicator(sort: Option<&SortSpec>, field: &str) -> &'static str {
    match sort {
        Some(sort) if sort.field == field && sort.ascending => " ▲",
        Some(sort) if sort.field == field => " ▼",
        _ => "",
    }
}

/// Published authors, sorted by name
pub fn author_catalog<T>(size: u32) -> RecordList<T> {
    RecordList::new(size)
        .with_approval(Approval::ApprovedAuthors)
        .sorted_by("name", true)
}

/// Published quotes by author name, optionally pre-filtered by author
pub fn quote_catalog<T>(size: u32, author: Option<&str>) -> RecordList<T> {
    let mut list = RecordList::new(size)
        .with_approval(Approval::ApprovedQuotes)
        .sorted_by("author.name", true);
    if let Some(author) = author {
        list.set_filter("author", author);
    }
    list
}

/// The signed-in user's saved quotes, most recently saved first
pub fn favorite_quotes<T>(size: u32) -> RecordList<T> {
    RecordList::new(size).sorted_by("savedAt", false)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub size: u32,
    pub sort: Option<SortSpec>,
    pub filters: BTreeMap<String, String>,
    pub approval: Option<Approval>,
}

impl ListQuery {
    pub fn new(size: u32) -> Self {
        Self {
            page: 0,
            size,
            sort: None,
            filters: BTreeMap::new(),
            approval: None,
        }
    }

    pub fn request(&self) -> SearchRequest {
        SearchRequest {
            filters: self.filters.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            approval: self.approval,
            page: self.page,
            size: self.size,
            sort: self.sort.clone(),
        }
    }
}

#[derive(Debug)]
pub struct RecordList<T> {
    query: ListQuery,
    items: Vec<T>,
    total_pages: u32,
    loading: bool,
    error: Option<CatalogError>,
    seq: Sequencer,
}

impl<T> RecordList<T> {
    pub fn new(size: u32) -> Self {
        Self {
            query: ListQuery::new(size),
            items: Vec::new(),
            total_pages: 1,
            loading: false,
            error: None,
            seq: Sequencer::new(),
        }
    }

    pub fn with_approval(mut self, approval: Approval) -> Self {
        self.query.approval = Some(approval);
        self
    }

    pub fn sorted_by(mut self, field: &str, ascending: bool) -> Self {
        self.query.sort = Some(SortSpec {
            field: field.to_string(),
            ascending,
        });
        self
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&CatalogError> {
        self.error.as_ref()
    }

    pub fn error_message(&self, locale: Locale) -> Option<String> {
        self.error.as_ref().map(|e| e.user_message(locale))
    }

    /// Same column flips direction, a new column starts ascending
    pub fn toggle_sort(&mut self, field: &str) {
        let ascending = match &self.query.sort {
            Some(sort) if sort.field == field => !sort.ascending,
            _ => true,
        };
        self.query.sort = Some(SortSpec {
            field: field.to_string(),
            ascending,
        });
        self.query.page = 0;
    }

    pub fn sort_indicator(&self, field: &str) -> &'static str {
        sort_indicator(self.query.sort.as_ref(), field)
    }

    /// Jump to a page; out-of-range pages are ignored
    pub fn set_page(&mut self, page: u32) -> bool {
        if page >= self.total_pages || page == self.query.page {
            return false;
        }
        self.query.page = page;
        true
    }

    pub fn has_prev(&self) -> bool {
        self.query.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.query.page + 1 < self.total_pages
    }

    pub fn next_page(&mut self) -> bool {
        self.has_next() && self.set_page(self.query.page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.has_prev() && self.set_page(self.query.page - 1)
    }

    pub fn set_size(&mut self, size: u32) {
        self.query.size = size.max(1);
        self.query.page = 0;
    }

    /// Update a filter field without fetching; applied on the next [`Self::search`]
    pub fn set_filter(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            self.query.filters.remove(key);
        } else {
            self.query.filters.insert(key.to_string(), value.to_string());
        }
    }

    pub fn filter(&self, key: &str) -> &str {
        self.query.filters.get(key).map(String::as_str).unwrap_or("")
    }

    /// Start a new search from the first page
    pub fn search(&mut self) {
        self.query.page = 0;
    }

    pub fn clear_filters(&mut self) {
        self.query.filters.clear();
        self.query.page = 0;
    }

    /// Mark a fetch as started and get the request to send
    pub fn begin(&mut self) -> (Ticket, SearchRequest) {
        self.loading = true;
        (self.seq.issue(), self.query.request())
    }

    /// Apply a fetch result; returns `false` when the ticket was stale
    pub fn finish(&mut self, ticket: Ticket, result: Result<Page<T>, CatalogError>) -> bool {
        if !self.seq.is_current(&ticket) {
            debug!("Dropping stale page result (generation {})", ticket.generation());
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total_pages = page.total_pages.max(1);
                self.error = None;
                if self.query.page >= self.total_pages {
                    self.query.page = self.total_pages - 1;
                }
            }
            Err(e) => {
                warn!("Failed to load page {}: {}", self.query.page, e);
                self.items.clear();
                self.error = Some(e);
            }
        }
        true
    }

    /// Stop accepting results, e.g. when the view goes away
    pub fn cancel(&mut self) {
        self.seq.cancel();
        self.loading = false;
    }

    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<i64>, total_pages: u32) -> Page<i64> {
        Page { items, total_pages }
    }

    fn loaded(total_pages: u32) -> RecordList<i64> {
        let mut list = RecordList::new(20);
        let (ticket, _) = list.begin();
        list.finish(ticket, Ok(page(vec![1, 2, 3], total_pages)));
        list
    }

    #[test]
    fn test_sort_toggle_flips_and_resets_page() {
        let mut list = loaded(5);
        list.set_page(3);

        list.toggle_sort("name");
        assert_eq!(list.query().page, 0);
        assert_eq!(list.sort_indicator("name"), " ▲");

        list.set_page(2);
        list.toggle_sort("name");
        assert_eq!(list.query().page, 0);
        assert_eq!(list.sort_indicator("name"), " ▼");

        list.toggle_sort("nationality");
        assert_eq!(list.sort_indicator("nationality"), " ▲");
        assert_eq!(list.sort_indicator("name"), "");
    }

    #[test]
    fn test_page_bounds() {
        let mut list = loaded(2);
        assert!(!list.has_prev());
        assert!(!list.prev_page());
        assert!(list.next_page());
        assert_eq!(list.query().page, 1);
        assert!(!list.has_next());
        assert!(!list.next_page());
        assert!(!list.set_page(7));
    }

    #[test]
    fn test_size_change_resets_page() {
        let mut list = loaded(4);
        list.set_page(2);
        list.set_size(50);
        assert_eq!(list.query().page, 0);
        assert_eq!(list.query().request().size, 50);
    }

    #[test]
    fn test_zero_total_pages_counts_as_one() {
        let mut list: RecordList<i64> = RecordList::new(10);
        let (ticket, _) = list.begin();
        list.finish(ticket, Ok(page(vec![], 0)));
        assert_eq!(list.total_pages(), 1);
        assert!(!list.has_next());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut list: RecordList<i64> = RecordList::new(10);
        let (old, _) = list.begin();
        let (new, _) = list.begin();

        assert!(list.finish(new, Ok(page(vec![2], 1))));
        assert!(!list.finish(old, Ok(page(vec![1], 1))));
        assert_eq!(list.items(), &[2]);
    }

    #[test]
    fn test_cancel_drops_in_flight_result() {
        let mut list: RecordList<i64> = RecordList::new(10);
        let (ticket, _) = list.begin();
        list.cancel();
        assert!(!list.finish(ticket, Ok(page(vec![1], 1))));
        assert!(list.items().is_empty());
    }

    #[test]
    fn test_failed_fetch_keeps_error() {
        let mut list: RecordList<i64> = RecordList::new(10);
        let (ticket, _) = list.begin();
        list.finish(ticket, Err(CatalogError::Authorization));
        assert!(list.error().is_some_and(|e| e.is_authorization()));
        assert!(!list.is_loading());
    }

    fn pairs(list: &RecordList<i64>) -> Vec<(String, String)> {
        list.query().request().query_pairs()
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_author_catalog_requests_published_authors() {
        let list: RecordList<i64> = author_catalog(20);
        assert_eq!(
            pairs(&list),
            vec![
                pair("approved", "1"),
                pair("page", "0"),
                pair("size", "20"),
                pair("sortBy", "name"),
                pair("asc", "true"),
            ]
        );
    }

    #[test]
    fn test_quote_catalog_requests_published_quotes() {
        let list: RecordList<i64> = quote_catalog(20, Some("Seneka"));
        let pairs = pairs(&list);
        assert_eq!(pairs[0], pair("author", "Seneka"));
        assert!(pairs.contains(&pair("approved", "2")));
        assert!(pairs.contains(&pair("sortBy", "author.name")));
        assert!(pairs.contains(&pair("asc", "true")));

        let unfiltered: RecordList<i64> = quote_catalog(20, None);
        assert_eq!(unfiltered.filter("author"), "");
    }

    #[test]
    fn test_favorites_sort_by_saved_date_descending() {
        let mut list: RecordList<i64> = favorite_quotes(20);
        let pairs = pairs(&list);
        assert!(!pairs.iter().any(|(k, _)| k == "approved"));
        assert!(pairs.contains(&pair("sortBy", "savedAt")));
        assert!(pairs.contains(&pair("asc", "false")));

        list.toggle_sort("savedAt");
        assert_eq!(list.sort_indicator("savedAt"), " ▲");
    }

    #[test]
    fn test_filters_feed_request() {
        let mut list: RecordList<i64> = RecordList::new(10).with_approval(Approval::Pending);
        list.set_filter("name", "Seneka");
        list.set_filter("period", "");
        let request = list.query().request();
        assert_eq!(request.filters, vec![("name".to_string(), "Seneka".to_string())]);
        assert_eq!(request.approval, Some(Approval::Pending));
        assert_eq!(list.filter("name"), "Seneka");

        list.clear_filters();
        assert!(list.query().request().filters.is_empty());
    }
}
