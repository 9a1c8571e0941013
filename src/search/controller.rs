use crate::models::PropertyRecord;
use crate::search::criteria::FilterCriteria;
use crate::search::filter::filter;
use crate::search::pager::{clamp_page, paginate, total_pages, Page};
use crate::search::query_string::{from_query_string, to_query_string};
use crate::search::sort::{sort, SortKey};
use crate::store::RecordStore;
use serde::Serialize;
use std::num::NonZeroUsize;
use tracing::{debug, info_span};

/// What the results view renders after a query has run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage<'c, 's> {
    pub page: Page<'c, &'s PropertyRecord>,
    /// Any criteria active ("(Filtered)" badge)
    pub is_filtered: bool,
    pub sort_key: &'c SortKey,
    pub query_string: String,
}

/// Runs filter, sort and paginate over a store and keeps the sorted result
/// cached so that page changes do no query work.
#[derive(Debug)]
pub struct QueryController<'s> {
    store: &'s RecordStore,
    page_size: NonZeroUsize,
    criteria: FilterCriteria,
    sort_key: SortKey,
    page: usize,
    /// Filtered, store order. `None` until the first query runs.
    filtered: Option<Vec<&'s PropertyRecord>>,
    /// `filtered` ordered by `sort_key`
    sorted: Vec<&'s PropertyRecord>,
    recomputations: usize,
}

impl<'s> QueryController<'s> {
    pub fn new(store: &'s RecordStore, page_size: NonZeroUsize, sort_key: SortKey) -> Self {
        Self {
            store,
            page_size,
            criteria: FilterCriteria::default(),
            sort_key,
            page: 1,
            filtered: None,
            sorted: Vec::new(),
            recomputations: 0,
        }
    }

    /// Seed criteria from a shared link and run the query
    pub fn load_from_query_string(&mut self, query: &str) {
        let criteria = from_query_string(query);
        self.apply(criteria);
    }

    /// Run a new search and return the query string to publish
    pub fn submit(&mut self, criteria: FilterCriteria) -> String {
        self.apply(criteria);
        self.query_string()
    }

    /// Drop every constraint
    pub fn clear(&mut self) -> String {
        self.submit(FilterCriteria::default())
    }

    /// Re-sort the cached filtered set; filtering is not repeated
    pub fn set_sort(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
        if let Some(filtered) = &self.filtered {
            let _span = info_span!("recompute", stage = "sort").entered();
            self.sorted = sort(filtered, &self.sort_key);
        }
        self.page = 1;
    }

    /// Move to another page, clamped to the available range
    pub fn set_page(&mut self, page: usize) {
        let total = total_pages(self.sorted.len(), self.page_size);
        self.page = clamp_page(page, total);
        debug!("Showing page {} of {}", self.page, total);
    }

    /// `None` until a query has run; an empty page after that means no matches
    pub fn current(&self) -> Option<ResultPage<'_, 's>> {
        if self.filtered.is_none() {
            return None;
        }

        Some(ResultPage {
            page: paginate(&self.sorted, self.page_size, self.page),
            is_filtered: !self.criteria.is_empty(),
            sort_key: &self.sort_key,
            query_string: self.query_string(),
        })
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> &SortKey {
        &self.sort_key
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn query_string(&self) -> String {
        to_query_string(&self.criteria)
    }

    /// Number of times the filter stage has run
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    fn apply(&mut self, criteria: FilterCriteria) {
        let criteria = criteria.normalized();
        let _span = info_span!("recompute", stage = "filter").entered();

        let store = self.store;
        let filtered = filter(store.records(), &criteria);
        self.sorted = sort(&filtered, &self.sort_key);
        debug!(
            "{} of {} listings match {:?}",
            filtered.len(),
            store.len(),
            criteria
        );

        self.filtered = Some(filtered);
        self.criteria = criteria;
        self.page = 1;
        self.recomputations += 1;
    }
}
