//! Proxy table model - owns the fetched list and everything derived from it

use crate::config::TableConfig;
use crate::query::{visible_projection, ColumnFilters, SortField, Sorter};
use crate::Proxy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
}

/// View state of the proxy list page
#[derive(Debug, Clone)]
pub struct ProxyTable {
    /// Snapshot from the last fetch, never mutated afterwards
    original: Arc<[Proxy]>,
    /// Filtered/sorted projection of `original`
    visible: Vec<Proxy>,
    state: LoadState,
    filters: ColumnFilters,
    sorter: Option<Sorter>,
    page_size: usize,
    /// Zero-based
    page: usize,
    sort_by_detected_at: bool,
}

impl Default for ProxyTable {
    fn default() -> Self {
        Self::new(&TableConfig::default())
    }
}

impl ProxyTable {
    pub fn new(config: &TableConfig) -> Self {
        Self {
            original: Arc::from(Vec::new()),
            visible: Vec::new(),
            state: LoadState::Loading,
            filters: ColumnFilters::default(),
            sorter: None,
            page_size: config.page_size.max(1),
            page: 0,
            sort_by_detected_at: config.sort_by_detected_at,
        }
    }

    pub fn start_loading(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Stores a freshly fetched list as both the original and the visible rows.
    pub fn set_proxies(&mut self, mut proxies: Vec<Proxy>) {
        if self.sort_by_detected_at {
            proxies.sort_by(|a, b| b.detected_at.cmp(&a.detected_at));
        }
        self.original = Arc::from(proxies);
        self.visible = self.original.to_vec();
        self.page = 0;
    }

    pub fn finish_loading(&mut self) {
        self.state = LoadState::Ready;
    }

    /// Applies a fetch outcome. The table is `Ready` afterwards either way;
    /// the error is handed back for the caller to report.
    pub fn settle<E>(&mut self, result: Result<Vec<Proxy>, E>) -> Result<(), E> {
        let outcome = result.map(|proxies| self.set_proxies(proxies));
        self.finish_loading();
        outcome
    }

    /// Recomputes the visible rows from the original list. A filter change
    /// goes back to the first page; a sort change keeps the current one.
    pub fn apply(&mut self, filters: ColumnFilters, sorter: Option<Sorter>) {
        self.visible = visible_projection(&self.original, &filters, sorter);
        if filters != self.filters {
            self.page = 0;
        }
        self.filters = filters;
        self.sorter = sorter;
        self.clamp_page();
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        let sorter = Sorter::cycle(self.sorter, field);
        self.apply(self.filters.clone(), sorter);
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.clamp_page();
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        self.page = self.page.min(self.page_count() - 1);
    }

    pub fn page_count(&self) -> usize {
        self.visible.len().div_ceil(self.page_size).max(1)
    }

    pub fn page_items(&self) -> &[Proxy] {
        let start = (self.page * self.page_size).min(self.visible.len());
        let end = (start + self.page_size).min(self.visible.len());
        &self.visible[start..end]
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn original(&self) -> &[Proxy] {
        &self.original
    }

    pub fn visible(&self) -> &[Proxy] {
        &self.visible
    }

    pub fn total(&self) -> usize {
        self.visible.len()
    }

    pub fn filters(&self) -> &ColumnFilters {
        &self.filters
    }

    pub fn sorter(&self) -> Option<Sorter> {
        self.sorter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}
