//! Maps user actions to remote requests and commits their outcomes.
//!
//! Every action that needs data returns a [`FetchRequest`] tagged with a
//! fresh sequence number; the caller ships it to the worker. Outcomes come
//! back through [`QueryOrchestrator::apply`], which commits only the answer
//! to the most recently issued request. A slow response to an earlier action
//! can therefore never overwrite the result of a later one.

use tracing::{debug, info, warn};

use super::list::{UserListState, ViewMode};
use crate::error::FetchError;
use crate::search::{filter_by_name, normalize_term};
use crate::source::{Gender, UserRecord};

/// Highest page reachable from the pagination bar.
pub const MAX_PAGE: u32 = 3;

/// What to ask the remote source for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    Page(u32),
    /// Fetch the search pool and keep exact name matches for `term`
    /// (already lower-cased).
    Search { term: String },
    Gender(Gender),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub query: Query,
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub seq: u64,
    pub query: Query,
    pub result: Result<Vec<UserRecord>, FetchError>,
}

/// Selection of the gender control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenderFilter {
    #[default]
    All,
    Female,
    Male,
}

impl GenderFilter {
    /// Next entry in control order: All, Female, Male.
    pub fn next(self) -> Self {
        match self {
            GenderFilter::All => GenderFilter::Female,
            GenderFilter::Female => GenderFilter::Male,
            GenderFilter::Male => GenderFilter::All,
        }
    }

    pub fn gender(self) -> Option<Gender> {
        match self {
            GenderFilter::All => None,
            GenderFilter::Female => Some(Gender::Female),
            GenderFilter::Male => Some(Gender::Male),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GenderFilter::All => "All",
            GenderFilter::Female => "Female",
            GenderFilter::Male => "Male",
        }
    }
}

/// Control state shown above the table. Held as pending while a request is
/// in flight and made current only when that request commits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Controls {
    gender: GenderFilter,
    page: Option<u32>,
}

/// Result of handing an outcome to [`QueryOrchestrator::apply`].
#[derive(Debug, PartialEq, Eq)]
pub enum Commit {
    Applied { rows: usize },
    /// A newer request has been issued since; the outcome was dropped.
    Stale,
    /// The request failed; state is unchanged.
    Failed,
}

#[derive(Debug, Default)]
pub struct QueryOrchestrator {
    list: UserListState,
    search_term: String,
    controls: Controls,
    pending: Option<Controls>,
    last_issued: u64,
    in_flight: bool,
}

impl QueryOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &UserListState {
        &self.list
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term_mut(&mut self) -> &mut String {
        &mut self.search_term
    }

    /// Gender filter the current rows reflect.
    pub fn gender_filter(&self) -> GenderFilter {
        self.controls.gender
    }

    /// Gender filter of the latest request, committed or not. Cycling the
    /// control steps from here so repeated presses advance while loading.
    pub fn selected_gender(&self) -> GenderFilter {
        self.pending.map_or(self.controls.gender, |c| c.gender)
    }

    /// Page the current rows came from, if they came from a page.
    pub fn current_page(&self) -> Option<u32> {
        self.controls.page
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn initial_load(&mut self) -> FetchRequest {
        self.load_page(1)
    }

    /// Jump to page `page`. Pages outside `1..=MAX_PAGE` are ignored.
    pub fn jump_to_page(&mut self, page: u32) -> Option<FetchRequest> {
        if !(1..=MAX_PAGE).contains(&page) {
            warn!(page, "page jump out of range; ignored");
            return None;
        }
        Some(self.load_page(page))
    }

    pub fn submit_search(&mut self) -> FetchRequest {
        let term = normalize_term(&self.search_term);
        self.list.set_view_mode(ViewMode::SearchResult);
        info!(%term, "search submitted");
        let controls = Controls { gender: self.controls.gender, page: None };
        self.issue(Query::Search { term }, controls)
    }

    pub fn select_gender(&mut self, filter: GenderFilter) -> FetchRequest {
        self.list.set_view_mode(ViewMode::Paged);
        match filter.gender() {
            Some(g) => self.issue(Query::Gender(g), Controls { gender: filter, page: None }),
            None => self.issue(Query::Page(1), Controls { gender: filter, page: Some(1) }),
        }
    }

    pub fn reset(&mut self) -> FetchRequest {
        self.search_term.clear();
        info!("filters reset");
        self.load_page(1)
    }

    /// Column activation: re-order the pool in memory, no request.
    pub fn sort_by(&mut self, key: &str) {
        self.list.apply_sort(key);
        debug!(key, direction = ?self.list.sort_config().direction, "rows sorted");
    }

    /// Commit an outcome if it answers the latest request.
    pub fn apply(&mut self, outcome: FetchOutcome) -> Commit {
        if outcome.seq != self.last_issued {
            debug!(seq = outcome.seq, latest = self.last_issued, "stale outcome dropped");
            return Commit::Stale;
        }
        self.in_flight = false;
        let pending = self.pending.take();
        match outcome.result {
            Ok(records) => {
                let records = match &outcome.query {
                    Query::Search { term } => filter_by_name(records, term),
                    Query::Page(_) | Query::Gender(_) => records,
                };
                let rows = records.len();
                self.list.replace_list(records);
                if let Some(controls) = pending {
                    self.controls = controls;
                }
                info!(seq = outcome.seq, query = ?outcome.query, rows, "records committed");
                Commit::Applied { rows }
            }
            Err(err) => {
                warn!(
                    seq = outcome.seq,
                    query = ?outcome.query,
                    kind = err.kind(),
                    error = %err,
                    "fetch failed; keeping current rows"
                );
                Commit::Failed
            }
        }
    }

    fn load_page(&mut self, page: u32) -> FetchRequest {
        self.list.set_view_mode(ViewMode::Paged);
        self.issue(Query::Page(page), Controls { gender: GenderFilter::All, page: Some(page) })
    }

    fn issue(&mut self, query: Query, controls: Controls) -> FetchRequest {
        self.last_issued += 1;
        self.in_flight = true;
        self.pending = Some(controls);
        FetchRequest { seq: self.last_issued, query }
    }
}
