use emovies_api::{MovieSummary, SearchOutcome};

use crate::query::Query;

/// Where the search cycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No search has started yet.
    Idle,
    Loading,
    Success,
    Failure,
}

/// Complete UI-relevant snapshot of one search cycle.
///
/// Every transition produces a fresh value; nothing is patched in place.
/// After a cycle completes `is_loading` is false, and whenever
/// `error_message` is set `results` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: Query,
    /// In the order the API returned them.
    pub results: Vec<MovieSummary>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    /// Request generation this snapshot belongs to; 0 before the first search.
    pub generation: u64,
}

impl SearchState {
    pub fn new(query: Query) -> Self {
        Self {
            query,
            results: Vec::new(),
            is_loading: false,
            error_message: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        if self.is_loading {
            SearchPhase::Loading
        } else if self.error_message.is_some() {
            SearchPhase::Failure
        } else if self.generation == 0 {
            SearchPhase::Idle
        } else {
            SearchPhase::Success
        }
    }

    /// Request in flight. Previous results stay visible until it resolves.
    pub(crate) fn loading(&self, query: Query, generation: u64) -> Self {
        Self {
            query,
            results: self.results.clone(),
            is_loading: true,
            error_message: None,
            generation,
        }
    }

    pub(crate) fn resolved(query: Query, generation: u64, outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Success(results) => Self {
                query,
                results,
                is_loading: false,
                error_message: None,
                generation,
            },
            SearchOutcome::Failure(message) => Self::failed(query, generation, message),
        }
    }

    pub(crate) fn failed(query: Query, generation: u64, message: impl Into<String>) -> Self {
        Self {
            query,
            results: Vec::new(),
            is_loading: false,
            error_message: Some(message.into()),
            generation,
        }
    }
}
