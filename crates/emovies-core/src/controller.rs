//! The search controller: owns the [`SearchState`] and drives it through
//! one fetch cycle per search.
//!
//! A cycle is split into [`SearchController::begin`] and
//! [`SearchController::complete`] so that a UI event loop can run the
//! request elsewhere (an iced `Task`) and hand the result back later.
//! Every `begin` bumps a request generation; a completion whose ticket is
//! older than the latest `begin` is dropped, so overlapping searches always
//! settle on the most recently started one regardless of arrival order.

use std::fmt::Display;

use emovies_api::{MovieSearchProvider, SearchOutcome};
use tokio::sync::watch;

use crate::query::Query;
use crate::state::SearchState;

/// Shown for transport failures, bad HTTP statuses and undecodable bodies.
pub const GENERIC_ERROR_MESSAGE: &str =
    "An error occurred while fetching movies. Please try again.";

/// Identifies the request started by one `begin` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Single owner of the search state.
#[derive(Debug)]
pub struct SearchController {
    state: SearchState,
    latest: u64,
    tx: watch::Sender<SearchState>,
}

impl SearchController {
    pub fn new(seed: Query) -> Self {
        let state = SearchState::new(seed);
        let (tx, _rx) = watch::channel(state.clone());
        Self {
            state,
            latest: 0,
            tx,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Receive every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.tx.subscribe()
    }

    /// Interactive entry point: blank input is ignored without touching state.
    pub fn submit(&mut self, raw: &str) -> Option<SearchTicket> {
        match Query::parse(raw) {
            Ok(query) => Some(self.begin(query)),
            Err(_) => {
                tracing::debug!("ignoring blank search submission");
                None
            }
        }
    }

    /// Enter the loading state for `query`.
    pub fn begin(&mut self, query: Query) -> SearchTicket {
        self.latest += 1;
        tracing::info!(query = %query, generation = self.latest, "search started");
        let next = self.state.loading(query, self.latest);
        self.publish(next);
        SearchTicket {
            generation: self.latest,
        }
    }

    /// Apply a finished request. Returns `false` if the ticket is stale or
    /// was already completed.
    pub fn complete<E: Display>(
        &mut self,
        ticket: SearchTicket,
        result: Result<SearchOutcome, E>,
    ) -> bool {
        if ticket.generation != self.latest || !self.state.is_loading {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.latest,
                "discarding stale search result"
            );
            return false;
        }

        let query = self.state.query.clone();
        let next = match result {
            Ok(outcome) => {
                if let SearchOutcome::Failure(message) = &outcome {
                    tracing::info!(query = %query, %message, "search returned no results");
                }
                SearchState::resolved(query, ticket.generation, outcome)
            }
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "search request failed");
                SearchState::failed(query, ticket.generation, GENERIC_ERROR_MESSAGE)
            }
        };
        self.publish(next);
        true
    }

    /// Run a full cycle for `query` against `provider`.
    pub async fn run<P: MovieSearchProvider>(&mut self, provider: &P, query: Query) -> bool {
        let ticket = self.begin(query);
        let result = provider.search_movies(self.state.query.as_str()).await;
        self.complete(ticket, result)
    }

    /// [`submit`](Self::submit) followed by the request. Blank input does
    /// nothing and returns `false`.
    pub async fn search<P: MovieSearchProvider>(&mut self, provider: &P, raw: &str) -> bool {
        match Query::parse(raw) {
            Ok(query) => self.run(provider, query).await,
            Err(_) => {
                tracing::debug!("ignoring blank search submission");
                false
            }
        }
    }

    fn publish(&mut self, next: SearchState) {
        self.state = next;
        self.tx.send_replace(self.state.clone());
    }
}
