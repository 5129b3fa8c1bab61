pub mod search;

use emovies_core::SearchTicket;

/// Actions that a screen can request from the app router.
///
/// Screens return these from `update()` instead of directly touching
/// shared resources; the app interprets them in one place.
#[derive(Debug)]
pub enum Action {
    /// No side-effect.
    None,
    /// Run a title search for the request identified by `ticket`.
    Fetch { ticket: SearchTicket, query: String },
    /// New results are on screen; download their posters.
    LoadPosters,
}
