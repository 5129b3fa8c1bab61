pub mod config;
pub mod controller;
pub mod error;
pub mod query;
pub mod render;
pub mod state;

pub use controller::{SearchController, SearchTicket, GENERIC_ERROR_MESSAGE};
pub use error::CoreError;
pub use query::{Query, DEFAULT_QUERY};
pub use render::{MovieCard, SearchView};
pub use state::{SearchPhase, SearchState};
