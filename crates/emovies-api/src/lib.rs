//! Movie database clients.
//!
//! The [`traits`] module holds the service-agnostic types the rest of the
//! workspace works with; [`omdb`] is the OMDb implementation.

pub mod omdb;
pub mod traits;

pub use omdb::{OmdbClient, OmdbError};
pub use traits::{MovieSearchProvider, MovieSummary, SearchOutcome, NO_POSTER};
