//! podium-core: domain layer for the podium competition service
//!
//! - [`models`]: validated write payloads and store row records
//! - [`aggregate`]: nesting of flat joined rows into the competition and
//!   sport rooted views, plus the flat listing types
//!
//! Nothing in this crate performs I/O.

pub mod aggregate;
pub mod models;

pub use aggregate::{
    competitions_view, sports_view, CompetitionTree, JoinedRow, PairingListing, SportTree,
    StageListing,
};
pub use models::ValidationError;
