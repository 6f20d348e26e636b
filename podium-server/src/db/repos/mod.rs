//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Nested lists are a single LEFT JOIN, folded by `podium_core::aggregate`
//! - Update and delete report zero affected rows as `DbError::NotFound`
//! - Foreign key and unique violations are translated, not leaked
//! - Transactions for multi-step operations

pub mod competitions;
pub mod pairings;
pub mod sports;
pub mod stages;

mod cascade;
mod rows;

pub use super::error::DbError;
pub use competitions::CompetitionRepo;
pub use pairings::PairingRepo;
pub use sports::SportRepo;
pub use stages::StageRepo;
