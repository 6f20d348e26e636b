//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - Connection pool owned by the server, never a process-wide handle
//! - Nested views are one flat JOIN each, nested in memory - no N+1 queries
//! - Every value is a bound parameter; only the validated schema name is
//!   spliced into DDL
//! - Transactions for multi-step operations

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;

pub use error::DbError;
pub use pool::{create_lazy_pool, create_pool};
pub use repos::*;
