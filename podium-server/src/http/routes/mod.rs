//! Route handlers organized by resource

pub mod common;
pub mod competitions;
pub mod health;
pub mod pairings;
pub mod sports;
pub mod stages;
