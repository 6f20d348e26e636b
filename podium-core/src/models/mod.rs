//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod date_range;
pub mod drafts;
pub mod record_id;
pub mod records;
pub mod title;
pub mod validation;

pub use date_range::DateRange;
pub use drafts::{CompetitionDraft, PairingDraft, SportDraft, StageDraft};
pub use record_id::RecordId;
pub use records::{CompetitionRecord, SportRecord, StageRecord};
pub use title::Title;
pub use validation::ValidationError;
