//! Progress and reward state
//!
//! One persisted [`ProgressRecord`] per installation, mutated only through
//! [`ProgressStore`]. Screens read the record to render stars, badges,
//! unlock gates and category completion bars.

mod badges;
mod record;
mod store;

pub use badges::{Badge, BadgeId, BADGES};
pub use record::{CategoryProgress, ProgressRecord};
pub use store::{ProgressStore, PROGRESS_KEY};
