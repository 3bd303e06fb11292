//! LearnForKids progress engine
//!
//! The app teaches toddlers words, numbers, colors and shapes through themed
//! levels, and rewards them with stars and badges. This crate is the single
//! authority over that reward state: it owns the persisted progress record,
//! reconciles level completions (replays never double-count), derives badge
//! eligibility, and answers the unlock queries the screens render.
//!
//! ## Layout
//!
//! - [`catalog`]: the static level catalog and mini-game descriptors.
//!   Read-only; the source of truth for category totals and unlock gates.
//! - [`progress`]: the persisted [`ProgressRecord`](progress::ProgressRecord),
//!   badge definitions, and the [`ProgressStore`](progress::ProgressStore)
//!   every screen goes through.
//! - [`storage`]: the key/value persistence boundary with in-memory and
//!   file-backed implementations.
//! - [`settings`]: app settings persisted through the same boundary.
//!
//! Screens never touch [`storage`] directly for progress data; they hold a
//! `ProgressStore` and re-read the record it returns.

pub mod catalog;
pub mod progress;
pub mod settings;
pub mod storage;

pub use catalog::{Category, LearningItem, Level, MiniGame};
pub use progress::{Badge, BadgeId, CategoryProgress, ProgressRecord, ProgressStore};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
