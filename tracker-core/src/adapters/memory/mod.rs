//! In-memory repository implementations.
//!
//! Each repository is cheap to clone and shares its state between clones, so
//! a test can keep a handle for assertions while the service owns another.

mod categories;
mod completions;
mod preferences;
mod trackers;

use std::sync::PoisonError;

use crate::domain::TrackerError;

pub use categories::InMemoryCategoryRepository;
pub use completions::InMemoryCompletionRepository;
pub use preferences::InMemoryPreferencesRepository;
pub use trackers::InMemoryTrackerRepository;

fn poisoned<T>(_: PoisonError<T>) -> TrackerError {
    TrackerError::storage("in-memory store lock poisoned")
}
