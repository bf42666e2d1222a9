//! Habit tracker domain: trackers, categories, daily completions and the
//! rules deciding what the tracker list shows for a given day.
//!
//! The pure computations live in [`domain::engine`]. [`domain::services`]
//! wires them to the repository ports in [`domain::ports`], and
//! [`adapters::memory`] provides in-memory implementations of those ports.

pub mod adapters;
pub mod domain;
