//! Pure computations over a snapshot of trackers and completions.
//!
//! Nothing here performs I/O or reads the clock; callers pass the current
//! date in explicitly.

mod completion;
mod statistics;
mod visibility;

pub use completion::{toggle_completion, ToggleAction};
pub use statistics::compute_statistics;
pub use visibility::compute_visible_sections;
