mod categories;
mod clock;
mod completions;
mod preferences;
mod trackers;

pub use categories::*;
pub use clock::*;
pub use completions::*;
pub use preferences::*;
pub use trackers::*;
