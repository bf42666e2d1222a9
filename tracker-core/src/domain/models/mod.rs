mod category;
mod completion;
mod filter;
mod ids;
mod schedule;
mod section;
mod statistics;
mod tracker;

pub use category::*;
pub use completion::*;
pub use filter::*;
pub use ids::*;
pub use schedule::*;
pub use section::*;
pub use statistics::*;
pub use tracker::*;
