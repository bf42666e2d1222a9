mod trackers;

pub use trackers::*;
