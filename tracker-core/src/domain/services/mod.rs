mod trackers;

pub use trackers::TrackerServiceImpl;
