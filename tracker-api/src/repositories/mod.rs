mod category_repo;
mod completion_repo;
mod preferences_repo;
mod repo_error;
mod tracker_repo;

pub use category_repo::*;
pub use completion_repo::*;
pub use preferences_repo::*;
pub use tracker_repo::*;
