pub mod data_dir;
pub mod store;

pub use data_dir::DataDir;
pub use store::{RoadmapSnapshot, RoadmapStore};
