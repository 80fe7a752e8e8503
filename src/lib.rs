pub mod catalog;
pub mod data;
pub mod wiring;

pub use catalog::Catalog;
pub use data::model::{Movie, MovieMap};
pub use data::source::{DatasetError, DatasetSource, FileDatasetSource};
