//! Record repository with JSON file persistence.
//!
//! The repository holds employees, departments and payrolls in memory and
//! mirrors each collection to its own document in a data directory.

mod records;
mod store;

pub use records::{LoadFailure, LoadReport, Repository};
pub use store::Collection;
