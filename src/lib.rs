pub mod analysis;
pub mod dataset;
pub mod error;
pub mod fetch;
pub mod process;
pub mod schema;

pub use dataset::{CountySelector, Dataset, IndustryTotal, Record};
pub use error::{Error, Result};
pub use fetch::{SourceConfig, SourceMode};
