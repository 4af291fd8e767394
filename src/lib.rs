pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::{engine::SearchEngine, pipeline::SearchPipeline};
pub use crate::domain::model::{PrimeRange, ScanResult};
pub use crate::utils::error::{Result, SearchError};
