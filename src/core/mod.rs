pub mod engine;
pub mod pipeline;
pub mod primality;
pub mod scan;

pub use crate::domain::model::{PrimeRange, ScanResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
