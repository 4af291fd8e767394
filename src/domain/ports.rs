use crate::domain::model::{PrimeRange, ScanResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn range(&self) -> PrimeRange;
}

pub trait Pipeline {
    fn extract(&self) -> Result<PrimeRange>;
    fn transform(&self, range: PrimeRange) -> Result<ScanResult>;
    fn load(&self, result: ScanResult) -> Result<String>;
}
