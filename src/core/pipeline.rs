use crate::core::scan::find_primes;
use crate::core::{ConfigProvider, Pipeline, PrimeRange, ScanResult, Storage};
use crate::utils::error::Result;

pub struct SearchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SearchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SearchPipeline<S, C> {
    fn extract(&self) -> Result<PrimeRange> {
        let range = self.config.range();
        tracing::debug!("Scan range is [{}, {}]", range.start, range.end);

        Ok(range)
    }

    fn transform(&self, range: PrimeRange) -> Result<ScanResult> {
        // A backwards range (start > end) scans to nothing; the candidates
        // are visited lazily rather than materialized.
        let primes = find_primes(range.start, range.end);
        tracing::debug!(
            "Found {} primes in [{}, {}]",
            primes.len(),
            range.start,
            range.end
        );

        let mut text_output = String::new();
        for prime in &primes {
            text_output.push_str(&prime.to_string());
            text_output.push('\n');
        }

        Ok(ScanResult {
            primes,
            text_output,
        })
    }

    fn load(&self, result: ScanResult) -> Result<String> {
        let file_name = self.config.range().output_file_name();

        tracing::debug!(
            "Writing {} primes ({} bytes) to {}",
            result.primes.len(),
            result.text_output.len(),
            file_name
        );
        self.storage
            .write_file(&file_name, result.text_output.as_bytes())?;

        Ok(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PrimeRange;
    use crate::utils::error::SearchError;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().unwrap();
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().unwrap();
            files.get(path).cloned().ok_or_else(|| {
                SearchError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        range: PrimeRange,
    }

    impl MockConfig {
        fn new(start: i64, end: i64) -> Self {
            Self {
                range: PrimeRange::new(start, end),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn range(&self) -> PrimeRange {
            self.range
        }
    }

    #[test]
    fn test_extract_yields_configured_range() {
        let pipeline = SearchPipeline::new(MockStorage::new(), MockConfig::new(10, 20));

        let range = pipeline.extract().unwrap();

        assert_eq!(range, PrimeRange::new(10, 20));
    }

    #[test]
    fn test_transform_filters_primes_and_renders_lines() {
        let pipeline = SearchPipeline::new(MockStorage::new(), MockConfig::new(10, 20));

        let range = pipeline.extract().unwrap();
        let result = pipeline.transform(range).unwrap();

        assert_eq!(result.primes, vec![11, 13, 17, 19]);
        assert_eq!(result.text_output, "11\n13\n17\n19\n");
    }

    #[test]
    fn test_transform_empty_range() {
        let pipeline = SearchPipeline::new(MockStorage::new(), MockConfig::new(-5, 1));

        let result = pipeline.transform(PrimeRange::new(-5, 1)).unwrap();

        assert!(result.primes.is_empty());
        assert_eq!(result.text_output, "");
    }

    #[test]
    fn test_transform_backwards_range_is_empty() {
        let pipeline = SearchPipeline::new(MockStorage::new(), MockConfig::new(20, 10));

        let result = pipeline.transform(PrimeRange::new(20, 10)).unwrap();

        assert!(result.primes.is_empty());
        assert_eq!(result.text_output, "");
    }

    #[test]
    fn test_load_writes_named_file() {
        let storage = MockStorage::new();
        let pipeline = SearchPipeline::new(storage.clone(), MockConfig::new(10, 20));

        let result = ScanResult {
            primes: vec![11, 13, 17, 19],
            text_output: "11\n13\n17\n19\n".to_string(),
        };

        let output_path = pipeline.load(result).unwrap();

        assert_eq!(output_path, "primes_10_20.txt");
        let written = storage.get_file("primes_10_20.txt").unwrap();
        assert_eq!(written, b"11\n13\n17\n19\n");
    }

    #[test]
    fn test_load_negative_bounds_in_file_name() {
        let storage = MockStorage::new();
        let pipeline = SearchPipeline::new(storage.clone(), MockConfig::new(-5, 1));

        let result = ScanResult {
            primes: vec![],
            text_output: String::new(),
        };

        let output_path = pipeline.load(result).unwrap();

        assert_eq!(output_path, "primes_-5_1.txt");
        assert_eq!(storage.get_file("primes_-5_1.txt").unwrap(), b"");
    }
}
