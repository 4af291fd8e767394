use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct SearchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SearchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the scan in one pass: resolve the range, keep the primes,
    /// write the output file. Returns the written file's path.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting prime search");

        let range = self.pipeline.extract()?;
        tracing::info!("Scanning [{}, {}]", range.start, range.end);

        let result = self.pipeline.transform(range)?;
        tracing::info!("Found {} primes", result.primes.len());

        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
