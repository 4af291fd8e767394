use serde::{Deserialize, Serialize};

/// An inclusive search range. Both bounds are kept as given; a backwards
/// range (start > end) is legal and simply scans to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeRange {
    pub start: i64,
    pub end: i64,
}

impl PrimeRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// File name the scan output is written under, bounds rendered in
    /// decimal (sign characters included for negative bounds).
    pub fn output_file_name(&self) -> String {
        format!("primes_{}_{}.txt", self.start, self.end)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Primes found in the range, ascending.
    pub primes: Vec<i64>,
    /// Rendered output, one prime per line with a trailing newline each.
    pub text_output: String,
}
