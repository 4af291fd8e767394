pub mod cli;

use crate::core::ConfigProvider;
use crate::domain::model::PrimeRange;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "prime-search")]
#[command(about = "Find prime numbers in an inclusive range and write them to a file")]
pub struct CliConfig {
    /// Start of the search range (inclusive)
    #[arg(allow_negative_numbers = true)]
    pub start: i64,

    /// End of the search range (inclusive)
    #[arg(allow_negative_numbers = true)]
    pub end: i64,

    #[arg(long, help = "Enable verbose output")]
    #[serde(default)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn range(&self) -> PrimeRange {
        PrimeRange::new(self.start, self.end)
    }
}
