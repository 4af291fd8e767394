use clap::Parser;
use prime_search::utils::logger;
use prime_search::{CliConfig, LocalStorage, SearchEngine, SearchPipeline};

fn main() {
    // Wrong argument count or a non-integer bound: print the usage/diagnostic
    // message and exit 1 without touching the filesystem. --help and
    // --version are not usage errors; clap exits 0 for those.
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                e.exit();
            }
            println!("{}", e.render());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting prime-search CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Output lands in the working directory, next to where the tool was run.
    let storage = LocalStorage::new(".".to_string());
    let pipeline = SearchPipeline::new(storage, config);
    let engine = SearchEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("Prime search completed successfully");
            println!("Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Prime search failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
