use clap::Parser;
use signal_sort::utils::error::ErrorSeverity;
use signal_sort::utils::{logger, validation::Validate};
use signal_sort::{CliConfig, LocalStorage, SignalEngine, SimplePipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting signal-sort CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    let log_timing = config.timing;

    // Storage is rooted at the working directory; the pipeline resolves the
    // configured input and output paths against it.
    let storage = LocalStorage::new(".".to_string());
    let pipeline = SimplePipeline::new(storage, config);

    let engine = SignalEngine::new_with_timing(pipeline, log_timing);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Signal analysis completed successfully!");
            println!("✅ Signal analysis completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Signal analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
