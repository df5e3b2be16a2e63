use clap::Parser;
use signal_sort::config::toml_config::{MonitoringConfig, TomlConfig};
use signal_sort::core::analysis::DEFAULT_DIVIDERS;
use signal_sort::core::ConfigProvider;
use signal_sort::utils::{logger, validation::Validate};
use signal_sort::{LocalStorage, SignalEngine, SimplePipeline};

#[derive(Parser)]
#[command(name = "toml-signal")]
#[command(about = "Packet signal analysis driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "signal-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override stage timing from config
    #[arg(long)]
    timing: Option<bool>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-driven signal analysis");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML");
            std::process::exit(2);
        }
    };

    if let Some(timing) = args.timing {
        match config.monitoring.as_mut() {
            Some(monitoring) => monitoring.stage_timing = Some(timing),
            None => {
                config.monitoring = Some(MonitoringConfig {
                    enabled: timing,
                    log_level: None,
                    stage_timing: Some(timing),
                })
            }
        }
        tracing::info!("🔧 Stage timing overridden to: {}", timing);
    }

    if let Err(e) = config.validate() {
        eprintln!("❌ Configuration validation failed: {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    if args.dry_run {
        let dividers: Vec<String> = if config.dividers().is_empty() {
            DEFAULT_DIVIDERS.iter().map(|d| d.to_string()).collect()
        } else {
            config.dividers().to_vec()
        };

        println!(
            "Dry run for pipeline '{}' v{}:",
            config.pipeline.name, config.pipeline.version
        );
        println!("  read packets from: {}", config.input_path());
        println!("  rank dividers: {}", dividers.join(", "));
        println!(
            "  write {} report(s) to: {}",
            config.output_formats().join(", "),
            config.output_path()
        );
        return Ok(());
    }

    let log_timing = config.stage_timing();
    let storage = LocalStorage::new(".".to_string());
    let pipeline = SimplePipeline::new(storage, config);
    let engine = SignalEngine::new_with_timing(pipeline, log_timing);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Signal analysis completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
