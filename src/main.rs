use clap::Parser;
use vowel_brew::core::ingredients;
use vowel_brew::domain::ports::ConfigProvider;
use vowel_brew::utils::{logger, validation::Validate};
use vowel_brew::{BrewEngine, BrewPipeline, BrewTomlConfig, CliConfig, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting vowel-brew CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.ingredients {
        println!("{}", ingredients::render_gallery());
        return Ok(());
    }

    if let Some(config_path) = &config.config {
        tracing::info!("📁 Loading configuration from: {}", config_path);
        let mut toml_config = match BrewTomlConfig::from_file(config_path) {
            Ok(toml_config) => toml_config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", config_path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        };

        // Explicit command-line flags win over the file.
        config.apply_overrides(&mut toml_config);

        if let Some(name) = toml_config.blend_name() {
            tracing::info!("Brewing blend: {}", name);
        }

        run_engine(toml_config).await;
    } else {
        run_engine(config).await;
    }

    Ok(())
}

async fn run_engine<C: ConfigProvider + Validate + 'static>(config: C) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".");
    let pipeline = BrewPipeline::new(storage, config);
    let engine = BrewEngine::new(pipeline);

    match engine.run().await {
        Ok(destination) => {
            tracing::info!("✅ Brew completed successfully!");
            tracing::info!("📁 Output served to: {}", destination);
        }
        Err(e) => {
            tracing::error!(
                "❌ Brew failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                vowel_brew::utils::error::ErrorSeverity::Low => 0,
                vowel_brew::utils::error::ErrorSeverity::Medium => 2,
                vowel_brew::utils::error::ErrorSeverity::High => 1,
                vowel_brew::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
