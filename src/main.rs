use anyhow::Context;
use clap::Parser;
use emotion_detector::utils::{logger, validation::Validate};
use emotion_detector::{CliConfig, ConfigProvider, EmotionServer, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting emotion-detector");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config: Box<dyn ConfigProvider> = if let Some(path) = cli.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        let config = TomlConfig::from_file(&path)
            .with_context(|| format!("failed to load config file '{}'", path))?;
        exit_if_invalid(&config);
        Box::new(config)
    } else {
        exit_if_invalid(&cli);
        Box::new(cli)
    };

    tracing::info!("Upstream emotion service: {}", config.api_endpoint());

    let server = EmotionServer::from_config(config.as_ref());
    server.run().await.context("server terminated with an error")?;

    Ok(())
}

fn exit_if_invalid<C: Validate>(config: &C) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}
