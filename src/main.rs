use anyhow::Context;
use clap::Parser;
use outfit_assistant::config::cli::Command;
use outfit_assistant::core::ConfigProvider;
use outfit_assistant::utils::{logger, validation::Validate};
use outfit_assistant::{Catalog, CliConfig, RequestHandler};
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting outfit-assistant CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let catalog = Catalog::load(config.catalog_path()).context("failed to load catalog")?;
    tracing::debug!("Catalog ready with {} items", catalog.len());

    let event = match &config.command {
        Command::Handle { event } => read_event(event).await?,
        _ => config
            .to_event()
            .context("subcommand did not produce a request")?,
    };

    let handler = RequestHandler::new(catalog, config);
    let response = handler.handle(&event);

    let body = response.json_body()?;
    println!("{}", serde_json::to_string_pretty(&body)?);

    if !response.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

async fn read_event(path: &str) -> anyhow::Result<serde_json::Value> {
    let raw = if path == "-" {
        let mut buffer = String::new();
        tokio::io::stdin().read_to_string(&mut buffer).await?;
        buffer
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read event file '{}'", path))?
    };

    serde_json::from_str(&raw).context("event is not valid JSON")
}
