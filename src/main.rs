use anyhow::Result;
use tracing::info;

use newsmood::bot::NewsBot;
use newsmood::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    newsmood::setup_logging();

    let config = AppConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Missing or invalid configuration: {}", e))?;

    let bot = NewsBot::new(&config);
    info!("Starting Telegram news bot");
    bot.run().await?;

    Ok(())
}
