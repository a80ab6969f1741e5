use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use liquidity::config::Config;
use liquidity::Client;

/// Prints the integrator's float balances for the currencies given as
/// arguments (USD when none are given).
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "liquidity=debug,liquidity_probe=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!(base_url = %config.base_url, "Configuration loaded successfully");

    let client = Client::from_config(&config)?;

    let mut currencies: Vec<String> = std::env::args().skip(1).collect();
    if currencies.is_empty() {
        currencies.push("USD".to_string());
    }

    let floats = client.get_integrator_floats(&currencies).await?;

    tracing::info!(
        message = %floats.message,
        count = floats.data.as_ref().map_or(0, Vec::len),
        "Float balances retrieved"
    );

    println!("{}", serde_json::to_string_pretty(&floats)?);

    Ok(())
}
