use clap::Parser;
use nfe_next::adapters::bling_auth::BlingAuth;
use nfe_next::core::{client::InvoiceClient, compare, fetcher};
use nfe_next::domain::ports::{AuthProvider, ConfigProvider};
use nfe_next::utils::{logger, validation::Validate};
use nfe_next::{CliConfig, NfeError};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting nfe-next");
    if config.verbose {
        tracing::debug!("API base URL: {}", config.api_base_url);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match run(config).await {
        Ok(Some(numero)) => {
            tracing::info!("✅ Next NFe number determined");
            println!("Next NFe number: {}", numero);
        }
        Ok(None) => {
            // Soft failures on either side land here rather than as errors.
            println!("Could not determine the next NFe number");
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(config: CliConfig) -> nfe_next::Result<Option<String>> {
    let auth = BlingAuth::new(
        &config.api_base_url,
        &config.client_id,
        &config.client_secret,
        config.auth_code.clone(),
    );

    tracing::info!("Obtaining authorization code...");
    let code = auth
        .authorization_code()
        .await
        .ok_or(NfeError::MissingAuthCode)?;

    tracing::info!("Exchanging code for access token...");
    let token = auth
        .access_token(&code)
        .await
        .and_then(|t| t.access_token)
        .ok_or(NfeError::MissingAccessToken)?;

    tracing::info!("Fetching latest NFe numbers for both categories...");
    let pad_width = config.pad_width();
    let client = Arc::new(InvoiceClient::new(config, token));
    let (inbound, outbound) = fetcher::fetch_both(client).await;

    Ok(compare::compare_max(
        inbound.as_deref(),
        outbound.as_deref(),
        pad_width,
    ))
}
