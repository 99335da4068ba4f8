use crate::domain::model::InvoiceCategory;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{NfeError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "nfe-next")]
#[command(about = "Fetch the latest inbound/outbound NFe numbers and report the greater one")]
pub struct CliConfig {
    #[arg(long, default_value = "https://api.bling.com.br/Api/v3")]
    pub api_base_url: String,

    /// Minimum digits in the printed number; longer values print in full.
    #[arg(long, default_value = "6")]
    pub pad_width: usize,

    /// One worker per invoice category.
    #[arg(long, default_value = "2")]
    pub max_workers: usize,

    #[arg(long, env = "BLING_CLIENT_ID")]
    pub client_id: String,

    #[arg(long, env = "BLING_CLIENT_SECRET")]
    pub client_secret: String,

    /// Authorization code from the Bling browser consent step.
    #[arg(long, env = "BLING_AUTH_CODE")]
    pub auth_code: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn pad_width(&self) -> usize {
        self.pad_width
    }

    fn max_workers(&self) -> usize {
        self.max_workers
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_positive_number("pad_width", self.pad_width, 1)?;
        validate_positive_number("max_workers", self.max_workers, InvoiceCategory::ALL.len())?;

        if self.client_id.trim().is_empty() {
            return Err(NfeError::ConfigError {
                message: "client_id cannot be empty".to_string(),
            });
        }
        if self.client_secret.trim().is_empty() {
            return Err(NfeError::ConfigError {
                message: "client_secret cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
