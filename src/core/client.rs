use crate::core::{ConfigProvider, InvoiceCategory, InvoiceSource};
use crate::domain::model::NfeEnvelope;
use async_trait::async_trait;
use reqwest::Client;

/// Authenticated client for the `/nfe` endpoint.
///
/// `fetch_latest` asks for page 1 with a single record, which the service
/// returns most-recent-first, so the first entry is the latest document of
/// that category.
pub struct InvoiceClient<C: ConfigProvider> {
    config: C,
    client: Client,
    access_token: String,
}

impl<C: ConfigProvider> InvoiceClient<C> {
    pub fn new(config: C, access_token: String) -> Self {
        Self {
            config,
            client: Client::new(),
            access_token,
        }
    }
}

#[async_trait]
impl<C: ConfigProvider> InvoiceSource for InvoiceClient<C> {
    async fn fetch_latest(&self, category: InvoiceCategory) -> Option<String> {
        let url = format!("{}/nfe", self.config.api_base_url());
        let tipo = category.wire_code().to_string();

        tracing::debug!("requesting latest {} NFe from {}", category, url);

        let response = match self
            .client
            .get(&url)
            .query(&[("pagina", "1"), ("limite", "1"), ("tipo", tipo.as_str())])
            .header(reqwest::header::ACCEPT, "application/json")
            .bearer_auth(&self.access_token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("{} NFe request failed: {}", category, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!("{} NFe request returned {}", category, response.status());
            return None;
        }

        let envelope: NfeEnvelope = match response.json().await {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!("{} NFe response could not be decoded: {}", category, e);
                return None;
            }
        };

        match envelope.data.into_iter().next() {
            Some(record) => {
                tracing::info!("latest {} NFe number: {}", category, record.numero);
                Some(record.numero)
            }
            None => {
                tracing::info!("no {} NFe records found", category);
                None
            }
        }
    }
}
