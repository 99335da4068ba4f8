use crate::domain::model::{InvoiceCategory, TokenResponse};
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn pad_width(&self) -> usize;
    fn max_workers(&self) -> usize;
}

/// Source of the latest invoice number for one category.
///
/// Absence folds together "no records", transport failures and decode
/// failures; implementations must not let an error escape this boundary, so
/// one category's outage cannot abort the sibling fetch.
#[async_trait]
pub trait InvoiceSource: Send + Sync {
    async fn fetch_latest(&self, category: InvoiceCategory) -> Option<String>;
}

/// External authorization flow producing the bearer credential. Absence from
/// either step is fatal for the whole run.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authorization_code(&self) -> Option<String>;
    async fn access_token(&self, code: &str) -> Option<TokenResponse>;
}
