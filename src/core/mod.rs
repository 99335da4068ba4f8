pub mod client;
pub mod compare;
pub mod fetcher;

pub use crate::domain::model::{InvoiceCategory, NfeEnvelope, NfeRecord};
pub use crate::domain::ports::{AuthProvider, ConfigProvider, InvoiceSource};
pub use crate::utils::error::Result;
