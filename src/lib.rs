pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{client::InvoiceClient, compare::compare_max, fetcher::fetch_both};
pub use domain::model::InvoiceCategory;
pub use utils::error::{NfeError, Result};
