pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::ShopConfig};
pub use crate::core::{
    catalog::{load_catalog, parse_catalog, CatalogLoader},
    presentation::DietaryFilter,
    receipt::Receipt,
    session::Session,
};
pub use crate::domain::model::{Catalog, CatalogItem, Order, OrderLine};
pub use crate::utils::error::{InputError, Result, ShopError};
