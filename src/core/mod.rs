pub mod catalog;
pub mod order;
pub mod presentation;
pub mod receipt;
pub mod session;

pub use crate::domain::model::{Catalog, CatalogItem, Order, OrderLine};
pub use crate::domain::ports::{ShopProfile, Storage};
pub use crate::utils::error::Result;
