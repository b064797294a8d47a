pub mod app_config;
pub mod config;
pub mod models;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use models::{
    ApiMessage, CartCount, CheckoutResponse, NavCategory, NavUser, Navbar, Order, OrderItem,
    OrderSummary, Product, Review, SearchResponse, SearchResult, Variant,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
