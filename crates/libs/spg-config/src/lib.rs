//! Configuration management for the playground.
//!
//! Provides [`PlaygroundConfig`], the pair of endpoints every component needs:
//! the public object-store endpoint that build artifacts are read from and the
//! compile API that new builds are submitted to.
//!
//! # Usage
//!
//! ```rust
//! use spg_config::PlaygroundConfig;
//!
//! let config = PlaygroundConfig::from_toml(
//!     r#"
//!     storage_base = "https://store.example.com"
//!     api_base = "https://api.example.com"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.storage_base(), "https://store.example.com");
//! ```

pub mod error;
pub mod playground_config;
pub mod prelude;

pub use playground_config::{API_BASE_ENV, PlaygroundConfig, STORAGE_BASE_ENV};
