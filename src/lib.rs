//! # Keybridge
//!
//! Keybridge resolves named secrets held in one or more external secret
//! stores and exposes them, in several shapes, through a uniform lookup
//! layer.
//!
//! ## Architecture
//!
//! ```text
//! REST API Layer → Store Registry → Secret Fetch → Payload Extractors
//!        ↓                                ↑
//! Local Configuration  ←  Config Merge Provider (startup only)
//! ```
//!
//! ## Core Components
//!
//! - **Store Registry**: an immutable map from logical store name to a live
//!   secret-store client, built once from settings
//! - **Secret Fetch**: single-request retrieval of a raw payload (string or
//!   binary) through the [`secrets::SecretStore`] trait
//! - **Payload Extractors**: pure strategies turning a payload into an opaque
//!   string, a caller-typed object, or a single keyed value
//! - **Config Merge Provider**: a startup-time source that pulls filtered,
//!   renamed secret fields into the local configuration namespace
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use keybridge::{Config, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::from_env()?;
//!     keybridge::startup::run(config).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod observability;
pub mod secrets;
pub mod startup;

// Re-export commonly used types and traits
pub use config::Config;
pub use errors::{Error, Result};
pub use observability::init_tracing;

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
