//! # Riksbank Client
//!
//! Async client for Sveriges Riksbank's Monetary Policy Data API.
//!
//! The API publishes forecast and observation data for Swedish economic
//! indicators, keyed by series identifier and policy round. This crate wraps
//! the three forecast endpoints (`policy_rounds`, `series`, `data`) behind a
//! single retry-capable request helper and returns the raw JSON payloads
//! unchanged.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use riksbank_client::{RiksbankClient, RiksbankResult};
//!
//! #[tokio::main]
//! async fn main() -> RiksbankResult<()> {
//!     let client = RiksbankClient::new()?;
//!
//!     // Discover available forecast rounds
//!     let rounds = client.policy_rounds().await?;
//!     println!("{rounds}");
//!
//!     // Fetch CPIF inflation for a specific round
//!     let data = client.policy_data("SEMCPIFNAYNA", Some("2024:3")).await?;
//!     println!("{data}");
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;

// Re-export main client
pub use catalog::{SeriesInfo, SERIES_CATALOG};
pub use client::RiksbankClient;
pub use config::{ClientConfig, RetryConfig, DEFAULT_BASE_URL};
pub use error::{RiksbankError, RiksbankResult};
