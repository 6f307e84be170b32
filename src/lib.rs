//! # collins-client
//!
//! A Rust client library for the Collins asset management API.
//!
//! This crate provides a type-safe, async interface for talking to a Collins
//! server: looking up assets by tag or address, searching the asset
//! inventory, listing address assignments, appending log entries, and
//! changing asset status.
//!
//! ## Features
//!
//! - 🔐 HTTP Basic Authentication on every request
//! - 🏷️ Asset lookup by tag, by network address, or by search query
//! - 🔄 Async API with Tokio runtime support
//! - 🛡️ Comprehensive error handling
//!
//! ## Example
//!
//! ```rust,no_run
//! use collins_client::CollinsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a client
//!     let client = CollinsClient::builder()
//!         .base_url("http://collins.example.com:9000")
//!         .username("blake")
//!         .password("admin:first")
//!         .build()?;
//!
//!     // Look up an asset by tag
//!     if let Some(asset) = client.assets().get("sl-102313").await? {
//!         println!("{} is {}", asset.data.asset.tag, asset.data.asset.status);
//!         for address in &asset.data.addresses {
//!             println!("  {} via {}", address.address, address.gateway);
//!         }
//!     }
//!
//!     // Record what we did
//!     client.assets().add_log("sl-102313", "NOTE", "Checked by inventory sweep").await?;
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
mod models;

pub use api::asset::AssetApi;
#[cfg(feature = "default-client")]
pub use client::{initialize, instance};
pub use client::{CollinsClient, CollinsClientBuilder};
pub use error::{CollinsError, CollinsResult};
pub use models::api_response::{ApiResponse, StatusResponse, STATUS_SUCCESS};
pub use models::asset::{
    AddressPage, Asset, AssetAddress, AssetAddresses, AssetCommon, AssetDetails, AssetPage,
    AssetResults, AssetState, AssetSummary, IpmiInfo, StatusRef,
};
