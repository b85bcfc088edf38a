//! Common library for the PhoneFlip marketplace
//!
//! This crate provides the key-value persistence port shared by the
//! services, its in-memory, file and Redis backends, and the store error
//! type.
//!
//! ```rust,no_run
//! use common::{StoreConfig, open_store};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = open_store(&StoreConfig::default()).await?;
//!     let is_healthy = store.health_check().await?;
//!     println!("Store health check: {}", is_healthy);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod file_store;
pub mod memory;
pub mod redis_store;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{
    KeyValueStore, SharedStore, StoreBackend, StoreConfig, load_json, open_store, save_json,
};
