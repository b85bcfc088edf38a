//! PhoneFlip marketplace service
//!
//! HTTP/JSON backend for a used-phone marketplace: browsing and filtering
//! listings, posting and managing them, per-user wishlists with price
//! alerts, and mock authentication backed by opaque session tokens.

pub mod config;
pub mod error;
pub mod guide;
pub mod middleware;
pub mod models;
pub mod query;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod session;
pub mod state;
pub mod validation;

pub use routes::create_router;
pub use state::AppState;
