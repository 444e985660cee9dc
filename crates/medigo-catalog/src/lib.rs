//! # medigo-catalog: Remote Catalog Access + Degraded-Mode Fallback
//!
//! Everything the storefront knows about talking to the catalog backend
//! lives here: the HTTP client, its configuration, the bundled fallback
//! datasets, and the fetch-with-fallback service the screens call.
//!
//! ## Failure Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Fetch-With-Fallback Policy                           │
//! │                                                                         │
//! │  load_products(filter)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET /products?search=..&category=..     (remote does the filtering)   │
//! │       │                                                                 │
//! │       ├── 200 ──► Fetched::Live(products)                              │
//! │       │                                                                 │
//! │       └── error ─► warn! + local filter over bundled dataset           │
//! │                    Fetched::Fallback { data, error }                   │
//! │                                                                         │
//! │  Errors are never surfaced to the user as blocking failures.           │
//! │  No retry, no backoff, no cancellation - one attempt per load.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers that need to tell degraded mode apart from a genuinely empty
//! result inspect [`Fetched::is_fallback`].

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod service;

pub use client::{CatalogApi, CategoryQuery, HttpCatalogClient, ProductQuery};
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use service::{CatalogService, Fetched};
