//! # medigo-core: Pure UI/Domain Logic for the Medigo Storefront
//!
//! This crate is the **heart** of the storefront. It contains the client-side
//! logic with algorithmic content (carousel rotation, catalog filtering,
//! upload validation) as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Medigo Storefront Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Screens (medigo-screens)                          │   │
//! │  │    Pharmacy ──► Hero Banner ──► Admin Layout ──► Settings      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               Catalog Access (medigo-catalog)                   │   │
//! │  │    HTTP client ──► fetch ──► on failure: bundled fallback      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ medigo-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ carousel  │  │  filter   │  │ validation│  │   │
//! │  │   │  Banner   │  │ Carousel  │  │  Product  │  │  Upload   │  │   │
//! │  │   │  Product  │  │  state    │  │  Filter   │  │  Policy   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Banner, Product, Category, ProductFilter)
//! - [`carousel`] - Cyclic slide state machine for the hero banner
//! - [`filter`] - Search + category filter predicates for the catalog
//! - [`validation`] - Upload policy and settings validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, timers, file system access is FORBIDDEN here
//! 3. **Integer Money**: Prices are in minor units (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use medigo_core::carousel::Carousel;
//! use medigo_core::types::Banner;
//!
//! let banners = vec![
//!     Banner::new("1", "Get 30% Off on Your First Order"),
//!     Banner::new("2", "Free Home Sample Collection"),
//! ];
//!
//! let mut carousel = Carousel::new(banners);
//! carousel.next();
//! assert_eq!(carousel.current_index(), 1);
//! carousel.next(); // wraps
//! assert_eq!(carousel.current_index(), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod carousel;
pub mod error;
pub mod filter;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use medigo_core::Carousel` instead of
// `use medigo_core::carousel::Carousel`

pub use carousel::Carousel;
pub use error::{CoreError, ValidationError};
pub use filter::ProductFilter;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The distinguished category filter value meaning "no category constraint".
///
/// ## Why a constant?
/// The sentinel travels between the filter bar, the remote query builder
/// (where it is translated to "send no category parameter") and the local
/// fallback predicate. One definition keeps all three in agreement.
pub const CATEGORY_ALL: &str = "All";

/// Default auto-advance interval for the hero banner carousel, milliseconds.
pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 5_000;

/// Default page size for catalog product queries.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page size for the featured-products strip.
pub const FEATURED_PAGE_SIZE: u32 = 8;

/// Maximum accepted prescription upload size (10 MiB).
///
/// ## Business Reason
/// Matches the limit enforced by the upload widget: prescription photos and
/// PDFs above this size are rejected before any network transfer happens.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
