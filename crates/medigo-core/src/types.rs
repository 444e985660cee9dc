//! # Domain Types
//!
//! Core domain types used throughout the Medigo storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Banner      │   │    Category     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name/brand     │   │  title/subtitle │   │  name           │       │
//! │  │  price_cents    │   │  cta_text/link  │   │  product_count  │       │
//! │  │  category       │   │  active         │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types serialize as camelCase for the TypeScript frontend and carry
//! `ts-rs` derives so the bindings never drift from the Rust definitions.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Banner
// =============================================================================

/// A promotional hero banner.
///
/// ## Lifecycle
/// Banners arrive as static configuration or from the admin banner list.
/// The carousel never mutates them; only banners with `active == true`
/// participate in rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Banner {
    /// Unique identifier.
    pub id: String,

    /// Headline shown on the slide.
    pub title: String,

    /// Secondary line under the headline.
    pub subtitle: Option<String>,

    /// Background image reference (path or URL).
    pub image: Option<String>,

    /// Call-to-action button label ("Shop Now").
    pub cta_text: Option<String>,

    /// Call-to-action destination ("/pharmacy").
    pub cta_link: Option<String>,

    /// Whether this banner participates in rotation.
    pub active: bool,
}

impl Banner {
    /// Creates a minimal active banner. Mostly useful in tests and defaults.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Banner {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            image: None,
            cta_text: None,
            cta_link: None,
            active: true,
        }
    }
}

// =============================================================================
// Slide Direction
// =============================================================================

/// The direction of the most recent slide transition.
///
/// The rendering layer uses this to pick the enter/exit animation side;
/// the controller only records it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SlideDirection {
    /// Slide moved towards the previous entry.
    Backward,
    /// No transition yet (initial state, or go_to onto the current slide).
    #[default]
    None,
    /// Slide moved towards the next entry.
    Forward,
}

// =============================================================================
// Product
// =============================================================================

/// A pharmacy catalog product.
///
/// Immutable from this layer's perspective; owned by the remote catalog
/// service. The local copy exists only for display and fallback filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name ("Paracetamol 500mg").
    pub name: String,

    /// Generic/pharmacological name ("Acetaminophen").
    pub generic_name: Option<String>,

    /// Manufacturer brand ("Square Pharmaceutical").
    pub brand: Option<String>,

    /// Price in minor currency units (poisha). Never a float.
    pub price_cents: i64,

    /// Category name, matched exactly by the category filter.
    pub category: String,

    /// Whether the product can currently be ordered.
    pub in_stock: bool,

    /// Whether a verified prescription is required to order.
    pub prescription_required: bool,

    /// Average customer rating, display only.
    pub rating: Option<f64>,

    /// Short marketing description.
    pub description: Option<String>,
}

// =============================================================================
// Category
// =============================================================================

/// A product category as served by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Number of products in the category (0 when unknown).
    pub product_count: u32,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Category {
            id: id.into(),
            name: name.into(),
            product_count: 0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
