//! # Catalog Filter
//!
//! Search + category filtering for the pharmacy catalog.
//!
//! ## Where This Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Filter Paths                              │
//! │                                                                         │
//! │  PRIMARY PATH (live)                                                    │
//! │  ───────────────────                                                    │
//! │  ProductFilter ──► remote query params ──► backend does the filtering  │
//! │  ("All" category is translated to "send no category parameter")        │
//! │                                                                         │
//! │  DEGRADED PATH (fallback)                                               │
//! │  ────────────────────────                                               │
//! │  Remote fetch failed ──► THIS MODULE filters the bundled dataset       │
//! │  locally with the same semantics the backend applies                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Predicate Semantics
//! - Search: case-insensitive substring over name, generic name, and brand;
//!   empty search matches everything
//! - Category: the `"All"` sentinel matches everything, otherwise exact
//!   case-sensitive equality on the product's category
//! - Combined result is the logical AND, stable (input order preserved)

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;
use crate::CATEGORY_ALL;

/// The catalog filter state: one search box, one category selector.
///
/// Drives a derived, recomputed-on-change result list; there is no persisted
/// identity. Defaults to unconstrained (`""` search, `"All"` category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductFilter {
    /// Free-text search over name, generic name, and brand.
    pub search: String,

    /// Selected category, `"All"` meaning no constraint.
    pub category: String,
}

impl Default for ProductFilter {
    fn default() -> Self {
        ProductFilter {
            search: String::new(),
            category: CATEGORY_ALL.to_string(),
        }
    }
}

impl ProductFilter {
    /// An unconstrained filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when neither predicate constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.search.trim().is_empty() && self.category == CATEGORY_ALL
    }

    /// True when the category selector carries the `"All"` sentinel.
    pub fn is_all_categories(&self) -> bool {
        self.category == CATEGORY_ALL
    }

    /// Resets both predicates ("Clear Filters").
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a product passes the search predicate.
    fn matches_search(&self, product: &Product) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let haystack_hit = |text: &str| text.to_lowercase().contains(&needle);

        haystack_hit(&product.name)
            || product.generic_name.as_deref().is_some_and(haystack_hit)
            || product.brand.as_deref().is_some_and(haystack_hit)
    }

    /// Whether a product passes the category predicate.
    ///
    /// Exact, case-sensitive equality; categories are backend-owned values,
    /// not free text.
    fn matches_category(&self, product: &Product) -> bool {
        self.is_all_categories() || product.category == self.category
    }

    /// Whether a product passes both predicates.
    ///
    /// AND of two independent predicates, so application order cannot matter.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.matches_category(product)
    }

    /// Filters a product set, preserving the input order (no re-sort).
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, generic: &str, brand: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            generic_name: Some(generic.to_string()),
            brand: Some(brand.to_string()),
            price_cents: 10_000,
            category: category.to_string(),
            in_stock: true,
            prescription_required: false,
            rating: None,
            description: None,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product("1", "Paracetamol 500mg", "Acetaminophen", "Square Pharmaceutical", "Pain Relief"),
            product("2", "Vitamin D3 2000IU", "Cholecalciferol", "Incepta Pharmaceuticals", "Vitamins"),
            product("3", "Omeprazole 20mg", "Omeprazole", "Beximco Pharma", "Digestive"),
        ]
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = ProductFilter::new();
        assert!(filter.is_unconstrained());
        assert_eq!(filter.apply(&sample()).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filter = ProductFilter {
            search: "PARACET".to_string(),
            ..Default::default()
        };
        let hits = filter.apply(&sample());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn test_search_covers_generic_name_and_brand() {
        let by_generic = ProductFilter {
            search: "cholecalciferol".to_string(),
            ..Default::default()
        };
        assert_eq!(by_generic.apply(&sample())[0].id, "2");

        let by_brand = ProductFilter {
            search: "beximco".to_string(),
            ..Default::default()
        };
        assert_eq!(by_brand.apply(&sample())[0].id, "3");
    }

    #[test]
    fn test_category_is_exact_and_case_sensitive() {
        let filter = ProductFilter {
            search: String::new(),
            category: "vitamins".to_string(), // wrong case: no match
        };
        assert!(filter.apply(&sample()).is_empty());

        let filter = ProductFilter {
            search: String::new(),
            category: "Vitamins".to_string(),
        };
        assert_eq!(filter.apply(&sample()).len(), 1);
    }

    #[test]
    fn test_combined_filter_is_intersection_and_stable() {
        let filter = ProductFilter {
            search: "m".to_string(), // matches all three names
            category: "Pain Relief".to_string(),
        };
        let hits = filter.apply(&sample());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        // Order preservation on a wider match.
        let wide = ProductFilter {
            search: "o".to_string(),
            ..Default::default()
        };
        let ids: Vec<String> = wide.apply(&sample()).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_predicate_order_is_commutative() {
        let filter = ProductFilter {
            search: "pharma".to_string(),
            category: "Digestive".to_string(),
        };
        let products = sample();

        // category-then-search
        let category_only = ProductFilter {
            search: String::new(),
            category: filter.category.clone(),
        };
        let search_only = ProductFilter {
            search: filter.search.clone(),
            category: CATEGORY_ALL.to_string(),
        };
        let a = search_only.apply(&category_only.apply(&products));
        // search-then-category
        let b = category_only.apply(&search_only.apply(&products));

        assert_eq!(a, b);
        assert_eq!(a, filter.apply(&products));
    }

    #[test]
    fn test_clear_resets_to_default() {
        let mut filter = ProductFilter {
            search: "ibu".to_string(),
            category: "Pain Relief".to_string(),
        };
        filter.clear();
        assert!(filter.is_unconstrained());
    }
}
