//! # Fallback Datasets
//!
//! Bundled static data substituted when a remote catalog fetch fails.
//!
//! These are display-quality samples, not caches: they exist so the
//! storefront keeps rendering something sensible in degraded mode.
//! Prices are in minor units (poisha).

use medigo_core::{Banner, Category, Product};

fn product(
    id: &str,
    name: &str,
    generic_name: &str,
    brand: &str,
    price_cents: i64,
    category: &str,
    in_stock: bool,
    prescription_required: bool,
    rating: f64,
    description: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        generic_name: Some(generic_name.to_string()),
        brand: Some(brand.to_string()),
        price_cents,
        category: category.to_string(),
        in_stock,
        prescription_required,
        rating: Some(rating),
        description: Some(description.to_string()),
    }
}

/// The bundled pharmacy catalog used when the product fetch fails.
pub fn fallback_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Paracetamol 500mg",
            "Acetaminophen",
            "Square Pharmaceutical",
            12_000,
            "Pain Relief",
            true,
            false,
            4.5,
            "Effective pain and fever relief",
        ),
        product(
            "2",
            "Vitamin D3 2000IU",
            "Cholecalciferol",
            "Incepta Pharmaceuticals",
            35_000,
            "Vitamins",
            true,
            false,
            4.7,
            "Essential for bone health and immunity",
        ),
        product(
            "3",
            "Omeprazole 20mg",
            "Omeprazole",
            "Beximco Pharma",
            28_000,
            "Digestive",
            true,
            true,
            4.3,
            "Relieves heartburn and acid reflux",
        ),
        product(
            "4",
            "Metformin 500mg",
            "Metformin HCl",
            "Square Pharmaceutical",
            9_500,
            "Diabetes",
            true,
            true,
            4.6,
            "Manages blood sugar levels",
        ),
        product(
            "5",
            "Amoxicillin 500mg",
            "Amoxicillin",
            "Incepta Pharmaceuticals",
            18_000,
            "Prescription",
            true,
            true,
            4.4,
            "Antibiotic for bacterial infections",
        ),
        product(
            "6",
            "Cetirizine 10mg",
            "Cetirizine HCl",
            "Beximco Pharma",
            6_500,
            "Cold & Flu",
            true,
            false,
            4.2,
            "Relieves allergy symptoms",
        ),
        product(
            "7",
            "Ibuprofen 400mg",
            "Ibuprofen",
            "Square Pharmaceutical",
            14_000,
            "Pain Relief",
            false,
            false,
            4.5,
            "Anti-inflammatory pain relief",
        ),
        product(
            "8",
            "Calcium + Vitamin D",
            "Calcium Carbonate",
            "Incepta Pharmaceuticals",
            42_000,
            "Vitamins",
            true,
            false,
            4.6,
            "Bone health supplement",
        ),
    ]
}

/// The bundled category list used when the category fetch fails.
pub fn fallback_categories() -> Vec<Category> {
    ["Vitamins", "Pain Relief", "Digestive", "Cold & Flu", "Diabetes"]
        .iter()
        .enumerate()
        .map(|(i, name)| Category::new((i + 1).to_string(), *name))
        .collect()
}

/// The default hero banner set used when no banner list is supplied.
pub fn default_banners() -> Vec<Banner> {
    vec![
        Banner {
            id: "1".to_string(),
            title: "Get 30% Off on Your First Order".to_string(),
            subtitle: Some("Limited time offer on all medicines".to_string()),
            image: Some("/banners/banner1.jpg".to_string()),
            cta_text: Some("Shop Now".to_string()),
            cta_link: Some("/pharmacy".to_string()),
            active: true,
        },
        Banner {
            id: "2".to_string(),
            title: "Free Home Sample Collection".to_string(),
            subtitle: Some("Book lab tests with zero collection charges".to_string()),
            image: Some("/banners/banner2.jpg".to_string()),
            cta_text: Some("Book Lab Test".to_string()),
            cta_link: Some("/lab-tests".to_string()),
            active: true,
        },
        Banner {
            id: "3".to_string(),
            title: "Video Consultation Available 24/7".to_string(),
            subtitle: Some("Connect with certified doctors anytime".to_string()),
            image: Some("/banners/banner3.jpg".to_string()),
            cta_text: Some("Consult Now".to_string()),
            cta_link: Some("/consult".to_string()),
            active: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use medigo_core::{ProductFilter, CATEGORY_ALL};

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_square_brand_search_over_all_categories() {
        let filter = ProductFilter {
            search: "Square".to_string(),
            category: CATEGORY_ALL.to_string(),
        };
        let hits = filter.apply(&fallback_products());
        // Paracetamol, Metformin, Ibuprofen - all brand "Square Pharmaceutical"
        assert_eq!(ids(&hits), vec!["1", "4", "7"]);
    }

    #[test]
    fn test_vitamins_category_with_empty_search() {
        let filter = ProductFilter {
            search: String::new(),
            category: "Vitamins".to_string(),
        };
        let hits = filter.apply(&fallback_products());
        assert_eq!(ids(&hits), vec!["2", "8"]);
    }

    #[test]
    fn test_no_match_search_is_empty_for_any_category() {
        for category in [CATEGORY_ALL, "Vitamins", "Pain Relief", "Prescription"] {
            let filter = ProductFilter {
                search: "zzz-no-match".to_string(),
                category: category.to_string(),
            };
            assert!(filter.apply(&fallback_products()).is_empty());
        }
    }

    #[test]
    fn test_dataset_shape() {
        assert_eq!(fallback_products().len(), 8);
        assert_eq!(fallback_categories().len(), 5);
        let banners = default_banners();
        assert_eq!(banners.len(), 3);
        assert!(banners.iter().all(|b| b.active));
    }
}
