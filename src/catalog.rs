//! Catalog collaborator interface, plus the in-memory demo catalog.
//!
//! The refinement engine itself never touches product data; it produces a
//! `FilterState` and the surrounding application queries its catalog with
//! it. `Catalog` is that seam. `DemoCatalog` is the hard-coded fixture
//! backing the REPL binary and the integration tests.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub brand: String,
    pub category: String,
    /// Free-form descriptor tags (material, style, origin).
    pub tags: Vec<String>,
    pub price: f64,
}

// ---------------------------------------------------------------------------
// Catalog seam
// ---------------------------------------------------------------------------

/// Catalog query capability consumed by the surrounding application.
pub trait Catalog {
    /// Products in `category` carrying **all** of `include_tags`, at most
    /// `limit` of them, in catalog order.
    fn query(&self, category: &str, include_tags: &[String], limit: usize) -> Vec<Product>;
}

/// Drop products carrying any of `exclude_tags`.
pub fn exclude_by_tags(products: Vec<Product>, exclude_tags: &[String]) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| !p.tags.iter().any(|t| exclude_tags.contains(t)))
        .collect()
}

// ---------------------------------------------------------------------------
// DemoCatalog — mocked fixture data
// ---------------------------------------------------------------------------

/// In-memory catalog with a handful of products per category.
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    products: Vec<Product>,
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoCatalog {
    pub fn new() -> Self {
        let mut products = Vec::new();
        let mut add = |name: &str, brand: &str, category: &str, tags: &[&str], price: f64| {
            products.push(Product {
                name: name.to_string(),
                brand: brand.to_string(),
                category: category.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                price,
            });
        };

        add("Sea Salt Chips", "Crunch Co", "Snacks", &["local", "plastic"], 4.50);
        add("Chili Mango Strips", "Sunset Pantry", "Snacks", &["organic", "small"], 6.00);
        add("Rosemary Crackers", "Crunch Co", "Snacks", &["organic", "local", "paper"], 5.25);
        add("Dark Chocolate Almonds", "Velvet Cocoa", "Snacks", &["premium", "glass"], 9.75);
        add("Honey Sesame Sticks", "Sunset Pantry", "Snacks", &["local", "cheap"], 3.50);
        add("Seaweed Crisps", "Tide & Thyme", "Snacks", &["organic", "light"], 5.00);

        add("Hibiscus Iced Tea", "Brooklyn Brew Lab", "Beverages", &["brooklyn", "organic", "glass"], 5.50);
        add("Cold Brew Coffee", "Brooklyn Brew Lab", "Beverages", &["brooklyn", "local", "glass"], 6.50);
        add("Yuzu Sparkling Water", "Fizz Works", "Beverages", &["premium", "metal"], 4.00);
        add("Ginger Switchel", "Orchard Cellar", "Beverages", &["local", "organic", "glass"], 7.00);
        add("Oat Milk Chai", "Fizz Works", "Beverages", &["organic", "paper"], 5.75);

        add("Lavender Soap Bar", "Stone & Suds", "Bath Products", &["handmade", "local", "paper"], 8.00);
        add("Charcoal Face Wash", "Stone & Suds", "Bath Products", &["premium", "plastic"], 12.00);
        add("Eucalyptus Bath Salts", "Mineral Grove", "Bath Products", &["organic", "glass"], 10.50);
        add("Shea Hand Cream", "Mineral Grove", "Bath Products", &["woman-owned", "metal"], 9.00);
        add("Oat Milk Bath Soak", "Stone & Suds", "Bath Products", &["handmade", "organic", "paper"], 11.25);

        add("Linen Travel Kit", "Field Supply", "Amenities", &["sustainable", "fair-trade"], 18.00);
        add("Bamboo Toothbrush", "Field Supply", "Amenities", &["sustainable", "cheap"], 3.00);
        add("Wool Sleep Mask", "Drift Goods", "Amenities", &["woman-owned", "premium"], 14.00);

        add("Dot Grid Notebook", "Paper Meridian", "Stationery", &["paper", "local"], 12.50);
        add("Brass Pen", "Paper Meridian", "Stationery", &["metal", "premium", "heavy"], 28.00);
        add("Recycled Letter Set", "Second Press", "Stationery", &["paper", "sustainable", "cheap"], 7.50);

        add("Lavender Candle", "Wick & Wane", "Candles", &["handmade", "glass"], 16.00);
        add("Cedar Smoke Candle", "Wick & Wane", "Candles", &["handmade", "premium", "glass"], 19.00);
        add("Beeswax Tapers", "Hive Light", "Candles", &["local", "organic"], 11.00);

        add("Ceramic Bud Vase", "Kiln House", "Decor", &["handmade", "heavy"], 22.00);
        add("Woven Wall Hanging", "Loom District", "Decor", &["woman-owned", "fair-trade", "large"], 45.00);
        add("Mini Terrazzo Tray", "Kiln House", "Decor", &["handmade", "small"], 15.00);

        Self { products }
    }

    /// Every product in a category, unfiltered.
    pub fn category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }
}

impl Catalog for DemoCatalog {
    fn query(&self, category: &str, include_tags: &[String], limit: usize) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .filter(|p| include_tags.iter().all(|t| p.tags.contains(t)))
            .take(limit)
            .cloned()
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
