//! Core domain types for the catalog pipeline.
//!
//! [`RawProductRecord`] is the untrusted shape handed over by the acquisition
//! side; everything may be missing and unknown fields are ignored.
//! [`CanonicalProduct`] / [`CanonicalVariant`] form the normalized schema the
//! commerce platform imports.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Product status emitted for every canonical product.
pub const STATUS_PUBLISHED: &str = "published";

/// Metadata values are heterogeneous (strings, counts, booleans), so the
/// metadata map stores loosely-typed JSON values.
pub type Metadata = BTreeMap<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// Raw (untrusted) input shape
// ---------------------------------------------------------------------------

/// A single scraped variant row. Every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawVariant {
    /// Size label, e.g. `"5mg"` or `"Kit"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Price in major currency units (dollars).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

/// One scraped product record, exactly as the acquisition side produced it.
///
/// Unknown extra fields in the source document are ignored on deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProductRecord {
    /// Display name. Missing names degrade to a placeholder title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Pre-computed handle, if the scraper derived one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Base price in major currency units; used when no variants exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<RawVariant>,
    /// Free-text specification table (key → value) from the product page.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub specifications: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Provenance: source page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Provenance: ISO 8601 timestamp of the scrape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scraped_at: Option<String>,
}

impl RawProductRecord {
    /// Best-effort identifier for logs and failure reports.
    pub fn identifier(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.handle.as_deref())
            .or(self.sku.as_deref())
            .unwrap_or("<unnamed record>")
    }
}

// ---------------------------------------------------------------------------
// Canonical output schema
// ---------------------------------------------------------------------------

/// A single price row on a canonical variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantPrice {
    /// Lowercase ISO currency code, e.g. `"usd"`.
    pub currency_code: String,
    /// Amount in integer minor units (cents).
    pub amount: i64,
}

/// The option value a variant carries when its product has options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOptionValue {
    pub value: String,
}

/// A product-level option axis (currently only "Size").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub title: String,
    pub values: Vec<String>,
}

/// A product image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
}

/// A normalized sellable variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalVariant {
    /// Size label doubling as the variant title.
    pub title: String,
    /// Uppercased stock-keeping unit.
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    /// 100 when the scrape saw the variant in stock, otherwise 0.
    pub inventory_quantity: u32,
    pub allow_backorder: bool,
    pub manage_inventory: bool,
    pub requires_shipping: bool,
    /// Physical defaults for a lyophilized vial (grams / cm).
    pub weight: u32,
    pub length: u32,
    pub height: u32,
    pub width: u32,
    pub prices: Vec<VariantPrice>,
    /// Present iff the owning product has options; single value equal to
    /// this variant's own title.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<VariantOptionValue>,
}

/// A fully normalized catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalProduct {
    /// Display title; never empty.
    pub title: String,
    pub subtitle: String,
    /// Long-form enrichment text; empty until the renderer runs.
    #[serde(default)]
    pub description: String,
    /// Short-form enrichment text; empty until the renderer runs.
    #[serde(default)]
    pub short_description: String,
    /// URL-safe slug, derived deterministically from the title.
    pub handle: String,
    pub is_giftcard: bool,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ProductImage>,
    pub weight: u32,
    pub length: u32,
    pub height: u32,
    pub width: u32,
    pub origin_country: String,
    /// Harmonized System code for peptide hormones.
    pub hs_code: String,
    pub mid_code: String,
    pub material: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub metadata: Metadata,
    /// Standardized categories; never empty, never raw category text.
    pub categories: BTreeSet<String>,
    /// Search/filter tags; a set so duplicates are structurally impossible.
    pub tags: BTreeSet<String>,
    /// Present iff more than one distinct variant size exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,
    /// Never empty; a "Standard" variant is synthesized when the raw record
    /// had none.
    pub variants: Vec<CanonicalVariant>,
}

impl CanonicalProduct {
    /// Whether this product has been through the enrichment renderer.
    pub fn is_enriched(&self) -> bool {
        !self.description.is_empty() && !self.short_description.is_empty()
    }
}
