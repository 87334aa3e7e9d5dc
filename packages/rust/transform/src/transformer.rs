//! Raw record → canonical product transformation.
//!
//! Every policy here is total: a field-level problem degrades to the
//! documented default for that field, and `transform` produces a valid
//! canonical product for any raw record, including `{}`.

use std::collections::BTreeSet;

use serde_json::json;
use tracing::{debug, instrument};

use catalogforge_shared::{
    CanonicalProduct, CanonicalVariant, Metadata, ProductImage, ProductOption, RawProductRecord,
    RawVariant, STATUS_PUBLISHED, TransformDefaults, VariantOptionValue, VariantPrice,
};

use crate::handle::normalize_handle;

// ---------------------------------------------------------------------------
// Fixed match tables (ordered; first match wins)
// ---------------------------------------------------------------------------

/// Subtitle table, matched case-insensitively against the title in order.
const SUBTITLES: &[(&str, &str)] = &[
    ("BPC-157", "Body Protection Compound - Tissue Repair Research"),
    ("GHK-Cu", "Copper Peptide - Skin & Tissue Research"),
    ("Tesamorelin", "Growth Hormone-Releasing Hormone Analog"),
    ("GLP-2", "Glucagon-Like Peptide-2 - Intestinal Research"),
    ("GLP-3", "GLP-3 Receptor Agonist - Metabolic Research"),
    ("NAD+", "Nicotinamide Adenine Dinucleotide - Cellular Research"),
    ("StaRter Kit R", "Complete Research Peptide Starter Kit"),
    ("StarTer Kit T", "Tissue Research Peptide Kit"),
];

/// Controlled category vocabulary with the keywords that map into each.
/// A raw category can hit zero, one, or several rows; the result is the union.
const CATEGORY_MAP: &[(&str, &[&str])] = &[
    ("Research Peptides", &["peptide", "research", "peptides"]),
    ("Growth Factors", &["growth", "factor", "gh"]),
    ("Metabolic Compounds", &["metabolic", "glp", "glucose", "diabetes"]),
    ("Anti-Aging Research", &["anti-aging", "nad", "longevity"]),
    ("Tissue Research", &["tissue", "repair", "recovery", "bpc"]),
    ("Starter Kits", &["kit", "starter", "bundle"]),
];

/// Tags present on every product regardless of input.
const BASELINE_TAGS: &[&str] = &[
    "Research Grade",
    ">98% Purity",
    "Third-Party Tested",
    "USA Based",
    "Same-Day Shipping",
    "COA Available",
];

/// Compound markers matched against the uppercased title; each contributes
/// its own tag list.
const TAG_MARKERS: &[(&str, &[&str])] = &[
    ("BPC", &["Tissue Repair", "Recovery", "BPC-157", "Pentadecapeptide"]),
    ("GHK", &["Copper Peptide", "Skin Research", "GHK-Cu", "Tripeptide"]),
    ("TB-500", &["Thymosin", "Athletic Recovery", "TB-500"]),
    ("TESAMORELIN", &["Growth Hormone", "GHRH", "Tesamorelin"]),
    ("GLP", &["GLP Agonist", "Metabolic Research", "Diabetes Research"]),
    ("NAD", &["NAD+", "Cellular Energy", "Anti-Aging", "Coenzyme"]),
    ("KIT", &["Starter Kit", "Bundle", "Value Pack"]),
];

/// Physical defaults for a packaged vial: grams and centimeters.
const VIAL_WEIGHT_G: u32 = 50;
const VIAL_LENGTH_CM: u32 = 5;
const VIAL_HEIGHT_CM: u32 = 5;
const VIAL_WIDTH_CM: u32 = 2;

/// HS code for peptide hormones.
const HS_CODE_PEPTIDE_HORMONES: &str = "2937290090";

// ---------------------------------------------------------------------------
// Transformer
// ---------------------------------------------------------------------------

/// Converts raw scraped records into canonical products, carrying the
/// configured defaulting tables.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    defaults: TransformDefaults,
}

impl Transformer {
    pub fn new(defaults: TransformDefaults) -> Self {
        Self { defaults }
    }

    /// Transform one raw record into a canonical product.
    ///
    /// Never fails: every missing or malformed field resolves to its
    /// documented default. Enrichment fields stay empty here.
    #[instrument(skip_all, fields(record = raw.identifier()))]
    pub fn transform(&self, raw: &RawProductRecord) -> CanonicalProduct {
        let title = raw
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.defaults.placeholder_title)
            .to_string();

        let handle = self.derive_handle(raw, &title);

        // Variants: synthesize a single "Standard" one when the scrape saw none.
        let raw_variants: Vec<RawVariant> = if raw.variants.is_empty() {
            vec![RawVariant {
                size: Some("Standard".into()),
                price: Some(raw.price.unwrap_or(0.0)),
                sku: Some(raw.sku.clone().unwrap_or_else(|| {
                    format!("{}-{}", self.defaults.sku_prefix, handle.to_uppercase())
                })),
                in_stock: Some(true),
            }]
        } else {
            raw.variants.clone()
        };

        // Options exist only when more than one distinct size label does.
        let sizes: BTreeSet<String> = raw_variants
            .iter()
            .map(|v| v.size.clone().unwrap_or_else(|| "Standard".into()))
            .collect();
        let has_options = sizes.len() > 1;
        let options = has_options.then(|| {
            vec![ProductOption {
                title: "Size".into(),
                values: sizes.iter().cloned().collect(),
            }]
        });

        let variants: Vec<CanonicalVariant> = raw_variants
            .iter()
            .enumerate()
            .map(|(i, v)| self.transform_variant(v, &handle, i, has_options))
            .collect();

        let product = CanonicalProduct {
            subtitle: self.subtitle_for(&title),
            description: String::new(),
            short_description: String::new(),
            is_giftcard: false,
            status: STATUS_PUBLISHED.into(),
            thumbnail: raw.images.first().cloned(),
            images: raw
                .images
                .iter()
                .map(|url| ProductImage { url: url.clone() })
                .collect(),
            weight: VIAL_WEIGHT_G,
            length: VIAL_LENGTH_CM,
            height: VIAL_HEIGHT_CM,
            width: VIAL_WIDTH_CM,
            origin_country: "US".into(),
            hs_code: HS_CODE_PEPTIDE_HORMONES.into(),
            mid_code: "peptide".into(),
            material: "Lyophilized Powder".into(),
            product_type: "Research Peptide".into(),
            metadata: self.build_metadata(raw, &title),
            categories: self.map_categories(&raw.categories),
            tags: self.build_tags(&title, raw),
            options,
            variants,
            title,
            handle,
        };

        debug!(
            handle = %product.handle,
            variants = product.variants.len(),
            categories = product.categories.len(),
            "record transformed"
        );

        product
    }

    /// Prefer a scraper-supplied handle; else normalize the title; else the
    /// configured fallback so the handle is never empty.
    fn derive_handle(&self, raw: &RawProductRecord, title: &str) -> String {
        if let Some(h) = raw.handle.as_deref().map(str::trim).filter(|h| !h.is_empty()) {
            return h.to_string();
        }

        let normalized = normalize_handle(title);
        if normalized.is_empty() {
            self.defaults.fallback_handle.clone()
        } else {
            normalized
        }
    }

    /// First subtitle-table key that is a case-insensitive substring of the
    /// title wins; otherwise the configured default subtitle.
    fn subtitle_for(&self, title: &str) -> String {
        let haystack = title.to_lowercase();
        SUBTITLES
            .iter()
            .find(|(key, _)| haystack.contains(&key.to_lowercase()))
            .map(|(_, subtitle)| subtitle.to_string())
            .unwrap_or_else(|| self.defaults.subtitle.clone())
    }

    fn transform_variant(
        &self,
        raw: &RawVariant,
        handle: &str,
        index: usize,
        has_options: bool,
    ) -> CanonicalVariant {
        let size = raw.size.clone().unwrap_or_else(|| "Standard".into());
        let sku = raw
            .sku
            .clone()
            .unwrap_or_else(|| format!("{handle}-{index}"))
            .to_uppercase();

        let in_stock = raw.in_stock.unwrap_or(true);

        CanonicalVariant {
            sku,
            barcode: None,
            ean: None,
            upc: None,
            inventory_quantity: if in_stock {
                self.defaults.in_stock_quantity
            } else {
                0
            },
            allow_backorder: false,
            manage_inventory: true,
            requires_shipping: true,
            weight: VIAL_WEIGHT_G,
            length: VIAL_LENGTH_CM,
            height: VIAL_HEIGHT_CM,
            width: VIAL_WIDTH_CM,
            prices: vec![VariantPrice {
                currency_code: self.defaults.currency_code.clone(),
                amount: price_to_minor_units(raw.price.unwrap_or(0.0)),
            }],
            options: if has_options {
                vec![VariantOptionValue {
                    value: size.clone(),
                }]
            } else {
                vec![]
            },
            title: size,
        }
    }

    /// Specification defaults merged under scraped values (scraped wins),
    /// provenance fields, then the hardcoded compound overrides on top.
    fn build_metadata(&self, raw: &RawProductRecord, title: &str) -> Metadata {
        let specs = &raw.specifications;
        let d = &self.defaults.specs;
        let mut metadata = Metadata::new();

        let spec_or = |key: &str, default: &str| {
            json!(specs.get(key).cloned().unwrap_or_else(|| default.to_string()))
        };

        metadata.insert("purity".into(), spec_or("Purity", &d.purity));
        metadata.insert(
            "molecular_weight".into(),
            spec_or("Molecular Weight", &d.molecular_weight),
        );
        metadata.insert(
            "molecular_formula".into(),
            spec_or("Molecular Formula", &d.molecular_formula),
        );
        metadata.insert("cas_number".into(), spec_or("CAS Number", &d.cas_number));
        metadata.insert("storage".into(), spec_or("Storage", &d.storage));
        metadata.insert("form".into(), spec_or("Form", &d.form));
        metadata.insert("solubility".into(), spec_or("Solubility", &d.solubility));

        metadata.insert("coa_available".into(), json!(true));
        metadata.insert("third_party_tested".into(), json!(true));
        metadata.insert("research_use_only".into(), json!(true));
        metadata.insert(
            "original_url".into(),
            json!(raw.url.clone().unwrap_or_default()),
        );
        metadata.insert(
            "scraped_at".into(),
            json!(raw
                .scraped_at
                .clone()
                .unwrap_or_else(|| chrono::Utc::now().to_rfc3339())),
        );

        // Compound overrides win over anything scraped.
        let upper = title.to_uppercase();
        if upper.contains("BPC") {
            metadata.insert(
                "sequence".into(),
                json!("Gly-Glu-Pro-Pro-Pro-Gly-Lys-Pro-Ala-Asp-Asp-Ala-Gly-Leu-Val"),
            );
            metadata.insert("amino_acids".into(), json!(15));
            metadata.insert("class".into(), json!("Pentadecapeptide"));
        } else if upper.contains("GHK") {
            metadata.insert("sequence".into(), json!("Gly-His-Lys"));
            metadata.insert("amino_acids".into(), json!(3));
            metadata.insert("class".into(), json!("Tripeptide"));
            metadata.insert("copper_complex".into(), json!(true));
        }

        metadata
    }

    /// Union of controlled-vocabulary categories hit by any raw category
    /// keyword; the configured default category when the union is empty.
    fn map_categories(&self, raw_categories: &[String]) -> BTreeSet<String> {
        let mut mapped = BTreeSet::new();

        for raw_cat in raw_categories {
            let lowered = raw_cat.to_lowercase();
            for (standard, keywords) in CATEGORY_MAP {
                if keywords.iter().any(|kw| lowered.contains(kw)) {
                    mapped.insert((*standard).to_string());
                }
            }
        }

        if mapped.is_empty() {
            mapped.insert(self.defaults.category.clone());
        }

        mapped
    }

    /// Baseline tags + marker-table tags + literal "mg" size labels.
    /// Stored in a set so duplicates cannot exist.
    fn build_tags(&self, title: &str, raw: &RawProductRecord) -> BTreeSet<String> {
        let mut tags: BTreeSet<String> =
            BASELINE_TAGS.iter().map(|t| (*t).to_string()).collect();

        let upper = title.to_uppercase();
        for (marker, marker_tags) in TAG_MARKERS {
            if upper.contains(marker) {
                tags.extend(marker_tags.iter().map(|t| (*t).to_string()));
            }
        }

        for variant in &raw.variants {
            if let Some(size) = &variant.size {
                if size.to_lowercase().contains("mg") {
                    tags.insert(size.clone());
                }
            }
        }

        tags
    }
}

/// Convert a major-unit price to integer minor units (cents).
///
/// Half-away-from-zero rounding: plain truncation silently loses a cent on
/// values like `17.99` whose binary representation lands just under the
/// exact product.
pub fn price_to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transformer() -> Transformer {
        Transformer::default()
    }

    fn raw(name: &str) -> RawProductRecord {
        RawProductRecord {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    #[test]
    fn empty_record_still_yields_valid_product() {
        let product = transformer().transform(&RawProductRecord::default());
        assert_eq!(product.title, "Unknown Product");
        assert_eq!(product.handle, "unknown-product");
        assert_eq!(product.variants.len(), 1);
        assert!(!product.categories.is_empty());
        assert!(!product.tags.is_empty());
    }

    #[test]
    fn totality_named_record() {
        let product = transformer().transform(&raw("Tesamorelin"));
        assert!(!product.handle.is_empty());
        assert!(!product.variants.is_empty());
        assert!(!product.categories.is_empty());
    }

    #[test]
    fn synthesizes_standard_variant() {
        let mut record = raw("BPC-157");
        record.price = Some(17.99);
        let product = transformer().transform(&record);

        assert_eq!(product.variants.len(), 1);
        assert_eq!(product.variants[0].title, "Standard");
        assert_eq!(product.variants[0].sku, "PBL-BPC-157");
        assert_eq!(product.variants[0].prices[0].amount, 1799);
        assert!(product.options.is_none());
    }

    #[test]
    fn price_conversion_examples() {
        assert_eq!(price_to_minor_units(17.99), 1799);
        assert_eq!(price_to_minor_units(0.0), 0);
        assert_eq!(price_to_minor_units(149.99), 14999);
        assert_eq!(price_to_minor_units(0.005), 1);
    }

    #[test]
    fn options_present_iff_multiple_sizes() {
        let mut record = raw("GLP-3 (R*)");
        record.variants = vec![
            RawVariant {
                size: Some("10mg".into()),
                price: Some(89.99),
                sku: Some("PBL-GLP3R-10MG".into()),
                in_stock: Some(true),
            },
            RawVariant {
                size: Some("20mg".into()),
                price: Some(134.99),
                sku: None,
                in_stock: Some(false),
            },
        ];
        let product = transformer().transform(&record);

        let options = product.options.as_ref().expect("options present");
        assert_eq!(options[0].title, "Size");
        assert_eq!(options[0].values.len(), 2);

        // Every variant's option value equals its own title.
        for variant in &product.variants {
            assert_eq!(variant.options[0].value, variant.title);
        }

        // Missing SKU defaults to <handle>-<index>, uppercased.
        assert_eq!(product.variants[1].sku, "GLP-3-R-1");
        // Out-of-stock variant carries zero inventory.
        assert_eq!(product.variants[1].inventory_quantity, 0);
        assert_eq!(product.variants[0].inventory_quantity, 100);
    }

    #[test]
    fn single_size_multiple_variants_has_no_options() {
        let mut record = raw("NAD+");
        record.variants = vec![
            RawVariant {
                size: Some("100mg".into()),
                price: Some(149.99),
                sku: Some("a".into()),
                in_stock: Some(true),
            },
            RawVariant {
                size: Some("100mg".into()),
                price: Some(139.99),
                sku: Some("b".into()),
                in_stock: Some(true),
            },
        ];
        let product = transformer().transform(&record);
        assert!(product.options.is_none());
        assert!(product.variants.iter().all(|v| v.options.is_empty()));
    }

    #[test]
    fn unmapped_categories_default_to_research_peptides() {
        let mut record = raw("Mystery Compound");
        record.categories = vec!["totally off-vocabulary".into()];
        let product = transformer().transform(&record);
        assert_eq!(
            product.categories,
            BTreeSet::from(["Research Peptides".to_string()])
        );

        let empty = transformer().transform(&raw("Mystery Compound"));
        assert_eq!(
            empty.categories,
            BTreeSet::from(["Research Peptides".to_string()])
        );
    }

    #[test]
    fn one_raw_category_can_hit_multiple_standard_categories() {
        let mut record = raw("GLP-2 (T*)");
        record.categories = vec!["metabolic research peptides".into()];
        let product = transformer().transform(&record);
        assert!(product.categories.contains("Metabolic Compounds"));
        assert!(product.categories.contains("Research Peptides"));
    }

    #[test]
    fn baseline_tags_always_present() {
        let product = transformer().transform(&RawProductRecord::default());
        for tag in BASELINE_TAGS {
            assert!(product.tags.contains(*tag), "missing baseline tag {tag}");
        }
    }

    #[test]
    fn compound_and_size_tags_added() {
        let mut record = raw("BPC-157");
        record.variants = vec![RawVariant {
            size: Some("5mg".into()),
            price: Some(17.99),
            sku: None,
            in_stock: Some(true),
        }];
        let product = transformer().transform(&record);
        assert!(product.tags.contains("Tissue Repair"));
        assert!(product.tags.contains("Pentadecapeptide"));
        assert!(product.tags.contains("5mg"));
    }

    #[test]
    fn bpc_metadata_overrides_scraped_values() {
        let mut record = raw("BPC-157 5mg");
        record
            .specifications
            .insert("Molecular Formula".into(), "C62H98N16O22".into());
        let product = transformer().transform(&record);

        assert_eq!(
            product.metadata["sequence"],
            serde_json::json!("Gly-Glu-Pro-Pro-Pro-Gly-Lys-Pro-Ala-Asp-Asp-Ala-Gly-Leu-Val")
        );
        assert_eq!(product.metadata["amino_acids"], serde_json::json!(15));
        // Scraped spec survives for the non-overridden key.
        assert_eq!(
            product.metadata["molecular_formula"],
            serde_json::json!("C62H98N16O22")
        );
    }

    #[test]
    fn ghk_metadata_marks_copper_complex() {
        let product = transformer().transform(&raw("GHK-Cu 50mg"));
        assert_eq!(product.metadata["class"], serde_json::json!("Tripeptide"));
        assert_eq!(product.metadata["copper_complex"], serde_json::json!(true));
    }

    #[test]
    fn scraped_specs_win_over_defaults() {
        let mut record = raw("NAD+");
        record.specifications.insert("Purity".into(), ">99%".into());
        let product = transformer().transform(&record);
        assert_eq!(product.metadata["purity"], serde_json::json!(">99%"));
        // Untouched keys keep their defaults.
        assert_eq!(
            product.metadata["storage"],
            serde_json::json!("Store at -20°C")
        );
    }

    #[test]
    fn subtitle_table_first_match_wins() {
        let t = transformer();
        let product = t.transform(&raw("GLP-2 (T*) 30mg"));
        assert_eq!(
            product.subtitle,
            "Glucagon-Like Peptide-2 - Intestinal Research"
        );

        let unmatched = t.transform(&raw("Mystery Compound"));
        assert_eq!(unmatched.subtitle, "Premium Research-Grade Peptide");
    }

    #[test]
    fn scraper_supplied_handle_is_preferred() {
        let mut record = raw("NAD+");
        record.handle = Some("nad-plus".into());
        let product = transformer().transform(&record);
        assert_eq!(product.handle, "nad-plus");

        let derived = transformer().transform(&raw("NAD+"));
        assert_eq!(derived.handle, "nad");
    }

    #[test]
    fn thumbnail_is_first_image() {
        let mut record = raw("BPC-157");
        record.images = vec![
            "https://cdn.example.com/bpc-1.jpg".into(),
            "https://cdn.example.com/bpc-2.jpg".into(),
        ];
        let product = transformer().transform(&record);
        assert_eq!(
            product.thumbnail.as_deref(),
            Some("https://cdn.example.com/bpc-1.jpg")
        );
        assert_eq!(product.images.len(), 2);
    }

    #[test]
    fn configured_defaults_are_respected() {
        let mut config = catalogforge_shared::AppConfig::default();
        config.defaults.sku_prefix = "ACME".into();
        config.defaults.in_stock_quantity = 25;
        config.specifications.purity = ">95%".into();

        let t = Transformer::new(TransformDefaults::from(&config));
        let product = t.transform(&raw("Obscurin"));
        assert_eq!(product.variants[0].sku, "ACME-OBSCURIN");
        assert_eq!(product.variants[0].inventory_quantity, 25);
        assert_eq!(product.metadata["purity"], serde_json::json!(">95%"));
    }
}
