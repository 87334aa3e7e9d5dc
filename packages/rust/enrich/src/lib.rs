//! Enrichment renderer: templated long-form and short-form product copy.
//!
//! Both renderers are pure interpolations of a fixed template from the
//! product's normalized fields and its knowledge base entry. All KB fields
//! carry usable content (the fallback entry bakes in per-field defaults), so
//! the only failure mode is an empty product title — that would produce
//! syntactically broken text and is reported instead.

use chrono::Utc;
use tracing::instrument;

use catalogforge_kb::KnowledgeBaseEntry;
use catalogforge_shared::{CanonicalProduct, CanonicalVariant, CatalogError, Result};

/// Render the long-form product description.
#[instrument(skip_all, fields(handle = %product.handle))]
pub fn render_long(product: &CanonicalProduct, entry: &KnowledgeBaseEntry) -> Result<String> {
    let name = require_title(product)?;

    let purity = meta_str(product, "purity", ">98%");
    let form = meta_str(product, "form", "Lyophilized powder");
    let storage = meta_str(
        product,
        "storage",
        "-20°C (long-term), 2-8°C (short-term after reconstitution)",
    );

    let applications = bullet_list(&entry.research_applications);
    let related = bullet_list(&entry.related_compounds);
    let variants = format_variants(&product.variants);
    let keyword_tail = entry.keywords.join(" ");
    let updated = Utc::now().format("%B %Y");

    let text = format!(
        "## {name} - Premium Research-Grade Peptide

### Overview
{name} is a {class} supplied by Premier Bio Labs with verified {purity} purity through \
independent third-party HPLC testing. Our research-grade {name} is manufactured in ISO \
9001:2015 certified facilities using advanced solid-phase peptide synthesis (SPPS) \
technology, ensuring consistent quality and structural integrity for demanding laboratory \
applications.

{overview}

### Scientific Background
{background}

### Research Applications
{name} is utilized in various research contexts including:

{applications}

### Product Specifications
- **Purity**: {purity} (verified by HPLC)
- **Form**: {form}
- **Storage**: {storage}
- **Molecular Formula**: {formula}
- **Molecular Weight**: {weight}
- **CAS Number**: {cas}
- **Sequence**: {sequence}

### Quality Assurance
Every batch of {name} undergoes rigorous quality control:

✓ **Third-Party HPLC Analysis** - Independent verification of purity and composition
✓ **Mass Spectrometry** - Confirms exact molecular weight and structure
✓ **Certificate of Analysis (COA)** - Available for every batch, published openly
✓ **Endotoxin Testing** - Ensures research-grade cleanliness (<1.0 EU/mg)
✓ **Sterility Verification** - Tested for bacterial/fungal contamination

### Shipping & Handling
- **Same-Day Dispatch**: Orders placed before 2 PM EST ship same day
- **Cold Chain Logistics**: Temperature-controlled packaging with gel ice packs
- **Domestic Shipping**: 1-3 business days (USA)
- **International Shipping**: Available where permitted by local regulations
- **Tracking Provided**: Full tracking information for all shipments

### Reconstitution Guidelines
For optimal research results, {name} should be reconstituted following these guidelines:
1. Use bacteriostatic water (0.9% benzyl alcohol) or sterile water for injection
2. Recommended concentration: {reconstitution}
3. Add water slowly to the vial wall, not directly on the lyophilized powder
4. Gently swirl the vial - avoid vigorous shaking which may damage the peptide
5. Allow 5-10 minutes for complete dissolution
6. Once reconstituted, store at 2-8°C and use within {stability_reconstituted}

### Handling Precautions
- Use aseptic techniques when handling
- Avoid repeated freeze-thaw cycles
- Protect from light and moisture
- Use calibrated micropipettes for accurate dosing
- Document batch numbers for research reproducibility

### Research Compliance Notice
⚠️ **IMPORTANT**: {name} is strictly for *in vitro* laboratory research use only. This \
product is **NOT** approved by the FDA for human consumption, therapeutic use, or \
veterinary applications. Not for use in humans or animals. Researchers must comply with \
all applicable institutional guidelines and regulations. Age verification (21+) required \
for purchase.

### Why Choose Premier Bio Labs?
- **Verified Purity**: Every batch tested with published COAs
- **USA-Based**: Domestic manufacturing and customer support
- **Fast Shipping**: Same-day dispatch for qualifying orders
- **Transparent Testing**: No selective reporting or data gatekeeping
- **Research Excellence**: Trusted by laboratories worldwide
- **Competitive Pricing**: Direct-to-researcher pricing model
- **Secure Packaging**: Tamper-evident vials with lot tracking

### Available Sizes
{variants}

### Related Research Peptides
Researchers studying {name} often explore complementary compounds:
{related}

### Storage Stability
- **Lyophilized**: {stability_lyophilized}
- **Reconstituted**: {stability_reconstituted}
- **Working Solution**: {stability_working}

### Research References
This product is intended for research use only. Researchers are encouraged to review \
current literature and conduct appropriate safety assessments before use.

---

**Keywords**: {name} research peptide, buy {name} online USA, {name} {purity} purity, \
{name} with COA, {name} third-party tested, research-grade {name}, {name} for laboratory \
use, {keyword_tail}

**Product Page Last Updated**: {updated}
**Latest Batch Tested**: Within last 30 days
**Next Restock**: In stock - Ships immediately",
        name = name,
        class = entry.compound_class,
        overview = entry.overview,
        background = entry.scientific_background,
        formula = entry.molecular_formula,
        weight = entry.molecular_weight,
        cas = entry.cas_number,
        sequence = entry.sequence,
        reconstitution = entry.reconstitution_concentration,
        stability_lyophilized = entry.stability_lyophilized,
        stability_reconstituted = entry.stability_reconstituted,
        stability_working = entry.stability_working,
    );

    Ok(text)
}

/// Render the short-form preview paragraph: purity, KB overview, and the
/// fixed compliance sentences.
#[instrument(skip_all, fields(handle = %product.handle))]
pub fn render_short(product: &CanonicalProduct, entry: &KnowledgeBaseEntry) -> Result<String> {
    let name = require_title(product)?;
    let purity = meta_str(product, "purity", ">98%");

    Ok(format!(
        "Premium research-grade {name} with {purity} purity verified by third-party \
         testing. {overview} Ships same-day from USA-based facility with Certificate of \
         Analysis. For laboratory research use only.",
        overview = entry.overview,
    ))
}

/// Format the variant list as one bullet line per variant with price and a
/// literal stock label.
pub fn format_variants(variants: &[CanonicalVariant]) -> String {
    if variants.is_empty() {
        return "- Standard size available".to_string();
    }

    variants
        .iter()
        .map(|v| {
            let amount = v.prices.first().map(|p| p.amount).unwrap_or(0);
            let dollars = amount as f64 / 100.0;
            let stock = if v.inventory_quantity > 0 {
                "In Stock"
            } else {
                "Out of Stock"
            };
            format!("- **{}** (SKU: {}) - ${dollars:.2} - {stock}", v.title, v.sku)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The one hard renderer failure: an empty title has no sensible template slot.
fn require_title(product: &CanonicalProduct) -> Result<&str> {
    let title = product.title.trim();
    if title.is_empty() {
        return Err(CatalogError::Render(format!(
            "cannot render description for product with empty title (handle '{}')",
            product.handle
        )));
    }
    Ok(title)
}

fn meta_str<'a>(product: &'a CanonicalProduct, key: &str, default: &'a str) -> &'a str {
    product
        .metadata
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or(default)
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
