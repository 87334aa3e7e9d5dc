//! Application configuration for CatalogForge.
//!
//! User config lives at `~/.catalogforge/catalogforge.toml`.
//! CLI flags override config file values, which override defaults.
//!
//! The transform defaulting tables (placeholder title, specification
//! defaults, SKU prefix, …) live here as explicit configuration rather than
//! hidden constants, so tests can override them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "catalogforge.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".catalogforge";

// ---------------------------------------------------------------------------
// Config structs (matching catalogforge.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog-level defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Specification-table defaults used when the scrape omitted a key.
    #[serde(default)]
    pub specifications: SpecDefaultsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Title substituted when the raw record has no usable name.
    #[serde(default = "default_placeholder_title")]
    pub placeholder_title: String,

    /// Handle substituted when normalizing the title yields an empty slug.
    #[serde(default = "default_fallback_handle")]
    pub fallback_handle: String,

    /// Prefix for synthesized SKUs (`<prefix>-<HANDLE>`).
    #[serde(default = "default_sku_prefix")]
    pub sku_prefix: String,

    /// Lowercase currency code for variant prices.
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Inventory level assigned to in-stock variants.
    #[serde(default = "default_in_stock_quantity")]
    pub in_stock_quantity: u32,

    /// Subtitle for products no subtitle-table row matches.
    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    /// Category assigned when no raw category maps to the controlled
    /// vocabulary. The catalog never has an uncategorized product.
    #[serde(default = "default_category")]
    pub category: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            placeholder_title: default_placeholder_title(),
            fallback_handle: default_fallback_handle(),
            sku_prefix: default_sku_prefix(),
            currency_code: default_currency_code(),
            in_stock_quantity: default_in_stock_quantity(),
            subtitle: default_subtitle(),
            category: default_category(),
        }
    }
}

fn default_placeholder_title() -> String {
    "Unknown Product".into()
}
fn default_fallback_handle() -> String {
    "unknown-product".into()
}
fn default_sku_prefix() -> String {
    "PBL".into()
}
fn default_currency_code() -> String {
    "usd".into()
}
fn default_in_stock_quantity() -> u32 {
    100
}
fn default_subtitle() -> String {
    "Premium Research-Grade Peptide".into()
}
fn default_category() -> String {
    "Research Peptides".into()
}

/// `[specifications]` section — metadata defaults merged under scraped values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecDefaultsConfig {
    #[serde(default = "default_purity")]
    pub purity: String,

    #[serde(default = "default_see_coa")]
    pub molecular_weight: String,

    #[serde(default = "default_see_coa")]
    pub molecular_formula: String,

    #[serde(default = "default_cas_number")]
    pub cas_number: String,

    #[serde(default = "default_storage")]
    pub storage: String,

    #[serde(default = "default_form")]
    pub form: String,

    #[serde(default = "default_solubility")]
    pub solubility: String,
}

impl Default for SpecDefaultsConfig {
    fn default() -> Self {
        Self {
            purity: default_purity(),
            molecular_weight: default_see_coa(),
            molecular_formula: default_see_coa(),
            cas_number: default_cas_number(),
            storage: default_storage(),
            form: default_form(),
            solubility: default_solubility(),
        }
    }
}

fn default_purity() -> String {
    ">98%".into()
}
fn default_see_coa() -> String {
    "See COA".into()
}
fn default_cas_number() -> String {
    "Available upon request".into()
}
fn default_storage() -> String {
    "Store at -20°C".into()
}
fn default_form() -> String {
    "Lyophilized Powder".into()
}
fn default_solubility() -> String {
    "Soluble in water".into()
}

// ---------------------------------------------------------------------------
// Transform defaults (runtime, merged from config)
// ---------------------------------------------------------------------------

/// Runtime defaulting tables handed to the transformer.
#[derive(Debug, Clone)]
pub struct TransformDefaults {
    pub placeholder_title: String,
    pub fallback_handle: String,
    pub sku_prefix: String,
    pub currency_code: String,
    pub in_stock_quantity: u32,
    pub subtitle: String,
    pub category: String,
    pub specs: SpecDefaultsConfig,
}

impl Default for TransformDefaults {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for TransformDefaults {
    fn from(config: &AppConfig) -> Self {
        Self {
            placeholder_title: config.defaults.placeholder_title.clone(),
            fallback_handle: config.defaults.fallback_handle.clone(),
            sku_prefix: config.defaults.sku_prefix.clone(),
            currency_code: config.defaults.currency_code.clone(),
            in_stock_quantity: config.defaults.in_stock_quantity,
            subtitle: config.defaults.subtitle.clone(),
            category: config.defaults.category.clone(),
            specs: config.specifications.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.catalogforge/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CatalogError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.catalogforge/catalogforge.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| CatalogError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| CatalogError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| CatalogError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| CatalogError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("placeholder_title"));
        assert!(toml_str.contains(">98%"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.sku_prefix, "PBL");
        assert_eq!(parsed.defaults.in_stock_quantity, 100);
        assert_eq!(parsed.specifications.storage, "Store at -20°C");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[defaults]
sku_prefix = "ACME"

[specifications]
purity = ">99%"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.defaults.sku_prefix, "ACME");
        assert_eq!(config.defaults.currency_code, "usd");
        assert_eq!(config.specifications.purity, ">99%");
        assert_eq!(config.specifications.form, "Lyophilized Powder");
    }

    #[test]
    fn transform_defaults_from_app_config() {
        let app = AppConfig::default();
        let defaults = TransformDefaults::from(&app);
        assert_eq!(defaults.placeholder_title, "Unknown Product");
        assert_eq!(defaults.category, "Research Peptides");
        assert_eq!(defaults.specs.cas_number, "Available upon request");
    }
}
