//! Shared types, error model, and configuration for CatalogForge.
//!
//! This crate is the foundation depended on by all other CatalogForge crates.
//! It provides:
//! - [`CatalogError`] — the unified error type
//! - Domain types ([`RawProductRecord`], [`CanonicalProduct`], [`CanonicalVariant`])
//! - Configuration ([`AppConfig`], [`TransformDefaults`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, SpecDefaultsConfig, TransformDefaults, config_dir,
    config_file_path, init_config, load_config, load_config_from,
};
pub use error::{CatalogError, Result};
pub use types::{
    CanonicalProduct, CanonicalVariant, Metadata, ProductImage, ProductOption, RawProductRecord,
    RawVariant, STATUS_PUBLISHED, VariantOptionValue, VariantPrice,
};
