//! Canonical transformation stage: raw scraped records → normalized products.
//!
//! [`normalize_handle`] derives URL-safe slugs, and [`Transformer`] applies
//! the full normalization policy (subtitle table, variant mapping and
//! synthesis, option derivation, metadata merging with compound overrides,
//! category mapping, tag generation) driven by configured
//! [`TransformDefaults`](catalogforge_shared::TransformDefaults).

mod handle;
mod transformer;

pub use handle::normalize_handle;
pub use transformer::{Transformer, price_to_minor_units};
