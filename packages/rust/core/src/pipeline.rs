//! End-to-end catalog pipeline: raw records → transform → enrich → report.
//!
//! One bad record never aborts the run or truncates the rest of the output.
//! Each record produces an explicit [`RecordOutcome`]; failures are dropped
//! from the product collection and recorded in the [`PipelineReport`] instead
//! (an untransformed record in the import payload would violate every
//! canonical-schema invariant downstream). Output order equals input order.

use std::time::{Duration, Instant};

use tracing::{info, instrument, warn};

use catalogforge_enrich::{render_long, render_short};
use catalogforge_kb::KnowledgeBase;
use catalogforge_shared::{CanonicalProduct, RawProductRecord, TransformDefaults};
use catalogforge_transform::Transformer;

/// Configuration for a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Defaulting tables for the transformer.
    pub defaults: TransformDefaults,
    /// Compound reference data for enrichment.
    pub kb: KnowledgeBase,
}

/// The outcome of processing one raw record.
#[derive(Debug, Clone)]
pub enum RecordOutcome {
    /// Transformed and enriched successfully.
    Enriched(Box<CanonicalProduct>),
    /// Dropped from the output; reason kept for the report.
    Failed { identifier: String, reason: String },
}

/// A recorded per-record failure.
#[derive(Debug, Clone)]
pub struct RecordFailure {
    /// Best-effort identifier of the failing record (name, handle, or SKU).
    pub identifier: String,
    pub reason: String,
}

/// Result of a full pipeline run.
#[derive(Debug)]
pub struct PipelineReport {
    /// Enriched products in input order.
    pub products: Vec<CanonicalProduct>,
    /// Records that failed transform or render, in input order.
    pub failures: Vec<RecordFailure>,
    /// Total elapsed time.
    pub elapsed: Duration,
}

impl PipelineReport {
    /// Number of raw records this run consumed.
    pub fn records_in(&self) -> usize {
        self.products.len() + self.failures.len()
    }

    /// Total canonical variants across all enriched products.
    pub fn total_variants(&self) -> usize {
        self.products.iter().map(|p| p.variants.len()).sum()
    }
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called after each record is processed.
    fn record_processed(&self, identifier: &str, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self, report: &PipelineReport);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn record_processed(&self, _identifier: &str, _current: usize, _total: usize) {}
    fn done(&self, _report: &PipelineReport) {}
}

/// Run the full pipeline over a collection of raw records.
///
/// Sequences transform → knowledge base lookup → render per record, in input
/// order, isolating each record's failures.
#[instrument(skip_all, fields(records = raw_records.len()))]
pub fn run_pipeline(
    config: &PipelineConfig,
    raw_records: &[RawProductRecord],
    progress: &dyn ProgressReporter,
) -> PipelineReport {
    let start = Instant::now();
    let transformer = Transformer::new(config.defaults.clone());
    let total = raw_records.len();

    info!(records = total, "starting catalog pipeline");
    progress.phase("Transforming and enriching records");

    let mut products = Vec::new();
    let mut failures = Vec::new();

    for (i, raw) in raw_records.iter().enumerate() {
        match process_record(&transformer, &config.kb, raw) {
            RecordOutcome::Enriched(product) => {
                progress.record_processed(&product.title, i + 1, total);
                products.push(*product);
            }
            RecordOutcome::Failed { identifier, reason } => {
                warn!(record = %identifier, %reason, "record dropped");
                progress.record_processed(&identifier, i + 1, total);
                failures.push(RecordFailure { identifier, reason });
            }
        }
    }

    let report = PipelineReport {
        products,
        failures,
        elapsed: start.elapsed(),
    };

    progress.done(&report);

    info!(
        enriched = report.products.len(),
        failed = report.failures.len(),
        elapsed_ms = report.elapsed.as_millis(),
        "catalog pipeline complete"
    );

    report
}

/// Process one record. Transformation is total; rendering is the only
/// fallible step, and its error becomes this record's failure outcome.
pub fn process_record(
    transformer: &Transformer,
    kb: &KnowledgeBase,
    raw: &RawProductRecord,
) -> RecordOutcome {
    let mut product = transformer.transform(raw);
    let entry = kb.lookup(&product.title);

    let long = match render_long(&product, &entry) {
        Ok(text) => text,
        Err(e) => {
            return RecordOutcome::Failed {
                identifier: raw.identifier().to_string(),
                reason: e.to_string(),
            };
        }
    };
    let short = match render_short(&product, &entry) {
        Ok(text) => text,
        Err(e) => {
            return RecordOutcome::Failed {
                identifier: raw.identifier().to_string(),
                reason: e.to_string(),
            };
        }
    };

    // Descriptions are assigned in place; nothing else is recomputed.
    product.description = long;
    product.short_description = short;

    RecordOutcome::Enriched(Box::new(product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogforge_shared::{AppConfig, RawVariant};

    fn raw(name: &str) -> RawProductRecord {
        RawProductRecord {
            name: Some(name.into()),
            price: Some(9.99),
            ..Default::default()
        }
    }

    #[test]
    fn pipeline_enriches_every_well_formed_record() {
        let records = vec![raw("BPC-157"), raw("GHK-Cu"), raw("Unknown-Compound-42")];
        let report = run_pipeline(&PipelineConfig::default(), &records, &SilentProgress);

        assert_eq!(report.products.len(), 3);
        assert!(report.failures.is_empty());
        assert!(report.products.iter().all(|p| p.is_enriched()));
    }

    #[test]
    fn output_order_matches_input_order() {
        let records = vec![raw("NAD+"), raw("Tesamorelin"), raw("BPC-157")];
        let report = run_pipeline(&PipelineConfig::default(), &records, &SilentProgress);

        let titles: Vec<&str> = report.products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["NAD+", "Tesamorelin", "BPC-157"]);
    }

    #[test]
    fn empty_name_degrades_to_placeholder_and_still_enriches() {
        // With the default placeholder title, a nameless record is still a
        // renderable product.
        let mut records = vec![raw("BPC-157"), raw("GHK-Cu")];
        records.insert(1, RawProductRecord::default());

        let report = run_pipeline(&PipelineConfig::default(), &records, &SilentProgress);
        assert_eq!(report.products.len(), 3);
        assert_eq!(report.products[1].title, "Unknown Product");
    }

    #[test]
    fn failing_record_is_skipped_not_fatal() {
        // Force a real render failure: an empty placeholder title leaves a
        // nameless record with an empty title, which the renderer rejects.
        let mut config = AppConfig::default();
        config.defaults.placeholder_title = String::new();

        let pipeline_config = PipelineConfig {
            defaults: TransformDefaults::from(&config),
            kb: KnowledgeBase::curated(),
        };

        let records = vec![
            raw("BPC-157"),
            raw("GHK-Cu"),
            RawProductRecord {
                name: Some("".into()),
                ..Default::default()
            },
            raw("NAD+"),
            raw("Tesamorelin"),
        ];

        let report = run_pipeline(&pipeline_config, &records, &SilentProgress);

        assert_eq!(report.products.len(), 4);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].identifier, "<unnamed record>");
        assert!(report.failures[0].reason.contains("empty title"));
        assert_eq!(report.records_in(), 5);

        // The failure did not disturb ordering of surviving records.
        let titles: Vec<&str> = report.products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["BPC-157", "GHK-Cu", "NAD+", "Tesamorelin"]);
    }

    #[test]
    fn report_counts_variants() {
        let mut record = raw("GLP-3 (R*)");
        record.variants = vec![
            RawVariant {
                size: Some("10mg".into()),
                price: Some(89.99),
                sku: None,
                in_stock: Some(true),
            },
            RawVariant {
                size: Some("20mg".into()),
                price: Some(134.99),
                sku: None,
                in_stock: Some(true),
            },
        ];

        let report = run_pipeline(
            &PipelineConfig::default(),
            &[record, raw("NAD+")],
            &SilentProgress,
        );
        assert_eq!(report.total_variants(), 3);
    }

    #[test]
    fn fixture_catalog_runs_end_to_end() {
        let fixture = std::fs::read_to_string("../../../fixtures/json/raw-products.fixture.json")
            .expect("read fixture");
        let records: Vec<RawProductRecord> =
            serde_json::from_str(&fixture).expect("deserialize fixture records");

        let report = run_pipeline(&PipelineConfig::default(), &records, &SilentProgress);

        assert_eq!(report.products.len(), 5);
        assert!(report.failures.is_empty());

        let glp = report
            .products
            .iter()
            .find(|p| p.title == "GLP-3 (R*)")
            .expect("GLP product present");
        assert!(glp.options.is_some());
        assert_eq!(glp.variants[1].prices[0].amount, 13499);
        assert!(glp.description.contains("### Available Sizes"));
    }

    #[test]
    fn rerun_is_idempotent_apart_from_timestamps() {
        let records = vec![raw("BPC-157")];
        let config = PipelineConfig::default();

        let a = run_pipeline(&config, &records, &SilentProgress);
        let b = run_pipeline(&config, &records, &SilentProgress);

        assert_eq!(a.products[0].handle, b.products[0].handle);
        assert_eq!(a.products[0].tags, b.products[0].tags);
        assert_eq!(
            a.products[0].short_description,
            b.products[0].short_description
        );
    }
}
