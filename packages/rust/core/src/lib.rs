//! Core pipeline orchestration for CatalogForge.
//!
//! This crate ties together transformation and enrichment into the
//! end-to-end catalog run ([`pipeline::run_pipeline`]) with per-record
//! failure isolation and a collected [`pipeline::PipelineReport`].

pub mod pipeline;

pub use pipeline::{
    PipelineConfig, PipelineReport, ProgressReporter, RecordFailure, RecordOutcome,
    SilentProgress, process_record, run_pipeline,
};
