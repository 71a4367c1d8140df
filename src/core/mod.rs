//! Core modules for Persona Quiz

pub mod profile_store;
pub mod scoring;
pub mod resolver;
pub mod gauge;
pub mod catalog;
pub mod quiz;
pub mod api;

pub use profile_store::{ProfileStore, validate_definition};
pub use scoring::ScoringEngine;
pub use resolver::{ResultResolver, Resolution};
pub use gauge::GaugeCalculator;
pub use catalog::CatalogBuilder;
pub use quiz::{QuizOutcome, compute_result, is_complete, list_distinct_results, record_answer, reset};
pub use api::{create_router, run_server};
