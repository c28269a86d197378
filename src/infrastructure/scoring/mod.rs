//! Scoring infrastructure module

mod service;

pub use service::{KeywordSubmission, ScoringService};
