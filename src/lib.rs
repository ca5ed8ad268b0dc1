//! Hemingway - writing-quality analysis for a markdown editor
//!
//! The core is [`analysis`]: pure functions that score readability and
//! locate complex words, long sentences and passive voice, with byte offsets
//! into the analyzed text. The remaining modules are the editor-side
//! plumbing around it.

/// Text analysis engine
pub mod analysis;
/// Voice-to-text capture through injected host capabilities
pub mod capture;
/// Configuration management
pub mod config;
/// Splitting text into plain and highlighted segments
pub mod highlight;
/// Markdown to plain text reduction
pub mod markdown;
/// Staged recording cleanup and retention
pub mod recording_cleanup;
/// Plain-text analysis report
pub mod report;
/// Logging setup
pub mod telemetry;

pub use analysis::{analyze_text, AnalysisResult, Analyzer};
