//! Word-frequency analysis engine.
//!
//! Wires the pipeline stages (tokenize → filter → normalize → aggregate →
//! rank) according to the analyzer's configuration. Data flows strictly
//! one way: text → tokens → surviving tokens → canonical words → counts →
//! ranked result.
//!
//! Threading:
//! - [`FrequencyAnalyzer`] assumes exclusive ownership by a single caller;
//!   there is no internal synchronization. Clone the configuration into a
//!   second analyzer if two threads need to analyze concurrently.

mod aggregate;
mod api;
mod rank;
mod stats;
mod types;

pub use stats::RunStats;
pub use types::{AnalyzerMetrics, FrequencyAnalyzer};
