//! psyinsight: archetype classification, rule-based insight generation and
//! consistency validation for psychometric score profiles.
//!
//! The core pipeline is pure and synchronous:
//!
//! ```text
//! AnalysisInput -> normalize -> classify -> generate -> validate -> correct -> Insight
//! ```
//!
//! [`pipeline::InsightEngine`] wires the stages together. The rating and
//! achievement modules are small standalone calculators used alongside it.

pub mod achievements;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod consistency;
pub mod error;
pub mod insight;
pub mod normalize;
pub mod observability;
pub mod pipeline;
pub mod profile;
pub mod rating;
pub mod util;

pub use classifier::MatchResult;
pub use config::Config;
pub use consistency::{ConsistencyReport, ConsistencyValidator};
pub use error::{Error, Result};
pub use insight::Insight;
pub use pipeline::{Analysis, InsightEngine};
pub use profile::{AnalysisInput, HexacoScores, NormalizedVector};
