// Feature pipeline stages: schema gate, quality report, derive, filter, project

pub mod features;
pub mod filter;
pub mod project;
pub mod quality;
pub mod runner;
pub mod schema;

pub use features::{FeatureCandidate, FeatureDeriver};
pub use filter::RecordFilter;
pub use project::{OutputProjector, FEATURE_COLUMNS};
pub use quality::{DataQualityReporter, QualityMetric, QualityReport};
pub use runner::{PipelineRun, PipelineRunner, SOURCE_TABLE};
pub use schema::{SchemaValidator, REQUIRED_COLUMNS};
