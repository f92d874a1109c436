pub mod domain;
pub mod error;
pub mod logging;
pub mod pipeline;

pub use domain::{FeatureRecord, RawCustomerRecord, SourceTable};
pub use error::{PipelineError, Result};
pub use pipeline::{PipelineRun, PipelineRunner};
