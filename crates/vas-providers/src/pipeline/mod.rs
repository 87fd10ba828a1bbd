//! Message pipelines

mod activity;

pub use activity::{ActivityPipeline, PipelineKind};
