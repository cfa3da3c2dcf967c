use std::fmt;

/// Steps of the create/update pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Validating,
    Aggregating,
    Computing,
    Reconciling,
    Persisting,
    Done,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Validating => "validating",
            PipelineStage::Aggregating => "aggregating",
            PipelineStage::Computing => "computing",
            PipelineStage::Reconciling => "reconciling",
            PipelineStage::Persisting => "persisting",
            PipelineStage::Done => "done",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
