use thiserror::Error;

/// Errors from externally supplied workload parameters.
///
/// The fixed-workflow binary cannot hit these; only the benchmark runner
/// accepts sizes from outside.
#[derive(Debug, Error)]
pub enum WorkloadError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
