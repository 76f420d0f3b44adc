use thiserror::Error;

/// Failures local to one snapshot computation; none are fatal to the process
#[derive(Debug, Error)]
pub enum EngineError {
    /// A detected conflict references a train that is not part of the
    /// evaluated window. This indicates an internal consistency bug between
    /// detection and scoring, and is surfaced instead of being asserted away.
    #[error("conflict {conflict_id} references train {train_number} outside the evaluated window")]
    UnresolvableConflict {
        conflict_id: String,
        train_number: String,
    },
}
