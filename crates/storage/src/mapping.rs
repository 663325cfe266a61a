use quiz_core::model::SkillProgress;

use crate::repository::StorageError;

/// Key under which the per-skill progress document is stored.
pub const PROGRESS_KEY: &str = "mathQuizProgress";

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Encodes progress as the JSON document kept under [`PROGRESS_KEY`].
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_progress(progress: &SkillProgress) -> Result<String, StorageError> {
    serde_json::to_string(progress).map_err(ser)
}

/// Decodes a stored progress document.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for anything that is not a valid
/// progress document (bad JSON, negative or non-integer counters, wrong shape).
pub fn decode_progress(raw: &str) -> Result<SkillProgress, StorageError> {
    serde_json::from_str(raw).map_err(ser)
}
