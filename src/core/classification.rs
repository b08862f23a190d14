use serde::Serialize;

use crate::core::types::ReadDirection;

/// Derived record describing what one read-file name means.
///
/// A classification is a pure function of the file name and is computed once:
/// re-running on the same name always yields the same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Sample identity: the stem up to the delimiter marker's first
    /// occurrence, or the whole stem when the marker is absent
    pub sample_id: String,

    /// Read direction from the stem's trailing `_1`/`_2`
    pub direction: ReadDirection,

    /// The original, unmodified file name. Used only for stable ordering
    /// across files that classify to the same sample and direction, never
    /// for uniqueness.
    pub lane_key: String,
}
