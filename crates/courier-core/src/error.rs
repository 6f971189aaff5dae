//! Error types for the dispatch core.

use thiserror::Error;

/// Validation failure for a caller-supplied record.
///
/// The dispatch pipeline is total over well-formed input; a malformed
/// record fails the whole run instead of producing NaN-poisoned penalties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("invalid drone {drone_id}: {reason}")]
    InvalidDrone { drone_id: u64, reason: String },

    #[error("invalid package {package_id}: {reason}")]
    InvalidPackage { package_id: u64, reason: String },
}
