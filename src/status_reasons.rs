// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Status condition types and reasons for managed resources.
//!
//! Every managed resource carries two conditions:
//!
//! - `type: Ready` - availability of the external resource as reported by GCP
//! - `type: Synced` - whether the last reconcile against GCP succeeded
//!
//! # Example Status
//!
//! ```yaml
//! status:
//!   conditions:
//!     - type: Ready
//!       status: "True"
//!       reason: Available
//!     - type: Synced
//!       status: "True"
//!       reason: ReconcileSuccess
//! ```

// ============================================================================
// Condition Types
// ============================================================================

/// Availability of the external resource.
pub const CONDITION_TYPE_READY: &str = "Ready";

/// Outcome of the last reconcile.
pub const CONDITION_TYPE_SYNCED: &str = "Synced";

// ============================================================================
// Ready Reasons
// ============================================================================

/// The external resource is usable.
pub const REASON_AVAILABLE: &str = "Available";

/// The external resource is being created.
pub const REASON_CREATING: &str = "Creating";

/// The external resource is being deleted.
pub const REASON_DELETING: &str = "Deleting";

/// The external resource exists but is not usable (error, repair, unknown state).
pub const REASON_UNAVAILABLE: &str = "Unavailable";

// ============================================================================
// Synced Reasons
// ============================================================================

/// The last reconcile completed without error.
pub const REASON_RECONCILE_SUCCESS: &str = "ReconcileSuccess";

/// The last reconcile failed; the message carries the error.
pub const REASON_RECONCILE_ERROR: &str = "ReconcileError";

/// Whether a `Ready` reason means the condition status is `"True"`.
///
/// ```rust
/// use provider_gcp::status_reasons::{is_ready_reason, REASON_AVAILABLE, REASON_CREATING};
///
/// assert!(is_ready_reason(REASON_AVAILABLE));
/// assert!(!is_ready_reason(REASON_CREATING));
/// ```
#[must_use]
pub fn is_ready_reason(reason: &str) -> bool {
    reason == REASON_AVAILABLE
}

#[cfg(test)]
#[path = "status_reasons_tests.rs"]
mod status_reasons_tests;
