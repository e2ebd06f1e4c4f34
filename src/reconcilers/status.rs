// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Status condition helpers for managed resources.
//!
//! Conditions follow the standard Kubernetes format:
//! - `type`: `Ready` or `Synced`
//! - `status`: "True", "False", or "Unknown"
//! - `reason`: A programmatic identifier (CamelCase)
//! - `message`: A human-readable explanation
//! - `lastTransitionTime`: RFC3339 timestamp when the status last changed
//!
//! All helpers work on an in-memory condition list. The reconcile driver patches
//! the status once per pass.
//!
//! # Example
//!
//! ```rust
//! use provider_gcp::reconcilers::status::{find_condition, set_ready_condition};
//! use provider_gcp::status_reasons::REASON_AVAILABLE;
//!
//! let mut conditions = Vec::new();
//! set_ready_condition(&mut conditions, REASON_AVAILABLE, "cluster is RUNNING");
//! assert_eq!(find_condition(&conditions, "Ready").unwrap().status, "True");
//! ```

use crate::crd::common::Condition;
use crate::status_reasons::{
    is_ready_reason, CONDITION_TYPE_READY, CONDITION_TYPE_SYNCED, REASON_RECONCILE_ERROR,
    REASON_RECONCILE_SUCCESS,
};
use chrono::Utc;

/// Create a new condition with the current timestamp.
///
/// # Example
///
/// ```rust
/// # use provider_gcp::reconcilers::status::create_condition;
/// let condition = create_condition("Ready", "True", "Available", "instance is READY");
/// assert_eq!(condition.r#type, "Ready");
/// assert_eq!(condition.status, "True");
/// ```
#[must_use]
pub fn create_condition(
    condition_type: &str,
    status: &str,
    reason: &str,
    message: &str,
) -> Condition {
    Condition {
        r#type: condition_type.to_string(),
        status: status.to_string(),
        reason: Some(reason.to_string()),
        message: Some(message.to_string()),
        last_transition_time: Some(Utc::now().to_rfc3339()),
    }
}

/// Find a condition by type.
#[must_use]
pub fn find_condition<'a>(
    conditions: &'a [Condition],
    condition_type: &str,
) -> Option<&'a Condition> {
    conditions.iter().find(|c| c.r#type == condition_type)
}

/// Update or add a condition in a mutable conditions list (in-memory, no API call).
///
/// The `lastTransitionTime` is preserved when the status does not change, so a
/// reconcile that observes the same state twice produces an identical status and
/// the driver can skip the patch.
pub fn update_condition_in_memory(
    conditions: &mut Vec<Condition>,
    condition_type: &str,
    status: &str,
    reason: &str,
    message: &str,
) {
    if let Some(existing) = conditions.iter_mut().find(|c| c.r#type == condition_type) {
        let last_transition_time = if existing.status == status {
            existing
                .last_transition_time
                .clone()
                .unwrap_or_else(|| Utc::now().to_rfc3339())
        } else {
            Utc::now().to_rfc3339()
        };

        existing.status = status.to_string();
        existing.reason = Some(reason.to_string());
        existing.message = Some(message.to_string());
        existing.last_transition_time = Some(last_transition_time);
    } else {
        conditions.push(create_condition(condition_type, status, reason, message));
    }
}

/// Set `Ready` from one of the availability reasons.
///
/// The status is `"True"` only for [`crate::status_reasons::REASON_AVAILABLE`].
pub fn set_ready_condition(conditions: &mut Vec<Condition>, reason: &str, message: &str) {
    let status = if is_ready_reason(reason) { "True" } else { "False" };
    update_condition_in_memory(conditions, CONDITION_TYPE_READY, status, reason, message);
}

/// Set `Synced` from the outcome of a reconcile pass.
pub fn set_synced_condition(conditions: &mut Vec<Condition>, error: Option<&str>) {
    match error {
        None => update_condition_in_memory(
            conditions,
            CONDITION_TYPE_SYNCED,
            "True",
            REASON_RECONCILE_SUCCESS,
            "",
        ),
        Some(message) => update_condition_in_memory(
            conditions,
            CONDITION_TYPE_SYNCED,
            "False",
            REASON_RECONCILE_ERROR,
            message,
        ),
    }
}

/// Whether the `Ready` condition is `"True"`.
#[must_use]
pub fn is_ready(conditions: &[Condition]) -> bool {
    find_condition(conditions, CONDITION_TYPE_READY).is_some_and(|c| c.status == "True")
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
