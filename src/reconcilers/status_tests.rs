// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `status.rs`

#[cfg(test)]
mod tests {
    use crate::crd::common::Condition;
    use crate::reconcilers::status::{
        create_condition, find_condition, is_ready, set_ready_condition, set_synced_condition,
        update_condition_in_memory,
    };
    use crate::status_reasons::{REASON_AVAILABLE, REASON_CREATING, REASON_UNAVAILABLE};

    const STATUS_TRUE: &str = "True";
    const STATUS_FALSE: &str = "False";

    #[test]
    fn test_create_condition_basic() {
        let condition = create_condition("Ready", STATUS_TRUE, "Available", "cluster is RUNNING");

        assert_eq!(condition.r#type, "Ready");
        assert_eq!(condition.status, STATUS_TRUE);
        assert_eq!(condition.reason.as_deref(), Some("Available"));
        assert_eq!(condition.message.as_deref(), Some("cluster is RUNNING"));
        let timestamp = condition.last_transition_time.unwrap();
        assert!(timestamp.contains('T'));
    }

    #[test]
    fn test_find_condition() {
        let conditions = vec![
            create_condition("Ready", STATUS_TRUE, "Available", ""),
            create_condition("Synced", STATUS_FALSE, "ReconcileError", "boom"),
        ];
        assert_eq!(find_condition(&conditions, "Synced").unwrap().status, STATUS_FALSE);
        assert!(find_condition(&conditions, "Degraded").is_none());
        assert!(find_condition(&[], "Ready").is_none());
    }

    #[test]
    fn test_update_adds_missing_condition() {
        let mut conditions = Vec::new();
        update_condition_in_memory(&mut conditions, "Ready", STATUS_FALSE, "Creating", "");
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].reason.as_deref(), Some("Creating"));
    }

    #[test]
    fn test_update_preserves_transition_time_when_status_unchanged() {
        let mut conditions = vec![Condition {
            r#type: "Ready".into(),
            status: STATUS_TRUE.into(),
            reason: Some("Available".into()),
            message: Some("old".into()),
            last_transition_time: Some("2024-01-01T00:00:00+00:00".into()),
        }];

        update_condition_in_memory(&mut conditions, "Ready", STATUS_TRUE, "Available", "new");
        assert_eq!(
            conditions[0].last_transition_time.as_deref(),
            Some("2024-01-01T00:00:00+00:00")
        );
        assert_eq!(conditions[0].message.as_deref(), Some("new"));

        update_condition_in_memory(&mut conditions, "Ready", STATUS_FALSE, "Unavailable", "");
        assert_ne!(
            conditions[0].last_transition_time.as_deref(),
            Some("2024-01-01T00:00:00+00:00")
        );
        assert_eq!(conditions.len(), 1);
    }

    #[test]
    fn test_ready_condition_status_follows_reason() {
        let mut conditions = Vec::new();
        set_ready_condition(&mut conditions, REASON_CREATING, "");
        assert!(!is_ready(&conditions));
        assert_eq!(conditions[0].status, STATUS_FALSE);

        set_ready_condition(&mut conditions, REASON_AVAILABLE, "");
        assert!(is_ready(&conditions));

        set_ready_condition(&mut conditions, REASON_UNAVAILABLE, "ERROR");
        assert!(!is_ready(&conditions));
    }

    #[test]
    fn test_synced_condition() {
        let mut conditions = Vec::new();
        set_synced_condition(&mut conditions, Some("cannot get GKE cluster: denied"));
        let synced = find_condition(&conditions, "Synced").unwrap();
        assert_eq!(synced.status, STATUS_FALSE);
        assert_eq!(synced.reason.as_deref(), Some("ReconcileError"));
        assert_eq!(synced.message.as_deref(), Some("cannot get GKE cluster: denied"));

        set_synced_condition(&mut conditions, None);
        let synced = find_condition(&conditions, "Synced").unwrap();
        assert_eq!(synced.status, STATUS_TRUE);
        assert_eq!(synced.reason.as_deref(), Some("ReconcileSuccess"));
    }
}
