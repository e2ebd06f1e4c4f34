// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the shared wire helpers.

#[cfg(test)]
mod tests {
    use crate::gcp::container::ClusterStatus;
    use crate::gcp::is_default;
    use crate::gcp::redis::Tier;

    #[test]
    fn test_is_default() {
        assert!(is_default(&String::new()));
        assert!(is_default(&0_i32));
        assert!(is_default(&false));
        assert!(!is_default(&"x".to_string()));
        assert!(!is_default(&true));
    }

    #[test]
    fn test_string_enum_round_trips_known_values() {
        let json = serde_json::to_string(&ClusterStatus::Reconciling).unwrap();
        assert_eq!(json, "\"RECONCILING\"");
        let back: ClusterStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ClusterStatus::Reconciling);
    }

    #[test]
    fn test_string_enum_default_is_first_variant() {
        assert_eq!(Tier::default(), Tier::Unspecified);
        assert_eq!(Tier::default().as_str(), "TIER_UNSPECIFIED");
    }

    #[test]
    fn test_string_enum_rejects_non_strings() {
        assert!(serde_json::from_str::<Tier>("3").is_err());
    }
}
