// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Serde adapter for 64-bit integers.
//!
//! Google JSON APIs encode `int64`/`uint64` fields as decimal strings. Responses are
//! accepted either as strings or as plain numbers; requests always use strings.
//!
//! ```rust
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Limit {
//!     #[serde(with = "provider_gcp::gcp::int64")]
//!     maximum: i64,
//! }
//!
//! let limit: Limit = serde_json::from_str(r#"{"maximum":"64"}"#).unwrap();
//! assert_eq!(limit.maximum, 64);
//! assert_eq!(serde_json::to_string(&limit).unwrap(), r#"{"maximum":"64"}"#);
//! ```

use serde::{de, Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Encoded<N> {
    Text(String),
    Number(N),
}

/// Serialize an `i64` as a JSON string.
///
/// # Errors
///
/// Returns the serializer's error.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Deserialize an `i64` from a JSON string or number.
///
/// # Errors
///
/// Returns an error if the value is neither a number nor a decimal string.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match Encoded::<i64>::deserialize(deserializer)? {
        Encoded::Number(n) => Ok(n),
        Encoded::Text(s) => s.parse().map_err(de::Error::custom),
    }
}

/// Same encoding for `u64` fields (Cloud DNS zone ids).
pub mod unsigned {
    use super::{de, Deserialize, Deserializer, Encoded, Serializer};

    /// Serialize a `u64` as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    /// Deserialize a `u64` from a JSON string or number.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither a number nor a decimal string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match Encoded::<u64>::deserialize(deserializer)? {
            Encoded::Number(n) => Ok(n),
            Encoded::Text(s) => s.parse().map_err(de::Error::custom),
        }
    }
}
