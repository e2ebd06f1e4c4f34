// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Typed Google Cloud API objects and the RPC boundary used by the reconcilers.
//!
//! This module is the opaque transport layer of the provider. Everything above it
//! (generators, observers, late-initializers and diff engines in [`crate::clients`])
//! only builds request structs and interprets response structs; the services defined
//! here are the only place that talks HTTP.
//!
//! # Services
//!
//! - [`container::ClusterService`] - GKE clusters and node pools (`container.googleapis.com`)
//! - [`redis::RedisService`] - Cloud Memorystore for Redis (`redis.googleapis.com`)
//! - [`dns::DnsService`] - Cloud DNS managed zones (`dns.googleapis.com`)
//!
//! Each service is a trait so reconcilers can be exercised against in-memory fakes.
//! The REST implementations share [`rest::RestClient`] for authentication and error
//! mapping.
//!
//! # Wire conventions
//!
//! Objects follow Google's JSON zero-value convention: scalars default to zero and are
//! omitted when zero. Booleans that must always reach the API (the `disabled`/`enabled`
//! flags of sub-blocks that the API replaces wholesale) are declared without
//! `skip_serializing_if`, so `false` is sent whenever the parent block is present.

/// Declares a string-valued API enumeration.
///
/// The first variant is the default and is also produced for unknown values, so newer
/// server-side enum values never fail deserialization.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $default:ident => $default_str:literal,
            $($variant:ident => $value:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            #[default]
            $default,
            $($variant),*
        }

        impl $name {
            /// Wire name of this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    Self::$default => $default_str,
                    $(Self::$variant => $value),*
                }
            }

            /// Parse a wire name, falling back to the unspecified value.
            #[must_use]
            pub fn from_name(name: &str) -> Self {
                match name {
                    $($value => Self::$variant,)*
                    _ => Self::$default,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_name(&name))
            }
        }
    };
}

pub mod auth;
pub mod container;
pub mod dns;
pub mod int64;
pub mod redis;
pub mod rest;

/// Returns `true` when a value equals its type's zero value.
///
/// Used as `skip_serializing_if` to mirror the API's "omit empty" encoding.
pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod mod_tests;
