// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Bridging between the Kubernetes optional-field convention and the cloud APIs'
//! zero-value convention.
//!
//! Parameters model "unset" as `None` (or an empty collection); cloud objects model
//! it as the type's zero value. These helpers convert in both directions and
//! implement the one-directional late-initialization rule: a spec slot is only ever
//! filled when it is unset and the observed value is non-zero.

use std::collections::BTreeMap;

/// `None` when `value` is its type's zero value.
///
/// ```rust
/// use provider_gcp::clients::values::non_zero;
///
/// assert_eq!(non_zero(String::new()), None);
/// assert_eq!(non_zero(3), Some(3));
/// ```
#[must_use]
pub fn non_zero<T: Default + PartialEq>(value: T) -> Option<T> {
    if value == T::default() {
        None
    } else {
        Some(value)
    }
}

/// The wrapped value, or the zero value for `None`.
#[must_use]
pub fn or_zero<T: Clone + Default>(value: Option<&T>) -> T {
    value.cloned().unwrap_or_default()
}

/// Fill `slot` from `observed` when `slot` is unset and `observed` is non-zero.
///
/// Returns `true` if the slot changed.
pub fn late_init<T: Clone + Default + PartialEq>(slot: &mut Option<T>, observed: &T) -> bool {
    if slot.is_some() || *observed == T::default() {
        return false;
    }
    *slot = Some(observed.clone());
    true
}

/// Fill a nested optional block from an optional observed block.
///
/// When `slot` is unset a fresh block is allocated and `fill` copies observed
/// leaves into it; the block is only kept if `fill` produced something. When
/// `slot` is already set, `fill` still runs so unset leaves inside it are filled.
pub fn late_init_with<T, O>(slot: &mut Option<T>, observed: Option<&O>, fill: impl FnOnce(&mut T, &O))
where
    T: Default + PartialEq,
{
    let Some(observed) = observed else {
        return;
    };
    match slot {
        Some(existing) => fill(existing, observed),
        None => {
            let mut fresh = T::default();
            fill(&mut fresh, observed);
            if fresh != T::default() {
                *slot = Some(fresh);
            }
        }
    }
}

/// Fill an empty list from `observed`, converting each element.
///
/// A list the user already populated is never touched, even when lengths differ.
pub fn late_init_vec<T, O>(slot: &mut Vec<T>, observed: &[O], convert: impl FnMut(&O) -> T) {
    if slot.is_empty() && !observed.is_empty() {
        *slot = observed.iter().map(convert).collect();
    }
}

/// Fill an empty map from `observed`.
pub fn late_init_map(slot: &mut BTreeMap<String, String>, observed: &BTreeMap<String, String>) {
    if slot.is_empty() && !observed.is_empty() {
        slot.clone_from(observed);
    }
}

/// Regenerate a list element by element into a freshly sized vector.
#[must_use]
pub fn vec_from<T, O>(source: &[O], convert: impl FnMut(&O) -> T) -> Vec<T> {
    source.iter().map(convert).collect()
}

/// Overwrite `target` with `value` when it is set.
pub fn set_if_some<T: Clone>(target: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}

#[cfg(test)]
#[path = "values_tests.rs"]
mod values_tests;
