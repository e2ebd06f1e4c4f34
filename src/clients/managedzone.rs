// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Cloud DNS managed zone conversions.

use crate::clients::values::{late_init, late_init_map, set_if_some, vec_from};
use crate::constants::{
    DNS_MANAGED_ZONE_KIND, DNS_PRIVATE_VISIBILITY_CONFIG_KIND, DNS_PRIVATE_VISIBILITY_NETWORK_KIND,
};
use crate::crd::dns::{self as params, ManagedZoneObservation, ManagedZoneParameters};
use crate::gcp::dns::{
    ManagedZone, ManagedZonePrivateVisibilityConfig, ManagedZonePrivateVisibilityConfigNetwork,
};

/// Apply `p` onto `zone`, touching only the fields `p` sets.
///
/// The zone name is assigned by the caller.
pub fn generate_managed_zone(p: &ManagedZoneParameters, zone: &mut ManagedZone) {
    zone.kind = DNS_MANAGED_ZONE_KIND.to_string();
    if !p.dns_name.is_empty() {
        zone.dns_name.clone_from(&p.dns_name);
    }
    set_if_some(&mut zone.description, p.description.as_ref());
    if !p.labels.is_empty() {
        zone.labels.clone_from(&p.labels);
    }
    set_if_some(&mut zone.visibility, p.visibility.as_ref());
    if let Some(config) = &p.private_visibility_config {
        zone.private_visibility_config = Some(ManagedZonePrivateVisibilityConfig {
            kind: DNS_PRIVATE_VISIBILITY_CONFIG_KIND.to_string(),
            networks: vec_from(&config.networks, |n| ManagedZonePrivateVisibilityConfigNetwork {
                kind: DNS_PRIVATE_VISIBILITY_NETWORK_KIND.to_string(),
                network_url: n.network_url.clone(),
            }),
        });
    }
}

#[must_use]
pub fn generate_observation(zone: &ManagedZone) -> ManagedZoneObservation {
    ManagedZoneObservation {
        creation_time: zone.creation_time.clone(),
        id: zone.id,
        name_servers: zone.name_servers.clone(),
    }
}

/// Fill unset parameters from `observed`. Returns `true` if `spec` changed.
pub fn late_initialize_spec(spec: &mut ManagedZoneParameters, observed: &ManagedZone) -> bool {
    let before = spec.clone();

    if spec.dns_name.is_empty() {
        spec.dns_name.clone_from(&observed.dns_name);
    }
    late_init(&mut spec.description, &observed.description);
    late_init_map(&mut spec.labels, &observed.labels);
    late_init(&mut spec.visibility, &observed.visibility);
    if spec.private_visibility_config.is_none() {
        spec.private_visibility_config = observed
            .private_visibility_config
            .as_ref()
            .filter(|c| !c.networks.is_empty())
            .map(|c| params::ManagedZonePrivateVisibilityConfig {
                networks: vec_from(&c.networks, |n| {
                    params::ManagedZonePrivateVisibilityConfigNetwork {
                        network_url: n.network_url.clone(),
                    }
                }),
            });
    }

    *spec != before
}

/// Whether `observed` already matches every mutable parameter.
///
/// `dnsName` and `visibility` cannot be patched and are taken from `observed`;
/// API `kind` markers are not compared.
#[must_use]
pub fn is_up_to_date(p: &ManagedZoneParameters, observed: &ManagedZone) -> bool {
    let mut desired = observed.clone();
    generate_managed_zone(p, &mut desired);
    desired.dns_name.clone_from(&observed.dns_name);
    desired.visibility.clone_from(&observed.visibility);

    without_kinds(desired) == without_kinds(observed.clone())
}

fn without_kinds(mut zone: ManagedZone) -> ManagedZone {
    zone.kind.clear();
    if let Some(config) = zone.private_visibility_config.as_mut() {
        config.kind.clear();
        for network in &mut config.networks {
            network.kind.clear();
        }
    }
    zone
}

#[cfg(test)]
#[path = "managedzone_tests.rs"]
mod managedzone_tests;
