// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Cloud Memorystore conversions.
//!
//! The Redis API supports masked PATCH, so unlike GKE there is no per-field
//! dispatch: an instance is either up to date or it is patched with every mutable
//! field at once.

use crate::clients::values::{late_init, late_init_map, set_if_some};
use crate::constants::{CONNECTION_KEY_ENDPOINT, CONNECTION_KEY_PORT};
use crate::crd::cache::{CloudMemorystoreInstanceObservation, CloudMemorystoreInstanceParameters};
use crate::gcp::redis::{
    ConnectMode, CreateInstanceRequest, DeleteInstanceRequest, FieldMask, GetInstanceRequest,
    Instance, State, Tier, UpdateInstanceRequest,
};
use crate::status_reasons::{REASON_AVAILABLE, REASON_CREATING, REASON_DELETING, REASON_UNAVAILABLE};
use std::collections::BTreeMap;

/// Fields an update may change, in API field-mask form.
pub const UPDATABLE_FIELDS: [&str; 4] = ["display_name", "labels", "memory_size_gb", "redis_configs"];

/// `projects/{project}/locations/{region}`
#[must_use]
pub fn fully_qualified_parent(project: &str, region: &str) -> String {
    format!("projects/{project}/locations/{region}")
}

/// `projects/{project}/locations/{region}/instances/{name}`
#[must_use]
pub fn fully_qualified_name(project: &str, region: &str, name: &str) -> String {
    format!("{}/instances/{name}", fully_qualified_parent(project, region))
}

/// Apply `p` onto `instance`. The instance name is left alone.
pub fn generate_redis_instance(p: &CloudMemorystoreInstanceParameters, instance: &mut Instance) {
    instance.tier = Tier::from_name(&p.tier);
    instance.memory_size_gb = p.memory_size_gb;
    set_if_some(&mut instance.display_name, p.display_name.as_ref());
    if !p.labels.is_empty() {
        instance.labels.clone_from(&p.labels);
    }
    set_if_some(&mut instance.location_id, p.location_id.as_ref());
    set_if_some(
        &mut instance.alternative_location_id,
        p.alternative_location_id.as_ref(),
    );
    set_if_some(&mut instance.redis_version, p.redis_version.as_ref());
    set_if_some(&mut instance.reserved_ip_range, p.reserved_ip_range.as_ref());
    if !p.redis_configs.is_empty() {
        instance.redis_configs.clone_from(&p.redis_configs);
    }
    set_if_some(&mut instance.authorized_network, p.authorized_network.as_ref());
    if let Some(mode) = &p.connect_mode {
        instance.connect_mode = ConnectMode::from_name(mode);
    }
    set_if_some(&mut instance.auth_enabled, p.auth_enabled.as_ref());
}

#[must_use]
pub fn new_get_instance_request(
    name: &str,
    project: &str,
    p: &CloudMemorystoreInstanceParameters,
) -> GetInstanceRequest {
    GetInstanceRequest {
        name: fully_qualified_name(project, &p.region, name),
    }
}

#[must_use]
pub fn new_create_instance_request(
    name: &str,
    project: &str,
    p: &CloudMemorystoreInstanceParameters,
) -> CreateInstanceRequest {
    let mut instance = Instance::default();
    generate_redis_instance(p, &mut instance);
    CreateInstanceRequest {
        parent: fully_qualified_parent(project, &p.region),
        instance_id: name.to_string(),
        instance,
    }
}

/// Build a PATCH of every mutable field.
#[must_use]
pub fn new_update_instance_request(
    name: &str,
    project: &str,
    p: &CloudMemorystoreInstanceParameters,
) -> UpdateInstanceRequest {
    let mut instance = Instance::default();
    generate_redis_instance(p, &mut instance);
    instance.name = fully_qualified_name(project, &p.region, name);
    UpdateInstanceRequest {
        update_mask: FieldMask {
            paths: UPDATABLE_FIELDS.iter().map(ToString::to_string).collect(),
        },
        instance,
    }
}

#[must_use]
pub fn new_delete_instance_request(
    name: &str,
    project: &str,
    p: &CloudMemorystoreInstanceParameters,
) -> DeleteInstanceRequest {
    DeleteInstanceRequest {
        name: fully_qualified_name(project, &p.region, name),
    }
}

#[must_use]
pub fn generate_observation(instance: &Instance) -> CloudMemorystoreInstanceObservation {
    CloudMemorystoreInstanceObservation {
        name: instance.name.clone(),
        host: instance.host.clone(),
        port: instance.port,
        current_location_id: instance.current_location_id.clone(),
        create_time: instance.create_time.clone(),
        state: instance.state.as_str().to_string(),
        status_message: instance.status_message.clone(),
        persistence_iam_identity: instance.persistence_iam_identity.clone(),
    }
}

/// Fill unset parameters from `observed`. Returns `true` if `spec` changed.
pub fn late_initialize_spec(
    spec: &mut CloudMemorystoreInstanceParameters,
    observed: &Instance,
) -> bool {
    let before = spec.clone();

    late_init(&mut spec.display_name, &observed.display_name);
    late_init_map(&mut spec.labels, &observed.labels);
    late_init(&mut spec.location_id, &observed.location_id);
    late_init(
        &mut spec.alternative_location_id,
        &observed.alternative_location_id,
    );
    late_init(&mut spec.redis_version, &observed.redis_version);
    late_init(&mut spec.reserved_ip_range, &observed.reserved_ip_range);
    late_init_map(&mut spec.redis_configs, &observed.redis_configs);
    late_init(&mut spec.authorized_network, &observed.authorized_network);
    let connect_mode = match observed.connect_mode {
        ConnectMode::Unspecified => String::new(),
        mode => mode.as_str().to_string(),
    };
    late_init(&mut spec.connect_mode, &connect_mode);
    late_init(&mut spec.auth_enabled, &observed.auth_enabled);

    *spec != before
}

/// Whether `observed` already matches every mutable parameter.
///
/// Immutable fields are copied back from `observed` before comparing: a change
/// there cannot be applied in place and must not cause an update loop.
#[must_use]
pub fn is_up_to_date(p: &CloudMemorystoreInstanceParameters, observed: &Instance) -> bool {
    let mut desired = observed.clone();
    generate_redis_instance(p, &mut desired);

    desired.tier = observed.tier;
    desired.location_id.clone_from(&observed.location_id);
    desired
        .alternative_location_id
        .clone_from(&observed.alternative_location_id);
    desired.redis_version.clone_from(&observed.redis_version);
    desired.reserved_ip_range.clone_from(&observed.reserved_ip_range);
    desired.authorized_network.clone_from(&observed.authorized_network);
    desired.connect_mode = observed.connect_mode;
    desired.auth_enabled = observed.auth_enabled;

    desired == *observed
}

/// `Ready` condition reason for an observed instance state.
#[must_use]
pub fn ready_reason(state: State) -> &'static str {
    match state {
        State::Ready => REASON_AVAILABLE,
        State::Creating => REASON_CREATING,
        State::Deleting => REASON_DELETING,
        _ => REASON_UNAVAILABLE,
    }
}

/// `endpoint` and `port` of a provisioned instance; empty until a host is assigned.
#[must_use]
pub fn connection_details(instance: &Instance) -> BTreeMap<String, Vec<u8>> {
    let mut details = BTreeMap::new();
    if instance.host.is_empty() {
        return details;
    }
    details.insert(
        CONNECTION_KEY_ENDPOINT.to_string(),
        instance.host.clone().into_bytes(),
    );
    details.insert(
        CONNECTION_KEY_PORT.to_string(),
        instance.port.to_string().into_bytes(),
    );
    details
}

#[cfg(test)]
#[path = "cloudmemorystore_tests.rs"]
mod cloudmemorystore_tests;
