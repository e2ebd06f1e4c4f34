// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Pure conversions between managed-resource parameters and cloud API objects.
//!
//! Every resource kind provides the same four operations:
//!
//! - **generate** - parameters onto a cloud object (create requests and the
//!   desired side of a diff)
//! - **observe** - cloud object onto the status observation
//! - **late-initialize** - fill unset parameters from the cloud object
//! - **up-to-date** - regenerate the desired object on a copy of the observed one
//!   and compare
//!
//! Nothing in this module performs I/O.

pub mod cloudmemorystore;
pub mod cluster;
pub mod managedzone;
pub mod values;
