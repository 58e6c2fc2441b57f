// Copyright 2026 the Switchyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Switchyard crates.
//!
//! Enabled via feature flags to keep the core small by default.

#[cfg(feature = "tree_adapter")]
pub mod element_tree;
