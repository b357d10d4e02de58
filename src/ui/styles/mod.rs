// SPDX-License-Identifier: MPL-2.0
//! Centralized styling for buttons and containers.
//!
//! Style functions live here rather than inline in the section views so the
//! hero, showcase, and contact panels share one visual language.

pub mod button;
pub mod container;
