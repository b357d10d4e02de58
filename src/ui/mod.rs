// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Page regions
//!
//! - [`hero`] - Full-viewport banner with the entrance timeline
//! - [`projects`] - Scroll-revealed project showcase grid
//! - [`contact`] - Contact form, info column, and closing blurb
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, motion)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering (visual primitives)
//! - [`action_icons`] - Semantic action-to-icon mapping
//! - [`notifications`] - Toast notification system for user feedback

pub mod action_icons;
pub mod contact;
pub mod design_tokens;
pub mod hero;
pub mod icons;
pub mod notifications;
pub mod projects;
pub mod styles;
pub mod theming;
