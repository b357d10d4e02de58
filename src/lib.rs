// SPDX-License-Identifier: MPL-2.0
//! Folio - a single-page portfolio desktop app.
//!
//! One scrollable page with three regions (hero banner, project showcase,
//! contact form) whose entrances are driven by the scroll-triggered reveal
//! core in [`reveal`]. Preferences (theme, reduced motion) persist through
//! [`config`]; user feedback surfaces through the toast notifications in
//! [`ui::notifications`].

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod reveal;
pub mod ui;
