/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Presentational state for a browser tab strip.
//!
//! The crate reads an immutable [`state::TabStripSnapshot`] plus
//! [`config::TabStripSettings`] and derives colors and layout flags for each
//! tab through [`presentation::TabPresentationResolver`].

pub mod config;
pub mod diagnostics;
pub mod presentation;
pub mod state;
pub mod style;

pub use config::{ConfigError, SettingKey, TabStripSettings};
pub use presentation::{
    PresentationError, TabEndIconBackground, TabPresentation, TabPresentationResolver,
};
pub use state::{FrameKey, FrameRecord, TabStripSnapshot};
pub use style::TextColor;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
