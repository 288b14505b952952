/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Tab strip style tokens.

pub const TAB_BACKGROUND: &str = "#ddd";
pub const TAB_ACTIVE_BACKGROUND: &str = "#fff";
pub const TAB_PRIVATE_BACKGROUND: &str = "#665296";
pub const TAB_ACTIVE_PRIVATE_BACKGROUND: &str = "#4b3c6e";
pub const TRANSPARENT: &str = "transparent";

/// Location of the built-in new tab page.
pub const NEW_TAB_LOCATION: &str = "about:newtab";

/// Observer group the tab strip reports its intersection ratio under.
pub const TABS_OBSERVER_GROUP: &str = "tabs";

/// Width thresholds at which the tab strip layout changes.
///
/// Each breakpoint is expressed as the visible ratio of a tab reported by the
/// intersection observer; a tab is "at" the breakpoint once its ratio drops to
/// or below the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionBreakpoint {
    /// Narrowest layout: close icons are hidden entirely.
    At20,
    /// Icons are centralized and the tab end icon is dropped.
    At40,
    /// Close icon moves from hover-only to fixed on the active tab.
    At75,
}

impl IntersectionBreakpoint {
    pub fn ratio(self) -> f64 {
        match self {
            Self::At20 => 0.25,
            Self::At40 => 0.5,
            Self::At75 => 0.75,
        }
    }
}
