/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a frame (one browser tab) within a snapshot.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FrameKey(pub u64);

impl fmt::Display for FrameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for FrameKey {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A browser tab as recorded by the state container.
///
/// Field names are camelCase on the wire to match snapshots exported by the
/// renderer process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameRecord {
    pub key: FrameKey,
    pub tab_id: Option<u64>,
    pub location: String,
    pub is_private: bool,
    /// Session partition; `0` is the default session.
    pub partition_number: u32,
    /// Color declared by the page (`<meta name="theme-color">`).
    pub theme_color: Option<String>,
    /// Color sampled from the page when it declares none.
    pub computed_theme_color: Option<String>,
    pub hover_state: bool,
    /// Location the tab is pinned to; present only for pinned tabs.
    pub pinned_location: Option<String>,
}

impl FrameRecord {
    pub fn new(key: FrameKey, location: impl Into<String>) -> Self {
        Self {
            key,
            location: location.into(),
            ..Self::default()
        }
    }

    /// Page-declared theme color, falling back to the computed one.
    ///
    /// Empty strings count as absent.
    pub fn effective_theme_color(&self) -> Option<&str> {
        non_empty(self.theme_color.as_deref())
            .or_else(|| non_empty(self.computed_theme_color.as_deref()))
    }

    pub fn is_pinned(&self) -> bool {
        non_empty(self.pinned_location.as_deref()).is_some()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
