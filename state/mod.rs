/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Read-only snapshot of the tab strip slice of application state.
//!
//! The snapshot is owned by the caller; nothing in this crate mutates it.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, read_to_string};

pub mod frame;
pub mod observer;
pub mod tab_substate;

pub use frame::{FrameKey, FrameRecord};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabStripSnapshot {
    /// Frames in tab strip order.
    pub frames: Vec<FrameRecord>,
    pub active_frame_key: Option<FrameKey>,
    /// Latest intersection ratio per observer group.
    pub observers: HashMap<String, f64>,
}

impl TabStripSnapshot {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Json(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn frame_by_key(&self, frame_key: FrameKey) -> Option<&FrameRecord> {
        self.frames.iter().find(|frame| frame.key == frame_key)
    }

    pub fn active_frame(&self) -> Option<&FrameRecord> {
        self.active_frame_key
            .and_then(|frame_key| self.frame_by_key(frame_key))
    }

    pub fn is_frame_key_active(&self, frame_key: FrameKey) -> bool {
        self.active_frame_key == Some(frame_key)
    }

    pub fn tab_hover_state(&self, frame_key: FrameKey) -> bool {
        self.frame_by_key(frame_key)
            .is_some_and(|frame| frame.hover_state)
    }

    pub fn frame_keys(&self) -> impl Iterator<Item = FrameKey> + '_ {
        self.frames.iter().map(|frame| frame.key)
    }
}

pub fn frame_location_match(frame: &FrameRecord, location: &str) -> bool {
    frame.location == location
}
