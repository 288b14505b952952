/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Per-tab predicates over partition, privacy and close icon state.
//!
//! Every predicate answers `false` for a frame key missing from the snapshot.

use crate::state::observer::is_entry_intersected;
use crate::state::{FrameKey, TabStripSnapshot};
use crate::style::IntersectionBreakpoint;
use crate::style::theme::TABS_OBSERVER_GROUP;

pub fn is_private_tab(snapshot: &TabStripSnapshot, frame_key: FrameKey) -> bool {
    snapshot
        .frame_by_key(frame_key)
        .is_some_and(|frame| frame.is_private)
}

/// Tab running in a non-default session partition.
pub fn is_partition_tab(snapshot: &TabStripSnapshot, frame_key: FrameKey) -> bool {
    snapshot
        .frame_by_key(frame_key)
        .is_some_and(|frame| !frame.is_private && frame.partition_number > 0)
}

/// Active tab on a strip narrow enough that its close icon stays visible.
pub fn has_fixed_close_icon(snapshot: &TabStripSnapshot, frame_key: FrameKey) -> bool {
    snapshot.frame_by_key(frame_key).is_some()
        && snapshot.is_frame_key_active(frame_key)
        && is_entry_intersected(snapshot, TABS_OBSERVER_GROUP, IntersectionBreakpoint::At75)
}

/// Hovered tab on a strip wide enough for a hover close icon.
pub fn has_relative_close_icon(snapshot: &TabStripSnapshot, frame_key: FrameKey) -> bool {
    snapshot.tab_hover_state(frame_key)
        && !is_entry_intersected(snapshot, TABS_OBSERVER_GROUP, IntersectionBreakpoint::At75)
}

pub fn show_close_tab_icon(snapshot: &TabStripSnapshot, frame_key: FrameKey) -> bool {
    !is_entry_intersected(snapshot, TABS_OBSERVER_GROUP, IntersectionBreakpoint::At20)
        && (has_relative_close_icon(snapshot, frame_key)
            || has_fixed_close_icon(snapshot, frame_key))
}
