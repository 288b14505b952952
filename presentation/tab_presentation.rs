/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use serde::Serialize;

use crate::state::FrameKey;
use crate::style::TextColor;

/// Everything the tab component needs to paint one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabPresentation {
    pub frame_key: FrameKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<u64>,
    pub theme_color: Option<String>,
    pub icon_color: TextColor,
    pub show_tab_end_icon: bool,
    pub add_extra_gutter_to_title: bool,
    pub centralize_tab_icons: bool,
    /// CSS `background` value for the tab end icon.
    pub tab_end_icon_background: String,
    pub is_private: bool,
    pub is_partition: bool,
    pub show_close_icon: bool,
}
