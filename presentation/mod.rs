/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Presentational state for tabs in the tab strip.
//!
//! [`TabPresentationResolver`] borrows a snapshot, the settings and a
//! diagnostics sink, and maps a frame key to colors and layout flags. Every
//! public operation looks the frame up first. A miss is reported on
//! [`FRAME_MISSING_CHANNEL`] and the operation returns its default:
//!
//! | operation | default |
//! |---|---|
//! | `theme_color` | `None` |
//! | `tab_icon_color` | `None` |
//! | `tab_end_icon_background` | `None` |
//! | every `bool` operation | `false` |

use std::fmt;

use crate::config::TabStripSettings;
use crate::diagnostics::{DiagnosticsSink, FRAME_MISSING_CHANNEL, sink_for_settings};
use crate::state::observer::is_entry_intersected;
use crate::state::tab_substate::{
    has_fixed_close_icon, has_relative_close_icon, is_partition_tab, is_private_tab,
    show_close_tab_icon,
};
use crate::state::{FrameKey, FrameRecord, TabStripSnapshot, frame_location_match};
use crate::style::theme::{
    NEW_TAB_LOCATION, TAB_ACTIVE_BACKGROUND, TAB_ACTIVE_PRIVATE_BACKGROUND, TAB_BACKGROUND,
    TAB_PRIVATE_BACKGROUND, TABS_OBSERVER_GROUP, TRANSPARENT,
};
use crate::style::{IntersectionBreakpoint, TextColor, text_color_for_background};

mod tab_presentation;

pub use tab_presentation::TabPresentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationError {
    FrameNotFound {
        operation: &'static str,
        frame_key: FrameKey,
    },
}

impl fmt::Display for PresentationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameNotFound {
                operation,
                frame_key,
            } => write!(f, "Unable to find frame {frame_key} for {operation}"),
        }
    }
}

impl std::error::Error for PresentationError {}

/// Background behind the tab end icon: a right-anchored fade to transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEndIconBackground {
    pub color: String,
    /// Wide stops leave room for a close icon or a session badge.
    pub wide: bool,
}

impl fmt::Display for TabEndIconBackground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.wide {
            write!(
                f,
                "linear-gradient(to left, {} 10px, transparent 40px)",
                self.color
            )
        } else {
            write!(
                f,
                "linear-gradient(to left, {} 0, transparent 12px)",
                self.color
            )
        }
    }
}

pub struct TabPresentationResolver<'a> {
    snapshot: &'a TabStripSnapshot,
    settings: &'a TabStripSettings,
    diagnostics: &'a dyn DiagnosticsSink,
}

impl<'a> TabPresentationResolver<'a> {
    /// Resolver whose diagnostics follow `diagnostics.log-missing-frames`.
    pub fn new(snapshot: &'a TabStripSnapshot, settings: &'a TabStripSettings) -> Self {
        Self::with_diagnostics(snapshot, settings, sink_for_settings(settings))
    }

    pub fn with_diagnostics(
        snapshot: &'a TabStripSnapshot,
        settings: &'a TabStripSettings,
        diagnostics: &'a dyn DiagnosticsSink,
    ) -> Self {
        Self {
            snapshot,
            settings,
            diagnostics,
        }
    }

    pub fn snapshot(&self) -> &'a TabStripSnapshot {
        self.snapshot
    }

    /// Theme color to tint the tab with, if tab painting is enabled.
    pub fn theme_color(&self, frame_key: FrameKey) -> Option<&'a str> {
        let frame = self.frame(frame_key, "theme_color")?;
        self.painted_theme_color(frame)
    }

    /// Color for the tab's icons and title text.
    ///
    /// `None` only when the frame is missing.
    pub fn tab_icon_color(&self, frame_key: FrameKey) -> Option<TextColor> {
        let frame = self.frame(frame_key, "tab_icon_color")?;
        Some(self.icon_color_of(frame))
    }

    pub fn check_if_text_color(&self, frame_key: FrameKey, color: TextColor) -> bool {
        self.frame(frame_key, "check_if_text_color")
            .is_some_and(|frame| self.icon_color_of(frame) == color)
    }

    pub fn show_tab_end_icon(&self, frame_key: FrameKey) -> bool {
        self.frame(frame_key, "show_tab_end_icon")
            .is_some_and(|frame| self.end_icon_visible(frame.key))
    }

    /// The new tab page has no favicon, so its title needs extra left gutter.
    pub fn add_extra_gutter_to_title(&self, frame_key: FrameKey) -> bool {
        self.frame(frame_key, "add_extra_gutter_to_title")
            .is_some_and(|frame| frame_location_match(frame, NEW_TAB_LOCATION))
    }

    pub fn centralize_tab_icons(&self, frame_key: FrameKey, is_pinned: bool) -> bool {
        self.frame(frame_key, "centralize_tab_icons")
            .is_some_and(|_| is_pinned || self.at_40_breakpoint())
    }

    pub fn tab_end_icon_background(&self, frame_key: FrameKey) -> Option<TabEndIconBackground> {
        let frame = self.frame(frame_key, "tab_end_icon_background")?;
        Some(self.end_icon_background_of(frame))
    }

    /// Every value above for one tab, with a single lookup.
    pub fn resolve_tab(&self, frame_key: FrameKey, is_pinned: bool) -> Option<TabPresentation> {
        let frame = self.frame(frame_key, "resolve_tab")?;
        Some(TabPresentation {
            frame_key: frame.key,
            tab_id: frame.tab_id,
            theme_color: self.painted_theme_color(frame).map(str::to_string),
            icon_color: self.icon_color_of(frame),
            show_tab_end_icon: self.end_icon_visible(frame.key),
            add_extra_gutter_to_title: frame_location_match(frame, NEW_TAB_LOCATION),
            centralize_tab_icons: is_pinned || self.at_40_breakpoint(),
            tab_end_icon_background: self.end_icon_background_of(frame).to_string(),
            is_private: is_private_tab(self.snapshot, frame.key),
            is_partition: is_partition_tab(self.snapshot, frame.key),
            show_close_icon: show_close_tab_icon(self.snapshot, frame.key),
        })
    }

    /// Presentation of every frame in strip order.
    ///
    /// A frame counts as pinned when the snapshot records a pinned location
    /// for it or its key is listed in `pinned`.
    pub fn resolve_all(&self, pinned: &[FrameKey]) -> Vec<TabPresentation> {
        self.snapshot
            .frames
            .iter()
            .filter_map(|frame| {
                let is_pinned = frame.is_pinned() || pinned.contains(&frame.key);
                self.resolve_tab(frame.key, is_pinned)
            })
            .collect()
    }

    fn frame(&self, frame_key: FrameKey, operation: &'static str) -> Option<&'a FrameRecord> {
        let frame = self.snapshot.frame_by_key(frame_key);
        if frame.is_none() {
            self.diagnostics.report(
                &FRAME_MISSING_CHANNEL,
                &PresentationError::FrameNotFound {
                    operation,
                    frame_key,
                },
            );
        }
        frame
    }

    fn at_40_breakpoint(&self) -> bool {
        is_entry_intersected(
            self.snapshot,
            TABS_OBSERVER_GROUP,
            IntersectionBreakpoint::At40,
        )
    }

    fn painted_theme_color(&self, frame: &'a FrameRecord) -> Option<&'a str> {
        if !self.settings.paint_tabs() {
            return None;
        }
        frame.effective_theme_color()
    }

    fn icon_color_of(&self, frame: &FrameRecord) -> TextColor {
        let is_active = self.snapshot.is_frame_key_active(frame.key);
        let is_hovered = frame.hover_state;
        let default_color = if frame.is_private && (is_active || is_hovered) {
            TextColor::White
        } else {
            TextColor::Black
        };

        if !frame.is_private
            && is_active
            && self.settings.paint_tabs()
            && let Some(contrast) = frame
                .effective_theme_color()
                .and_then(text_color_for_background)
        {
            return contrast;
        }
        default_color
    }

    fn end_icon_visible(&self, frame_key: FrameKey) -> bool {
        !has_fixed_close_icon(self.snapshot, frame_key)
            && !has_relative_close_icon(self.snapshot, frame_key)
            && !self.at_40_breakpoint()
    }

    fn end_icon_background_of(&self, frame: &'a FrameRecord) -> TabEndIconBackground {
        let frame_key = frame.key;
        let theme_color = self.painted_theme_color(frame);
        let is_private = is_private_tab(self.snapshot, frame_key);
        let is_partition = is_partition_tab(self.snapshot, frame_key);
        let is_hovered = self.snapshot.tab_hover_state(frame_key);
        let is_active = self.snapshot.is_frame_key_active(frame_key);
        let has_close_icon = show_close_tab_icon(self.snapshot, frame_key);

        let mut color = match (is_active, theme_color) {
            (true, Some(theme_color)) => theme_color,
            (true, None) => TAB_ACTIVE_BACKGROUND,
            (false, _) => TAB_BACKGROUND,
        };
        if is_private && !is_active {
            color = TAB_PRIVATE_BACKGROUND;
        }
        if is_private && (is_active || is_hovered) {
            color = TAB_ACTIVE_PRIVATE_BACKGROUND;
        }
        if self.at_40_breakpoint() {
            color = TRANSPARENT;
        }

        TabEndIconBackground {
            color: color.to_string(),
            wide: is_partition || is_private || has_close_icon,
        }
    }
}
