/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Side channel for soft failures of the presentation resolver.
//!
//! Resolver operations never return errors; a lookup miss is handed to a
//! [`DiagnosticsSink`] and the operation carries on with its default value.

use std::cell::RefCell;

use crate::config::{SettingKey, TabStripSettings};
use crate::presentation::PresentationError;

pub const CHANNEL_TAB_PRESENTATION_FRAME_MISSING: &str = "tab_presentation.frame_missing";

/// Severity tier for a diagnostic channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelSeverity {
    #[default]
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticChannelDescriptor {
    pub channel_id: &'static str,
    pub schema_version: u16,
    pub severity: ChannelSeverity,
}

pub const FRAME_MISSING_CHANNEL: DiagnosticChannelDescriptor = DiagnosticChannelDescriptor {
    channel_id: CHANNEL_TAB_PRESENTATION_FRAME_MISSING,
    schema_version: 1,
    severity: ChannelSeverity::Error,
};

pub trait DiagnosticsSink {
    fn report(&self, channel: &DiagnosticChannelDescriptor, error: &PresentationError);
}

/// Emits reports as `tracing` events at the channel's severity, tagged with
/// the channel id.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl DiagnosticsSink for LogDiagnostics {
    fn report(&self, channel: &DiagnosticChannelDescriptor, error: &PresentationError) {
        let channel_id = channel.channel_id;
        match channel.severity {
            ChannelSeverity::Info => tracing::info!(channel = channel_id, "{error}"),
            ChannelSeverity::Warn => tracing::warn!(channel = channel_id, "{error}"),
            ChannelSeverity::Error => tracing::error!(channel = channel_id, "{error}"),
        }
    }
}

/// Drops every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl DiagnosticsSink for SilentDiagnostics {
    fn report(&self, _channel: &DiagnosticChannelDescriptor, _error: &PresentationError) {}
}

/// Keeps reports in memory for later inspection. Single-threaded.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    reports: RefCell<Vec<(&'static str, PresentationError)>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }

    pub fn take(&self) -> Vec<(&'static str, PresentationError)> {
        self.reports.take()
    }
}

impl DiagnosticsSink for RecordingDiagnostics {
    fn report(&self, channel: &DiagnosticChannelDescriptor, error: &PresentationError) {
        self.reports
            .borrow_mut()
            .push((channel.channel_id, error.clone()));
    }
}

/// Sink selected by the `diagnostics.log-missing-frames` setting.
pub fn sink_for_settings(settings: &TabStripSettings) -> &'static dyn DiagnosticsSink {
    if settings.get(SettingKey::LogMissingFrames) {
        &LogDiagnostics
    } else {
        &SilentDiagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::TabPresentationResolver;
    use crate::state::{FrameKey, TabStripSnapshot};
    use tracing_test::traced_test;

    fn missing(operation: &'static str) -> PresentationError {
        PresentationError::FrameNotFound {
            operation,
            frame_key: FrameKey(42),
        }
    }

    #[test]
    fn recording_sink_keeps_reports_in_order() {
        let sink = RecordingDiagnostics::new();
        sink.report(&FRAME_MISSING_CHANNEL, &missing("theme_color"));
        sink.report(&FRAME_MISSING_CHANNEL, &missing("tab_icon_color"));

        assert_eq!(sink.len(), 2);
        let reports = sink.take();
        assert_eq!(reports[0].0, CHANNEL_TAB_PRESENTATION_FRAME_MISSING);
        assert_eq!(reports[1].1, missing("tab_icon_color"));
        assert!(sink.is_empty());
    }

    #[traced_test]
    #[test]
    fn log_sink_emits_at_channel_severity() {
        LogDiagnostics.report(&FRAME_MISSING_CHANNEL, &missing("theme_color"));

        assert!(logs_contain("ERROR"));
        assert!(logs_contain(CHANNEL_TAB_PRESENTATION_FRAME_MISSING));
        assert!(logs_contain("Unable to find frame 42 for theme_color"));
    }

    #[traced_test]
    #[test]
    fn warn_channel_emits_warning() {
        let channel = DiagnosticChannelDescriptor {
            severity: ChannelSeverity::Warn,
            ..FRAME_MISSING_CHANNEL
        };
        LogDiagnostics.report(&channel, &missing("tab_icon_color"));

        assert!(logs_contain("WARN"));
        assert!(!logs_contain("ERROR"));
    }

    #[traced_test]
    #[test]
    fn default_settings_log_missing_frames() {
        let snapshot = TabStripSnapshot::default();
        let settings = TabStripSettings::default();
        let resolver = TabPresentationResolver::new(&snapshot, &settings);

        assert_eq!(resolver.theme_color(FrameKey(42)), None);
        assert!(logs_contain("Unable to find frame 42 for theme_color"));
    }

    #[traced_test]
    #[test]
    fn disabled_setting_silences_missing_frames() {
        let snapshot = TabStripSnapshot::default();
        let settings =
            TabStripSettings::from_toml_str("[diagnostics]\nlog-missing-frames = false")
                .unwrap();
        let resolver = TabPresentationResolver::new(&snapshot, &settings);

        assert_eq!(resolver.theme_color(FrameKey(42)), None);
        assert!(!logs_contain("Unable to find frame 42"));
    }
}
