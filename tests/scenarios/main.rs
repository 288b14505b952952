use std::io::Write;

use tabstrip::diagnostics::RecordingDiagnostics;
use tabstrip::{
    FrameKey, TabPresentationResolver, TabStripSettings, TabStripSnapshot, TextColor, VERSION,
};

const SNAPSHOT: &str = r##"{
    "frames": [
        {"key": 1, "location": "about:newtab"},
        {"key": 2, "location": "https://news.example", "themeColor": "#0a0a0a"},
        {"key": 3, "location": "https://private.example", "isPrivate": true, "hoverState": true},
        {"key": 4, "location": "https://work.example", "partitionNumber": 1}
    ],
    "activeFrameKey": 2,
    "observers": {"tabs": 0.9}
}"##;

fn snapshot() -> TabStripSnapshot {
    TabStripSnapshot::from_json_str(SNAPSHOT).expect("scenario snapshot parses")
}

#[test]
fn scenarios_binary_smoke_runs() {
    assert!(!VERSION.is_empty());
}

#[test]
fn tab_strip_scenario_resolves_every_tab() {
    let snapshot = snapshot();
    let settings = TabStripSettings::default();
    let diagnostics = RecordingDiagnostics::new();
    let resolver = TabPresentationResolver::with_diagnostics(&snapshot, &settings, &diagnostics);

    let tabs = resolver.resolve_all(&[FrameKey(1)]);
    assert_eq!(tabs.len(), 4);

    let new_tab = &tabs[0];
    assert!(new_tab.add_extra_gutter_to_title);
    assert!(new_tab.centralize_tab_icons);
    assert_eq!(new_tab.icon_color, TextColor::Black);

    let active = &tabs[1];
    assert_eq!(active.theme_color.as_deref(), Some("#0a0a0a"));
    assert_eq!(active.icon_color, TextColor::White);
    assert_eq!(
        active.tab_end_icon_background,
        "linear-gradient(to left, #0a0a0a 0, transparent 12px)"
    );

    let private = &tabs[2];
    assert_eq!(private.icon_color, TextColor::White);
    assert!(private.show_close_icon);
    assert!(!private.show_tab_end_icon);
    assert_eq!(
        private.tab_end_icon_background,
        "linear-gradient(to left, #4b3c6e 10px, transparent 40px)"
    );

    let partition = &tabs[3];
    assert!(partition.is_partition);
    assert!(partition.show_tab_end_icon);
    assert_eq!(
        partition.tab_end_icon_background,
        "linear-gradient(to left, #ddd 10px, transparent 40px)"
    );

    assert!(diagnostics.is_empty());
}

#[test]
fn disabled_painting_scenario_from_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[tabs]\npaint-tabs = false").unwrap();
    let settings = TabStripSettings::load(file.path()).expect("settings load");

    let snapshot = snapshot();
    let diagnostics = RecordingDiagnostics::new();
    let resolver = TabPresentationResolver::with_diagnostics(&snapshot, &settings, &diagnostics);

    assert_eq!(resolver.theme_color(FrameKey(2)), None);
    assert_eq!(resolver.tab_icon_color(FrameKey(2)), Some(TextColor::Black));
    assert_eq!(
        resolver
            .tab_end_icon_background(FrameKey(2))
            .map(|background| background.to_string())
            .as_deref(),
        Some("linear-gradient(to left, #fff 0, transparent 12px)")
    );
}

#[test]
fn missing_frame_scenario_soft_fails() {
    let snapshot = snapshot();
    let settings = TabStripSettings::default();
    let diagnostics = RecordingDiagnostics::new();
    let resolver = TabPresentationResolver::with_diagnostics(&snapshot, &settings, &diagnostics);

    assert_eq!(resolver.tab_icon_color(FrameKey(42)), None);
    assert_eq!(resolver.theme_color(FrameKey(42)), None);
    assert!(!resolver.show_tab_end_icon(FrameKey(42)));

    let reports = diagnostics.take();
    assert_eq!(reports.len(), 3);
    assert!(reports[0].1.to_string().contains("42"));
}

#[test]
fn narrow_strip_scenario_hides_end_icons() {
    let mut snapshot = snapshot();
    snapshot.observers.insert("tabs".to_string(), 0.3);
    let settings = TabStripSettings::default();
    let resolver = TabPresentationResolver::new(&snapshot, &settings);

    for key in snapshot.frame_keys() {
        assert!(!resolver.show_tab_end_icon(key));
        assert!(resolver.centralize_tab_icons(key, false));
        let background = resolver.tab_end_icon_background(key).unwrap();
        assert_eq!(background.color, "transparent");
    }
}
