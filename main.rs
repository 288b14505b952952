/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::path::PathBuf;

use bpaf::Bpaf;
use tabstrip::{
    ConfigError, FrameKey, TabPresentationResolver, TabStripSettings, TabStripSnapshot,
};
use tracing_subscriber::EnvFilter;

/// Resolve tab strip presentation for every frame in a state snapshot.
#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version)]
struct Options {
    /// Snapshot JSON exported by the renderer process
    #[bpaf(long, argument("PATH"))]
    snapshot: PathBuf,
    /// Settings TOML; defaults apply when omitted
    #[bpaf(long, argument("PATH"))]
    settings: Option<PathBuf>,
    /// Frame key of a pinned tab, may be repeated
    #[bpaf(long, argument("KEY"))]
    pinned: Vec<u64>,
    /// Log filter, overrides RUST_LOG
    #[bpaf(long("log"), argument("FILTER"))]
    log_filter: Option<String>,
}

fn main() {
    let opts = options().run();
    init_tracing(opts.log_filter.as_deref());

    if let Err(e) = run(&opts) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(opts: &Options) -> Result<(), ConfigError> {
    let snapshot = TabStripSnapshot::load(&opts.snapshot)?;
    let settings = match &opts.settings {
        Some(path) => TabStripSettings::load(path)?,
        None => TabStripSettings::default(),
    };
    let pinned: Vec<FrameKey> = opts.pinned.iter().copied().map(FrameKey).collect();

    let resolver = TabPresentationResolver::new(&snapshot, &settings);
    let tabs = resolver.resolve_all(&pinned);
    tracing::debug!(tabs = tabs.len(), "resolved tab strip presentation");

    let json =
        serde_json::to_string_pretty(&tabs).map_err(|e| ConfigError::Json(e.to_string()))?;
    println!("{json}");
    Ok(())
}
