// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the
//! `[general] log_level` setting, otherwise [`DEFAULT_FILTER`].

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_FILTER: &str = "shelf_lens=info";

/// Builds the filter directive for a configured level such as `debug`.
///
/// Bare levels are scoped to this crate so dependency chatter stays quiet;
/// anything containing `=` or `,` is taken as a full directive.
#[must_use]
pub fn directive_for(level: Option<&str>) -> String {
    match level.map(str::trim).filter(|l| !l.is_empty()) {
        Some(full) if full.contains('=') || full.contains(',') => full.to_owned(),
        Some(level) => format!("shelf_lens={}", level.to_ascii_lowercase()),
        None => DEFAULT_FILTER.to_owned(),
    }
}

/// Installs the global subscriber. Returns `false` if one was already set.
pub fn init(config_level: Option<&str>) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(directive_for(config_level))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    });

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .is_ok();

    if installed {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            tracing::error!(panic = %panic_info, "panic");
            default_hook(panic_info);
        }));
        tracing::debug!("tracing initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_level_uses_default() {
        assert_eq!(directive_for(None), DEFAULT_FILTER);
        assert_eq!(directive_for(Some("  ")), DEFAULT_FILTER);
    }

    #[test]
    fn bare_level_is_scoped_to_crate() {
        assert_eq!(directive_for(Some("DEBUG")), "shelf_lens=debug");
    }

    #[test]
    fn full_directives_pass_through() {
        assert_eq!(
            directive_for(Some("shelf_lens=trace,reqwest=debug")),
            "shelf_lens=trace,reqwest=debug"
        );
    }
}
