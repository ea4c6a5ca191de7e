// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub tui: TuiConfig,
}

/// Connection settings for the evaluation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the evaluator API.  The client POSTs to `{base_url}/ask`.
    pub base_url: String,
    /// Request timeout in seconds (0 = no timeout).
    pub timeout_secs: u64,
    /// Label shown in the status bar.  Defaults to the host part of
    /// `base_url` when empty.
    #[serde(default)]
    pub display_name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".into(),
            timeout_secs: 120,
            display_name: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Width used for answer wrapping (0 = auto, use the pane width).
    pub wrap_width: u16,
    /// Use plain ASCII borders/indicators instead of Unicode box-drawing
    /// characters.  Enable this when the terminal font lacks wide Unicode
    /// support (the font renders replacement glyphs / "gibberish").
    /// Can also be forced with the GAVEL_ASCII=1 environment variable.
    #[serde(default)]
    pub ascii: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { wrap_width: 0, ascii: false }
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_points_at_localhost() {
        let c = Config::default();
        assert_eq!(c.service.base_url, "http://localhost:8000/api");
        assert_eq!(c.service.timeout_secs, 120);
    }

    #[test]
    fn default_tui_has_unicode_borders_and_auto_wrap() {
        let c = Config::default();
        assert!(!c.tui.ascii);
        assert_eq!(c.tui.wrap_width, 0);
    }

    #[test]
    fn partial_toml_fills_missing_sections_with_defaults() {
        let c: Config = toml::from_str(
            r#"[service]
base_url = "https://judge.example.com/api"
timeout_secs = 30"#,
        )
        .unwrap();
        assert_eq!(c.service.base_url, "https://judge.example.com/api");
        assert_eq!(c.service.timeout_secs, 30);
        // [tui] section absent entirely — defaults apply.
        assert_eq!(c.tui.wrap_width, 0);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let c: Config = toml::from_str(
            r#"[service]
base_url = "https://judge.example.com"
timeout_secs = 10
future_option = true"#,
        )
        .unwrap();
        assert_eq!(c.service.timeout_secs, 10);
    }
}
