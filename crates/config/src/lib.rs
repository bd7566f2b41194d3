pub mod schema;
pub mod watcher;

pub use schema::{LayoutConfig, NetuseConfig, PollConfig, ThemeConfig, WindowConfig};
pub use watcher::ConfigWatcher;

use netuse_core::{NetuseError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `NetuseConfig::default()` if
/// the file doesn't exist so the graph always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<NetuseConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(NetuseConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| NetuseError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| NetuseError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("netuse").join("netuse.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_and_poll_settings() {
        let config = NetuseConfig::default();
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 200.0);
        assert_eq!(config.poll.interval_ms, 250);
        assert_eq!(config.poll.retention_secs, 300.0);
        assert_eq!(config.layout.scale_x, 12.0);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: NetuseConfig = toml::from_str(
            r#"
            [window]
            title = "wlan0 throughput"

            [poll]
            interval_ms = 500
            "#,
        )
        .unwrap();

        assert_eq!(config.window.title, "wlan0 throughput");
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.poll.interval_ms, 500);
        assert_eq!(config.poll.retention_secs, 300.0);
    }
}
