use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `netuse.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetuseConfig {
    /// Window chrome settings.
    pub window: WindowConfig,
    /// Counter polling and history retention.
    pub poll: PollConfig,
    /// Graph geometry constants.
    pub layout: LayoutConfig,
    /// Colors and stroke widths.
    pub theme: ThemeConfig,
}

/// Window chrome settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window width in logical pixels.
    pub width: f32,
    /// Initial window height in logical pixels.
    pub height: f32,
    /// Window title.
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 200.0,
            title: "Network Usage".to_string(),
        }
    }
}

/// Counter polling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Poll interval in milliseconds.
    pub interval_ms: u64,
    /// Minimum seconds of history the sample buffer keeps.
    pub retention_secs: f64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: 250,
            retention_secs: 300.0,
        }
    }
}

/// Graph geometry. All lengths are logical pixels unless noted.
///
/// The plot area is the window minus the margins; `scale_x` fixes how many
/// pixels one second of history occupies, which in turn fixes the width of
/// one swipe window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_x: f32,
    /// Length of an axis tick mark.
    pub tick_length: f32,
    /// Horizontal scale in pixels per second.
    pub scale_x: f32,
    /// Width of the solid wipe-front rectangle ahead of the newest point.
    pub clear_size: f32,
    /// Width of the dissolve gradient trailing the wipe front.
    pub gradient_size: f32,
    /// Extra seconds of look-ahead when picking the axis scale, so the scale
    /// settles slightly before the data reaches the right edge.
    pub scale_lookahead_secs: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin_top: 32.0,
            margin_bottom: 16.0,
            margin_x: 40.0,
            tick_length: 6.0,
            scale_x: 12.0,
            clear_size: 16.0,
            gradient_size: 32.0,
            scale_lookahead_secs: 0.5,
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Plot background color (hex, e.g. `"#ffffff"`).
    pub background: String,
    /// Frame, tick mark, and tick label color.
    pub frame: String,
    /// Receive trend line color.
    pub recv_color: String,
    /// Receive trend line stroke width.
    pub recv_width: f32,
    /// Transmit trend line color.
    pub send_color: String,
    /// Transmit trend line stroke width.
    pub send_width: f32,
    /// Label font size in points.
    pub font_size: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            frame:      "#000000".to_string(),
            recv_color: "#ff0000".to_string(),
            recv_width: 2.0,
            send_color: "#00b3ff".to_string(),
            send_width: 1.5,
            font_size:  12.0,
        }
    }
}
