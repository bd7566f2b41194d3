pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::SeriesStyle;

use netuse_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible — invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Plot background.
    pub background: Color,
    /// Frame, tick marks, and tick labels.
    pub frame: Color,
    /// Receive trend line (left axis).
    pub recv: SeriesStyle,
    /// Transmit trend line (right axis).
    pub send: SeriesStyle,
    /// Label font size in points.
    pub font_size: f32,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background: Color::from_hex(&cfg.background).unwrap_or(Color::WHITE),
            frame:      Color::from_hex(&cfg.frame).unwrap_or(Color::BLACK),
            recv: SeriesStyle {
                color: Color::from_hex(&cfg.recv_color).unwrap_or(Color::RED),
                width: cfg.recv_width,
            },
            send: SeriesStyle {
                color: Color::from_hex(&cfg.send_color).unwrap_or(Color::CYAN),
                width: cfg.send_width,
            },
            font_size: cfg.font_size,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
