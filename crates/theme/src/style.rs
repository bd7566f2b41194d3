use crate::colors::Color;

/// Stroke settings for one trend line.
#[derive(Debug, Clone, Copy)]
pub struct SeriesStyle {
    pub color: Color,
    /// Stroke width in logical pixels.
    pub width: f32,
}
