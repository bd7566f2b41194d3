//! Scrolling dual-line throughput graph.
//!
//! Data flows left to right across a fixed-width time window; when the newest
//! sample runs past the right edge the window pages forward by one full width
//! and the previous screen dissolves behind a wipe front, instead of the whole
//! plot scrolling continuously.

use std::cell::Cell;

use iced::alignment::Vertical;
use iced::mouse;
use iced::widget::canvas::{self, gradient, Cache, Canvas, Frame, Geometry, LineJoin, Path, Stroke, Text};
use iced::widget::text::Alignment as TextAlign;
use iced::{Element, Length, Point, Rectangle, Renderer, Size};

use netuse_config::LayoutConfig;
use netuse_core::series::Timestamp;
use netuse_core::{Message, RateSample, TimeIndexedData};
use netuse_theme::{SeriesStyle, Theme};

use crate::scale::{axis_scale, AxisScale};

/// Per-frame axis scaling, one per series.
struct AxisPair {
    recv: AxisScale,
    send: AxisScale,
}

/// Retained graph state, owned by the application across frames.
#[derive(Debug)]
pub struct GraphState {
    cache: Cache,
    /// Left edge of the currently visible swipe window. `None` until the
    /// first sample arrives.
    start: Cell<Option<Timestamp>>,
}

impl GraphState {
    pub fn new() -> Self {
        Self {
            cache: Cache::new(),
            start: Cell::new(None),
        }
    }

    /// Drop the cached geometry so the next frame redraws.
    pub fn invalidate(&self) {
        self.cache.clear();
    }
}

impl Default for GraphState {
    fn default() -> Self {
        Self::new()
    }
}

/// One frame's view over the sample buffer. Constructed fresh in `view()`;
/// everything it borrows lives in the application state.
pub struct GraphView<'a> {
    data: &'a TimeIndexedData<RateSample>,
    state: &'a GraphState,
    layout: &'a LayoutConfig,
    theme: &'a Theme,
}

impl<'a> GraphView<'a> {
    pub fn new(
        data: &'a TimeIndexedData<RateSample>,
        state: &'a GraphState,
        layout: &'a LayoutConfig,
        theme: &'a Theme,
    ) -> Self {
        Self {
            data,
            state,
            layout,
            theme,
        }
    }

    pub fn view(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Seconds of data one screen width holds.
    fn swipe_duration(&self, width: f32) -> f64 {
        ((width - self.layout.margin_x * 2.0) / self.layout.scale_x) as f64
    }

    /// Initialize the window start on first data, then page it forward until
    /// the newest sample fits inside one swipe width.
    fn recompute_start(&self, width: f32) {
        if self.state.start.get().is_none() && !self.data.is_empty() {
            self.state.start.set(self.data.first_event_time());
        }

        let (Some(first), Some(last)) =
            (self.data.first_event_time(), self.data.last_event_time())
        else {
            return;
        };
        if first == last {
            return; // single instant; nothing to page yet
        }

        let swipe = self.swipe_duration(width);
        if swipe <= 0.0 {
            return; // viewport narrower than the margins
        }

        if let Some(start) = self.state.start.get() {
            self.state.start.set(Some(advance_start(start, last, swipe)));
        }
    }

    fn clear_background(&self, frame: &mut Frame, size: Size) {
        frame.fill_rectangle(Point::ORIGIN, size, self.theme.background.to_iced());
    }

    /// Frame, unit labels, tick marks, and tick value labels. The two axes
    /// are scaled independently: recv on the left, send on the right.
    fn draw_axes(&self, frame: &mut Frame, size: Size, scaling: &AxisPair) {
        let l = self.layout;
        let (width, height) = (size.width, size.height);

        // Open-topped frame around the plot area, on half-pixel offsets.
        let outline = Path::new(|b| {
            b.move_to(Point::new(l.margin_x + 0.5, l.margin_top + 0.5));
            b.line_to(Point::new(l.margin_x + 0.5, height - l.margin_bottom + 0.5));
            b.line_to(Point::new(width - l.margin_x + 0.5, height - l.margin_bottom + 0.5));
            b.line_to(Point::new(width - l.margin_x + 0.5, l.margin_top + 0.5));
        });
        frame.stroke(
            &outline,
            Stroke::default().with_color(self.theme.frame.to_iced()).with_width(1.0),
        );

        let label_y = l.margin_top - l.tick_length * 1.5;
        frame.fill_text(Text {
            content: format!("recv {}/s", scaling.recv.unit),
            position: Point::new(l.tick_length, label_y),
            color: self.theme.recv.color.to_iced(),
            size: self.theme.font_size.into(),
            align_y: Vertical::Bottom,
            ..Text::default()
        });
        frame.fill_text(Text {
            content: format!("send {}/s", scaling.send.unit),
            position: Point::new(width - l.tick_length, label_y),
            color: self.theme.send.color.to_iced(),
            size: self.theme.font_size.into(),
            align_x: TextAlign::Right,
            align_y: Vertical::Bottom,
            ..Text::default()
        });

        let usable = height - l.margin_top - l.margin_bottom;
        let tick_stroke = Stroke::default()
            .with_color(self.theme.frame.to_iced())
            .with_width(1.0);

        for i in 0..5u32 {
            let y = (height - l.margin_bottom - usable * i as f32 / 4.0).round() + 0.5;

            // Left: receive axis.
            let tick = Path::line(
                Point::new(l.margin_x + 0.5, y),
                Point::new(l.margin_x + 0.5 - l.tick_length, y),
            );
            frame.stroke(&tick, tick_stroke.clone());
            frame.fill_text(Text {
                content: (i * scaling.recv.tick).to_string(),
                position: Point::new(l.margin_x - l.tick_length * 1.5, y),
                color: self.theme.frame.to_iced(),
                size: self.theme.font_size.into(),
                align_x: TextAlign::Right,
                align_y: Vertical::Center,
                ..Text::default()
            });

            // Right: transmit axis.
            let tick = Path::line(
                Point::new(width - l.margin_x + 0.5, y),
                Point::new(width - l.margin_x + 0.5 + l.tick_length, y),
            );
            frame.stroke(&tick, tick_stroke.clone());
            frame.fill_text(Text {
                content: (i * scaling.send.tick).to_string(),
                position: Point::new(width - l.margin_x + l.tick_length * 1.5, y),
                color: self.theme.frame.to_iced(),
                size: self.theme.font_size.into(),
                align_y: Vertical::Center,
                ..Text::default()
            });
        }
    }

    /// Remnant of the outgoing swipe window, painted over with the wipe front
    /// (a solid rectangle up to the newest sample plus a dissolve gradient).
    fn plot_previous_screen(
        &self,
        frame: &mut Frame,
        clip: Rectangle,
        size: Size,
        scaling: &AxisPair,
    ) {
        let Some(start) = self.state.start.get() else {
            return; // no data has ever arrived
        };
        let Some(last) = self.data.last_event_time() else {
            return;
        };
        let swipe = self.swipe_duration(size.width);
        if swipe <= 0.0 {
            return;
        }

        let l = self.layout;
        let data = self.data.segment(last - swipe, start);
        let prev_start = start - swipe;
        self.plot_trend_line(frame, clip, size, data, prev_start, &scaling.send, self.theme.send, |s| s.send);
        self.plot_trend_line(frame, clip, size, data, prev_start, &scaling.recv, self.theme.recv, |s| s.recv);

        // Wipe front: the incoming region is blanked, then the remnant fades
        // out across a short gradient.
        let last_x = ((last - start) * l.scale_x as f64) as f32;
        let background = self.theme.background;
        frame.fill_rectangle(
            Point::new(l.margin_x - clip.x, -clip.y),
            Size::new(last_x + l.clear_size, size.height),
            background.to_iced(),
        );
        let fade_origin = Point::new(l.margin_x + last_x + l.clear_size - clip.x, -clip.y);
        // FRAC_PI_2 is a left-to-right fade in iced's angle convention; express
        // it as the point-based gradient the canvas `Fill` requires, spanning
        // the width of the fade band.
        let fade = gradient::Linear::new(
            fade_origin,
            Point::new(fade_origin.x + l.gradient_size, fade_origin.y),
        )
        .add_stop(0.0, background.to_iced())
        .add_stop(1.0, background.with_alpha(0.0).to_iced());
        frame.fill_rectangle(
            fade_origin,
            Size::new(l.gradient_size, size.height),
            fade,
        );
    }

    /// Trend lines of the active swipe window.
    fn plot_current_screen(
        &self,
        frame: &mut Frame,
        clip: Rectangle,
        size: Size,
        scaling: &AxisPair,
    ) {
        let (Some(start), Some(last)) = (self.state.start.get(), self.data.last_event_time())
        else {
            return;
        };

        let data = self.data.segment(start, last);
        self.plot_trend_line(frame, clip, size, data, start, &scaling.send, self.theme.send, |s| s.send);
        self.plot_trend_line(frame, clip, size, data, start, &scaling.recv, self.theme.recv, |s| s.recv);
    }

    #[allow(clippy::too_many_arguments)]
    fn plot_trend_line(
        &self,
        frame: &mut Frame,
        clip: Rectangle,
        size: Size,
        data: &[(Timestamp, RateSample)],
        window_start: Timestamp,
        scale: &AxisScale,
        style: SeriesStyle,
        select: impl Fn(&RateSample) -> f64,
    ) {
        if data.len() < 2 {
            return;
        }

        let l = self.layout;
        let usable = (size.height - l.margin_top - l.margin_bottom) as f64;
        let bottom = (size.height - l.margin_bottom) as f64;

        // Frame coordinates are relative to the clip region.
        let to_point = |t: Timestamp, value: f64| -> Point {
            let x = l.margin_x as f64 + (t - window_start) * l.scale_x as f64;
            let y = bottom - value * usable / scale.scale;
            Point::new(x as f32 - clip.x, y as f32 - clip.y)
        };

        let line = Path::new(|b| {
            let mut points = data.iter().map(|(t, s)| to_point(*t, select(s)));
            if let Some(first) = points.next() {
                b.move_to(first);
            }
            for point in points {
                b.line_to(point);
            }
        });

        let stroke = Stroke {
            line_join: LineJoin::Round,
            ..Stroke::default()
        }
        .with_color(style.color.to_iced())
        .with_width(style.width);
        frame.stroke(&line, stroke);
    }
}

impl canvas::Program<Message> for GraphView<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.state.cache.draw(renderer, bounds.size(), |frame| {
            let size = frame.size();
            let l = self.layout;

            self.recompute_start(size.width);

            // Scale against a little more than one screen of history so the
            // axes settle before the data reaches the right edge.
            let lookahead = ((size.width - l.margin_x * 2.0 - l.clear_size) / l.scale_x) as f64
                + l.scale_lookahead_secs;
            let window = self.data.right_segment(lookahead);
            let scaling = AxisPair {
                recv: axis_scale(series_max(window, |s| s.recv)),
                send: axis_scale(series_max(window, |s| s.send)),
            };

            self.clear_background(frame, size);
            self.draw_axes(frame, size, &scaling);

            let clip = Rectangle {
                x: l.margin_x + 1.0,
                y: l.margin_top,
                width: size.width - l.margin_x * 2.0 - 1.0,
                height: size.height - l.margin_top - l.margin_bottom,
            };
            frame.with_clip(clip, |frame| {
                self.plot_previous_screen(frame, clip, size, &scaling);
                self.plot_current_screen(frame, clip, size, &scaling);
            });
        });

        vec![geometry]
    }
}

/// Page `start` forward in whole swipe widths until `last` fits inside the
/// window. Discrete jumps, so the graph "swipes" rather than scrolls.
fn advance_start(mut start: Timestamp, last: Timestamp, swipe: f64) -> Timestamp {
    debug_assert!(swipe > 0.0);
    while last - start > swipe {
        start += swipe;
    }
    start
}

/// Largest value of one series over `data`, floored at 1.0 so an idle link
/// still gets a sane axis.
fn series_max(
    data: &[(Timestamp, RateSample)],
    select: impl Fn(&RateSample) -> f64,
) -> f64 {
    data.iter().map(|(_, s)| select(s)).fold(1.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_pages_in_whole_swipe_widths() {
        assert_eq!(advance_start(0.0, 25.0, 10.0), 20.0);
    }

    #[test]
    fn advance_stops_once_last_fits() {
        assert_eq!(advance_start(0.0, 10.0, 10.0), 0.0);
        assert_eq!(advance_start(20.0, 25.0, 10.0), 20.0);
    }

    #[test]
    fn series_max_floors_at_one() {
        assert_eq!(series_max(&[], |s| s.recv), 1.0);
        assert_eq!(series_max(&[(0.0, RateSample::new(0.25, 0.0))], |s| s.recv), 1.0);
    }

    #[test]
    fn series_max_picks_per_series() {
        let data = [
            (0.0, RateSample::new(10.0, 400.0)),
            (1.0, RateSample::new(300.0, 20.0)),
        ];
        assert_eq!(series_max(&data, |s| s.recv), 300.0);
        assert_eq!(series_max(&data, |s| s.send), 400.0);
    }
}
