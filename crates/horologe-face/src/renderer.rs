use horologe_engine::coords::Viewport;
use horologe_engine::scene::DrawList;
use horologe_engine::text::TextMeasure;
use horologe_engine::time::ClockTime;

use crate::angles::HandAngles;
use crate::geometry::{self, FaceLayout};
use crate::painter::Painter;
use crate::style::{FaceStyle, HandStyle};

/// Records clock faces for one [`FaceStyle`].
///
/// The renderer is stateless: the recorded primitives depend only on the
/// style, the time, the viewport and the text metrics.
///
/// Paint order: dial, hour ticks, minute ticks, numerals, hour hand,
/// minute hand, second hand, center dot.
#[derive(Debug, Clone, Copy)]
pub struct ClockFaceRenderer<'s> {
    style: &'s FaceStyle,
}

impl<'s> ClockFaceRenderer<'s> {
    pub fn new(style: &'s FaceStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &'s FaceStyle {
        self.style
    }

    /// Records one frame into a fresh `DrawList`.
    pub fn frame(&self, time: ClockTime, viewport: Viewport, measure: &dyn TextMeasure) -> DrawList {
        let mut list = DrawList::new();
        self.paint(&mut Painter::new(&mut list, measure), time, viewport);
        list
    }

    /// Records one frame through `painter`. A degenerate viewport records nothing.
    pub fn paint(&self, painter: &mut Painter<'_>, time: ClockTime, viewport: Viewport) {
        let Some(layout) = FaceLayout::new(viewport, self.style.face_scale) else {
            log::debug!("skipping clock face for degenerate viewport {viewport:?}");
            return;
        };

        self.paint_face(painter, &layout);
        self.paint_hands(painter, &layout, HandAngles::from_time(time));
    }

    fn paint_face(&self, painter: &mut Painter<'_>, layout: &FaceLayout) {
        let s = self.style;
        let (center, radius) = (layout.center, layout.face_radius);

        painter.circle(center, radius + s.dial_margin, &s.dial);

        let hour_ticks: Vec<_> = geometry::hour_ticks(center, radius, s.hour_tick_length).collect();
        for (_, tick) in &hour_ticks {
            painter.line(*tick, &s.tick);
        }

        for (_, tick) in geometry::minute_ticks(center, radius, s.minute_tick_length) {
            painter.line(tick, &s.tick);
        }

        for (n, tick) in &hour_ticks {
            let label = s.label_for(*n);
            let text = n.to_string();
            let metrics = painter.measure_text(&text, label);
            if let Some(baseline) = geometry::numeral_baseline(tick.end, *n, metrics) {
                painter.text(text, label, baseline);
            }
        }
    }

    fn paint_hands(&self, painter: &mut Painter<'_>, layout: &FaceLayout, angles: HandAngles) {
        let s = self.style;
        let hand = |style: &HandStyle, angle: f32| {
            geometry::hand(layout.center, layout.hand_radius, angle, style.length_ratio)
        };

        painter.line(hand(&s.hour_hand, angles.hour), &s.hour_hand.line);
        painter.line(hand(&s.minute_hand, angles.minute), &s.minute_hand.line);
        painter.line(hand(&s.second_hand, angles.second), &s.second_hand.line);

        painter.circle(layout.center, s.center_dot_radius, &s.center_dot);
    }
}

#[cfg(test)]
mod tests {
    use horologe_engine::coords::Vec2;
    use horologe_engine::scene::{DrawCmd, LineCmd};
    use horologe_engine::text::FontId;

    use super::*;
    use crate::test_support::MonoMetrics;

    const FONT: FontId = FontId::from_index(0);
    const VIEW: Viewport = Viewport::new(600.0, 600.0);

    fn at(h: u32, m: u32, s: u32, ms: u32) -> ClockTime {
        ClockTime::new(h, m, s, ms).unwrap()
    }

    fn kinds(list: &DrawList) -> Vec<&'static str> {
        list.items().iter().map(|i| i.cmd.kind()).collect()
    }

    fn lines(list: &DrawList) -> Vec<&LineCmd> {
        list.items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Line(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    // ── order and counts ──────────────────────────────────────────────────

    #[test]
    fn records_primitives_in_paint_order() {
        let style = FaceStyle::classic(FONT);
        let list = ClockFaceRenderer::new(&style).frame(at(10, 8, 30, 0), VIEW, &MonoMetrics);

        let mut expected = vec!["circle"];
        expected.extend(std::iter::repeat_n("line", 12 + 48));
        expected.extend(std::iter::repeat_n("text", 12));
        expected.extend(["line", "line", "line", "circle"]);
        assert_eq!(kinds(&list), expected);
    }

    #[test]
    fn z_order_matches_insertion_order() {
        let style = FaceStyle::accent(FONT);
        let list = ClockFaceRenderer::new(&style).frame(at(1, 2, 3, 4), VIEW, &MonoMetrics);
        let z: Vec<i32> = list.items().iter().map(|i| i.key.z.0).collect();
        assert!(z.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn numerals_one_through_twelve() {
        let style = FaceStyle::classic(FONT);
        let list = ClockFaceRenderer::new(&style).frame(ClockTime::MIDNIGHT, VIEW, &MonoMetrics);
        let labels: Vec<String> = list
            .items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect();
        let expected: Vec<String> = (1..=12).map(|n| n.to_string()).collect();
        assert_eq!(labels, expected);
    }

    // ── purity ────────────────────────────────────────────────────────────

    #[test]
    fn identical_inputs_give_identical_frames() {
        let style = FaceStyle::accent(FONT);
        let renderer = ClockFaceRenderer::new(&style);
        let t = at(7, 45, 12, 345);

        let a = renderer.frame(t, VIEW, &MonoMetrics);
        let b = renderer.frame(t, VIEW, &MonoMetrics);
        assert_eq!(a.items(), b.items());
    }

    #[test]
    fn only_hands_move_with_time() {
        let style = FaceStyle::classic(FONT);
        let renderer = ClockFaceRenderer::new(&style);
        let a = renderer.frame(at(1, 0, 0, 0), VIEW, &MonoMetrics);
        let b = renderer.frame(at(5, 30, 15, 0), VIEW, &MonoMetrics);

        let face = 1 + 60 + 12;
        assert_eq!(a.items()[..face], b.items()[..face]);
        assert_ne!(a.items()[face..face + 3], b.items()[face..face + 3]);
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn degenerate_viewport_records_nothing() {
        let style = FaceStyle::classic(FONT);
        let renderer = ClockFaceRenderer::new(&style);
        for view in [Viewport::new(0.0, 0.0), Viewport::new(0.0, 400.0), Viewport::new(400.0, 0.0)] {
            assert!(renderer.frame(ClockTime::MIDNIGHT, view, &MonoMetrics).is_empty());
        }
    }

    // ── geometry in the stream ────────────────────────────────────────────

    #[test]
    fn hands_use_style_ratios() {
        let style = FaceStyle::classic(FONT);
        let list = ClockFaceRenderer::new(&style).frame(at(3, 0, 0, 0), VIEW, &MonoMetrics);
        let l = lines(&list);
        let hands = &l[l.len() - 3..];
        let center = Vec2::new(300.0, 300.0);

        // hand radius = 600 / 3 = 200; 3:00 points right.
        assert_eq!(hands[0].start, center);
        assert!((hands[0].end.x - (300.0 + 200.0 * 0.56)).abs() < 1e-3);
        assert!((hands[0].end.y - 300.0).abs() < 1e-3);
        assert_eq!(hands[0].width, 12.0);
        assert_eq!(hands[2].color, style.second_hand.line.color);
    }

    #[test]
    fn dial_is_ring_plus_margin() {
        let style = FaceStyle::classic(FONT);
        let list = ClockFaceRenderer::new(&style).frame(ClockTime::MIDNIGHT, VIEW, &MonoMetrics);
        let DrawCmd::Circle(dial) = &list.items()[0].cmd else {
            panic!("dial first");
        };
        // face radius = 300 * 0.8 = 240
        assert!((dial.radius - 260.0).abs() < 1e-3);
        assert_eq!(dial.border, style.dial.border);
    }

    #[test]
    fn accent_quarter_numerals_are_measured_in_their_own_size() {
        let style = FaceStyle::accent(FONT);
        let list = ClockFaceRenderer::new(&style).frame(ClockTime::MIDNIGHT, VIEW, &MonoMetrics);
        let texts: Vec<_> = list
            .items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some(t),
                _ => None,
            })
            .collect();

        let six = texts[5];
        assert_eq!(six.text, "6");
        assert_eq!(six.size, 86.0);
        assert_eq!(texts[4].size, 68.0);

        // 6 is centered on its tick using the 86px width (one glyph = 43px).
        let l = lines(&list);
        let six_tick = l[5];
        assert!((six.baseline.x + 43.0 / 2.0 - six_tick.end.x).abs() < 1e-3);
    }
}
