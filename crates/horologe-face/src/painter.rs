use horologe_engine::coords::Vec2;
use horologe_engine::scene::{DrawList, ZIndex};
use horologe_engine::text::{TextMeasure, TextMetrics};

use crate::geometry::Segment;
use crate::style::{DialStyle, LabelStyle, LineStyle};

/// Drawing surface passed to [`ClockFaceRenderer::paint`](crate::ClockFaceRenderer::paint).
///
/// Wraps the engine's `DrawList` with style-aware helpers and gives the
/// renderer access to text metrics of the active fonts. Every call takes the
/// next z-index, so paint order equals call order.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    measure: &'a dyn TextMeasure,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, measure: &'a dyn TextMeasure) -> Self {
        Self { draw_list, measure, z: 0 }
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Metrics of `text` in `label`'s font and size.
    pub fn measure_text(&self, text: &str, label: &LabelStyle) -> TextMetrics {
        self.measure.text_metrics(text, label.font, label.size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn line(&mut self, segment: Segment, style: &LineStyle) {
        let z = self.next_z();
        self.draw_list
            .push_line(z, segment.start, segment.end, style.width, style.color, style.cap);
    }

    /// Circle filled and outlined per `style`. Skipped when it would draw nothing.
    pub fn circle(&mut self, center: Vec2, radius: f32, style: &DialStyle) {
        if style.fill.is_transparent() && style.border.is_none() {
            return;
        }
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, style.fill, style.border);
    }

    /// Single-line text with its baseline starting at `baseline`.
    pub fn text(&mut self, text: impl Into<String>, label: &LabelStyle, baseline: Vec2) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, label.font, label.size, label.color, baseline);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
