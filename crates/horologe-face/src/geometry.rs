//! Face geometry: layout, hands, ticks and numeral placement.
//!
//! Everything here is a pure function of its arguments.

use horologe_engine::coords::{Vec2, Viewport};
use horologe_engine::text::TextMetrics;

use crate::angles::{DEGREES_PER_HOUR, DEGREES_PER_MINUTE, dial_radians};

/// Straight line from `start` to `end`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    #[inline]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.end - self.start).length()
    }
}

/// Center and radii of a face laid out in a viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceLayout {
    pub center: Vec2,
    /// Radius of the tick ring: `min_side / 2 * face_scale`.
    pub face_radius: f32,
    /// Base length for hands: `min_side / 3`.
    pub hand_radius: f32,
}

impl FaceLayout {
    /// Returns `None` for a degenerate viewport.
    pub fn new(viewport: Viewport, face_scale: f32) -> Option<Self> {
        if !viewport.is_valid() {
            return None;
        }
        let side = viewport.min_side();
        Some(Self {
            center: viewport.center(),
            face_radius: side / 2.0 * face_scale,
            hand_radius: side / 3.0,
        })
    }
}

/// Hand from the center to `hand_radius * length_ratio` along `angle`.
pub fn hand(center: Vec2, hand_radius: f32, angle: f32, length_ratio: f32) -> Segment {
    Segment::new(center, center.polar_offset(angle, hand_radius * length_ratio))
}

/// Segment along `angle` from `outer` (start) to `inner` (end) distance from center.
pub fn radial_segment(center: Vec2, angle: f32, outer: f32, inner: f32) -> Segment {
    Segment::new(center.polar_offset(angle, outer), center.polar_offset(angle, inner))
}

/// Minute positions `1..=60` that carry an hour tick.
#[inline]
pub fn is_hour_position(position: u32) -> bool {
    position % 5 == 0
}

/// Twelve hour ticks, yielded as `(numeral, segment)` for numerals `1..=12`.
///
/// Each segment runs from the ring inward by `length`; its `end` anchors the numeral.
pub fn hour_ticks(
    center: Vec2,
    radius: f32,
    length: f32,
) -> impl Iterator<Item = (u32, Segment)> {
    (1..=12u32).map(move |n| {
        let angle = dial_radians(n as f64 * DEGREES_PER_HOUR);
        (n, radial_segment(center, angle, radius, radius - length))
    })
}

/// Forty-eight minute ticks, yielded as `(position, segment)` for positions
/// `1..=60` not covered by an hour tick.
pub fn minute_ticks(
    center: Vec2,
    radius: f32,
    length: f32,
) -> impl Iterator<Item = (u32, Segment)> {
    (1..=60u32).filter(|&i| !is_hour_position(i)).map(move |i| {
        let angle = dial_radians(i as f64 * DEGREES_PER_MINUTE);
        (i, radial_segment(center, angle, radius, radius - length))
    })
}

// Index 0 is never read; numerals are 1..=12.
const SENTINEL: f32 = f32::NAN;

/// Horizontal padding per numeral, in half label widths.
pub const PADDING_X: [f32; 13] = [
    SENTINEL,
    4.0 / 3.0, 5.0 / 3.0, 6.0 / 3.0, 5.0 / 3.0, 4.0 / 3.0, 0.0,
    -4.0 / 3.0, -5.0 / 3.0, -6.0 / 3.0, -5.0 / 3.0, -4.0 / 3.0, 0.0,
];

/// Vertical padding per numeral, in negative half label heights.
pub const PADDING_Y: [f32; 13] = [
    SENTINEL,
    5.0 / 3.0, 4.0 / 3.0, 3.0 / 3.0, 2.0 / 3.0, 1.0 / 3.0, 0.0,
    1.0 / 3.0, 2.0 / 3.0, 3.0 / 3.0, 4.0 / 3.0, 5.0 / 3.0, 6.0 / 3.0,
];

/// Padding subtracted from the centered label position of numeral `n`.
///
/// Pulls labels toward the face center so they clear the tick: right-side
/// numerals shift left, top numerals shift down, and the diagonals blend.
pub fn numeral_padding(n: u32, metrics: TextMetrics) -> Option<Vec2> {
    let i = n as usize;
    if !(1..PADDING_X.len()).contains(&i) {
        return None;
    }
    Some(Vec2::new(
        metrics.width * 0.5 * PADDING_X[i],
        -metrics.height() * 0.5 * PADDING_Y[i],
    ))
}

/// Baseline origin for numeral `n` whose hour tick ends at `anchor`.
pub fn numeral_baseline(anchor: Vec2, n: u32, metrics: TextMetrics) -> Option<Vec2> {
    let pad = numeral_padding(n, metrics)?;
    Some(Vec2::new(
        anchor.x - metrics.width / 2.0 - pad.x,
        anchor.y - metrics.height() / 4.0 - pad.y,
    ))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    const CENTER: Vec2 = Vec2::new(200.0, 200.0);
    const EPS: f32 = 1e-3;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn layout_uses_shorter_side() {
        let l = FaceLayout::new(Viewport::new(600.0, 300.0), 0.8).unwrap();
        assert_eq!(l.center, Vec2::new(300.0, 150.0));
        assert!(close(l.face_radius, 120.0));
        assert!(close(l.hand_radius, 100.0));
    }

    #[test]
    fn layout_rejects_degenerate_viewport() {
        assert!(FaceLayout::new(Viewport::new(0.0, 300.0), 0.8).is_none());
        assert!(FaceLayout::new(Viewport::new(300.0, 0.0), 0.8).is_none());
    }

    // ── hands ─────────────────────────────────────────────────────────────

    #[test]
    fn hand_length_is_ratio_of_radius() {
        let seg = hand(CENTER, 100.0, 1.234, 0.56);
        assert_eq!(seg.start, CENTER);
        assert!(close(seg.length(), 56.0));
    }

    #[test]
    fn hand_at_twelve_points_up() {
        let seg = hand(CENTER, 100.0, dial_radians(0.0), 1.0);
        assert!(close(seg.end.x, CENTER.x));
        assert!(close(seg.end.y, CENTER.y - 100.0));
    }

    // ── ticks ─────────────────────────────────────────────────────────────

    #[test]
    fn tick_counts() {
        assert_eq!(hour_ticks(CENTER, 100.0, 40.0).count(), 12);
        assert_eq!(minute_ticks(CENTER, 100.0, 10.0).count(), 48);
    }

    #[test]
    fn ticks_cover_all_sixty_positions_once() {
        let hours: Vec<u32> = hour_ticks(CENTER, 100.0, 40.0).map(|(n, _)| n * 5).collect();
        let minutes: Vec<u32> = minute_ticks(CENTER, 100.0, 10.0).map(|(i, _)| i).collect();

        let all: BTreeSet<u32> = hours.iter().chain(minutes.iter()).copied().collect();
        assert_eq!(all.len(), hours.len() + minutes.len());
        assert_eq!(all, (1..=60).collect::<BTreeSet<u32>>());
    }

    #[test]
    fn ticks_run_inward_from_the_ring() {
        for (_, seg) in hour_ticks(CENTER, 100.0, 40.0) {
            assert!(close((seg.start - CENTER).length(), 100.0));
            assert!(close((seg.end - CENTER).length(), 60.0));
        }
        for (_, seg) in minute_ticks(CENTER, 100.0, 10.0) {
            assert!(close((seg.start - CENTER).length(), 100.0));
            assert!(close(seg.length(), 10.0));
        }
    }

    #[test]
    fn twelve_oclock_tick_is_vertical_at_top() {
        let (n, seg) = hour_ticks(CENTER, 100.0, 40.0).last().unwrap();
        assert_eq!(n, 12);
        assert!(close(seg.start.x, CENTER.x));
        assert!(close(seg.start.y, CENTER.y - 100.0));
        assert!(close(seg.end.y, CENTER.y - 60.0));
    }

    // ── numerals ──────────────────────────────────────────────────────────

    const METRICS: TextMetrics = TextMetrics::new(40.0, 30.0, 10.0);

    #[test]
    fn padding_table_has_sentinel_plus_twelve() {
        assert_eq!(PADDING_X.len(), 13);
        assert_eq!(PADDING_Y.len(), 13);
        assert!(PADDING_X[0].is_nan());
        assert!(PADDING_X[1..].iter().all(|v| v.is_finite()));
        assert!(PADDING_Y[1..].iter().all(|v| v.is_finite()));
    }

    #[test]
    fn padding_rejects_out_of_range_numerals() {
        assert!(numeral_padding(0, METRICS).is_none());
        assert!(numeral_padding(13, METRICS).is_none());
        assert!(numeral_padding(12, METRICS).is_some());
    }

    #[test]
    fn twelve_and_six_are_centered_on_their_tick() {
        let anchor = Vec2::new(100.0, 50.0);
        for n in [6, 12] {
            let b = numeral_baseline(anchor, n, METRICS).unwrap();
            assert!(close(b.x + METRICS.width / 2.0, anchor.x), "numeral {n}");
        }
    }

    #[test]
    fn twelve_sits_below_its_tick_and_six_above() {
        let anchor = Vec2::new(100.0, 50.0);
        let twelve = numeral_baseline(anchor, 12, METRICS).unwrap();
        let six = numeral_baseline(anchor, 6, METRICS).unwrap();
        assert!(close(twelve.y, anchor.y + METRICS.height() * 0.75));
        assert!(close(six.y, anchor.y - METRICS.height() * 0.25));
    }

    #[test]
    fn three_and_nine_mirror_on_the_same_baseline() {
        let anchor = Vec2::new(100.0, 50.0);
        let three = numeral_baseline(anchor, 3, METRICS).unwrap();
        let nine = numeral_baseline(anchor, 9, METRICS).unwrap();

        assert!(close(three.y, anchor.y + METRICS.height() / 4.0));
        assert!(close(three.y, nine.y));

        let three_center = three.x + METRICS.width / 2.0;
        let nine_center = nine.x + METRICS.width / 2.0;
        assert!(close(anchor.x - three_center, METRICS.width));
        assert!(close(nine_center - anchor.x, METRICS.width));
    }

    #[test]
    fn diagonal_paddings_blend_between_axes() {
        let p1 = numeral_padding(1, METRICS).unwrap();
        let p2 = numeral_padding(2, METRICS).unwrap();
        let p3 = numeral_padding(3, METRICS).unwrap();
        assert!(p1.x < p2.x && p2.x < p3.x);
        // Less downward pull as the numeral moves from 1 toward 3.
        assert!(p1.y < p2.y && p2.y < p3.y);
    }
}
