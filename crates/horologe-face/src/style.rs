use std::fmt;
use std::str::FromStr;

use horologe_engine::paint::{Color, LineCap};
use horologe_engine::scene::Border;
use horologe_engine::text::FontId;

/// Stroke for hands and ticks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineStyle {
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
}

impl LineStyle {
    pub fn round(width: f32, color: Color) -> Self {
        Self { width, color, cap: LineCap::Round }
    }
}

/// A hand's stroke and its length as a fraction of the hand radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandStyle {
    pub line: LineStyle,
    pub length_ratio: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LabelStyle {
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
}

/// Alternate label style for the numerals selected by `applies_to`.
///
/// The alternate style is used for both drawing and measuring the numeral.
#[derive(Debug, Copy, Clone)]
pub struct LabelOverride {
    /// Receives the numeral, `1..=12`.
    pub applies_to: fn(u32) -> bool,
    pub style: LabelStyle,
}

/// Fill and outline of a circle (dial background, center dot).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DialStyle {
    pub fill: Color,
    pub border: Option<Border>,
}

impl DialStyle {
    pub fn outline(width: f32, color: Color) -> Self {
        Self { fill: Color::transparent(), border: Some(Border::new(width, color)) }
    }

    pub fn filled(color: Color) -> Self {
        Self { fill: color, border: None }
    }
}

/// Immutable configuration for one clock face variant.
#[derive(Debug, Copy, Clone)]
pub struct FaceStyle {
    /// Face radius as a fraction of half the viewport's shorter side.
    pub face_scale: f32,
    /// Gap between the tick ring and the dial circle.
    pub dial_margin: f32,
    pub dial: DialStyle,

    /// Shared by hour and minute ticks.
    pub tick: LineStyle,
    pub hour_tick_length: f32,
    pub minute_tick_length: f32,

    pub hour_hand: HandStyle,
    pub minute_hand: HandStyle,
    pub second_hand: HandStyle,

    pub label: LabelStyle,
    pub label_override: Option<LabelOverride>,

    pub center_dot_radius: f32,
    pub center_dot: DialStyle,
}

impl FaceStyle {
    /// Gray outlined dial, red second hand, one label size.
    pub fn classic(font: FontId) -> Self {
        let gray = Color::gray();
        Self {
            face_scale: 0.8,
            dial_margin: 20.0,
            dial: DialStyle::outline(16.0, gray),
            tick: LineStyle::round(16.0, gray),
            hour_tick_length: 40.0,
            minute_tick_length: 10.0,
            hour_hand: HandStyle { line: LineStyle::round(12.0, gray), length_ratio: 0.56 },
            minute_hand: HandStyle { line: LineStyle::round(8.0, gray), length_ratio: 0.72 },
            second_hand: HandStyle { line: LineStyle::round(4.0, Color::red()), length_ratio: 0.92 },
            label: LabelStyle { font, size: 86.0, color: gray },
            label_override: None,
            center_dot_radius: 6.0,
            center_dot: DialStyle::outline(16.0, gray),
        }
    }

    /// White filled dial, blue second hand, larger numerals at 3, 6, 9 and 12.
    pub fn accent(font: FontId) -> Self {
        let gray = Color::gray();
        Self {
            face_scale: 0.8,
            dial_margin: 20.0,
            dial: DialStyle::filled(Color::white()),
            tick: LineStyle::round(12.0, gray),
            hour_tick_length: 40.0,
            minute_tick_length: 10.0,
            hour_hand: HandStyle { line: LineStyle::round(12.0, gray), length_ratio: 0.62 },
            minute_hand: HandStyle { line: LineStyle::round(8.0, gray), length_ratio: 0.82 },
            second_hand: HandStyle { line: LineStyle::round(4.0, Color::blue()), length_ratio: 1.0 },
            label: LabelStyle { font, size: 68.0, color: gray },
            label_override: Some(LabelOverride {
                applies_to: is_quarter,
                style: LabelStyle { font, size: 86.0, color: gray },
            }),
            center_dot_radius: 6.0,
            center_dot: DialStyle::outline(1.0, gray),
        }
    }

    /// Label style for numeral `n` (`1..=12`), honoring the override.
    pub fn label_for(&self, n: u32) -> &LabelStyle {
        match &self.label_override {
            Some(o) if (o.applies_to)(n) => &o.style,
            _ => &self.label,
        }
    }
}

fn is_quarter(n: u32) -> bool {
    n % 3 == 0
}

/// Built-in face variants.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FaceVariant {
    #[default]
    Classic,
    Accent,
}

impl FaceVariant {
    pub fn style(self, font: FontId) -> FaceStyle {
        match self {
            FaceVariant::Classic => FaceStyle::classic(font),
            FaceVariant::Accent => FaceStyle::accent(font),
        }
    }
}

impl fmt::Display for FaceVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FaceVariant::Classic => "classic",
            FaceVariant::Accent => "accent",
        })
    }
}

/// Error returned when parsing an unknown [`FaceVariant`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError(pub String);

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown face variant {:?} (expected \"classic\" or \"accent\")", self.0)
    }
}

impl std::error::Error for ParseVariantError {}

impl FromStr for FaceVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(FaceVariant::Classic),
            "accent" => Ok(FaceVariant::Accent),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}
