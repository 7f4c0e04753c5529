use crate::coords::Vec2;
use crate::paint::{Color, LineCap};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Line segment draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub start: Vec2,
    pub end: Vec2,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
}

impl LineCmd {
    #[inline]
    pub fn new(start: Vec2, end: Vec2, width: f32, color: Color, cap: LineCap) -> Self {
        Self { start, end, width, color, cap }
    }
}

impl DrawList {
    /// Records a line segment draw command.
    #[inline]
    pub fn push_line(
        &mut self,
        z: ZIndex,
        start: Vec2,
        end: Vec2,
        width: f32,
        color: Color,
        cap: LineCap,
    ) {
        self.push(z, DrawCmd::Line(LineCmd::new(start, end, width, color, cap)));
    }
}
