use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
    Circle(CircleCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Short kind label, used by hosts for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Line(_) => "line",
            DrawCmd::Circle(_) => "circle",
            DrawCmd::Text(_) => "text",
        }
    }
}
