use yds_ui_graphics::Color;

use crate::theme::{DimensionToken, Theme};

/// Border width tier used by style tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderWidth {
    None,
    Normal,
}

impl BorderWidth {
    pub fn points(self, theme: &Theme) -> f32 {
        match self {
            BorderWidth::None => 0.0,
            BorderWidth::Normal => theme.dimension(DimensionToken::BorderNormal),
        }
    }
}

/// Concrete colors applied by a display pass. Computed fresh every pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub foreground: Color,
    pub background: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: f32,
}

impl ResolvedStyle {
    pub const UNSTYLED: ResolvedStyle = ResolvedStyle {
        foreground: Color::BLACK,
        background: None,
        border_color: None,
        border_width: 0.0,
    };

    pub fn has_border(&self) -> bool {
        self.border_width > 0.0 && self.border_color.is_some()
    }
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self::UNSTYLED
    }
}
