//! Render-facing state that widget passes write into.
//!
//! Widgets never draw; a pass only updates these plain values, and the
//! [`crate::renderer`] turns them into recorded operations.

use std::borrow::Cow;
use std::fmt;

use yds_ui_graphics::{Color, EdgeInsets, Point, TextStyle};

/// Named template image. Tinting is applied by the host.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Icon {
    name: Cow<'static, str>,
}

impl Icon {
    pub const SEARCH_LINE: Icon = Icon::from_static("searchLine");

    pub const fn from_static(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Icon({})", self.name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Background layer of a widget.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerPrimitive {
    pub background: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: f32,
    pub corner_radius: f32,
    pub height: Option<f32>,
    pub alpha: f32,
}

impl Default for LayerPrimitive {
    fn default() -> Self {
        Self {
            background: None,
            border_color: None,
            border_width: 0.0,
            corner_radius: 0.0,
            height: None,
            alpha: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelPrimitive {
    pub text: Option<String>,
    pub color: Color,
    pub style: TextStyle,
    pub hidden: bool,
}

impl LabelPrimitive {
    pub fn new(style: TextStyle) -> Self {
        Self {
            text: None,
            color: Color::BLACK,
            style,
            hidden: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden && self.text.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImagePrimitive {
    pub icon: Option<Icon>,
    pub tint: Color,
    pub size: f32,
    pub hidden: bool,
}

impl ImagePrimitive {
    pub fn new(size: f32) -> Self {
        Self {
            icon: None,
            tint: Color::BLACK,
            size,
            hidden: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden && self.icon.is_some()
    }
}

/// Filled triangle, used for the tooltip tail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrianglePrimitive {
    pub points: [Point; 3],
    pub fill: Color,
}

/// Placement of a button's icon and title inside its bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentLayout {
    pub direction: TextDirection,
    pub content_insets: EdgeInsets,
    pub image_insets: EdgeInsets,
    pub title_insets: EdgeInsets,
}
