//! Speech-bubble hint with a tail, shown for a fixed duration.

use std::rc::Rc;

use yds_core::{aspects, Component, Invalidator, Observed};
use yds_ui_graphics::{EdgeInsets, Point, Size, TextStyle};

use crate::primitives::{LabelPrimitive, LayerPrimitive, TrianglePrimitive};
use crate::renderer::{Paint, PaintLayer, SceneBuilder};
use crate::theme::{ColorToken, DimensionToken, Theme};

const HORIZONTAL_MARGIN: f32 = 16.0;
const VERTICAL_MARGIN: f32 = 12.0;
const TAIL_WIDTH: f32 = 16.0;
const TAIL_HEIGHT: f32 = 9.0;
/// Distance from the nearest corner to where the tail begins.
const TAIL_START: f32 = 12.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TooltipColor {
    #[default]
    TooltipBG,
    TooltipPoint,
}

impl TooltipColor {
    pub fn token(self) -> ColorToken {
        match self {
            TooltipColor::TooltipBG => ColorToken::TooltipBG,
            TooltipColor::TooltipPoint => ColorToken::TooltipPoint,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TailPosition {
    Left,
    Right,
    TopLeft,
    BottomLeft,
    TopCenter,
    BottomCenter,
    TopRight,
    #[default]
    BottomRight,
}

impl TailPosition {
    pub const ALL: [TailPosition; 8] = [
        TailPosition::Left,
        TailPosition::Right,
        TailPosition::TopLeft,
        TailPosition::BottomLeft,
        TailPosition::TopCenter,
        TailPosition::BottomCenter,
        TailPosition::TopRight,
        TailPosition::BottomRight,
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TooltipDuration {
    Short,
    #[default]
    Long,
}

impl TooltipDuration {
    pub fn millis(self) -> u64 {
        match self {
            TooltipDuration::Short => 1_500,
            TooltipDuration::Long => 3_000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipPhase {
    Hidden,
    Showing { since_ms: u64 },
    Dismissed,
}

/// Triangle for the tail at `position`, in the tooltip's own coordinates.
/// Points outside the frame are expected: the tail hangs off the edge.
pub fn tail_triangle(position: TailPosition, frame: Size) -> [Point; 3] {
    let Size { width, height } = frame;
    match position {
        TailPosition::Left | TailPosition::Right => {
            let left = position == TailPosition::Left;
            let p1 = Point::new(if left { 0.0 } else { width }, TAIL_START);
            let tip_x = if left {
                p1.x - TAIL_HEIGHT
            } else {
                p1.x + TAIL_HEIGHT
            };
            [
                p1,
                Point::new(tip_x, p1.y + TAIL_WIDTH / 2.0),
                Point::new(p1.x, p1.y + TAIL_WIDTH),
            ]
        }
        TailPosition::TopLeft
        | TailPosition::BottomLeft
        | TailPosition::TopCenter
        | TailPosition::BottomCenter
        | TailPosition::TopRight
        | TailPosition::BottomRight => {
            let top = matches!(
                position,
                TailPosition::TopLeft | TailPosition::TopCenter | TailPosition::TopRight
            );
            let y = if top { 0.0 } else { height };
            let tip_y = if top { -TAIL_HEIGHT } else { y + TAIL_HEIGHT };
            let (x, direction) = match position {
                TailPosition::TopLeft | TailPosition::BottomLeft => (TAIL_START, 1.0),
                TailPosition::TopCenter | TailPosition::BottomCenter => {
                    (width / 2.0 - TAIL_WIDTH / 2.0, 1.0)
                }
                _ => (width - TAIL_START, -1.0),
            };
            [
                Point::new(x, y),
                Point::new(x + direction * TAIL_WIDTH / 2.0, tip_y),
                Point::new(x + direction * TAIL_WIDTH, y),
            ]
        }
    }
}

pub struct Tooltip {
    invalidator: Invalidator,
    theme: Rc<Theme>,
    text: Observed<String>,
    color: Observed<TooltipColor>,
    tail_position: Observed<TailPosition>,
    frame: Observed<Size>,
    alpha: Observed<f32>,
    duration: TooltipDuration,
    phase: TooltipPhase,
    layer: LayerPrimitive,
    label: LabelPrimitive,
    tail: TrianglePrimitive,
}

impl Tooltip {
    pub fn new(invalidator: Invalidator, theme: Rc<Theme>) -> Self {
        let mut label = LabelPrimitive::new(TextStyle::Caption0);
        label.color = theme.color(ColorToken::TextBright);
        let mut tooltip = Self {
            text: Observed::new(String::new(), aspects::LAYOUT, &invalidator),
            color: Observed::new(TooltipColor::default(), aspects::LAYOUT, &invalidator),
            tail_position: Observed::new(TailPosition::default(), aspects::LAYOUT, &invalidator),
            frame: Observed::new(Size::ZERO, aspects::LAYOUT, &invalidator),
            alpha: Observed::new(0.0, aspects::DISPLAY, &invalidator),
            duration: TooltipDuration::default(),
            phase: TooltipPhase::Hidden,
            layer: LayerPrimitive {
                corner_radius: theme.dimension(DimensionToken::RoundingR8),
                alpha: 0.0,
                ..LayerPrimitive::default()
            },
            label,
            tail: TrianglePrimitive {
                points: [Point::default(); 3],
                fill: theme.color(ColorToken::TooltipBG),
            },
            invalidator,
            theme,
        };
        tooltip.force_pass();
        tooltip
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text.set(text.into());
    }

    pub fn set_color(&mut self, color: TooltipColor) {
        self.color.set(color);
    }

    pub fn set_tail_position(&mut self, position: TailPosition) {
        self.tail_position.set(position);
    }

    pub fn set_duration(&mut self, duration: TooltipDuration) {
        self.duration = duration;
    }

    /// Frame assigned by the host after measuring. Drives the tail.
    pub fn set_frame(&mut self, frame: Size) {
        self.frame.set(frame);
    }

    /// Starts showing. Only a tooltip that has never been shown can be
    /// shown; returns whether it started.
    pub fn show(&mut self, now_ms: u64) -> bool {
        if self.phase != TooltipPhase::Hidden {
            return false;
        }
        self.phase = TooltipPhase::Showing { since_ms: now_ms };
        self.alpha.set(1.0);
        true
    }

    /// Dismisses the tooltip once its duration has elapsed.
    pub fn advance(&mut self, now_ms: u64) -> TooltipPhase {
        if let TooltipPhase::Showing { since_ms } = self.phase {
            if now_ms.saturating_sub(since_ms) >= self.duration.millis() {
                self.dismiss();
            }
        }
        self.phase
    }

    /// Tap anywhere on screen.
    pub fn dismiss(&mut self) {
        if matches!(self.phase, TooltipPhase::Showing { .. }) {
            self.phase = TooltipPhase::Dismissed;
            self.alpha.set(0.0);
        }
    }

    pub fn phase(&self) -> TooltipPhase {
        self.phase
    }

    pub fn label_insets(&self) -> EdgeInsets {
        EdgeInsets::symmetric(HORIZONTAL_MARGIN, VERTICAL_MARGIN)
    }

    pub fn layer(&self) -> &LayerPrimitive {
        &self.layer
    }

    pub fn label(&self) -> &LabelPrimitive {
        &self.label
    }

    pub fn tail(&self) -> &TrianglePrimitive {
        &self.tail
    }
}

impl Component for Tooltip {
    fn invalidator(&self) -> &Invalidator {
        &self.invalidator
    }

    fn layout(&mut self) {
        self.label.text = Some(self.text.get().clone());
        let fill = self.theme.color(self.color.value().token());
        self.layer.background = Some(fill);
        self.layer.height = Some(self.frame.get().height);
        self.tail = TrianglePrimitive {
            points: tail_triangle(self.tail_position.value(), self.frame.value()),
            fill,
        };
    }

    fn display(&mut self) {
        self.layer.alpha = self.alpha.value();
    }
}

impl Paint for Tooltip {
    fn paint(&self, scene: &mut SceneBuilder) {
        if self.layer.alpha <= 0.0 {
            return;
        }
        scene.triangle(PaintLayer::Overlay, self.tail);
        scene.layer(PaintLayer::Overlay, &self.layer);
        scene.label(&self.label);
    }
}

#[cfg(test)]
#[path = "tests/tooltip_tests.rs"]
mod tests;
