//! Modal sheet that sizes itself to its stacked content.
//!
//! The presentation host asks the sheet for its preferred height through
//! [`BottomSheet::negotiate_height`]. The query lays the content out first
//! and may switch the sheet into scrolling mode when the content does not
//! fit, so it is a named operation rather than a getter.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use yds_core::{aspects, Aspect, Component, Invalidator, Observed};
use yds_ui_graphics::Color;

use crate::primitives::LayerPrimitive;
use crate::renderer::{Paint, PaintLayer, SceneBuilder};
use crate::theme::{ColorToken, DimensionToken, Theme};

/// Height a view contributes to a vertical stack.
pub trait IntrinsicHeight {
    fn intrinsic_height(&self) -> f32;
}

impl IntrinsicHeight for f32 {
    fn intrinsic_height(&self) -> f32 {
        *self
    }
}

impl<T: IntrinsicHeight + ?Sized> IntrinsicHeight for Rc<RefCell<T>> {
    fn intrinsic_height(&self) -> f32 {
        match self.try_borrow() {
            Ok(view) => view.intrinsic_height(),
            Err(_) => {
                log::warn!("stacked view is mutably borrowed; measuring it as empty");
                0.0
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetMetrics {
    pub min_height: f32,
    /// Vertical space around the stacked content.
    pub content_margin: f32,
    /// Gap kept between the sheet and the top of the available area.
    pub top_inset: f32,
}

impl Default for SheetMetrics {
    fn default() -> Self {
        Self {
            min_height: 88.0,
            content_margin: 40.0,
            top_inset: 88.0,
        }
    }
}

/// Constants the presentation host reads when animating the sheet in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetPresentation {
    pub transition_duration_secs: f64,
    pub allows_drag_to_dismiss: bool,
    pub show_drag_indicator: bool,
    pub corner_radius: f32,
    /// Dimming drawn behind the sheet.
    pub background: Color,
}

impl SheetPresentation {
    pub fn new(theme: &Theme) -> Self {
        Self {
            transition_duration_secs: 0.25,
            allows_drag_to_dismiss: true,
            show_drag_indicator: false,
            corner_radius: theme.dimension(DimensionToken::RoundingR8),
            background: theme.color(ColorToken::DimNormal),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreferredHeight {
    pub height: f32,
    pub scroll_enabled: bool,
}

pub struct BottomSheet {
    invalidator: Invalidator,
    theme: Rc<Theme>,
    metrics: SheetMetrics,
    presentation: SheetPresentation,
    items: Vec<Box<dyn IntrinsicHeight>>,
    scroll_enabled: Observed<bool>,
    content_height: f32,
    scrolling: bool,
    body: LayerPrimitive,
    backdrop: LayerPrimitive,
}

impl BottomSheet {
    pub fn new(invalidator: Invalidator, theme: Rc<Theme>) -> Self {
        Self::with_metrics(invalidator, theme, SheetMetrics::default())
    }

    pub fn with_metrics(
        invalidator: Invalidator,
        theme: Rc<Theme>,
        metrics: SheetMetrics,
    ) -> Self {
        let presentation = SheetPresentation::new(&theme);
        let mut sheet = Self {
            scroll_enabled: Observed::new(false, aspects::DISPLAY, &invalidator),
            metrics,
            presentation,
            items: Vec::new(),
            content_height: 0.0,
            scrolling: false,
            body: LayerPrimitive {
                corner_radius: presentation.corner_radius,
                ..LayerPrimitive::default()
            },
            backdrop: LayerPrimitive {
                background: Some(presentation.background),
                ..LayerPrimitive::default()
            },
            invalidator,
            theme,
        };
        sheet.force_pass();
        sheet
    }

    pub fn add_view(&mut self, view: impl IntrinsicHeight + 'static) {
        self.items.push(Box::new(view));
        self.invalidator.request_invalidation(Aspect::Layout);
    }

    /// Appends views to the vertical stack, top to bottom.
    pub fn add_views<I>(&mut self, views: I)
    where
        I: IntoIterator<Item = Box<dyn IntrinsicHeight>>,
    {
        let before = self.items.len();
        self.items.extend(views);
        if self.items.len() != before {
            self.invalidator.request_invalidation(Aspect::Layout);
        }
    }

    pub fn view_count(&self) -> usize {
        self.items.len()
    }

    /// Lays the content out and returns the height the sheet wants inside
    /// `available_height`. Enables scrolling when the content is taller
    /// than the space left under the top inset, and disables it otherwise.
    pub fn negotiate_height(&mut self, available_height: f32) -> PreferredHeight {
        self.force_layout();
        let metrics = self.metrics;
        let content = self.content_height;
        let max_height = available_height - metrics.top_inset;

        let (height, scroll_enabled) = if content + metrics.content_margin < metrics.min_height {
            (metrics.min_height, false)
        } else if content > max_height {
            (max_height, true)
        } else {
            (content + metrics.content_margin, false)
        };

        if self.scroll_enabled.set(scroll_enabled) {
            log::debug!(
                "bottom sheet {}: content {content} in {available_height} available, scrolling {}",
                self.invalidator.id(),
                if scroll_enabled { "on" } else { "off" }
            );
        }
        PreferredHeight {
            height,
            scroll_enabled,
        }
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Scroll mode requested by the last negotiation.
    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled.value()
    }

    /// Scroll mode applied by the last display pass.
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    pub fn metrics(&self) -> &SheetMetrics {
        &self.metrics
    }

    pub fn presentation(&self) -> &SheetPresentation {
        &self.presentation
    }

    pub fn body(&self) -> &LayerPrimitive {
        &self.body
    }
}

impl Component for BottomSheet {
    fn invalidator(&self) -> &Invalidator {
        &self.invalidator
    }

    fn layout(&mut self) {
        self.content_height = self.items.iter().map(|item| item.intrinsic_height()).sum();
    }

    fn display(&mut self) {
        self.scrolling = self.scroll_enabled.value();
        self.body.background = Some(self.theme.color(ColorToken::BgNormal));
    }
}

impl Paint for BottomSheet {
    fn paint(&self, scene: &mut SceneBuilder) {
        scene.layer(PaintLayer::Behind, &self.backdrop);
        scene.layer(PaintLayer::Content, &self.body);
    }
}

impl fmt::Debug for BottomSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BottomSheet")
            .field("views", &self.items.len())
            .field("content_height", &self.content_height)
            .field("scroll_enabled", &self.scroll_enabled.value())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/bottom_sheet_tests.rs"]
mod tests;
