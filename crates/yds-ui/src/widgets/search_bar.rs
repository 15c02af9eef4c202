//! Search field styled for the navigation bar.

use std::rc::Rc;

use yds_core::{aspects, Component, Invalidator, Observed};
use yds_ui_graphics::TextStyle;

use crate::primitives::{Icon, ImagePrimitive};
use crate::renderer::{Paint, SceneBuilder};
use crate::theme::Theme;
use crate::widgets::{
    placeholder_color, resolve_field_style, FieldMetrics, FieldPrimitives, FieldSnapshot,
    FieldStyle, IntrinsicHeight, SEARCH_FIELD_RULES,
};

/// Horizontal inset of the platform's own search icon.
const SEARCH_ICON_DEFAULT_LEFT_MARGIN: f32 = 6.0;

/// Navigation-bar search field. Every attribute is applied in the layout
/// pass; the display pass has nothing to do.
pub struct SearchBar {
    invalidator: Invalidator,
    theme: Rc<Theme>,
    metrics: FieldMetrics,
    is_disabled: Observed<bool>,
    placeholder: Observed<Option<String>>,
    resolved: FieldStyle,
    field: FieldPrimitives,
    search_icon: ImagePrimitive,
}

impl SearchBar {
    pub fn new(invalidator: Invalidator, theme: Rc<Theme>) -> Self {
        let metrics = FieldMetrics::default();
        let resolved = resolve_field_style(&SEARCH_FIELD_RULES, FieldSnapshot::default(), &theme);
        let mut search_icon = ImagePrimitive::new(metrics.accessory_icon_size);
        search_icon.icon = Some(Icon::SEARCH_LINE);
        let mut bar = Self {
            is_disabled: Observed::new(false, aspects::LAYOUT, &invalidator),
            placeholder: Observed::new(None, aspects::LAYOUT, &invalidator),
            resolved,
            field: FieldPrimitives::new(&theme, TextStyle::Body2, metrics.search_field_height),
            search_icon,
            metrics,
            invalidator,
            theme,
        };
        bar.force_pass();
        bar
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled.set(disabled);
    }

    pub fn set_placeholder(&mut self, placeholder: Option<&str>) {
        self.placeholder.set(placeholder.map(str::to_string));
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.field.text.text = Some(text.into());
    }

    pub fn resolved(&self) -> &FieldStyle {
        &self.resolved
    }

    pub fn field(&self) -> &FieldPrimitives {
        &self.field
    }

    pub fn search_icon(&self) -> &ImagePrimitive {
        &self.search_icon
    }

    /// Shift applied to the search icon so it sits on the left margin.
    pub fn search_icon_offset(&self) -> f32 {
        self.metrics.left_margin - SEARCH_ICON_DEFAULT_LEFT_MARGIN
    }

    pub fn clear_button_offset(&self) -> f32 {
        self.metrics.clear_button_offset()
    }
}

impl Component for SearchBar {
    fn invalidator(&self) -> &Invalidator {
        &self.invalidator
    }

    fn layout(&mut self) {
        let is_disabled = self.is_disabled.value();
        let snapshot = FieldSnapshot {
            is_disabled,
            ..FieldSnapshot::default()
        };
        self.resolved = resolve_field_style(&SEARCH_FIELD_RULES, snapshot, &self.theme);
        self.field.apply(&self.resolved);
        self.search_icon.tint = self.resolved.accessory;
        let color = placeholder_color(is_disabled, &self.theme);
        self.field.apply_placeholder(self.placeholder.as_ref(), color);
    }

    fn display(&mut self) {}
}

impl Paint for SearchBar {
    fn paint(&self, scene: &mut SceneBuilder) {
        self.field.paint(scene);
        scene.image(&self.search_icon);
    }
}

impl IntrinsicHeight for SearchBar {
    fn intrinsic_height(&self) -> f32 {
        self.metrics.search_field_height
    }
}

#[cfg(test)]
#[path = "tests/search_bar_tests.rs"]
mod tests;
