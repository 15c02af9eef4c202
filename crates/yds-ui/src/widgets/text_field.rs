//! Single-line input fields: the suffix field and the search field.

use std::rc::Rc;

use yds_core::{aspects, Component, Invalidator, Observed, Rule, RuleTable};
use yds_ui_graphics::{Color, EdgeInsets, TextStyle};

use crate::primitives::{Icon, ImagePrimitive, LabelPrimitive, LayerPrimitive};
use crate::renderer::{Paint, PaintLayer, SceneBuilder};
use crate::style::{BorderWidth, ResolvedStyle};
use crate::theme::{ColorToken, DimensionToken, Theme};
use crate::widgets::IntrinsicHeight;

/// Spacing shared by the input widgets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldMetrics {
    pub left_margin: f32,
    pub right_margin: f32,
    pub subview_spacing: f32,
    pub field_height: f32,
    pub search_field_height: f32,
    /// Platform inset of the clear button that the right margin replaces.
    pub clear_button_default_right_margin: f32,
    pub accessory_icon_size: f32,
}

impl Default for FieldMetrics {
    fn default() -> Self {
        Self {
            left_margin: 16.0,
            right_margin: 16.0,
            subview_spacing: 8.0,
            field_height: 48.0,
            search_field_height: 38.0,
            clear_button_default_right_margin: 6.0,
            accessory_icon_size: 16.0,
        }
    }
}

impl FieldMetrics {
    /// Text insets around a leading and a trailing accessory of the given
    /// widths. A zero width means the accessory is absent.
    pub fn text_insets(&self, leading: f32, trailing: f32) -> EdgeInsets {
        let pad = |width: f32| {
            if width > 0.0 {
                width + self.subview_spacing
            } else {
                0.0
            }
        };
        EdgeInsets::horizontal(
            self.left_margin + pad(leading),
            self.right_margin + pad(trailing),
        )
    }

    /// Horizontal shift applied to the platform clear button.
    pub fn clear_button_offset(&self) -> f32 {
        -(self.right_margin - self.clear_button_default_right_margin)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldSnapshot {
    pub is_disabled: bool,
    pub is_negative: bool,
    pub is_positive: bool,
}

impl FieldSnapshot {
    fn disabled(&self) -> bool {
        self.is_disabled
    }

    fn negative(&self) -> bool {
        self.is_negative
    }

    fn positive(&self) -> bool {
        self.is_positive
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldTier {
    Disabled,
    Negative,
    Positive,
    Normal,
}

/// Token tuple for one tier of a field's state ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldPalette {
    pub tier: FieldTier,
    pub enabled: bool,
    pub text: ColorToken,
    /// Tint of the suffix label or the search icon.
    pub accessory: ColorToken,
    pub border_width: BorderWidth,
    pub border: Option<ColorToken>,
}

impl FieldPalette {
    pub fn resolve(&self, theme: &Theme) -> FieldStyle {
        FieldStyle {
            tier: self.tier,
            enabled: self.enabled,
            style: ResolvedStyle {
                foreground: theme.color(self.text),
                background: Some(theme.color(ColorToken::InputFieldElevated)),
                border_color: theme.color_opt(self.border),
                border_width: self.border_width.points(theme),
            },
            accessory: theme.color(self.accessory),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldStyle {
    pub tier: FieldTier,
    pub enabled: bool,
    pub style: ResolvedStyle,
    pub accessory: Color,
}

type FieldTable = RuleTable<FieldSnapshot, FieldPalette>;

const DISABLED: FieldPalette = FieldPalette {
    tier: FieldTier::Disabled,
    enabled: false,
    text: ColorToken::TextDisabled,
    accessory: ColorToken::TextDisabled,
    border_width: BorderWidth::None,
    border: None,
};

static SUFFIX_RULES: [Rule<FieldSnapshot, FieldPalette>; 3] = [
    Rule {
        when: FieldSnapshot::disabled,
        then: DISABLED,
    },
    Rule {
        when: FieldSnapshot::negative,
        then: FieldPalette {
            tier: FieldTier::Negative,
            enabled: true,
            text: ColorToken::TextSecondary,
            accessory: ColorToken::TextTertiary,
            border_width: BorderWidth::Normal,
            border: Some(ColorToken::TextWarned),
        },
    },
    Rule {
        when: FieldSnapshot::positive,
        then: FieldPalette {
            tier: FieldTier::Positive,
            enabled: true,
            text: ColorToken::TextSecondary,
            accessory: ColorToken::TextTertiary,
            border_width: BorderWidth::Normal,
            border: Some(ColorToken::TextPointed),
        },
    },
];

/// `disabled > negative > positive > normal`.
pub static SUFFIX_FIELD_RULES: FieldTable = RuleTable::new(
    &SUFFIX_RULES,
    FieldPalette {
        tier: FieldTier::Normal,
        enabled: true,
        text: ColorToken::TextSecondary,
        accessory: ColorToken::TextTertiary,
        border_width: BorderWidth::None,
        border: None,
    },
);

static SEARCH_RULES: [Rule<FieldSnapshot, FieldPalette>; 1] = [Rule {
    when: FieldSnapshot::disabled,
    then: DISABLED,
}];

/// `disabled > normal`; search inputs have no validation tiers.
pub static SEARCH_FIELD_RULES: FieldTable = RuleTable::new(
    &SEARCH_RULES,
    FieldPalette {
        tier: FieldTier::Normal,
        enabled: true,
        text: ColorToken::TextSecondary,
        accessory: ColorToken::TextSecondary,
        border_width: BorderWidth::None,
        border: None,
    },
);

pub fn resolve_field_style(
    table: &FieldTable,
    snapshot: FieldSnapshot,
    theme: &Theme,
) -> FieldStyle {
    table.resolve(&snapshot).resolve(theme)
}

pub fn placeholder_color(is_disabled: bool, theme: &Theme) -> Color {
    if is_disabled {
        theme.color(ColorToken::TextDisabled)
    } else {
        theme.color(ColorToken::TextTertiary)
    }
}

/// Shared render state of an input field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldPrimitives {
    pub enabled: bool,
    pub layer: LayerPrimitive,
    pub text: LabelPrimitive,
    pub placeholder: LabelPrimitive,
    pub text_insets: EdgeInsets,
}

impl FieldPrimitives {
    pub(crate) fn new(theme: &Theme, style: TextStyle, height: f32) -> Self {
        Self {
            enabled: true,
            layer: LayerPrimitive {
                background: Some(theme.color(ColorToken::InputFieldElevated)),
                corner_radius: theme.dimension(DimensionToken::RoundingR8),
                height: Some(height),
                ..LayerPrimitive::default()
            },
            text: LabelPrimitive::new(style),
            placeholder: LabelPrimitive::new(style),
            text_insets: EdgeInsets::ZERO,
        }
    }

    pub(crate) fn apply(&mut self, resolved: &FieldStyle) {
        self.enabled = resolved.enabled;
        self.text.color = resolved.style.foreground;
        self.layer.border_width = resolved.style.border_width;
        self.layer.border_color = resolved.style.border_color;
    }

    pub(crate) fn apply_placeholder(&mut self, placeholder: Option<&String>, color: Color) {
        self.placeholder.text = placeholder.cloned();
        self.placeholder.color = color;
    }

    pub(crate) fn paint(&self, scene: &mut SceneBuilder) {
        scene.layer(PaintLayer::Behind, &self.layer);
        if self.text.text.as_deref().map_or(true, str::is_empty) {
            scene.label(&self.placeholder);
        } else {
            scene.label(&self.text);
        }
    }
}

/// Input field with a trailing suffix label (units, domains).
pub struct SuffixTextField {
    invalidator: Invalidator,
    theme: Rc<Theme>,
    metrics: FieldMetrics,
    is_disabled: Observed<bool>,
    is_negative: Observed<bool>,
    is_positive: Observed<bool>,
    placeholder: Observed<Option<String>>,
    suffix_text: Observed<Option<String>>,
    resolved: FieldStyle,
    field: FieldPrimitives,
    suffix: LabelPrimitive,
    suffix_offset: f32,
}

impl SuffixTextField {
    pub fn new(invalidator: Invalidator, theme: Rc<Theme>) -> Self {
        let metrics = FieldMetrics::default();
        let resolved = resolve_field_style(&SUFFIX_FIELD_RULES, FieldSnapshot::default(), &theme);
        let mut field = Self {
            is_disabled: Observed::new(false, aspects::DISPLAY, &invalidator),
            is_negative: Observed::new(false, aspects::DISPLAY, &invalidator),
            is_positive: Observed::new(false, aspects::DISPLAY, &invalidator),
            placeholder: Observed::new(None, aspects::DISPLAY, &invalidator),
            suffix_text: Observed::new(None, aspects::LAYOUT, &invalidator),
            resolved,
            field: FieldPrimitives::new(&theme, TextStyle::Body1, metrics.field_height),
            suffix: LabelPrimitive::new(TextStyle::Body1),
            suffix_offset: -metrics.right_margin,
            metrics,
            invalidator,
            theme,
        };
        field.field.text_insets = metrics.text_insets(0.0, 0.0);
        field.force_pass();
        field
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled.set(disabled);
    }

    pub fn set_negative(&mut self, negative: bool) {
        self.is_negative.set(negative);
    }

    pub fn set_positive(&mut self, positive: bool) {
        self.is_positive.set(positive);
    }

    pub fn set_placeholder(&mut self, placeholder: Option<&str>) {
        self.placeholder.set(placeholder.map(str::to_string));
    }

    pub fn set_suffix_text(&mut self, suffix: Option<&str>) {
        self.suffix_text.set(suffix.map(str::to_string));
    }

    /// User input. Not an attribute: typing never schedules a pass.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.field.text.text = Some(text.into());
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            is_disabled: self.is_disabled.value(),
            is_negative: self.is_negative.value(),
            is_positive: self.is_positive.value(),
        }
    }

    pub fn resolved(&self) -> &FieldStyle {
        &self.resolved
    }

    pub fn field(&self) -> &FieldPrimitives {
        &self.field
    }

    pub fn suffix(&self) -> &LabelPrimitive {
        &self.suffix
    }

    pub fn suffix_offset(&self) -> f32 {
        self.suffix_offset
    }

    pub fn metrics(&self) -> &FieldMetrics {
        &self.metrics
    }
}

impl Component for SuffixTextField {
    fn invalidator(&self) -> &Invalidator {
        &self.invalidator
    }

    fn layout(&mut self) {
        let suffix = self.suffix_text.get().clone();
        self.suffix.hidden = suffix.is_none();
        self.suffix.text = suffix;
    }

    fn display(&mut self) {
        self.resolved = resolve_field_style(&SUFFIX_FIELD_RULES, self.snapshot(), &self.theme);
        self.field.apply(&self.resolved);
        self.suffix.color = self.resolved.accessory;
        let color = placeholder_color(self.is_disabled.value(), &self.theme);
        self.field.apply_placeholder(self.placeholder.as_ref(), color);
    }
}

impl Paint for SuffixTextField {
    fn paint(&self, scene: &mut SceneBuilder) {
        self.field.paint(scene);
        scene.label(&self.suffix);
    }
}

impl IntrinsicHeight for SuffixTextField {
    fn intrinsic_height(&self) -> f32 {
        self.metrics.field_height
    }
}

/// Input field with a leading magnifier icon.
pub struct SearchTextField {
    invalidator: Invalidator,
    theme: Rc<Theme>,
    metrics: FieldMetrics,
    is_disabled: Observed<bool>,
    placeholder: Observed<Option<String>>,
    resolved: FieldStyle,
    field: FieldPrimitives,
    search_icon: ImagePrimitive,
}

impl SearchTextField {
    pub fn new(invalidator: Invalidator, theme: Rc<Theme>) -> Self {
        let metrics = FieldMetrics::default();
        let resolved = resolve_field_style(&SEARCH_FIELD_RULES, FieldSnapshot::default(), &theme);
        let mut search_icon = ImagePrimitive::new(metrics.accessory_icon_size);
        search_icon.icon = Some(Icon::SEARCH_LINE);
        let mut field = Self {
            is_disabled: Observed::new(false, aspects::LAYOUT_AND_DISPLAY, &invalidator),
            placeholder: Observed::new(None, aspects::DISPLAY, &invalidator),
            resolved,
            field: FieldPrimitives::new(&theme, TextStyle::Body2, metrics.search_field_height),
            search_icon,
            metrics,
            invalidator,
            theme,
        };
        field.force_pass();
        field
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

    pub fn clear_button_offset(&self) -> f32 {
        self.metrics.clear_button_offset()
    }
}

impl Component for SearchTextField {
    fn invalidator(&self) -> &Invalidator {
        &self.invalidator
    }

    fn layout(&mut self) {
        let snapshot = FieldSnapshot {
            is_disabled: self.is_disabled.value(),
            ..FieldSnapshot::default()
        };
        self.resolved = resolve_field_style(&SEARCH_FIELD_RULES, snapshot, &self.theme);
        self.field.apply(&self.resolved);
        self.search_icon.tint = self.resolved.accessory;
        self.field.text_insets = self.metrics.text_insets(self.search_icon.size, 0.0);
    }

    fn display(&mut self) {
        let color = placeholder_color(self.is_disabled.value(), &self.theme);
        self.field.apply_placeholder(self.placeholder.as_ref(), color);
    }
}

impl Paint for SearchTextField {
    fn paint(&self, scene: &mut SceneBuilder) {
        self.field.paint(scene);
        scene.image(&self.search_icon);
    }
}

impl IntrinsicHeight for SearchTextField {
    fn intrinsic_height(&self) -> f32 {
        self.metrics.search_field_height
    }
}

#[cfg(test)]
#[path = "tests/text_field_tests.rs"]
mod tests;
