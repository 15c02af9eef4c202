//! Rectangular button with filled, tinted and line appearances.

use std::rc::Rc;

use yds_core::{
    aspects, Aspect, Component, Interaction, Invalidator, Observed, Pressable, Rule, RuleTable,
};
use yds_ui_graphics::{EdgeInsets, TextStyle};

use crate::primitives::{
    ContentLayout, Icon, ImagePrimitive, LabelPrimitive, LayerPrimitive, TextDirection,
};
use crate::renderer::{Paint, PaintLayer, SceneBuilder};
use crate::style::{BorderWidth, ResolvedStyle};
use crate::theme::{ColorToken, DimensionToken, Theme};
use crate::widgets::IntrinsicHeight;
use ColorToken::*;

/// Space between the icon and the title.
const SUBVIEW_SPACING: f32 = 4.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxButtonType {
    #[default]
    Filled,
    Tinted,
    Line,
}

impl BoxButtonType {
    pub const ALL: [BoxButtonType; 3] = [
        BoxButtonType::Filled,
        BoxButtonType::Tinted,
        BoxButtonType::Line,
    ];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxButtonSize {
    ExtraLarge,
    #[default]
    Large,
    Medium,
    Small,
}

impl BoxButtonSize {
    pub fn height(self) -> f32 {
        match self {
            BoxButtonSize::ExtraLarge => 56.0,
            BoxButtonSize::Large => 48.0,
            BoxButtonSize::Medium => 40.0,
            BoxButtonSize::Small => 32.0,
        }
    }

    pub fn padding(self) -> f32 {
        match self {
            BoxButtonSize::ExtraLarge | BoxButtonSize::Large => 16.0,
            BoxButtonSize::Medium | BoxButtonSize::Small => 12.0,
        }
    }

    pub fn text_style(self) -> TextStyle {
        match self {
            BoxButtonSize::ExtraLarge => TextStyle::Button1,
            BoxButtonSize::Large | BoxButtonSize::Medium => TextStyle::Button2,
            BoxButtonSize::Small => TextStyle::Button4,
        }
    }

    pub fn icon_size(self) -> f32 {
        match self {
            BoxButtonSize::Small => 16.0,
            _ => 24.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxButtonRounding {
    R8,
    #[default]
    R4,
}

impl BoxButtonRounding {
    fn token(self) -> DimensionToken {
        match self {
            BoxButtonRounding::R8 => DimensionToken::RoundingR8,
            BoxButtonRounding::R4 => DimensionToken::RoundingR4,
        }
    }
}

/// Which precedence tier a button's colors come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonTier {
    Disabled,
    Warned,
    Normal,
}

/// The attributes button colors depend on, captured for one resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ButtonSnapshot {
    pub is_disabled: bool,
    pub is_warned: bool,
}

impl ButtonSnapshot {
    fn disabled(&self) -> bool {
        self.is_disabled
    }

    fn warned(&self) -> bool {
        self.is_warned
    }
}

/// Token tuple for one `(type, tier)` cell of the button color table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ButtonPalette {
    pub tier: ButtonTier,
    pub foreground: Pressable<ColorToken>,
    pub background: Pressable<Option<ColorToken>>,
    pub border: Pressable<Option<ColorToken>>,
    pub border_width: BorderWidth,
}

impl ButtonPalette {
    const fn filled(
        tier: ButtonTier,
        foreground: Pressable<ColorToken>,
        background: Pressable<Option<ColorToken>>,
    ) -> Self {
        Self {
            tier,
            foreground,
            background,
            border: Pressable::fixed(None),
            border_width: BorderWidth::None,
        }
    }

    const fn outlined(
        tier: ButtonTier,
        foreground: Pressable<ColorToken>,
        border: Pressable<Option<ColorToken>>,
    ) -> Self {
        Self {
            tier,
            foreground,
            background: Pressable::fixed(None),
            border,
            border_width: BorderWidth::Normal,
        }
    }

    pub fn resolve(&self, interaction: Interaction, theme: &Theme) -> ResolvedStyle {
        ResolvedStyle {
            foreground: theme.color(self.foreground.pick(interaction)),
            background: theme.color_opt(self.background.pick(interaction)),
            border_color: theme.color_opt(self.border.pick(interaction)),
            border_width: self.border_width.points(theme),
        }
    }
}

type ButtonTable = RuleTable<ButtonSnapshot, ButtonPalette>;

const DISABLED_FG: Pressable<ColorToken> = Pressable::fixed(ButtonDisabled);
const DISABLED_BG: Pressable<Option<ColorToken>> = Pressable::fixed(Some(ButtonDisabledBG));
const POINT_FG: Pressable<ColorToken> = Pressable::new(ButtonPoint, ButtonPointPressed);
const WARNED_FG: Pressable<ColorToken> = Pressable::new(ButtonWarned, ButtonWarnedPressed);
const POINT_ACCENT: Pressable<Option<ColorToken>> =
    Pressable::new(Some(ButtonPoint), Some(ButtonPointPressed));
const WARNED_ACCENT: Pressable<Option<ColorToken>> =
    Pressable::new(Some(ButtonWarned), Some(ButtonWarnedPressed));

static FILLED_RULES: [Rule<ButtonSnapshot, ButtonPalette>; 2] = [
    Rule {
        when: ButtonSnapshot::disabled,
        then: ButtonPalette::filled(ButtonTier::Disabled, DISABLED_FG, DISABLED_BG),
    },
    Rule {
        when: ButtonSnapshot::warned,
        then: ButtonPalette::filled(
            ButtonTier::Warned,
            Pressable::fixed(ButtonBright),
            WARNED_ACCENT,
        ),
    },
];

static FILLED: ButtonTable = RuleTable::new(
    &FILLED_RULES,
    ButtonPalette::filled(ButtonTier::Normal, Pressable::fixed(ButtonBright), POINT_ACCENT),
);

static TINTED_RULES: [Rule<ButtonSnapshot, ButtonPalette>; 2] = [
    Rule {
        when: ButtonSnapshot::disabled,
        then: ButtonPalette::filled(ButtonTier::Disabled, DISABLED_FG, DISABLED_BG),
    },
    Rule {
        when: ButtonSnapshot::warned,
        then: ButtonPalette::filled(
            ButtonTier::Warned,
            WARNED_FG,
            Pressable::fixed(Some(ButtonWarnedBG)),
        ),
    },
];

static TINTED: ButtonTable = RuleTable::new(
    &TINTED_RULES,
    ButtonPalette::filled(
        ButtonTier::Normal,
        POINT_FG,
        Pressable::fixed(Some(ButtonPointBG)),
    ),
);

static LINE_RULES: [Rule<ButtonSnapshot, ButtonPalette>; 2] = [
    Rule {
        when: ButtonSnapshot::disabled,
        then: ButtonPalette::outlined(
            ButtonTier::Disabled,
            DISABLED_FG,
            Pressable::fixed(Some(ButtonDisabled)),
        ),
    },
    Rule {
        when: ButtonSnapshot::warned,
        then: ButtonPalette::outlined(ButtonTier::Warned, WARNED_FG, WARNED_ACCENT),
    },
];

static LINE: ButtonTable = RuleTable::new(
    &LINE_RULES,
    ButtonPalette::outlined(ButtonTier::Normal, POINT_FG, POINT_ACCENT),
);

/// Color table for a button type. Rules are `disabled > warned > normal`.
pub fn button_rules(button_type: BoxButtonType) -> &'static ButtonTable {
    match button_type {
        BoxButtonType::Filled => &FILLED,
        BoxButtonType::Tinted => &TINTED,
        BoxButtonType::Line => &LINE,
    }
}

/// Pure style resolution for a box button.
pub fn resolve_button_style(
    button_type: BoxButtonType,
    snapshot: ButtonSnapshot,
    interaction: Interaction,
    theme: &Theme,
) -> ResolvedStyle {
    button_rules(button_type)
        .resolve(&snapshot)
        .resolve(interaction, theme)
}

/// Where the icon sits relative to the title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconPlacement {
    Leading,
    Trailing,
    /// Icon only, text only, or neither.
    Plain,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IconSnapshot {
    pub has_left_icon: bool,
    pub has_right_icon: bool,
    pub has_text: bool,
}

impl IconSnapshot {
    fn left_with_text(&self) -> bool {
        self.has_left_icon && self.has_text
    }

    fn right_with_text(&self) -> bool {
        self.has_right_icon && self.has_text
    }
}

static PLACEMENT_RULES: [Rule<IconSnapshot, IconPlacement>; 2] = [
    Rule {
        when: IconSnapshot::left_with_text,
        then: IconPlacement::Leading,
    },
    Rule {
        when: IconSnapshot::right_with_text,
        then: IconPlacement::Trailing,
    },
];

static PLACEMENT: RuleTable<IconSnapshot, IconPlacement> =
    RuleTable::new(&PLACEMENT_RULES, IconPlacement::Plain);

pub fn icon_placement(snapshot: IconSnapshot) -> IconPlacement {
    *PLACEMENT.resolve(&snapshot)
}

/// Insets for `placement` at the given horizontal padding.
pub fn content_layout(placement: IconPlacement, padding: f32) -> ContentLayout {
    let half = SUBVIEW_SPACING / 2.0;
    match placement {
        IconPlacement::Leading => ContentLayout {
            direction: TextDirection::LeftToRight,
            image_insets: EdgeInsets::horizontal(-half, half),
            title_insets: EdgeInsets::horizontal(half, -half),
            content_insets: EdgeInsets::horizontal(padding + half, padding + half),
        },
        IconPlacement::Trailing => ContentLayout {
            direction: TextDirection::RightToLeft,
            image_insets: EdgeInsets::horizontal(half, -half),
            title_insets: EdgeInsets::horizontal(-half, half),
            content_insets: EdgeInsets::horizontal(padding + half, padding + half),
        },
        IconPlacement::Plain => ContentLayout {
            direction: TextDirection::LeftToRight,
            image_insets: EdgeInsets::ZERO,
            title_insets: EdgeInsets::ZERO,
            content_insets: EdgeInsets::horizontal(padding, padding),
        },
    }
}

pub struct BoxButton {
    invalidator: Invalidator,
    theme: Rc<Theme>,
    is_disabled: Observed<bool>,
    is_warned: Observed<bool>,
    button_type: Observed<BoxButtonType>,
    size: Observed<BoxButtonSize>,
    rounding: Observed<BoxButtonRounding>,
    text: Observed<Option<String>>,
    left_icon: Observed<Option<Icon>>,
    right_icon: Observed<Option<Icon>>,
    interaction: Interaction,
    enabled: bool,
    style: ResolvedStyle,
    layer: LayerPrimitive,
    title: LabelPrimitive,
    image: ImagePrimitive,
    content: ContentLayout,
}

impl BoxButton {
    pub fn new(invalidator: Invalidator, theme: Rc<Theme>) -> Self {
        let size = BoxButtonSize::default();
        let mut button = Self {
            is_disabled: Observed::new(false, aspects::LAYOUT_AND_DISPLAY, &invalidator),
            is_warned: Observed::new(false, aspects::DISPLAY, &invalidator),
            button_type: Observed::new(BoxButtonType::default(), aspects::DISPLAY, &invalidator),
            size: Observed::new(size, aspects::DISPLAY, &invalidator),
            rounding: Observed::new(BoxButtonRounding::default(), aspects::LAYOUT, &invalidator),
            text: Observed::new(None, aspects::LAYOUT_AND_DISPLAY, &invalidator),
            left_icon: Observed::new(None, aspects::DISPLAY, &invalidator),
            right_icon: Observed::new(None, aspects::DISPLAY, &invalidator),
            interaction: Interaction::IDLE,
            enabled: true,
            style: ResolvedStyle::UNSTYLED,
            layer: LayerPrimitive::default(),
            title: LabelPrimitive::new(size.text_style()),
            image: ImagePrimitive::new(size.icon_size()),
            content: ContentLayout::default(),
            invalidator,
            theme,
        };
        button.force_pass();
        button
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled.set(disabled);
    }

    pub fn set_warned(&mut self, warned: bool) {
        self.is_warned.set(warned);
    }

    pub fn set_type(&mut self, button_type: BoxButtonType) {
        self.button_type.set(button_type);
    }

    pub fn set_size(&mut self, size: BoxButtonSize) {
        self.size.set(size);
    }

    pub fn set_rounding(&mut self, rounding: BoxButtonRounding) {
        self.rounding.set(rounding);
    }

    pub fn set_text(&mut self, text: Option<&str>) {
        self.text.set(text.map(str::to_string));
    }

    pub fn set_left_icon(&mut self, icon: Option<Icon>) {
        self.left_icon.set(icon);
    }

    pub fn set_right_icon(&mut self, icon: Option<Icon>) {
        self.right_icon.set(icon);
    }

    /// Press/release signal from the platform. Only repaints.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.interaction = Interaction { pressed };
        self.invalidator.request_invalidation(Aspect::Display);
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled.value()
    }

    pub fn is_warned(&self) -> bool {
        self.is_warned.value()
    }

    pub fn button_type(&self) -> BoxButtonType {
        self.button_type.value()
    }

    pub fn size(&self) -> BoxButtonSize {
        self.size.value()
    }

    pub fn rounding(&self) -> BoxButtonRounding {
        self.rounding.value()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_ref().map(String::as_str)
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Whether the last layout pass left the button accepting touches.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    pub fn layer(&self) -> &LayerPrimitive {
        &self.layer
    }

    pub fn title(&self) -> &LabelPrimitive {
        &self.title
    }

    pub fn image(&self) -> &ImagePrimitive {
        &self.image
    }

    pub fn content_layout(&self) -> &ContentLayout {
        &self.content
    }

    fn snapshot(&self) -> ButtonSnapshot {
        ButtonSnapshot {
            is_disabled: self.is_disabled.value(),
            is_warned: self.is_warned.value(),
        }
    }

    fn icon_snapshot(&self) -> IconSnapshot {
        IconSnapshot {
            has_left_icon: self.left_icon.is_some(),
            has_right_icon: self.right_icon.is_some(),
            has_text: self.text.is_some(),
        }
    }
}

impl Component for BoxButton {
    fn invalidator(&self) -> &Invalidator {
        &self.invalidator
    }

    fn layout(&mut self) {
        self.enabled = !self.is_disabled.value();
        self.title.text = self.text.get().clone();
        self.layer.corner_radius = self.theme.dimension(self.rounding.value().token());
    }

    fn display(&mut self) {
        let style = resolve_button_style(
            self.button_type.value(),
            self.snapshot(),
            self.interaction,
            &self.theme,
        );
        self.style = style;
        self.layer.background = style.background;
        self.layer.border_color = style.border_color;
        self.layer.border_width = style.border_width;
        self.title.color = style.foreground;
        self.image.tint = style.foreground;

        let size = self.size.value();
        self.layer.height = Some(size.height());
        self.title.style = size.text_style();
        self.image.size = size.icon_size();
        self.image.icon = self
            .left_icon
            .get()
            .clone()
            .or_else(|| self.right_icon.get().clone());
        self.content = content_layout(icon_placement(self.icon_snapshot()), size.padding());
    }
}

impl Paint for BoxButton {
    fn paint(&self, scene: &mut SceneBuilder) {
        scene.layer(PaintLayer::Behind, &self.layer);
        scene.image(&self.image);
        scene.label(&self.title);
    }
}

impl IntrinsicHeight for BoxButton {
    fn intrinsic_height(&self) -> f32 {
        self.size.value().height()
    }
}

#[cfg(test)]
#[path = "tests/box_button_tests.rs"]
mod tests;
