//! Compact status label tinted from the item palette.

use std::rc::Rc;

use yds_core::{aspects, Component, Invalidator, Observed};
use yds_ui_graphics::{EdgeInsets, TextStyle};

use crate::primitives::{Icon, ImagePrimitive, LabelPrimitive, LayerPrimitive};
use crate::renderer::{Paint, PaintLayer, SceneBuilder};
use crate::theme::{ColorToken, DimensionToken, Theme};
use crate::widgets::IntrinsicHeight;

const HEIGHT: f32 = 24.0;
const ICON_SIZE: f32 = 16.0;
const HORIZONTAL_PADDING: f32 = 8.0;
const HORIZONTAL_PADDING_WITHOUT_ICON: f32 = 12.0;

/// Item palette shared by badges and other tag-like elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ItemColor {
    #[default]
    Mono,
    Green,
    Emerald,
    Aqua,
    Blue,
    Indigo,
    Violet,
    Purple,
    Pink,
}

impl ItemColor {
    pub const ALL: [ItemColor; 9] = [
        ItemColor::Mono,
        ItemColor::Green,
        ItemColor::Emerald,
        ItemColor::Aqua,
        ItemColor::Blue,
        ItemColor::Indigo,
        ItemColor::Violet,
        ItemColor::Purple,
        ItemColor::Pink,
    ];

    pub fn background(self) -> ColorToken {
        match self {
            ItemColor::Mono => ColorToken::MonoItemBG,
            ItemColor::Green => ColorToken::GreenItemBG,
            ItemColor::Emerald => ColorToken::EmeraldItemBG,
            ItemColor::Aqua => ColorToken::AquaItemBG,
            ItemColor::Blue => ColorToken::BlueItemBG,
            ItemColor::Indigo => ColorToken::IndigoItemBG,
            ItemColor::Violet => ColorToken::VioletItemBG,
            ItemColor::Purple => ColorToken::PurpleItemBG,
            ItemColor::Pink => ColorToken::PinkItemBG,
        }
    }
}

pub struct Badge {
    invalidator: Invalidator,
    theme: Rc<Theme>,
    text: Observed<Option<String>>,
    icon: Observed<Option<Icon>>,
    color: Observed<ItemColor>,
    layer: LayerPrimitive,
    label: LabelPrimitive,
    image: ImagePrimitive,
    padding: EdgeInsets,
}

impl Badge {
    pub fn new(invalidator: Invalidator, theme: Rc<Theme>) -> Self {
        let foreground = theme.color(ColorToken::MonoItemText);
        let mut label = LabelPrimitive::new(TextStyle::Caption1);
        label.color = foreground;
        let mut image = ImagePrimitive::new(ICON_SIZE);
        image.tint = foreground;
        let mut badge = Self {
            text: Observed::new(None, aspects::LAYOUT, &invalidator),
            icon: Observed::new(None, aspects::LAYOUT, &invalidator),
            color: Observed::new(ItemColor::default(), aspects::LAYOUT, &invalidator),
            layer: LayerPrimitive {
                corner_radius: theme.dimension(DimensionToken::RoundingR2),
                height: Some(HEIGHT),
                ..LayerPrimitive::default()
            },
            label,
            image,
            padding: EdgeInsets::ZERO,
            invalidator,
            theme,
        };
        badge.force_pass();
        badge
    }

    pub fn set_text(&mut self, text: Option<&str>) {
        self.text.set(text.map(str::to_string));
    }

    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon.set(icon);
    }

    pub fn set_color(&mut self, color: ItemColor) {
        self.color.set(color);
    }

    pub fn color(&self) -> ItemColor {
        self.color.value()
    }

    pub fn layer(&self) -> &LayerPrimitive {
        &self.layer
    }

    pub fn label(&self) -> &LabelPrimitive {
        &self.label
    }

    pub fn image(&self) -> &ImagePrimitive {
        &self.image
    }

    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }
}

impl Component for Badge {
    fn invalidator(&self) -> &Invalidator {
        &self.invalidator
    }

    fn layout(&mut self) {
        self.label.hidden = !self.text.is_some();
        self.label.text = self.text.get().clone();

        self.image.hidden = !self.icon.is_some();
        self.image.icon = self.icon.get().clone();
        let padding = if self.icon.is_some() {
            HORIZONTAL_PADDING
        } else {
            HORIZONTAL_PADDING_WITHOUT_ICON
        };
        self.padding = EdgeInsets::horizontal(padding, padding);

        self.layer.background = Some(self.theme.color(self.color.value().background()));
    }

    fn display(&mut self) {}
}

impl Paint for Badge {
    fn paint(&self, scene: &mut SceneBuilder) {
        scene.layer(PaintLayer::Behind, &self.layer);
        scene.image(&self.image);
        scene.label(&self.label);
    }
}

impl IntrinsicHeight for Badge {
    fn intrinsic_height(&self) -> f32 {
        HEIGHT
    }
}

#[cfg(test)]
#[path = "tests/badge_tests.rs"]
mod tests;
