//! Read-only design tokens injected into every widget.
//!
//! A [`Theme`] maps semantic tokens (`buttonPoint`, `textDisabled`, ...) to
//! concrete colors and dimensions. Widgets never hold color literals; they
//! resolve tokens through the theme they were constructed with.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use yds_ui_graphics::Color;

macro_rules! tokens {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal,)* }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Semantic token name as used in theme configuration.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)*
                }
            }
        }

        impl FromStr for $name {
            type Err = ThemeError;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                match name {
                    $($label => Ok($name::$variant),)*
                    _ => Err(ThemeError::UnknownToken {
                        name: name.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

tokens! {
    /// Semantic color tokens.
    ColorToken {
        ButtonBright => "buttonBright",
        ButtonPoint => "buttonPoint",
        ButtonPointPressed => "buttonPointPressed",
        ButtonPointBG => "buttonPointBG",
        ButtonWarned => "buttonWarned",
        ButtonWarnedPressed => "buttonWarnedPressed",
        ButtonWarnedBG => "buttonWarnedBG",
        ButtonDisabled => "buttonDisabled",
        ButtonDisabledBG => "buttonDisabledBG",
        TextSecondary => "textSecondary",
        TextTertiary => "textTertiary",
        TextDisabled => "textDisabled",
        TextPointed => "textPointed",
        TextWarned => "textWarned",
        TextBright => "textBright",
        InputFieldElevated => "inputFieldElevated",
        TooltipBG => "tooltipBG",
        TooltipPoint => "tooltipPoint",
        BgNormal => "bgNormal",
        DimNormal => "dimNormal",
        MonoItemBG => "monoItemBG",
        MonoItemText => "monoItemText",
        GreenItemBG => "greenItemBG",
        EmeraldItemBG => "emeraldItemBG",
        AquaItemBG => "aquaItemBG",
        BlueItemBG => "blueItemBG",
        IndigoItemBG => "indigoItemBG",
        VioletItemBG => "violetItemBG",
        PurpleItemBG => "purpleItemBG",
        PinkItemBG => "pinkItemBG",
    }
}

tokens! {
    /// Semantic dimension tokens (points).
    DimensionToken {
        BorderNormal => "borderNormal",
        RoundingR2 => "roundingR2",
        RoundingR4 => "roundingR4",
        RoundingR8 => "roundingR8",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    UnknownToken { name: String },
    InvalidColor { token: ColorToken, value: String },
    InvalidDimension { token: DimensionToken, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::UnknownToken { name } => write!(f, "unknown theme token `{name}`"),
            ThemeError::InvalidColor { token, value } => {
                write!(f, "invalid color `{value}` for token {token}")
            }
            ThemeError::InvalidDimension { token, value } => {
                write!(f, "invalid dimension `{value}` for token {token}")
            }
        }
    }
}

impl std::error::Error for ThemeError {}

/// Token table consumed by widgets. Every token always has a value.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    colors: IndexMap<ColorToken, Color>,
    dimensions: IndexMap<DimensionToken, f32>,
}

impl Theme {
    /// The stock light palette.
    pub fn standard() -> Self {
        let colors = ColorToken::ALL
            .iter()
            .map(|&token| (token, standard_color(token)))
            .collect();
        let dimensions = DimensionToken::ALL
            .iter()
            .map(|&token| (token, standard_dimension(token)))
            .collect();
        Self { colors, dimensions }
    }

    pub fn color(&self, token: ColorToken) -> Color {
        self.colors
            .get(&token)
            .copied()
            .unwrap_or_else(|| standard_color(token))
    }

    pub fn color_opt(&self, token: Option<ColorToken>) -> Option<Color> {
        token.map(|token| self.color(token))
    }

    pub fn dimension(&self, token: DimensionToken) -> f32 {
        self.dimensions
            .get(&token)
            .copied()
            .unwrap_or_else(|| standard_dimension(token))
    }

    pub fn with_color(mut self, token: ColorToken, color: Color) -> Self {
        self.colors.insert(token, color);
        self
    }

    pub fn with_dimension(mut self, token: DimensionToken, value: f32) -> Self {
        self.dimensions.insert(token, value);
        self
    }

    /// Applies `(token name, value)` overrides in order. Color values are
    /// `#RRGGBB` or `#RRGGBBAA`; dimension values are plain numbers.
    ///
    /// Stops at the first rejected entry. Entries before it stay applied and
    /// the rejected one leaves its token untouched.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Result<(), ThemeError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        overrides
            .into_iter()
            .try_for_each(|(name, value)| self.apply_override(name, value))
    }

    fn apply_override(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        if let Ok(token) = name.parse::<ColorToken>() {
            let color = Color::parse_hex(value).ok_or_else(|| ThemeError::InvalidColor {
                token,
                value: value.to_string(),
            })?;
            self.colors.insert(token, color);
            return Ok(());
        }
        let token = name.parse::<DimensionToken>()?;
        let dimension = value
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| ThemeError::InvalidDimension {
                token,
                value: value.to_string(),
            })?;
        self.dimensions.insert(token, dimension);
        Ok(())
    }

    /// Color tokens in declaration order.
    pub fn colors(&self) -> impl Iterator<Item = (ColorToken, Color)> + '_ {
        self.colors.iter().map(|(token, color)| (*token, *color))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_color(token: ColorToken) -> Color {
    use ColorToken::*;
    match token {
        ButtonBright | TextBright | BgNormal => Color::WHITE,
        ButtonPoint | TextPointed | TooltipPoint => Color::from_hex(0x7a4dff),
        ButtonPointPressed => Color::from_hex(0x5e36d6),
        ButtonPointBG | VioletItemBG => Color::from_hex(0xf1ecff),
        ButtonWarned | TextWarned => Color::from_hex(0xf04452),
        ButtonWarnedPressed => Color::from_hex(0xc7303d),
        ButtonWarnedBG => Color::from_hex(0xffeeef),
        ButtonDisabled | TextDisabled => Color::from_hex(0xb0b8c1),
        ButtonDisabledBG | InputFieldElevated | MonoItemBG => Color::from_hex(0xf2f4f6),
        TextSecondary | MonoItemText => Color::from_hex(0x333d4b),
        TextTertiary => Color::from_hex(0x6b7684),
        TooltipBG => Color::from_rgba_u8(0x33, 0x3d, 0x4b, 0xe6),
        DimNormal => Color::from_rgba_u8(0, 0, 0, 0x66),
        GreenItemBG => Color::from_hex(0xe7f8ef),
        EmeraldItemBG => Color::from_hex(0xe3f8f5),
        AquaItemBG => Color::from_hex(0xe3f6fb),
        BlueItemBG => Color::from_hex(0xe8f1ff),
        IndigoItemBG => Color::from_hex(0xebeeff),
        PurpleItemBG => Color::from_hex(0xf7ebff),
        PinkItemBG => Color::from_hex(0xffebf3),
    }
}

fn standard_dimension(token: DimensionToken) -> f32 {
    match token {
        DimensionToken::BorderNormal => 1.0,
        DimensionToken::RoundingR2 => 2.0,
        DimensionToken::RoundingR4 => 4.0,
        DimensionToken::RoundingR8 => 8.0,
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
