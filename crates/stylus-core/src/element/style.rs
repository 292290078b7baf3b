//! Appearance of an element: colors, border, layout and spacing.

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("Expected a '#' prefixed hex color, got {0:?}")]
    MissingHash(String),
    #[error("Invalid hex color {0:?}")]
    InvalidHex(String),
}

/// Serializable color representation (RGBA8).
///
/// Serialized as a CSS hex string (`#rrggbb`, `#rrggbbaa` or `transparent`)
/// so element snapshots read the same way the generated code does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse a CSS color in `#rgb`, `#rrggbb`, `#rrggbbaa` or `transparent` form.
    pub fn from_hex(color: &str) -> Result<Self, ColorParseError> {
        let color = color.trim();
        if color.eq_ignore_ascii_case("transparent") {
            return Ok(Self::transparent());
        }

        let hex = color
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(color.to_string()))?;
        let invalid = || ColorParseError::InvalidHex(color.to_string());
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(invalid)
        };

        match hex.len() {
            3 => {
                // #rgb -> #rrggbb
                let r = channel(0..1)? * 17;
                let g = channel(1..2)? * 17;
                let b = channel(2..3)? * 17;
                Ok(Self::rgb(r, g, b))
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Format as a CSS color value.
    pub fn to_css(&self) -> String {
        if *self == Self::transparent() {
            "transparent".to_string()
        } else if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<SerializableColor> for String {
    fn from(color: SerializableColor) -> Self {
        color.to_css()
    }
}

impl TryFrom<String> for SerializableColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
    None,
}

impl BorderStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Double => "double",
            BorderStyle::None => "none",
        }
    }
}

/// Border of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub width: f64,
    pub color: SerializableColor,
    pub radius: f64,
    #[serde(default)]
    pub style: BorderStyle,
}

impl Border {
    /// No visible border.
    pub fn none() -> Self {
        Self {
            width: 0.0,
            color: SerializableColor::transparent(),
            radius: 0.0,
            style: BorderStyle::None,
        }
    }
}

/// Drop shadow behind an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxShadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: SerializableColor,
}

impl BoxShadow {
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            self.offset_x,
            self.offset_y,
            self.blur,
            self.spread,
            self.color.to_css()
        )
    }
}

/// CSS display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    #[default]
    Block,
    InlineBlock,
    Flex,
    Grid,
}

impl DisplayMode {
    pub fn as_css(&self) -> &'static str {
        match self {
            DisplayMode::Block => "block",
            DisplayMode::InlineBlock => "inline-block",
            DisplayMode::Flex => "flex",
            DisplayMode::Grid => "grid",
        }
    }
}

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

impl FlexDirection {
    pub fn as_css(&self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::ColumnReverse => "column-reverse",
        }
    }
}

/// Distribution along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl JustifyContent {
    pub fn as_css(&self) -> &'static str {
        match self {
            JustifyContent::FlexStart => "flex-start",
            JustifyContent::Center => "center",
            JustifyContent::FlexEnd => "flex-end",
            JustifyContent::SpaceBetween => "space-between",
            JustifyContent::SpaceAround => "space-around",
            JustifyContent::SpaceEvenly => "space-evenly",
        }
    }
}

/// Alignment along the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
    Baseline,
}

impl AlignItems {
    pub fn as_css(&self) -> &'static str {
        match self {
            AlignItems::Stretch => "stretch",
            AlignItems::FlexStart => "flex-start",
            AlignItems::Center => "center",
            AlignItems::FlexEnd => "flex-end",
            AlignItems::Baseline => "baseline",
        }
    }
}

/// Display and flex layout fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub display: DisplayMode,
    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub gap: f64,
}

/// Per-side spacing (padding or margin), in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Spacing {
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }

    /// CSS shorthand (`top right bottom left`).
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    pub fn as_css(&self) -> &'static str {
        match self {
            FontWeight::Light => "300",
            FontWeight::Regular => "400",
            FontWeight::Bold => "700",
        }
    }
}

/// Typography used by elements that render text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub color: SerializableColor,
    pub font_size: f64,
    #[serde(default)]
    pub font_weight: FontWeight,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            color: SerializableColor::rgb(17, 24, 39),
            font_size: 16.0,
            font_weight: FontWeight::Regular,
        }
    }
}

/// One `property: value` pair, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleDeclaration {
    pub property: &'static str,
    pub value: String,
}

impl StyleDeclaration {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// Complete visual style of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub background_color: SerializableColor,
    pub border: Border,
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub box_shadow: Option<BoxShadow>,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub padding: Spacing,
    #[serde(default)]
    pub margin: Spacing,
    #[serde(default)]
    pub typography: Typography,
}

fn default_opacity() -> f64 {
    1.0
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background_color: SerializableColor::rgb(0x3b, 0x82, 0xf6),
            border: Border {
                width: 1.0,
                color: SerializableColor::rgb(0x1e, 0x40, 0xaf),
                radius: 8.0,
                style: BorderStyle::Solid,
            },
            opacity: 1.0,
            box_shadow: None,
            layout: Layout::default(),
            padding: Spacing::default(),
            margin: Spacing::default(),
            typography: Typography::default(),
        }
    }
}

impl Appearance {
    /// Set opacity, clamped to [0, 1]. Non-finite values fall back to opaque.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            1.0
        };
    }

    /// Style declarations for everything except geometry, in a fixed order.
    pub fn declarations(&self) -> Vec<StyleDeclaration> {
        let mut decls = vec![
            StyleDeclaration::new("background-color", self.background_color.to_css()),
            StyleDeclaration::new(
                "border",
                format!(
                    "{}px {} {}",
                    self.border.width,
                    self.border.style.as_css(),
                    self.border.color.to_css()
                ),
            ),
            StyleDeclaration::new("border-radius", format!("{}px", self.border.radius)),
            StyleDeclaration::new("opacity", self.opacity.to_string()),
        ];

        if let Some(shadow) = &self.box_shadow {
            decls.push(StyleDeclaration::new("box-shadow", shadow.to_css()));
        }

        if self.layout.display != DisplayMode::Block {
            decls.push(StyleDeclaration::new("display", self.layout.display.as_css()));
        }
        if self.layout.display == DisplayMode::Flex {
            decls.push(StyleDeclaration::new(
                "flex-direction",
                self.layout.flex_direction.as_css(),
            ));
            decls.push(StyleDeclaration::new(
                "justify-content",
                self.layout.justify_content.as_css(),
            ));
            decls.push(StyleDeclaration::new(
                "align-items",
                self.layout.align_items.as_css(),
            ));
        }
        if self.layout.gap > 0.0 {
            decls.push(StyleDeclaration::new("gap", format!("{}px", self.layout.gap)));
        }

        if !self.padding.is_zero() {
            decls.push(StyleDeclaration::new("padding", self.padding.to_css()));
        }
        if !self.margin.is_zero() {
            decls.push(StyleDeclaration::new("margin", self.margin.to_css()));
        }

        decls
    }

    /// Typography declarations, only meaningful for elements that render text.
    pub fn typography_declarations(&self) -> Vec<StyleDeclaration> {
        vec![
            StyleDeclaration::new("color", self.typography.color.to_css()),
            StyleDeclaration::new("font-size", format!("{}px", self.typography.font_size)),
            StyleDeclaration::new("font-weight", self.typography.font_weight.as_css()),
        ]
    }
}
