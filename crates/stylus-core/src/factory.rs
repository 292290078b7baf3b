//! Builds fully populated elements from an element type and a rectangle.

use crate::element::{
    Appearance, Border, BorderStyle, Element, ElementFamily, ElementType, FontWeight,
    SerializableColor, Spacing,
};
use kurbo::Rect;

const TEXT_COLOR: SerializableColor = SerializableColor::rgb(0x11, 0x18, 0x27);
const LINK_COLOR: SerializableColor = SerializableColor::rgb(0x25, 0x63, 0xeb);
const FIELD_BORDER: SerializableColor = SerializableColor::rgb(0xd1, 0xd5, 0xdb);
const PLACEHOLDER_FILL: SerializableColor = SerializableColor::rgb(0xe5, 0xe7, 0xeb);

/// Create an element of `kind` covering `bounds`.
///
/// The element gets a fresh id, the given stacking order, no rotation, and
/// the appearance and payload defaults of its type.
pub fn create(kind: ElementType, bounds: Rect, z_index: i32) -> Element {
    let mut element = Element::new(kind, bounds);
    element.z_index = z_index;
    element.appearance = default_appearance(kind);
    element
}

/// Default appearance for a type.
pub fn default_appearance(kind: ElementType) -> Appearance {
    let mut appearance = Appearance::default();
    appearance.typography.font_size = kind.default_font_size();

    match kind.family() {
        ElementFamily::Text => {
            appearance.background_color = SerializableColor::transparent();
            appearance.border = Border::none();
            appearance.typography.color = TEXT_COLOR;
            if matches!(
                kind,
                ElementType::Heading1
                    | ElementType::Heading2
                    | ElementType::Heading3
                    | ElementType::Heading4
                    | ElementType::Heading5
                    | ElementType::Heading6
                    | ElementType::TableHeader
            ) {
                appearance.typography.font_weight = FontWeight::Bold;
            }
        }
        ElementFamily::Button => {
            appearance.typography.color = SerializableColor::white();
            appearance.padding = Spacing::symmetric(8.0, 16.0);
        }
        ElementFamily::Link => {
            appearance.background_color = SerializableColor::transparent();
            appearance.border = Border::none();
            appearance.typography.color = LINK_COLOR;
        }
        ElementFamily::Input | ElementFamily::Dropdown => {
            appearance.background_color = SerializableColor::white();
            appearance.border = Border {
                width: 1.0,
                color: FIELD_BORDER,
                radius: 4.0,
                style: BorderStyle::Solid,
            };
            appearance.padding = Spacing::symmetric(4.0, 8.0);
            appearance.typography.color = TEXT_COLOR;
        }
        ElementFamily::Toggle | ElementFamily::Meter => {
            appearance.background_color = SerializableColor::transparent();
            appearance.border = Border::none();
            appearance.typography.color = TEXT_COLOR;
        }
        ElementFamily::Image | ElementFamily::Media => {
            appearance.background_color = PLACEHOLDER_FILL;
            appearance.border = Border::none();
        }
        ElementFamily::Container => {}
    }

    appearance
}
