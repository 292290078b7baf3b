//! CSS generation: one positional class rule per element.

use crate::class_name;
use stylus_core::Element;

const EMPTY: &str = "/* No elements created yet */";

/// Generate a stylesheet with one `.element-N` rule per element.
pub fn generate_css(elements: &[Element]) -> String {
    if elements.is_empty() {
        return EMPTY.to_string();
    }

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| rule(index, element))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn rule(index: usize, element: &Element) -> String {
    let mut out = format!(".{} {{\n", class_name(index));
    for decl in element.style_declarations() {
        out.push_str(&format!("  {}: {};\n", decl.property, decl.value));
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use stylus_core::{ElementType, factory};

    #[test]
    fn test_empty_canvas() {
        assert_eq!(generate_css(&[]), "/* No elements created yet */");
    }

    #[test]
    fn test_default_box_rule() {
        let element = factory::create(ElementType::Div, Rect::new(10.0, 10.0, 210.0, 110.0), 0);
        let css = generate_css(&[element]);
        assert_eq!(
            css,
            ".element-1 {\n  position: absolute;\n  left: 10px;\n  top: 10px;\n  width: 200px;\n  \
             height: 100px;\n  z-index: 0;\n  background-color: #3b82f6;\n  border: 1px solid #1e40af;\n  \
             border-radius: 8px;\n  opacity: 1;\n}"
        );
    }

    #[test]
    fn test_rules_follow_paint_order() {
        let mut rotated = factory::create(ElementType::Div, Rect::new(0.0, 0.0, 50.0, 50.0), 1);
        rotated.rotation = 30.0;
        let elements = vec![
            factory::create(ElementType::Paragraph, Rect::new(0.0, 0.0, 160.0, 40.0), 0),
            rotated,
        ];
        let css = generate_css(&elements);

        let first = css.find(".element-1").unwrap();
        let second = css.find(".element-2").unwrap();
        assert!(first < second);
        assert!(css.contains("transform: rotate(30deg);"));
        assert!(css.contains("font-size: 16px;"));
        assert!(css.contains("}\n\n.element-2"));
    }
}
