//! React component generation: the stylesheet and the JSX markup in one file.

use crate::css::generate_css;
use crate::html::{Dialect, generate_html};
use stylus_core::Element;

const COMPONENT_NAME: &str = "GeneratedLayout";

/// Generate a self-contained React function component.
pub fn generate_component(elements: &[Element]) -> String {
    let styles = escape_template(&generate_css(elements));
    let markup = indent(&generate_html(elements, Dialect::Jsx), 6);

    format!(
        "import React from 'react';\n\
         \n\
         const styles = `\n{styles}\n`;\n\
         \n\
         export default function {COMPONENT_NAME}() {{\n\
         \x20 return (\n\
         \x20   <div style={{{{ position: 'relative' }}}}>\n\
         \x20     <style>{{styles}}</style>\n\
         {markup}\n\
         \x20   </div>\n\
         \x20 );\n\
         }}\n"
    )
}

/// Escape text for a JavaScript template literal.
fn escape_template(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use stylus_core::{ElementType, factory};

    #[test]
    fn test_component_shape() {
        let elements = vec![factory::create(
            ElementType::Button,
            Rect::new(0.0, 0.0, 120.0, 40.0),
            0,
        )];
        let code = generate_component(&elements);

        assert!(code.starts_with("import React from 'react';\n\nconst styles = `\n.element-1 {"));
        assert!(code.contains("export default function GeneratedLayout() {\n  return (\n"));
        assert!(code.contains("    <div style={{ position: 'relative' }}>\n"));
        assert!(code.contains("      <style>{styles}</style>\n"));
        assert!(code.contains(
            "      <button className=\"element-1\" type=\"button\">Button</button>\n    </div>"
        ));
        assert!(code.ends_with("  );\n}\n"));
    }

    #[test]
    fn test_empty_component() {
        let code = generate_component(&[]);
        assert!(code.contains("const styles = `\n/* No elements created yet */\n`;"));
        assert!(code.contains("      {/* No elements created yet */}\n"));
    }

    #[test]
    fn test_template_escaping() {
        assert_eq!(escape_template("a`b${c}\\"), "a\\`b\\${c}\\\\");
    }
}
