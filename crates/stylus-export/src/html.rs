//! Markup generation for plain HTML and JSX.

use crate::class_name;
use stylus_core::{Content, Element, ElementType};

/// Markup flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Html,
    /// React JSX: `className`, uncontrolled `default*` props, self-closing void tags.
    Jsx,
}

impl Dialect {
    fn class_attr(&self) -> &'static str {
        match self {
            Dialect::Html => "class",
            Dialect::Jsx => "className",
        }
    }

    fn empty_comment(&self) -> &'static str {
        match self {
            Dialect::Html => "<!-- No elements created yet -->",
            Dialect::Jsx => "{/* No elements created yet */}",
        }
    }
}

/// Generate one tag per element, in paint order.
pub fn generate_html(elements: &[Element], dialect: Dialect) -> String {
    if elements.is_empty() {
        return dialect.empty_comment().to_string();
    }

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| markup(index, element, dialect))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape text for element content or a double-quoted attribute.
pub(crate) fn escape(text: &str, dialect: Dialect) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' if dialect == Dialect::Jsx => out.push_str("&#123;"),
            '}' if dialect == Dialect::Jsx => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

/// A tag under construction.
struct Tag<'a> {
    name: &'static str,
    dialect: Dialect,
    attrs: Vec<(&'a str, Option<String>)>,
}

impl<'a> Tag<'a> {
    fn new(name: &'static str, class: &str, dialect: Dialect) -> Self {
        Self {
            name,
            dialect,
            attrs: vec![(dialect.class_attr(), Some(class.to_string()))],
        }
    }

    fn attr(mut self, name: &'a str, value: impl AsRef<str>) -> Self {
        let value = escape(value.as_ref(), self.dialect);
        self.attrs.push((name, Some(value)));
        self
    }

    fn flag(mut self, name: &'a str, on: bool) -> Self {
        if on {
            self.attrs.push((name, None));
        }
        self
    }

    fn open(&self) -> String {
        let mut out = format!("<{}", self.name);
        for (name, value) in &self.attrs {
            match value {
                Some(value) => out.push_str(&format!(" {}=\"{}\"", name, value)),
                None => out.push_str(&format!(" {}", name)),
            }
        }
        out
    }

    /// Void tag such as `<img>`.
    fn void(&self) -> String {
        match self.dialect {
            Dialect::Html => format!("{}>", self.open()),
            Dialect::Jsx => format!("{} />", self.open()),
        }
    }

    fn with_text(&self, text: &str) -> String {
        format!("{}>{}</{}>", self.open(), escape(text, self.dialect), self.name)
    }

    fn with_children(&self, children: &[String]) -> String {
        if children.is_empty() {
            return format!("{}></{}>", self.open(), self.name);
        }
        let body: Vec<String> = children.iter().map(|child| format!("  {}", child)).collect();
        format!("{}>\n{}\n</{}>", self.open(), body.join("\n"), self.name)
    }
}

fn markup(index: usize, element: &Element, dialect: Dialect) -> String {
    let class = class_name(index);
    let tag = |name| Tag::new(name, &class, dialect);
    let jsx = dialect == Dialect::Jsx;
    let kind = element.kind;

    match &element.content {
        Content::Text { text } => tag(kind.tag_name()).with_text(text),
        Content::Button { label } => tag("button").attr("type", "button").with_text(label),
        Content::Link { text, href, target } => {
            let mut link = tag("a").attr("href", href);
            if let Some(target) = target.as_deref().filter(|t| !t.is_empty()) {
                link = link.attr("target", target);
                if target == "_blank" {
                    link = link.attr("rel", "noopener noreferrer");
                }
            }
            link.with_text(text)
        }
        Content::Image { src, alt } => tag("img").attr("src", src).attr("alt", alt).void(),
        Content::Media {
            src,
            controls,
            autoplay,
            looping,
            muted,
            poster,
        } => {
            let mut media = tag(kind.tag_name())
                .attr("src", src)
                .flag("controls", *controls)
                .flag(if jsx { "autoPlay" } else { "autoplay" }, *autoplay)
                .flag("loop", *looping)
                .flag("muted", *muted);
            if kind == ElementType::Video {
                if let Some(poster) = poster.as_deref().filter(|p| !p.is_empty()) {
                    media = media.attr("poster", poster);
                }
            }
            media.with_children(&[])
        }
        Content::Input { placeholder, value } => {
            let value_attr = if jsx { "defaultValue" } else { "value" };
            if kind == ElementType::Textarea {
                let textarea = tag("textarea").attr("placeholder", placeholder);
                if jsx {
                    textarea.attr(value_attr, value).with_children(&[])
                } else {
                    textarea.with_text(value)
                }
            } else {
                let mut input = tag("input")
                    .attr("type", kind.input_type().unwrap_or("text"))
                    .attr("placeholder", placeholder);
                if !value.is_empty() {
                    input = input.attr(value_attr, value);
                }
                input.void()
            }
        }
        Content::Dropdown { options } => {
            let children: Vec<String> = options
                .iter()
                .map(|option| format!("<option>{}</option>", escape(option, dialect)))
                .collect();
            tag("select").with_children(&children)
        }
        Content::Toggle { checked, label } => {
            let input_type = kind.input_type().unwrap_or("checkbox");
            let control = Tag {
                name: "input",
                dialect,
                attrs: Vec::new(),
            }
            .attr("type", input_type)
            .flag(if jsx { "defaultChecked" } else { "checked" }, *checked)
            .void();
            format!(
                "{}>{} {}</label>",
                tag("label").open(),
                control,
                escape(label, dialect)
            )
        }
        Content::Meter { value, max } => {
            if kind == ElementType::Range {
                tag("input")
                    .attr("type", "range")
                    .attr("min", "0")
                    .attr("max", max.to_string())
                    .attr(if jsx { "defaultValue" } else { "value" }, value.to_string())
                    .void()
            } else {
                tag("progress")
                    .attr("value", value.to_string())
                    .attr("max", max.to_string())
                    .with_children(&[])
            }
        }
        Content::Container => tag(kind.tag_name()).with_children(&[]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use stylus_core::factory;

    fn make(kind: ElementType) -> Element {
        factory::create(kind, Rect::new(0.0, 0.0, 100.0, 40.0), 0)
    }

    #[test]
    fn test_empty_canvas() {
        assert_eq!(generate_html(&[], Dialect::Html), "<!-- No elements created yet -->");
        assert_eq!(generate_html(&[], Dialect::Jsx), "{/* No elements created yet */}");
    }

    #[test]
    fn test_positional_classes() {
        let html = generate_html(&[make(ElementType::Div), make(ElementType::Section)], Dialect::Html);
        assert_eq!(
            html,
            "<div class=\"element-1\"></div>\n<section class=\"element-2\"></section>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let mut element = make(ElementType::Heading1);
        element.content = Content::Text {
            text: "Tom & <Jerry> {x}".to_string(),
        };
        assert_eq!(
            generate_html(&[element.clone()], Dialect::Html),
            "<h1 class=\"element-1\">Tom &amp; &lt;Jerry&gt; {x}</h1>"
        );
        assert_eq!(
            generate_html(&[element], Dialect::Jsx),
            "<h1 className=\"element-1\">Tom &amp; &lt;Jerry&gt; &#123;x&#125;</h1>"
        );
    }

    #[test]
    fn test_form_controls() {
        let dropdown = generate_html(&[make(ElementType::Dropdown)], Dialect::Html);
        assert_eq!(
            dropdown,
            "<select class=\"element-1\">\n  <option>Option 1</option>\n  <option>Option 2</option>\n  \
             <option>Option 3</option>\n</select>"
        );

        let mut checkbox = make(ElementType::Checkbox);
        checkbox.content = Content::Toggle {
            checked: true,
            label: "Agree".to_string(),
        };
        assert_eq!(
            generate_html(&[checkbox.clone()], Dialect::Html),
            "<label class=\"element-1\"><input type=\"checkbox\" checked> Agree</label>"
        );
        assert_eq!(
            generate_html(&[checkbox], Dialect::Jsx),
            "<label className=\"element-1\"><input type=\"checkbox\" defaultChecked /> Agree</label>"
        );

        assert_eq!(
            generate_html(&[make(ElementType::Progress)], Dialect::Html),
            "<progress class=\"element-1\" value=\"50\" max=\"100\"></progress>"
        );
        assert_eq!(
            generate_html(&[make(ElementType::Range)], Dialect::Html),
            "<input class=\"element-1\" type=\"range\" min=\"0\" max=\"100\" value=\"50\">"
        );
    }

    #[test]
    fn test_media_and_links() {
        let mut link = make(ElementType::Link);
        link.content = Content::Link {
            text: "Docs".to_string(),
            href: "https://example.com/?a=1&b=2".to_string(),
            target: Some("_blank".to_string()),
        };
        assert_eq!(
            generate_html(&[link], Dialect::Html),
            "<a class=\"element-1\" href=\"https://example.com/?a=1&amp;b=2\" target=\"_blank\" \
             rel=\"noopener noreferrer\">Docs</a>"
        );

        let image = generate_html(&[make(ElementType::Image)], Dialect::Jsx);
        assert!(image.starts_with("<img className=\"element-1\" src="));
        assert!(image.ends_with(" />"));

        let video = generate_html(&[make(ElementType::Video)], Dialect::Html);
        assert_eq!(video, "<video class=\"element-1\" src=\"\" controls></video>");
    }
}
