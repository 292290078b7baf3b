//! Type-specific element payloads.

use super::kind::{ElementFamily, ElementType};
use serde::{Deserialize, Serialize};

/// Type-specific fields of an element, one variant per [`ElementFamily`].
///
/// Fields that are meaningless for a type simply do not exist in its variant,
/// so they can never drift out of sync with the type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum Content {
    Text {
        text: String,
    },
    Button {
        label: String,
    },
    Link {
        text: String,
        href: String,
        #[serde(default)]
        target: Option<String>,
    },
    Image {
        src: String,
        alt: String,
    },
    Media {
        src: String,
        controls: bool,
        autoplay: bool,
        #[serde(rename = "loop")]
        looping: bool,
        muted: bool,
        #[serde(default)]
        poster: Option<String>,
    },
    Input {
        placeholder: String,
        #[serde(default)]
        value: String,
    },
    Dropdown {
        options: Vec<String>,
    },
    Toggle {
        checked: bool,
        label: String,
    },
    Meter {
        value: f64,
        max: f64,
    },
    Container,
}

impl Content {
    /// Default payload for a freshly created element of the given type.
    pub fn default_for(kind: ElementType) -> Self {
        match kind.family() {
            ElementFamily::Text => Content::Text {
                text: default_text(kind).to_string(),
            },
            ElementFamily::Button => Content::Button {
                label: "Button".to_string(),
            },
            ElementFamily::Link => Content::Link {
                text: "Link".to_string(),
                href: "#".to_string(),
                target: None,
            },
            ElementFamily::Image => Content::Image {
                src: "https://placehold.co/200x150".to_string(),
                alt: "Image".to_string(),
            },
            ElementFamily::Media => Content::Media {
                src: String::new(),
                controls: true,
                autoplay: false,
                looping: false,
                muted: false,
                poster: None,
            },
            ElementFamily::Input => Content::Input {
                placeholder: match kind {
                    ElementType::Textarea => "Enter text...".to_string(),
                    _ => "Enter value...".to_string(),
                },
                value: String::new(),
            },
            ElementFamily::Dropdown => Content::Dropdown {
                options: vec![
                    "Option 1".to_string(),
                    "Option 2".to_string(),
                    "Option 3".to_string(),
                ],
            },
            ElementFamily::Toggle => Content::Toggle {
                checked: false,
                label: match kind {
                    ElementType::Radio => "Radio option".to_string(),
                    _ => "Checkbox".to_string(),
                },
            },
            ElementFamily::Meter => Content::Meter {
                value: 50.0,
                max: 100.0,
            },
            ElementFamily::Container => Content::Container,
        }
    }

    pub fn family(&self) -> ElementFamily {
        match self {
            Content::Text { .. } => ElementFamily::Text,
            Content::Button { .. } => ElementFamily::Button,
            Content::Link { .. } => ElementFamily::Link,
            Content::Image { .. } => ElementFamily::Image,
            Content::Media { .. } => ElementFamily::Media,
            Content::Input { .. } => ElementFamily::Input,
            Content::Dropdown { .. } => ElementFamily::Dropdown,
            Content::Toggle { .. } => ElementFamily::Toggle,
            Content::Meter { .. } => ElementFamily::Meter,
            Content::Container => ElementFamily::Container,
        }
    }

    /// Keep meter values inside `[0, max]` with a positive `max`.
    pub(crate) fn sanitize(&mut self) {
        if let Content::Meter { value, max } = self {
            if !max.is_finite() || *max <= 0.0 {
                *max = 100.0;
            }
            *value = if value.is_finite() {
                value.clamp(0.0, *max)
            } else {
                0.0
            };
        }
    }
}

fn default_text(kind: ElementType) -> &'static str {
    match kind {
        ElementType::Heading1
        | ElementType::Heading2
        | ElementType::Heading3
        | ElementType::Heading4
        | ElementType::Heading5
        | ElementType::Heading6 => "Heading",
        ElementType::Label => "Label",
        ElementType::ListItem => "List item",
        ElementType::TableCell | ElementType::TableHeader => "Cell",
        ElementType::Summary => "Summary",
        _ => "Text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_payload_matches_family() {
        for kind in ElementType::all() {
            assert_eq!(Content::default_for(*kind).family(), kind.family(), "{kind}");
        }
    }

    #[test]
    fn test_dropdown_default_options() {
        let Content::Dropdown { options } = Content::default_for(ElementType::Dropdown) else {
            panic!("Expected dropdown payload");
        };
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_meter_sanitize() {
        let mut content = Content::Meter {
            value: 150.0,
            max: -1.0,
        };
        content.sanitize();
        assert_eq!(
            content,
            Content::Meter {
                value: 100.0,
                max: 100.0
            }
        );
    }

    #[test]
    fn test_serde_tagged_by_family() {
        let json = serde_json::to_value(Content::default_for(ElementType::Checkbox)).unwrap();
        assert_eq!(json["family"], "toggle");
        assert_eq!(json["checked"], false);

        let container: Content = serde_json::from_str(r#"{"family":"container"}"#).unwrap();
        assert_eq!(container, Content::Container);
    }

    #[test]
    fn test_media_loop_field_name() {
        let json = serde_json::to_value(Content::default_for(ElementType::Video)).unwrap();
        assert_eq!(json["loop"], false);
        assert!(json.get("looping").is_none());
    }
}
