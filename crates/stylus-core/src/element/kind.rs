//! The closed set of element types the editor can place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type tag of an element.
///
/// Serialized with the short value names used by the toolbar (`p`, `h1`,
/// `dropdown`, ...), which are not always the HTML tag (see [`ElementType::tag_name`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ElementType {
    // Text
    #[serde(rename = "p")]
    Paragraph,
    #[serde(rename = "h1")]
    Heading1,
    #[serde(rename = "h2")]
    Heading2,
    #[serde(rename = "h3")]
    Heading3,
    #[serde(rename = "h4")]
    Heading4,
    #[serde(rename = "h5")]
    Heading5,
    #[serde(rename = "h6")]
    Heading6,
    #[serde(rename = "span")]
    Span,
    #[serde(rename = "label")]
    Label,
    #[serde(rename = "li")]
    ListItem,
    #[serde(rename = "td")]
    TableCell,
    #[serde(rename = "th")]
    TableHeader,
    #[serde(rename = "summary")]
    Summary,

    // Form
    #[serde(rename = "button")]
    Button,
    #[serde(rename = "input")]
    Input,
    #[serde(rename = "textarea")]
    Textarea,
    #[serde(rename = "dropdown")]
    Dropdown,
    #[serde(rename = "checkbox")]
    Checkbox,
    #[serde(rename = "radio")]
    Radio,
    #[serde(rename = "progress")]
    Progress,
    #[serde(rename = "range")]
    Range,

    // Media
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "audio")]
    Audio,

    // Interactive
    #[serde(rename = "a")]
    Link,

    // Structural
    #[default]
    #[serde(rename = "div")]
    Div,
    #[serde(rename = "section")]
    Section,
    #[serde(rename = "article")]
    Article,
    #[serde(rename = "header")]
    Header,
    #[serde(rename = "footer")]
    Footer,
    #[serde(rename = "nav")]
    Nav,
    #[serde(rename = "aside")]
    Aside,
    #[serde(rename = "main")]
    Main,
    #[serde(rename = "ul")]
    UnorderedList,
    #[serde(rename = "ol")]
    OrderedList,
    #[serde(rename = "table")]
    Table,
    #[serde(rename = "tr")]
    TableRow,
    #[serde(rename = "details")]
    Details,
}

/// Group of element types sharing one type-specific payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementFamily {
    Text,
    Button,
    Link,
    Image,
    Media,
    Input,
    Dropdown,
    Toggle,
    Meter,
    Container,
}

impl ElementType {
    /// Every element type, in toolbar order.
    pub fn all() -> &'static [ElementType] {
        use ElementType::*;
        &[
            Paragraph, Heading1, Heading2, Heading3, Heading4, Heading5, Heading6, Span, Button,
            Input, Textarea, Dropdown, Checkbox, Radio, Progress, Range, Image, Video, Audio, Div,
            Section, Article, Header, Footer, Nav, Aside, Main, UnorderedList, OrderedList,
            ListItem, Table, TableRow, TableCell, TableHeader, Link, Label, Details, Summary,
        ]
    }

    /// Short value name, as serialized.
    pub fn value(&self) -> &'static str {
        use ElementType::*;
        match self {
            Paragraph => "p",
            Heading1 => "h1",
            Heading2 => "h2",
            Heading3 => "h3",
            Heading4 => "h4",
            Heading5 => "h5",
            Heading6 => "h6",
            Span => "span",
            Label => "label",
            ListItem => "li",
            TableCell => "td",
            TableHeader => "th",
            Summary => "summary",
            Button => "button",
            Input => "input",
            Textarea => "textarea",
            Dropdown => "dropdown",
            Checkbox => "checkbox",
            Radio => "radio",
            Progress => "progress",
            Range => "range",
            Image => "image",
            Video => "video",
            Audio => "audio",
            Link => "a",
            Div => "div",
            Section => "section",
            Article => "article",
            Header => "header",
            Footer => "footer",
            Nav => "nav",
            Aside => "aside",
            Main => "main",
            UnorderedList => "ul",
            OrderedList => "ol",
            Table => "table",
            TableRow => "tr",
            Details => "details",
        }
    }

    /// Actual HTML tag name.
    pub fn tag_name(&self) -> &'static str {
        match self {
            ElementType::Dropdown => "select",
            ElementType::Checkbox | ElementType::Radio | ElementType::Range => "input",
            ElementType::Image => "img",
            other => other.value(),
        }
    }

    /// `type` attribute for types rendered as `<input>`.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            ElementType::Input => Some("text"),
            ElementType::Checkbox => Some("checkbox"),
            ElementType::Radio => Some("radio"),
            ElementType::Range => Some("range"),
            _ => None,
        }
    }

    pub fn family(&self) -> ElementFamily {
        use ElementType::*;
        match self {
            Paragraph | Heading1 | Heading2 | Heading3 | Heading4 | Heading5 | Heading6 | Span
            | Label | ListItem | TableCell | TableHeader | Summary => ElementFamily::Text,
            Button => ElementFamily::Button,
            Link => ElementFamily::Link,
            Image => ElementFamily::Image,
            Video | Audio => ElementFamily::Media,
            Input | Textarea => ElementFamily::Input,
            Dropdown => ElementFamily::Dropdown,
            Checkbox | Radio => ElementFamily::Toggle,
            Progress | Range => ElementFamily::Meter,
            Div | Section | Article | Header | Footer | Nav | Aside | Main | UnorderedList
            | OrderedList | Table | TableRow | Details => ElementFamily::Container,
        }
    }

    /// Label-only types are placed by a single click instead of a drag.
    pub fn creates_on_click(&self) -> bool {
        self.family() == ElementFamily::Text
    }

    /// Default font size for text-bearing types, in pixels.
    pub fn default_font_size(&self) -> f64 {
        match self {
            ElementType::Heading1 => 32.0,
            ElementType::Heading2 => 24.0,
            ElementType::Heading3 => 20.0,
            ElementType::Heading4 => 18.0,
            ElementType::Heading5 => 16.0,
            ElementType::Heading6 => 14.0,
            _ => 16.0,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Error for an unknown element type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown element type: {0}")]
pub struct UnknownElementType(pub String);

impl FromStr for ElementType {
    type Err = UnknownElementType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::all()
            .iter()
            .copied()
            .find(|kind| kind.value() == s)
            .ok_or_else(|| UnknownElementType(s.to_string()))
    }
}
