//! Document node tree
//!
//! A tree of owned nodes: text, elements and raw markup. Each parent owns
//! its children exclusively; passes rewrite the tree by replacing child
//! slots in place.

/// Closed set of element kinds the annotator and serializer care about
///
/// Resolved once when an element is built, so classification never
/// compares tag strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// Document root; serializes as its children only
    Fragment,
    Paragraph,
    /// `h1`..`h6`
    Heading(u8),
    /// Hyperlink (`a`)
    Anchor,
    /// Inline code
    Code,
    /// Preformatted block
    Pre,
    /// Vector graphics region
    Svg,
    Script,
    Style,
    Image,
    BlockQuote,
    OrderedList,
    UnorderedList,
    ListItem,
    Emphasis,
    Strong,
    Strikethrough,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableHeaderCell,
    TableCell,
    Superscript,
    Span,
    Div,
    LineBreak,
    Rule,
    Other(String),
}

impl TagKind {
    /// Resolve a tag name (case-insensitive)
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "p" => Self::Paragraph,
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "a" => Self::Anchor,
            "code" => Self::Code,
            "pre" => Self::Pre,
            "svg" => Self::Svg,
            "script" => Self::Script,
            "style" => Self::Style,
            "img" => Self::Image,
            "blockquote" => Self::BlockQuote,
            "ol" => Self::OrderedList,
            "ul" => Self::UnorderedList,
            "li" => Self::ListItem,
            "em" => Self::Emphasis,
            "strong" => Self::Strong,
            "del" => Self::Strikethrough,
            "table" => Self::Table,
            "thead" => Self::TableHead,
            "tbody" => Self::TableBody,
            "tr" => Self::TableRow,
            "th" => Self::TableHeaderCell,
            "td" => Self::TableCell,
            "sup" => Self::Superscript,
            "span" => Self::Span,
            "div" => Self::Div,
            "br" => Self::LineBreak,
            "hr" => Self::Rule,
            other => Self::Other(other.to_string()),
        }
    }

    /// Markup tag name (empty for fragments)
    pub fn name(&self) -> &str {
        match self {
            Self::Fragment => "",
            Self::Paragraph => "p",
            Self::Heading(1) => "h1",
            Self::Heading(2) => "h2",
            Self::Heading(3) => "h3",
            Self::Heading(4) => "h4",
            Self::Heading(5) => "h5",
            Self::Heading(_) => "h6",
            Self::Anchor => "a",
            Self::Code => "code",
            Self::Pre => "pre",
            Self::Svg => "svg",
            Self::Script => "script",
            Self::Style => "style",
            Self::Image => "img",
            Self::BlockQuote => "blockquote",
            Self::OrderedList => "ol",
            Self::UnorderedList => "ul",
            Self::ListItem => "li",
            Self::Emphasis => "em",
            Self::Strong => "strong",
            Self::Strikethrough => "del",
            Self::Table => "table",
            Self::TableHead => "thead",
            Self::TableBody => "tbody",
            Self::TableRow => "tr",
            Self::TableHeaderCell => "th",
            Self::TableCell => "td",
            Self::Superscript => "sup",
            Self::Span => "span",
            Self::Div => "div",
            Self::LineBreak => "br",
            Self::Rule => "hr",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Contexts where injected interactive markup would corrupt meaning
    /// or rendering: headings, links, code, raw markup and graphics
    pub fn is_opaque(&self) -> bool {
        match self {
            Self::Heading(_)
            | Self::Anchor
            | Self::Code
            | Self::Pre
            | Self::Svg
            | Self::Script
            | Self::Style
            | Self::Image => true,
            Self::Fragment
            | Self::Paragraph
            | Self::BlockQuote
            | Self::OrderedList
            | Self::UnorderedList
            | Self::ListItem
            | Self::Emphasis
            | Self::Strong
            | Self::Strikethrough
            | Self::Table
            | Self::TableHead
            | Self::TableBody
            | Self::TableRow
            | Self::TableHeaderCell
            | Self::TableCell
            | Self::Superscript
            | Self::Span
            | Self::Div
            | Self::LineBreak
            | Self::Rule
            | Self::Other(_) => false,
        }
    }

    /// Elements serialized without children or a closing tag
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Image | Self::LineBreak | Self::Rule)
    }
}

/// String-valued attributes in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Whether the whitespace-separated `class` attribute contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.get("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An element node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: TagKind,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: TagKind) -> Self {
        Self {
            tag,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Document root
    pub fn fragment(children: Vec<Node>) -> Self {
        Self::new(TagKind::Fragment).with_children(children)
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Concatenated text content of this subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => collect_text(&el.children, out),
            Node::Raw(_) => {}
        }
    }
}

/// A node in the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Plain text, unescaped
    Text(String),
    Element(Element),
    /// Raw markup from the source, emitted verbatim and never traversed
    Raw(String),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
