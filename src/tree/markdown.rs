//! Markdown to node tree adapter
//!
//! Builds a document tree from the pulldown-cmark event stream. Adjacent
//! text events are merged so a term split across events (entities, escapes,
//! soft breaks) is still a single text node for matching.
//!
//! Paired inline HTML tags (`<a href="…">…</a>`, `<code>…</code>`) become
//! real elements, so the text they enclose is classified like markdown
//! links and code. Void, self-closing and unpaired tags stay raw.

use super::node::{Element, Node, TagKind};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use std::sync::OnceLock;

static OPEN_TAG: OnceLock<Regex> = OnceLock::new();
static CLOSE_TAG: OnceLock<Regex> = OnceLock::new();
static ATTRIBUTE: OnceLock<Regex> = OnceLock::new();

const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

fn open_tag_pattern() -> &'static Regex {
    OPEN_TAG.get_or_init(|| {
        Regex::new(
            r#"^<([A-Za-z][A-Za-z0-9-]*)((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*)\s*(/?)>$"#,
        )
        .expect("valid open tag pattern")
    })
}

fn close_tag_pattern() -> &'static Regex {
    CLOSE_TAG.get_or_init(|| {
        Regex::new(r"^</([A-Za-z][A-Za-z0-9-]*)\s*>$").expect("valid close tag pattern")
    })
}

fn attribute_pattern() -> &'static Regex {
    ATTRIBUTE.get_or_init(|| {
        Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
            .expect("valid attribute pattern")
    })
}

fn unescape_attribute(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Split leading YAML frontmatter (between `---` lines) from the body
///
/// Returns `(None, content)` when there is no frontmatter.
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let trimmed = content.trim_start();
    let Some(after_first) = trimmed.strip_prefix("---") else {
        return (None, content);
    };
    let Some(end_pos) = after_first.find("\n---") else {
        return (None, content);
    };

    let frontmatter = &after_first[..end_pos];
    let rest = &after_first[end_pos + 4..];
    let body = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => "",
    };
    (Some(frontmatter), body)
}

/// Parse a markdown document (frontmatter stripped) into a fragment root
pub fn parse_markdown(content: &str) -> Element {
    let (_, body) = split_frontmatter(content);
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(body, options) {
        builder.push_event(event);
    }
    builder.finish()
}

struct TreeBuilder {
    stack: Vec<Element>,
    /// Stack positions of elements opened by inline HTML tags
    html_frames: Vec<usize>,
    in_table_head: bool,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Element::new(TagKind::Fragment)],
            html_frames: Vec::new(),
            in_table_head: false,
        }
    }

    fn push_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(text) => self.append_text(&text),
            Event::Code(code) => {
                self.append(Element::new(TagKind::Code).with_child(code.to_string()).into())
            }
            Event::Html(html) => self.append(Node::Raw(html.to_string())),
            Event::InlineHtml(html) => self.inline_html(&html),
            Event::FootnoteReference(label) => {
                let link = Element::new(TagKind::Anchor)
                    .with_attribute("href", format!("#{}", label))
                    .with_child(label.to_string());
                self.append(
                    Element::new(TagKind::Superscript)
                        .with_attribute("class", "footnote-reference")
                        .with_child(link)
                        .into(),
                );
            }
            Event::SoftBreak => self.append_text("\n"),
            Event::HardBreak => self.append(Element::new(TagKind::LineBreak).into()),
            Event::Rule => self.append(Element::new(TagKind::Rule).into()),
            Event::TaskListMarker(checked) => {
                let checked = if checked { " checked=\"\"" } else { "" };
                self.append(Node::Raw(format!(
                    "<input disabled=\"\" type=\"checkbox\"{} />",
                    checked
                )));
            }
            #[allow(unreachable_patterns)]
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.stack.push(Element::new(TagKind::Paragraph)),
            Tag::Heading { level, id, .. } => {
                let mut el = Element::new(TagKind::Heading(level as u8));
                if let Some(id) = id {
                    el.attributes.set("id", id.to_string());
                }
                self.stack.push(el);
            }
            Tag::BlockQuote => self.stack.push(Element::new(TagKind::BlockQuote)),
            Tag::CodeBlock(kind) => {
                let mut code = Element::new(TagKind::Code);
                if let CodeBlockKind::Fenced(info) = kind {
                    if let Some(lang) = info.split_whitespace().next() {
                        code.attributes.set("class", format!("language-{}", lang));
                    }
                }
                self.stack.push(Element::new(TagKind::Pre));
                self.stack.push(code);
            }
            Tag::List(Some(start)) => {
                let mut el = Element::new(TagKind::OrderedList);
                if start != 1 {
                    el.attributes.set("start", start.to_string());
                }
                self.stack.push(el);
            }
            Tag::List(None) => self.stack.push(Element::new(TagKind::UnorderedList)),
            Tag::Item => self.stack.push(Element::new(TagKind::ListItem)),
            Tag::FootnoteDefinition(label) => {
                let marker = Element::new(TagKind::Superscript)
                    .with_attribute("class", "footnote-definition-label")
                    .with_child(label.to_string());
                self.stack.push(
                    Element::new(TagKind::Div)
                        .with_attribute("class", "footnote-definition")
                        .with_attribute("id", label.to_string())
                        .with_child(marker),
                );
            }
            Tag::Table(_) => self.stack.push(Element::new(TagKind::Table)),
            Tag::TableHead => {
                self.in_table_head = true;
                self.stack.push(Element::new(TagKind::TableHead));
                self.stack.push(Element::new(TagKind::TableRow));
            }
            Tag::TableRow => self.stack.push(Element::new(TagKind::TableRow)),
            Tag::TableCell => {
                let kind = if self.in_table_head {
                    TagKind::TableHeaderCell
                } else {
                    TagKind::TableCell
                };
                self.stack.push(Element::new(kind));
            }
            Tag::Emphasis => self.stack.push(Element::new(TagKind::Emphasis)),
            Tag::Strong => self.stack.push(Element::new(TagKind::Strong)),
            Tag::Strikethrough => self.stack.push(Element::new(TagKind::Strikethrough)),
            Tag::Link {
                dest_url, title, ..
            } => {
                let mut el = Element::new(TagKind::Anchor).with_attribute("href", dest_url.to_string());
                if !title.is_empty() {
                    el.attributes.set("title", title.to_string());
                }
                self.stack.push(el);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                let mut el = Element::new(TagKind::Image).with_attribute("src", dest_url.to_string());
                if !title.is_empty() {
                    el.attributes.set("title", title.to_string());
                }
                self.stack.push(el);
            }
            // HTML blocks and anything else: a transparent container
            _ => self.stack.push(Element::new(TagKind::Fragment)),
        }
    }

    fn close(&mut self, tag: TagEnd) {
        self.close_dangling_html();
        match tag {
            TagEnd::CodeBlock => {
                self.pop_into_parent();
                self.pop_into_parent();
            }
            TagEnd::TableHead => {
                self.in_table_head = false;
                self.pop_into_parent();
                self.pop_into_parent();
            }
            TagEnd::Image => {
                if let Some(mut image) = self.stack.pop() {
                    let alt = image.text_content();
                    image.children.clear();
                    image.attributes.set("alt", alt);
                    self.append(image.into());
                }
            }
            _ => self.pop_into_parent(),
        }
    }

    fn inline_html(&mut self, html: &str) {
        let tag = html.trim();
        if let Some(caps) = close_tag_pattern().captures(tag) {
            if self.close_html_element(&TagKind::from_name(&caps[1])) {
                return;
            }
        } else if let Some(caps) = open_tag_pattern().captures(tag) {
            let name = &caps[1];
            let self_closing = !caps[3].is_empty();
            if !self_closing && !VOID_ELEMENTS.contains(&name.to_ascii_lowercase().as_str()) {
                let mut el = Element::new(TagKind::from_name(name));
                for attr in attribute_pattern().captures_iter(&caps[2]) {
                    let value = attr
                        .get(2)
                        .or_else(|| attr.get(3))
                        .or_else(|| attr.get(4))
                        .map_or("", |m| m.as_str());
                    el.attributes.set(&attr[1], unescape_attribute(value));
                }
                self.html_frames.push(self.stack.len());
                self.stack.push(el);
                return;
            }
        }
        self.append(Node::Raw(html.to_string()));
    }

    /// Close the innermost open inline HTML element of `kind`
    ///
    /// Only elements stacked directly above each other can be closed; a
    /// closing tag that would cross a markdown element is left raw.
    fn close_html_element(&mut self, kind: &TagKind) -> bool {
        let top = self.stack.len();
        let depth = self
            .html_frames
            .iter()
            .rev()
            .enumerate()
            .take_while(|&(i, &frame)| frame + 1 + i == top)
            .find(|&(_, &frame)| self.stack[frame].tag == *kind)
            .map(|(i, _)| i);
        let Some(depth) = depth else {
            return false;
        };
        for _ in 0..=depth {
            self.pop_html_frame();
        }
        true
    }

    /// Inline HTML elements left open when their markdown container ends
    fn close_dangling_html(&mut self) {
        while self
            .html_frames
            .last()
            .is_some_and(|&frame| frame + 1 == self.stack.len())
        {
            self.pop_html_frame();
        }
    }

    fn pop_html_frame(&mut self) {
        self.html_frames.pop();
        self.pop_into_parent();
    }

    fn pop_into_parent(&mut self) {
        // The root fragment is never popped by a close event
        if self.stack.len() > 1 {
            if let Some(el) = self.stack.pop() {
                self.append(el.into());
            }
        }
    }

    fn append(&mut self, node: Node) {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(node);
        }
    }

    fn append_text(&mut self, text: &str) {
        if let Some(parent) = self.stack.last_mut() {
            if let Some(Node::Text(last)) = parent.children.last_mut() {
                last.push_str(text);
            } else {
                parent.children.push(Node::Text(text.to_string()));
            }
        }
    }

    fn finish(mut self) -> Element {
        while self.stack.len() > 1 {
            self.pop_into_parent();
        }
        self.stack.pop().unwrap_or_else(|| Element::new(TagKind::Fragment))
    }
}
