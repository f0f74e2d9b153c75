//! Document tree: node model, markdown adapter and markup serializer

mod html;
mod markdown;
mod node;

pub use html::{render_html, render_nodes};
pub use markdown::{parse_markdown, split_frontmatter};
pub use node::{Attributes, Element, Node, TagKind};
