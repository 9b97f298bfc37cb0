//! Core data structures for the document tree.
//!
//! Node kinds form a closed set with exhaustive matching in the converter.
//! Parsers that encounter constructs outside the set hand them through as
//! [`Block::Unknown`]; the converter drops them gracefully instead of failing.
//!
//! All types deserialize from an internally tagged JSON representation
//! (`"kind": "paragraph"`, ...) so a parser written in any language can feed
//! the engine through a serialized tree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One line of inline content: text runs and inline-role spans in order.
pub type Line = Vec<Inline>;

/// One table row as plain cell text, already substituted by the parser.
pub type Row = Vec<String>;

/// The root of a parsed document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub title: Option<String>,
    /// Document-level attributes (e.g. `jupyter-language-name`, `imagesdir`).
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Document {
            blocks,
            ..Document::default()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attribute_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.attribute(name).unwrap_or(default)
    }

    /// True when the document carries a non-empty title.
    pub fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// A block-role node. Converting one yields an ordered list of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Preamble(Preamble),
    Section(Section),
    Paragraph(Paragraph),
    Listing(Listing),
    Literal(Literal),
    Stem(Stem),
    Image(Image),
    List(List),
    DefinitionList(DefinitionList),
    CalloutList(CalloutList),
    Table(Table),
    Quote(Quote),
    Admonition(Admonition),
    Example(Example),
    Sidebar(Sidebar),
    ThematicBreak,
    Pass,
    /// A construct outside the closed kind set, carried through by the parser.
    Unknown(Unknown),
}

impl Block {
    /// The kind name used in diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            Block::Preamble(_) => "preamble",
            Block::Section(_) => "section",
            Block::Paragraph(_) => "paragraph",
            Block::Listing(_) => "listing",
            Block::Literal(_) => "literal",
            Block::Stem(_) => "stem",
            Block::Image(_) => "image",
            Block::List(list) => {
                if list.ordered {
                    "olist"
                } else {
                    "ulist"
                }
            }
            Block::DefinitionList(_) => "dlist",
            Block::CalloutList(_) => "colist",
            Block::Table(_) => "table",
            Block::Quote(_) => "quote",
            Block::Admonition(_) => "admonition",
            Block::Example(_) => "example",
            Block::Sidebar(_) => "sidebar",
            Block::ThematicBreak => "thematic_break",
            Block::Pass => "pass",
            Block::Unknown(unknown) => &unknown.name,
        }
    }
}

/// Untitled lead-in content before the first section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preamble {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A titled section; sections nest through their child blocks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A paragraph: ordered text lines, each a sequence of inline spans.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub lines: Vec<Line>,
}

impl Paragraph {
    /// Builds a paragraph of plain-text lines. Mostly useful in tests.
    pub fn from_lines<S: Into<String>>(lines: Vec<S>) -> Self {
        Paragraph {
            lines: lines
                .into_iter()
                .map(|l| vec![Inline::text(l)])
                .collect(),
        }
    }
}

/// A source-code listing with an optional declared language.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub language: Option<String>,
    pub lines: Vec<String>,
}

/// Preformatted text without a language annotation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Literal {
    pub lines: Vec<String>,
}

/// A display-math block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stem {
    pub lines: Vec<String>,
}

/// An image reference; serves both block and inline roles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Image {
    pub target: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// An ordered or unordered list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct List {
    #[serde(default)]
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

/// One list item: principal text plus optional nested blocks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListItem {
    pub text: Line,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A definition list of term/description entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefinitionList {
    pub items: Vec<DefinitionItem>,
}

/// One definition entry. Multiple terms may share a description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefinitionItem {
    pub terms: Vec<Line>,
    #[serde(default)]
    pub text: Option<Line>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A callout list: numbered annotations attached to a listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalloutList {
    pub items: Vec<Line>,
}

/// A table with row groups split into head, body, and footnote rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub head: Vec<Row>,
    #[serde(default)]
    pub body: Vec<Row>,
    #[serde(default)]
    pub foot: Vec<Row>,
}

/// A block quote.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// An admonition (NOTE, TIP, WARNING, ...) with a display label.
///
/// Simple admonitions carry their text in `content`; complex ones carry
/// nested blocks instead.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Admonition {
    pub label: String,
    #[serde(default)]
    pub content: Line,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A titled example block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A sidebar; rendered like an example.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sidebar {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// Placeholder for constructs outside the closed kind set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Unknown {
    pub name: String,
}

/// An inline-role node. Converting one yields a plain string spliced into the
/// enclosing markdown fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inline {
    Text { text: String },
    Break,
    Link { text: String, target: String },
    Xref(Xref),
    Styled { style: SpanStyle, text: String },
    Image(Image),
}

impl Inline {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Inline::Text { text: text.into() }
    }
}

/// A cross-reference. Display text resolution: explicit text, else the path
/// attribute, else the bracketed reference id, falling back to the target.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Xref {
    pub target: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub refid: Option<String>,
}

/// Style tag of a quoted inline span.
///
/// Styles outside the known set are carried verbatim in `Other`; the converter
/// passes their text through and reports an informational diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanStyle {
    Emphasis,
    Strong,
    Monospaced,
    Asciimath,
    Latexmath,
    Unquoted,
    #[serde(untagged)]
    Other(String),
}
