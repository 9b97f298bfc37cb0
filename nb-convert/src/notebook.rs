//! The notebook output model.
//!
//! Cells keep their source as an ordered fragment list rather than one string;
//! the merge algorithm moves whole fragments around and concatenation only
//! happens when the document is serialized. Shapes follow nbformat 4.

use crate::error::ConvertError;
use serde::Serialize;

/// Notebook format version emitted by the assembler.
pub const NBFORMAT: u32 = 4;
pub const NBFORMAT_MINOR: u32 = 4;

/// The two cell types the engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Markdown,
    Code,
}

/// Slideshow presentation hint attached to code cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slideshow {
    pub slide_type: String,
}

impl Slideshow {
    pub fn fragment() -> Self {
        Slideshow {
            slide_type: "fragment".to_string(),
        }
    }
}

/// Cell metadata. `node_name` records the producing block kind for some
/// kinds; the merge algorithm reads it to suppress the join character after
/// callout-list continuations. Empty metadata serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CellMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slideshow: Option<Slideshow>,
}

/// One notebook cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub cell_type: CellType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_count: Option<u32>,
    pub metadata: CellMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<serde_json::Value>>,
    pub source: Vec<String>,
}

impl Cell {
    /// A markdown cell with empty metadata.
    pub fn markdown(source: Vec<String>) -> Self {
        Cell {
            cell_type: CellType::Markdown,
            execution_count: None,
            metadata: CellMetadata::default(),
            outputs: None,
            source,
        }
    }

    /// A markdown cell tagged with the block kind that produced it.
    pub fn markdown_tagged(node_name: &str, source: Vec<String>) -> Self {
        Cell {
            metadata: CellMetadata {
                node_name: Some(node_name.to_string()),
                slideshow: None,
            },
            ..Cell::markdown(source)
        }
    }

    /// An executable code cell: never executed here, so the count is zero and
    /// the outputs list is empty.
    pub fn code(source: Vec<String>) -> Self {
        Cell {
            cell_type: CellType::Code,
            execution_count: Some(0),
            metadata: CellMetadata {
                node_name: None,
                slideshow: Some(Slideshow::fragment()),
            },
            outputs: Some(Vec::new()),
            source,
        }
    }

    pub fn is_markdown(&self) -> bool {
        self.cell_type == CellType::Markdown
    }

    /// The cell source as one string, the way a notebook frontend reads it.
    pub fn text(&self) -> String {
        self.source.concat()
    }
}

/// Language metadata recorded on the notebook document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotebookMetadata {
    pub language_info: LanguageInfo,
}

/// The assembled notebook document. Assembly performs no merging of its own;
/// by the time it runs the tree is already reduced to a flat cell sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: NotebookMetadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

impl Notebook {
    pub fn new(cells: Vec<Cell>, language_info: LanguageInfo) -> Self {
        Notebook {
            cells,
            metadata: NotebookMetadata { language_info },
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// Serialize to compact ipynb JSON.
    pub fn to_json(&self) -> Result<String, ConvertError> {
        serde_json::to_string(self).map_err(|e| ConvertError::SerializationError(e.to_string()))
    }

    /// Serialize to pretty-printed ipynb JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConvertError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConvertError::SerializationError(e.to_string()))
    }
}
