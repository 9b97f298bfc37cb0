//! The cell accumulator and the adjacent-markdown-cell merge.
//!
//! Every composite node (document, section, list item, quote, admonition)
//! folds its children through one of these. The merge target is always the
//! accumulator's actual last cell; there is no aliased `last cell` handle that
//! can go stale between sibling subtrees, so content can never be reordered.

use super::tags;
use crate::notebook::Cell;

/// Per-composite-node accumulation state. Strictly local to one call frame of
/// the recursive descent.
#[derive(Debug, Default)]
pub(crate) struct CellAccumulator {
    cells: Vec<Cell>,
}

impl CellAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Push a cell without considering it for merging. Used for cells the
    /// composite node itself produces, e.g. list bullets.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Fold one child's result into the running cell sequence.
    ///
    /// If the last accumulated cell is markdown and the whole result is
    /// markdown, the result's sources are concatenated onto it, preceded by
    /// the join character (suppressed for callout-list continuations). If the
    /// result changes type partway, the leading markdown run still coalesces
    /// but everything from the first non-markdown cell on is appended
    /// verbatim; later markdown cells are never merged back across the split.
    pub fn accumulate(&mut self, result: Vec<Cell>, join: &str) {
        if result.is_empty() {
            return;
        }
        match self.cells.last() {
            Some(last) if last.is_markdown() => {}
            _ => {
                self.cells.extend(result);
                return;
            }
        }

        let boundary = result.iter().position(|cell| !cell.is_markdown());
        let apply_join = boundary.is_none()
            && !join.is_empty()
            && result[0].metadata.node_name.as_deref() != Some(tags::COLIST);

        let mut head = result;
        let tail = match boundary {
            Some(index) => head.split_off(index),
            None => Vec::new(),
        };

        if let Some(last) = self.cells.last_mut() {
            if apply_join {
                match last.source.last_mut() {
                    Some(fragment) => fragment.push_str(join),
                    None => last.source.push(join.to_string()),
                }
            }
            for cell in head {
                last.source.extend(cell.source);
            }
        }
        self.cells.extend(tail);
    }

    /// Attach a heading/title fragment ahead of the first real content:
    /// unshifted into the first produced markdown cell, or pushed as its own
    /// leading markdown cell when the first produced cell is not markdown.
    pub fn attach_heading(&mut self, fragment: String, result: &mut Vec<Cell>) {
        match result.first_mut() {
            Some(first) if first.is_markdown() => first.source.insert(0, fragment),
            _ => self.push(Cell::markdown(vec![fragment])),
        }
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}
