//! Merge-behavior tests: coalescing, splitting, and order preservation over
//! whole documents.

use crate::common::{line, paragraph, python_listing};
use nb_convert::diagnostics::NullSink;
use nb_convert::tree::nodes::{Block, CalloutList, Document, Section};
use nb_convert::{to_notebook, ConvertOptions, Converter};
use proptest::prelude::*;

#[test]
fn test_adjacent_paragraphs_collapse_to_one_cell() {
    let doc = Document::with_blocks(vec![
        paragraph("one"),
        paragraph("two"),
        paragraph("three"),
    ]);
    let notebook = to_notebook(&doc);
    assert_eq!(notebook.cells.len(), 1);
    assert_eq!(notebook.cells[0].text(), "one\n\ntwo\n\nthree\n");
}

#[test]
fn test_code_splits_markdown_runs() {
    let doc = Document::with_blocks(vec![
        paragraph("before"),
        python_listing(&["print(1)"]),
        paragraph("after one"),
        paragraph("after two"),
    ]);
    let notebook = to_notebook(&doc);
    assert_eq!(notebook.cells.len(), 3);
    assert_eq!(notebook.cells[0].text(), "before\n");
    assert_eq!(notebook.cells[1].text(), "print(1)");
    assert_eq!(notebook.cells[2].text(), "after one\n\nafter two\n");
}

#[test]
fn test_section_children_join_without_break() {
    let doc = Document::with_blocks(vec![Block::Section(Section {
        title: Some("Setup".to_string()),
        blocks: vec![paragraph("first"), paragraph("second")],
    })]);
    let notebook = to_notebook(&doc);
    assert_eq!(notebook.cells.len(), 1);
    assert_eq!(notebook.cells[0].text(), "## Setup\n\nfirst\nsecond\n");
}

#[test]
fn test_callout_list_joins_previous_cell_without_break() {
    let doc = Document::with_blocks(vec![
        paragraph("the listing"),
        Block::CalloutList(CalloutList {
            items: vec![line("first note"), line("second note")],
        }),
    ]);
    let notebook = to_notebook(&doc);
    assert_eq!(notebook.cells.len(), 1);
    assert_eq!(
        notebook.cells[0].text(),
        "the listing\n\n1. first note\n2. second note"
    );
}

proptest! {
    /// Cell boundaries may move around, but the text of every block appears
    /// exactly once and in document order.
    #[test]
    fn prop_conversion_preserves_text_order(kinds in proptest::collection::vec(0u8..2, 1..20)) {
        let blocks: Vec<Block> = kinds
            .iter()
            .enumerate()
            .map(|(index, kind)| match kind {
                0 => paragraph(&format!("para{index}")),
                _ => python_listing(&[format!("code{index}").as_str()]),
            })
            .collect();
        let doc = Document::with_blocks(blocks);
        let notebook = Converter::new(ConvertOptions::default(), &NullSink).convert(&doc);

        let flattened: String = notebook
            .cells
            .iter()
            .map(|cell| cell.text())
            .collect::<Vec<_>>()
            .join("\u{0}");
        let mut cursor = 0;
        for (index, kind) in kinds.iter().enumerate() {
            let marker = if *kind == 0 {
                format!("para{index}")
            } else {
                format!("code{index}")
            };
            let found = flattened[cursor..]
                .find(&marker)
                .expect("block text present in order");
            cursor += found + marker.len();
        }
    }

    /// Runs of adjacent paragraphs always coalesce into a single cell.
    #[test]
    fn prop_paragraph_runs_make_one_cell(count in 1usize..30) {
        let blocks: Vec<Block> = (0..count)
            .map(|index| paragraph(&format!("p{index}")))
            .collect();
        let doc = Document::with_blocks(blocks);
        let notebook = Converter::new(ConvertOptions::default(), &NullSink).convert(&doc);
        prop_assert_eq!(notebook.cells.len(), 1);
        prop_assert!(notebook.cells[0].is_markdown());
    }

    /// Code cells never merge; a document of n listings yields n code cells.
    #[test]
    fn prop_code_cells_never_merge(count in 1usize..20) {
        let blocks: Vec<Block> = (0..count)
            .map(|index| python_listing(&[format!("print({index})").as_str()]))
            .collect();
        let doc = Document::with_blocks(blocks);
        let notebook = Converter::new(ConvertOptions::default(), &NullSink).convert(&doc);
        prop_assert_eq!(notebook.cells.len(), count);
        prop_assert!(notebook.cells.iter().all(|cell| !cell.is_markdown()));
    }
}
