//! Graceful-degradation tests: unsupported constructs drop out of the cell
//! stream with a single deduplicated warning, never a failure.

use crate::common::paragraph;
use nb_convert::diagnostics::MemorySink;
use nb_convert::tree::nodes::{Block, Document, Unknown};
use nb_convert::{ConvertOptions, Converter};

fn unknown(name: &str) -> Block {
    Block::Unknown(Unknown {
        name: name.to_string(),
    })
}

#[test]
fn test_unknown_blocks_drop_without_failing() {
    let doc = Document::with_blocks(vec![
        paragraph("before"),
        unknown("video"),
        paragraph("after"),
    ]);
    let sink = MemorySink::new();
    let notebook = Converter::new(ConvertOptions::default(), &sink).convert(&doc);
    assert_eq!(notebook.cells.len(), 1);
    assert_eq!(notebook.cells[0].text(), "before\n\nafter\n");
}

#[test]
fn test_unsupported_kinds_warn_once_deduplicated() {
    let doc = Document::with_blocks(vec![
        unknown("video"),
        unknown("audio"),
        unknown("video"),
        paragraph("content"),
    ]);
    let sink = MemorySink::new();
    let mut converter = Converter::new(ConvertOptions::default(), &sink);
    converter.convert(&doc);

    assert_eq!(converter.ignored_nodes(), ["video", "audio"]);
    let warnings = sink.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0],
        "Unsupported nodes [video, audio], some content might be missing!"
    );
}

#[test]
fn test_supported_documents_emit_no_warnings() {
    let doc = Document::with_blocks(vec![paragraph("all good")]);
    let sink = MemorySink::new();
    Converter::new(ConvertOptions::default(), &sink).convert(&doc);
    assert!(sink.warnings().is_empty());
}

#[test]
fn test_ignored_record_resets_between_conversions() {
    let sink = MemorySink::new();
    let mut converter = Converter::new(ConvertOptions::default(), &sink);

    converter.convert(&Document::with_blocks(vec![unknown("video")]));
    assert_eq!(converter.ignored_nodes(), ["video"]);

    converter.convert(&Document::with_blocks(vec![paragraph("clean")]));
    assert!(converter.ignored_nodes().is_empty());
    assert_eq!(sink.warnings().len(), 1);
}
