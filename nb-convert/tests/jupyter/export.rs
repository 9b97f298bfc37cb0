//! End-to-end export checks: whole documents through [`nb_convert::to_ipynb`]
//! and the backend registry, verified against the parsed ipynb JSON.

use crate::common::{paragraph, python_listing, titled, with_attributes};
use nb_convert::diagnostics::NullSink;
use nb_convert::registry::BackendRegistry;
use nb_convert::tree::nodes::Document;
use nb_convert::{to_ipynb, to_notebook, ConvertOptions};

fn parse(ipynb: &str) -> serde_json::Value {
    serde_json::from_str(ipynb).expect("emitted ipynb to be valid JSON")
}

#[test]
fn test_demo_document_export() {
    let doc = titled(
        "Demo",
        vec![
            paragraph("Intro"),
            python_listing(&["print(1)"]),
            paragraph("Outro"),
        ],
    );

    let notebook = to_notebook(&doc);
    assert_eq!(notebook.cells.len(), 3);

    assert!(notebook.cells[0].is_markdown());
    assert_eq!(notebook.cells[0].text(), "# Demo\n\nIntro\n");

    assert!(!notebook.cells[1].is_markdown());
    assert_eq!(notebook.cells[1].text(), "print(1)");
    assert_eq!(notebook.cells[1].execution_count, Some(0));

    assert!(notebook.cells[2].is_markdown());
    assert_eq!(notebook.cells[2].text(), "Outro\n");

    assert_eq!(notebook.metadata.language_info.name, "python");
    assert_eq!(notebook.metadata.language_info.version, "3.9.1");
}

#[test]
fn test_demo_document_json_shape() {
    let doc = titled("Demo", vec![paragraph("Intro"), python_listing(&["print(1)"])]);
    let value = parse(&to_ipynb(&doc).unwrap());

    assert_eq!(value["nbformat"], 4);
    assert_eq!(value["nbformat_minor"], 4);
    assert_eq!(value["metadata"]["language_info"]["name"], "python");

    let cells = value["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0]["cell_type"], "markdown");
    assert!(cells[0].get("execution_count").is_none());
    assert!(cells[0].get("outputs").is_none());
    assert_eq!(cells[1]["cell_type"], "code");
    assert_eq!(cells[1]["execution_count"], 0);
    assert_eq!(cells[1]["outputs"], serde_json::json!([]));
    assert_eq!(
        cells[1]["metadata"]["slideshow"]["slide_type"],
        "fragment"
    );
}

#[test]
fn test_untitled_document_has_no_heading() {
    let doc = Document::with_blocks(vec![paragraph("Just text")]);
    let notebook = to_notebook(&doc);
    assert_eq!(notebook.cells.len(), 1);
    assert_eq!(notebook.cells[0].text(), "Just text\n");
}

#[test]
fn test_title_before_leading_code_gets_own_cell() {
    let doc = titled("Demo", vec![python_listing(&["print(1)"])]);
    let notebook = to_notebook(&doc);
    assert_eq!(notebook.cells.len(), 2);
    assert!(notebook.cells[0].is_markdown());
    assert_eq!(notebook.cells[0].text(), "# Demo\n\n");
    assert!(!notebook.cells[1].is_markdown());
}

#[test]
fn test_language_attributes_override_options() {
    let doc = with_attributes(
        &[
            ("jupyter-language-name", "xcpp17"),
            ("jupyter-language-version", "17"),
        ],
        vec![paragraph("body")],
    );
    let notebook = to_notebook(&doc);
    assert_eq!(notebook.metadata.language_info.name, "xcpp17");
    assert_eq!(notebook.metadata.language_info.version, "17");
}

#[test]
fn test_options_fill_in_missing_attributes() {
    let doc = Document::with_blocks(vec![paragraph("body")]);
    let options = ConvertOptions {
        language_name: "cpp".to_string(),
        language_version: "14".to_string(),
    };
    let registry = BackendRegistry::default();
    let value = parse(&registry.convert(&doc, "jupyter", &options, &NullSink).unwrap());
    assert_eq!(value["metadata"]["language_info"]["name"], "cpp");
    assert_eq!(value["metadata"]["language_info"]["version"], "14");
}

#[test]
fn test_empty_document_exports_empty_cell_list() {
    let doc = Document::default();
    let value = parse(&to_ipynb(&doc).unwrap());
    assert_eq!(value["cells"], serde_json::json!([]));
    assert_eq!(value["nbformat"], 4);
}
