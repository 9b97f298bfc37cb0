//! Document-tree to Jupyter notebook conversion
//!
//!     This crate turns a parsed structured-document tree (sections, paragraphs,
//!     lists, tables, code listings, quotes, admonitions, inline spans) into an
//!     ordered sequence of notebook cells, serialized as a single ipynb JSON
//!     document (nbformat 4).
//!
//!     TLDR for embedders:
//!         - Build (or deserialize) a [`tree::nodes::Document`] with your own parser.
//!         - Call [`to_ipynb`] for the one-shot path, or drive a [`Converter`]
//!           yourself when you need custom options or a custom diagnostic sink.
//!         - Hosts that select output targets by name go through [`BackendRegistry`].
//!
//! Architecture
//!
//!     The hard part is the tree-to-cell-stream engine: a recursive block
//!     dispatcher, the cell model it produces, and the adjacent-markdown-cell
//!     merging that decides when consecutive markdown fragments collapse into one
//!     cell versus split around non-markdown content (code cells, mostly). The
//!     merge lives in one place (convert/merge.rs) and is shared by every
//!     composite node, so order preservation and coalescing are tested once.
//!
//!     This is a pure lib, that is, it powers nb-cli but is shell agnostic: no
//!     code here prints to std streams on its own, reads env vars, or touches the
//!     filesystem. Diagnostics go through an explicit sink capability instead of
//!     a global logger.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # Error enum for backend/serialization failures
//!     ├── diagnostics.rs          # DiagnosticSink capability + stock sinks
//!     ├── registry.rs             # NotebookBackend trait and BackendRegistry
//!     ├── tree
//!     │   └── nodes.rs            # The read-only input document-tree model
//!     ├── notebook.rs             # Cell / Notebook output model (serde)
//!     ├── convert
//!     │   ├── mod.rs              # Converter: the block dispatcher
//!     │   ├── inline.rs           # Inline-span rendering (links, styled text)
//!     │   ├── merge.rs            # CellAccumulator + merge algorithm
//!     │   └── table.rs            # Pipe-table rendering
//!     └── lib.rs
//!
//! Data Model
//!
//!     The input tree is owned by this crate but treated as read-only: the
//!     engine never mutates it, and a conversion holds no state beyond the
//!     per-invocation accumulator and the ignored-node record. Node kinds are
//!     closed enums with exhaustive matching; constructs outside the closed set
//!     travel as `Block::Unknown` and degrade to an empty result plus one
//!     deduplicated diagnostic at the end of the run, never an error.
//!
//!     Cell sources are ordered fragment lists, not single strings. The merge
//!     algorithm appends and prepends whole fragments; fragments are only
//!     concatenated at serialization time. Leaf fragments embed their own
//!     trailing newlines, and the merge join character exists solely for
//!     inter-block paragraph breaks.

pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod notebook;
pub mod registry;
pub mod tree;

pub use convert::{ConvertOptions, Converter};
pub use diagnostics::{DiagnosticSink, MemorySink, NullSink, StderrSink};
pub use error::ConvertError;
pub use notebook::{Cell, CellType, Notebook};
pub use registry::{BackendRegistry, JupyterBackend, NotebookBackend};

/// Converts a document tree to a [`Notebook`] with default options.
///
/// Diagnostics go to stderr; use [`Converter`] directly to supply your own sink.
pub fn to_notebook(doc: &tree::nodes::Document) -> Notebook {
    Converter::new(ConvertOptions::default(), &StderrSink).convert(doc)
}

/// Converts a document tree straight to ipynb JSON (compact).
pub fn to_ipynb(doc: &tree::nodes::Document) -> Result<String, ConvertError> {
    to_notebook(doc).to_json()
}
