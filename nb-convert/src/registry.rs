//! Backend registry for output-target discovery and selection.
//!
//! Backends are registered and retrieved by name. The crate ships one
//! built-in backend, `jupyter`, producing ipynb JSON.

use crate::convert::{ConvertOptions, Converter};
use crate::diagnostics::DiagnosticSink;
use crate::error::ConvertError;
use crate::tree::nodes::Document;
use std::collections::HashMap;

/// An output target: takes a document tree and renders a serialized notebook.
pub trait NotebookBackend {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// File extension used for output files, without the dot.
    fn file_extension(&self) -> &str;
    fn convert(
        &self,
        doc: &Document,
        options: &ConvertOptions,
        diagnostics: &dyn DiagnosticSink,
    ) -> Result<String, ConvertError>;
}

/// The built-in Jupyter backend.
#[derive(Debug, Default)]
pub struct JupyterBackend {
    /// Pretty-print the emitted JSON.
    pub pretty: bool,
}

impl NotebookBackend for JupyterBackend {
    fn name(&self) -> &str {
        "jupyter"
    }

    fn description(&self) -> &str {
        "Jupyter notebook (nbformat 4)"
    }

    fn file_extension(&self) -> &str {
        "ipynb"
    }

    fn convert(
        &self,
        doc: &Document,
        options: &ConvertOptions,
        diagnostics: &dyn DiagnosticSink,
    ) -> Result<String, ConvertError> {
        let notebook = Converter::new(options.clone(), diagnostics).convert(doc);
        if self.pretty {
            notebook.to_json_pretty()
        } else {
            notebook.to_json()
        }
    }
}

/// Registry of notebook backends.
///
/// # Examples
///
/// ```ignore
/// let registry = BackendRegistry::with_defaults();
/// let ipynb = registry.convert(&doc, "jupyter", &options, &sink)?;
/// ```
pub struct BackendRegistry {
    backends: HashMap<String, Box<dyn NotebookBackend>>,
}

impl BackendRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        BackendRegistry {
            backends: HashMap::new(),
        }
    }

    /// Register a backend
    ///
    /// If a backend with the same name already exists, it will be replaced.
    pub fn register<B: NotebookBackend + 'static>(&mut self, backend: B) {
        self.backends
            .insert(backend.name().to_string(), Box::new(backend));
    }

    /// Get a backend by name
    pub fn get(&self, name: &str) -> Result<&dyn NotebookBackend, ConvertError> {
        self.backends
            .get(name)
            .map(|b| b.as_ref())
            .ok_or_else(|| ConvertError::BackendNotFound(name.to_string()))
    }

    /// Check if a backend exists
    pub fn has(&self, name: &str) -> bool {
        self.backends.contains_key(name)
    }

    /// List all available backend names (sorted)
    pub fn list_backends(&self) -> Vec<String> {
        let mut names: Vec<_> = self.backends.keys().cloned().collect();
        names.sort();
        names
    }

    /// Convert a document tree using the named backend
    pub fn convert(
        &self,
        doc: &Document,
        backend: &str,
        options: &ConvertOptions,
        diagnostics: &dyn DiagnosticSink,
    ) -> Result<String, ConvertError> {
        self.get(backend)?.convert(doc, options, diagnostics)
    }

    /// Create a registry with the built-in backends
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(JupyterBackend::default());
        registry
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
