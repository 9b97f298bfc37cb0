//! The conversion engine: a recursive dispatcher over the closed block-kind
//! set, folding child results through the shared cell accumulator.
//!
//! Traversal is single-threaded, synchronous, and total: no block kind can
//! fail a conversion. Constructs the engine cannot represent contribute an
//! empty result and are reported once, deduplicated, at the end of the run.

mod inline;
mod merge;
mod table;

use crate::diagnostics::DiagnosticSink;
use crate::notebook::{Cell, LanguageInfo, Notebook};
use crate::tree::nodes::{
    Admonition, Block, CalloutList, DefinitionList, Document, List, Listing, Literal, Quote, Stem,
};
use merge::CellAccumulator;

/// Fallback language recorded on notebooks whose document carries no
/// language attributes.
pub const DEFAULT_LANGUAGE_NAME: &str = "python";
pub const DEFAULT_LANGUAGE_VERSION: &str = "3.9.1";

/// Document attributes consumed by the engine.
pub const LANGUAGE_NAME_ATTR: &str = "jupyter-language-name";
pub const LANGUAGE_VERSION_ATTR: &str = "jupyter-language-version";
const IMAGESDIR_ATTR: &str = "imagesdir";

/// Node-kind tags recorded on cell metadata. The merge algorithm reads
/// [`tags::COLIST`] to suppress its join character.
pub(crate) mod tags {
    pub const LISTING: &str = "listing";
    pub const IMAGE: &str = "image";
    pub const ULIST: &str = "ulist";
    pub const OLIST: &str = "olist";
    pub const TABLE: &str = "table";
    pub const ADMONITION: &str = "admonition";
    pub const DLIST: &str = "dlist";
    pub const COLIST: &str = "colist";
}

/// Languages a listing may declare and still become an executable code cell.
/// Anything else renders as a fenced markdown block.
pub fn is_executable_language(language: &str) -> bool {
    matches!(language, "python" | "py" | "cpp" | "c++")
}

/// Conversion knobs. Document attributes always win over these defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub language_name: String,
    pub language_version: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            language_name: DEFAULT_LANGUAGE_NAME.to_string(),
            language_version: DEFAULT_LANGUAGE_VERSION.to_string(),
        }
    }
}

/// One conversion run: dispatcher state plus the diagnostic capability.
///
/// No state survives a call to [`Converter::convert`]; the ignored-kind
/// record is reset on entry and reported as a single deduplicated warning on
/// exit.
pub struct Converter<'a> {
    options: ConvertOptions,
    diagnostics: &'a dyn DiagnosticSink,
    ignored: Vec<String>,
    imagesdir: Option<String>,
}

impl<'a> Converter<'a> {
    pub fn new(options: ConvertOptions, diagnostics: &'a dyn DiagnosticSink) -> Self {
        Converter {
            options,
            diagnostics,
            ignored: Vec::new(),
            imagesdir: None,
        }
    }

    /// Converts a whole document tree into an assembled notebook.
    pub fn convert(&mut self, doc: &Document) -> Notebook {
        self.ignored.clear();
        self.imagesdir = doc.attribute(IMAGESDIR_ATTR).map(str::to_string);

        let language_info = LanguageInfo {
            name: doc
                .attribute_or(LANGUAGE_NAME_ATTR, &self.options.language_name)
                .to_string(),
            version: doc
                .attribute_or(LANGUAGE_VERSION_ATTR, &self.options.language_version)
                .to_string(),
        };

        let heading = if doc.has_title() {
            doc.title.as_deref().map(|t| format!("# {t}\n\n"))
        } else {
            None
        };
        let cells = self.convert_blocks(&doc.blocks, "\n", heading);

        if !self.ignored.is_empty() {
            self.diagnostics.warn(&format!(
                "Unsupported nodes [{}], some content might be missing!",
                self.ignored.join(", ")
            ));
        }

        Notebook::new(cells, language_info)
    }

    /// Block kinds dropped during the last conversion, deduplicated, in
    /// first-seen order.
    pub fn ignored_nodes(&self) -> &[String] {
        &self.ignored
    }

    pub(crate) fn diagnostics(&self) -> &dyn DiagnosticSink {
        self.diagnostics
    }

    fn note_ignored(&mut self, name: String) {
        if !self.ignored.contains(&name) {
            self.ignored.push(name);
        }
    }

    /// The cell accumulator: walks child blocks in document order and folds
    /// each result through the merge. An optional heading fragment is
    /// attached while the sequence is still empty.
    fn convert_blocks(
        &mut self,
        blocks: &[Block],
        join: &str,
        mut heading: Option<String>,
    ) -> Vec<Cell> {
        let mut acc = CellAccumulator::new();
        for block in blocks {
            let mut result = self.convert_block(block);
            if acc.is_empty() {
                if let Some(fragment) = heading.take() {
                    acc.attach_heading(fragment, &mut result);
                }
            }
            acc.accumulate(result, join);
        }
        acc.into_cells()
    }

    /// The dispatcher. Total over the closed kind set; every arm returns an
    /// ordered list of cells, possibly empty.
    pub fn convert_block(&mut self, block: &Block) -> Vec<Cell> {
        match block {
            Block::Preamble(preamble) => {
                // Lead-in blocks are flattened in order; the enclosing
                // document performs the merging.
                let mut cells = Vec::new();
                for child in &preamble.blocks {
                    cells.extend(self.convert_block(child));
                }
                cells
            }
            Block::Section(section) => {
                let heading = section
                    .title
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .map(|t| format!("## {t}\n\n"));
                self.convert_blocks(&section.blocks, "", heading)
            }
            Block::Example(example) => {
                self.convert_titled_box(example.title.as_deref(), &example.blocks)
            }
            Block::Sidebar(sidebar) => {
                self.convert_titled_box(sidebar.title.as_deref(), &sidebar.blocks)
            }
            Block::Paragraph(paragraph) => {
                let source = paragraph
                    .lines
                    .iter()
                    .map(|line| format!("{}\n", self.render_line(line)))
                    .collect();
                vec![Cell::markdown(source)]
            }
            Block::Listing(listing) => self.convert_listing(listing),
            Block::Literal(literal) => convert_literal(literal),
            Block::Stem(stem) => convert_stem(stem),
            Block::Image(image) => {
                let markup = self.image_markup(image);
                vec![Cell::markdown_tagged(
                    tags::IMAGE,
                    vec!["\n".to_string(), format!("{markup}\n"), "\n".to_string()],
                )]
            }
            Block::List(list) => self.convert_list(list),
            Block::DefinitionList(dlist) => self.convert_definition_list(dlist),
            Block::CalloutList(colist) => self.convert_callout_list(colist),
            Block::Table(table) => table::convert_table(table),
            Block::Quote(quote) => self.convert_quote(quote),
            Block::Admonition(admonition) => self.convert_admonition(admonition),
            Block::ThematicBreak | Block::Pass => Vec::new(),
            Block::Unknown(unknown) => {
                self.note_ignored(unknown.name.clone());
                Vec::new()
            }
        }
    }

    fn convert_titled_box(&mut self, title: Option<&str>, blocks: &[Block]) -> Vec<Cell> {
        let heading = title
            .filter(|t| !t.is_empty())
            .map(|t| format!("*{t}*\\\n"));
        self.convert_blocks(blocks, "\n", heading)
    }

    fn convert_listing(&mut self, listing: &Listing) -> Vec<Cell> {
        match listing.language.as_deref() {
            Some(language) if is_executable_language(language) => {
                vec![Cell::code(newline_terminated_except_last(&listing.lines))]
            }
            language => {
                let mut fragments = vec![format!("```{}\n", language.unwrap_or(""))];
                fragments.extend(listing.lines.iter().map(|line| format!("{line}\n")));
                fragments.push("```".to_string());
                vec![Cell::markdown_tagged(tags::LISTING, fragments)]
            }
        }
    }

    fn convert_list(&mut self, list: &List) -> Vec<Cell> {
        let (marker, tag) = if list.ordered {
            ("1.", tags::OLIST)
        } else {
            ("-", tags::ULIST)
        };
        let mut acc = CellAccumulator::new();
        for item in &list.items {
            let text = self.render_line(&item.text);
            acc.push(Cell::markdown_tagged(
                tag,
                vec![format!("{marker} {text}\n")],
            ));
            for block in &item.blocks {
                let result = self.convert_block(block);
                acc.accumulate(result, "");
            }
        }
        let mut cells = acc.into_cells();
        // make room around the list
        if let Some(first) = cells.first_mut() {
            first.source.insert(0, "\n".to_string());
        }
        if cells.len() > 1 {
            if let Some(last) = cells.last_mut() {
                last.source.push("\n".to_string());
            }
        }
        cells
    }

    fn convert_quote(&mut self, quote: &Quote) -> Vec<Cell> {
        let mut acc = CellAccumulator::new();
        for block in &quote.blocks {
            let result = self.convert_block(block);
            acc.accumulate(result, "");
        }
        let mut cells = acc.into_cells();
        for cell in &mut cells {
            if cell.is_markdown() {
                for fragment in &mut cell.source {
                    *fragment = format!("> {fragment}");
                }
                cell.source.insert(0, "\n".to_string());
                cell.source.push("\n".to_string());
            }
        }
        cells
    }

    fn convert_admonition(&mut self, admonition: &Admonition) -> Vec<Cell> {
        let label = format!("*{}:* ", admonition.label);
        if admonition.blocks.is_empty() {
            let content = self.render_line(&admonition.content);
            return vec![Cell::markdown_tagged(
                tags::ADMONITION,
                vec![format!("{label}{content}\n")],
            )];
        }
        let mut acc = CellAccumulator::new();
        acc.push(Cell::markdown_tagged(tags::ADMONITION, vec![label]));
        for block in &admonition.blocks {
            let result = self.convert_block(block);
            acc.accumulate(result, "");
        }
        acc.into_cells()
    }

    fn convert_definition_list(&mut self, dlist: &DefinitionList) -> Vec<Cell> {
        let mut source = String::new();
        for item in &dlist.items {
            for term in &item.terms {
                source.push_str(&format!("* **{}**\\", self.render_line(term)));
            }
            if let Some(text) = &item.text {
                source.push_str(&format!("\n{}\n", self.render_line(text)));
            }
            if !item.blocks.is_empty() {
                source.push('\n');
                for block in &item.blocks {
                    let content = self.convert_block(block);
                    match content.first() {
                        Some(cell) if content.len() == 1 && cell.is_markdown() => {
                            source.push_str(&format!("  {}\n", cell.source.join("  ")));
                        }
                        _ => {
                            // Nested non-markdown content is unsupported in a
                            // definition description; report, don't merge.
                            self.note_ignored(format!("dlist>{}", block.kind_name()));
                        }
                    }
                }
                source.push('\n');
            }
        }
        vec![Cell::markdown_tagged(tags::DLIST, vec![source])]
    }

    fn convert_callout_list(&mut self, colist: &CalloutList) -> Vec<Cell> {
        let mut source: Vec<String> = colist
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| format!("\n{}. {}", index + 1, self.render_line(item)))
            .collect();
        source.push(String::new());
        vec![Cell::markdown_tagged(tags::COLIST, source)]
    }

    fn image_uri(&self, target: &str) -> String {
        // URI resolution proper is the parser's concern; the engine only
        // honors the document-level imagesdir prefix for relative targets.
        if target.contains("://") || target.starts_with('/') {
            return target.to_string();
        }
        match self.imagesdir.as_deref() {
            Some(dir) if !dir.is_empty() => {
                format!("{}/{}", dir.trim_end_matches('/'), target)
            }
            _ => target.to_string(),
        }
    }
}

fn convert_literal(literal: &Literal) -> Vec<Cell> {
    let mut fragments = vec!["\n```\n".to_string()];
    fragments.extend(newline_terminated_except_last(&literal.lines));
    fragments.push("\n```\n".to_string());
    vec![Cell::markdown(fragments)]
}

fn convert_stem(stem: &Stem) -> Vec<Cell> {
    vec![Cell::markdown(vec![format!(
        "\n$$\n{}\n$$\n",
        stem.lines.join("\n")
    )])]
}

fn newline_terminated_except_last(lines: &[String]) -> Vec<String> {
    let count = lines.len();
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            if index + 1 == count {
                line.clone()
            } else {
                format!("{line}\n")
            }
        })
        .collect()
}
