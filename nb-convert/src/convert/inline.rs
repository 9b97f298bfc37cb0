//! Inline-span rendering.
//!
//! Inline-role nodes produce plain strings spliced into the enclosing
//! markdown fragment; this is the inline-substitution step applied to every
//! text line before it becomes a cell fragment.

use super::Converter;
use crate::tree::nodes::{Image, Inline, SpanStyle, Xref};

impl Converter<'_> {
    /// Renders one line of inline spans to a single string (no trailing
    /// newline; callers add line termination).
    pub(crate) fn render_line(&self, spans: &[Inline]) -> String {
        spans.iter().map(|span| self.render_span(span)).collect()
    }

    fn render_span(&self, span: &Inline) -> String {
        match span {
            Inline::Text { text } => text.clone(),
            Inline::Break => "\n".to_string(),
            Inline::Link { text, target } => format!("[{text}]({target})"),
            Inline::Xref(xref) => self.render_xref(xref),
            Inline::Styled { style, text } => self.render_styled(style, text),
            Inline::Image(image) => self.image_markup(image),
        }
    }

    fn render_xref(&self, xref: &Xref) -> String {
        let display = non_empty(&xref.text)
            .or_else(|| non_empty(&xref.path))
            .map(str::to_string)
            .or_else(|| xref.refid.as_ref().map(|refid| format!("[{refid}]")))
            .unwrap_or_else(|| xref.target.clone());
        format!("[{}]({})", display, xref.target)
    }

    fn render_styled(&self, style: &SpanStyle, text: &str) -> String {
        match style {
            SpanStyle::Emphasis => format!("*{text}*"),
            SpanStyle::Strong => format!("**{text}**"),
            SpanStyle::Monospaced => format!("`{text}`"),
            SpanStyle::Asciimath | SpanStyle::Latexmath => format!("${text}$"),
            SpanStyle::Unquoted => text.to_string(),
            SpanStyle::Other(name) => {
                self.diagnostics()
                    .info(&format!("Unsupported inline style: {name}, using raw text."));
                text.to_string()
            }
        }
    }

    /// Markdown image reference, wrapped in a link when one is attached.
    pub(crate) fn image_markup(&self, image: &Image) -> String {
        let rendered = format!("![{}]({})", image.alt, self.image_uri(&image.target));
        match &image.link {
            Some(link) => format!("[{rendered}]({link})"),
            None => rendered,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
