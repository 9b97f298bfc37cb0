//! Shared tree builders for the integration tests.

use nb_convert::tree::nodes::{Block, Document, Inline, Listing, Paragraph};
use std::collections::BTreeMap;

pub fn paragraph(text: &str) -> Block {
    Block::Paragraph(Paragraph::from_lines(vec![text]))
}

pub fn python_listing(lines: &[&str]) -> Block {
    Block::Listing(Listing {
        language: Some("python".to_string()),
        lines: lines.iter().map(|l| l.to_string()).collect(),
    })
}

pub fn titled(title: &str, blocks: Vec<Block>) -> Document {
    Document {
        title: Some(title.to_string()),
        blocks,
        ..Document::default()
    }
}

pub fn with_attributes(attributes: &[(&str, &str)], blocks: Vec<Block>) -> Document {
    Document {
        attributes: attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
        blocks,
        ..Document::default()
    }
}

pub fn line(text: &str) -> Vec<Inline> {
    vec![Inline::text(text)]
}
