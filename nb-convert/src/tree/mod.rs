//! The input document-tree model.
//!
//! This is the narrow interface to the external parsing collaborator: parsers
//! build (or emit as JSON) one of these trees, and the conversion engine walks
//! it read-only.

pub mod nodes;
