//! Parsed report documents and tree queries.

use crate::error::{ExtractError, ExtractResult};
use roxmltree::{Document, Node, ParsingOptions};
use std::path::{Path, PathBuf};

/// A parsed report, borrowing the text it was parsed from.
pub struct ReportDocument<'input> {
    path: PathBuf,
    doc: Document<'input>,
}

impl<'input> ReportDocument<'input> {
    /// Parse report text. `path` is only used for error messages.
    pub fn parse(path: &Path, text: &'input str) -> ExtractResult<Self> {
        // nmap output carries a `<!DOCTYPE nmaprun>` declaration
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };

        let doc = Document::parse_with_options(text, options).map_err(|source| {
            ExtractError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    /// Source path of this document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All `<host>` elements in document order.
    pub fn hosts<'a>(&'a self) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
        find_all(self.doc.root_element(), "host")
    }

    /// The first descendant `tag` of `parent`, or a `MissingElement` error.
    pub fn require<'a>(
        &self,
        parent: Node<'a, 'input>,
        parent_tag: &'static str,
        tag: &'static str,
    ) -> ExtractResult<Node<'a, 'input>> {
        find_first(parent, tag).ok_or_else(|| ExtractError::MissingElement {
            path: self.path.clone(),
            parent: parent_tag,
            element: tag,
        })
    }
}

/// First descendant of `node` (not `node` itself) named `tag`, depth-first.
pub fn find_first<'a, 'input: 'a>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.descendants().skip(1).find(|n| n.has_tag_name(tag))
}

/// Every descendant of `node` (not `node` itself) named `tag`, in document order.
pub fn find_all<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .skip(1)
        .filter(move |n| n.has_tag_name(tag))
}

/// Owned attribute value, if present.
pub fn attr(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name).map(str::to_owned)
}
