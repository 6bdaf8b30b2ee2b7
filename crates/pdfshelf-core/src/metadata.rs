//! Document-level metadata types.
//!
//! Provides [`DocumentMetadata`] for the two /Info dictionary fields the
//! catalog cares about: title and author.

/// Document-level metadata extracted from the PDF /Info dictionary.
///
/// Both fields are optional since PDFs may omit the /Info dictionary entirely
/// or include only a subset of fields. A document whose metadata could not be
/// located at all is represented one level up, as `Option<DocumentMetadata>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentMetadata {
    /// Document title.
    pub title: Option<String>,
    /// Document author.
    pub author: Option<String>,
}

impl DocumentMetadata {
    /// Returns `true` if all metadata fields are `None`.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }

    /// The embedded title, if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    /// The embedded author, if present and non-empty.
    pub fn author(&self) -> Option<&str> {
        non_empty(self.author.as_deref())
    }

    /// Resolve the title for a possibly absent document, falling back to `stem`.
    pub fn resolved_title(meta: Option<&Self>, stem: &str) -> String {
        meta.and_then(Self::title).unwrap_or(stem).to_string()
    }

    /// Resolve the author for a possibly absent document, falling back to `""`.
    pub fn resolved_author(meta: Option<&Self>) -> String {
        meta.and_then(Self::author).unwrap_or_default().to_string()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
