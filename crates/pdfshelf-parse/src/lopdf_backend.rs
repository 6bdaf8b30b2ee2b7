//! lopdf-based metadata backend.
//!
//! Implements [`MetadataBackend`] using the [lopdf](https://crates.io/crates/lopdf)
//! crate for PDF document parsing. This is the default backend for pdfshelf.

use pdfshelf_core::DocumentMetadata;

use crate::backend::MetadataBackend;
use crate::error::BackendError;

/// The lopdf-based PDF backend.
///
/// # Example
///
/// ```ignore
/// use pdfshelf_parse::{LopdfBackend, MetadataBackend};
///
/// let doc = LopdfBackend::open(pdf_bytes)?;
/// let meta = LopdfBackend::document_metadata(&doc)?;
/// ```
pub struct LopdfBackend;

impl MetadataBackend for LopdfBackend {
    type Document = lopdf::Document;

    fn open(bytes: &[u8]) -> Result<Self::Document, BackendError> {
        let doc = lopdf::Document::load_mem(bytes)?;

        if doc.is_encrypted() {
            return Err(BackendError::PasswordRequired);
        }

        Ok(doc)
    }

    fn document_metadata(doc: &Self::Document) -> Result<Option<DocumentMetadata>, BackendError> {
        Ok(extract_document_metadata(doc))
    }
}

/// Resolve an object that may be an indirect reference.
fn resolve<'a>(doc: &'a lopdf::Document, obj: &'a lopdf::Object) -> Option<&'a lopdf::Object> {
    match obj {
        lopdf::Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

/// Decode a PDF text string object.
///
/// lopdf handles the UTF-16BE and UTF-8 byte-order marks and PDFDocEncoding;
/// a leading U+FEFF left over from a UTF-8 BOM is dropped. Strings lopdf
/// rejects are decoded lossily.
fn decode_text_string(obj: &lopdf::Object, bytes: &[u8]) -> String {
    match lopdf::decode_text_string(obj) {
        Ok(text) => match text.strip_prefix('\u{feff}') {
            Some(rest) => rest.to_string(),
            None => text,
        },
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Extract a string value from a lopdf dictionary, handling both String and Name types.
fn extract_string_from_dict(
    doc: &lopdf::Document,
    dict: &lopdf::Dictionary,
    key: &[u8],
) -> Option<String> {
    let obj = resolve(doc, dict.get(key).ok()?)?;
    match obj {
        lopdf::Object::String(bytes, _) => Some(decode_text_string(obj, bytes)),
        lopdf::Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        _ => None,
    }
}

/// Extract title and author from the /Info dictionary referenced by the trailer.
fn extract_document_metadata(doc: &lopdf::Document) -> Option<DocumentMetadata> {
    let info = resolve(doc, doc.trailer.get(b"Info").ok()?)?;
    let info_dict = info.as_dict().ok()?;

    Some(DocumentMetadata {
        title: extract_string_from_dict(doc, info_dict, b"Title"),
        author: extract_string_from_dict(doc, info_dict, b"Author"),
    })
}

#[cfg(test)]
fn create_test_document() -> lopdf::Document {
    use lopdf::{Document, Object, ObjectId, dictionary};

    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::from(page_id)],
            "Count" => 1i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

#[cfg(test)]
fn save_test_document(mut doc: lopdf::Document) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}

/// Create a test PDF with an indirect /Info metadata dictionary.
#[cfg(test)]
fn create_test_pdf_with_metadata(title: Option<&str>, author: Option<&str>) -> Vec<u8> {
    use lopdf::Object;

    let mut doc = create_test_document();
    let mut info_dict = lopdf::Dictionary::new();
    if let Some(v) = title {
        info_dict.set("Title", Object::string_literal(v));
    }
    if let Some(v) = author {
        info_dict.set("Author", Object::string_literal(v));
    }
    let info_id = doc.add_object(Object::Dictionary(info_dict));
    doc.trailer.set("Info", Object::Reference(info_id));
    save_test_document(doc)
}
