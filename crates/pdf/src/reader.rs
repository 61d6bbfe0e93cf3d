//! PDF reader implementation.
//!
//! Text comes from lopdf page by page, with a pdf-extract fallback when the
//! text layer decodes to nothing but whitespace (some generators emit
//! encodings lopdf mishandles; the fallback loses page boundaries). Images
//! and link annotations are walked per page so the asset lists stay in page
//! order, which positional correlation depends on.

use lopdf::{Dictionary, Document, Object, ObjectId};
use mcq_core::{DocumentContent, DocumentFormat, Error, ImageAsset, Result};
use std::path::{Path, PathBuf};

/// URI substrings that mark a link as a video/explanation link.
const LINK_KEYWORDS: &[&str] = &["youtube", "video", "watch", "explanation"];

/// Reader for PDF quiz documents.
#[derive(Debug, Clone, Default)]
pub struct PdfReader {
    /// Directory extracted images are written to; image extraction is
    /// skipped entirely when unset.
    image_dir: Option<PathBuf>,
}

impl PdfReader {
    /// Create a new reader that extracts text and links only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable image extraction into the given directory.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = Some(dir.into());
        self
    }

    /// Read a PDF from disk.
    pub fn read_path(&self, path: &Path) -> Result<DocumentContent> {
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        self.read_bytes(&bytes, filename)
    }

    /// Read a PDF already loaded into memory.
    pub fn read_bytes(&self, bytes: &[u8], filename: &str) -> Result<DocumentContent> {
        let doc = Document::load_mem(bytes)
            .map_err(|e| Error::CorruptedFile(format!("{}: {}", filename, e)))?;

        if doc.is_encrypted() {
            return Err(Error::EncryptedFile(filename.to_string()));
        }

        let mut content = DocumentContent::new(filename, DocumentFormat::Pdf);

        for (page_num, page_id) in doc.get_pages() {
            // A single page failing to decode degrades to an empty page;
            // the fallback below catches the case where every page fails
            let text = doc.extract_text(&[page_num]).unwrap_or_else(|e| {
                log::warn!("text extraction failed on page {}: {}", page_num, e);
                String::new()
            });
            content.pages.push(text);

            if let Some(dir) = &self.image_dir {
                match extract_page_images(&doc, page_id, page_num, dir) {
                    Ok(mut images) => content.images.append(&mut images),
                    Err(e) => log::warn!("skipping images on page {}: {}", page_num, e),
                }
            }

            content.links.extend(extract_page_links(&doc, page_id));
        }

        if content.pages.iter().all(|page| page.trim().is_empty()) {
            log::debug!("lopdf produced no text for {}, trying pdf-extract", filename);
            let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
                Error::ExtractionError(format!("no extractable text in {}: {}", filename, e))
            })?;
            // Page boundaries are lost in the fallback
            content.pages = vec![text];
        }

        Ok(content)
    }
}

/// Walk the page's XObject resources and write each image stream to disk.
///
/// Only DCT (JPEG) and JPX (JPEG 2000) streams carry a self-contained file
/// format; other filters hold raw raster data and are skipped. A failure on
/// one image skips that image, not the page.
fn extract_page_images(
    doc: &Document,
    page_id: ObjectId,
    page_num: u32,
    dir: &Path,
) -> Result<Vec<ImageAsset>> {
    let mut images = Vec::new();

    let page = doc
        .get_dictionary(page_id)
        .map_err(|e| Error::PdfParseError(format!("missing page dictionary: {}", e)))?;
    let Ok(resources) = page.get(b"Resources") else {
        return Ok(images);
    };
    let resources = resolve(doc, resources)?
        .as_dict()
        .map_err(|e| Error::PdfParseError(format!("bad Resources entry: {}", e)))?;
    let Ok(xobjects) = resources.get(b"XObject") else {
        return Ok(images);
    };
    let xobjects = resolve(doc, xobjects)?
        .as_dict()
        .map_err(|e| Error::PdfParseError(format!("bad XObject entry: {}", e)))?;

    let mut index = 0;
    for (_name, object) in xobjects.iter() {
        let stream = match resolve(doc, object).and_then(|obj| {
            obj.as_stream()
                .map_err(|e| Error::PdfParseError(e.to_string()))
        }) {
            Ok(stream) => stream,
            Err(e) => {
                log::warn!("unreadable XObject on page {}: {}", page_num, e);
                continue;
            }
        };

        if !is_image_stream(&stream.dict) {
            continue;
        }

        let Some(ext) = image_extension(&stream.dict) else {
            log::debug!("skipping image with unsupported filter on page {}", page_num);
            continue;
        };

        let path = dir.join(image_filename(page_num as usize, index, ext));
        if let Err(e) = std::fs::write(&path, &stream.content) {
            log::warn!("failed to write {}: {}", path.display(), e);
            continue;
        }

        images.push(ImageAsset::new(
            page_num as usize,
            index,
            path.to_string_lossy().into_owned(),
        ));
        index += 1;
    }

    Ok(images)
}

/// Collect URI link annotations on the page that pass the keyword filter.
fn extract_page_links(doc: &Document, page_id: ObjectId) -> Vec<String> {
    let mut links = Vec::new();

    let Ok(page) = doc.get_dictionary(page_id) else {
        return links;
    };
    let Ok(annots) = page.get(b"Annots") else {
        return links;
    };
    let Ok(annots) = resolve(doc, annots).and_then(|obj| {
        obj.as_array()
            .map_err(|e| Error::PdfParseError(e.to_string()))
    }) else {
        return links;
    };

    for annot in annots {
        let Some(uri) = annotation_uri(doc, annot) else {
            continue;
        };
        if is_video_link(&uri) {
            links.push(uri);
        }
    }

    links
}

/// Pull the URI out of a link annotation with a URI action, if it is one.
fn annotation_uri(doc: &Document, annot: &Object) -> Option<String> {
    let dict = resolve(doc, annot).ok()?.as_dict().ok()?;
    if dict.get(b"Subtype").ok()?.as_name().ok()? != b"Link".as_slice() {
        return None;
    }

    let action = resolve(doc, dict.get(b"A").ok()?).ok()?.as_dict().ok()?;
    if action.get(b"S").ok()?.as_name().ok()? != b"URI".as_slice() {
        return None;
    }

    let uri = action.get(b"URI").ok()?.as_str().ok()?;
    Some(String::from_utf8_lossy(uri).into_owned())
}

/// Follow a reference one hop; direct objects pass through.
fn resolve<'a>(doc: &'a Document, object: &'a Object) -> Result<&'a Object> {
    match object {
        Object::Reference(id) => doc
            .get_object(*id)
            .map_err(|e| Error::PdfParseError(format!("dangling reference: {}", e))),
        other => Ok(other),
    }
}

fn is_image_stream(dict: &Dictionary) -> bool {
    dict.get(b"Subtype")
        .and_then(|obj| obj.as_name())
        .map(|name| name == b"Image".as_slice())
        .unwrap_or(false)
}

/// Map the stream's filter to a file extension, if the encoded data is a
/// self-contained image format.
fn image_extension(dict: &Dictionary) -> Option<&'static str> {
    let filter = dict.get(b"Filter").ok()?;
    let name = match filter {
        Object::Name(name) => name.as_slice(),
        // With a filter chain the last filter determines the stored format
        Object::Array(filters) => match filters.last()? {
            Object::Name(name) => name.as_slice(),
            _ => return None,
        },
        _ => return None,
    };

    match name {
        b"DCTDecode" => Some("jpg"),
        b"JPXDecode" => Some("jp2"),
        _ => None,
    }
}

fn image_filename(page: usize, index: usize, ext: &str) -> String {
    format!("page{}_img{}.{}", page, index, ext)
}

fn is_video_link(uri: &str) -> bool {
    let lower = uri.to_lowercase();
    LINK_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}
