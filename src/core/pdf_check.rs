//! PDF integrity check
//!
//! A PDF is usable when lopdf can parse it and the trailer points at a
//! non-empty document information dictionary.

use anyhow::{Context, Result};
use lopdf::{Dictionary, Document, Object};
use std::fs::File;
use std::io::BufReader;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use super::outcome::{Outcome, Reason};
use super::validator::FileCheck;

pub struct PdfCheck;

impl FileCheck for PdfCheck {
    fn check(&self, path: &Path) -> Outcome {
        check_pdf(path)
    }
}

/// Parse a PDF file and inspect its metadata
///
/// # Returns
/// `Outcome::Usable` for a parseable PDF with metadata,
/// `Reason::BadMetadata` when the info dictionary is missing or empty,
/// `Reason::Underlying` when the file cannot be opened or parsed
pub fn check_pdf(path: &Path) -> Outcome {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => return Outcome::underlying(e),
    };

    // Wrap in catch_unwind for panic isolation on hostile input
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        Document::load_from(BufReader::new(file))
    }));

    let doc = match result {
        Ok(Ok(doc)) => doc,
        Ok(Err(e)) => return Outcome::underlying(e),
        Err(_panic) => return Outcome::underlying("PDF parser panicked while reading the file"),
    };

    match info_dictionary(&doc) {
        Ok(info) if !info.is_empty() => Outcome::Usable,
        Ok(_) => {
            log::debug!("{}: document information dictionary is empty", path.display());
            Outcome::Corrupted(Reason::BadMetadata)
        }
        Err(e) => {
            log::debug!("{}: {:#}", path.display(), e);
            Outcome::Corrupted(Reason::BadMetadata)
        }
    }
}

/// Resolve the trailer's /Info entry, following an indirect reference
fn info_dictionary(doc: &Document) -> Result<&Dictionary> {
    let info = doc
        .trailer
        .get(b"Info")
        .context("trailer has no /Info entry")?;

    let info = match info {
        Object::Reference(id) => doc
            .get_object(*id)
            .context("/Info points at a missing object")?,
        direct => direct,
    };

    info.as_dict().context("/Info is not a dictionary")
}
