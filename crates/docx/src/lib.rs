//! DOCX rendering of appraisal records.
//!
//! Takes a canonical [`AppraisalRecord`] and produces the filled PBAS
//! proforma as an in-memory `.docx` (OOXML zip) byte buffer. Rendering is
//! pure: same record in, same document out, with no I/O besides the
//! in-memory pack step.

mod boilerplate;
mod template;

use pbas_core::AppraisalRecord;
use std::io::Cursor;
use thiserror::Error;

/// MIME type of the generated documents.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Error, Debug)]
pub enum DocxError {
    /// The OOXML zip container could not be assembled.
    #[error("failed to pack document: {0}")]
    Pack(String),
}

pub type DocxResult<T> = Result<T, DocxError>;

/// Render one appraisal record into a complete `.docx` byte buffer.
pub fn render(record: &AppraisalRecord) -> DocxResult<Vec<u8>> {
    let docx = template::build(record);

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| DocxError::Pack(e.to_string()))?;

    Ok(cursor.into_inner())
}
