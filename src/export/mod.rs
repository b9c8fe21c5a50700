//! PDF export of a generated result.
//!
//! Renders the markdown document with the print layout, paginates onto A4
//! pages with fixed margins, and writes `{mode}-result.pdf` into the
//! export directory.

pub mod pdf;

use std::path::{Path, PathBuf};

use crate::markdown::print::{self, PrintLine, PrintStyle};
use crate::markdown::Document;
use crate::modes::Mode;
use pdf::{PdfFont, PdfWriter, A4_HEIGHT_PT};

/// Page margin on all sides, in points.
const MARGIN_PT: f32 = 40.0;

/// Characters per body line. Derived from the printable A4 width at the
/// body font size; headings share the same wrap width.
const WRAP_WIDTH_CHARS: usize = 90;

/// Error type for export operations.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write PDF: {0}")]
    Io(#[from] std::io::Error),
}

/// A completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// Where the file was written.
    pub path: PathBuf,
    /// Number of A4 pages produced.
    pub pages: usize,
}

/// Directory exports land in: the platform download directory when one
/// exists, the working directory otherwise.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Font, size, and line advance for a print style.
fn type_for(style: PrintStyle) -> (PdfFont, f32, f32) {
    match style {
        PrintStyle::Heading(1) => (PdfFont::HelveticaBold, 18.0, 26.0),
        PrintStyle::Heading(2) => (PdfFont::HelveticaBold, 15.0, 22.0),
        PrintStyle::Heading(3) => (PdfFont::HelveticaBold, 13.0, 19.0),
        PrintStyle::Heading(_) => (PdfFont::HelveticaBold, 11.0, 16.0),
        PrintStyle::Body => (PdfFont::Helvetica, 11.0, 15.0),
        PrintStyle::Code => (PdfFont::Courier, 10.0, 13.0),
    }
}

/// Paginate laid-out lines onto A4 pages.
fn paginate(lines: &[PrintLine]) -> PdfWriter {
    let mut pdf = PdfWriter::new();
    pdf.start_page();
    let top = A4_HEIGHT_PT - MARGIN_PT;
    let mut y = top;

    for line in lines {
        let (font, size, leading) = type_for(line.style);
        if y - leading < MARGIN_PT {
            pdf.start_page();
            y = top;
        }
        y -= leading;
        if !line.text.is_empty() {
            pdf.draw_text(MARGIN_PT, y, font, size, &line.text);
        }
    }

    pdf
}

/// Write `{mode}-result.pdf` for the given document into `dir`.
pub fn write_pdf(mode: Mode, doc: &Document, dir: &Path) -> Result<ExportOutcome, ExportError> {
    let lines = print::layout(doc, WRAP_WIDTH_CHARS);
    let pdf = paginate(&lines);

    let title = format!("Nexora {} result", mode.spec().title);
    let stamp = chrono::Utc::now().format("%Y%m%d%H%M%S").to_string();
    let bytes = pdf.finish(&title, &stamp);

    let path = dir.join(mode.export_filename());
    std::fs::write(&path, &bytes)?;

    let outcome = ExportOutcome {
        path,
        pages: pdf.page_count(),
    };
    tracing::info!(path = %outcome.path.display(), pages = outcome.pages, "exported result");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parse;

    #[test]
    fn test_short_document_fits_one_page() {
        let doc = parse("# Title\n\nOne paragraph.");
        let lines = print::layout(&doc, WRAP_WIDTH_CHARS);
        let pdf = paginate(&lines);
        assert_eq!(pdf.page_count(), 1);
    }

    #[test]
    fn test_long_document_paginates() {
        let body = "A paragraph of reasonable length.\n\n".repeat(120);
        let doc = parse(&body);
        let lines = print::layout(&doc, WRAP_WIDTH_CHARS);
        let pdf = paginate(&lines);
        assert!(pdf.page_count() > 1, "expected multiple pages");
    }

    #[test]
    fn test_write_pdf_names_file_after_mode() {
        let dir = tempfile::tempdir().unwrap();
        let doc = parse("# Hello");
        let outcome = write_pdf(Mode::Research, &doc, dir.path()).unwrap();
        assert_eq!(
            outcome.path.file_name().unwrap().to_str().unwrap(),
            "research-result.pdf"
        );
        let bytes = std::fs::read(&outcome.path).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn test_write_pdf_missing_dir_errors() {
        let doc = parse("# Hello");
        let result = write_pdf(Mode::Plan, &doc, Path::new("/nonexistent/nexora"));
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
