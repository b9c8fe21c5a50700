//! Minimal PDF writer.
//!
//! Emits PDF 1.4 documents with text-only pages using the built-in
//! Helvetica, Helvetica-Bold, and Courier fonts with WinAnsi encoding.
//! Nothing beyond what the export feature needs: pages, positioned text,
//! document info, cross-reference table. Characters without a WinAnsi
//! mapping are replaced with `?`.

use std::io::Write;

/// A4 page width in points.
pub const A4_WIDTH_PT: f32 = 595.28;
/// A4 page height in points.
pub const A4_HEIGHT_PT: f32 = 841.89;

/// The three embedded base fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfFont {
    Helvetica,
    HelveticaBold,
    Courier,
}

impl PdfFont {
    /// Resource name used inside content streams.
    fn resource(self) -> &'static str {
        match self {
            PdfFont::Helvetica => "/F1",
            PdfFont::HelveticaBold => "/F2",
            PdfFont::Courier => "/F3",
        }
    }

    fn base_font(self) -> &'static str {
        match self {
            PdfFont::Helvetica => "Helvetica",
            PdfFont::HelveticaBold => "Helvetica-Bold",
            PdfFont::Courier => "Courier",
        }
    }
}

/// Incrementally built PDF document.
#[derive(Debug, Default)]
pub struct PdfWriter {
    /// One content stream per page.
    pages: Vec<Vec<u8>>,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new empty page. Subsequent text lands on it.
    pub fn start_page(&mut self) {
        self.pages.push(Vec::new());
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Draw a line of text with its baseline at `(x, y)` (PDF coordinates,
    /// origin at the bottom-left of the page).
    pub fn draw_text(&mut self, x: f32, y: f32, font: PdfFont, size: f32, text: &str) {
        if self.pages.is_empty() {
            self.start_page();
        }
        let content = self.pages.last_mut().expect("page exists");
        let _ = write!(
            content,
            "BT {} {:.2} Tf {:.2} {:.2} Td (",
            font.resource(),
            size,
            x,
            y
        );
        content.extend_from_slice(&escape_text(text));
        let _ = content.write_all(b") Tj ET\n");
    }

    /// Assemble the final document bytes.
    pub fn finish(&self, title: &str, creation_date: &str) -> Vec<u8> {
        // Object layout: 1 catalog, 2 page tree, 3-5 fonts, 6 info, then
        // alternating page/content objects.
        let page_count = self.pages.len().max(1);
        let first_page_obj = 7usize;
        let object_count = 6 + 2 * page_count;

        let mut out: Vec<u8> = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

        let mut offsets: Vec<usize> = Vec::with_capacity(object_count);
        let mut push_object = |out: &mut Vec<u8>, offsets: &mut Vec<usize>, id: usize, body: &[u8]| {
            offsets.push(out.len());
            let _ = write!(out, "{id} 0 obj\n");
            out.extend_from_slice(body);
            out.extend_from_slice(b"\nendobj\n");
        };

        push_object(
            &mut out,
            &mut offsets,
            1,
            b"<< /Type /Catalog /Pages 2 0 R >>",
        );

        let kids: Vec<String> = (0..page_count)
            .map(|i| format!("{} 0 R", first_page_obj + 2 * i))
            .collect();
        push_object(
            &mut out,
            &mut offsets,
            2,
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids.join(" "),
                page_count
            )
            .as_bytes(),
        );

        for (i, font) in [PdfFont::Helvetica, PdfFont::HelveticaBold, PdfFont::Courier]
            .iter()
            .enumerate()
        {
            push_object(
                &mut out,
                &mut offsets,
                3 + i,
                format!(
                    "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                    font.base_font()
                )
                .as_bytes(),
            );
        }

        push_object(
            &mut out,
            &mut offsets,
            6,
            format!(
                "<< /Title ({}) /Producer (nexora) /CreationDate (D:{}) >>",
                String::from_utf8_lossy(&escape_text(title)),
                creation_date
            )
            .as_bytes(),
        );

        let empty: Vec<u8> = Vec::new();
        for i in 0..page_count {
            let page_obj = first_page_obj + 2 * i;
            let content_obj = page_obj + 1;
            push_object(
                &mut out,
                &mut offsets,
                page_obj,
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {A4_WIDTH_PT:.2} {A4_HEIGHT_PT:.2}] \
                     /Resources << /Font << /F1 3 0 R /F2 4 0 R /F3 5 0 R >> >> \
                     /Contents {content_obj} 0 R >>"
                )
                .as_bytes(),
            );

            let content = self.pages.get(i).unwrap_or(&empty);
            let mut body = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
            body.extend_from_slice(content);
            body.extend_from_slice(b"\nendstream");
            push_object(&mut out, &mut offsets, content_obj, &body);
        }

        let xref_offset = out.len();
        let _ = write!(out, "xref\n0 {}\n", object_count + 1);
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            let _ = write!(out, "{offset:010} 00000 n \n");
        }
        let _ = write!(
            out,
            "trailer\n<< /Size {} /Root 1 0 R /Info 6 0 R >>\nstartxref\n{}\n%%EOF\n",
            object_count + 1,
            xref_offset
        );

        out
    }
}

/// Escape text for a PDF string literal and encode to WinAnsi bytes.
fn escape_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' => out.extend_from_slice(b"\\("),
            ')' => out.extend_from_slice(b"\\)"),
            '\\' => out.extend_from_slice(b"\\\\"),
            _ => out.push(winansi_byte(ch)),
        }
    }
    out
}

/// Map a char to its WinAnsi code point, `?` when unmappable.
fn winansi_byte(ch: char) -> u8 {
    let code = ch as u32;
    match ch {
        // Typographic characters living in the 0x80-0x9F window.
        '€' => 0x80,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        _ if (0x20..=0x7E).contains(&code) => code as u8,
        _ if (0xA0..=0xFF).contains(&code) => code as u8,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_simple(pages: usize) -> Vec<u8> {
        let mut pdf = PdfWriter::new();
        for i in 0..pages {
            pdf.start_page();
            pdf.draw_text(
                40.0,
                800.0,
                PdfFont::Helvetica,
                11.0,
                &format!("page {i}"),
            );
        }
        pdf.finish("test", "20250101000000")
    }

    #[test]
    fn test_header_and_trailer() {
        let bytes = build_simple(1);
        assert!(bytes.starts_with(b"%PDF-1.4"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.trim_end().ends_with("%%EOF"));
        assert!(text.contains("startxref"));
    }

    #[test]
    fn test_page_count_in_tree() {
        let bytes = build_simple(3);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 3"));
        assert_eq!(text.matches("/Type /Page ").count(), 3);
    }

    #[test]
    fn test_media_box_is_a4() {
        let bytes = build_simple(1);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/MediaBox [0 0 595.28 841.89]"));
    }

    #[test]
    fn test_text_appears_in_content_stream() {
        let bytes = build_simple(1);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("(page 0) Tj"));
    }

    #[test]
    fn test_escaping_parens_and_backslash() {
        assert_eq!(escape_text(r"a(b)c\d"), b"a\\(b\\)c\\\\d".to_vec());
    }

    #[test]
    fn test_winansi_mapping() {
        assert_eq!(winansi_byte('A'), b'A');
        assert_eq!(winansi_byte('é'), 0xE9);
        assert_eq!(winansi_byte('•'), 0x95);
        assert_eq!(winansi_byte('→'), b'?');
    }

    #[test]
    fn test_finish_without_pages_yields_one_blank_page() {
        let pdf = PdfWriter::new();
        let text_bytes = pdf.finish("empty", "20250101000000");
        let text = String::from_utf8_lossy(&text_bytes);
        assert!(text.contains("/Count 1"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let bytes = build_simple(2);
        let text = String::from_utf8_lossy(&bytes);
        // Every xref entry must point at an "N 0 obj" header.
        let xref_start = text.find("xref\n").unwrap();
        for line in text[xref_start..].lines().skip(3) {
            if !line.ends_with("n ") {
                break;
            }
            let offset: usize = line[..10].parse().unwrap();
            let at = String::from_utf8_lossy(&bytes[offset..]);
            assert!(at.contains(" 0 obj"), "offset {offset} not at an object");
        }
    }
}
