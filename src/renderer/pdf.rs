//! Single-page PDF writer
//!
//! Emits PDF 1.4 with one uncompressed content stream. No dates or ids are
//! written, so identical canvases give identical bytes.

use crate::font::MM_TO_PT;
use crate::scene::{Canvas, Color};

use super::path::{format_number, path_to_operators, Operators};

const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const PAGE_ID: usize = 3;
const CONTENTS_ID: usize = 4;

/// Serialize a canvas as a one-page PDF sized in points
pub fn canvas_to_pdf(canvas: &Canvas) -> Vec<u8> {
    let content = content_stream(canvas);
    let width = format_number(canvas.width() * MM_TO_PT, 4, false);
    let height = format_number(canvas.height() * MM_TO_PT, 4, false);

    let mut writer = PdfWriter::new();
    writer.write_object(
        CATALOG_ID,
        &format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_ID),
    );
    writer.write_object(
        PAGES_ID,
        &format!("<< /Type /Pages /Kids [{} 0 R] /Count 1 >>", PAGE_ID),
    );
    writer.write_object(
        PAGE_ID,
        &format!(
            "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] /Resources << >> /Contents {} 0 R >>",
            PAGES_ID, width, height, CONTENTS_ID
        ),
    );
    writer.write_stream(CONTENTS_ID, content.as_bytes());
    writer.finish()
}

fn content_stream(canvas: &Canvas) -> String {
    let scale = format_number(MM_TO_PT, 6, false);
    let mut out = format!("q\n{scale} 0 0 {scale} 0 0 cm\n");

    out.push_str(&fill_color(canvas.background()));
    out.push_str(&format!(
        "0 0 {} {} re\nf\n",
        format_number(canvas.width(), 4, false),
        format_number(canvas.height(), 4, false)
    ));
    for item in canvas.items() {
        let ops = path_to_operators(&item.path, Operators::Pdf, 4);
        if ops.is_empty() {
            continue;
        }
        out.push_str(&fill_color(item.fill));
        out.push_str(&ops);
        out.push_str("f\n");
    }
    out.push_str("Q\n");
    out
}

fn fill_color(color: Color) -> String {
    let [r, g, b] = color.unit_components().map(|c| format_number(c, 4, false));
    format!("{r} {g} {b} rg\n")
}

/// Tracks byte offsets so the cross-reference table can be written
struct PdfWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new() -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    fn begin_object(&mut self, id: usize) {
        if self.offsets.len() < id {
            self.offsets.resize(id, 0);
        }
        self.offsets[id - 1] = self.buf.len();
        self.buf
            .extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
    }

    fn write_object(&mut self, id: usize, body: &str) {
        self.begin_object(id);
        self.buf.extend_from_slice(body.as_bytes());
        self.buf.extend_from_slice(b"\nendobj\n");
    }

    fn write_stream(&mut self, id: usize, data: &[u8]) {
        self.begin_object(id);
        self.buf
            .extend_from_slice(format!("<< /Length {} >>\nstream\n", data.len()).as_bytes());
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"\nendstream\nendobj\n");
    }

    fn finish(mut self) -> Vec<u8> {
        let xref_start = self.buf.len();
        let count = self.offsets.len() + 1;
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", count);
        for offset in &self.offsets {
            xref.push_str(&format!("{:010} 00000 n \n", offset));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            count, CATALOG_ID, xref_start
        ));
        self.buf.extend_from_slice(xref.as_bytes());
        self.buf
    }
}
