//! Page layout primitives for the exported quiz.
//!
//! printpdf only places text at absolute coordinates, so this module
//! carries the cursor state an FPDF-style API would: a current y position
//! that advances line by line and rolls over to a fresh page when a line
//! would cross the bottom margin.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocumentReference, PdfLayerReference};

use crate::error::ExportError;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_TOP_MM: f32 = 15.0;
pub const MARGIN_BOTTOM_MM: f32 = 15.0;
pub const MARGIN_LEFT_MM: f32 = 10.0;
pub const MARGIN_RIGHT_MM: f32 = 10.0;

/// Left indentation for option and answer-key lines.
pub const X_OFFSET_MM: f32 = 20.0;

const PT_TO_MM: f32 = 0.352_778;

/// Average Helvetica glyph advance as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;

/// The three Helvetica faces used by the export.
pub struct Faces {
    pub regular: IndirectFontRef,
    pub bold: IndirectFontRef,
    pub italic: IndirectFontRef,
}

impl Faces {
    pub fn load(doc: &PdfDocumentReference) -> Result<Self, ExportError> {
        Ok(Self {
            regular: builtin(doc, BuiltinFont::Helvetica)?,
            bold: builtin(doc, BuiltinFont::HelveticaBold)?,
            italic: builtin(doc, BuiltinFont::HelveticaOblique)?,
        })
    }
}

fn builtin(doc: &PdfDocumentReference, font: BuiltinFont) -> Result<IndirectFontRef, ExportError> {
    doc.add_builtin_font(font)
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

/// Estimated width of `text` at `size` points, in millimetres.
pub fn text_width_mm(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH_WIDTH * PT_TO_MM
}

/// Greedy word wrap against a width budget in millimetres.
///
/// A single word wider than the budget gets a line of its own rather than
/// being broken mid-word. Empty text still yields one (empty) line so the
/// block keeps its row spacing.
pub fn wrap_text(text: &str, size: f32, max_width_mm: f32) -> Vec<String> {
    let glyph_mm = size * AVG_GLYPH_WIDTH * PT_TO_MM;
    let budget = ((max_width_mm / glyph_mm) as usize).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= budget {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Cursor over a growing document: tracks the current layer and y position,
/// starting fresh pages when a line would run past the bottom margin.
pub struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> Cursor<'a> {
    pub fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT_MM - MARGIN_TOP_MM,
        }
    }

    /// Start a fresh page and move the cursor to its top.
    pub fn break_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT_MM - MARGIN_TOP_MM;
    }

    fn put_line(
        &mut self,
        text: &str,
        font: &IndirectFontRef,
        size: f32,
        x: f32,
        line_height_mm: f32,
    ) {
        if self.y - line_height_mm < MARGIN_BOTTOM_MM {
            self.break_page();
        }
        self.y -= line_height_mm;
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    /// Print `text` wrapped to the right margin, every line starting at `x`.
    pub fn text_block(
        &mut self,
        text: &str,
        font: &IndirectFontRef,
        size: f32,
        x: f32,
        line_height_mm: f32,
    ) {
        let width = PAGE_WIDTH_MM - MARGIN_RIGHT_MM - x;
        for line in wrap_text(text, size, width) {
            self.put_line(&line, font, size, x, line_height_mm);
        }
    }

    /// Print a single horizontally centered line (titles).
    pub fn centered(&mut self, text: &str, font: &IndirectFontRef, size: f32, line_height_mm: f32) {
        let x = (PAGE_WIDTH_MM - text_width_mm(text, size)) / 2.0;
        self.put_line(text, font, size, x.max(MARGIN_LEFT_MM), line_height_mm);
    }

    /// Vertical gap. Clamped at the bottom margin; overflow is handled by
    /// the next line's page break.
    pub fn gap(&mut self, mm: f32) {
        self.y = (self.y - mm).max(MARGIN_BOTTOM_MM);
    }
}
