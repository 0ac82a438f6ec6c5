//! A fixed-coordinate drawing surface backed by `printpdf`.
//!
//! The canvas records drawing operations in page coordinates (points from the
//! bottom-left corner) and only touches the PDF backend when the finished
//! document is serialized.  Keeping the operation list inspectable makes the
//! layout logic testable without parsing PDF output, and guarantees each
//! render call owns its drawing state from start to finish.

use log::debug;
use printpdf::{BuiltinFont, Line, Mm, PdfDocument, Point};

use crate::error::RenderError;
use crate::metrics;

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MM_PER_POINT: f64 = 25.4 / 72.0;
const RULE_THICKNESS: f64 = 1.0;

/// Typefaces available on the statement.  Both are PDF standard-14 faces, so
/// no font files need to be bundled or loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Font {
    /// Helvetica regular.
    Helvetica,
    /// Helvetica bold.
    HelveticaBold,
}

/// A recorded drawing operation.  Coordinates are in points from the
/// bottom-left corner of the page; text positions are baseline starts.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    /// A run of text drawn at a fixed baseline position.
    Text {
        font: Font,
        size: f64,
        x: f64,
        y: f64,
        text: String,
    },
    /// A stroked line segment.
    Rule { x1: f64, y1: f64, x2: f64, y2: f64 },
}

/// Single-page drawing surface with a current-font state, mirroring the
/// draw-string/draw-right-string vocabulary of classic report canvases.
///
/// One canvas produces one document; nothing is shared between instances.
#[derive(Debug)]
pub struct Canvas {
    ops: Vec<Op>,
    font: Font,
    size: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Creates an empty canvas with the default text state.
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            font: Font::Helvetica,
            size: 12.0,
        }
    }

    /// Sets the font used by subsequent text operations.
    pub fn set_font(&mut self, font: Font, size: f64) {
        self.font = font;
        self.size = size;
    }

    /// Draws `text` with its baseline starting at `(x, y)`.
    pub fn draw_string(&mut self, x: f64, y: f64, text: impl Into<String>) {
        self.ops.push(Op::Text {
            font: self.font,
            size: self.size,
            x,
            y,
            text: text.into(),
        });
    }

    /// Draws `text` so that its right edge ends at `right_x`.
    pub fn draw_right_string(&mut self, right_x: f64, y: f64, text: impl Into<String>) {
        let text = text.into();
        let x = right_x - metrics::string_width(self.font, self.size, &text);
        self.ops.push(Op::Text {
            font: self.font,
            size: self.size,
            x,
            y,
            text,
        });
    }

    /// Draws a horizontal or arbitrary rule between two points.
    pub fn rule(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ops.push(Op::Rule { x1, y1, x2, y2 });
    }

    /// Returns the operations recorded so far, in draw order.
    pub fn operations(&self) -> &[Op] {
        &self.ops
    }

    /// Replays the recorded operations onto a fresh single-page A4 document
    /// and returns the serialized bytes.
    pub fn finish(self, title: &str) -> Result<Vec<u8>, RenderError> {
        let (document, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Page 1");
        let layer = document.get_page(page).get_layer(layer);

        let regular = document.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = document.add_builtin_font(BuiltinFont::HelveticaBold)?;

        layer.set_outline_thickness(RULE_THICKNESS);
        for op in &self.ops {
            match op {
                Op::Text {
                    font,
                    size,
                    x,
                    y,
                    text,
                } => {
                    let font_ref = match font {
                        Font::Helvetica => &regular,
                        Font::HelveticaBold => &bold,
                    };
                    layer.use_text(text.clone(), *size, mm(*x), mm(*y), font_ref);
                }
                Op::Rule { x1, y1, x2, y2 } => {
                    layer.add_shape(Line {
                        points: vec![
                            (Point::new(mm(*x1), mm(*y1)), false),
                            (Point::new(mm(*x2), mm(*y2)), false),
                        ],
                        is_closed: false,
                        has_fill: false,
                        has_stroke: true,
                        is_clipping_path: false,
                    });
                }
            }
        }

        debug!("serializing canvas with {} operations", self.ops.len());
        Ok(document.save_to_bytes()?)
    }
}

fn mm(points: f64) -> Mm {
    Mm(points * MM_PER_POINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_records_nothing() {
        assert!(Canvas::new().operations().is_empty());
    }

    #[test]
    fn set_font_applies_to_subsequent_text() {
        let mut canvas = Canvas::new();
        canvas.set_font(Font::HelveticaBold, 16.0);
        canvas.draw_string(72.0, 756.0, "SALARY SLIP");

        match &canvas.operations()[0] {
            Op::Text { font, size, .. } => {
                assert_eq!(*font, Font::HelveticaBold);
                assert_eq!(*size, 16.0);
            }
            other => panic!("expected a text op, got {other:?}"),
        }
    }

    #[test]
    fn right_aligned_text_ends_at_the_given_edge() {
        let mut canvas = Canvas::new();
        canvas.set_font(Font::Helvetica, 10.0);
        canvas.draw_right_string(252.0, 600.0, "500.00");

        match &canvas.operations()[0] {
            Op::Text { x, text, .. } => {
                let width = metrics::string_width(Font::Helvetica, 10.0, text);
                assert!((x + width - 252.0).abs() < 1e-9);
            }
            other => panic!("expected a text op, got {other:?}"),
        }
    }

    #[test]
    fn operations_preserve_draw_order() {
        let mut canvas = Canvas::new();
        canvas.draw_string(72.0, 720.0, "first");
        canvas.rule(36.0, 700.0, 540.0, 700.0);
        canvas.draw_string(72.0, 680.0, "second");

        let kinds: Vec<_> = canvas
            .operations()
            .iter()
            .map(|op| matches!(op, Op::Rule { .. }))
            .collect();
        assert_eq!(kinds, vec![false, true, false]);
    }

    #[test]
    fn finish_produces_a_pdf_header() {
        let mut canvas = Canvas::new();
        canvas.draw_string(72.0, 720.0, "hello");
        let bytes = canvas.finish("test").expect("serialize canvas");
        assert!(bytes.starts_with(b"%PDF"));
    }
}
