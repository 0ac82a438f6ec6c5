//! Advance widths for the builtin Helvetica faces.
//!
//! The statement is set in the PDF standard-14 Helvetica family, which ships
//! with every viewer and therefore has no font file on disk to measure.
//! Right-aligned amounts still need exact string widths, so the well-known
//! AFM advance widths (in 1/1000 em) are embedded here for the printable
//! ASCII range.

use crate::canvas::Font;

/// Nominal advance used for characters outside the embedded tables.  Right
/// alignment degrades slightly for such input instead of failing.
const FALLBACK_ADVANCE: u16 = 556;

const FIRST_CHAR: usize = 0x20;
const LAST_CHAR: usize = 0x7e;

#[rustfmt::skip]
const HELVETICA: [u16; LAST_CHAR - FIRST_CHAR + 1] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; LAST_CHAR - FIRST_CHAR + 1] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Returns the advance width of `ch` in 1/1000 em for the given face.
pub fn advance(font: Font, ch: char) -> u16 {
    let table = match font {
        Font::Helvetica => &HELVETICA,
        Font::HelveticaBold => &HELVETICA_BOLD,
    };
    let code = ch as usize;
    if (FIRST_CHAR..=LAST_CHAR).contains(&code) {
        table[code - FIRST_CHAR]
    } else {
        FALLBACK_ADVANCE
    }
}

/// Measures `text` in points at the given font size.
pub fn string_width(font: Font, size: f64, text: &str) -> f64 {
    let total: u64 = text.chars().map(|ch| u64::from(advance(font, ch))).sum();
    total as f64 * size / 1000.0
}
