//! 5x7 bitmap font for on-screen prompts
//!
//! Each glyph is seven rows of five bits, most significant bit on the left.
//! Text is drawn as one quad per lit cell, so a cell is `scale` pixels wide.

/// Cells per glyph row
pub const GLYPH_COLUMNS: i32 = 5;
/// Rows per glyph
pub const GLYPH_ROWS: i32 = 7;
/// Horizontal cells from one glyph to the next (one blank column)
pub const GLYPH_ADVANCE: i32 = GLYPH_COLUMNS + 1;

type Glyph = [u8; GLYPH_ROWS as usize];

const LETTERS: [Glyph; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

/// Bitmap for a character, case-insensitive. `None` renders as a gap.
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    let ch = ch.to_ascii_uppercase();
    if ch.is_ascii_uppercase() {
        LETTERS.get((ch as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Width in pixels of `text` drawn at `scale` pixels per cell
pub fn text_width(text: &str, scale: i32) -> i32 {
    let chars = text.chars().count() as i32;
    if chars == 0 {
        return 0;
    }
    (chars * GLYPH_ADVANCE - 1) * scale
}

/// Height in pixels of a line of text at `scale`
pub fn text_height(scale: i32) -> i32 {
    GLYPH_ROWS * scale
}

/// Lit cells of a glyph as (column, row) pairs
pub fn lit_cells(glyph: &Glyph) -> impl Iterator<Item = (i32, i32)> + '_ {
    glyph.iter().enumerate().flat_map(|(row, bits)| {
        (0..GLYPH_COLUMNS)
            .filter(move |col| bits & (1 << (GLYPH_COLUMNS - 1 - col)) != 0)
            .map(move |col| (col, row as i32))
    })
}
