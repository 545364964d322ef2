//! Six-dot braille cells and their Unicode encoding.
//!
//! Dot layout and bit positions:
//!
//! ```text
//! 1 ● ● 4      bit 0 | bit 3
//! 2 ● ● 5      bit 1 | bit 4
//! 3 ● ● 6      bit 2 | bit 5
//! ```
//!
//! A cell is rendered as `U+2800 + pattern`. Eight-dot patterns
//! (U+2840..U+28FF) are not cells in this crate.

use std::fmt;

/// First codepoint of the Unicode braille block (the blank cell).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Last codepoint of the six-dot subset.
pub const BRAILLE_SIX_DOT_MAX: u32 = 0x283F;

const LEFT_COLUMN: u8 = 0b000111;
const RIGHT_COLUMN: u8 = 0b111000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrailleCell(u8);

impl BrailleCell {
    /// The cell with no raised dots (U+2800), used as the braille space.
    pub const BLANK: BrailleCell = BrailleCell(0);

    /// Build a cell from a dot pattern. Returns `None` above 0b111111.
    pub const fn new(dots: u8) -> Option<Self> {
        if dots <= LEFT_COLUMN | RIGHT_COLUMN {
            Some(BrailleCell(dots))
        } else {
            None
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let cp = c as u32;
        if (BRAILLE_BASE..=BRAILLE_SIX_DOT_MAX).contains(&cp) {
            Some(BrailleCell((cp - BRAILLE_BASE) as u8))
        } else {
            None
        }
    }

    pub fn to_char(self) -> char {
        char::from_u32(BRAILLE_BASE + self.0 as u32).unwrap_or('\u{2800}')
    }

    pub fn dots(self) -> u8 {
        self.0
    }

    /// Whether dot `dot` (1..=6) is raised. Out-of-range dots are never raised.
    pub fn is_raised(self, dot: u8) -> bool {
        (1..=6).contains(&dot) && self.0 & (1 << (dot - 1)) != 0
    }

    /// Point reflection across the vertical axis: dots 1↔4, 2↔5, 3↔6.
    pub fn mirrored(self) -> Self {
        BrailleCell(((self.0 & LEFT_COLUMN) << 3) | ((self.0 & RIGHT_COLUMN) >> 3))
    }
}

impl fmt::Display for BrailleCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A non-empty run of cells, the value type of every mapping-table entry.
///
/// Most kana are one cell; voiced, semi-voiced and combined kana carry a
/// prefix cell in front of the base.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Braille(Box<[BrailleCell]>);

impl Braille {
    /// Parse a string made only of six-dot braille characters.
    pub fn parse(s: &str) -> Option<Self> {
        let cells: Option<Vec<BrailleCell>> = s.chars().map(BrailleCell::from_char).collect();
        match cells {
            Some(cells) if !cells.is_empty() => Some(Braille(cells.into_boxed_slice())),
            _ => None,
        }
    }

    pub fn cells(&self) -> &[BrailleCell] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept alongside `len` for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Braille {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.0.iter() {
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
