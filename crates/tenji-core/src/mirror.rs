//! Mirrored braille (oumen) for embossing from the back of the sheet.
//!
//! Each line is reversed and every cell reflected left↔right, so that the
//! dots punched from the back read correctly from the front. Line order is
//! kept; only the cells within a line are reversed.

use tracing::{debug, debug_span};

use crate::cell::BrailleCell;

/// Reflect one six-dot braille char. Any other char is returned unchanged.
pub fn mirror_char(c: char) -> char {
    match BrailleCell::from_char(c) {
        Some(cell) => cell.mirrored().to_char(),
        None => c,
    }
}

/// Mirror every line of `braille`, keeping line terminators at line ends.
pub fn mirror_braille(braille: &str) -> String {
    let _span = debug_span!("mirror_braille", byte_len = braille.len()).entered();

    let mut out = String::with_capacity(braille.len());
    let mut line_count = 0usize;
    for line in braille.split_inclusive('\n') {
        let mut reversed: Vec<char> = line.chars().rev().map(mirror_char).collect();
        if reversed.first() == Some(&'\n') {
            reversed.rotate_left(1);
        }
        out.extend(reversed);
        line_count += 1;
    }

    debug!(line_count);
    out
}
