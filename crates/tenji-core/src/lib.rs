//! Japanese braille (tenji) conversion.
//!
//! Text is normalized, classified into kana, number and alphabet runs, and
//! emitted as six-dot braille cells. A separate transform produces the
//! mirrored (oumen) form used for embossing from the back side.

pub mod cell;
pub mod converter;
pub mod mirror;
pub mod settings;
pub mod table;
pub mod unicode;
