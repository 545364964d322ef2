//! Japanese braille (tenji) conversion.
//!
//! ```
//! assert_eq!(tenji::convert_to_braille("あいうえお"), "⠁⠃⠉⠋⠊");
//! assert_eq!(tenji::mirror_braille("⠁⠃"), "⠘⠈");
//! ```

mod trace_init;

pub use tenji_core::{cell, converter, mirror, settings, table, unicode};

pub use tenji_core::cell::{Braille, BrailleCell};
pub use tenji_core::converter::{ConversionState, Converter, Token};
pub use tenji_core::settings::ConvertOptions;
pub use tenji_core::table::{MappingTable, TableError};
pub use trace_init::{init_tracing, TraceGuard};

/// Normalize `text` and convert it to braille with the builtin table.
///
/// Total: characters without a mapping (kanji, most symbols) are dropped.
pub fn convert_to_braille(text: &str) -> String {
    tenji_core::converter::convert_to_braille(text)
}

/// Produce the mirrored (oumen) form of a braille string, line by line.
pub fn mirror_braille(braille: &str) -> String {
    tenji_core::mirror::mirror_braille(braille)
}
