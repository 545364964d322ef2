//! Character-level normalization for Japanese input text.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Hiragana codepoints that have a katakana counterpart at +0x60.
///
/// The sound marks U+3099..U+309C would land on ・ and ー, and ゟ on ヿ,
/// so only ぁ..ゖ and the iteration marks ゝゞ are shifted.
fn has_katakana_counterpart(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c) || ('\u{309D}'..='\u{309E}').contains(&c)
}

/// Convert a single hiragana char to katakana. Other chars pass through.
pub fn hiragana_to_katakana(c: char) -> char {
    if has_katakana_counterpart(c) {
        char::from_u32(c as u32 + 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// Fold full-width digits and `．，？！` to ASCII. Other chars pass through.
pub fn to_halfwidth(c: char) -> char {
    match c {
        '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap_or(c),
        '．' => '.',
        '，' => ',',
        '？' => '?',
        '！' => '!',
        _ => c,
    }
}

/// Normalize text for braille classification: katakana first, then half-width.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| to_halfwidth(hiragana_to_katakana(c)))
        .collect()
}
