mod kana;

use super::*;

pub(super) fn tenji(text: &str) -> String {
    convert_to_braille(text)
}

pub(super) fn tenji_with(text: &str, options: ConvertOptions) -> String {
    Converter::new(MappingTable::builtin())
        .with_options(options)
        .convert_to_string(text)
}

#[test]
fn test_convert_empty() {
    assert_eq!(tenji(""), "");
    assert!(convert(MappingTable::builtin(), "").is_empty());
}

#[test]
fn test_newline_passthrough_in_every_state() {
    assert_eq!(tenji("あ\nい"), "⠁\n⠃");
    // Newline does not end a digit run.
    assert_eq!(tenji("1\n2"), "⠼⠁\n⠃");
    assert_eq!(tenji("ab\ncd"), "⠰⠁⠃\n⠉⠙");
    assert_eq!(tenji("\n\n"), "\n\n");
}

#[test]
fn test_tokens_mark_line_breaks() {
    let tokens = convert(MappingTable::builtin(), "ア\n");
    assert_eq!(tokens.len(), 2);
    assert!(matches!(tokens[0], Token::Cell(c) if c.to_char() == '⠁'));
    assert_eq!(tokens[1], Token::LineBreak);
    assert_eq!(render(&tokens), "⠁\n");
}

#[test]
fn test_redispatch_guard_with_overlapping_table() {
    // A kana entry for '7' makes Kana→Number→Kana cycle forever without the guard.
    let mut table = MappingTable::builtin().clone();
    table.kana.insert('7', Braille::parse("⠿").unwrap());
    let out = render(&Converter::new(&table).convert("7"));
    assert_eq!(out, "⠼⠿");
}

#[test]
fn test_alternative_table_injection() {
    let custom = crate::table::default_toml().replace("\"ア\" = \"⠁\"", "\"ア\" = \"⠿\"");
    let table = MappingTable::from_toml(&custom).unwrap();
    let converter = Converter::new(&table);
    assert_eq!(converter.convert_to_string("あい"), "⠿⠃");
    // The builtin table is unaffected.
    assert_eq!(tenji("あい"), "⠁⠃");
}
