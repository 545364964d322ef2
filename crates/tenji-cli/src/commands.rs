use std::borrow::Cow;

use tenji::settings::parse_settings_toml;
use tenji::{ConvertOptions, Converter, MappingTable};

use crate::{read_file, CliError};

/// The table at `path`, or the builtin table when no path is given.
pub fn load_table(path: Option<&str>) -> Result<Cow<'static, MappingTable>, CliError> {
    match path {
        Some(path) => {
            let content = read_file(path)?;
            Ok(Cow::Owned(MappingTable::from_toml(&content)?))
        }
        None => Ok(Cow::Borrowed(MappingTable::builtin())),
    }
}

/// Conversion options from a settings file, or the defaults.
pub fn load_options(path: Option<&str>) -> Result<ConvertOptions, CliError> {
    match path {
        Some(path) => {
            let content = read_file(path)?;
            Ok(parse_settings_toml(&content)?.convert)
        }
        None => Ok(ConvertOptions::default()),
    }
}

pub fn convert(
    text: &str,
    table_file: Option<&str>,
    settings_file: Option<&str>,
    oumen: bool,
) -> Result<String, CliError> {
    let table = load_table(table_file)?;
    let options = load_options(settings_file)?;
    let braille = Converter::new(&table)
        .with_options(options)
        .convert_to_string(text);
    if oumen {
        Ok(tenji::mirror_braille(&braille))
    } else {
        Ok(braille)
    }
}

pub fn mirror(braille: &str) -> String {
    tenji::mirror_braille(braille)
}

pub fn table_export() -> &'static str {
    tenji::table::default_toml()
}

pub fn table_validate(file: &str) -> Result<String, CliError> {
    let content = read_file(file)?;
    let stats = MappingTable::from_toml(&content)?.stats();
    Ok(format!(
        "OK: kana={}, digits={}, letters={}, combinations={}",
        stats.kana, stats.digits, stats.letters, stats.combinations
    ))
}

pub fn settings_export() -> &'static str {
    tenji::settings::default_toml()
}

pub fn settings_validate(file: &str) -> Result<String, CliError> {
    let content = read_file(file)?;
    let s = parse_settings_toml(&content)?;
    Ok(format!(
        "OK: convert.alphabet_to_number={}, convert.indicator_on_reentry={}",
        s.convert.alphabet_to_number, s.convert.indicator_on_reentry
    ))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_convert_builtin() {
        assert_eq!(convert("あいうえお", None, None, false).unwrap(), "⠁⠃⠉⠋⠊");
        assert_eq!(convert("あいうえお", None, None, true).unwrap(), "⠑⠙⠉⠘⠈");
    }

    #[test]
    fn test_convert_with_custom_table() {
        let table = write_temp(&table_export().replace("\"イ\" = \"⠃\"", "\"イ\" = \"⠿\""));
        let out = convert("あい", table.path().to_str(), None, false).unwrap();
        assert_eq!(out, "⠁⠿");
    }

    #[test]
    fn test_convert_with_settings() {
        let settings = write_temp("[convert]\nalphabet_to_number = false\n");
        let out = convert("a5", None, settings.path().to_str(), false).unwrap();
        assert_eq!(out, "⠰⠁");
        assert_eq!(convert("a5", None, None, false).unwrap(), "⠰⠁⠼⠑");
    }

    #[test]
    fn test_convert_missing_table_file() {
        let err = convert("あ", Some("/nonexistent/table.toml"), None, false).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }

    #[test]
    fn test_mirror() {
        assert_eq!(mirror("⠁⠃\n⠉"), "⠘⠈\n⠉");
    }

    #[test]
    fn test_table_round_trip_through_export() {
        let exported = write_temp(table_export());
        let msg = table_validate(exported.path().to_str().unwrap()).unwrap();
        assert!(msg.starts_with("OK: "), "{msg}");
        assert!(msg.contains("digits=12"), "{msg}");
        assert!(msg.contains("letters=26"), "{msg}");
    }

    #[test]
    fn test_table_validate_rejects_bad_value() {
        let broken = write_temp(&table_export().replace("\"ア\" = \"⠁\"", "\"ア\" = \"a\""));
        let err = table_validate(broken.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::Table(_)));
    }

    #[test]
    fn test_settings_validate() {
        let exported = write_temp(settings_export());
        let msg = settings_validate(exported.path().to_str().unwrap()).unwrap();
        assert_eq!(
            msg,
            "OK: convert.alphabet_to_number=true, convert.indicator_on_reentry=true"
        );

        let broken = write_temp("[convert]\nunknown = 1\n");
        let err = settings_validate(broken.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::Settings(_)));
    }
}
