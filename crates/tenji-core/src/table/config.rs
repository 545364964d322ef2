use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::cell::{Braille, BrailleCell};
use crate::unicode::{is_hiragana, is_katakana};

use super::{Markers, MappingTable};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    markers: RawMarkers,
    kana: BTreeMap<String, String>,
    digits: BTreeMap<String, String>,
    letters: BTreeMap<String, String>,
    #[serde(default)]
    yoon: BTreeMap<String, String>,
    #[serde(default)]
    tokusyuon: BTreeMap<String, String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMarkers {
    number: String,
    foreign: String,
    capital: String,
    connector: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("invalid key {key:?} in [{section}]: {reason}")]
    InvalidKey {
        section: &'static str,
        key: String,
        reason: &'static str,
    },
    #[error("invalid braille for {key:?} in [{section}]: {value:?}")]
    InvalidBraille {
        section: &'static str,
        key: String,
        value: String,
    },
    #[error("marker {name} must be exactly one braille cell, got {value:?}")]
    InvalidMarker { name: &'static str, value: String },
    #[error("missing entry {key:?} in [{section}]")]
    MissingEntry { section: &'static str, key: char },
    #[error("kana key {0:?} overlaps the ASCII digit/letter classes")]
    KanaOverlap(char),
}

const YOON_SMALL: &[char] = &['ャ', 'ュ', 'ョ'];
const TOKUSYUON_SMALL: &[char] = &['ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ュ', 'ョ'];

/// Parse and validate a mapping-table TOML document.
pub fn parse_table_toml(toml_str: &str) -> Result<MappingTable, TableError> {
    let raw: RawTable = toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    let markers = Markers {
        number: parse_marker("number", &raw.markers.number)?,
        foreign: parse_marker("foreign", &raw.markers.foreign)?,
        capital: parse_marker("capital", &raw.markers.capital)?,
        connector: parse_marker("connector", &raw.markers.connector)?,
    };

    let kana = parse_single("kana", &raw.kana)?;
    for &key in kana.keys() {
        if key.is_ascii_alphanumeric() {
            return Err(TableError::KanaOverlap(key));
        }
        if is_hiragana(key) {
            return Err(TableError::InvalidKey {
                section: "kana",
                key: key.to_string(),
                reason: "hiragana never survives normalization, use katakana",
            });
        }
    }

    let digits = parse_single("digits", &raw.digits)?;
    for d in '0'..='9' {
        if !digits.contains_key(&d) {
            return Err(TableError::MissingEntry {
                section: "digits",
                key: d,
            });
        }
    }

    let letters = parse_single("letters", &raw.letters)?;
    for &key in letters.keys() {
        if !key.is_ascii_lowercase() {
            return Err(TableError::InvalidKey {
                section: "letters",
                key: key.to_string(),
                reason: "must be a lowercase ASCII letter",
            });
        }
    }
    for l in 'a'..='z' {
        if !letters.contains_key(&l) {
            return Err(TableError::MissingEntry {
                section: "letters",
                key: l,
            });
        }
    }

    let mut combinations = HashMap::new();
    parse_pairs("yoon", &raw.yoon, YOON_SMALL, &mut combinations)?;
    parse_pairs("tokusyuon", &raw.tokusyuon, TOKUSYUON_SMALL, &mut combinations)?;

    Ok(MappingTable {
        kana,
        digits,
        letters,
        combinations,
        markers,
    })
}

fn parse_marker(name: &'static str, value: &str) -> Result<BrailleCell, TableError> {
    match Braille::parse(value) {
        Some(b) if b.len() == 1 => Ok(b.cells()[0]),
        _ => Err(TableError::InvalidMarker {
            name,
            value: value.to_string(),
        }),
    }
}

fn parse_braille(section: &'static str, key: &str, value: &str) -> Result<Braille, TableError> {
    Braille::parse(value).ok_or_else(|| TableError::InvalidBraille {
        section,
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_single(
    section: &'static str,
    raw: &BTreeMap<String, String>,
) -> Result<HashMap<char, Braille>, TableError> {
    if raw.is_empty() {
        return Err(TableError::Empty(section));
    }
    let mut map = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        let mut chars = key.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(TableError::InvalidKey {
                    section,
                    key: key.clone(),
                    reason: "must be exactly one character",
                })
            }
        };
        map.insert(c, parse_braille(section, key, value)?);
    }
    Ok(map)
}

fn parse_pairs(
    section: &'static str,
    raw: &BTreeMap<String, String>,
    allowed_small: &[char],
    out: &mut HashMap<(char, char), Braille>,
) -> Result<(), TableError> {
    for (key, value) in raw {
        let chars: Vec<char> = key.chars().collect();
        let (base, small) = match chars.as_slice() {
            &[base, small] => (base, small),
            _ => {
                return Err(TableError::InvalidKey {
                    section,
                    key: key.clone(),
                    reason: "must be a base kana followed by a small kana",
                })
            }
        };
        if !is_katakana(base) {
            return Err(TableError::InvalidKey {
                section,
                key: key.clone(),
                reason: "base must be katakana",
            });
        }
        if !allowed_small.contains(&small) {
            return Err(TableError::InvalidKey {
                section,
                key: key.clone(),
                reason: "second character is not a small kana allowed in this section",
            });
        }
        out.insert((base, small), parse_braille(section, key, value)?);
    }
    Ok(())
}
