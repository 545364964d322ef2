//! Kana, digit and letter mapping tables.
//!
//! A `MappingTable` is built once from TOML and never mutated afterwards, so it
//! can be shared freely across threads. The embedded default is available via
//! `MappingTable::builtin()`; alternative tables are ordinary values.

mod config;

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::cell::{Braille, BrailleCell};

pub use config::{parse_table_toml, TableError};

pub const DEFAULT_TOML: &str = include_str!("default_table.toml");

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Control cells inserted around runs of digits and Latin letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    /// 数符: starts a run of digits.
    pub number: BrailleCell,
    /// 外字符: starts a run of Latin letters.
    pub foreign: BrailleCell,
    /// 大文字符: one before a capital letter, two before an all-caps run.
    pub capital: BrailleCell,
    /// 第1つなぎ符: separates a digit from a following あ/ら-row kana.
    pub connector: BrailleCell,
}

/// Entry counts per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    pub kana: usize,
    pub digits: usize,
    pub letters: usize,
    pub combinations: usize,
}

#[derive(Debug, Clone)]
pub struct MappingTable {
    pub(crate) kana: HashMap<char, Braille>,
    pub(crate) digits: HashMap<char, Braille>,
    pub(crate) letters: HashMap<char, Braille>,
    /// (base, small kana) → combined sound, for both yoon and tokusyuon.
    pub(crate) combinations: HashMap<(char, char), Braille>,
    pub(crate) markers: Markers,
}

impl MappingTable {
    /// Get or initialize the table built from the embedded default TOML.
    pub fn builtin() -> &'static MappingTable {
        static INSTANCE: OnceLock<MappingTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let table = parse_table_toml(DEFAULT_TOML).expect("default table TOML must be valid");
            let stats = table.stats();
            debug!(
                kana = stats.kana,
                digits = stats.digits,
                letters = stats.letters,
                combinations = stats.combinations,
                "builtin table loaded"
            );
            table
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        parse_table_toml(toml_str)
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Whether `c` has a single-character kana entry.
    ///
    /// Combination halves are not members: a small ャ on its own is not kana
    /// for the purpose of leaving number or alphabet mode.
    pub fn is_kana(&self, c: char) -> bool {
        self.kana.contains_key(&c)
    }

    pub fn kana(&self, c: char) -> Option<&Braille> {
        self.kana.get(&c)
    }

    pub fn digit(&self, c: char) -> Option<&Braille> {
        self.digits.get(&c)
    }

    /// Look up a lowercase letter.
    pub fn letter(&self, c: char) -> Option<&Braille> {
        self.letters.get(&c)
    }

    pub fn combination(&self, base: char, small: char) -> Option<&Braille> {
        self.combinations.get(&(base, small))
    }

    /// Resolve `current` as kana, preferring a combination with `next`.
    ///
    /// Returns the braille and the number of characters consumed (1 or 2).
    pub fn lookup_kana(&self, current: char, next: Option<char>) -> Option<(&Braille, usize)> {
        if let Some(braille) = next.and_then(|n| self.combination(current, n)) {
            return Some((braille, 2));
        }
        self.kana(current).map(|braille| (braille, 1))
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            kana: self.kana.len(),
            digits: self.digits.len(),
            letters: self.letters.len(),
            combinations: self.combinations.len(),
        }
    }
}
