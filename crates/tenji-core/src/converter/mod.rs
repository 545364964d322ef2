//! Text-to-braille conversion via a kana/number/alphabet classifier.
//!
//! Walks normalized text one character at a time with one character of
//! lookbehind and lookahead, switching between kana, number and alphabet
//! modes and inserting indicator cells at mode boundaries.

mod state;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::cell::{Braille, BrailleCell};
use crate::settings::ConvertOptions;
use crate::table::MappingTable;
use crate::unicode::normalize;

pub use state::ConversionState;
use state::Dispatch;

/// State switches allowed per character before transitions are suppressed.
///
/// With a well-formed table the digit, letter and kana classes are disjoint
/// and a character settles after one switch.
const MAX_REDISPATCH: u8 = 2;

/// Kana that take the first connector (第1つなぎ符) right after a digit.
const CONNECTOR_TARGETS: [char; 10] = ['ア', 'イ', 'ウ', 'エ', 'オ', 'ラ', 'リ', 'ル', 'レ', 'ロ'];

const PALATAL_SMALL: [char; 3] = ['ャ', 'ュ', 'ョ'];

/// One unit of conversion output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Cell(BrailleCell),
    LineBreak,
}

/// Join tokens into a braille string; line breaks become `\n`.
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Token::Cell(cell) => cell.to_char(),
            Token::LineBreak => '\n',
        })
        .collect()
}

/// Convert raw text to braille with the builtin table and default options.
pub fn convert_to_braille(text: &str) -> String {
    Converter::new(MappingTable::builtin()).convert_to_string(text)
}

/// Classify already-normalized text with default options.
pub fn convert(table: &MappingTable, normalized: &str) -> Vec<Token> {
    Converter::new(table).convert(normalized)
}

/// A character with its neighbours in the normalized input.
#[derive(Debug, Clone, Copy)]
struct Position {
    current: char,
    prev: Option<char>,
    next: Option<char>,
}

#[derive(Debug, Clone, Copy)]
pub struct Converter<'t> {
    table: &'t MappingTable,
    options: ConvertOptions,
}

impl<'t> Converter<'t> {
    pub fn new(table: &'t MappingTable) -> Self {
        Converter {
            table,
            options: ConvertOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Normalize `text`, classify it and join the result.
    pub fn convert_to_string(&self, text: &str) -> String {
        render(&self.convert(&normalize(text)))
    }

    /// Classify normalized text into braille tokens.
    ///
    /// Never fails: characters without a mapping produce no output.
    pub fn convert(&self, normalized: &str) -> Vec<Token> {
        let chars: Vec<char> = normalized.chars().collect();
        let _span = debug_span!("convert", char_count = chars.len()).entered();

        let mut out = Vec::with_capacity(chars.len() * 2);
        let mut state = ConversionState::Kana;
        let mut dropped = 0usize;
        let mut i = 0;

        while i < chars.len() {
            let pos = Position {
                current: chars[i],
                prev: i.checked_sub(1).map(|p| chars[p]),
                next: chars.get(i + 1).copied(),
            };

            if pos.current == '\n' {
                out.push(Token::LineBreak);
                i += 1;
                continue;
            }

            let mut switches = 0u8;
            let (consumed, mapped) = loop {
                let may_switch = switches < MAX_REDISPATCH;
                match self.dispatch(state, pos, may_switch, &mut out) {
                    Dispatch::Redo(next) => {
                        state = next;
                        switches += 1;
                    }
                    Dispatch::Done { consumed, mapped } => break (consumed, mapped),
                }
            };

            if !mapped {
                dropped += 1;
            }
            i += consumed;
        }

        debug!(token_count = out.len(), dropped, final_state = ?state);
        out
    }

    fn dispatch(
        &self,
        state: ConversionState,
        pos: Position,
        may_switch: bool,
        out: &mut Vec<Token>,
    ) -> Dispatch {
        match state {
            ConversionState::Kana => self.kana_step(pos, may_switch, out),
            ConversionState::Number => self.number_step(pos, may_switch, out),
            ConversionState::Alphabet => self.alphabet_step(pos, may_switch, out),
        }
    }

    fn kana_step(&self, pos: Position, may_switch: bool, out: &mut Vec<Token>) -> Dispatch {
        let markers = self.table.markers();
        if may_switch {
            if pos.current.is_ascii_digit() {
                out.push(Token::Cell(markers.number));
                return Dispatch::Redo(ConversionState::Number);
            }
            if pos.current.is_ascii_alphabetic() {
                out.push(Token::Cell(markers.foreign));
                return Dispatch::Redo(ConversionState::Alphabet);
            }
        }

        let Some((braille, consumed)) = self.table.lookup_kana(pos.current, pos.next) else {
            return Dispatch::UNMAPPED;
        };
        if consumed == 1 && needs_connector(pos) {
            out.push(Token::Cell(markers.connector));
        }
        push_braille(out, braille);
        Dispatch::Done {
            consumed,
            mapped: true,
        }
    }

    fn number_step(&self, pos: Position, may_switch: bool, out: &mut Vec<Token>) -> Dispatch {
        if may_switch {
            if self.table.is_kana(pos.current) {
                return Dispatch::Redo(ConversionState::Kana);
            }
            if pos.current.is_ascii_alphabetic() {
                if self.options.indicator_on_reentry {
                    out.push(Token::Cell(self.table.markers().foreign));
                }
                return Dispatch::Redo(ConversionState::Alphabet);
            }
        }
        emit(out, self.table.digit(pos.current))
    }

    fn alphabet_step(&self, pos: Position, may_switch: bool, out: &mut Vec<Token>) -> Dispatch {
        let markers = self.table.markers();
        if may_switch {
            if self.table.is_kana(pos.current) {
                return Dispatch::Redo(ConversionState::Kana);
            }
            if self.options.alphabet_to_number && pos.current.is_ascii_digit() {
                if self.options.indicator_on_reentry {
                    out.push(Token::Cell(markers.number));
                }
                return Dispatch::Redo(ConversionState::Number);
            }
        }

        if !is_upper(pos.prev) && pos.current.is_ascii_uppercase() {
            out.push(Token::Cell(markers.capital));
            // Doubled at the start of an all-caps run.
            if is_upper(pos.next) {
                out.push(Token::Cell(markers.capital));
            }
        }
        emit(out, self.table.letter(pos.current.to_ascii_lowercase()))
    }
}

/// 第1つなぎ符 rule: digit, then an あ/ら-row kana that is not the head of a
/// palatalized sound. Combination heads are excluded by the caller.
fn needs_connector(pos: Position) -> bool {
    pos.prev.is_some_and(|c| c.is_ascii_digit())
        && CONNECTOR_TARGETS.contains(&pos.current)
        && !pos.next.is_some_and(|c| PALATAL_SMALL.contains(&c))
}

fn is_upper(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_uppercase())
}

fn push_braille(out: &mut Vec<Token>, braille: &Braille) {
    out.extend(braille.cells().iter().copied().map(Token::Cell));
}

fn emit(out: &mut Vec<Token>, braille: Option<&Braille>) -> Dispatch {
    match braille {
        Some(braille) => {
            push_braille(out, braille);
            Dispatch::Done {
                consumed: 1,
                mapped: true,
            }
        }
        None => Dispatch::UNMAPPED,
    }
}
