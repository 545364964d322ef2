/// Which character class the classifier is currently writing.
///
/// Digits and Latin letters are written in their own modes so that their
/// indicator cell is emitted once per run instead of once per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionState {
    #[default]
    Kana,
    Number,
    Alphabet,
}

/// Outcome of dispatching one character in one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Dispatch {
    /// Switch to the given state and dispatch the same character again.
    Redo(ConversionState),
    /// The character (and possibly its successor) has been handled.
    Done { consumed: usize, mapped: bool },
}

impl Dispatch {
    pub(super) const UNMAPPED: Dispatch = Dispatch::Done {
        consumed: 1,
        mapped: false,
    };
}
