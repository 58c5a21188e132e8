use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Emoji presentation selector some platforms append to square glyphs.
pub(crate) const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Feedback revealed for a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Correct letter in the correct position.
    Hit,
    /// Letter is in the word but somewhere else.
    Present,
    /// Letter is not in the word.
    Miss,
}

impl CellState {
    /// Canonical share glyph for this state
    pub fn glyph(self) -> char {
        match self {
            CellState::Hit => '🟩',
            CellState::Present => '🟨',
            CellState::Miss => '⬛',
        }
    }

    /// Get state name for display
    pub fn name(self) -> &'static str {
        match self {
            CellState::Hit => "Hit",
            CellState::Present => "Present",
            CellState::Miss => "Miss",
        }
    }

    /// Whether the cell tells the player something about the answer's letters
    pub fn is_informative(self) -> bool {
        matches!(self, CellState::Hit | CellState::Present)
    }
}

/// Lookup table from share glyphs to cell states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    glyphs: HashMap<char, CellState>,
}

impl Alphabet {
    /// Glyphs produced by the native share button in every theme, plus the
    /// `G`/`Y`/`B` shorthand.
    pub fn standard() -> Self {
        let glyphs = [
            ('🟩', CellState::Hit),
            ('🟧', CellState::Hit),
            ('G', CellState::Hit),
            ('🟨', CellState::Present),
            ('🟦', CellState::Present),
            ('Y', CellState::Present),
            ('⬛', CellState::Miss),
            ('⬜', CellState::Miss),
            ('B', CellState::Miss),
        ]
        .into_iter()
        .collect();
        Alphabet { glyphs }
    }

    /// Register an extra glyph. Returns the state it previously decoded to,
    /// if any.
    pub fn insert(&mut self, glyph: char, state: CellState) -> Option<CellState> {
        self.glyphs.insert(glyph, state)
    }

    /// Decode one glyph
    pub fn decode(&self, glyph: char) -> Option<CellState> {
        self.glyphs.get(&glyph).copied()
    }

    pub fn contains(&self, glyph: char) -> bool {
        self.glyphs.contains_key(&glyph)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_glyphs() {
        let alphabet = Alphabet::standard();
        assert_eq!(alphabet.decode('🟩'), Some(CellState::Hit));
        assert_eq!(alphabet.decode('🟨'), Some(CellState::Present));
        assert_eq!(alphabet.decode('⬛'), Some(CellState::Miss));
        assert_eq!(alphabet.decode('⬜'), Some(CellState::Miss));
    }

    #[test]
    fn test_high_contrast_glyphs() {
        let alphabet = Alphabet::standard();
        assert_eq!(alphabet.decode('🟧'), Some(CellState::Hit));
        assert_eq!(alphabet.decode('🟦'), Some(CellState::Present));
    }

    #[test]
    fn test_unknown_glyph() {
        assert_eq!(Alphabet::standard().decode('x'), None);
        assert_eq!(Alphabet::standard().decode(VARIATION_SELECTOR), None);
    }

    #[test]
    fn test_insert_extra_glyph() {
        let mut alphabet = Alphabet::standard();
        assert_eq!(alphabet.insert('✅', CellState::Hit), None);
        assert_eq!(alphabet.decode('✅'), Some(CellState::Hit));
        assert_eq!(alphabet.insert('✅', CellState::Miss), Some(CellState::Hit));
    }

    #[test]
    fn test_canonical_glyph_decodes_to_itself() {
        let alphabet = Alphabet::standard();
        for state in [CellState::Hit, CellState::Present, CellState::Miss] {
            assert_eq!(alphabet.decode(state.glyph()), Some(state));
        }
    }

    #[test]
    fn test_is_informative() {
        assert!(CellState::Hit.is_informative());
        assert!(CellState::Present.is_informative());
        assert!(!CellState::Miss.is_informative());
    }
}
