use crate::data::{WordBank, DEFAULT_WORD_LENGTH};
use crate::results::HelperError;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Defines the letter clues that a candidate word must adhere to.
///
/// A `Constraints` value is an immutable snapshot as far as filtering is concerned: the filter
/// methods never modify it, so the same snapshot always produces the same candidates. Edits
/// happen one slot at a time through the setters, mirroring how clues arrive from the user.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraints {
    word_length: usize,
    /// Letters that must occur at the matching index. `None` means no clue for that slot.
    placed: Vec<Option<char>>,
    /// Letters that must occur somewhere in the word, but not at the matching index.
    misplaced: Vec<Option<char>>,
    /// Letters that must not occur anywhere, except at indices where the same letter is placed.
    bad: BTreeSet<char>,
}

impl Constraints {
    /// Creates an empty `Constraints` snapshot for words of the given length.
    pub fn new(word_length: usize) -> Constraints {
        Constraints {
            word_length,
            placed: vec![None; word_length],
            misplaced: vec![None; word_length],
            bad: BTreeSet::new(),
        }
    }

    /// Returns the fixed word length these constraints apply to.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Returns the placed-letter slots, always exactly `word_length` long.
    pub fn placed(&self) -> &[Option<char>] {
        &self.placed
    }

    /// Returns the misplaced-letter slots, always exactly `word_length` long.
    pub fn misplaced(&self) -> &[Option<char>] {
        &self.misplaced
    }

    /// Returns the letters known to be absent, except where whitelisted by a placed letter.
    pub fn bad(&self) -> impl Iterator<Item = char> + '_ {
        self.bad.iter().copied()
    }

    /// Sets or clears the placed letter at the given index.
    ///
    /// Letters are lowercased before being stored.
    pub fn set_placed(&mut self, index: usize, letter: Option<char>) -> Result<(), HelperError> {
        if index >= self.word_length {
            return Err(HelperError::PositionOutOfBounds);
        }
        self.placed[index] = letter.map(|l| l.to_ascii_lowercase());
        Ok(())
    }

    /// Sets or clears the misplaced letter at the given index.
    ///
    /// Letters are lowercased before being stored.
    pub fn set_misplaced(&mut self, index: usize, letter: Option<char>) -> Result<(), HelperError> {
        if index >= self.word_length {
            return Err(HelperError::PositionOutOfBounds);
        }
        self.misplaced[index] = letter.map(|l| l.to_ascii_lowercase());
        Ok(())
    }

    /// Replaces all placed slots from a pattern like `a...e`, where `.`, `_`, and space mean
    /// an empty slot. Characters beyond the word length are ignored, and a short pattern
    /// leaves the remaining slots empty.
    pub fn set_placed_pattern(&mut self, pattern: &str) {
        Constraints::fill_from_pattern(&mut self.placed, pattern);
    }

    /// Replaces all misplaced slots from a pattern, using the same format as
    /// [`set_placed_pattern`](Self::set_placed_pattern).
    pub fn set_misplaced_pattern(&mut self, pattern: &str) {
        Constraints::fill_from_pattern(&mut self.misplaced, pattern);
    }

    /// Adds a letter to the bad set. Adding the same letter twice has no further effect.
    pub fn add_bad(&mut self, letter: char) {
        self.bad.insert(letter.to_ascii_lowercase());
    }

    /// Replaces the bad set with the letters in the given string.
    pub fn set_bad(&mut self, letters: &str) {
        self.bad = letters.chars().map(|l| l.to_ascii_lowercase()).collect();
    }

    /// Atomically resets all three constraints to empty. Repeating this is a no-op.
    pub fn clear(&mut self) {
        self.placed.fill(None);
        self.misplaced.fill(None);
        self.bad.clear();
    }

    /// Returns `true` iff no clues have been entered.
    pub fn is_empty(&self) -> bool {
        self.placed.iter().all(Option::is_none)
            && self.misplaced.iter().all(Option::is_none)
            && self.bad.is_empty()
    }

    /// Returns `true` iff the given word satisfies these constraints.
    ///
    /// All three clue kinds are independent conjunctive predicates. A word of the wrong
    /// length, or one containing characters that can't match any clue, simply fails to
    /// match; this method never panics on malformed input.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        let letters: Vec<char> = word.chars().collect();
        for (index, slot) in self.placed.iter().enumerate() {
            if let Some(placed_letter) = slot {
                if letters.get(index) != Some(placed_letter) {
                    return false;
                }
            }
        }
        for (index, slot) in self.misplaced.iter().enumerate() {
            if let Some(misplaced_letter) = slot {
                if !letters.contains(misplaced_letter)
                    || letters.get(index) == Some(misplaced_letter)
                {
                    return false;
                }
            }
        }
        for bad_letter in &self.bad {
            for (index, letter) in letters.iter().enumerate() {
                // An occurrence of a bad letter is only tolerated where the same letter is
                // placed at that exact index. This keeps repeated-letter clues consistent,
                // e.g. one 's' placed while further 's' occurrences are excluded.
                if letter == bad_letter && self.placed.get(index) != Some(&Some(*bad_letter)) {
                    return false;
                }
            }
        }
        true
    }

    fn fill_from_pattern(slots: &mut [Option<char>], pattern: &str) {
        let word_length = slots.len();
        slots.fill(None);
        for (index, letter) in pattern.chars().take(word_length).enumerate() {
            slots[index] = match letter {
                '.' | '_' | ' ' => None,
                letter => Some(letter.to_ascii_lowercase()),
            };
        }
    }
}

impl Default for Constraints {
    fn default() -> Constraints {
        Constraints::new(DEFAULT_WORD_LENGTH)
    }
}

/// Gets the list of words in the word bank that satisfy the given constraints, preserving
/// the bank's order.
pub fn get_candidate_words(constraints: &Constraints, bank: &WordBank) -> Vec<Rc<str>> {
    bank.words()
        .iter()
        .filter(|word| constraints.is_satisfied_by(word))
        .map(Rc::clone)
        .collect()
}
