use std::io::BufRead;
use std::io::Result;
use std::rc::Rc;

/// The word length used when no other length is configured.
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Contains all the candidate words for this helper.
///
/// The order of the words is preserved from the input, and every word is exactly
/// `word_length` letters long.
pub struct WordBank {
    all_words: Vec<Rc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is converted to lower case, and
    /// words that are not exactly `word_length` letters long are skipped.
    pub fn from_reader<R: BufRead>(word_reader: &mut R, word_length: usize) -> Result<Self> {
        Ok(WordBank {
            all_words: word_reader
                .lines()
                .map(|maybe_word| maybe_word.map(|word| word.trim().to_lowercase()))
                .filter(|maybe_word| {
                    maybe_word
                        .as_ref()
                        .map_or(true, |word| word.chars().count() == word_length)
                })
                .map(|maybe_word| maybe_word.map(|word| Rc::from(word.as_str())))
                .collect::<Result<Vec<Rc<str>>>>()?,
            word_length,
        })
    }

    /// Constructs a new `WordBank` struct using the words from the given vector.
    ///
    /// Each word is converted to lower case, and words that are not exactly `word_length`
    /// letters long are skipped.
    pub fn from_vec(words: Vec<String>, word_length: usize) -> Self {
        WordBank {
            all_words: words
                .iter()
                .filter_map(|word| {
                    let word = word.trim().to_lowercase();
                    if word.chars().count() != word_length {
                        return None;
                    }
                    Some(Rc::from(word.as_str()))
                })
                .collect(),
            word_length,
        }
    }

    /// Retrieves the full list of available words.
    pub fn all_words(&self) -> Vec<Rc<str>> {
        self.all_words.iter().map(Rc::clone).collect()
    }

    /// Returns the words as a slice, in their original order.
    pub fn words(&self) -> &[Rc<str>] {
        &self.all_words
    }

    /// Returns the number of possible words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns `true` iff the bank contains no words.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns the fixed length of every word in the bank.
    pub fn word_length(&self) -> usize {
        self.word_length
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::io::Cursor;

    macro_rules! assert_rc_eq {
        ($rc_vec:expr, $non_rc_vec:expr) => {
            assert_eq!(
                $rc_vec,
                $non_rc_vec
                    .iter()
                    .map(|thing| Rc::from(*thing))
                    .collect::<Vec<Rc<_>>>()
            );
        };
    }

    #[test]
    fn word_bank_from_reader_drops_wrong_length_words() -> Result<()> {
        let mut cursor = Cursor::new(String::from("\n\nworda\nwordb\nlongerword\nabc\n"));

        let word_bank = WordBank::from_reader(&mut cursor, 5)?;

        assert_eq!(word_bank.len(), 2);
        assert_rc_eq!(word_bank.all_words(), vec!["worda", "wordb"]);
        assert_eq!(word_bank.word_length(), 5);
        Ok(())
    }

    #[test]
    fn word_bank_from_reader_lowercases() -> Result<()> {
        let mut cursor = Cursor::new(String::from("Worda\nWORDB\n"));

        let word_bank = WordBank::from_reader(&mut cursor, 5)?;

        assert_rc_eq!(word_bank.all_words(), vec!["worda", "wordb"]);
        Ok(())
    }

    #[test]
    fn word_bank_from_vec_preserves_order() {
        let word_bank = WordBank::from_vec(
            vec![
                "worda".to_string(),
                "".to_string(),
                "wordb".to_string(),
                "smore".to_string(),
            ],
            5,
        );

        assert_eq!(word_bank.len(), 3);
        assert_rc_eq!(word_bank.all_words(), vec!["worda", "wordb", "smore"]);
    }

    #[test]
    fn word_bank_empty() {
        let word_bank = WordBank::from_vec(vec![], 5);

        assert!(word_bank.is_empty());
        assert_eq!(word_bank.len(), 0);
    }
}
