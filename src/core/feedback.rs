//! Guess feedback: per-letter result kinds and the scored guess.
//!
//! Scoring uses the canonical two-pass multiset algorithm: exact matches
//! first consume letters from the answer's remaining-count table, then
//! unresolved positions claim whatever is left. Pass order is what makes
//! duplicate letters score correctly regardless of scan direction.

use std::fmt;

use super::{WORD_LEN, Word};

/// Classification of one guessed letter against the answer.
///
/// The numeric values are the letter's score contribution: a full board of
/// exact matches totals [`MAX_SCORE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ResultKind {
    /// Letter absent from the answer (or all its occurrences already used).
    Wrong = 0,
    /// Letter present in the answer but not at this position.
    PresentWrongPosition = 10,
    /// Letter at exactly this position in the answer.
    ExactMatch = 20,
}

impl ResultKind {
    /// Score contribution of this result kind.
    #[inline]
    #[must_use]
    pub const fn points(self) -> u16 {
        self as u16
    }
}

/// Score of a perfect guess: five exact matches.
pub const MAX_SCORE: u16 = WORD_LEN as u16 * 20;

/// One letter of feedback at a fixed board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackToken {
    pub letter: u8,
    pub kind: ResultKind,
}

/// A scored guess: the raw word plus its position-indexed feedback.
///
/// Immutable once constructed. Built either by scoring a word against a
/// known answer ([`Guess::calculate`]) or by reattaching a pattern observed
/// on an external board ([`Guess::from_pattern`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    tokens: [FeedbackToken; WORD_LEN],
    score: u16,
}

impl Guess {
    /// Score `word` against `answer`.
    ///
    /// Pass 1 marks exact-position matches and decrements the answer's
    /// per-letter remaining counts; pass 2 hands the leftover counts to
    /// unresolved positions left to right. Because pass 1 completes before
    /// any pass-2 decrement, the result does not depend on traversal order
    /// within either pass.
    ///
    /// # Examples
    /// ```
    /// use wordle_pilot::core::{Guess, ResultKind, Word};
    ///
    /// let guess = Guess::calculate(
    ///     &Word::new("alloy").unwrap(),
    ///     &Word::new("lolly").unwrap(),
    /// );
    /// assert_eq!(guess.score(), 60);
    /// assert_eq!(
    ///     guess.pattern(),
    ///     [
    ///         ResultKind::Wrong,
    ///         ResultKind::PresentWrongPosition,
    ///         ResultKind::ExactMatch,
    ///         ResultKind::PresentWrongPosition,
    ///         ResultKind::ExactMatch,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(word: &Word, answer: &Word) -> Self {
        let mut kinds = [ResultKind::Wrong; WORD_LEN];
        let mut remaining = [0u8; 26];
        for &b in answer.chars() {
            remaining[usize::from(b - b'a')] += 1;
        }

        // Pass 1: exact positions consume their letter first.
        for i in 0..WORD_LEN {
            if word.chars()[i] == answer.chars()[i] {
                kinds[i] = ResultKind::ExactMatch;
                remaining[usize::from(word.chars()[i] - b'a')] -= 1;
            }
        }

        // Pass 2: unresolved positions take from what is left.
        for i in 0..WORD_LEN {
            if kinds[i] == ResultKind::ExactMatch {
                continue;
            }
            let slot = &mut remaining[usize::from(word.chars()[i] - b'a')];
            if *slot > 0 {
                kinds[i] = ResultKind::PresentWrongPosition;
                *slot -= 1;
            }
        }

        Self::from_pattern(word.clone(), kinds)
    }

    /// Rebuild a guess from a stored score pattern, e.g. feedback read off
    /// an external board.
    #[must_use]
    pub fn from_pattern(word: Word, kinds: [ResultKind; WORD_LEN]) -> Self {
        let mut tokens = [FeedbackToken {
            letter: 0,
            kind: ResultKind::Wrong,
        }; WORD_LEN];
        let mut score = 0;
        for (i, kind) in kinds.into_iter().enumerate() {
            tokens[i] = FeedbackToken {
                letter: word.chars()[i],
                kind,
            };
            score += kind.points();
        }
        Self {
            word,
            tokens,
            score,
        }
    }

    /// The guessed word.
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Position-indexed feedback tokens.
    #[inline]
    #[must_use]
    pub const fn tokens(&self) -> &[FeedbackToken; WORD_LEN] {
        &self.tokens
    }

    /// The score pattern: just the result kinds, in position order.
    #[must_use]
    pub fn pattern(&self) -> [ResultKind; WORD_LEN] {
        self.tokens.map(|token| token.kind)
    }

    /// Total score, the sum of the per-letter contributions.
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u16 {
        self.score
    }

    /// A guess is the answer iff it scored [`MAX_SCORE`]. Checked via the
    /// score rather than string equality because a guess reconstructed
    /// from a pattern never knows the answer.
    #[inline]
    #[must_use]
    pub const fn is_answer(&self) -> bool {
        self.score == MAX_SCORE
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

/// Parse a score pattern from a string like `"GY-GY"`.
///
/// Accepts `G`/`g`/🟩 for exact, `Y`/`y`/🟨 for present, `-`/`_`/⬜ for
/// wrong. Returns `None` unless exactly five recognized symbols are given.
#[must_use]
pub fn parse_pattern(s: &str) -> Option<[ResultKind; WORD_LEN]> {
    let mut kinds = [ResultKind::Wrong; WORD_LEN];
    let mut count = 0;

    for ch in s.chars() {
        if count == WORD_LEN {
            return None;
        }
        kinds[count] = match ch {
            'G' | 'g' | '🟩' => ResultKind::ExactMatch,
            'Y' | 'y' | '🟨' => ResultKind::PresentWrongPosition,
            '-' | '_' | '⬜' => ResultKind::Wrong,
            _ => return None,
        };
        count += 1;
    }

    (count == WORD_LEN).then_some(kinds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn duplicate_letters_worked_example() {
        // ALLOY vs LOLLY: the first L is misplaced, the A finds no L left.
        let guess = Guess::calculate(&word("alloy"), &word("lolly"));
        assert_eq!(
            guess.pattern(),
            [
                ResultKind::Wrong,
                ResultKind::PresentWrongPosition,
                ResultKind::ExactMatch,
                ResultKind::PresentWrongPosition,
                ResultKind::ExactMatch,
            ]
        );
        assert_eq!(guess.score(), 60);
    }

    #[test]
    fn simple_worked_example() {
        let guess = Guess::calculate(&word("arise"), &word("raise"));
        assert_eq!(
            guess.pattern(),
            [
                ResultKind::PresentWrongPosition,
                ResultKind::PresentWrongPosition,
                ResultKind::ExactMatch,
                ResultKind::ExactMatch,
                ResultKind::ExactMatch,
            ]
        );
        assert_eq!(guess.score(), 80);
    }

    #[test]
    fn exact_match_outranks_duplicate_yellow() {
        // SPEED vs ERASE: only one of three E's in the answer is spare, so
        // both guessed E's go yellow and nothing doubles up.
        let guess = Guess::calculate(&word("speed"), &word("erase"));
        assert_eq!(
            guess.pattern(),
            [
                ResultKind::PresentWrongPosition,
                ResultKind::Wrong,
                ResultKind::PresentWrongPosition,
                ResultKind::PresentWrongPosition,
                ResultKind::Wrong,
            ]
        );
        assert_eq!(guess.score(), 30);
    }

    #[test]
    fn score_range_and_exactness() {
        let words = [
            "crane", "slate", "speed", "erase", "lolly", "alloy", "robot", "floor",
        ];
        for a in &words {
            for b in &words {
                let guess = Guess::calculate(&word(a), &word(b));
                assert_eq!(guess.score() % 10, 0);
                assert!(guess.score() <= MAX_SCORE);
                assert_eq!(guess.score() == MAX_SCORE, a == b);
                assert_eq!(guess.is_answer(), a == b);
            }
        }
    }

    /// Independent reference scorer that walks pass 2 right to left.
    fn reference_pattern(guess: &Word, answer: &Word) -> [ResultKind; WORD_LEN] {
        let mut kinds = [ResultKind::Wrong; WORD_LEN];
        let mut remaining = [0u8; 26];
        for &b in answer.chars() {
            remaining[usize::from(b - b'a')] += 1;
        }
        for i in 0..WORD_LEN {
            if guess.chars()[i] == answer.chars()[i] {
                kinds[i] = ResultKind::ExactMatch;
                remaining[usize::from(guess.chars()[i] - b'a')] -= 1;
            }
        }
        for i in (0..WORD_LEN).rev() {
            if kinds[i] == ResultKind::ExactMatch {
                continue;
            }
            let slot = &mut remaining[usize::from(guess.chars()[i] - b'a')];
            if *slot > 0 {
                kinds[i] = ResultKind::PresentWrongPosition;
                *slot -= 1;
            }
        }
        kinds
    }

    #[test]
    fn traversal_order_invariance() {
        // Pass 1 runs to completion before any pass-2 decrement, so the
        // multiset of kinds, and therefore the score, cannot depend on
        // the pass-2 scan direction. (Which duplicate position a spare
        // yellow lands on may differ; the score may not.)
        let words = [
            "lolly", "alloy", "speed", "erase", "level", "melee", "crane", "floor", "robot",
        ];
        for a in &words {
            for b in &words {
                let (a, b) = (word(a), word(b));
                let forward = Guess::calculate(&a, &b);
                let backward = reference_pattern(&a, &b);
                let backward_score: u16 = backward.iter().map(|k| k.points()).sum();
                assert_eq!(forward.score(), backward_score, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn from_pattern_round_trip() {
        let scored = Guess::calculate(&word("crate"), &word("trace"));
        let rebuilt = Guess::from_pattern(word("crate"), scored.pattern());
        assert_eq!(rebuilt, scored);
        assert_eq!(rebuilt.score(), scored.score());
    }

    #[test]
    fn self_guess_is_answer() {
        for text in ["crane", "lolly", "fuzzy"] {
            let guess = Guess::calculate(&word(text), &word(text));
            assert!(guess.is_answer());
            assert_eq!(guess.score(), MAX_SCORE);
        }
    }

    #[test]
    fn parse_pattern_accepts_letters_and_emoji() {
        let p1 = parse_pattern("GY-GY").unwrap();
        let p2 = parse_pattern("🟩🟨⬜🟩🟨").unwrap();
        let p3 = parse_pattern("gy_gy").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1[0], ResultKind::ExactMatch);
        assert_eq!(p1[2], ResultKind::Wrong);
    }

    #[test]
    fn parse_pattern_rejects_bad_input() {
        assert!(parse_pattern("").is_none());
        assert!(parse_pattern("GYG").is_none());
        assert!(parse_pattern("GYGGYG").is_none());
        assert!(parse_pattern("GXGGY").is_none());
    }

    #[test]
    fn token_letters_follow_the_word() {
        let guess = Guess::calculate(&word("bagel"), &word("bagel"));
        let letters: Vec<u8> = guess.tokens().iter().map(|t| t.letter).collect();
        assert_eq!(letters, b"bagel");
    }
}
