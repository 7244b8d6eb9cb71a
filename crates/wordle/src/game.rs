//! One round of the word game
//!
//! Six turns against a fixed solution. Scoring is the standard two-pass
//! algorithm: exact positions first, then presence against the remaining
//! letter counts, so a guess never gets credit for more copies of a letter
//! than the solution contains.

use std::collections::HashMap;

use thiserror::Error;

/// Maximum guesses per round.
pub const MAX_TURNS: usize = 6;

/// Required guess length.
pub const WORD_LENGTH: usize = 5;

/// Score for one letter of a guess. Ordered so a key on the keypad only
/// ever upgrades (Absent < Present < Correct).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LetterScore {
    /// Letter does not appear (or all its copies are already accounted for).
    Absent,
    /// Letter appears elsewhere in the solution.
    Present,
    /// Letter is in exactly this position.
    Correct,
}

/// One scored letter of a submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredLetter {
    pub letter: char,
    pub score: LetterScore,
}

/// A fully scored guess.
pub type ScoredGuess = Vec<ScoredLetter>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("the round is already over")]
    RoundOver,
    #[error("guess must be {WORD_LENGTH} letters, got {0}")]
    WrongLength(usize),
    #[error("word already tried")]
    AlreadyGuessed,
}

/// Score a guess against a solution. Both inputs must be the same length;
/// callers validate length before scoring.
pub fn score_guess(solution: &str, guess: &str) -> ScoredGuess {
    let solution: Vec<char> = solution.chars().collect();
    let guess: Vec<char> = guess.chars().collect();

    let mut scores = vec![LetterScore::Absent; guess.len()];
    let mut remaining: HashMap<char, usize> = HashMap::new();

    // Pass 1: exact positions; count unmatched solution letters.
    for (i, &letter) in guess.iter().enumerate() {
        if solution.get(i) == Some(&letter) {
            scores[i] = LetterScore::Correct;
        } else if let Some(&sol) = solution.get(i) {
            *remaining.entry(sol).or_insert(0) += 1;
        }
    }

    // Pass 2: presence, consuming remaining counts so duplicates are never
    // over-credited.
    for (i, &letter) in guess.iter().enumerate() {
        if scores[i] == LetterScore::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&letter) {
            if *count > 0 {
                scores[i] = LetterScore::Present;
                *count -= 1;
            }
        }
    }

    guess
        .into_iter()
        .zip(scores)
        .map(|(letter, score)| ScoredLetter { letter, score })
        .collect()
}

/// Turn bookkeeping for one round.
#[derive(Debug, Clone)]
pub struct WordleGame {
    solution: String,
    raw_guesses: Vec<String>,
    guesses: Vec<ScoredGuess>,
    used_keys: HashMap<char, LetterScore>,
    state: RoundState,
}

impl WordleGame {
    pub fn new(solution: &str) -> Self {
        Self {
            solution: solution.to_lowercase(),
            raw_guesses: Vec::new(),
            guesses: Vec::new(),
            used_keys: HashMap::new(),
            state: RoundState::InProgress,
        }
    }

    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Zero-based turn counter; equals the number of scored guesses.
    pub fn turn(&self) -> usize {
        self.guesses.len()
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_correct(&self) -> bool {
        self.state == RoundState::Won
    }

    pub fn guesses(&self) -> &[ScoredGuess] {
        &self.guesses
    }

    /// Best score seen so far for each tried letter.
    pub fn used_keys(&self) -> &HashMap<char, LetterScore> {
        &self.used_keys
    }

    /// Submit a guess; on success returns the scored letters.
    pub fn submit_guess(&mut self, word: &str) -> Result<ScoredGuess, GuessError> {
        if self.state != RoundState::InProgress {
            return Err(GuessError::RoundOver);
        }
        let word = word.to_lowercase();
        let len = word.chars().count();
        if len != WORD_LENGTH {
            return Err(GuessError::WrongLength(len));
        }
        if self.raw_guesses.iter().any(|g| *g == word) {
            return Err(GuessError::AlreadyGuessed);
        }

        let scored = score_guess(&self.solution, &word);
        for entry in &scored {
            let best = self
                .used_keys
                .entry(entry.letter)
                .or_insert(LetterScore::Absent);
            if entry.score > *best {
                *best = entry.score;
            }
        }

        if word == self.solution {
            self.state = RoundState::Won;
        } else if self.guesses.len() + 1 >= MAX_TURNS {
            self.state = RoundState::Lost;
        }

        self.raw_guesses.push(word);
        self.guesses.push(scored.clone());
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterScore::{Absent, Correct, Present};

    fn scores(guess: &ScoredGuess) -> Vec<LetterScore> {
        guess.iter().map(|l| l.score).collect()
    }

    #[test]
    fn test_exact_match_is_all_correct() {
        let scored = score_guess("crane", "crane");
        assert_eq!(scores(&scored), vec![Correct; 5]);
    }

    #[test]
    fn test_misplaced_letters_are_present() {
        let scored = score_guess("crane", "nacre");
        assert_eq!(scores(&scored), vec![Present, Present, Present, Present, Correct]);
    }

    #[test]
    fn test_duplicate_letters_are_not_over_credited() {
        // Solution has one 'l', already consumed by the exact match at
        // index 1; the other 'l' and both 'a's score Absent.
        let scored = score_guess("olive", "llama");
        assert_eq!(scores(&scored), vec![Absent, Correct, Absent, Absent, Absent]);
    }

    #[test]
    fn test_correct_position_consumes_the_letter_first() {
        // Solution "abbey", guess "babes": exact matches at indexes 2 and 3,
        // the leading 'b' and the 'a' are misplaced, 's' is absent.
        let scored = score_guess("abbey", "babes");
        assert_eq!(scores(&scored), vec![Present, Present, Correct, Correct, Absent]);
    }

    #[test]
    fn test_win_on_final_turn() {
        let mut game = WordleGame::new("crane");
        for word in ["about", "above", "abuse", "actor", "adapt"] {
            game.submit_guess(word).unwrap();
        }
        assert_eq!(game.state(), RoundState::InProgress);
        game.submit_guess("crane").unwrap();
        assert_eq!(game.state(), RoundState::Won);
        assert_eq!(game.turn(), MAX_TURNS);
    }

    #[test]
    fn test_loss_after_six_wrong_guesses() {
        let mut game = WordleGame::new("crane");
        for word in ["about", "above", "abuse", "actor", "adapt", "admit"] {
            game.submit_guess(word).unwrap();
        }
        assert_eq!(game.state(), RoundState::Lost);
        assert_eq!(game.submit_guess("crane"), Err(GuessError::RoundOver));
    }

    #[test]
    fn test_wrong_length_is_rejected_without_consuming_a_turn() {
        let mut game = WordleGame::new("crane");
        assert_eq!(game.submit_guess("cran"), Err(GuessError::WrongLength(4)));
        assert_eq!(game.submit_guess("cranes"), Err(GuessError::WrongLength(6)));
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn test_repeated_word_is_rejected() {
        let mut game = WordleGame::new("crane");
        game.submit_guess("about").unwrap();
        assert_eq!(game.submit_guess("about"), Err(GuessError::AlreadyGuessed));
        assert_eq!(game.submit_guess("ABOUT"), Err(GuessError::AlreadyGuessed));
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn test_used_keys_upgrade_but_never_downgrade() {
        let mut game = WordleGame::new("crane");
        // 'a' present in "about" at wrong spot first...
        game.submit_guess("about").unwrap();
        assert_eq!(game.used_keys()[&'a'], Present);
        // ...then correct in "brave"; 'a' must upgrade to Correct.
        game.submit_guess("brave").unwrap();
        assert_eq!(game.used_keys()[&'a'], Correct);
        // A later miss must not downgrade it.
        game.submit_guess("daily").unwrap();
        assert_eq!(game.used_keys()[&'a'], Correct);
    }

    #[test]
    fn test_guess_is_case_insensitive() {
        let mut game = WordleGame::new("CRANE");
        let scored = game.submit_guess("Crane").unwrap();
        assert!(scored.iter().all(|l| l.score == Correct));
        assert!(game.is_correct());
    }
}
