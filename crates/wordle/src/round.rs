//! Round-to-round bookkeeping
//!
//! Tracks which solutions have been played so a reset never repeats one,
//! mirroring the original front-end's word-history state.

use crate::dictionary::pick_solution;
use crate::game::WordleGame;

/// A sequence of rounds over the shared dictionary.
#[derive(Debug, Clone)]
pub struct WordleRound {
    history: Vec<String>,
    game: WordleGame,
}

impl WordleRound {
    /// Start with a fresh random solution. `None` only when the dictionary
    /// is empty.
    pub fn new() -> Option<Self> {
        let solution = pick_solution(&[])?;
        Some(Self {
            history: Vec::new(),
            game: WordleGame::new(solution),
        })
    }

    pub fn game(&self) -> &WordleGame {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut WordleGame {
        &mut self.game
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Retire the current solution and roll a new one not yet played.
    /// Returns false (leaving the finished game in place) when every word
    /// has been used.
    pub fn reset(&mut self) -> bool {
        let mut history = self.history.clone();
        history.push(self.game.solution().to_string());
        match pick_solution(&history) {
            Some(solution) => {
                self.history = history;
                self.game = WordleGame::new(solution);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoundState;

    #[test]
    fn test_reset_retires_the_solution() {
        let mut round = WordleRound::new().expect("dictionary is not empty");
        let first = round.game().solution().to_string();

        assert!(round.reset());
        assert_eq!(round.history(), &[first.clone()]);
        assert_ne!(round.game().solution(), first);
        assert_eq!(round.game().state(), RoundState::InProgress);
    }

    #[test]
    fn test_consecutive_resets_never_repeat() {
        let mut round = WordleRound::new().expect("dictionary is not empty");
        for _ in 0..20 {
            let current = round.game().solution().to_string();
            assert!(!round.history().contains(&current));
            assert!(round.reset());
        }
    }
}
