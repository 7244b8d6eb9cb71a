//! Tabletop Wordle - offline word-game turn bookkeeping
//!
//! The only game logic this repository owns locally: pick a five-letter
//! solution, score up to six guesses against it, and track which keys have
//! been tried. No server involvement.

pub mod dictionary;
pub mod game;
pub mod round;

pub use dictionary::pick_solution;
pub use game::{
    GuessError, LetterScore, RoundState, ScoredGuess, ScoredLetter, WordleGame, MAX_TURNS,
    WORD_LENGTH,
};
pub use round::WordleRound;
