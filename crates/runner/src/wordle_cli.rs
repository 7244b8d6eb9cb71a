//! Offline word-guessing REPL
//!
//! Runs entirely locally; no session or socket involved.

use std::io::{BufRead, Write};

use tabletop_wordle::{LetterScore, RoundState, ScoredGuess, WordleRound, MAX_TURNS};

pub fn run() -> anyhow::Result<()> {
    let Some(mut round) = WordleRound::new() else {
        anyhow::bail!("dictionary is empty");
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();

    println!("Guess the five-letter word. Type quit to leave.");
    loop {
        let turn = round.game().guesses().len();
        write!(stdout, "guess {}/{}> ", turn + 1, MAX_TURNS)?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if word.eq_ignore_ascii_case("quit") {
            break;
        }

        match round.game_mut().submit_guess(word) {
            Ok(scored) => println!("{}", format_scored(&scored)),
            Err(err) => {
                println!("{err}");
                continue;
            }
        }

        match round.game().state() {
            RoundState::InProgress => {}
            RoundState::Won => {
                let turns = round.game().guesses().len();
                println!("Got it in {turns}.");
                if !round.reset() {
                    println!("No more words available.");
                    break;
                }
                println!("New round.");
            }
            RoundState::Lost => {
                println!("Out of turns. The word was {}.", round.game().solution());
                if !round.reset() {
                    println!("No more words available.");
                    break;
                }
                println!("New round.");
            }
        }
    }
    Ok(())
}

/// Renders a scored guess as one line: `[C]` correct, `(c)` present,
/// ` c ` absent.
fn format_scored(scored: &ScoredGuess) -> String {
    scored
        .iter()
        .map(|letter| match letter.score {
            LetterScore::Correct => format!("[{}]", letter.letter.to_ascii_uppercase()),
            LetterScore::Present => format!("({})", letter.letter),
            LetterScore::Absent => format!(" {} ", letter.letter),
        })
        .collect()
}
