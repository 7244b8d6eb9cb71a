//! Terminal rendering for the Dots and Boxes board
//!
//! Player 1 draws thin lines, player 2 double lines; claimed boxes carry the
//! owner's number. All pure string building, shared by the play loop and its
//! tests.

use tabletop_client::{ConnectionState, GameView};
use tabletop_protocol::{Claim, GameSnapshot, Orientation, PlayerSlot};

/// Render the dot grid with edges and claimed boxes.
pub fn render_board(snapshot: &GameSnapshot) -> String {
    let n = snapshot.board.len();
    let mut lines = Vec::new();

    for r in 0..n {
        let mut dots = String::new();
        for c in 0..n {
            dots.push('•');
            if c + 1 < n {
                dots.push_str(match snapshot.edge(r, c, Orientation::H) {
                    Some(Claim::PlayerOne) => "───",
                    Some(Claim::PlayerTwo) => "═══",
                    _ => "   ",
                });
            }
        }
        lines.push(dots.trim_end().to_string());

        if r + 1 < n {
            let mut walls = String::new();
            for c in 0..n {
                walls.push(match snapshot.edge(r, c, Orientation::V) {
                    Some(Claim::PlayerOne) => '│',
                    Some(Claim::PlayerTwo) => '║',
                    _ => ' ',
                });
                if c + 1 < n {
                    walls.push_str(match snapshot.box_at(r, c) {
                        Some(Claim::PlayerOne) => " 1 ",
                        Some(Claim::PlayerTwo) => " 2 ",
                        _ => "   ",
                    });
                }
            }
            lines.push(walls.trim_end().to_string());
        }
    }

    lines.join("\n")
}

/// One-line game status under the board.
pub fn render_status(view: &GameView, state: ConnectionState, local: PlayerSlot) -> String {
    let snapshot = &view.snapshot;
    let mut status = format!(
        "Player 1: {} | Player 2: {} | current: player {} | you: player {} | {}",
        snapshot.scores.player_one,
        snapshot.scores.player_two,
        snapshot.current_player,
        local,
        state_label(state),
    );
    if let Some(winner) = snapshot.winner.as_slot() {
        status.push_str(&format!(" | winner: player {winner}"));
    }
    if view.spectators > 0 {
        status.push_str(&format!(" | {} spectating", view.spectators));
    }
    status
}

pub fn state_label(state: ConnectionState) -> &'static str {
    match state {
        ConnectionState::Disconnected => "disconnected",
        ConnectionState::Connecting => "connecting...",
        ConnectionState::Connected => "connected",
        ConnectionState::Reconnecting => "reconnecting...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabletop_protocol::{EdgePair, Scores, Winner};

    fn two_by_two() -> GameSnapshot {
        // One horizontal edge for player 1 on top, one vertical double line
        // for player 2 on the left, box claimed by player 1.
        GameSnapshot {
            board: vec![
                vec![
                    EdgePair(Claim::PlayerOne, Claim::PlayerTwo),
                    EdgePair(Claim::Unclaimed, Claim::Unclaimed),
                ],
                vec![
                    EdgePair(Claim::Unclaimed, Claim::Unclaimed),
                    EdgePair(Claim::Unclaimed, Claim::Unclaimed),
                ],
            ],
            boxes: vec![vec![Claim::PlayerOne]],
            scores: Scores {
                player_one: 1,
                player_two: 0,
            },
            current_player: PlayerSlot::Two,
            winner: Winner::None,
        }
    }

    #[test]
    fn test_render_two_by_two_board() {
        let rendered = render_board(&two_by_two());
        let expected = "•───•\n║ 1\n•   •";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_empty_board_has_no_edges() {
        let rendered = render_board(&GameSnapshot::empty());
        assert!(!rendered.contains('─'));
        assert!(!rendered.contains('║'));
        assert!(rendered.contains('•'));
    }

    #[test]
    fn test_status_line_includes_scores_and_turn() {
        let view = GameView {
            snapshot: two_by_two(),
            viewers: 0,
            spectators: 0,
        };
        let status = render_status(&view, ConnectionState::Connected, PlayerSlot::One);
        assert_eq!(
            status,
            "Player 1: 1 | Player 2: 0 | current: player 2 | you: player 1 | connected"
        );
    }

    #[test]
    fn test_status_line_reports_winner_and_spectators() {
        let mut view = GameView {
            snapshot: two_by_two(),
            viewers: 5,
            spectators: 3,
        };
        view.snapshot.winner = Winner::PlayerTwo;
        let status = render_status(&view, ConnectionState::Connected, PlayerSlot::Two);
        assert!(status.ends_with("| winner: player 2 | 3 spectating"));
    }
}
