//! Board vocabulary types and the authoritative game snapshot
//!
//! The server encodes players and ownership as small integers on the wire
//! (`0` unclaimed, `1`/`2` for the players), edge pairs as two-element
//! `[h, v]` arrays, and scores as an object keyed by `"1"`/`"2"`. The types
//! here mirror that encoding exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dot-grid dimension used by the server (8x8 dots).
pub const BOARD_SIZE: usize = 8;

/// Box-grid dimension (one less than the dot grid).
pub const BOXES_SIZE: usize = BOARD_SIZE - 1;

/// One of the two active player slots.
///
/// Wire form is the bare integer `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    /// The other player slot.
    pub fn opponent(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }
}

impl TryFrom<u8> for PlayerSlot {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(PlayerSlot::One),
            2 => Ok(PlayerSlot::Two),
            other => Err(format!("invalid player slot: {other}")),
        }
    }
}

impl From<PlayerSlot> for u8 {
    fn from(slot: PlayerSlot) -> u8 {
        match slot {
            PlayerSlot::One => 1,
            PlayerSlot::Two => 2,
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Ownership of a single edge or box.
///
/// Wire form is `0` (unclaimed), `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum Claim {
    #[default]
    Unclaimed,
    PlayerOne,
    PlayerTwo,
}

impl Claim {
    /// The claiming player, if any.
    pub fn owner(self) -> Option<PlayerSlot> {
        match self {
            Claim::Unclaimed => None,
            Claim::PlayerOne => Some(PlayerSlot::One),
            Claim::PlayerTwo => Some(PlayerSlot::Two),
        }
    }

    pub fn is_claimed(self) -> bool {
        self != Claim::Unclaimed
    }
}

impl TryFrom<u8> for Claim {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Claim::Unclaimed),
            1 => Ok(Claim::PlayerOne),
            2 => Ok(Claim::PlayerTwo),
            other => Err(format!("invalid claim value: {other}")),
        }
    }
}

impl From<Claim> for u8 {
    fn from(claim: Claim) -> u8 {
        match claim {
            Claim::Unclaimed => 0,
            Claim::PlayerOne => 1,
            Claim::PlayerTwo => 2,
        }
    }
}

/// Recorded game outcome.
///
/// The server keeps `winner: 0` until a player wins, so an absent or zero
/// winner both decode to [`Winner::None`]. A drawn finished board is also
/// observed as zero; the client does not distinguish it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum Winner {
    #[default]
    None,
    PlayerOne,
    PlayerTwo,
}

impl Winner {
    /// The winning player, if one has been recorded.
    pub fn as_slot(self) -> Option<PlayerSlot> {
        match self {
            Winner::None => None,
            Winner::PlayerOne => Some(PlayerSlot::One),
            Winner::PlayerTwo => Some(PlayerSlot::Two),
        }
    }

    pub fn is_decided(self) -> bool {
        self != Winner::None
    }
}

impl TryFrom<u8> for Winner {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Winner::None),
            1 => Ok(Winner::PlayerOne),
            2 => Ok(Winner::PlayerTwo),
            other => Err(format!("invalid winner value: {other}")),
        }
    }
}

impl From<Winner> for u8 {
    fn from(winner: Winner) -> u8 {
        match winner {
            Winner::None => 0,
            Winner::PlayerOne => 1,
            Winner::PlayerTwo => 2,
        }
    }
}

/// Edge orientation, `"h"` or `"v"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    H,
    V,
}

/// Per-cell edge ownership pair, serialized as a `[h, v]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EdgePair(pub Claim, pub Claim);

impl EdgePair {
    pub fn horizontal(self) -> Claim {
        self.0
    }

    pub fn vertical(self) -> Claim {
        self.1
    }
}

/// Per-player box counts, keyed `"1"` / `"2"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Scores {
    #[serde(rename = "1")]
    pub player_one: u32,
    #[serde(rename = "2")]
    pub player_two: u32,
}

impl Scores {
    pub fn for_slot(&self, slot: PlayerSlot) -> u32 {
        match slot {
            PlayerSlot::One => self.player_one,
            PlayerSlot::Two => self.player_two,
        }
    }
}

/// Complete, self-contained game state broadcast by the server.
///
/// Every inbound snapshot fully supersedes the prior one; no field is ever
/// merged from an earlier message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Edge ownership per dot-grid cell.
    pub board: Vec<Vec<EdgePair>>,
    /// Box ownership per box-grid cell.
    pub boxes: Vec<Vec<Claim>>,
    pub scores: Scores,
    pub current_player: PlayerSlot,
    #[serde(default)]
    pub winner: Winner,
}

impl GameSnapshot {
    /// An all-unclaimed snapshot sized like the server's board, used as the
    /// local placeholder before the first state message arrives.
    pub fn empty() -> Self {
        Self {
            board: vec![vec![EdgePair::default(); BOARD_SIZE]; BOARD_SIZE],
            boxes: vec![vec![Claim::Unclaimed; BOXES_SIZE]; BOXES_SIZE],
            scores: Scores::default(),
            current_player: PlayerSlot::One,
            winner: Winner::None,
        }
    }

    /// Edge ownership at the given cell, or `None` when out of range.
    pub fn edge(&self, row: usize, col: usize, orientation: Orientation) -> Option<Claim> {
        let pair = self.board.get(row)?.get(col)?;
        Some(match orientation {
            Orientation::H => pair.horizontal(),
            Orientation::V => pair.vertical(),
        })
    }

    /// Box ownership at the given cell, or `None` when out of range.
    pub fn box_at(&self, row: usize, col: usize) -> Option<Claim> {
        self.boxes.get(row)?.get(col).copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
