//! Player identities.

use crate::error::PlayerSetupError;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Move-selection strategy for computer players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Strategy {
    /// Uniformly random empty cell.
    #[strum(to_string = "random", serialize = "r")]
    Random,
    /// Win, block, center, corner, edge.
    #[default]
    #[serde(alias = "smart")]
    #[strum(to_string = "heuristic", serialize = "smart", serialize = "s")]
    Heuristic,
}

/// Who chooses a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from outside the engine.
    #[default]
    Human,
    /// Moves come from a [`crate::MoveSelector`].
    Computer(Strategy),
}

/// A player in a game session: a display name paired with a mark.
///
/// Names are trimmed and must not be empty. A player never changes after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    mark: Mark,
    kind: PlayerKind,
}

impl Player {
    /// Creates a human player.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerSetupError`] if the name is blank.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, mark: Mark) -> Result<Self, PlayerSetupError> {
        Self::with_kind(name, mark, PlayerKind::Human)
    }

    /// Creates a computer-controlled player using the given strategy.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerSetupError`] if the name is blank.
    #[instrument(skip(name))]
    pub fn computer(
        name: impl Into<String>,
        mark: Mark,
        strategy: Strategy,
    ) -> Result<Self, PlayerSetupError> {
        Self::with_kind(name, mark, PlayerKind::Computer(strategy))
    }

    /// Creates a player of any kind.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerSetupError`] if the name is blank.
    pub fn with_kind(
        name: impl Into<String>,
        mark: Mark,
        kind: PlayerKind,
    ) -> Result<Self, PlayerSetupError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            warn!(%mark, "Rejected blank player name");
            return Err(PlayerSetupError::new("Player name cannot be empty"));
        }

        debug!(name = trimmed, %mark, ?kind, "Created player");
        Ok(Self {
            name: trimmed.to_string(),
            mark,
            kind,
        })
    }

    /// Returns the player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns who chooses this player's moves.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Returns the strategy for computer players, `None` for humans.
    pub fn strategy(&self) -> Option<Strategy> {
        match self.kind {
            PlayerKind::Human => None,
            PlayerKind::Computer(strategy) => Some(strategy),
        }
    }

    /// Checks if a selector picks this player's moves.
    pub fn is_computer(&self) -> bool {
        self.strategy().is_some()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}
