//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe::{GameSession, Mark, Player, PlayerKind, PlayerSetupError, Strategy};
use tracing::{debug, info, instrument};

/// Whether a seat is played from the keyboard or by the computer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum PlayerType {
    /// Moves typed as `row,col`.
    #[default]
    #[strum(to_string = "human", serialize = "h")]
    Human,
    /// Moves picked by a selector.
    #[strum(to_string = "computer", serialize = "c")]
    Computer,
}

/// Configuration for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name. Falls back to "Player X" / "Computer X" style defaults.
    #[serde(default)]
    name: Option<String>,

    /// Human or computer.
    #[serde(default)]
    kind: PlayerType,

    /// Strategy for computer seats; ignored for humans.
    #[serde(default = "default_strategy")]
    strategy: Strategy,
}

fn default_strategy() -> Strategy {
    Strategy::default()
}

impl PlayerConfig {
    /// Creates a seat configuration.
    pub fn new(name: Option<String>, kind: PlayerType, strategy: Strategy) -> Self {
        Self {
            name,
            kind,
            strategy,
        }
    }

    /// Human seat with a name.
    pub fn human(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()), PlayerType::Human, default_strategy())
    }

    /// Computer seat with a name and strategy.
    pub fn computer(name: impl Into<String>, strategy: Strategy) -> Self {
        Self::new(Some(name.into()), PlayerType::Computer, strategy)
    }

    /// Builds the player for the given mark.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerSetupError`] if a configured name is blank.
    #[instrument(skip(self))]
    pub fn to_player(&self, mark: Mark) -> Result<Player, PlayerSetupError> {
        let name = match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => default_name(self.kind, mark),
        };
        let kind = match self.kind {
            PlayerType::Human => PlayerKind::Human,
            PlayerType::Computer => PlayerKind::Computer(self.strategy),
        };
        Player::with_kind(name, mark, kind)
    }
}

/// Default seat name, e.g. "Player X" or "Computer O".
pub fn default_name(kind: PlayerType, mark: Mark) -> String {
    match kind {
        PlayerType::Human => format!("Player {}", mark),
        PlayerType::Computer => format!("Computer {}", mark),
    }
}

/// Full game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seat holding X (moves first).
    #[serde(default)]
    player_x: PlayerConfig,

    /// Seat holding O.
    #[serde(default)]
    player_o: PlayerConfig,

    /// Seed for computer move selection; random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration from two seats.
    pub fn new(player_x: PlayerConfig, player_o: PlayerConfig, seed: Option<u64>) -> Self {
        Self {
            player_x,
            player_o,
            seed,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            player_x = ?config.player_x.kind,
            player_o = ?config.player_o.kind,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Builds a session from the configured seats.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerSetupError`] if either seat cannot become a player.
    #[instrument(skip(self))]
    pub fn build_session(&self) -> Result<GameSession, PlayerSetupError> {
        GameSession::new(
            self.player_x.to_player(Mark::X)?,
            self.player_o.to_player(Mark::O)?,
        )
    }

    /// Returns a copy with the seed replaced when one is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_two_humans() {
        let config = GameConfig::from_toml("").unwrap();
        let session = config.build_session().unwrap();
        assert_eq!(session.player_x().name(), "Player X");
        assert_eq!(session.player_o().name(), "Player O");
        assert!(!session.player_x().is_computer());
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_parses_computer_seat() {
        let config = GameConfig::from_toml(
            r#"
seed = 7

[player_x]
name = "Alice"

[player_o]
kind = "computer"
strategy = "smart"
"#,
        )
        .unwrap();
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(config.player_o().kind(), &PlayerType::Computer);

        let session = config.build_session().unwrap();
        assert_eq!(session.player_x().name(), "Alice");
        assert_eq!(session.player_o().name(), "Computer O");
        assert_eq!(session.player_o().strategy(), Some(Strategy::Heuristic));
    }

    #[test]
    fn test_rejects_unknown_kind() {
        let err = GameConfig::from_toml("[player_x]\nkind = \"robot\"\n").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_blank_name_uses_default() {
        let seat = PlayerConfig::new(Some("  ".into()), PlayerType::Computer, Strategy::Random);
        let player = seat.to_player(Mark::X).unwrap();
        assert_eq!(player.name(), "Computer X");
        assert_eq!(player.strategy(), Some(Strategy::Random));
    }

    #[test]
    fn test_with_seed_overrides_only_when_given() {
        let config = GameConfig::new(PlayerConfig::default(), PlayerConfig::default(), Some(1));
        assert_eq!(*config.clone().with_seed(None).seed(), Some(1));
        assert_eq!(*config.with_seed(Some(5)).seed(), Some(5));
    }

    #[test]
    fn test_default_seat_is_heuristic_human() {
        let seat = PlayerConfig::default();
        assert_eq!(seat.kind(), &PlayerType::Human);
        assert_eq!(seat.strategy(), &Strategy::Heuristic);
        assert_eq!(seat.name(), &None);

        let config = GameConfig::from_toml("[player_o]\nkind = \"computer\"\n").unwrap();
        assert_eq!(config.player_o().strategy(), &Strategy::Heuristic);
    }

    #[test]
    fn test_player_type_parsing() {
        assert_eq!("h".parse::<PlayerType>(), Ok(PlayerType::Human));
        assert_eq!("C".parse::<PlayerType>(), Ok(PlayerType::Computer));
        assert_eq!("computer".parse::<PlayerType>(), Ok(PlayerType::Computer));
        assert!("x".parse::<PlayerType>().is_err());
    }
}
