//! Match configuration.
//!
//! A `MatchConfig` fixes the tunable numbers of a match: the per-turn AP
//! baseline, hand size, lane capacities, how many rounds win the match and
//! the modifiers of the dice-based steal. It travels inside the match state
//! so a restored snapshot plays by the same rules it was saved with.
//!
//! Configs can be built in code with the `with_*` builders or loaded from
//! JSON; every field has a default so partial documents are accepted.
//!
//! ```
//! use influence_ccg::core::MatchConfig;
//!
//! let config = MatchConfig::from_json(r#"{ "hand_size": 6, "rounds_to_win": 3 }"#).unwrap();
//! assert_eq!(config.hand_size, 6);
//! assert_eq!(config.ap_per_turn, 2);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::PlayerId;

/// Capacity of each board lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneCapacity {
    pub public: usize,
    pub government: usize,
    pub instant: usize,
}

impl Default for LaneCapacity {
    fn default() -> Self {
        Self {
            public: 4,
            government: 5,
            instant: 3,
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// AP granted at the start of every turn.
    pub ap_per_turn: u32,

    /// Hand size dealt at match start and topped up after each round.
    pub hand_size: usize,

    /// Round wins needed to take the match.
    pub rounds_to_win: u32,

    /// Per-lane capacities.
    pub lane_capacity: LaneCapacity,

    /// Faces on the steal die.
    pub die_sides: u32,

    /// Steal bonus per active card in the thief's public lane.
    pub steal_ally_bonus: i32,

    /// Steal penalty when the victim has a watchdog on board.
    pub steal_watchdog_penalty: i32,

    /// Base of the automatically computed blackmail threshold.
    pub blackmail_base_roll: i32,

    /// Seat that opens the first round.
    pub first_player: PlayerId,

    /// Upper bound on events processed by a single drain.
    pub max_events_per_drain: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            ap_per_turn: 2,
            hand_size: 5,
            rounds_to_win: 2,
            lane_capacity: LaneCapacity::default(),
            die_sides: 6,
            steal_ally_bonus: 1,
            steal_watchdog_penalty: 2,
            blackmail_base_roll: 2,
            first_player: PlayerId::ONE,
            max_events_per_drain: 4096,
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ap_per_turn == 0 {
            return Err(ConfigError::Invalid {
                field: "ap_per_turn",
                reason: "must be at least 1",
            });
        }
        if self.hand_size == 0 {
            return Err(ConfigError::Invalid {
                field: "hand_size",
                reason: "must be at least 1",
            });
        }
        if self.rounds_to_win == 0 {
            return Err(ConfigError::Invalid {
                field: "rounds_to_win",
                reason: "must be at least 1",
            });
        }
        let caps = &self.lane_capacity;
        if caps.public == 0 || caps.government == 0 || caps.instant == 0 {
            return Err(ConfigError::Invalid {
                field: "lane_capacity",
                reason: "every lane needs room for at least one card",
            });
        }
        if self.die_sides < 2 {
            return Err(ConfigError::Invalid {
                field: "die_sides",
                reason: "a die needs at least two faces",
            });
        }
        if self.max_events_per_drain == 0 {
            return Err(ConfigError::Invalid {
                field: "max_events_per_drain",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Set the per-turn AP baseline.
    #[must_use]
    pub fn with_ap_per_turn(mut self, ap: u32) -> Self {
        self.ap_per_turn = ap;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the number of round wins needed.
    #[must_use]
    pub fn with_rounds_to_win(mut self, rounds: u32) -> Self {
        self.rounds_to_win = rounds;
        self
    }

    /// Set lane capacities.
    #[must_use]
    pub fn with_lane_capacity(mut self, capacity: LaneCapacity) -> Self {
        self.lane_capacity = capacity;
        self
    }

    /// Set the seat that opens the match.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Set the drain budget.
    #[must_use]
    pub fn with_max_events_per_drain(mut self, max: usize) -> Self {
        self.max_events_per_drain = max;
        self
    }
}
