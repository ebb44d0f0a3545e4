//! Player state management.

use std::collections::BTreeSet;
use std::ops::{Add, Sub};

/// Health every player starts a session with, regardless of what was
/// requested. See [`Player::with_requested_health`].
pub const STARTING_HEALTH: i64 = 100;

/// The player's state for one traversal session.
///
/// Created once when the session starts. The inventory only ever
/// grows during traversal (there is no removal operation); health
/// changes only through the pure `+`/`-` operators, which produce a
/// new `Player` rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Player name, set at creation.
    pub name: String,
    /// Items currently held. Duplicates collapse. See
    /// [`Player::add_item`] for the replacement caveat.
    pub inventory: BTreeSet<String>,
    /// Health points. Never clamped; see [`Player::is_alive`].
    pub health: i64,
}

impl Player {
    /// Create a player with an empty inventory and health
    /// [`STARTING_HEALTH`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inventory: BTreeSet::new(),
            health: STARTING_HEALTH,
        }
    }

    /// Create a player, accepting a requested starting health that is
    /// then ignored: health always starts at [`STARTING_HEALTH`].
    ///
    /// Starting health has always been pinned this way, and the CLI
    /// `--health` flag relies on the behavior being observable, so it
    /// stays the contract. Callers that
    /// want the requested value honored opt in through
    /// [`crate::SessionConfig::honor_requested_health`] and
    /// [`Player::with_health`].
    pub fn with_requested_health(name: impl Into<String>, _requested: i64) -> Self {
        Self::new(name)
    }

    /// Create a player whose starting health is actually honored.
    pub fn with_health(name: impl Into<String>, health: i64) -> Self {
        Self {
            health,
            ..Self::new(name)
        }
    }

    /// Replace the inventory with a singleton containing `item`.
    ///
    /// Legacy behavior, kept literally: the inventory container is
    /// reset before every insertion, so only the most recently
    /// granted item is ever held. Almost certainly unintended
    /// upstream, but it is the documented default contract.
    /// [`Player::accumulate_item`] is the corrected
    /// variant, selected per session with
    /// [`crate::SessionConfig::accumulate_items`].
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory = BTreeSet::new();
        self.inventory.insert(item.into());
    }

    /// Insert `item` without discarding what is already held.
    pub fn accumulate_item(&mut self, item: impl Into<String>) {
        self.inventory.insert(item.into());
    }

    /// All held items concatenated with no separator; `""` when the
    /// inventory is empty.
    pub fn display_inventory(&self) -> String {
        self.inventory.iter().cloned().collect()
    }

    /// Whether the player is alive: strictly positive health. Exactly
    /// zero counts as dead.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Heal: a new player with `health + delta`. No upper bound.
impl Add<i64> for Player {
    type Output = Player;

    fn add(self, delta: i64) -> Player {
        Player {
            health: self.health + delta,
            ..self
        }
    }
}

/// Damage: a new player with `health - delta`. Not clamped at zero.
impl Sub<i64> for Player {
    type Output = Player;

    fn sub(self, delta: i64) -> Player {
        Player {
            health: self.health - delta,
            ..self
        }
    }
}
