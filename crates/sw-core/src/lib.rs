//! Core story-traversal engine for Storyweft.
//!
//! A story is a JSON graph of nodes. Each node carries narrative text,
//! a mapping of choice labels to destination node ids, and items the
//! player picks up on entry. A [`TraversalSession`] walks the graph
//! from the `start` node, one choice at a time, until it reaches a
//! terminal node: either one whose id contains the game-over marker
//! or one with no choices left.

/// Session configuration flags.
pub mod config;
/// Error types for story loading and traversal.
pub mod error;
/// The immutable story graph.
pub mod graph;
/// A single narrative node.
pub mod node;
/// Player state management.
pub mod player;
/// The traversal state machine and console driver.
pub mod session;

pub use config::SessionConfig;
pub use error::{StoryError, StoryResult};
pub use graph::StoryGraph;
pub use node::StoryNode;
pub use player::Player;
pub use session::{Choice, Grant, TraversalSession, Turn, GAME_OVER_MARKER, START_NODE_ID};
