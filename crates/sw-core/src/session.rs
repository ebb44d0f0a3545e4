//! The traversal state machine and its blocking console driver.

use std::io::{BufRead, Write};

use crate::config::SessionConfig;
use crate::error::{StoryError, StoryResult};
use crate::graph::StoryGraph;
use crate::player::Player;

/// Node id every session starts at.
pub const START_NODE_ID: &str = "start";

/// Substring marking a node as a game-over ending.
///
/// Matched by containment, not equality, so `game_over_good` and
/// `game_over_bad` both end the game.
pub const GAME_OVER_MARKER: &str = "game_over";

/// Where a session currently is: at a node, or done.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Active(String),
    Terminal,
}

/// One item grant reported during a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    /// The granted item id.
    pub item: String,
    /// Inventory display immediately after this grant.
    pub inventory: String,
}

/// What happened on entering the active node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The node id contains [`GAME_OVER_MARKER`]: the story ends with
    /// the Game Over banner. No items are granted and no choice is
    /// solicited, even when the node lists choices.
    GameOver {
        /// Narrative text of the ending node.
        text: String,
        /// Final inventory display.
        inventory: String,
    },
    /// The node has no choices: the story simply stops, without the
    /// Game Over banner.
    End {
        /// Narrative text of the last node.
        text: String,
        /// Items granted on entry, in grant order.
        granted: Vec<Grant>,
    },
    /// A regular node: narrative shown, items granted, now awaiting
    /// one of the offered choices.
    Prompt {
        /// Narrative text.
        text: String,
        /// Items granted on entry, in grant order.
        granted: Vec<Grant>,
        /// Choice labels on offer, in display order.
        labels: Vec<String>,
    },
}

/// Outcome of submitting a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// The input matched a choice with a destination; the session
    /// moved to that node.
    Taken(String),
    /// Unrecognized input, or a choice with a `null` destination. The
    /// session did not move; prompt again. This is an expected user
    /// condition, never an error.
    Invalid,
}

/// One traversal session: a story graph walked by one player.
///
/// The session is the state machine `{ Active(node_id), Terminal }`.
/// [`TraversalSession::turn`] enters the active node and reports what
/// happened; [`TraversalSession::choose`] consumes one line of player
/// input. [`TraversalSession::run`] wires both to a blocking
/// line-oriented console.
pub struct TraversalSession {
    graph: StoryGraph,
    player: Player,
    config: SessionConfig,
    state: State,
}

impl TraversalSession {
    /// Start a session at [`START_NODE_ID`] with default
    /// configuration.
    pub fn new(graph: StoryGraph, player: Player) -> Self {
        Self::with_config(graph, player, SessionConfig::default())
    }

    /// Start a session at [`START_NODE_ID`] with explicit
    /// configuration.
    pub fn with_config(graph: StoryGraph, player: Player, config: SessionConfig) -> Self {
        Self {
            graph,
            player,
            config,
            state: State::Active(START_NODE_ID.to_string()),
        }
    }

    /// Start a session at an arbitrary node instead of
    /// [`START_NODE_ID`].
    pub fn at_node(graph: StoryGraph, player: Player, node_id: impl Into<String>) -> Self {
        Self {
            state: State::Active(node_id.into()),
            ..Self::new(graph, player)
        }
    }

    /// The player as it currently stands.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The story graph this session walks.
    pub fn graph(&self) -> &StoryGraph {
        &self.graph
    }

    /// Whether the session has reached the terminal state.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Terminal)
    }

    /// Id of the active node, or `None` once the session is over.
    pub fn current_node_id(&self) -> Option<&str> {
        match &self.state {
            State::Active(id) => Some(id),
            State::Terminal => None,
        }
    }

    /// Enter the active node and report what happened, or `None` when
    /// the session is already over.
    ///
    /// Fails with [`StoryError::NodeNotFound`] when the active id is
    /// absent from the graph: a dangling choice destination is fatal
    /// mid-traversal, there is no fallback node.
    pub fn turn(&mut self) -> StoryResult<Option<Turn>> {
        let id = match &self.state {
            State::Active(id) => id.clone(),
            State::Terminal => return Ok(None),
        };

        let node = self
            .graph
            .get(&id)
            .ok_or_else(|| StoryError::NodeNotFound(id.clone()))?;

        if id.contains(GAME_OVER_MARKER) {
            let text = node.text.clone();
            self.state = State::Terminal;
            return Ok(Some(Turn::GameOver {
                text,
                inventory: self.player.display_inventory(),
            }));
        }

        let text = node.text.clone();
        let items = node.items.clone();
        let labels: Vec<String> = node.labels().map(str::to_string).collect();

        let mut granted = Vec::with_capacity(items.len());
        for item in items {
            if self.config.accumulate_items {
                self.player.accumulate_item(item.clone());
            } else {
                self.player.add_item(item.clone());
            }
            granted.push(Grant {
                item,
                inventory: self.player.display_inventory(),
            });
        }

        if labels.is_empty() {
            self.state = State::Terminal;
            return Ok(Some(Turn::End { text, granted }));
        }

        Ok(Some(Turn::Prompt {
            text,
            granted,
            labels,
        }))
    }

    /// Submit a choice for the node awaiting input.
    ///
    /// Surrounding whitespace is trimmed before matching. A label with
    /// a non-null destination advances the session; anything else
    /// leaves the state untouched so the caller can prompt again, as
    /// many times as it takes.
    pub fn choose(&mut self, input: &str) -> Choice {
        let id = match &self.state {
            State::Active(id) => id.clone(),
            State::Terminal => return Choice::Invalid,
        };

        let trimmed = input.trim();
        let next = self
            .graph
            .get(&id)
            .and_then(|node| node.destination(trimmed))
            .map(str::to_string);

        match next {
            Some(next_id) => {
                self.state = State::Active(next_id.clone());
                Choice::Taken(next_id)
            }
            None => Choice::Invalid,
        }
    }

    /// Drive the session over a blocking line-oriented console.
    ///
    /// Reads one line per choice from `input` and writes the
    /// narrative transcript to `output`. Invalid choices re-prompt
    /// indefinitely. End-of-input while a choice is pending ends the
    /// session quietly; a live console never hits that case.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> StoryResult<()> {
        while let Some(turn) = self.turn()? {
            match turn {
                Turn::GameOver { text, inventory } => {
                    writeln!(output, "{text}")?;
                    writeln!(output, "Game Over")?;
                    writeln!(output, "Inventory: {inventory}")?;
                    writeln!(output)?;
                }
                Turn::End { text, granted } => {
                    writeln!(output)?;
                    writeln!(output, "{text}")?;
                    writeln!(output)?;
                    write_grants(&mut output, &granted)?;
                }
                Turn::Prompt {
                    text,
                    granted,
                    labels,
                } => {
                    writeln!(output)?;
                    writeln!(output, "{text}")?;
                    writeln!(output)?;
                    write_grants(&mut output, &granted)?;

                    loop {
                        for label in &labels {
                            writeln!(output, "{label}:")?;
                        }
                        write!(output, "Enter your choice: ")?;
                        output.flush()?;

                        let mut line = String::new();
                        if input.read_line(&mut line)? == 0 {
                            // Out of input; nobody left to choose.
                            self.state = State::Terminal;
                            return Ok(());
                        }

                        match self.choose(&line) {
                            Choice::Taken(_) => break,
                            Choice::Invalid => {
                                writeln!(output, "Invalid choice. Please try again")?;
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn write_grants<W: Write>(output: &mut W, granted: &[Grant]) -> std::io::Result<()> {
    for grant in granted {
        writeln!(output, "{} added to inventory", grant.item)?;
        writeln!(output, "Inventory: {}", grant.inventory)?;
        writeln!(output)?;
    }
    Ok(())
}
