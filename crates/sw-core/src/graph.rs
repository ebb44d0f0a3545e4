//! The immutable story graph.

use std::collections::HashMap;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{StoryError, StoryResult};
use crate::node::StoryNode;

/// Mapping of node id to [`StoryNode`], built once from a parsed
/// story source and read-only afterwards.
///
/// Exactly one traversal session owns a graph at a time; the session
/// never mutates it.
#[derive(Debug, Clone, Default)]
pub struct StoryGraph {
    nodes: HashMap<String, StoryNode>,
}

impl StoryGraph {
    /// Build a graph from a parsed JSON story source.
    ///
    /// The source must be an object mapping node ids to node objects
    /// (fields `story_text`, `Choice`, `items`, each optional);
    /// anything else fails with [`StoryError::MalformedStory`].
    ///
    /// Choice destinations are not validated here. A destination that
    /// names no node surfaces as [`StoryError::NodeNotFound`] when the
    /// traversal reaches it, matching the lenient loader this format
    /// comes from.
    pub fn from_value(source: Value) -> StoryResult<Self> {
        if !source.is_object() {
            return Err(StoryError::MalformedStory(
                "story source must be an object mapping node ids to node data".to_string(),
            ));
        }

        let raw: HashMap<String, StoryNode> = serde_json::from_value(source)
            .map_err(|e| StoryError::MalformedStory(e.to_string()))?;

        let nodes = raw
            .into_iter()
            .map(|(id, mut node)| {
                node.id = id.clone();
                (id, node)
            })
            .collect();

        Ok(Self { nodes })
    }

    /// Look up a node by id.
    ///
    /// Lenient by design: an absent id yields `None`. The session is
    /// the one that escalates a miss on its active node to the fatal
    /// [`StoryError::NodeNotFound`].
    pub fn get(&self, node_id: &str) -> Option<&StoryNode> {
        self.nodes.get(node_id)
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, node_id: &str) -> bool {
        self.nodes.contains_key(node_id)
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &StoryNode> {
        self.nodes.values()
    }
}

impl FromStr for StoryGraph {
    type Err = StoryError;

    fn from_str(s: &str) -> StoryResult<Self> {
        let source: Value = serde_json::from_str(s)?;
        Self::from_value(source)
    }
}
