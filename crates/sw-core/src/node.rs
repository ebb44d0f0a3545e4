//! A single narrative node in a story graph.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One unit of narrative: the text shown on entry, the labelled
/// choices leading onward, and any items granted to the player.
///
/// Matches the story file format: a node object with the fields
/// `story_text`, `Choice`, and `items`, each optional. Unknown fields
/// are ignored; the format is lenient throughout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StoryNode {
    /// Unique node id: the key this node sits under in the story file.
    /// Filled in by the graph builder, not part of the node object.
    #[serde(skip)]
    pub id: String,

    /// Narrative text shown when the node is entered.
    #[serde(rename = "story_text", default)]
    pub text: String,

    /// Choice label to destination node id. A `null` destination is
    /// kept as `None` and never taken (it counts as an invalid
    /// choice). Destinations are not validated against the graph at
    /// load time; a dangling id fails traversal when reached.
    #[serde(rename = "Choice", default)]
    pub choices: BTreeMap<String, Option<String>>,

    /// Item ids granted unconditionally on entry.
    #[serde(default)]
    pub items: Vec<String>,
}

impl StoryNode {
    /// Whether this node offers any choices at all.
    pub fn has_choices(&self) -> bool {
        !self.choices.is_empty()
    }

    /// Resolve a choice label to its destination node id.
    ///
    /// Returns `None` for unknown labels and for labels whose
    /// destination is `null`.
    pub fn destination(&self, label: &str) -> Option<&str> {
        self.choices.get(label).and_then(|dest| dest.as_deref())
    }

    /// Choice labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.choices.keys().map(String::as_str)
    }
}
