//! Error types for story loading and traversal.

use thiserror::Error;

/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while loading or traversing a story.
///
/// Invalid player input is deliberately not represented here: it is a
/// recoverable condition modelled as [`crate::session::Choice::Invalid`]
/// and answered by re-prompting, never by failing the session.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The story source is not valid JSON at all.
    #[error("invalid story JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The story source parsed but is not a mapping of node ids to
    /// node objects.
    #[error("malformed story: {0}")]
    MalformedStory(String),

    /// Traversal reached a node id that is absent from the graph.
    /// Fatal: a dangling choice destination has no fallback node.
    #[error("story node not found: \"{0}\"")]
    NodeNotFound(String),

    /// Reading player input or writing narrative text failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
