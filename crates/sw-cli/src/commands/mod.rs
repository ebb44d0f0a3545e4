pub mod play;
pub mod stats;

use std::fs;
use std::path::Path;

use serde_json::Value;

/// Read and parse a JSON story file.
///
/// No retries: any failure aborts the command with a plain message.
fn load_story(path: &Path) -> Result<Value, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&raw)
        .map_err(|e| format!("invalid story JSON in {}: {e}", path.display()))
}
