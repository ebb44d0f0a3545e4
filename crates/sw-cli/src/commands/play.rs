//! The `play` subcommand: run one traversal session on the console.

use std::io::{self, BufRead, Write};
use std::path::Path;

use sw_core::{Player, SessionConfig, StoryGraph, TraversalSession};

pub fn run(
    file: &Path,
    fallback_name: &str,
    health: i64,
    accumulate_items: bool,
    honor_health: bool,
) -> Result<(), String> {
    let source = super::load_story(file)?;
    let graph = StoryGraph::from_value(source).map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    // The observed flow always asks, whatever flags were passed.
    print!("Enter your name: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    reader.read_line(&mut line).map_err(|e| e.to_string())?;
    let entered = line.trim();
    let name = if entered.is_empty() {
        fallback_name
    } else {
        entered
    };

    let player = if honor_health {
        Player::with_health(name, health)
    } else {
        Player::with_requested_health(name, health)
    };

    let config = SessionConfig::default()
        .with_accumulate_items(accumulate_items)
        .with_honor_requested_health(honor_health);

    let mut session = TraversalSession::with_config(graph, player, config);
    session.run(reader, io::stdout()).map_err(|e| e.to_string())
}
