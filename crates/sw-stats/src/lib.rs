//! Choice-frequency reporting for Storyweft stories.
//!
//! Operates on the raw JSON story source, independently of any play
//! session: a single pass counts how often each choice label appears
//! across all nodes, and a small renderer turns the counts into a
//! horizontal text bar chart.

/// Horizontal text bar charts for (label, count) tables.
pub mod chart;
/// Single-pass choice-label counting over a raw story source.
pub mod frequency;

pub use chart::BarChart;
pub use frequency::aggregate;
