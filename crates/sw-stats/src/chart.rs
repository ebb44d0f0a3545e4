//! Horizontal text bar charts for (label, count) tables.

/// Default maximum bar width, in cells.
pub const DEFAULT_WIDTH: usize = 40;

/// Renders (label, count) rows as horizontal bars scaled against the
/// largest count.
///
/// Purely presentational: it builds strings and leaves printing (and
/// any coloring) to the caller.
#[derive(Debug, Clone)]
pub struct BarChart {
    width: usize,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

impl BarChart {
    /// A chart with the default width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum bar width (at least one cell).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Render one bar for `count` scaled against `max`.
    ///
    /// A non-zero count always gets at least one cell so small values
    /// stay visible next to large ones; a zero count (or zero `max`)
    /// renders empty.
    pub fn bar(&self, count: u64, max: u64) -> String {
        if count == 0 || max == 0 {
            return String::new();
        }
        let cells = (count as f64 / max as f64 * self.width as f64).round() as usize;
        "█".repeat(cells.max(1))
    }

    /// Render a whole chart: one `label  bar count` line per row,
    /// labels padded to a common width.
    pub fn render(&self, rows: &[(String, u64)]) -> String {
        let max = rows.iter().map(|(_, count)| *count).max().unwrap_or(0);
        let label_width = rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for (label, count) in rows {
            out.push_str(&format!(
                "{label:<label_width$}  {} {count}\n",
                self.bar(*count, max)
            ));
        }
        out
    }
}
